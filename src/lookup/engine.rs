use std::sync::Arc;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::mpsc::{
    UnboundedReceiver, UnboundedSender, error::TryRecvError, unbounded_channel,
};
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};

use super::cache::LookupCache;

/// A fallible, synchronous candidate lookup. Runs on the lookup worker.
pub trait CandidateSource<C>: Send + Sync {
    fn search(&self, query: &str) -> AppResult<Vec<C>>;
}

impl<C, F> CandidateSource<C> for F
where
    F: Fn(&str) -> AppResult<Vec<C>> + Send + Sync,
{
    fn search(&self, query: &str) -> AppResult<Vec<C>> {
        self(query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent<C> {
    Completed {
        generation: u64,
        query: String,
        items: Vec<C>,
    },
    Failed {
        generation: u64,
        message: String,
    },
}

impl<C> LookupEvent<C> {
    pub fn generation(&self) -> u64 {
        match self {
            Self::Completed { generation, .. } | Self::Failed { generation, .. } => *generation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    pub max_results: Option<usize>,
    pub cache_entries: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            cache_entries: 64,
        }
    }
}

struct LookupJob {
    generation: u64,
    query: String,
}

enum WorkerRequest {
    Query(LookupJob),
    Shutdown,
}

enum WorkerControl {
    Continue,
    Shutdown,
}

/// Runs a [`CandidateSource`] off the UI thread. Every submission gets a
/// fresh generation; the worker only ever runs the newest queued request.
pub struct LookupEngine<C> {
    request_tx: UnboundedSender<WorkerRequest>,
    event_rx: UnboundedReceiver<LookupEvent<C>>,
    next_generation: u64,
    _runtime: LookupWorkerRuntime,
    worker: Option<JoinHandle<()>>,
}

struct LookupWorkerRuntime {
    _owned: Option<Runtime>,
    handle: Handle,
}

impl LookupWorkerRuntime {
    fn new() -> AppResult<Self> {
        if let Ok(handle) = Handle::try_current() {
            return Ok(Self {
                _owned: None,
                handle,
            });
        }

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("desk-lookup")
            .build()
            .map_err(|source| {
                AppError::io_with_context(source, "failed to start lookup runtime")
            })?;
        let handle = runtime.handle().clone();
        Ok(Self {
            _owned: Some(runtime),
            handle,
        })
    }

    fn spawn_blocking<F>(&self, task: F) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.handle.spawn_blocking(task)
    }
}

impl<C> LookupEngine<C>
where
    C: Clone + Send + 'static,
{
    pub fn new(source: Arc<dyn CandidateSource<C>>, options: LookupOptions) -> AppResult<Self> {
        let (request_tx, request_rx) = unbounded_channel();
        let (event_tx, event_rx) = unbounded_channel();
        let runtime = LookupWorkerRuntime::new()?;
        let cache = LookupCache::new(options.cache_entries);
        let worker = runtime.spawn_blocking(move || {
            worker_main(request_rx, event_tx, source, cache, options.max_results)
        });

        Ok(Self {
            request_tx,
            event_rx,
            next_generation: 0,
            _runtime: runtime,
            worker: Some(worker),
        })
    }

    pub fn submit(&mut self, query: impl Into<String>) -> AppResult<u64> {
        self.next_generation = self.next_generation.saturating_add(1);

        let generation = self.next_generation;
        let job = LookupJob {
            generation,
            query: query.into(),
        };

        self.request_tx
            .send(WorkerRequest::Query(job))
            .map_err(|_| AppError::lookup("lookup worker is not available"))?;

        Ok(generation)
    }

    /// Bumps the generation without queueing work, so every result still in
    /// flight becomes stale.
    pub fn invalidate(&mut self) -> u64 {
        self.next_generation = self.next_generation.saturating_add(1);
        self.next_generation
    }

    pub fn latest_generation(&self) -> u64 {
        self.next_generation
    }

    pub fn drain_events(&mut self) -> Vec<LookupEvent<C>> {
        let mut drained = Vec::new();

        loop {
            match self.event_rx.try_recv() {
                Ok(event) => drained.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }

        drained
    }
}

impl<C> Drop for LookupEngine<C> {
    fn drop(&mut self) {
        let _ = self.request_tx.send(WorkerRequest::Shutdown);
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
    }
}

fn worker_main<C: Clone>(
    mut request_rx: UnboundedReceiver<WorkerRequest>,
    event_tx: UnboundedSender<LookupEvent<C>>,
    source: Arc<dyn CandidateSource<C>>,
    mut cache: LookupCache<C>,
    max_results: Option<usize>,
) {
    let mut pending: Option<LookupJob> = None;

    loop {
        let job = match pending.take() {
            Some(job) => job,
            None => match wait_for_job(&mut request_rx) {
                Some(job) => job,
                None => break,
            },
        };

        pending = Some(job);
        if let WorkerControl::Shutdown = flush_requests(&mut request_rx, &mut pending) {
            break;
        }
        let Some(job) = pending.take() else {
            continue;
        };

        run_job(job, &event_tx, source.as_ref(), &mut cache, max_results);
    }
}

fn wait_for_job(request_rx: &mut UnboundedReceiver<WorkerRequest>) -> Option<LookupJob> {
    match request_rx.blocking_recv() {
        Some(WorkerRequest::Query(job)) => Some(job),
        Some(WorkerRequest::Shutdown) | None => None,
    }
}

fn run_job<C: Clone>(
    job: LookupJob,
    event_tx: &UnboundedSender<LookupEvent<C>>,
    source: &dyn CandidateSource<C>,
    cache: &mut LookupCache<C>,
    max_results: Option<usize>,
) {
    let cached = cache.get(&job.query);
    let counters = cache.counters();
    if let Some(items) = cached {
        tracing::trace!(
            query = %job.query,
            hits = counters.hits,
            misses = counters.misses,
            entries = cache.len(),
            "lookup served from cache"
        );
        let _ = event_tx.send(LookupEvent::Completed {
            generation: job.generation,
            query: job.query,
            items,
        });
        return;
    }

    match source.search(&job.query) {
        Ok(mut items) => {
            if let Some(limit) = max_results {
                items.truncate(limit);
            }
            cache.insert(&job.query, items.clone());
            let _ = event_tx.send(LookupEvent::Completed {
                generation: job.generation,
                query: job.query,
                items,
            });
        }
        Err(err) => {
            let _ = event_tx.send(LookupEvent::Failed {
                generation: job.generation,
                message: err.to_string(),
            });
        }
    }
}

/// Drains queued requests, keeping only the newest query in `pending`.
fn flush_requests(
    request_rx: &mut UnboundedReceiver<WorkerRequest>,
    pending: &mut Option<LookupJob>,
) -> WorkerControl {
    loop {
        match request_rx.try_recv() {
            Ok(WorkerRequest::Query(job)) => *pending = Some(job),
            Ok(WorkerRequest::Shutdown) => return WorkerControl::Shutdown,
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => return WorkerControl::Shutdown,
        }
    }

    WorkerControl::Continue
}
