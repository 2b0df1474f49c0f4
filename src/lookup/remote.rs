use std::sync::Arc;

use crate::error::AppResult;
use crate::picker::{
    AcceptAll, BlurOutcome, Candidate, KeyOutcome, Picker, PickerKey, PickerOptions,
    PointerOutcome, PointerTarget, SuggestionState,
};

use super::engine::{CandidateSource, LookupEngine, LookupEvent, LookupOptions};

/// A picker whose candidates come from a [`CandidateSource`] lookup instead
/// of a fixed list. Only the result of the most recent query is ever shown.
pub struct RemotePicker<C> {
    picker: Picker<C, AcceptAll>,
    engine: LookupEngine<C>,
    awaiting: Option<u64>,
}

impl<C> RemotePicker<C>
where
    C: Candidate + Clone + Send + 'static,
{
    pub fn new(
        source: Arc<dyn CandidateSource<C>>,
        options: PickerOptions,
        lookup: LookupOptions,
    ) -> AppResult<Self> {
        let lookup = LookupOptions {
            max_results: lookup.max_results.or(options.max_results),
            ..lookup
        };
        Ok(Self {
            picker: Picker::with_matcher(Vec::new(), AcceptAll, options),
            engine: LookupEngine::new(source, lookup)?,
            awaiting: None,
        })
    }

    pub fn picker(&self) -> &Picker<C, AcceptAll> {
        &self.picker
    }

    pub fn state(&self) -> &SuggestionState<C> {
        self.picker.state()
    }

    pub fn query(&self) -> &str {
        self.picker.query()
    }

    pub fn is_awaiting(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn on_query_change(&mut self, text: &str) -> &SuggestionState<C> {
        self.picker.set_query_pending(text);
        if !self.picker.options().accepts_query(text) {
            self.engine.invalidate();
            self.awaiting = None;
            return self.picker.state();
        }

        match self.engine.submit(text) {
            Ok(generation) => self.awaiting = Some(generation),
            Err(err) => {
                tracing::warn!(error = %err, query = text, "candidate lookup unavailable");
                self.awaiting = None;
            }
        }
        self.picker.state()
    }

    /// Applies finished lookups. Returns `true` when the suggestion state
    /// changed.
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        for event in self.engine.drain_events() {
            if self.awaiting != Some(event.generation()) {
                tracing::debug!(generation = event.generation(), "discarding stale lookup");
                continue;
            }
            self.awaiting = None;
            match event {
                LookupEvent::Completed { items, .. } => {
                    self.picker.replace_candidates(items);
                }
                LookupEvent::Failed { message, .. } => {
                    tracing::warn!(%message, query = self.picker.query(), "candidate lookup failed");
                    self.picker.clear_suggestions();
                }
            }
            changed = true;
        }
        changed
    }

    /// Escape while a lookup is still pending cancels it, so the panel
    /// stays closed when the result lands.
    pub fn on_key<F>(&mut self, key: PickerKey, on_select: F) -> KeyOutcome
    where
        F: FnOnce(&C),
    {
        if key == PickerKey::Escape && self.awaiting.is_some() {
            self.cancel_pending();
            self.picker.on_outside_interaction();
            return KeyOutcome::Consumed;
        }
        self.picker.on_key(key, on_select)
    }

    pub fn on_pointer_down<F>(&mut self, target: PointerTarget, on_select: F) -> PointerOutcome
    where
        F: FnOnce(&C),
    {
        if target == PointerTarget::Outside {
            self.cancel_pending();
        }
        self.picker.on_pointer_down(target, on_select)
    }

    pub fn on_outside_interaction(&mut self) {
        self.cancel_pending();
        self.picker.on_outside_interaction();
    }

    pub fn on_blur<F>(&mut self, on_change: F) -> BlurOutcome
    where
        F: FnOnce(&str),
    {
        self.cancel_pending();
        self.picker.on_blur(on_change)
    }

    pub fn reset(&mut self) {
        self.cancel_pending();
        self.picker.reset();
    }

    fn cancel_pending(&mut self) {
        if let Some(generation) = self.awaiting.take() {
            tracing::debug!(generation, "pending lookup cancelled");
        }
        self.engine.invalidate();
    }

    pub fn committed_value(&self) -> Option<&str> {
        self.picker.committed_value()
    }

    pub fn is_committed(&self) -> bool {
        self.picker.is_committed()
    }
}
