use std::num::NonZeroUsize;

use lru::LruCache;

const DEFAULT_MAX_ENTRIES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheCounters {
    pub hits: u64,
    pub misses: u64,
}

/// Per-query result cache for a candidate source.
#[derive(Debug)]
pub struct LookupCache<C> {
    entries: LruCache<String, Vec<C>>,
    counters: CacheCounters,
}

impl<C: Clone> Default for LookupCache<C> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl<C: Clone> LookupCache<C> {
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            counters: CacheCounters::default(),
        }
    }

    pub fn key(query: &str) -> String {
        query.trim().to_lowercase()
    }

    pub fn get(&mut self, query: &str) -> Option<Vec<C>> {
        match self.entries.get(&Self::key(query)) {
            Some(items) => {
                self.counters.hits += 1;
                Some(items.clone())
            }
            None => {
                self.counters.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, query: &str, items: Vec<C>) {
        self.entries.put(Self::key(query), items);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn counters(&self) -> CacheCounters {
        self.counters
    }
}
