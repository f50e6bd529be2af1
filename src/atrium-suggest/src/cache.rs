//! Per-drawer cache of suggestion results.

use std::collections::HashMap;

use crate::source::Suggestion;

/// Entry in the suggestion cache.
#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<Suggestion>,
    /// Logical insertion time, monotonically increasing per cache.
    fetched_at: u64,
}

/// Cache of suggestion results keyed by exact query string.
///
/// Keys are case-sensitive and untrimmed: `"Ada"` and `"ada "` are
/// distinct entries. The cache lives as long as the drawer instance;
/// reopening a drawer starts from an empty cache. Bounded by LRU
/// eviction since typing is unbounded.
#[derive(Debug)]
pub struct SuggestionCache {
    entries: HashMap<String, CacheEntry>,
    /// Order of access for LRU eviction.
    access_order: Vec<String>,
    max_entries: usize,
    enabled: bool,
    clock: u64,
    hits: u64,
    misses: u64,
}

impl SuggestionCache {
    /// Creates a new cache.
    pub fn new(enabled: bool, max_entries: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(max_entries.min(64)),
            access_order: Vec::with_capacity(max_entries.min(64)),
            max_entries,
            enabled,
            clock: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Gets cached results for an exact query string.
    pub fn get(&mut self, query: &str) -> Option<Vec<Suggestion>> {
        if !self.enabled {
            return None;
        }

        if let Some(entry) = self.entries.get(query) {
            self.access_order.retain(|q| q != query);
            self.access_order.push(query.to_string());
            self.hits += 1;
            tracing::trace!(query, fetched_at = entry.fetched_at, "suggestion cache hit");
            return Some(entry.results.clone());
        }

        self.misses += 1;
        None
    }

    /// Inserts or updates the results for a query string.
    pub fn insert(&mut self, query: String, results: Vec<Suggestion>) {
        if !self.enabled || self.max_entries == 0 {
            return;
        }

        while self.entries.len() >= self.max_entries && !self.entries.contains_key(&query) {
            if let Some(oldest) = self.access_order.first().cloned() {
                self.entries.remove(&oldest);
                self.access_order.remove(0);
            } else {
                break;
            }
        }

        self.access_order.retain(|q| q != &query);
        self.access_order.push(query.clone());

        self.clock += 1;
        self.entries.insert(
            query,
            CacheEntry {
                results,
                fetched_at: self.clock,
            },
        );
    }

    /// Clears all cached entries (hit/miss counters survive).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.access_order.clear();
    }

    /// Number of cached query strings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cache hits so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Cache misses so far.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
