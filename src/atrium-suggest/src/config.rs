//! Configuration for suggestion lookups.

use std::time::Duration;

/// Configuration for a [`Suggester`](crate::Suggester).
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Quiet window for debouncing keystroke bursts.
    ///
    /// Only the last search issued within this window actually fetches.
    pub debounce: Duration,

    /// Whether per-drawer result caching is enabled.
    pub cache_enabled: bool,

    /// Maximum number of cached query strings (LRU evicted beyond this).
    pub max_cache_entries: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            cache_enabled: true,
            max_cache_entries: 64,
        }
    }
}
