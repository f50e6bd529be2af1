//! Debounced, cached, staleness-guarded suggestion lookups.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::cache::SuggestionCache;
use crate::config::SuggestConfig;
use crate::source::{Suggestion, SuggestionSource};

/// Outcome of one [`Suggester::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The result of the most recently issued query; safe to display.
    Fresh(Vec<Suggestion>),
    /// A newer query was issued while this one was pending; the result
    /// (if any) was not published and must not be displayed.
    Stale,
}

impl SearchOutcome {
    /// Returns true if this outcome carries displayable results.
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

/// Counters reported by [`Suggester::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestStats {
    /// Underlying fetches actually issued.
    pub fetches: u64,
    /// Searches answered from the cache.
    pub cache_hits: u64,
    /// Cache lookups that missed.
    pub cache_misses: u64,
}

/// A [`SuggestionSource`] wrapped with debounce, caching, and
/// last-request-wins staleness.
///
/// One suggester serves one async-text field of one drawer instance.
/// Cloning is cheap and shares all interior state, so searches can be
/// spawned onto the runtime without blocking field edits. The visible
/// options (`current`) only ever move forward to the newest query's
/// results, regardless of network completion order.
#[derive(Clone)]
pub struct Suggester {
    source: Arc<dyn SuggestionSource>,
    config: SuggestConfig,
    /// Highest issued sequence ticket; a response is published only if
    /// its ticket still equals this value.
    seq: Arc<AtomicU64>,
    cache: Arc<Mutex<SuggestionCache>>,
    /// Last published ticket and its results. The slot only ever moves
    /// forward: a slower fetch that passed the currency check but lost
    /// the race to a newer publication cannot overwrite it.
    visible: Arc<Mutex<(u64, Vec<Suggestion>)>>,
    fetches: Arc<AtomicU64>,
}

impl Suggester {
    /// Creates a suggester with the default configuration.
    pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
        Self::with_config(source, SuggestConfig::default())
    }

    /// Creates a suggester with the specified configuration.
    pub fn with_config(source: Arc<dyn SuggestionSource>, config: SuggestConfig) -> Self {
        let cache = SuggestionCache::new(config.cache_enabled, config.max_cache_entries);
        Self {
            source,
            config,
            seq: Arc::new(AtomicU64::new(0)),
            cache: Arc::new(Mutex::new(cache)),
            visible: Arc::new(Mutex::new((0, Vec::new()))),
            fetches: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Look up suggestions for `query`.
    ///
    /// A cache hit answers immediately without debouncing or fetching.
    /// Otherwise the call waits out the quiet window, fetches unless a
    /// newer call has been issued meanwhile, and publishes the result to
    /// the visible options only if it is still the newest. Fetch failures
    /// resolve to an empty fresh list; suggestions are best-effort.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(results) = self.cache.lock().get(query) {
            return self.publish(ticket, query, results);
        }

        // The empty query is the drawer-open default list, not part of a
        // keystroke burst; it skips the quiet window.
        if !query.is_empty() {
            tokio::time::sleep(self.config.debounce).await;
            if !self.is_current(ticket) {
                tracing::debug!(query, ticket, "suggestion search debounced");
                return SearchOutcome::Stale;
            }
        }

        self.fetches.fetch_add(1, Ordering::Relaxed);
        match self.source.fetch(query).await {
            Ok(results) => {
                // Stale results are still valid for their query string, so
                // they are cached even when they lose the publish race.
                self.cache.lock().insert(query.to_string(), results.clone());
                self.publish(ticket, query, results)
            }
            Err(error) => {
                tracing::warn!(query, %error, "suggestion fetch failed, degrading to empty list");
                self.publish(ticket, query, Vec::new())
            }
        }
    }

    /// The last published results: the field's visible options.
    pub fn current(&self) -> Vec<Suggestion> {
        self.visible.lock().1.clone()
    }

    /// Orphan any in-flight search and drop cache and visible options.
    ///
    /// Called when the owning drawer closes or reopens: outstanding
    /// fetches may still complete but can no longer publish. The emptied
    /// slot is stamped with the bumped sequence so a fetch that cleared
    /// its currency check just before the bump cannot repopulate it.
    pub fn reset(&self) {
        let fence = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.cache.lock().clear();
        *self.visible.lock() = (fence, Vec::new());
    }

    /// Lookup counters, for diagnostics and tests.
    pub fn stats(&self) -> SuggestStats {
        let cache = self.cache.lock();
        SuggestStats {
            fetches: self.fetches.load(Ordering::Relaxed),
            cache_hits: cache.hits(),
            cache_misses: cache.misses(),
        }
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket
    }

    fn publish(&self, ticket: u64, query: &str, results: Vec<Suggestion>) -> SearchOutcome {
        if self.is_current(ticket) && self.store_if_newer(ticket, &results) {
            SearchOutcome::Fresh(results)
        } else {
            tracing::debug!(query, ticket, "stale suggestion result discarded");
            SearchOutcome::Stale
        }
    }

    /// Write `results` to the visible slot unless a newer ticket has
    /// already published. The ticket comparison and the write happen
    /// under one lock, so a fetch preempted after its currency check
    /// cannot clobber a publication that landed in the meantime.
    fn store_if_newer(&self, ticket: u64, results: &[Suggestion]) -> bool {
        let mut visible = self.visible.lock();
        if ticket < visible.0 {
            return false;
        }
        *visible = (ticket, results.to_vec());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Source with per-query latencies and canned results.
    struct ScriptedSource {
        delays: HashMap<String, Duration>,
        fail_on: Option<String>,
        calls: AtomicU64,
    }

    impl ScriptedSource {
        fn new() -> Self {
            Self {
                delays: HashMap::new(),
                fail_on: None,
                calls: AtomicU64::new(0),
            }
        }

        fn with_delay(mut self, query: &str, delay: Duration) -> Self {
            self.delays.insert(query.to_string(), delay);
            self
        }

        fn failing_on(mut self, query: &str) -> Self {
            self.fail_on = Some(query.to_string());
            self
        }

        fn calls(&self) -> u64 {
            self.calls.load(Ordering::Relaxed)
        }
    }

    #[async_trait::async_trait]
    impl SuggestionSource for ScriptedSource {
        async fn fetch(&self, query: &str) -> anyhow::Result<Vec<Suggestion>> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if let Some(delay) = self.delays.get(query) {
                tokio::time::sleep(*delay).await;
            }
            if self.fail_on.as_deref() == Some(query) {
                anyhow::bail!("endpoint unavailable");
            }
            if query.is_empty() {
                return Ok(vec![Suggestion::new("recent", "Recently used")]);
            }
            Ok(vec![Suggestion::new(
                format!("{query}-1"),
                format!("Match for {query}"),
            )])
        }
    }

    fn fresh(outcome: SearchOutcome) -> Vec<Suggestion> {
        match outcome {
            SearchOutcome::Fresh(results) => results,
            SearchOutcome::Stale => panic!("expected a fresh outcome"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_query_served_from_cache() {
        let source = Arc::new(ScriptedSource::new());
        let suggester = Suggester::new(source.clone());

        let first = fresh(suggester.search("course").await);
        let second = fresh(suggester.search("course").await);

        assert_eq!(first, second);
        assert_eq!(source.calls(), 1);
        assert_eq!(suggester.stats().fetches, 1);
        assert_eq!(suggester.stats().cache_hits, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fetches_only_last_query() {
        let source = Arc::new(ScriptedSource::new());
        let suggester = Suggester::new(source.clone());

        let a = tokio::spawn({
            let s = suggester.clone();
            async move { s.search("c").await }
        });
        let b = tokio::spawn({
            let s = suggester.clone();
            async move { s.search("co").await }
        });
        let c = tokio::spawn({
            let s = suggester.clone();
            async move { s.search("cou").await }
        });

        assert_eq!(a.await.unwrap(), SearchOutcome::Stale);
        assert_eq!(b.await.unwrap(), SearchOutcome::Stale);
        assert!(c.await.unwrap().is_fresh());

        assert_eq!(source.calls(), 1);
        assert_eq!(suggester.current()[0].value, "cou-1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_order_resolution_keeps_newest_query() {
        // "a" passes its quiet window, then spends a long time in flight;
        // "ab" is issued afterwards and resolves first. The visible options
        // must reflect "ab" even though "a" completes later.
        let source = Arc::new(
            ScriptedSource::new()
                .with_delay("a", Duration::from_millis(1_000))
                .with_delay("ab", Duration::from_millis(10)),
        );
        let suggester = Suggester::new(source.clone());

        let slow = tokio::spawn({
            let s = suggester.clone();
            async move { s.search("a").await }
        });

        // Let "a" clear its debounce window and start fetching.
        tokio::time::sleep(Duration::from_millis(350)).await;

        let fast = tokio::spawn({
            let s = suggester.clone();
            async move { s.search("ab").await }
        });

        let fast_outcome = fast.await.unwrap();
        let slow_outcome = slow.await.unwrap();

        assert!(fast_outcome.is_fresh());
        assert_eq!(slow_outcome, SearchOutcome::Stale);
        assert_eq!(source.calls(), 2);
        assert_eq!(suggester.current()[0].value, "ab-1");

        // The losing result was still cached for its own query string.
        assert!(matches!(suggester.search("a").await, SearchOutcome::Fresh(r) if r[0].value == "a-1"));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_query_returns_defaults() {
        let source = Arc::new(ScriptedSource::new());
        let suggester = Suggester::new(source.clone());

        // Prior non-empty query populates the cache...
        let _ = suggester.search("course").await;
        // ...but the empty query never consults those keys.
        let defaults = fresh(suggester.search("").await);
        assert_eq!(defaults[0].value, "recent");
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_degrades_to_empty_list() {
        let source = Arc::new(ScriptedSource::new().failing_on("boom"));
        let suggester = Suggester::new(source.clone());

        let outcome = suggester.search("boom").await;
        assert_eq!(outcome, SearchOutcome::Fresh(Vec::new()));
        assert!(suggester.current().is_empty());

        // Failures are not cached: the next identical search fetches again.
        let _ = suggester.search("boom").await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_visible_options_never_move_backwards() {
        // On a multi-threaded runtime a slow fetch can pass its currency
        // check and then stall while a newer search publishes. Its late
        // write must lose to the newer ticket already in the slot.
        let suggester = Suggester::new(Arc::new(ScriptedSource::new()));

        assert!(suggester.search("ab").await.is_fresh());
        let late = [Suggestion::new("a-1", "Match for a")];
        assert!(!suggester.store_if_newer(0, &late));
        assert_eq!(suggester.current()[0].value, "ab-1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_orphans_in_flight_search() {
        let source = Arc::new(ScriptedSource::new().with_delay("a", Duration::from_millis(1_000)));
        let suggester = Suggester::new(source.clone());

        let pending = tokio::spawn({
            let s = suggester.clone();
            async move { s.search("a").await }
        });

        tokio::time::sleep(Duration::from_millis(350)).await;
        suggester.reset();

        assert_eq!(pending.await.unwrap(), SearchOutcome::Stale);
        assert!(suggester.current().is_empty());
    }
}
