//! Atrium Suggest - remote suggestion lookups for free-text filter fields.
//!
//! Async-text filter fields offer value/label suggestions fetched from a
//! backend endpoint while the operator types. Suggestions are advisory:
//! the field always accepts arbitrary typed text, so lookups degrade to an
//! empty list on failure and never surface an error.
//!
//! The heavy lifting lives in [`Suggester`], which wraps any
//! [`SuggestionSource`] with:
//!
//! - **Debounce** - only the last call in a burst of keystrokes actually
//!   fetches (default quiet window 300 ms).
//! - **Cache** - results are cached per exact query string for the drawer's
//!   lifetime; a hit answers without re-fetching.
//! - **Staleness** - every call takes a strictly increasing sequence
//!   ticket; only the response matching the highest issued ticket reaches
//!   the visible options (last-request-wins, not first-response-wins).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use atrium_suggest::{SearchOutcome, Suggester, Suggestion, SuggestionSource};
//!
//! struct AuthorEndpoint;
//!
//! #[async_trait::async_trait]
//! impl SuggestionSource for AuthorEndpoint {
//!     async fn fetch(&self, query: &str) -> anyhow::Result<Vec<Suggestion>> {
//!         // GET /api/authors?q={query} ...
//!         # let _ = query;
//!         Ok(vec![])
//!     }
//! }
//!
//! # async fn demo() {
//! let suggester = Suggester::new(Arc::new(AuthorEndpoint));
//! if let SearchOutcome::Fresh(results) = suggester.search("joh").await {
//!     // render `results` as the field's options
//!     # let _ = results;
//! }
//! # }
//! ```

mod cache;
mod config;
mod source;
mod suggester;

pub use cache::SuggestionCache;
pub use config::SuggestConfig;
pub use source::{Suggestion, SuggestionSource};
pub use suggester::{SearchOutcome, SuggestStats, Suggester};

/// Re-export anyhow for convenience (the `SuggestionSource` boundary)
pub use anyhow;
