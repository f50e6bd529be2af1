//! Suggestion sources: pluggable providers of value/label pairs.

use serde::{Deserialize, Serialize};

/// One suggestion offered for a free-text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique value/identifier sent to the backend
    pub value: String,
    /// Display label
    pub label: String,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// An asynchronous provider of suggestions for one field.
///
/// Implementations typically wrap one backend search endpoint. An empty
/// query asks for the source's default list (most recent or most common
/// entries); sources that have no defaults return an empty vec.
///
/// Errors are recovered by the caller (the lookup degrades to an empty
/// list), so implementations should return them rather than retry.
#[async_trait::async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Fetch ordered suggestions for `query`.
    async fn fetch(&self, query: &str) -> anyhow::Result<Vec<Suggestion>>;
}
