//! Error types for drawer orchestration.

use atrium_filter::FilterError;

/// Result type alias for drawer operations.
pub type DrawerResult<T> = std::result::Result<T, DrawerError>;

/// Errors raised by drawer operations.
///
/// Like the session errors these are programming errors in the consuming
/// view, not user-facing conditions.
#[derive(Debug, thiserror::Error)]
pub enum DrawerError {
    /// An edit, apply, or clear was attempted with no open session.
    #[error("Drawer is not open")]
    Closed,

    /// Suggestions were requested for a field with no suggester bound.
    #[error("Field '{0}' has no suggestion source")]
    NoSuggestions(String),

    /// A session operation failed (unknown field, shape mismatch).
    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl DrawerError {
    /// Creates a new `NoSuggestions` error.
    pub fn no_suggestions(key: impl Into<String>) -> Self {
        Self::NoSuggestions(key.into())
    }
}
