//! Error types for filter operations.

use crate::field::FieldKind;
use crate::values::FieldValue;

/// Result type alias for filter operations.
pub type FilterResult<T> = std::result::Result<T, FilterError>;

/// Errors raised by schema and session operations.
///
/// These are programming errors (a view wired to the wrong field key or
/// value shape), not user-recoverable conditions; callers should let them
/// fail loudly rather than swallow them.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// `set_field` was called with a key absent from the schema.
    #[error("Unknown filter field: '{0}'")]
    UnknownField(String),

    /// A value's runtime shape does not match the field kind.
    #[error("Field '{key}' is {kind} but was given a {shape} value")]
    TypeMismatch {
        key: String,
        kind: FieldKind,
        shape: &'static str,
    },

    /// Two fields in one schema share a key.
    #[error("Duplicate field key in schema: '{0}'")]
    DuplicateField(String),
}

impl FilterError {
    /// Creates a new `UnknownField` error.
    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField(key.into())
    }

    /// Creates a new `TypeMismatch` error.
    pub fn type_mismatch(key: impl Into<String>, kind: FieldKind, value: &FieldValue) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            kind,
            shape: value.shape(),
        }
    }

    /// Creates a new `DuplicateField` error.
    pub fn duplicate_field(key: impl Into<String>) -> Self {
        Self::DuplicateField(key.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FilterError::unknown_field("owner");
        assert!(err.to_string().contains("owner"));

        let err =
            FilterError::type_mismatch("status", FieldKind::SingleChoice, &FieldValue::toggle(true));
        assert!(err.to_string().contains("single_choice"));
        assert!(err.to_string().contains("toggle"));
    }
}
