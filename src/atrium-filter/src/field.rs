//! Field definitions: the static description of one filterable input.

use std::collections::BTreeSet;
use std::fmt;

use crate::values::{DateRange, FieldValue};

/// Kind of filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain free-text input
    Text,
    /// Single selection from a fixed choice list
    SingleChoice,
    /// Multi selection from a fixed choice list
    MultiChoice,
    /// Tri-state boolean (on / off / any)
    Toggle,
    /// Relative date window
    DateRange,
    /// Free-text input backed by remote suggestions
    AsyncText,
}

impl FieldKind {
    /// Canonical "unset" value for this kind.
    pub fn empty_value(self) -> FieldValue {
        match self {
            Self::Text | Self::AsyncText => FieldValue::Text(String::new()),
            Self::SingleChoice => FieldValue::Choice(String::new()),
            Self::MultiChoice => FieldValue::Choices(BTreeSet::new()),
            Self::Toggle => FieldValue::Toggle(None),
            Self::DateRange => FieldValue::Range(DateRange::Any),
        }
    }

    /// Whether a value's runtime shape matches this kind.
    pub fn accepts(self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Self::Text | Self::AsyncText, FieldValue::Text(_))
                | (Self::SingleChoice, FieldValue::Choice(_))
                | (Self::MultiChoice, FieldValue::Choices(_))
                | (Self::Toggle, FieldValue::Toggle(_))
                | (Self::DateRange, FieldValue::Range(_))
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::SingleChoice => "single_choice",
            Self::MultiChoice => "multi_choice",
            Self::Toggle => "toggle",
            Self::DateRange => "date_range",
            Self::AsyncText => "async_text",
        })
    }
}

/// A selectable option for choice fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Unique value/identifier sent to the backend
    pub value: String,
    /// Display label
    pub label: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Definition of one filterable field within a schema.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Field key, unique within the schema
    pub key: String,
    /// Display label
    pub label: String,
    /// Field kind
    pub kind: FieldKind,
    /// Allowed choices (SingleChoice/MultiChoice only)
    pub choices: Vec<Choice>,
    /// Canonical "unset" value; `FilterSession::clear` assigns exactly this
    pub empty_value: FieldValue,
}

impl FieldDefinition {
    fn with_kind(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            choices: Vec::new(),
            empty_value: kind.empty_value(),
        }
    }

    /// Create a free-text field.
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(key, label, FieldKind::Text)
    }

    /// Create a free-text field backed by remote suggestions.
    pub fn async_text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(key, label, FieldKind::AsyncText)
    }

    /// Create a single-choice field.
    pub fn single_choice(
        key: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        let mut field = Self::with_kind(key, label, FieldKind::SingleChoice);
        field.choices = choices;
        field
    }

    /// Create a multi-choice field.
    pub fn multi_choice(
        key: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        let mut field = Self::with_kind(key, label, FieldKind::MultiChoice);
        field.choices = choices;
        field
    }

    /// Create a tri-state toggle field.
    pub fn toggle(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(key, label, FieldKind::Toggle)
    }

    /// Create a date-range field.
    pub fn date_range(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(key, label, FieldKind::DateRange)
    }

    /// Override the canonical empty value.
    ///
    /// For schemas whose "all" sentinel is a named choice (e.g. a status
    /// dropdown where `"all"` rather than `""` means unset). The value's
    /// shape must match the field kind.
    pub fn with_empty_value(mut self, value: FieldValue) -> Self {
        debug_assert!(
            self.kind.accepts(&value),
            "empty value shape must match field kind"
        );
        self.empty_value = value;
        self
    }

    /// Whether a value's runtime shape matches this field.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        self.kind.accepts(value)
    }

    /// Display label for a choice value, if this field defines it.
    pub fn choice_label(&self, value: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label.as_str())
    }
}
