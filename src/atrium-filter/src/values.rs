//! Typed filter values exchanged with the parent list view.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Relative date window for date-range fields.
///
/// Serialized as the lowercase token the listing backend expects
/// (`today|week|month|quarter|year`). The exact window boundaries are the
/// backend's responsibility; this core only carries the token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// No date restriction (the "all time" sentinel).
    #[default]
    Any,
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

/// Runtime value of a single filter field.
///
/// The variant must match the field's [`FieldKind`](crate::FieldKind):
/// `Text` backs both plain and async text fields, `Choice` a single
/// selection, `Choices` a multi selection, `Toggle` a tri-state boolean,
/// and `Range` a relative date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text; empty string when unset.
    Text(String),
    /// One choice value; empty string when unset.
    Choice(String),
    /// Multi-choice selection; empty set when unset.
    Choices(BTreeSet<String>),
    /// Tri-state toggle; `None` means "any".
    Toggle(Option<bool>),
    /// Relative date window; [`DateRange::Any`] when unset.
    Range(DateRange),
}

impl FieldValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a single-choice value.
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    /// Create a multi-choice value from any collection of strings.
    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choices(values.into_iter().map(Into::into).collect())
    }

    /// Create a set toggle value.
    pub fn toggle(on: bool) -> Self {
        Self::Toggle(Some(on))
    }

    /// Create a date-range value.
    pub fn range(range: DateRange) -> Self {
        Self::Range(range)
    }

    /// Short name of this value's shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Choice(_) => "choice",
            Self::Choices(_) => "choices",
            Self::Toggle(_) => "toggle",
            Self::Range(_) => "range",
        }
    }
}

/// Ordered mapping from field key to value.
///
/// This is the shape exchanged with the parent view: the committed filter
/// passed into a drawer on open, and the draft handed back on apply.
pub type FilterValues = IndexMap<String, FieldValue>;
