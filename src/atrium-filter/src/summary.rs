//! Generic "active filters" summary.
//!
//! Views render a live summary of active filters (and per-field
//! quick-remove chips) from these triples instead of hand-listing each
//! entity's fields.

use crate::schema::{FilterSchema, field_active};
use crate::values::{FieldValue, FilterValues};

/// One active filter, in schema declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilter {
    /// Field key
    pub key: String,
    /// Display label from the field definition
    pub label: String,
    /// The draft value that differs from the field's empty value
    pub value: FieldValue,
}

impl FilterSchema {
    /// Ordered triples for every field whose value differs from its empty
    /// value, using the same per-kind predicate as [`FilterSchema::is_active`].
    pub fn active_filters(&self, values: &FilterValues) -> Vec<ActiveFilter> {
        self.fields()
            .filter_map(|field| {
                let value = values.get(&field.key)?;
                field_active(field, value).then(|| ActiveFilter {
                    key: field.key.clone(),
                    label: field.label.clone(),
                    value: value.clone(),
                })
            })
            .collect()
    }
}
