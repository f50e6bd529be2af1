//! Filter schemas: ordered, immutable descriptions of an entity's fields.

use indexmap::IndexMap;

use crate::error::{FilterError, FilterResult};
use crate::field::{FieldDefinition, FieldKind};
use crate::values::{FieldValue, FilterValues};

/// Ordered set of field definitions for one entity type.
///
/// Constructed once per entity (posts, courses, users, ...) and held
/// immutable for the lifetime of any drawer built on it. Field keys are
/// unique; iteration follows declaration order.
#[derive(Debug, Clone)]
pub struct FilterSchema {
    fields: IndexMap<String, FieldDefinition>,
}

impl FilterSchema {
    /// Build a schema from an ordered list of field definitions.
    pub fn new(fields: Vec<FieldDefinition>) -> FilterResult<Self> {
        let mut map = IndexMap::with_capacity(fields.len());
        for field in fields {
            if map.contains_key(&field.key) {
                return Err(FilterError::duplicate_field(&field.key));
            }
            map.insert(field.key.clone(), field);
        }
        Ok(Self { fields: map })
    }

    /// Look up a field by key.
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.get(key)
    }

    /// Iterate fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A mapping with every field at its canonical empty value.
    pub fn empty_values(&self) -> FilterValues {
        self.fields
            .values()
            .map(|f| (f.key.clone(), f.empty_value.clone()))
            .collect()
    }

    /// True iff any field's value differs from its empty value.
    ///
    /// Multi-choice fields count as active only when the selection is
    /// non-empty, whatever the configured empty value.
    pub fn is_active(&self, values: &FilterValues) -> bool {
        self.fields.values().any(|field| {
            values
                .get(&field.key)
                .is_some_and(|value| field_active(field, value))
        })
    }
}

/// Per-field activity predicate shared with the summary enumeration.
pub(crate) fn field_active(field: &FieldDefinition, value: &FieldValue) -> bool {
    match field.kind {
        FieldKind::MultiChoice => matches!(value, FieldValue::Choices(set) if !set.is_empty()),
        _ => *value != field.empty_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Choice;
    use crate::values::DateRange;

    fn sample_schema() -> FilterSchema {
        FilterSchema::new(vec![
            FieldDefinition::single_choice(
                "status",
                "Status",
                vec![
                    Choice::new("active", "Active"),
                    Choice::new("inactive", "Inactive"),
                ],
            ),
            FieldDefinition::text("name", "Name"),
            FieldDefinition::multi_choice(
                "tags",
                "Tags",
                vec![Choice::new("news", "News"), Choice::new("blog", "Blog")],
            ),
            FieldDefinition::toggle("pinned", "Pinned"),
            FieldDefinition::date_range("created", "Created"),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = FilterSchema::new(vec![
            FieldDefinition::text("name", "Name"),
            FieldDefinition::text("name", "Other name"),
        ])
        .unwrap_err();
        assert!(matches!(err, FilterError::DuplicateField(key) if key == "name"));
    }

    #[test]
    fn test_empty_values_covers_every_field() {
        let schema = sample_schema();
        let empty = schema.empty_values();
        assert_eq!(empty.len(), schema.len());
        let keys: Vec<&String> = empty.keys().collect();
        assert_eq!(keys, ["status", "name", "tags", "pinned", "created"]);
        assert!(!schema.is_active(&empty));
    }

    #[test]
    fn test_is_active_per_kind() {
        let schema = sample_schema();

        let mut values = schema.empty_values();
        assert!(!schema.is_active(&values));

        values.insert("pinned".into(), FieldValue::toggle(false));
        assert!(schema.is_active(&values));

        let mut values = schema.empty_values();
        values.insert("created".into(), FieldValue::range(DateRange::Today));
        assert!(schema.is_active(&values));

        let mut values = schema.empty_values();
        values.insert("tags".into(), FieldValue::choices(["news"]));
        assert!(schema.is_active(&values));

        // An explicitly empty multi-choice selection is still inactive.
        let mut values = schema.empty_values();
        values.insert("tags".into(), FieldValue::choices(Vec::<String>::new()));
        assert!(!schema.is_active(&values));
    }

    #[test]
    fn test_is_active_ignores_unknown_keys() {
        let schema = sample_schema();
        let mut values = schema.empty_values();
        values.insert("rogue".into(), FieldValue::text("x"));
        assert!(!schema.is_active(&values));
    }
}
