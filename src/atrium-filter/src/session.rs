//! The draft/commit session: an in-progress edit of one filter set.

use std::sync::Arc;

use crate::error::{FilterError, FilterResult};
use crate::schema::FilterSchema;
use crate::values::{FieldValue, FilterValues};

/// Where a session is in its lifecycle.
///
/// The state is advisory; it never gates an operation. A session is
/// created when a drawer opens and discarded when it closes, so
/// `Committed`/`Cleared` are terminal in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Freshly seeded, no edits yet
    Seeded,
    /// At least one field write since seeding
    Editing,
    /// Draft handed to the parent via `commit`
    Committed,
    /// Reset to empty values via `clear`
    Cleared,
}

/// An in-progress edit of a filter set.
///
/// Field writes mutate the draft only; the parent view sees nothing until
/// an explicit [`commit`](FilterSession::commit). Dropping the session
/// without committing discards all edits, so partial edits never leak.
#[derive(Debug, Clone)]
pub struct FilterSession {
    schema: Arc<FilterSchema>,
    draft: FilterValues,
    committed: FilterValues,
    state: SessionState,
}

impl FilterSession {
    /// Seed a session from the parent's current filter values.
    ///
    /// Seeding is lenient: keys outside the schema are dropped, missing
    /// keys and shape-mismatched values fall back to the field's empty
    /// value. The draft always carries exactly the schema's key set.
    pub fn seed(schema: Arc<FilterSchema>, current: &FilterValues) -> Self {
        let mut draft = FilterValues::with_capacity(schema.len());
        for field in schema.fields() {
            let value = match current.get(&field.key) {
                Some(value) if field.accepts(value) => value.clone(),
                Some(value) => {
                    tracing::debug!(
                        key = %field.key,
                        shape = value.shape(),
                        "seed value shape mismatch, falling back to empty value"
                    );
                    field.empty_value.clone()
                }
                None => field.empty_value.clone(),
            };
            draft.insert(field.key.clone(), value);
        }

        for key in current.keys().filter(|k| schema.field(k).is_none()) {
            tracing::debug!(%key, "seed value for unknown field dropped");
        }

        Self {
            schema,
            committed: draft.clone(),
            draft,
            state: SessionState::Seeded,
        }
    }

    /// The schema this session edits against.
    pub fn schema(&self) -> &FilterSchema {
        &self.schema
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The draft values being edited.
    pub fn draft(&self) -> &FilterValues {
        &self.draft
    }

    /// The last committed (or seeded) values.
    pub fn committed(&self) -> &FilterValues {
        &self.committed
    }

    /// Replace one field's draft value.
    ///
    /// Other fields are untouched; there is no cross-field cascade.
    /// Writing a value structurally equal to the current one is a no-op
    /// that still counts as editing.
    pub fn set_field(&mut self, key: &str, value: FieldValue) -> FilterResult<()> {
        let field = self
            .schema
            .field(key)
            .ok_or_else(|| FilterError::unknown_field(key))?;
        if !field.accepts(&value) {
            return Err(FilterError::type_mismatch(key, field.kind, &value));
        }
        self.draft.insert(key.to_string(), value);
        self.state = SessionState::Editing;
        Ok(())
    }

    /// Hand the draft to the caller and remember it as the new snapshot.
    ///
    /// Returns a copy: later session mutation never changes what was
    /// already handed out.
    pub fn commit(&mut self) -> FilterValues {
        self.committed = self.draft.clone();
        self.state = SessionState::Committed;
        tracing::debug!(
            active = self.schema.is_active(&self.draft),
            "filter draft committed"
        );
        self.draft.clone()
    }

    /// Reset draft and snapshot to the schema's empty values.
    pub fn clear(&mut self) -> FilterValues {
        let empty = self.schema.empty_values();
        self.draft = empty.clone();
        self.committed = empty.clone();
        self.state = SessionState::Cleared;
        tracing::debug!("filter draft cleared");
        empty
    }

    /// Whether the draft differs from the schema's empty values.
    pub fn is_active(&self) -> bool {
        self.schema.is_active(&self.draft)
    }
}
