//! Drawer lifecycle orchestration.

use std::collections::HashMap;
use std::sync::Arc;

use atrium_filter::{
    ActiveFilter, FieldKind, FieldValue, FilterSchema, FilterSession, FilterValues,
};
use atrium_suggest::{Suggester, Suggestion};

use crate::error::{DrawerError, DrawerResult};
use crate::host::DrawerHost;

/// Orchestrates one filter drawer.
///
/// Holds the schema, the per-field suggesters for async-text fields, and
/// the host callbacks. A session exists exactly while the drawer is open;
/// closing (by apply or dismiss) discards it, so partial edits never
/// outlive the drawer.
pub struct FilterDrawerController<H: DrawerHost> {
    schema: Arc<FilterSchema>,
    suggesters: HashMap<String, Suggester>,
    host: H,
    session: Option<FilterSession>,
}

impl<H: DrawerHost> FilterDrawerController<H> {
    /// Creates a controller for one schema and host.
    pub fn new(schema: FilterSchema, host: H) -> Self {
        Self {
            schema: Arc::new(schema),
            suggesters: HashMap::new(),
            host,
            session: None,
        }
    }

    /// Bind a suggester to an async-text field.
    ///
    /// Bindings for keys that are not async-text fields are ignored with a
    /// warning; the field would never consult them.
    pub fn with_suggester(mut self, key: impl Into<String>, suggester: Suggester) -> Self {
        let key = key.into();
        match self.schema.field(&key).map(|f| f.kind) {
            Some(FieldKind::AsyncText) => {
                self.suggesters.insert(key, suggester);
            }
            Some(kind) => {
                tracing::warn!(%key, %kind, "suggester bound to a non-async-text field, ignoring");
            }
            None => {
                tracing::warn!(%key, "suggester bound to unknown field, ignoring");
            }
        }
        self
    }

    /// The host, for reading back applied state.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether a session is currently open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The current draft, while the drawer is open.
    pub fn draft(&self) -> Option<&FilterValues> {
        self.session.as_ref().map(FilterSession::draft)
    }

    /// Open the drawer, seeding a fresh session from the parent's
    /// committed values.
    ///
    /// Any prior session is discarded; its in-flight suggestion fetches
    /// are orphaned and its caches dropped.
    pub fn open(&mut self, current: &FilterValues) {
        for suggester in self.suggesters.values() {
            suggester.reset();
        }
        self.session = Some(FilterSession::seed(Arc::clone(&self.schema), current));
        tracing::debug!(fields = self.schema.len(), "filter drawer opened");
    }

    /// Replace one field's draft value.
    ///
    /// Only the named field changes; other fields are not invalidated.
    pub fn edit(&mut self, key: &str, value: FieldValue) -> DrawerResult<()> {
        let session = self.session.as_mut().ok_or(DrawerError::Closed)?;
        session.set_field(key, value)?;
        Ok(())
    }

    /// Kick off a suggestion lookup for an async-text field.
    ///
    /// Returns immediately; the search runs on the runtime and publishes
    /// into [`suggestions`](Self::suggestions) only if it is still the
    /// newest query when it resolves.
    pub fn suggest(&self, key: &str, query: &str) -> DrawerResult<()> {
        if self.session.is_none() {
            return Err(DrawerError::Closed);
        }
        let suggester = self
            .suggesters
            .get(key)
            .ok_or_else(|| DrawerError::no_suggestions(key))?
            .clone();
        let query = query.to_owned();
        tokio::spawn(async move {
            suggester.search(&query).await;
        });
        Ok(())
    }

    /// The visible suggestions for a field (empty if none bound).
    pub fn suggestions(&self, key: &str) -> Vec<Suggestion> {
        self.suggesters
            .get(key)
            .map(Suggester::current)
            .unwrap_or_default()
    }

    /// Commit the draft, hand it to the host, and close the drawer.
    pub fn apply_and_close(&mut self) -> DrawerResult<()> {
        let session = self.session.as_mut().ok_or(DrawerError::Closed)?;
        let values = session.commit();
        self.host.on_apply(values);
        self.close();
        Ok(())
    }

    /// Reset the draft to the schema's empty values and notify the host.
    ///
    /// The host is always notified immediately with the full empty
    /// mapping, never a partially-cleared one. The drawer stays open.
    pub fn clear_and_notify(&mut self) -> DrawerResult<()> {
        let session = self.session.as_mut().ok_or(DrawerError::Closed)?;
        let values = session.clear();
        self.host.on_clear(values);
        Ok(())
    }

    /// Close the drawer without committing or clearing.
    ///
    /// The parent's filter state is left exactly as it was before `open`;
    /// the host is not called.
    pub fn dismiss(&mut self) {
        if self.session.take().is_some() {
            for suggester in self.suggesters.values() {
                suggester.reset();
            }
            tracing::debug!("filter drawer dismissed");
        }
    }

    /// Whether the open draft differs from the schema's empty values.
    ///
    /// False while the drawer is closed.
    pub fn has_active_filters(&self) -> bool {
        self.session.as_ref().is_some_and(FilterSession::is_active)
    }

    /// Ordered summary triples for the open draft's active fields.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.session
            .as_ref()
            .map(|s| self.schema.active_filters(s.draft()))
            .unwrap_or_default()
    }

    fn close(&mut self) {
        self.session = None;
        for suggester in self.suggesters.values() {
            suggester.reset();
        }
        tracing::debug!("filter drawer closed");
    }
}
