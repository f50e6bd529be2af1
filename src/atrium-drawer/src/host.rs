//! The host-side contract: the parent list view that owns the committed filter.

use atrium_filter::FilterValues;

/// Callbacks a parent list view hands to its drawer controller.
///
/// Both calls happen synchronously from the controller operation that
/// triggers them; the host is responsible for re-querying its data source.
pub trait DrawerHost {
    /// A draft was committed. `values` replaces the host's entire filter
    /// state (no merging).
    fn on_apply(&mut self, values: FilterValues);

    /// The draft was cleared. `values` is the schema's empty values; the
    /// host resets its filter state to its own defaults.
    fn on_clear(&mut self, values: FilterValues);
}
