#![allow(clippy::missing_errors_doc)]
//! Atrium Filter - draft/commit filter sessions for admin list views.
//!
//! Every Atrium list view (posts, courses, departments, events, and so on)
//! offers a filter drawer: a panel where an operator assembles a multi-field
//! query and applies or discards it atomically. This crate captures that
//! pattern once, data-driven, instead of repeating a hand-written state
//! machine per entity:
//!
//! - [`FilterSchema`] describes an entity's filterable fields (key, label,
//!   kind, choices, canonical empty value).
//! - [`FilterValues`] is the ordered key/value mapping exchanged with the
//!   parent view, both as the committed filter passed in and the draft
//!   handed out on apply.
//! - [`FilterSession`] holds an in-progress edit: field writes mutate the
//!   draft only, and nothing reaches the parent until an explicit commit.
//!
//! # Example
//!
//! ```
//! use atrium_filter::{Choice, FieldDefinition, FieldValue, FilterSchema, FilterSession};
//! use std::sync::Arc;
//!
//! # fn main() -> atrium_filter::FilterResult<()> {
//! let schema = Arc::new(FilterSchema::new(vec![
//!     FieldDefinition::single_choice(
//!         "status",
//!         "Status",
//!         vec![Choice::new("active", "Active"), Choice::new("inactive", "Inactive")],
//!     ),
//!     FieldDefinition::text("name", "Name"),
//! ])?);
//!
//! let mut session = FilterSession::seed(Arc::clone(&schema), &schema.empty_values());
//! session.set_field("status", FieldValue::choice("active"))?;
//! let committed = session.commit();
//! assert!(schema.is_active(&committed));
//! # Ok(())
//! # }
//! ```

mod error;
mod field;
mod schema;
mod session;
mod summary;
mod values;

pub use error::{FilterError, FilterResult};
pub use field::{Choice, FieldDefinition, FieldKind};
pub use schema::FilterSchema;
pub use session::{FilterSession, SessionState};
pub use summary::ActiveFilter;
pub use values::{DateRange, FieldValue, FilterValues};

/// Re-export indexmap for convenience (FilterValues is an `IndexMap`)
pub use indexmap;
