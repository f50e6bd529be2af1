//! Atrium Drawer - filter drawer orchestration.
//!
//! A drawer is the panel a list view opens so an operator can edit its
//! filter. This crate binds one [`FilterSchema`](atrium_filter::FilterSchema),
//! zero or more per-field [`Suggester`](atrium_suggest::Suggester)s, and the
//! parent view (a [`DrawerHost`]) to one
//! [`FilterSession`](atrium_filter::FilterSession):
//!
//! - `open` seeds a fresh session from the parent's committed values.
//! - `edit` mutates the draft only; nothing reaches the parent.
//! - `apply_and_close` commits, hands the draft to the host, and closes.
//! - `clear_and_notify` resets the draft and notifies the host immediately.
//! - `dismiss` closes without touching the parent's filter at all.
//!
//! Each controller/session pair is independent; concurrently open drawers
//! share no state.

mod controller;
mod error;
mod host;

pub use controller::FilterDrawerController;
pub use error::{DrawerError, DrawerResult};
pub use host::DrawerHost;
