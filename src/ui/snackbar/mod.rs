// SPDX-License-Identifier: MPL-2.0
//! Iced host for snackbars.
//!
//! # Components
//!
//! - [`manager`] - `Manager`, the [`Host`](crate::snackbar::Host) that tracks the visible snackbar
//! - [`view`] - overlay rendering
//!
//! # Usage
//!
//! ```ignore
//! SnackbarBuilder::new(&mut self.snackbars, "Saved").show();
//!
//! // In the view function, stack the overlay on top of the screen
//! let overlay = snackbar::view_overlay(&self.snackbars, &self.i18n).map(Message::Snackbar);
//! ```
//!
//! # Design Considerations
//!
//! - One snackbar on screen at a time; a new one replaces the current one
//! - Auto-dismiss is driven by a periodic tick while a snackbar is visible

mod manager;
mod view;

pub use manager::{Manager, Message};
pub use view::{view, view_overlay};
