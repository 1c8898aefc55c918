// SPDX-License-Identifier: MPL-2.0
//! Styled transient notifications ("snackbars").
//!
//! This module is the toolkit-agnostic core: it accumulates the display
//! options of one snackbar and hands the finished value to a [`Host`] that
//! knows how to render it.
//!
//! # Components
//!
//! - [`builder`] - `SnackbarBuilder`, the fluent entry point
//! - [`configurator`] - `Configurator`, the per-snackbar option accumulator
//! - [`state`] - `NotificationState` (in-flight) and `Snackbar` (frozen)
//! - [`placement`] - placement requests and the margin calculation
//! - [`style`] - colors, backgrounds and the visual `Style`
//! - [`action`] - action button handlers
//! - [`host`] - the rendering side's contract
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::snackbar::{Gravity, SnackbarBuilder};
//!
//! SnackbarBuilder::new(&mut manager, "Saved")
//!     .change_margin_gravity(Gravity::Top)
//!     .show();
//! ```

pub mod action;
pub mod builder;
pub mod configurator;
pub mod duration;
pub mod host;
pub mod placement;
pub mod state;
pub mod style;
pub mod text;

pub use action::{ActionHandler, ClickContext, SnackbarAction};
pub use builder::SnackbarBuilder;
pub use configurator::Configurator;
pub use duration::DisplayDuration;
pub use host::{Host, SnackbarId};
pub use placement::{Anchor, AnchorBounds, Gravity, Layout, Margins, Placement, PlacementMetrics};
pub use state::{NotificationState, Snackbar};
pub use style::{Background, Color, Style};
pub use text::{ResourceId, Text};
