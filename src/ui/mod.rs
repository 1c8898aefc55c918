// SPDX-License-Identifier: MPL-2.0
//! User interface components for the snackbar demo.
//!
//! # Screens
//!
//! - [`demo_screen`] - Four buttons, one per snackbar placement
//!
//! # Shared Infrastructure
//!
//! - [`snackbar`] - Iced host that displays and dismisses snackbars
//! - [`resources`] - Named backgrounds referenced by snackbar styles
//! - [`styles`] - Centralized button styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod demo_screen;
pub mod design_tokens;
pub mod resources;
pub mod snackbar;
pub mod styles;
pub mod theming;
