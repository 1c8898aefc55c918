// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a fluent snackbar notification builder with an Iced demo.
//!
//! The [`snackbar`] module is toolkit-agnostic: it accumulates a notification
//! configuration and hands a finished [`snackbar::Snackbar`] to a
//! [`snackbar::Host`]. The [`ui`] and [`app`] modules provide the Iced host and
//! a demo screen with four placement variants.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod snackbar;
pub mod ui;
