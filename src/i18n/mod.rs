// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Snackbar messages and labels that are [`Text::Resource`] values are
//! resolved here, through Fluent message keys.
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to `en-US` when a locale or key is missing
//!
//! [`Text::Resource`]: crate::snackbar::Text::Resource

pub mod fluent;
