// SPDX-License-Identifier: MPL-2.0
//! Drawable resources that snackbars can reference by ID.
//!
//! `Background::Resource` values are resolved against this catalog when a
//! snackbar is rendered.

use crate::snackbar::{self, ResourceId};
use crate::ui::design_tokens::palette;
use iced::gradient::{self, Gradient};
use iced::{Background, Color, Radians};

/// Brand gradient, left to right.
pub const BG_BRAND: &str = "snackbar-bg-brand";
/// Flat error surface.
pub const BG_ERROR: &str = "snackbar-bg-error";
/// Flat success surface.
pub const BG_SUCCESS: &str = "snackbar-bg-success";

/// Looks up a background drawable.
#[must_use]
pub fn background(id: &ResourceId) -> Option<Background> {
    match id.as_str() {
        BG_BRAND => Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
                .add_stop(0.0, palette::PRIMARY_800)
                .add_stop(1.0, palette::PRIMARY_500),
        ))),
        BG_ERROR => Some(Background::Color(palette::ERROR_500)),
        BG_SUCCESS => Some(Background::Color(palette::SUCCESS_500)),
        _ => None,
    }
}

/// Converts a snackbar color to an Iced color.
#[must_use]
pub fn color(color: snackbar::Color) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_backgrounds_resolve() {
        for id in [BG_BRAND, BG_ERROR, BG_SUCCESS] {
            assert!(background(&ResourceId::new(id)).is_some(), "{id} should resolve");
        }
    }

    #[test]
    fn unknown_background_is_none() {
        assert!(background(&ResourceId::new("no-such-drawable")).is_none());
    }

    #[test]
    fn color_conversion_keeps_channels() {
        let converted = color(snackbar::Color::from_rgba8(255, 0, 0, 255));
        assert_eq!(converted, Color::from_rgb8(255, 0, 0));
        assert_eq!(color(snackbar::Color::WHITE), Color::WHITE);
    }
}
