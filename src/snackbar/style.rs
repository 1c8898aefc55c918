// SPDX-License-Identifier: MPL-2.0
//! Visual style of a snackbar.
//!
//! Colors and backgrounds are plain values here; the host converts them to
//! its own toolkit types when rendering.

use super::text::ResourceId;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

/// Snackbar background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Color(Color),
    /// A host-provided drawable (gradient, image, ...).
    Resource(ResourceId),
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Background::Color(color)
    }
}

/// Visual options of a snackbar. Unset fields use the host's defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub background: Option<Background>,
    pub text_color: Option<Color>,
    pub action_text_color: Option<Color>,
    /// Shadow depth in logical pixels.
    pub elevation: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_argb_unpacks_channels() {
        let color = Color::from_argb(0x80FF_4020);
        assert_eq!(color, Color::from_rgba8(0xFF, 0x40, 0x20, 0x80));
    }

    #[test]
    fn white_is_opaque() {
        assert_eq!(Color::WHITE.a, 0xFF);
        assert_eq!(Color::from_argb(0xFFFF_FFFF), Color::WHITE);
    }

    #[test]
    fn default_style_leaves_everything_to_host() {
        let style = Style::default();
        assert!(style.background.is_none());
        assert!(style.text_color.is_none());
        assert!(style.action_text_color.is_none());
        assert!(style.elevation.is_none());
    }
}
