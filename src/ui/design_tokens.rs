// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Snackbar**: Snackbar surface defaults

## Examples

```
use iced_snackbar::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_800: Color = Color::from_rgb(0.196, 0.196, 0.196);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_800: Color = Color::from_rgb(0.1, 0.3, 0.6);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Component widths
    pub const DEMO_BUTTON_WIDTH: f32 = 260.0;
    pub const SNACKBAR_MAX_WIDTH: f32 = 560.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Action labels
    pub const LABEL: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Drop shadow for an element raised by `elevation` logical pixels.
    #[must_use]
    pub fn elevation(elevation: f32) -> Shadow {
        if elevation <= 0.0 {
            return NONE;
        }
        Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            offset: Vector {
                x: 0.0,
                y: elevation / 2.0,
            },
            blur_radius: elevation,
        }
    }
}

// ============================================================================
// Snackbar Surface
// ============================================================================

pub mod snackbar {
    use super::{palette, Color};

    /// Default background when the snackbar style sets none.
    pub const SURFACE: Color = palette::GRAY_800;
    /// Default message color.
    pub const TEXT: Color = palette::WHITE;
    /// Default action label color.
    pub const ACTION_TEXT: Color = palette::PRIMARY_400;
    pub const PADDING_VERTICAL: f32 = 14.0;
    pub const PADDING_HORIZONTAL: f32 = 24.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::SNACKBAR_MAX_WIDTH > sizing::DEMO_BUTTON_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn zero_elevation_has_no_shadow() {
        assert_eq!(shadow::elevation(0.0), shadow::NONE);
    }

    #[test]
    fn higher_elevation_casts_larger_shadow() {
        let low = shadow::elevation(2.0);
        let high = shadow::elevation(6.0);
        assert!(high.blur_radius > low.blur_radius);
        assert!(high.offset.y > low.offset.y);
    }
}
