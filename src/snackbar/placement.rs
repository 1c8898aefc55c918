// SPDX-License-Identifier: MPL-2.0
//! Where a snackbar appears on screen.
//!
//! A [`Placement`] is the caller's request: a screen edge, or a side of an
//! anchor element. It is resolved into a concrete [`Layout`] (gravity plus
//! margins) when the snackbar is shown, using the host's
//! [`PlacementMetrics`].

/// Vertical alignment of the snackbar inside its host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gravity {
    Top,
    #[default]
    Bottom,
}

/// Bounds of an anchor element, in logical pixels from the top of the host
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorBounds {
    pub top: i32,
    pub bottom: i32,
    pub height: i32,
    pub padding_top: i32,
    pub padding_bottom: i32,
}

/// A UI element a snackbar can be placed next to.
pub trait Anchor {
    fn bounds(&self) -> AnchorBounds;
}

impl Anchor for AnchorBounds {
    fn bounds(&self) -> AnchorBounds {
        *self
    }
}

/// Requested placement of a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    ScreenBottom,
    ScreenTop,
    AboveAnchor(AnchorBounds),
    BelowAnchor(AnchorBounds),
}

impl Placement {
    /// Placement at the given screen edge.
    #[must_use]
    pub fn screen(gravity: Gravity) -> Self {
        match gravity {
            Gravity::Top => Placement::ScreenTop,
            Gravity::Bottom => Placement::ScreenBottom,
        }
    }

    /// Placement on one side of `anchor`: `Top` means above it, `Bottom`
    /// below it. The anchor's bounds are captured now.
    pub fn relative_to(anchor: &impl Anchor, side: Gravity) -> Self {
        let bounds = anchor.bounds();
        match side {
            Gravity::Top => Placement::AboveAnchor(bounds),
            Gravity::Bottom => Placement::BelowAnchor(bounds),
        }
    }

    /// Resolves the request into gravity and margins.
    #[must_use]
    pub fn resolve(&self, metrics: &PlacementMetrics) -> Layout {
        let side = metrics.horizontal_margin;
        match self {
            Placement::ScreenBottom => Layout {
                gravity: Gravity::Bottom,
                margins: Margins::horizontal(side),
            },
            Placement::ScreenTop => Layout {
                gravity: Gravity::Top,
                margins: Margins::horizontal(side),
            },
            Placement::BelowAnchor(bounds) => Layout {
                gravity: Gravity::Top,
                margins: Margins {
                    top: bounds
                        .bottom
                        .saturating_add(bounds.height)
                        .saturating_add(bounds.padding_bottom)
                        .saturating_add(bounds.padding_top),
                    ..Margins::horizontal(side)
                },
            },
            Placement::AboveAnchor(bounds) => Layout {
                gravity: Gravity::Top,
                margins: Margins {
                    top: bounds.top.saturating_sub(metrics.estimated_height),
                    ..Margins::horizontal(side)
                },
            },
        }
    }
}

/// Margins around the snackbar, in logical pixels. May be negative when an
/// anchor sits close to the surface edge; renderers clamp as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Equal left and right margins, no vertical margin.
    #[must_use]
    pub const fn horizontal(side: i32) -> Self {
        Self::new(side, 0, side, 0)
    }
}

/// Resolved position of a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub gravity: Gravity,
    pub margins: Margins,
}

/// Constants used when resolving a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementMetrics {
    /// Left and right margin of every placed snackbar.
    pub horizontal_margin: i32,
    /// Assumed height of a single-line snackbar, used to place it above an
    /// anchor. This is an approximation (text line height plus vertical
    /// padding), not a measurement of the rendered widget.
    pub estimated_height: i32,
}

impl PlacementMetrics {
    pub const DEFAULT_HORIZONTAL_MARGIN: i32 = 48;
    /// Line height (84) plus vertical padding (28).
    pub const DEFAULT_ESTIMATED_HEIGHT: i32 = 84 + 28;
}

impl Default for PlacementMetrics {
    fn default() -> Self {
        Self {
            horizontal_margin: Self::DEFAULT_HORIZONTAL_MARGIN,
            estimated_height: Self::DEFAULT_ESTIMATED_HEIGHT,
        }
    }
}
