// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Placement**: Snackbar margins and the estimated snackbar height
//! - **Timing**: Auto-dismiss polling

use crate::snackbar::PlacementMetrics;

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Default left/right margin of a placed snackbar (logical pixels).
pub const DEFAULT_HORIZONTAL_MARGIN: i32 = PlacementMetrics::DEFAULT_HORIZONTAL_MARGIN;

/// Minimum horizontal margin.
pub const MIN_HORIZONTAL_MARGIN: i32 = 0;

/// Maximum horizontal margin.
pub const MAX_HORIZONTAL_MARGIN: i32 = 200;

/// Default estimated snackbar height used for "above anchor" placement.
pub const DEFAULT_ESTIMATED_HEIGHT: i32 = PlacementMetrics::DEFAULT_ESTIMATED_HEIGHT;

/// Minimum estimated height.
pub const MIN_ESTIMATED_HEIGHT: i32 = 0;

/// Maximum estimated height.
pub const MAX_ESTIMATED_HEIGHT: i32 = 400;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Interval of the tick that checks snackbar auto-dismiss (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_HORIZONTAL_MARGIN >= 0);
    assert!(MAX_HORIZONTAL_MARGIN > MIN_HORIZONTAL_MARGIN);
    assert!(DEFAULT_HORIZONTAL_MARGIN >= MIN_HORIZONTAL_MARGIN);
    assert!(DEFAULT_HORIZONTAL_MARGIN <= MAX_HORIZONTAL_MARGIN);

    assert!(MIN_ESTIMATED_HEIGHT >= 0);
    assert!(MAX_ESTIMATED_HEIGHT > MIN_ESTIMATED_HEIGHT);
    assert!(DEFAULT_ESTIMATED_HEIGHT >= MIN_ESTIMATED_HEIGHT);
    assert!(DEFAULT_ESTIMATED_HEIGHT <= MAX_ESTIMATED_HEIGHT);

    assert!(TICK_INTERVAL_MS > 0);
};
