// SPDX-License-Identifier: MPL-2.0
//! The rendering side's contract.

use super::placement::PlacementMetrics;
use super::state::Snackbar;

/// Unique identifier of a presented snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnackbarId(u64);

impl SnackbarId {
    /// Creates a new unique snackbar ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SnackbarId {
    fn default() -> Self {
        Self::new()
    }
}

/// A surface that can display snackbars.
///
/// The host owns everything outside the snackbar core: rendering, resource
/// lookup, timing and click dispatch.
pub trait Host {
    /// Displays `snackbar` now and returns its ID.
    fn present(&mut self, snackbar: Snackbar) -> SnackbarId;

    /// Metrics used to turn a placement request into margins.
    fn placement_metrics(&self) -> PlacementMetrics {
        PlacementMetrics::default()
    }
}

impl<H: Host + ?Sized> Host for &mut H {
    fn present(&mut self, snackbar: Snackbar) -> SnackbarId {
        (**self).present(snackbar)
    }

    fn placement_metrics(&self) -> PlacementMetrics {
        (**self).placement_metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snackbar_ids_are_unique() {
        assert_ne!(SnackbarId::new(), SnackbarId::new());
    }
}
