// SPDX-License-Identifier: MPL-2.0
//! How long a snackbar stays on screen.

use std::time::Duration;

/// Display length of a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayDuration {
    /// 1.5 seconds.
    #[default]
    Short,
    /// 2.75 seconds.
    Long,
    /// Stays until dismissed by the user or an action.
    Indefinite,
    /// Custom length in milliseconds.
    Millis(u32),
}

impl DisplayDuration {
    pub const SHORT_MS: u32 = 1500;
    pub const LONG_MS: u32 = 2750;

    /// Returns the auto-dismiss delay, or `None` if the snackbar never
    /// dismisses on its own.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        match self {
            DisplayDuration::Short => Some(Duration::from_millis(u64::from(Self::SHORT_MS))),
            DisplayDuration::Long => Some(Duration::from_millis(u64::from(Self::LONG_MS))),
            DisplayDuration::Indefinite => None,
            DisplayDuration::Millis(ms) => Some(Duration::from_millis(u64::from(*ms))),
        }
    }
}

impl From<u32> for DisplayDuration {
    fn from(ms: u32) -> Self {
        DisplayDuration::Millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_short() {
        assert_eq!(DisplayDuration::default(), DisplayDuration::Short);
    }

    #[test]
    fn long_outlasts_short() {
        let short = DisplayDuration::Short.auto_dismiss_after().unwrap();
        let long = DisplayDuration::Long.auto_dismiss_after().unwrap();
        assert!(long > short);
    }

    #[test]
    fn indefinite_never_auto_dismisses() {
        assert!(DisplayDuration::Indefinite.auto_dismiss_after().is_none());
    }

    #[test]
    fn millis_maps_directly() {
        assert_eq!(
            DisplayDuration::from(4000_u32).auto_dismiss_after(),
            Some(Duration::from_secs(4))
        );
    }
}
