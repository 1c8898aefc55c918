// SPDX-License-Identifier: MPL-2.0
//! Snackbar state: the in-flight [`NotificationState`] and the frozen
//! [`Snackbar`] handed to the host.

use super::action::SnackbarAction;
use super::duration::DisplayDuration;
use super::placement::{Layout, Placement, PlacementMetrics};
use super::style::Style;
use super::text::Text;

/// Display options of one snackbar while it is being configured.
///
/// Every setter overwrites the previous value of its field.
#[derive(Debug)]
pub struct NotificationState {
    pub message: Text,
    pub duration: DisplayDuration,
    pub action: Option<SnackbarAction>,
    pub style: Style,
    /// `None` lets the host use its default position.
    pub placement: Option<Placement>,
}

impl NotificationState {
    pub fn new(message: impl Into<Text>, duration: DisplayDuration) -> Self {
        Self {
            message: message.into(),
            duration,
            action: None,
            style: Style::default(),
            placement: None,
        }
    }

    /// Freezes the state, resolving the placement with `metrics`.
    #[must_use]
    pub fn finish(self, metrics: &PlacementMetrics) -> Snackbar {
        let layout = self
            .placement
            .map(|placement| placement.resolve(metrics))
            .unwrap_or_default();

        Snackbar {
            message: self.message,
            duration: self.duration,
            action: self.action,
            style: self.style,
            layout,
        }
    }
}

/// A fully configured snackbar, ready to render.
#[derive(Debug)]
pub struct Snackbar {
    message: Text,
    duration: DisplayDuration,
    action: Option<SnackbarAction>,
    style: Style,
    layout: Layout,
}

impl Snackbar {
    #[must_use]
    pub fn message(&self) -> &Text {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn action(&self) -> Option<&SnackbarAction> {
        self.action.as_ref()
    }

    /// Mutable access for click dispatch; callbacks are `FnMut`.
    pub fn action_mut(&mut self) -> Option<&mut SnackbarAction> {
        self.action.as_mut()
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }
}
