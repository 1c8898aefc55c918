// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle management.
//!
//! The `Manager` is the Iced application's [`Host`]: it receives finished
//! snackbars, keeps the visible one, dismisses it when its duration runs out
//! and dispatches action clicks.

use crate::snackbar::{ClickContext, Host, PlacementMetrics, Snackbar, SnackbarId};
use std::time::Instant;

/// Messages for snackbar state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The snackbar card was clicked outside its action.
    Dismiss(SnackbarId),
    /// The action button of a snackbar was clicked.
    ActionClicked(SnackbarId),
    /// Tick for checking the auto-dismiss timer.
    Tick(Instant),
}

/// A snackbar on screen.
#[derive(Debug)]
pub struct Visible {
    id: SnackbarId,
    snackbar: Snackbar,
    shown_at: Instant,
}

impl Visible {
    #[must_use]
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    #[must_use]
    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.snackbar
            .duration()
            .auto_dismiss_after()
            .is_some_and(|after| now.saturating_duration_since(self.shown_at) >= after)
    }
}

/// Shows at most one snackbar at a time.
#[derive(Debug, Default)]
pub struct Manager {
    visible: Option<Visible>,
    metrics: PlacementMetrics,
}

impl Manager {
    /// Creates an empty manager with default placement metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager using `metrics` to place snackbars.
    #[must_use]
    pub fn with_metrics(metrics: PlacementMetrics) -> Self {
        Self {
            visible: None,
            metrics,
        }
    }

    /// Shows `snackbar` as of `now`, replacing any visible snackbar.
    pub fn present_at(&mut self, snackbar: Snackbar, now: Instant) -> SnackbarId {
        let id = SnackbarId::new();
        if let Some(previous) = self.visible.take() {
            tracing::debug!(replaced = ?previous.id, by = ?id, "replacing visible snackbar");
        }
        tracing::info!(?id, gravity = ?snackbar.layout().gravity, "snackbar shown");
        self.visible = Some(Visible {
            id,
            snackbar,
            shown_at: now,
        });
        id
    }

    /// Dismisses a snackbar by its ID.
    ///
    /// Returns `true` if the snackbar was visible and has been removed.
    pub fn dismiss(&mut self, id: SnackbarId) -> bool {
        if self.visible.as_ref().is_some_and(|visible| visible.id == id) {
            self.visible = None;
            tracing::debug!(?id, "snackbar dismissed");
            return true;
        }
        false
    }

    /// Runs the action handler of the visible snackbar `id`.
    ///
    /// Returns `true` if an action was run. The snackbar is dismissed only
    /// if the handler asked for it.
    pub fn click_action(&mut self, id: SnackbarId) -> bool {
        let Some(visible) = self.visible.as_mut().filter(|visible| visible.id == id) else {
            return false;
        };
        let Some(action) = visible.snackbar.action_mut() else {
            return false;
        };

        let mut ctx = ClickContext::new(id);
        action.handler.invoke(&mut ctx);
        tracing::debug!(?id, dismiss = ctx.dismiss_requested(), "snackbar action clicked");

        if ctx.dismiss_requested() {
            self.dismiss(id);
        }
        true
    }

    /// Dismisses the visible snackbar if it has expired at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(id) = self
            .visible
            .as_ref()
            .filter(|visible| visible.is_expired(now))
            .map(Visible::id)
        {
            self.dismiss(id);
        }
    }

    /// Handles a snackbar message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::ActionClicked(id) => {
                self.click_action(*id);
            }
            Message::Tick(now) => {
                self.tick_at(*now);
            }
        }
    }

    /// Returns the visible snackbar, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&Visible> {
        self.visible.as_ref()
    }

    /// Returns whether a snackbar is on screen.
    #[must_use]
    pub fn has_snackbar(&self) -> bool {
        self.visible.is_some()
    }
}

impl Host for Manager {
    fn present(&mut self, snackbar: Snackbar) -> SnackbarId {
        self.present_at(snackbar, Instant::now())
    }

    fn placement_metrics(&self) -> PlacementMetrics {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::{
        ActionHandler, AnchorBounds, DisplayDuration, Gravity, Margins, NotificationState,
        SnackbarBuilder,
    };
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_snackbar());
        assert!(manager.visible().is_none());
    }

    #[test]
    fn show_makes_snackbar_visible() {
        let mut manager = Manager::new();
        let id = SnackbarBuilder::new(&mut manager, "msg").show();
        assert_eq!(manager.visible().map(Visible::id), Some(id));
    }

    #[test]
    fn new_snackbar_replaces_visible_one() {
        let mut manager = Manager::new();
        let first = SnackbarBuilder::new(&mut manager, "first").show();
        let second = SnackbarBuilder::new(&mut manager, "second").show();

        assert_ne!(first, second);
        assert_eq!(manager.visible().map(Visible::id), Some(second));
        assert!(!manager.dismiss(first));
    }

    #[test]
    fn dismiss_removes_visible() {
        let mut manager = Manager::new();
        let id = SnackbarBuilder::new(&mut manager, "msg").show();
        assert!(manager.dismiss(id));
        assert!(!manager.has_snackbar());
    }

    #[test]
    fn action_without_handler_dismisses() {
        let mut manager = Manager::new();
        let id = SnackbarBuilder::new(&mut manager, "msg")
            .set_action_text("OK", None)
            .show();

        assert!(manager.click_action(id));
        assert!(!manager.has_snackbar());
    }

    #[test]
    fn action_callback_runs_once_without_dismissing() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut manager = Manager::new();
        let id = SnackbarBuilder::new(&mut manager, "msg")
            .set_action_text(
                "Undo",
                Some(ActionHandler::callback(move |_| counter.set(counter.get() + 1))),
            )
            .show();

        manager.handle_message(&Message::ActionClicked(id));

        assert_eq!(calls.get(), 1);
        assert!(manager.has_snackbar());
    }

    #[test]
    fn action_callback_can_dismiss() {
        let mut manager = Manager::new();
        let id = SnackbarBuilder::new(&mut manager, "msg")
            .set_action_text("Close", Some(ActionHandler::callback(ClickContext::dismiss)))
            .show();

        manager.click_action(id);
        assert!(!manager.has_snackbar());
    }

    #[test]
    fn click_without_action_is_ignored() {
        let mut manager = Manager::new();
        let id = SnackbarBuilder::new(&mut manager, "msg").show();
        assert!(!manager.click_action(id));
        assert!(manager.has_snackbar());
    }

    #[test]
    fn tick_dismisses_after_duration() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let snackbar = NotificationState::new("msg", DisplayDuration::Short)
            .finish(&PlacementMetrics::default());
        manager.present_at(snackbar, start);

        manager.tick_at(start + Duration::from_millis(1000));
        assert!(manager.has_snackbar());

        manager.tick_at(start + Duration::from_millis(1500));
        assert!(!manager.has_snackbar());
    }

    #[test]
    fn tick_message_uses_its_timestamp() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let snackbar = NotificationState::new("msg", DisplayDuration::Long)
            .finish(&PlacementMetrics::default());
        manager.present_at(snackbar, start);

        manager.handle_message(&Message::Tick(start + Duration::from_millis(2000)));
        assert!(manager.has_snackbar());

        manager.handle_message(&Message::Tick(start + Duration::from_millis(2750)));
        assert!(!manager.has_snackbar());
    }

    #[test]
    fn dismiss_message_ignores_stale_id() {
        let mut manager = Manager::new();
        let stale = SnackbarBuilder::new(&mut manager, "first").show();
        let current = SnackbarBuilder::new(&mut manager, "second").show();

        manager.handle_message(&Message::Dismiss(stale));
        assert_eq!(manager.visible().map(Visible::id), Some(current));

        manager.handle_message(&Message::Dismiss(current));
        assert!(!manager.has_snackbar());
    }

    #[test]
    fn indefinite_snackbar_survives_ticks() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let snackbar = NotificationState::new("msg", DisplayDuration::Indefinite)
            .finish(&PlacementMetrics::default());
        manager.present_at(snackbar, start);

        manager.tick_at(start + Duration::from_secs(3600));
        assert!(manager.has_snackbar());
    }

    #[test]
    fn manager_metrics_drive_placement() {
        let mut manager = Manager::with_metrics(PlacementMetrics {
            horizontal_margin: 8,
            estimated_height: 40,
        });
        let anchor = AnchorBounds {
            top: 100,
            bottom: 136,
            height: 36,
            padding_top: 0,
            padding_bottom: 0,
        };
        SnackbarBuilder::new(&mut manager, "msg")
            .change_margin_gravity_relative_to(&anchor, Gravity::Top)
            .show();

        let layout = manager.visible().map(|v| v.snackbar().layout());
        assert_eq!(layout.map(|l| l.margins), Some(Margins::new(8, 60, 8, 0)));
    }
}
