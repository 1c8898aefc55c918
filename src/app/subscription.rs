// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::config::TICK_INTERVAL_MS;
use super::Message;
use crate::ui::snackbar;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks while a snackbar is visible so it can auto-dismiss.
pub fn create_tick_subscription(has_snackbar: bool) -> Subscription<Message> {
    if has_snackbar {
        time::every(Duration::from_millis(TICK_INTERVAL_MS))
            .map(snackbar::Message::Tick)
            .map(Message::Snackbar)
    } else {
        Subscription::none()
    }
}
