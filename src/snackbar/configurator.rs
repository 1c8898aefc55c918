// SPDX-License-Identifier: MPL-2.0
//! Per-snackbar option accumulator.
//!
//! A `Configurator` owns the [`NotificationState`] of exactly one snackbar.
//! Setters only record values; nothing is sent to the host until
//! [`Configurator::show`], which consumes the configurator so a snackbar
//! cannot be shown twice or changed after it is on screen.

use super::action::{ActionHandler, SnackbarAction};
use super::duration::DisplayDuration;
use super::host::{Host, SnackbarId};
use super::placement::{Anchor, Gravity, Placement};
use super::state::NotificationState;
use super::style::{Background, Color};
use super::text::{ResourceId, Text};

/// Text color applied by [`Configurator::system_prompt`].
pub const SYSTEM_PROMPT_TEXT_COLOR: Color = Color::WHITE;

/// Accumulates the display options of one snackbar bound to a host.
#[derive(Debug)]
pub struct Configurator<H: Host> {
    host: H,
    state: NotificationState,
}

impl<H: Host> Configurator<H> {
    /// Creates a configurator with the short display duration.
    pub fn new(host: H, message: impl Into<Text>) -> Self {
        Self::with_duration(host, message, DisplayDuration::default())
    }

    pub fn with_duration(host: H, message: impl Into<Text>, duration: DisplayDuration) -> Self {
        Self {
            host,
            state: NotificationState::new(message, duration),
        }
    }

    /// Current, not yet shown, state.
    #[must_use]
    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn set_duration(&mut self, duration: impl Into<DisplayDuration>) {
        self.state.duration = duration.into();
    }

    /// Replaces the message with a text resource.
    pub fn set_text(&mut self, text: ResourceId) {
        self.state.message = Text::Resource(text);
    }

    /// Sets the action button. `None` makes the button dismiss the snackbar.
    pub fn set_action_text(&mut self, label: impl Into<Text>, handler: Option<ActionHandler>) {
        self.state.action = Some(SnackbarAction::new(label, handler));
    }

    pub fn set_action_text_color(&mut self, color: Color) {
        self.state.style.action_text_color = Some(color);
    }

    /// Sets the background (or clears it with `None`) and the text color.
    pub fn change_background_and_text_color(&mut self, background: Option<Background>, color: Color) {
        self.state.style.background = background;
        self.state.style.text_color = Some(color);
    }

    pub fn change_background_color(&mut self, color: Color) {
        self.state.style.background = Some(Background::Color(color));
    }

    pub fn change_background_resource(&mut self, resource: ResourceId) {
        self.state.style.background = Some(Background::Resource(resource));
    }

    pub fn change_text_color(&mut self, color: Color) {
        self.state.style.text_color = Some(color);
    }

    pub fn set_elevation(&mut self, elevation: f32) {
        self.state.style.elevation = Some(elevation);
    }

    /// Places the snackbar at the top or bottom edge of the host surface.
    pub fn set_placement(&mut self, gravity: Gravity) {
        self.state.placement = Some(Placement::screen(gravity));
    }

    /// Places the snackbar above (`Top`) or below (`Bottom`) `anchor`.
    pub fn set_placement_relative_to(&mut self, anchor: &impl Anchor, side: Gravity) {
        self.state.placement = Some(Placement::relative_to(anchor, side));
    }

    /// System-style prompt: `color` background with white text.
    pub fn system_prompt(&mut self, color: Color) {
        self.change_background_color(color);
        self.change_text_color(SYSTEM_PROMPT_TEXT_COLOR);
    }

    /// Hands the finished snackbar to the host.
    pub fn show(mut self) -> SnackbarId {
        let metrics = self.host.placement_metrics();
        let snackbar = self.state.finish(&metrics);
        tracing::debug!(layout = ?snackbar.layout(), duration = ?snackbar.duration(), "presenting snackbar");
        self.host.present(snackbar)
    }
}
