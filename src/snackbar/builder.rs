// SPDX-License-Identifier: MPL-2.0
//! Fluent builder over [`Configurator`].

use super::action::ActionHandler;
use super::configurator::Configurator;
use super::duration::DisplayDuration;
use super::host::{Host, SnackbarId};
use super::placement::{Anchor, Gravity};
use super::state::NotificationState;
use super::style::{Background, Color};
use super::text::{ResourceId, Text};

/// Elevation applied by [`SnackbarBuilder::new`]. Agreed with design; keep it.
pub const DEFAULT_ELEVATION: f32 = 6.0;

/// Fluent front-end for configuring and showing one snackbar.
///
/// Each call forwards to the wrapped [`Configurator`]; later calls override
/// earlier ones on the same field.
///
/// ```ignore
/// SnackbarBuilder::new(&mut manager, Text::resource("snackbar-screen-top"))
///     .change_margin_gravity(Gravity::Top)
///     .set_action_text("OK", None)
///     .show();
/// ```
#[derive(Debug)]
#[must_use = "a snackbar is only displayed once `show` or `build` is called"]
pub struct SnackbarBuilder<H: Host> {
    configurator: Configurator<H>,
}

impl<H: Host> SnackbarBuilder<H> {
    /// Short snackbar at the bottom of the screen with the default elevation.
    pub fn new(host: H, message: impl Into<Text>) -> Self {
        let mut configurator = Configurator::new(host, message);
        configurator.set_placement(Gravity::Bottom);
        configurator.set_elevation(DEFAULT_ELEVATION);
        Self { configurator }
    }

    /// Snackbar with an explicit duration; placement and elevation are left
    /// to the host.
    pub fn with_duration(host: H, message: impl Into<Text>, duration: impl Into<DisplayDuration>) -> Self {
        Self {
            configurator: Configurator::with_duration(host, message, duration.into()),
        }
    }

    #[must_use]
    pub fn state(&self) -> &NotificationState {
        self.configurator.state()
    }

    pub fn set_duration(mut self, duration: impl Into<DisplayDuration>) -> Self {
        self.configurator.set_duration(duration);
        self
    }

    /// `None` makes the action button dismiss the snackbar.
    pub fn set_action_text(mut self, label: impl Into<Text>, handler: Option<ActionHandler>) -> Self {
        self.configurator.set_action_text(label, handler);
        self
    }

    pub fn set_action_text_config(mut self, label: impl Into<Text>, handler: ActionHandler) -> Self {
        self.configurator.set_action_text(label, Some(handler));
        self
    }

    pub fn set_action_text_color(mut self, color: Color) -> Self {
        self.configurator.set_action_text_color(color);
        self
    }

    pub fn set_text(mut self, text: impl Into<ResourceId>) -> Self {
        self.configurator.set_text(text.into());
        self
    }

    pub fn change_background_and_text_color(mut self, background: Option<Background>, color: Color) -> Self {
        self.configurator.change_background_and_text_color(background, color);
        self
    }

    pub fn change_background_color(mut self, color: Color) -> Self {
        self.configurator.change_background_color(color);
        self
    }

    pub fn change_background_resource(mut self, resource: impl Into<ResourceId>) -> Self {
        self.configurator.change_background_resource(resource.into());
        self
    }

    pub fn change_text_color(mut self, color: Color) -> Self {
        self.configurator.change_text_color(color);
        self
    }

    /// Shows the snackbar at the top or bottom edge of the screen.
    pub fn change_margin_gravity(mut self, gravity: Gravity) -> Self {
        self.configurator.set_placement(gravity);
        self
    }

    /// Shows the snackbar above (`Top`) or below (`Bottom`) `anchor`.
    pub fn change_margin_gravity_relative_to(mut self, anchor: &impl Anchor, side: Gravity) -> Self {
        self.configurator.set_placement_relative_to(anchor, side);
        self
    }

    pub fn set_elevation(mut self, elevation: f32) -> Self {
        self.configurator.set_elevation(elevation);
        self
    }

    pub fn system_prompt(mut self, color: Color) -> Self {
        self.configurator.system_prompt(color);
        self
    }

    pub fn show(self) -> SnackbarId {
        self.configurator.show()
    }

    /// Same as [`SnackbarBuilder::show`].
    pub fn build(self) -> SnackbarId {
        self.show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::placement::{Margins, Placement, PlacementMetrics};
    use crate::snackbar::state::Snackbar;

    #[derive(Default)]
    struct RecordingHost {
        shown: Vec<Snackbar>,
    }

    impl Host for RecordingHost {
        fn present(&mut self, snackbar: Snackbar) -> SnackbarId {
            self.shown.push(snackbar);
            SnackbarId::new()
        }
    }

    #[test]
    fn new_defaults_to_bottom_with_elevation() {
        let mut host = RecordingHost::default();
        let builder = SnackbarBuilder::new(&mut host, "msg");
        assert_eq!(builder.state().placement, Some(Placement::ScreenBottom));
        assert_eq!(builder.state().style.elevation, Some(DEFAULT_ELEVATION));
        assert_eq!(builder.state().duration, DisplayDuration::Short);
    }

    #[test]
    fn with_duration_applies_no_defaults() {
        let mut host = RecordingHost::default();
        let builder = SnackbarBuilder::with_duration(&mut host, "msg", 3000_u32);
        assert_eq!(builder.state().placement, None);
        assert_eq!(builder.state().style.elevation, None);
        assert_eq!(builder.state().duration, DisplayDuration::Millis(3000));
    }

    #[test]
    fn chained_calls_match_direct_configurator_calls() {
        let mut chained_host = RecordingHost::default();
        SnackbarBuilder::with_duration(&mut chained_host, "msg", DisplayDuration::Short)
            .set_duration(DisplayDuration::Long)
            .set_elevation(2.0)
            .show();

        let mut direct_host = RecordingHost::default();
        let mut configurator = Configurator::new(&mut direct_host, "msg");
        configurator.set_duration(DisplayDuration::Long);
        configurator.set_elevation(2.0);
        configurator.show();

        let chained = &chained_host.shown[0];
        let direct = &direct_host.shown[0];
        assert_eq!(chained.duration(), direct.duration());
        assert_eq!(chained.style(), direct.style());
        assert_eq!(chained.layout(), direct.layout());
        assert_eq!(chained.message(), direct.message());
    }

    #[test]
    fn top_gravity_end_to_end() {
        let mut host = RecordingHost::default();
        SnackbarBuilder::new(&mut host, "msg")
            .change_margin_gravity(Gravity::Top)
            .show();

        let shown = &host.shown[0];
        assert_eq!(shown.layout().gravity, Gravity::Top);
        assert_eq!(shown.layout().margins, Margins::new(48, 0, 48, 0));
        assert_eq!(shown.style().elevation, Some(6.0));
    }

    #[test]
    fn build_is_show() {
        let mut host = RecordingHost::default();
        SnackbarBuilder::new(&mut host, "msg").build();
        assert_eq!(host.shown.len(), 1);
    }

    #[test]
    fn action_text_config_keeps_handler() {
        let mut host = RecordingHost::default();
        SnackbarBuilder::new(&mut host, "msg")
            .set_action_text_config("Undo", ActionHandler::callback(|_| {}))
            .show();

        let action = host.shown[0].action().expect("action should be set");
        assert_eq!(action.label, Text::from("Undo"));
        assert!(matches!(action.handler, ActionHandler::Callback(_)));
    }

    #[test]
    fn action_text_color_is_forwarded() {
        let mut host = RecordingHost::default();
        let accent = Color::from_rgb8(0x03, 0xDA, 0xC5);
        SnackbarBuilder::new(&mut host, "msg")
            .set_action_text("Retry", None)
            .set_action_text_color(accent)
            .show();

        assert_eq!(host.shown[0].style().action_text_color, Some(accent));
    }

    #[test]
    fn default_metrics_used_without_override() {
        assert_eq!(
            RecordingHost::default().placement_metrics(),
            PlacementMetrics::default()
        );
    }
}
