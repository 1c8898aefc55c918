// SPDX-License-Identifier: MPL-2.0
//! Demo screen: four buttons, each showing a differently styled snackbar.
//!
//! The buttons are laid out with fixed sizes so the bounds of the anchor
//! button (the third one) can be computed without measuring the rendered
//! widgets. Both anchored snackbars are placed relative to it.

use crate::i18n::fluent::I18n;
use crate::snackbar::{AnchorBounds, Color, DisplayDuration, Gravity, Host, SnackbarBuilder, SnackbarId, Text};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::resources;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text as TextWidget};
use iced::{alignment, Element, Length, Theme};

/// Outer padding of the button column.
const PAGE_PADDING: f32 = spacing::LG;
/// Gap between buttons.
const BUTTON_SPACING: f32 = spacing::MD;
/// Vertical padding inside each button.
const BUTTON_PADDING_VERTICAL: f32 = spacing::XS;
/// Position of the anchor button in the column.
const ANCHOR_INDEX: usize = 2;

/// Background of the top-of-screen variant.
pub const INFO_COLOR: Color = Color::from_rgb8(0x64, 0x96, 0xFF);
/// Background of the above-anchor variant.
pub const WARNING_COLOR: Color = Color::from_rgb8(0xF1, 0xA6, 0x20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ShowAtScreenBottom,
    ShowAtScreenTop,
    ShowAboveAnchor,
    ShowBelowAnchor,
}

impl Message {
    pub const ALL: [Message; 4] = [
        Message::ShowAtScreenBottom,
        Message::ShowAtScreenTop,
        Message::ShowAboveAnchor,
        Message::ShowBelowAnchor,
    ];

    fn label_key(self) -> &'static str {
        match self {
            Message::ShowAtScreenBottom => "demo-button-screen-bottom",
            Message::ShowAtScreenTop => "demo-button-screen-top",
            Message::ShowAboveAnchor => "demo-button-above-anchor",
            Message::ShowBelowAnchor => "demo-button-below-anchor",
        }
    }
}

/// Bounds of the anchor button, from the top of the window.
#[must_use]
pub fn anchor_bounds() -> AnchorBounds {
    let top = PAGE_PADDING + ANCHOR_INDEX as f32 * (sizing::BUTTON_HEIGHT + BUTTON_SPACING);
    let height = sizing::BUTTON_HEIGHT;
    AnchorBounds {
        top: top.round() as i32,
        bottom: (top + height).round() as i32,
        height: height.round() as i32,
        padding_top: BUTTON_PADDING_VERTICAL.round() as i32,
        padding_bottom: BUTTON_PADDING_VERTICAL.round() as i32,
    }
}

/// Shows the snackbar variant for `message` on `host`.
pub fn show<H: Host>(message: Message, host: H) -> SnackbarId {
    match message {
        Message::ShowAtScreenBottom => SnackbarBuilder::new(host, Text::resource("snackbar-screen-bottom"))
            .set_action_text(Text::resource("snackbar-action-ok"), None)
            .show(),
        Message::ShowAtScreenTop => SnackbarBuilder::new(host, Text::resource("snackbar-screen-top"))
            .change_margin_gravity(Gravity::Top)
            .change_background_color(INFO_COLOR)
            .change_text_color(Color::WHITE)
            .show(),
        Message::ShowAboveAnchor => SnackbarBuilder::new(host, Text::resource("snackbar-above-anchor"))
            .change_margin_gravity_relative_to(&anchor_bounds(), Gravity::Top)
            .system_prompt(WARNING_COLOR)
            .show(),
        Message::ShowBelowAnchor => SnackbarBuilder::new(host, Text::resource("snackbar-below-anchor"))
            .change_margin_gravity_relative_to(&anchor_bounds(), Gravity::Bottom)
            .change_background_resource(resources::BG_BRAND)
            .set_duration(DisplayDuration::Long)
            .show(),
    }
}

/// Renders the button column.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let buttons = Message::ALL.into_iter().enumerate().map(|(index, message)| {
        let label = Container::new(TextWidget::new(i18n.tr(message.label_key())).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

        let style: fn(&Theme, button::Status) -> button::Style = if index == ANCHOR_INDEX {
            styles::button::anchor
        } else {
            styles::button::primary
        };

        let element: Element<'_, Message> = button(label)
            .on_press(message)
            .width(Length::Fixed(sizing::DEMO_BUTTON_WIDTH))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([BUTTON_PADDING_VERTICAL, spacing::MD])
            .style(style)
            .into();
        element
    });

    Column::with_children(buttons)
        .spacing(BUTTON_SPACING)
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::{Background, Margins, PlacementMetrics};
    use crate::ui::snackbar::Manager;

    fn shown(message: Message) -> Manager {
        let mut manager = Manager::new();
        show(message, &mut manager);
        manager
    }

    #[test]
    fn anchor_bounds_follow_fixed_layout() {
        assert_eq!(
            anchor_bounds(),
            AnchorBounds {
                top: 128,
                bottom: 164,
                height: 36,
                padding_top: 8,
                padding_bottom: 8,
            }
        );
    }

    #[test]
    fn screen_bottom_variant_has_dismiss_action() {
        let manager = shown(Message::ShowAtScreenBottom);
        let snackbar = manager.visible().expect("snackbar should be visible").snackbar();
        assert_eq!(snackbar.layout().gravity, Gravity::Bottom);
        assert_eq!(snackbar.layout().margins, Margins::new(48, 0, 48, 0));
        assert!(snackbar.action().is_some());
    }

    #[test]
    fn screen_top_variant_is_at_top() {
        let manager = shown(Message::ShowAtScreenTop);
        let snackbar = manager.visible().expect("snackbar should be visible").snackbar();
        assert_eq!(snackbar.layout().gravity, Gravity::Top);
        assert_eq!(snackbar.style().background, Some(Background::Color(INFO_COLOR)));
        assert_eq!(snackbar.style().elevation, Some(6.0));
    }

    #[test]
    fn above_anchor_variant_uses_estimated_height() {
        let manager = shown(Message::ShowAboveAnchor);
        let snackbar = manager.visible().expect("snackbar should be visible").snackbar();
        assert_eq!(
            snackbar.layout().margins.top,
            128 - PlacementMetrics::DEFAULT_ESTIMATED_HEIGHT
        );
        assert_eq!(snackbar.style().text_color, Some(Color::WHITE));
    }

    #[test]
    fn below_anchor_variant_uses_anchor_formula() {
        let manager = shown(Message::ShowBelowAnchor);
        let snackbar = manager.visible().expect("snackbar should be visible").snackbar();
        assert_eq!(snackbar.layout().margins.top, 164 + 36 + 8 + 8);
        assert_eq!(snackbar.duration(), DisplayDuration::Long);
    }

    #[test]
    fn every_button_has_a_translated_label() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::app::config::Config::default());
        for message in Message::ALL {
            assert!(!i18n.tr(message.label_key()).starts_with("MISSING"));
        }
    }
}
