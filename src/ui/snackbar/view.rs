// SPDX-License-Identifier: MPL-2.0
//! Snackbar rendering.
//!
//! A snackbar is a single-line card with an optional action button. The
//! overlay positions it by its resolved [`Layout`]: aligned to the top or
//! bottom of the window and padded by its margins.

use super::manager::{Manager, Message, Visible};
use crate::i18n::fluent::I18n;
use crate::snackbar::{Background, Gravity, Layout, SnackbarId, Style};
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, snackbar as tokens, spacing, typography};
use crate::ui::resources;
use iced::widget::{button, container, mouse_area, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Renders one snackbar card. Clicking the card outside its action
/// dismisses it.
pub fn view<'a>(visible: &'a Visible, i18n: &'a I18n) -> Element<'a, Message> {
    let snackbar = visible.snackbar();
    let colors = Colors::from_style(snackbar.style());

    let message_widget = Text::new(i18n.text(snackbar.message()))
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(colors.text),
        });

    let mut content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(action) = snackbar.action() {
        content = content.push(action_button(visible.id(), i18n.text(&action.label), colors.action));
    }

    let background = resolve_background(snackbar.style().background.as_ref());
    let elevation = snackbar.style().elevation.unwrap_or(0.0);

    let card = Container::new(content)
        .max_width(sizing::SNACKBAR_MAX_WIDTH)
        .width(Length::Fill)
        .padding([tokens::PADDING_VERTICAL, tokens::PADDING_HORIZONTAL])
        .style(move |_theme: &Theme| card_style(background.clone(), elevation));

    mouse_area(card).on_press(Message::Dismiss(visible.id())).into()
}

/// Renders the overlay holding the visible snackbar, if any.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(visible) = manager.visible() else {
        // Empty container that takes no space
        return Container::new(text("")).width(Length::Shrink).height(Length::Shrink).into();
    };

    let layout = visible.snackbar().layout();
    Container::new(view(visible, i18n))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(vertical_alignment(layout))
        .padding(padding(layout))
        .into()
}

fn action_button<'a>(id: SnackbarId, label: String, color: Color) -> Element<'a, Message> {
    button(Text::new(label).size(typography::LABEL))
        .on_press(Message::ActionClicked(id))
        .padding([spacing::XXS, spacing::XS])
        .style(move |_theme: &Theme, status: button::Status| action_button_style(color, status))
        .into()
}

/// Resolved colors of a snackbar, with defaults applied.
#[derive(Debug, Clone, Copy)]
struct Colors {
    text: Color,
    action: Color,
}

impl Colors {
    fn from_style(style: &Style) -> Self {
        Self {
            text: style.text_color.map_or(tokens::TEXT, resources::color),
            action: style.action_text_color.map_or(tokens::ACTION_TEXT, resources::color),
        }
    }
}

fn resolve_background(background: Option<&Background>) -> iced::Background {
    match background {
        Some(Background::Color(color)) => iced::Background::Color(resources::color(*color)),
        Some(Background::Resource(id)) => resources::background(id).unwrap_or_else(|| {
            tracing::warn!(resource = %id, "unknown snackbar background, using default surface");
            iced::Background::Color(tokens::SURFACE)
        }),
        None => iced::Background::Color(tokens::SURFACE),
    }
}

fn vertical_alignment(layout: Layout) -> alignment::Vertical {
    match layout.gravity {
        Gravity::Top => alignment::Vertical::Top,
        Gravity::Bottom => alignment::Vertical::Bottom,
    }
}

/// Overlay padding from the layout margins; negative margins clamp to zero.
fn padding(layout: Layout) -> Padding {
    let clamp = |value: i32| value.max(0) as f32;
    Padding {
        top: clamp(layout.margins.top),
        right: clamp(layout.margins.right),
        bottom: clamp(layout.margins.bottom),
        left: clamp(layout.margins.left),
    }
}

fn card_style(background: iced::Background, elevation: f32) -> container::Style {
    container::Style {
        background: Some(background),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::elevation(elevation),
        ..Default::default()
    }
}

fn action_button_style(color: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..color
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
