// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::{demo_screen, snackbar};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snackbars: &'a snackbar::Manager,
}

/// Renders the demo screen with the snackbar overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = Container::new(demo_screen::view(ctx.i18n).map(Message::Demo))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = snackbar::view_overlay(ctx.snackbars, ctx.i18n).map(Message::Snackbar);

    Stack::new()
        .push(screen)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
