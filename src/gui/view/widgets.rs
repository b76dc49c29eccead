//! Reusable small widgets/helpers used across view modules.
//!
//! Both panels and all button rows go through these so sizing stays in
//! `constants.rs` instead of being repeated per panel.

use iced::widget::{Column, button, column, container, text};
use iced::{Element, Length};

use super::super::state::Message;
use super::constants::{PANEL_PAD, PANEL_TITLE, TRANSPORT_TEXT};

/// Titled, padded box.
pub(crate) fn panel<'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> iced::widget::Container<'a, Message> {
    let content: Element<'a, Message> = content.into();
    let body: Column<'a, Message> = column![text(title).size(PANEL_TITLE), content].spacing(10);
    container(body).padding(PANEL_PAD)
}

/// Text button; `None` renders it disabled.
pub(crate) fn action_button(label: &str, on_press: Option<Message>) -> iced::widget::Button<'_, Message> {
    button(text(label)).on_press_maybe(on_press)
}

/// Larger symbol button for the transport row.
pub(crate) fn transport_button(symbol: &str, on_press: Option<Message>) -> iced::widget::Button<'_, Message> {
    button(text(symbol).size(TRANSPORT_TEXT))
        .padding([6, 14])
        .width(Length::Shrink)
        .on_press_maybe(on_press)
}
