// SPDX-License-Identifier: MPL-2.0
//! Toast rendering, stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

fn toast<'a>(notification: &Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let dismiss = button(Text::new("\u{00d7}").size(typography::BODY))
        .on_press(Message::Dismiss(notification.id()))
        .padding([0.0, spacing::XS])
        .style(button::text);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr(notification.message_key()))
                .size(typography::BODY_SM)
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(sizing::TOAST_WIDTH)
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_style(theme, accent))
        .into()
}

/// Bottom-right overlay with every visible toast.
pub fn view_overlay<'a>(manager: &Manager, i18n: &I18n) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| toast(notification, i18n))
        .collect();

    if toasts.is_empty() {
        return Space::new().into();
    }

    Container::new(
        Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: accent,
            width: 1.5,
            radius: radius::MD.into(),
        },
        shadow: shadow::MODAL,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = view_overlay(&manager, &i18n);

        manager.push(Notification::success("notification-link-copied"));
        let _filled = view_overlay(&manager, &i18n);
    }
}
