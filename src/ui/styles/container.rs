// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed full-window layer behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dialog surface (media modal, contact modal).
pub fn modal(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MODAL,
        ..Default::default()
    }
}

/// Letterboxed area the active slide is drawn in.
pub fn media_stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top navigation bar, slightly translucent over the page.
pub fn navbar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Short amber underline under card titles.
pub fn accent_rule(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::AMBER_400)),
        ..Default::default()
    }
}

/// Round amber bullet in front of a takeaway.
pub fn bullet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::AMBER_400)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Notification banner, tinted by severity.
pub fn banner(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(theme.extended_palette().background.weak.color)),
        text_color: Some(theme.extended_palette().background.base.text),
        border: Border {
            color: tint,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
