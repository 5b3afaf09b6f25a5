// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::text;
use iced::{Color, Theme};

/// Secondary text on cards and in modal details.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: opacity::MUTED_TEXT,
            ..theme.extended_palette().background.base.text
        }),
    }
}

/// Amber accent text (active nav entry, card numbers on hover).
pub fn accent(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::AMBER_600),
    }
}
