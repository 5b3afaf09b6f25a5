// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Amber call-to-action button ("View Resource", "Download vCard").
pub fn accent(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::AMBER_500,
        button::Status::Pressed => palette::AMBER_600,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => palette::AMBER_400,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent buttons laid over media (arrows, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Carousel arrows.
pub fn carousel_arrow(theme: &Theme, status: button::Status) -> button::Style {
    overlay(WHITE, opacity::CONTROL, opacity::CONTROL_HOVER)(theme, status)
}

/// Slide indicator dot; the active slide is drawn in amber.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::AMBER_400
        } else if matches!(status, button::Status::Hovered) {
            WHITE
        } else {
            Color {
                a: opacity::DOT_INACTIVE,
                ..WHITE
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text-only navigation link; the current screen is amber and bold.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base_text = theme.extended_palette().background.base.text;
        let text_color = match (active, status) {
            (true, _) => palette::AMBER_600,
            (false, button::Status::Hovered) => palette::AMBER_500,
            (false, _) => base_text,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Whole-card button around a talk card; hover lifts it with an amber glow.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    button::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: palette.background.base.text,
        border: Border {
            color: if hovered {
                palette::AMBER_400
            } else {
                palette.background.strong.color
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: if hovered { shadow::CARD_HOVER } else { shadow::NONE },
        snap: true,
    }
}

/// Quiet toggle used for "Pause/Play auto-rotate".
pub fn subtle(theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.2,
        _ => 0.1,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_dot_is_amber_regardless_of_status() {
        let style = dot(true)(&Theme::Light, button::Status::Hovered);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::AMBER_400))
        );
    }

    #[test]
    fn arrows_darken_on_hover() {
        let rest = carousel_arrow(&Theme::Dark, button::Status::Active);
        let hover = carousel_arrow(&Theme::Dark, button::Status::Hovered);
        let alpha = |style: button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected a solid background"),
        };
        assert!(alpha(hover) > alpha(rest));
    }
}
