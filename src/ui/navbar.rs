// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar links the Talks and Contact screens and opens the contact card.
//! Narrow windows get a menu toggle with a dropdown instead of inline links.
//! The bar hides while the page scrolls down and comes back when it scrolls
//! up or returns to the top, see [`NavVisibility`].

use crate::config::NAV_REVEAL_OFFSET_PX;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Window width below which the inline links collapse into a menu.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Sections the navbar can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Talks,
    Contact,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    pub menu_open: bool,
    /// Collapse links into the menu toggle.
    pub compact: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Navigate(Section),
    ShowContactCard,
    CycleTheme,
    CycleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Section),
    ShowContactCard,
    CycleTheme,
    CycleLanguage,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
        Message::ShowContactCard => {
            *menu_open = false;
            Event::ShowContactCard
        }
        Message::CycleTheme => Event::CycleTheme,
        Message::CycleLanguage => Event::CycleLanguage,
    }
}

/// Hide-on-scroll-down state of the navbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavVisibility {
    last_offset: f32,
    visible: bool,
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self {
            last_offset: 0.0,
            visible: true,
        }
    }
}

impl NavVisibility {
    /// Feeds a new vertical scroll offset. Returns whether visibility changed.
    ///
    /// A repeated offset is not movement: the scrollable re-publishes its
    /// offset when its bounds change, e.g. when the bar itself reappears.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        if offset == self.last_offset {
            return false;
        }
        let visible = offset < self.last_offset || offset < NAV_REVEAL_OFFSET_PX;
        self.last_offset = offset;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the bar again, e.g. after switching screens.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // Three dots, as on the printed business card.
    let logo = Row::new()
        .spacing(spacing::XXS)
        .extend((0..3).map(|_| {
            Container::new(Space::new().width(spacing::MD).height(spacing::MD))
                .style(|theme: &Theme| container::Style {
                    background: Some(theme.extended_palette().background.base.text.into()),
                    border: Border {
                        radius: radius::FULL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .into()
        }));

    let logo = button(logo)
        .on_press(Message::Navigate(Section::Talks))
        .style(styles::button::nav_link(false))
        .padding(0);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::LG])
        .height(sizing::NAVBAR_HEIGHT)
        .align_y(Vertical::Center)
        .push(logo)
        .push(Space::new().width(Length::Fill));

    row = row.push(
        button(Text::new(ctx.i18n.tr(ctx.theme_mode.label_key())).size(typography::BODY_SM))
            .on_press(Message::CycleTheme)
            .style(styles::button::nav_link(false)),
    );
    row = row.push(
        button(Text::new(ctx.i18n.current_locale().to_string()).size(typography::BODY_SM))
            .on_press(Message::CycleLanguage)
            .style(styles::button::nav_link(false)),
    );

    if ctx.compact {
        row = row.push(
            button(Text::new("\u{2630}").size(typography::TITLE_MD))
                .on_press(Message::ToggleMenu)
                .style(styles::button::nav_link(ctx.menu_open)),
        );
    } else {
        for (label, message, active) in links(ctx) {
            row = row.push(
                button(Text::new(label).size(typography::BODY))
                    .on_press(message)
                    .style(styles::button::nav_link(active)),
            );
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = links(ctx).into_iter().map(|(label, message, active)| {
        button(Text::new(label))
            .on_press(message)
            .width(Length::Fill)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::nav_link(active))
            .into()
    });

    Container::new(Column::new().spacing(spacing::XXS).extend(items))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn links(ctx: &ViewContext<'_>) -> [(String, Message, bool); 3] {
    [
        (
            ctx.i18n.tr("nav-talks"),
            Message::Navigate(Section::Talks),
            ctx.active == Section::Talks,
        ),
        (
            ctx.i18n.tr("nav-contact"),
            Message::Navigate(Section::Contact),
            ctx.active == Section::Contact,
        ),
        (ctx.i18n.tr("nav-qr-code"), Message::ShowContactCard, false),
    ]
}
