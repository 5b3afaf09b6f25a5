// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page (navbar plus the current screen) sits in a scrollable wrapped in
//! a scroll gate, so an open modal freezes the page underneath. Modals and
//! toasts are layered on top.

use super::{Message, Screen};
use crate::carousel::{CarouselState, Command};
use crate::content::{Catalog, ContactCard, SpeakingEngagement};
use crate::i18n::fluent::I18n;
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::contact_modal::{self, QrImage, ViewContext as ContactModalViewContext};
use crate::ui::design_tokens::sizing;
use crate::ui::media_modal::{self, ViewContext as MediaModalViewContext};
use crate::ui::modal::modal;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext, COMPACT_BREAKPOINT};
use crate::ui::notifications;
use crate::ui::talks::{self, ViewContext as TalksViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::scroll_gate;
use iced::widget::{scrollable, Column, Container, Space, Stack};
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub contact: &'a ContactCard,
    pub media_root: Option<&'a Path>,
    pub carousel: CarouselState,
    /// Engagement shown by the media modal, if open.
    pub engagement: Option<&'a SpeakingEngagement>,
    pub contact_open: bool,
    pub qr_code: &'a QrImage,
    pub vcard_downloading: bool,
    pub scroll_locked: bool,
    pub nav_visible: bool,
    pub menu_open: bool,
    pub window_width: f32,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

impl ViewContext<'_> {
    fn compact(&self) -> bool {
        self.window_width < COMPACT_BREAKPOINT
    }
}

/// Renders the page, then the open modal and the toasts on top of it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match ctx.screen {
        Screen::Talks => talks::view(TalksViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            media_root: ctx.media_root,
            width: ctx.window_width,
        })
        .map(Message::Talks),
        Screen::Contact => contact::view(ContactViewContext {
            i18n: ctx.i18n,
            card: ctx.contact,
            qr: ctx.qr_code,
            downloading: ctx.vcard_downloading,
        })
        .map(Message::Contact),
    };

    let page = scroll_gate(
        scrollable(screen)
            .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
            .width(Length::Fill)
            .height(Length::Fill),
        ctx.scroll_locked,
    );

    let navbar: Element<'_, Message> = if ctx.nav_visible {
        navbar::view(NavbarViewContext {
            i18n: ctx.i18n,
            active: ctx.screen.section(),
            menu_open: ctx.menu_open,
            compact: ctx.compact(),
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Navbar)
    } else {
        Space::new().height(0.0).into()
    };

    let base: Element<'_, Message> = Column::new()
        .push(navbar)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let with_modal = match (ctx.engagement, ctx.contact_open) {
        (_, true) => modal(
            base,
            contact_modal::view(ContactModalViewContext {
                i18n: ctx.i18n,
                card: ctx.contact,
                qr: ctx.qr_code,
            })
            .map(Message::ContactModal),
            Message::ContactModal(contact_modal::Message::Close),
        ),
        (Some(engagement), false) if ctx.carousel.is_open => modal(
            base,
            Container::new(
                media_modal::view(MediaModalViewContext {
                    i18n: ctx.i18n,
                    engagement,
                    state: ctx.carousel,
                    media_root: ctx.media_root,
                    compact: ctx.compact(),
                })
                .map(Message::MediaModal),
            )
            .padding(sizing::NAVBAR_HEIGHT / 2.0),
            Message::MediaModal(media_modal::Message::Carousel(Command::Close)),
        ),
        _ => base,
    };

    Stack::new()
        .push(with_modal)
        .push(notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
