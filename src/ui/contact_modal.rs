// SPDX-License-Identifier: MPL-2.0
//! "Scan to save contact" modal with the vCard QR code.
//!
//! The QR code is a PNG fetched once from the QR service; until it arrives
//! (or when it cannot be fetched) the modal shows the vCard link instead.

use crate::content::ContactCard;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    ContentFit, Element, Length,
};

/// Download state of the QR code image.
#[derive(Debug, Clone, Default)]
pub enum QrImage {
    #[default]
    NotRequested,
    Loading,
    Ready(Handle),
    Failed,
}

impl QrImage {
    /// Whether opening the modal should start a download.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        matches!(self, QrImage::NotRequested | QrImage::Failed)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub card: &'a ContactCard,
    pub qr: &'a QrImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Close,
    CopyLink(String),
    RetryQr,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let card = ctx.card;

    let close = button(Text::new("\u{00d7}").size(typography::TITLE_MD))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::subtle);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr("contact-modal-title"))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(close);

    let copy_vcard = button(Text::new(i18n.tr("contact-copy-vcard-link")).size(typography::BODY_SM))
        .on_press(Message::CopyLink(card.vcard_url.clone()))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::accent);

    let dialog = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(header)
        .push(Text::new(card.name.as_str()).size(typography::TITLE_SM))
        .push(qr_stage(i18n, card, ctx.qr))
        .push(
            Text::new(i18n.tr("contact-modal-hint"))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .push(copy_vcard);

    Container::new(dialog)
        .width(sizing::CONTACT_MODAL_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::modal)
        .into()
}

fn qr_stage<'a>(i18n: &I18n, card: &'a ContactCard, qr: &QrImage) -> Element<'a, Message> {
    let content: Element<'a, Message> = match qr {
        QrImage::Ready(handle) => Image::new(handle.clone())
            .width(sizing::QR_CODE)
            .height(sizing::QR_CODE)
            .content_fit(ContentFit::Contain)
            .into(),
        QrImage::NotRequested | QrImage::Loading => Text::new(i18n.tr("contact-qr-loading"))
            .size(typography::BODY_SM)
            .style(styles::text::muted)
            .into(),
        QrImage::Failed => Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("contact-qr-unavailable"))
                    .size(typography::BODY_SM)
                    .style(styles::text::muted),
            )
            .push(Text::new(card.vcard_url.as_str()).size(typography::CAPTION))
            .push(
                button(Text::new(i18n.tr("contact-qr-retry")).size(typography::BODY_SM))
                    .on_press(Message::RetryQr)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::subtle),
            )
            .into(),
    };

    Container::new(content)
        .width(sizing::QR_CODE + spacing::LG)
        .height(sizing::QR_CODE + spacing::LG)
        .center_x(sizing::QR_CODE + spacing::LG)
        .center_y(sizing::QR_CODE + spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_idle_or_failed_states_fetch() {
        assert!(QrImage::NotRequested.needs_fetch());
        assert!(QrImage::Failed.needs_fetch());
        assert!(!QrImage::Loading.needs_fetch());
        assert!(!QrImage::Ready(Handle::from_bytes(vec![0u8; 4])).needs_fetch());
    }

    #[test]
    fn renders_every_qr_state() {
        let i18n = I18n::default();
        let card = ContactCard::default();
        for qr in [
            QrImage::NotRequested,
            QrImage::Loading,
            QrImage::Failed,
            QrImage::Ready(Handle::from_bytes(vec![0u8; 4])),
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                card: &card,
                qr: &qr,
            });
        }
    }
}
