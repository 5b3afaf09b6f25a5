// SPDX-License-Identifier: MPL-2.0
//! Contact screen: digital contact card, contact details and scanning tips.

use crate::content::ContactCard;
use crate::i18n::fluent::I18n;
use crate::ui::contact_modal::QrImage;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub card: &'a ContactCard,
    pub qr: &'a QrImage,
    /// A vCard download is in flight.
    pub downloading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    CopyLink(String),
    DownloadVCard,
    ShowQrModal,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let card = ctx.card;

    let intro = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("contact-heading")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("contact-subtitle"))
                .size(typography::BODY)
                .style(styles::text::muted),
        );

    Column::new()
        .spacing(spacing::XXL)
        .padding([spacing::XL, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(intro)
        .push(qr_card(&ctx))
        .push(details(i18n, card))
        .push(
            Text::new(card.headline.as_str())
                .size(typography::BODY_SM)
                .style(styles::text::muted)
                .width(sizing::MODAL_MAX_WIDTH * 0.7),
        )
        .push(instructions(i18n))
        .into()
}

fn qr_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let code: Element<'a, Message> = match ctx.qr {
        QrImage::Ready(handle) => button(
            Image::new(handle.clone())
                .width(sizing::QR_CODE)
                .height(sizing::QR_CODE)
                .content_fit(ContentFit::Contain),
        )
        .on_press(Message::ShowQrModal)
        .padding(spacing::SM)
        .style(styles::button::subtle)
        .into(),
        _ => Container::new(
            Text::new(ctx.card.vcard_url.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .width(sizing::QR_CODE)
        .height(sizing::QR_CODE)
        .center_x(sizing::QR_CODE)
        .center_y(sizing::QR_CODE)
        .into(),
    };

    let download_label = if ctx.downloading {
        i18n.tr("contact-downloading-vcard")
    } else {
        i18n.tr("contact-download-vcard")
    };
    let mut download = button(Text::new(download_label).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::accent);
    if !ctx.downloading {
        download = download.on_press(Message::DownloadVCard);
    }

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(download)
        .push(
            button(Text::new(i18n.tr("contact-copy-vcard-link")).size(typography::BODY_SM))
                .on_press(Message::CopyLink(ctx.card.vcard_url.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::subtle),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(code)
            .push(
                Text::new(i18n.tr("contact-modal-hint"))
                    .size(typography::CAPTION)
                    .style(styles::text::muted),
            )
            .push(actions),
    )
    .padding(spacing::LG)
    .style(styles::container::modal)
    .into()
}

fn details<'a>(i18n: &I18n, card: &'a ContactCard) -> Element<'a, Message> {
    let personal = Column::new()
        .spacing(spacing::SM)
        .width(Length::FillPortion(1))
        .push(Text::new(i18n.tr("contact-personal-heading")).size(typography::TITLE_SM))
        .push(entry(i18n, "contact-name", card.name.as_str(), None))
        .push(entry(i18n, "contact-email", card.email.as_str(), Some(card.mailto())))
        .push(entry(i18n, "contact-phone", card.phone.as_str(), Some(card.tel())));

    let online = Column::new()
        .spacing(spacing::SM)
        .width(Length::FillPortion(1))
        .push(Text::new(i18n.tr("contact-online-heading")).size(typography::TITLE_SM))
        .push(entry(
            i18n,
            "contact-website",
            display_host(&card.website),
            Some(card.website.clone()),
        ))
        .push(entry(
            i18n,
            "contact-linkedin",
            display_host(&card.linkedin),
            Some(card.linkedin.clone()),
        ))
        .push(entry(
            i18n,
            "contact-github",
            display_host(&card.github),
            Some(card.github.clone()),
        ));

    Row::new()
        .spacing(spacing::XL)
        .width(sizing::MODAL_MAX_WIDTH * 0.7)
        .push(personal)
        .push(online)
        .into()
}

/// Label, value and an optional copy button for the value's link.
fn entry<'a>(i18n: &I18n, label_key: &str, value: &'a str, link: Option<String>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(label_key)).size(typography::BODY_SM))
        .push(
            Text::new(value)
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        );

    if let Some(link) = link {
        row = row.push(
            button(Text::new(i18n.tr("contact-copy")).size(typography::CAPTION))
                .on_press(Message::CopyLink(link))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::subtle),
        );
    }

    row.into()
}

fn instructions<'a>(i18n: &I18n) -> Element<'a, Message> {
    let tips = ["contact-tip-iphone", "contact-tip-android", "contact-tip-other"]
        .into_iter()
        .map(|key| Text::new(i18n.tr(key)).size(typography::BODY_SM).into());

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("contact-tips-heading")).size(typography::TITLE_SM))
            .extend(tips),
    )
    .padding(spacing::MD)
    .width(sizing::MODAL_MAX_WIDTH * 0.7)
    .style(styles::container::banner(palette::AMBER_400))
    .into()
}

/// `https://www.linkedin.com/in/x` -> `linkedin.com/in/x`.
fn display_host(url: &str) -> &str {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme.strip_prefix("www.").unwrap_or(without_scheme)
}
