// SPDX-License-Identifier: MPL-2.0
//! Talks screen: the speaking engagement grid and the featured videos.
//!
//! Each card opens its engagement's gallery in the media modal. The grid
//! reflows to as many columns as the window width allows.

use crate::content::{local_media_path, Catalog, FeaturedVideo, SpeakingEngagement};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Contextual data needed to render the talks screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub media_root: Option<&'a Path>,
    /// Current window width, used to pick the number of grid columns.
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenEngagement(u32),
    CopyLink(String),
}

/// Number of card columns that fit in `width`, between 1 and 3.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    let per_card = sizing::CARD_WIDTH + spacing::XL;
    ((width / per_card).floor() as usize).clamp(1, 3)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let columns = columns_for_width(ctx.width);

    let mut page = Column::new()
        .spacing(spacing::XXL)
        .padding([spacing::XL, spacing::LG])
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    page = page.push(section_title(ctx.i18n.tr("talks-heading")));

    let cards: Vec<Element<'a, Message>> = ctx
        .catalog
        .engagements
        .iter()
        .enumerate()
        .map(|(position, engagement)| engagement_card(&ctx, position, engagement))
        .collect();
    page = page.push(grid(cards, columns));

    if !ctx.catalog.videos.is_empty() {
        page = page.push(section_title(ctx.i18n.tr("talks-videos-heading")));
        let videos = ctx
            .catalog
            .videos
            .iter()
            .enumerate()
            .map(|(position, video)| video_card(ctx.i18n, position, video))
            .collect();
        page = page.push(grid(videos, columns.min(2)));
    }

    page.into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(typography::TITLE_LG).into()
}

fn grid(cards: Vec<Element<'_, Message>>, columns: usize) -> Element<'_, Message> {
    let mut rows = Column::new().spacing(spacing::XL);
    let mut cards = cards.into_iter().peekable();

    while cards.peek().is_some() {
        let row = Row::new()
            .spacing(spacing::XL)
            .extend(cards.by_ref().take(columns));
        rows = rows.push(row);
    }

    rows.into()
}

/// "01", "02", ... above each card.
fn ordinal(position: usize) -> String {
    format!("{:02}", position + 1)
}

fn engagement_card<'a>(
    ctx: &ViewContext<'a>,
    position: usize,
    engagement: &'a SpeakingEngagement,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let slide_count = engagement.gallery.len().to_string();
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(detail_line(i18n.tr("detail-event"), &engagement.event))
        .push(detail_line(i18n.tr("detail-date"), &engagement.date))
        .push(detail_line(i18n.tr("detail-location"), &engagement.location));

    let body = Column::new()
        .spacing(spacing::SM)
        .width(sizing::CARD_WIDTH)
        .push(
            Text::new(ordinal(position))
                .size(typography::DISPLAY)
                .style(styles::text::muted),
        )
        .push(Text::new(engagement.title.as_str()).size(typography::TITLE_MD))
        .push(
            Container::new(Space::new().width(64.0).height(4.0))
                .style(styles::container::accent_rule),
        )
        .push(cover(ctx.media_root, &engagement.cover))
        .push(details)
        .push(
            Text::new(engagement.description.as_str())
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "talks-gallery-count",
                &[("count", slide_count.as_str())],
            ))
            .size(typography::CAPTION)
            .style(styles::text::accent),
        );

    button(body)
        .on_press(Message::OpenEngagement(engagement.id))
        .padding(spacing::LG)
        .style(styles::button::card)
        .into()
}

fn cover<'a>(media_root: Option<&Path>, url: &str) -> Element<'a, Message> {
    match local_media_path(media_root, url) {
        Some(path) => Image::new(Handle::from_path(path))
            .width(Length::Fill)
            .height(sizing::CARD_COVER_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Space::new().width(Length::Fill).height(sizing::CARD_COVER_HEIGHT))
            .style(styles::container::media_stage)
            .into(),
    }
}

fn detail_line<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(
            Text::new(value)
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .into()
}

fn video_card<'a>(i18n: &I18n, position: usize, video: &'a FeaturedVideo) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .width(sizing::CARD_WIDTH * 1.5)
        .push(
            Text::new(ordinal(position))
                .size(typography::DISPLAY)
                .style(styles::text::muted),
        )
        .push(Text::new(video.title.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(video.description.as_str())
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(
            button(Text::new(i18n.tr("talks-copy-video-link")).size(typography::BODY_SM))
                .on_press(Message::CopyLink(video.watch_url()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::accent),
        );

    Container::new(body).padding(spacing::LG).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_follows_width() {
        assert_eq!(columns_for_width(300.0), 1);
        assert_eq!(columns_for_width(800.0), 2);
        assert_eq!(columns_for_width(1100.0), 3);
        assert_eq!(columns_for_width(4000.0), 3);
    }

    #[test]
    fn ordinals_are_zero_padded() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(11), "12");
    }

    #[test]
    fn talks_view_renders_builtin_catalog() {
        let i18n = I18n::default();
        let catalog = Catalog::builtin();
        let _element = view(ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            media_root: None,
            width: 1100.0,
        });
    }
}
