// SPDX-License-Identifier: MPL-2.0
//! Engagement detail modal with the media carousel.
//!
//! The modal is a pure view of the carousel state: every control turns into a
//! [`Command`] that the app hands to the `CarouselController`. Arrows, dots and
//! the auto-rotate toggle only appear when the gallery has more than one
//! slide.

use crate::carousel::{CarouselState, Command};
use crate::content::{local_media_path, MediaDisplay, MediaItem, SpeakingEngagement};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub engagement: &'a SpeakingEngagement,
    pub state: CarouselState,
    pub media_root: Option<&'a Path>,
    /// Stack media above details instead of side by side.
    pub compact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Carousel(Command),
    CopyLink(String),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let media = media_column(&ctx);
    let details = details_column(&ctx);

    let body: Element<'a, Message> = if ctx.compact {
        scrollable(Column::new().spacing(spacing::LG).push(media).push(details)).into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(media).width(Length::FillPortion(3)))
            .push(scrollable(details).width(Length::FillPortion(2)))
            .into()
    };

    let close = button(Text::new("\u{00d7}").size(typography::TITLE_MD))
        .on_press(Message::Carousel(Command::Close))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::carousel_arrow);

    let dialog = Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .align_y(Vertical::Center)
                .push(
                    Text::new(ctx.engagement.title.as_str())
                        .size(typography::TITLE_MD)
                        .width(Length::Fill),
                )
                .push(close),
        )
        .push(body);

    Container::new(dialog)
        .padding(spacing::LG)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .style(styles::container::modal)
        .into()
}

fn media_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let engagement: &'a SpeakingEngagement = ctx.engagement;
    let gallery = &engagement.gallery;
    let len = gallery.len();
    let index = ctx.state.active_index;

    let slide = gallery
        .slide(index)
        .map(|item| slide_view(ctx.i18n, ctx.media_root, item, &engagement.title))
        .unwrap_or_else(|| Space::new().into());

    let mut stage = Stack::new().push(
        Container::new(slide)
            .width(Length::Fill)
            .height(sizing::MODAL_MEDIA_HEIGHT)
            .center_x(Length::Fill)
            .center_y(sizing::MODAL_MEDIA_HEIGHT)
            .style(styles::container::media_stage),
    );

    if len > 1 {
        stage = stage.push(arrows()).push(dots(len, index));
    }

    let mut column = Column::new().spacing(spacing::SM).push(stage);

    if len > 1 {
        let position = Text::new(ctx.i18n.tr_with_args(
            "modal-slide-position",
            &[
                ("current", (index + 1).to_string().as_str()),
                ("total", len.to_string().as_str()),
            ],
        ))
        .size(typography::CAPTION)
        .style(styles::text::muted);

        let toggle_key = if ctx.state.is_auto_playing {
            "modal-pause-autoplay"
        } else {
            "modal-play-autoplay"
        };
        let toggle = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY_SM))
            .on_press(Message::Carousel(Command::ToggleAutoPlay))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::subtle);

        column = column.push(
            Row::new()
                .align_y(Vertical::Center)
                .push(position)
                .push(Space::new().width(Length::Fill))
                .push(toggle),
        );
    }

    column.into()
}

fn arrows<'a>() -> Element<'a, Message> {
    let arrow = |glyph: &'static str, command: Command| {
        button(Text::new(glyph).size(typography::TITLE_MD))
            .on_press(Message::Carousel(command))
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::carousel_arrow)
    };

    Container::new(
        Row::new()
            .padding(spacing::MD)
            .align_y(Vertical::Center)
            .push(arrow("\u{2039}", Command::Previous))
            .push(Space::new().width(Length::Fill))
            .push(arrow("\u{203a}", Command::Next)),
    )
    .height(sizing::MODAL_MEDIA_HEIGHT)
    .center_y(sizing::MODAL_MEDIA_HEIGHT)
    .width(Length::Fill)
    .into()
}

fn dots<'a>(len: usize, active: usize) -> Element<'a, Message> {
    let dots = (0..len).map(|index| {
        let size = if index == active {
            sizing::CAROUSEL_DOT_ACTIVE
        } else {
            sizing::CAROUSEL_DOT
        };
        button(Space::new().width(size).height(size))
            .on_press(Message::Carousel(Command::JumpTo(index)))
            .padding(0)
            .style(styles::button::dot(index == active))
            .into()
    });

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .extend(dots),
    )
    .width(Length::Fill)
    .height(sizing::MODAL_MEDIA_HEIGHT)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .into()
}

fn slide_view<'a>(
    i18n: &I18n,
    media_root: Option<&Path>,
    item: &'a MediaItem,
    fallback_caption: &'a str,
) -> Element<'a, Message> {
    match item.display() {
        MediaDisplay::Image { source, caption } => match local_media_path(media_root, source) {
            Some(path) => Image::new(Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            None => placeholder(caption.unwrap_or(fallback_caption), source, None),
        },
        MediaDisplay::EmbeddedVideo { embed_url, title } => placeholder(
            title.unwrap_or(fallback_caption),
            embed_url,
            Some(i18n.tr("modal-copy-video-link")),
        ),
        MediaDisplay::VideoFile { source, title } => placeholder(
            title.unwrap_or(fallback_caption),
            source,
            Some(i18n.tr("modal-copy-video-link")),
        ),
        MediaDisplay::LinkCard { url, title } => placeholder(
            title.unwrap_or(fallback_caption),
            url,
            Some(i18n.tr("modal-view-resource")),
        ),
    }
}

/// Caption card for media that cannot be drawn in place.
fn placeholder<'a>(caption: &'a str, url: &'a str, action: Option<String>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(caption).size(typography::TITLE_SM))
        .push(Text::new(url).size(typography::CAPTION));

    if let Some(label) = action {
        column = column.push(
            button(Text::new(label).size(typography::BODY_SM))
                .on_press(Message::CopyLink(url.to_string()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::accent),
        );
    }

    column.into()
}

fn details_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let engagement = ctx.engagement;

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(heading(i18n, "modal-event-details"))
        .push(detail_line(i18n, "detail-event", &engagement.event))
        .push(detail_line(i18n, "detail-date", &engagement.date))
        .push(detail_line(i18n, "detail-location", &engagement.location))
        .push(heading(i18n, "modal-description"))
        .push(
            Text::new(engagement.description.as_str())
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        );

    if !engagement.takeaways.is_empty() {
        column = column.push(heading(i18n, "modal-takeaways"));
        for takeaway in &engagement.takeaways {
            column = column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Top)
                    .push(
                        Container::new(Space::new().width(spacing::XS).height(spacing::XS))
                            .padding([spacing::XXS + 2.0, 0.0])
                            .style(styles::container::bullet),
                    )
                    .push(
                        Text::new(takeaway.as_str())
                            .size(typography::BODY_SM)
                            .style(styles::text::muted),
                    ),
            );
        }
    }

    let resources: Vec<&MediaItem> = engagement.gallery.resources().collect();
    if !resources.is_empty() {
        column = column.push(heading(i18n, "modal-resources"));
        for resource in resources {
            let label = resource.caption().unwrap_or(resource.url());
            column = column.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(Message::CopyLink(resource.url().to_string()))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::accent),
            );
        }
    }

    column.into()
}

fn heading<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    Text::new(i18n.tr(key)).size(typography::TITLE_SM).into()
}

fn detail_line<'a>(i18n: &I18n, label_key: &str, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(label_key)).size(typography::BODY_SM))
        .push(
            Text::new(value)
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn render(engagement: &SpeakingEngagement, state: CarouselState, compact: bool) {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            engagement,
            state,
            media_root: None,
            compact,
        });
    }

    #[test]
    fn renders_every_builtin_engagement_at_every_slide() {
        let catalog = Catalog::builtin();
        for engagement in &catalog.engagements {
            for active_index in 0..engagement.gallery.len() {
                let state = CarouselState {
                    active_index,
                    is_open: true,
                    is_auto_playing: active_index == 0,
                    selected_gallery: Some(engagement.gallery.id()),
                };
                render(engagement, state, false);
                render(engagement, state, true);
            }
        }
    }

    #[test]
    fn placeholder_copies_its_url() {
        let item = MediaItem::video("https://www.youtube.com/embed/abc", "Keynote");
        let i18n = I18n::default();
        let _element = slide_view(&i18n, None, &item, "fallback");
        assert!(matches!(
            item.display(),
            MediaDisplay::EmbeddedVideo { embed_url, .. } if embed_url.ends_with("abc")
        ));
    }
}
