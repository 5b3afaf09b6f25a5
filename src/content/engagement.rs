// SPDX-License-Identifier: MPL-2.0
//! Speaking engagements and featured videos.

use super::{ContentError, Gallery, GalleryId, MediaItem};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A talk, workshop or panel, with the gallery shown in its detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakingEngagement {
    pub id: u32,
    pub title: String,
    pub event: String,
    pub date: String,
    pub location: String,
    /// Poster shown on the card.
    pub cover: String,
    pub description: String,
    pub takeaways: Vec<String>,
    pub gallery: Arc<Gallery>,
}

/// On-disk shape of an engagement. Converted into [`SpeakingEngagement`]
/// once its gallery has been validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementRecord {
    pub id: u32,
    pub title: String,
    pub event: String,
    pub date: String,
    pub location: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub takeaways: Vec<String>,
    pub media: Vec<MediaItem>,
}

impl TryFrom<EngagementRecord> for SpeakingEngagement {
    type Error = ContentError;

    fn try_from(record: EngagementRecord) -> Result<Self, Self::Error> {
        let gallery = Gallery::new(GalleryId(record.id), record.media)?;
        Ok(Self {
            id: record.id,
            title: record.title,
            event: record.event,
            date: record.date,
            location: record.location,
            cover: record.image,
            description: record.description,
            takeaways: record.takeaways,
            gallery: Arc::new(gallery),
        })
    }
}

/// A recorded talk hosted on YouTube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedVideo {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub video_id: String,
    pub embed_url: String,
}

impl FeaturedVideo {
    /// Public watch page, usable outside an embedded player.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(media: Vec<MediaItem>) -> EngagementRecord {
        EngagementRecord {
            id: 9,
            title: "Title".into(),
            event: "Event".into(),
            date: "May 16, 2025".into(),
            location: "Nairobi".into(),
            image: "/media/poster.jpg".into(),
            description: "Description".into(),
            takeaways: vec!["One".into()],
            media,
        }
    }

    #[test]
    fn record_converts_with_gallery_id_from_engagement() {
        let engagement = SpeakingEngagement::try_from(record(vec![MediaItem::image(
            "/media/a.jpg",
            "A",
        )]))
        .expect("valid record");

        assert_eq!(engagement.gallery.id(), GalleryId(9));
        assert_eq!(engagement.cover, "/media/poster.jpg");
        assert_eq!(engagement.gallery.len(), 1);
    }

    #[test]
    fn record_without_slides_is_rejected() {
        let result = SpeakingEngagement::try_from(record(vec![MediaItem::link(
            "https://example.org",
            "Page",
        )]));
        assert_eq!(result, Err(ContentError::NoSlides { gallery: 9 }));
    }

    #[test]
    fn watch_url_uses_video_id() {
        let video = FeaturedVideo {
            id: 1,
            title: "T".into(),
            description: "D".into(),
            video_id: "cTGCtd0oY1U".into(),
            embed_url: "https://www.youtube.com/embed/cTGCtd0oY1U".into(),
        };
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=cTGCtd0oY1U");
    }
}
