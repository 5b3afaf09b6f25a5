// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content: media items, galleries, engagements and the
//! contact card.
//!
//! Everything here is built once at startup (from the builtin catalog or a
//! catalog file) and is immutable afterwards. The carousel only ever consumes
//! [`Gallery::len`] and [`Gallery::slide`].

pub mod catalog;
pub mod contact;
pub mod engagement;
pub mod remote;

pub use catalog::Catalog;
pub use contact::ContactCard;
pub use engagement::{FeaturedVideo, SpeakingEngagement};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while validating catalog content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("gallery {gallery} has no media items")]
    EmptyGallery { gallery: u32 },

    #[error("gallery {gallery} only contains links, nothing to display")]
    NoSlides { gallery: u32 },

    #[error("engagement id {id} is declared more than once")]
    DuplicateEngagement { id: u32 },
}

impl ContentError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::EmptyGallery { .. } => "error-content-empty-gallery",
            ContentError::NoSlides { .. } => "error-content-no-slides",
            ContentError::DuplicateEngagement { .. } => "error-content-duplicate-engagement",
        }
    }
}

/// Identity of a gallery, shared with its parent engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GalleryId(pub u32);

/// Kind tag of a [`MediaItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Link,
}

/// A single entry in a gallery.
///
/// Catalog files use an internally tagged representation:
///
/// ```toml
/// media = [
///     { type = "image", url = "/media/summit/close-up.jpg", alt = "Speaking" },
///     { type = "link", url = "https://example.org/slides", title = "Slides" },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    Video {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

/// How the rendering layer should present a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaDisplay<'a> {
    Image {
        source: &'a str,
        caption: Option<&'a str>,
    },
    /// Hosted player (YouTube) that cannot be decoded locally.
    EmbeddedVideo {
        embed_url: &'a str,
        title: Option<&'a str>,
    },
    VideoFile {
        source: &'a str,
        title: Option<&'a str>,
    },
    LinkCard {
        url: &'a str,
        title: Option<&'a str>,
    },
}

impl MediaItem {
    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        MediaItem::Image {
            url: url.into(),
            alt: Some(alt.into()),
        }
    }

    pub fn video(url: impl Into<String>, title: impl Into<String>) -> Self {
        MediaItem::Video {
            url: url.into(),
            title: Some(title.into()),
        }
    }

    pub fn link(url: impl Into<String>, title: impl Into<String>) -> Self {
        MediaItem::Link {
            url: url.into(),
            title: Some(title.into()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Image { .. } => MediaKind::Image,
            MediaItem::Video { .. } => MediaKind::Video,
            MediaItem::Link { .. } => MediaKind::Link,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            MediaItem::Image { url, .. } | MediaItem::Video { url, .. } | MediaItem::Link { url, .. } => {
                url
            }
        }
    }

    /// Alt text for images, title for videos and links.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        match self {
            MediaItem::Image { alt, .. } => alt.as_deref(),
            MediaItem::Video { title, .. } | MediaItem::Link { title, .. } => title.as_deref(),
        }
    }

    /// Images and videos take part in carousel navigation; links do not.
    #[must_use]
    pub fn is_slide(&self) -> bool {
        matches!(self, MediaItem::Image { .. } | MediaItem::Video { .. })
    }

    #[must_use]
    pub fn display(&self) -> MediaDisplay<'_> {
        match self {
            MediaItem::Image { url, alt } => MediaDisplay::Image {
                source: url,
                caption: alt.as_deref(),
            },
            MediaItem::Video { url, title } if is_hosted_video(url) => MediaDisplay::EmbeddedVideo {
                embed_url: url,
                title: title.as_deref(),
            },
            MediaItem::Video { url, title } => MediaDisplay::VideoFile {
                source: url,
                title: title.as_deref(),
            },
            MediaItem::Link { url, title } => MediaDisplay::LinkCard {
                url,
                title: title.as_deref(),
            },
        }
    }
}

fn is_hosted_video(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Maps a site-relative media URL (`/media/...`) onto `media_root`.
///
/// Returns `None` for absolute URLs (`https://...`), which cannot be
/// decoded from disk, and when no media root is configured.
#[must_use]
pub fn local_media_path(media_root: Option<&Path>, url: &str) -> Option<PathBuf> {
    if url.contains("://") {
        return None;
    }
    media_root.map(|root| root.join(url.trim_start_matches('/')))
}

/// Ordered media of one engagement.
///
/// A gallery always has at least one slide (image or video). Slides are the
/// navigable subset, in declaration order; links are kept as resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    id: GalleryId,
    items: Vec<MediaItem>,
    /// Positions of slide items inside `items`.
    slides: Vec<usize>,
}

impl Gallery {
    /// Builds a gallery, rejecting empty or link-only item lists.
    pub fn new(id: GalleryId, items: Vec<MediaItem>) -> Result<Self, ContentError> {
        if items.is_empty() {
            return Err(ContentError::EmptyGallery { gallery: id.0 });
        }

        let slides: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_slide())
            .map(|(position, _)| position)
            .collect();

        if slides.is_empty() {
            return Err(ContentError::NoSlides { gallery: id.0 });
        }

        Ok(Self { id, items, slides })
    }

    #[must_use]
    pub fn id(&self) -> GalleryId {
        self.id
    }

    /// Number of navigable slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed gallery; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&MediaItem> {
        self.slides.get(index).map(|&position| &self.items[position])
    }

    /// Link items shown next to the carousel.
    pub fn resources(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter().filter(|item| !item.is_slide())
    }

    /// All items in declaration order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }
}
