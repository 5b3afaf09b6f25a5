// SPDX-License-Identifier: MPL-2.0
//! The portfolio catalog: every engagement and featured video on the page.
//!
//! The builtin catalog is compiled in. A TOML file with the same shape can
//! replace it through the `[content] catalog_path` setting:
//!
//! ```toml
//! [[engagements]]
//! id = 1
//! title = "Youth Leadership and Innovation in Africa"
//! event = "The Brand Africa Summit 2025"
//! date = "September 19, 2025"
//! location = "Nairobi, Kenya"
//! image = "/media/brand-africa/poster.jpg"
//! description = "..."
//! takeaways = ["..."]
//! media = [{ type = "image", url = "/media/brand-africa/close-up.jpg" }]
//!
//! [[videos]]
//! id = 1
//! title = "IoT solutions to solve African Problems"
//! description = "..."
//! video_id = "cTGCtd0oY1U"
//! embed_url = "https://www.youtube.com/embed/cTGCtd0oY1U"
//! ```

use super::engagement::EngagementRecord;
use super::{ContentError, FeaturedVideo, MediaItem, SpeakingEngagement};
use crate::error::Result;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub engagements: Vec<SpeakingEngagement>,
    pub videos: Vec<FeaturedVideo>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    engagements: Vec<EngagementRecord>,
    #[serde(default)]
    videos: Vec<FeaturedVideo>,
}

impl Catalog {
    /// Validates records into a catalog. Engagement ids must be unique since
    /// they double as gallery identities.
    pub fn from_records(
        records: Vec<EngagementRecord>,
        videos: Vec<FeaturedVideo>,
    ) -> std::result::Result<Self, ContentError> {
        let mut seen = HashSet::new();
        let mut engagements = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id) {
                return Err(ContentError::DuplicateEngagement { id: record.id });
            }
            engagements.push(SpeakingEngagement::try_from(record)?);
        }

        Ok(Self {
            engagements,
            videos,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::from_records(file.engagements, file.videos)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads the catalog file if one is configured, otherwise the builtin one.
    ///
    /// Returns a warning i18n key alongside the builtin catalog when the
    /// configured file cannot be used.
    pub fn load_or_builtin(path: Option<&Path>) -> (Self, Option<String>) {
        let Some(path) = path else {
            return (Self::builtin(), None);
        };

        match Self::load_from_path(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    engagements = catalog.engagements.len(),
                    "loaded catalog file"
                );
                (catalog, None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to builtin catalog");
                (Self::builtin(), Some(err.i18n_key().to_string()))
            }
        }
    }

    #[must_use]
    pub fn engagement(&self, id: u32) -> Option<&SpeakingEngagement> {
        self.engagements.iter().find(|engagement| engagement.id == id)
    }

    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let records = vec![
            EngagementRecord {
                id: 1,
                title: "Youth Leadership and Innovation in Africa".into(),
                event: "The Brand Africa Summit 2025".into(),
                date: "September 19, 2025".into(),
                location: "St. Andrew's PCEA Auditorium, Nairobi, Kenya".into(),
                image: "/media/The Brand Africa Summit/Poster.jpg".into(),
                description: "A keynote presentation on youth leadership, innovation, and cross-industry collaboration, focusing on how young African leaders can drive transformative change across the continent. The summit united established brands and emerging innovators for inspiration, dialogue, and action.".into(),
                takeaways: strings(&[
                    "Youth leadership is crucial for Africa's digital transformation",
                    "Cross-industry collaboration accelerates innovation",
                    "Local context understanding drives successful tech solutions",
                    "Mentorship and peer-to-peer networking are essential for growth",
                    "Building sustainable partnerships between established brands and emerging innovators",
                ]),
                media: vec![
                    MediaItem::image("/media/The Brand Africa Summit/Close-Up.jpg", "Speaking at Brand Africa Summit"),
                    MediaItem::image("/media/The Brand Africa Summit/In-Depth-Explanation.jpg", "In-depth explanation"),
                    MediaItem::image("/media/The Brand Africa Summit/Confirming-Explaining.jpg", "Explaining key concepts"),
                    MediaItem::image("/media/The Brand Africa Summit/Highlight.jpg", "Key highlights presentation"),
                    MediaItem::image("/media/The Brand Africa Summit/final.jpg", "Final presentation moment"),
                    MediaItem::image("/media/The Brand Africa Summit/poster.jpg", "Explaining key concepts"),
                ],
            },
            EngagementRecord {
                id: 2,
                title: "Design Thinking and Problem Solving for AI Innovation".into(),
                event: "US-Kenya AI Hackathon 2025".into(),
                date: "September 25 - October 6, 2025".into(),
                location: "KNLS Complex & US Embassy, Nairobi".into(),
                image: "/media/US-Kenya AI Hackathon/Poster.jpg".into(),
                description: "Trained hackathon attendees on design thinking and problem-solving methodologies during the 48-hour AI hackathon. Guided startups in building AI models and preparing presentations for the pitch competition with prizes totaling Kshs. 200,000. The hackathon showcased leading startups and provided opportunities for venture capitalists to observe industry trends.".into(),
                takeaways: strings(&[
                    "Design thinking methodology is essential for AI solution development",
                    "Problem definition is more important than solution implementation",
                    "User-centered approach drives successful AI applications",
                    "Rapid prototyping and iteration accelerate innovation",
                    "Cross-cultural collaboration enhances problem-solving approaches",
                ]),
                media: vec![
                    MediaItem::image("/media/US-Kenya AI Hackathon/Answering-Questions.jpg", "Answering questions from participants"),
                    MediaItem::image("/media/US-Kenya AI Hackathon/panel.jpg", "Panel discussion with other mentors"),
                    MediaItem::image("/media/US-Kenya AI Hackathon/teaching.jpg", "Teaching participants"),
                    MediaItem::link(
                        "https://docs.google.com/presentation/d/16IMdvS7QREef8QM43b4QHfyqL8EfOd3O/edit?usp=sharing&ouid=115951609750395643471&rtpof=true&sd=true",
                        "Design Thinking Presentation Slides",
                    ),
                ],
            },
            EngagementRecord {
                id: 3,
                title: "Maternal Health and SRHR Innovation".into(),
                event: "Amref Afyafest 2025".into(),
                date: "August 19, 2025".into(),
                location: "Nairobi, Kenya".into(),
                image: "/media/Amref Afya-Fest/speaking.jpg".into(),
                description: "Presented on the intersection of technology and maternal health, focusing on Sexual and Reproductive Health and Rights (SRHR) innovations for primary healthcare in Africa. The festival showcased youth-led innovation for primary healthcare across the continent.".into(),
                takeaways: strings(&[
                    "Technology can significantly improve maternal health outcomes",
                    "SRHR innovations must be culturally sensitive and accessible",
                    "Youth-led solutions are driving healthcare transformation",
                    "Digital health tools can bridge healthcare gaps in rural areas",
                    "Community engagement is crucial for successful health interventions",
                ]),
                media: vec![
                    MediaItem::image("/media/Amref Afya-Fest/speaking.jpg", "Speaking at Amref Afyafest"),
                    MediaItem::link(
                        "https://amref.ac.ke/afyafest-2025-showcasing-youth-led-innovation-for-primary-healthcare-in-africa/",
                        "Amref Afyafest 2025 Official Page",
                    ),
                ],
            },
            EngagementRecord {
                id: 4,
                title: "Safe and Inclusive Digital Spaces Policy Development".into(),
                event: "KICTANet Policy Hackathon 2025".into(),
                date: "May 16, 2025".into(),
                location: "Nairobi, Kenya".into(),
                image: "/media/Kictanet Hackathon/whole-team.jpg".into(),
                description: "Participated in KICTANet's policy hackathon focused on developing innovative policy responses to promote democratic, safe, and inclusive digital environments. The hackathon addressed technology-facilitated gender-based violence, data protection, and content moderation challenges.".into(),
                takeaways: strings(&[
                    "Multi-stakeholder approaches are essential for effective ICT policy",
                    "Digital rights must be protected while promoting innovation",
                    "Youth voices are crucial in shaping ICT policy frameworks",
                    "Policy solutions must address real-world digital challenges",
                    "Collaborative governance models work best for ICT regulation",
                ]),
                media: vec![
                    MediaItem::image("/media/Kictanet Hackathon/whole-team.jpg", "Team photo at KICTANet hackathon"),
                    MediaItem::image("/media/Kictanet Hackathon/small-group-closeup.jpg", "Small group discussion"),
                    MediaItem::link(
                        "https://www.kictanet.or.ke/policy-hackathon-on-safe-and-inclusive-digital-spaces-in-kenya51656-2/",
                        "KICTANet Policy Hackathon Details",
                    ),
                ],
            },
            EngagementRecord {
                id: 5,
                title: "Transformational Leadership for Africa's Future".into(),
                event: "We Lead 2025 Summit".into(),
                date: "July 23-24, 2025".into(),
                location: "Urban Hotel, Lusaka, Zambia".into(),
                image: "/media/We Lead 2025 Summit/onGrass.jpg".into(),
                description: "Delivered a keynote on empowering transformational leaders for Africa's future, focusing on youth empowerment, ethical leadership, and digital transformation strategies for sustainable development. The summit united visionary leaders, innovators, policymakers, entrepreneurs, and changemakers.".into(),
                takeaways: strings(&[
                    "Transformational leadership requires vision, integrity, and adaptability",
                    "Youth empowerment is key to Africa's sustainable development",
                    "Ethical leadership principles must guide digital transformation",
                    "Cross-border collaboration strengthens African leadership",
                    "Innovation and social impact go hand in hand",
                ]),
                media: vec![
                    MediaItem::image("/media/We Lead 2025 Summit/onGrass.jpg", "Speaking at We Lead 2025 Summit"),
                    MediaItem::image("/media/We Lead 2025 Summit/withGolfClub.jpg", "Networking at the summit"),
                ],
            },
        ];

        let videos = vec![
            FeaturedVideo {
                id: 1,
                title: "IoT solutions to solve African Problems".into(),
                description: "Gearbox Europlacer circuit fabrication and embedded systems development".into(),
                video_id: "cTGCtd0oY1U".into(),
                embed_url: "https://www.youtube.com/embed/cTGCtd0oY1U?si=2wWupCKGfklAiIWm".into(),
            },
            FeaturedVideo {
                id: 2,
                title: "Take On Tech: Using Technology To Address GBV".into(),
                description: "Daystar University Tech Talk | KBC TV".into(),
                video_id: "V6wfwCvb_bE".into(),
                embed_url: "https://www.youtube.com/embed/V6wfwCvb_bE?si=Mh4E3VKKk2cAvamj".into(),
            },
        ];

        // Builtin records are validated by the `builtin_catalog_is_valid` test.
        Self::from_records(records, videos).unwrap_or_default()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
        [[engagements]]
        id = 10
        title = "Talk"
        event = "Conf"
        date = "2025"
        location = "Nairobi"
        image = "/media/poster.jpg"
        description = "About"
        media = [
            { type = "image", url = "/media/a.jpg" },
            { type = "video", url = "https://youtu.be/x", title = "Clip" },
        ]

        [[videos]]
        id = 1
        title = "Video"
        description = "Desc"
        video_id = "x"
        embed_url = "https://www.youtube.com/embed/x"
    "#;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.engagements.len(), 5);
        assert_eq!(catalog.videos.len(), 2);
    }

    #[test]
    fn builtin_galleries_count_slides_without_links() {
        let catalog = Catalog::builtin();
        let hackathon = catalog.engagement(2).expect("engagement 2");
        assert_eq!(hackathon.gallery.len(), 3);
        assert_eq!(hackathon.gallery.resources().count(), 1);

        let afyafest = catalog.engagement(3).expect("engagement 3");
        assert_eq!(afyafest.gallery.len(), 1);
    }

    #[test]
    fn from_toml_str_parses_engagements_and_videos() {
        let catalog = Catalog::from_toml_str(SAMPLE).expect("valid catalog");
        assert_eq!(catalog.engagements.len(), 1);
        assert_eq!(catalog.engagements[0].gallery.len(), 2);
        assert!(catalog.engagements[0].takeaways.is_empty());
        assert_eq!(catalog.videos[0].video_id, "x");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let record = EngagementRecord {
            id: 10,
            title: "Talk".into(),
            event: "Conf".into(),
            date: "2025".into(),
            location: "Nairobi".into(),
            image: "/media/poster.jpg".into(),
            description: "About".into(),
            takeaways: Vec::new(),
            media: vec![MediaItem::image("/media/a.jpg", "A")],
        };

        let err = Catalog::from_records(vec![record.clone(), record], Vec::new())
            .expect_err("duplicate id");
        assert_eq!(err, ContentError::DuplicateEngagement { id: 10 });
    }

    #[test]
    fn empty_media_list_is_a_content_error() {
        let content = r#"
            [[engagements]]
            id = 3
            title = "T"
            event = "E"
            date = "D"
            location = "L"
            image = "/p.jpg"
            description = "X"
            media = []
        "#;
        let err = Catalog::from_toml_str(content).expect_err("empty gallery");
        assert!(matches!(
            err,
            Error::Content(ContentError::EmptyGallery { gallery: 3 })
        ));
    }

    #[test]
    fn load_or_builtin_falls_back_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("catalog.toml");

        let (catalog, warning) = Catalog::load_or_builtin(Some(&missing));
        assert_eq!(catalog, Catalog::builtin());
        assert_eq!(warning.as_deref(), Some("error-io"));
    }

    #[test]
    fn load_or_builtin_reads_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("catalog.toml");
        fs::write(&path, SAMPLE).expect("failed to write catalog");

        let (catalog, warning) = Catalog::load_or_builtin(Some(&path));
        assert!(warning.is_none());
        assert_eq!(catalog.engagements[0].id, 10);
    }

    #[test]
    fn engagement_lookup_misses_unknown_id() {
        assert!(Catalog::builtin().engagement(42).is_none());
    }
}
