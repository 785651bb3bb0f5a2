use serde::{Deserialize, Serialize};

use crate::slug::slugify;

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// One drama from the catalog feed.
///
/// The title is the only identity a drama has: two rows with the same title
/// are indistinguishable once aggregated. Every other field is optional and
/// already coerced by the normalizer, so consumers never see raw strings for
/// numeric columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Drama {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Distinct genres in the order the feed lists them
    pub genres: Vec<String>,
    /// Distinct tags in the order the feed lists them
    pub tags: Vec<String>,
    /// Personal rating on an implied 0-10 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,
    /// Average episode length in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_cast: Option<String>,
}

impl Drama {
    /// Create a drama with only a title set
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Lookup key used by the detail view (see [`slugify`])
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Histogram bucket for the rating, rounded half-up (7.5 -> 8)
    pub fn rating_bucket(&self) -> Option<i64> {
        self.rating.map(|rating| (rating + 0.5).floor() as i64)
    }

    /// Episodes times average duration. A missing factor counts as zero,
    /// so the drama contributes nothing rather than being skipped.
    pub fn minutes_watched(&self) -> f64 {
        let episodes = f64::from(self.episodes.unwrap_or(0));
        episodes * self.avg_duration.unwrap_or(0.0)
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Embeddable player URL for a YouTube `watch?v=` trailer link
    pub fn trailer_embed_url(&self) -> Option<String> {
        let url = self.trailer_url.as_deref()?;
        let (_, query) = url.split_once("v=")?;
        let video_id = query.split('&').next().unwrap_or_default();
        if video_id.is_empty() {
            return None;
        }
        Some(format!("{}{}", YOUTUBE_EMBED_BASE, video_id))
    }
}
