use kdrama_models::Drama;
use serde::{Deserialize, Serialize};

/// Bounds of the year slider on the review list
pub const DEFAULT_YEAR_MIN: i32 = 2000;
pub const DEFAULT_YEAR_MAX: i32 = 2024;

/// Inclusive release-year window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// A drama without a usable year never falls inside the range
    pub fn contains(&self, year: Option<i32>) -> bool {
        year.is_some_and(|year| year >= self.min && year <= self.max)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR_MIN, DEFAULT_YEAR_MAX)
    }
}

/// Active predicates of the review list.
///
/// Categories combine with AND; the values inside the genre and tag
/// categories combine with OR. An empty selection lets everything through.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    pub genres: Vec<String>,
    pub years: YearRange,
    pub tags: Vec<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years(mut self, years: YearRange) -> Self {
        self.years = years;
        self
    }

    fn matches_genres(&self, drama: &Drama) -> bool {
        self.genres.is_empty() || self.genres.iter().any(|genre| drama.has_genre(genre))
    }

    fn matches_tags(&self, drama: &Drama) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| drama.has_tag(tag))
    }

    pub fn matches(&self, drama: &Drama) -> bool {
        self.matches_genres(drama) && self.years.contains(drama.year) && self.matches_tags(drama)
    }

    /// The matching dramas in catalog order
    pub fn apply(&self, dramas: &[Drama]) -> Vec<Drama> {
        let filtered: Vec<Drama> = dramas.iter().filter(|drama| self.matches(drama)).cloned().collect();
        tracing::debug!(
            total = dramas.len(),
            matched = filtered.len(),
            genres = ?self.genres,
            tags = ?self.tags,
            year_min = self.years.min,
            year_max = self.years.max,
            "Applied review filters"
        );
        filtered
    }
}
