use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date formats a spreadsheet export is known to produce
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// One row of the watch-history feed: a title watched on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchEntry {
    /// Title as written in the feed, possibly with a season suffix
    pub title: String,
    /// Date string as written in the feed (trimmed)
    pub date_watched: String,
}

impl WatchEntry {
    pub fn new(title: impl Into<String>, date_watched: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date_watched: date_watched.into(),
        }
    }

    /// Title up to the first colon, so "Show X: Season 2" joins "Show X"
    pub fn show_title(&self) -> &str {
        self.title
            .split(':')
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// Calendar date, if the feed used a recognised format.
    /// Grouping never depends on this; it always uses `date_watched`.
    pub fn watched_on(&self) -> Option<NaiveDate> {
        parse_watch_date(&self.date_watched)
    }
}

pub fn parse_watch_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
