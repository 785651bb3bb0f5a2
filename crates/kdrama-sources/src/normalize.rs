//! Turns raw feed rows into typed records.
//!
//! All coercion lives here. Aggregators only ever see `Option` fields and
//! never parse strings themselves.

use crate::table::RawRow;
use kdrama_models::watch_entry::parse_watch_date;
use kdrama_models::{Drama, WatchEntry};
use std::fmt;
use tracing::debug;

pub const COL_TITLE: &str = "Title";
pub const COL_YEAR: &str = "Year Released";
pub const COL_GENRES: &str = "Genres";
pub const COL_TAGS: &str = "Tags";
pub const COL_RATING: &str = "Rating";
pub const COL_EPISODES: &str = "Episodes";
pub const COL_AVG_DURATION: &str = "Avg Duration";
pub const COL_REVIEW: &str = "Review";
pub const COL_IMAGE_URL: &str = "Image URL";
pub const COL_TRAILER_URL: &str = "Trailer URL";
pub const COL_SEASONS: &str = "Seasons";
pub const COL_DIRECTOR: &str = "Director";
pub const COL_MAIN_CAST: &str = "Main Cast";
pub const COL_DATE_WATCHED: &str = "Date Watched";

/// A field that failed coercion and was dropped. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionWarning {
    pub line: u64,
    pub field: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} '{}' {}",
            self.line, self.field, self.value, self.reason
        )
    }
}

/// A typed record plus whatever had to be dropped to build it
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub record: T,
    pub warnings: Vec<CoercionWarning>,
}

/// Split a multi-value cell on a comma followed by any number of spaces.
/// Tokens are trimmed and empty ones dropped.
pub fn split_multi(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`split_multi`] for display
pub fn join_multi<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

fn distinct(tokens: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen
}

/// The longest leading run of `value` that reads as a finite number, so
/// "8.5/10" gives 8.5 and "9 stars" gives 9
fn leading_number(value: &str) -> Option<f64> {
    let end = value
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .map_or(value.len(), |(i, _)| i);
    (1..=end)
        .rev()
        .find_map(|len| value[..len].parse::<f64>().ok())
        .filter(|number| number.is_finite())
}

fn text(row: &RawRow, column: &str) -> Option<String> {
    row.get(column)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Collects warnings while one row is being coerced
struct Coercer<'a> {
    row: &'a RawRow,
    warnings: Vec<CoercionWarning>,
}

impl<'a> Coercer<'a> {
    fn new(row: &'a RawRow) -> Self {
        Self {
            row,
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, field: &'static str, value: &str, reason: &'static str) {
        self.warnings.push(CoercionWarning {
            line: self.row.line,
            field,
            value: value.to_string(),
            reason,
        });
    }

    /// Cell text for a numeric column; blank cells are absent without a warning
    fn numeric_cell(&self, column: &'static str) -> Option<&'a str> {
        self.row
            .get(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn number(&mut self, column: &'static str) -> Option<f64> {
        let raw = self.numeric_cell(column)?;
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                self.warn(column, raw, "is not a number");
                None
            }
        }
    }

    /// Ratings are often written as "8.5/10"; only the leading number counts
    fn rating(&mut self, column: &'static str) -> Option<f64> {
        let raw = self.numeric_cell(column)?;
        let value = leading_number(raw);
        if value.is_none() {
            self.warn(column, raw, "is not a number");
        }
        value
    }

    fn year(&mut self, column: &'static str) -> Option<i32> {
        let raw = self.numeric_cell(column)?;
        if let Ok(year) = raw.parse::<i32>() {
            return Some(year);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) => {
                Some(value as i32)
            }
            _ => {
                self.warn(column, raw, "is not a year");
                None
            }
        }
    }

    fn count(&mut self, column: &'static str) -> Option<u32> {
        let raw = self.numeric_cell(column)?;
        if let Ok(count) = raw.parse::<u32>() {
            return Some(count);
        }
        match raw.parse::<f64>() {
            Ok(value) if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) => {
                Some(value as u32)
            }
            _ => {
                self.warn(column, raw, "is not a non-negative integer");
                None
            }
        }
    }

    fn duration(&mut self, column: &'static str) -> Option<f64> {
        let value = self.number(column)?;
        if value < 0.0 {
            let raw = self.numeric_cell(column).unwrap_or_default();
            self.warn(column, raw, "is negative");
            return None;
        }
        Some(value)
    }
}

/// Build a [`Drama`] from one catalog row. Rows without a title are skipped.
pub fn normalize_drama(row: &RawRow) -> Option<Normalized<Drama>> {
    let Some(title) = text(row, COL_TITLE) else {
        debug!(line = row.line, "Skipping catalog row with empty title");
        return None;
    };

    let mut coercer = Coercer::new(row);
    let drama = Drama {
        title,
        year: coercer.year(COL_YEAR),
        genres: distinct(split_multi(row.get(COL_GENRES).unwrap_or_default())),
        tags: distinct(split_multi(row.get(COL_TAGS).unwrap_or_default())),
        rating: coercer.rating(COL_RATING),
        episodes: coercer.count(COL_EPISODES),
        avg_duration: coercer.duration(COL_AVG_DURATION),
        review: text(row, COL_REVIEW),
        image_url: text(row, COL_IMAGE_URL),
        trailer_url: text(row, COL_TRAILER_URL),
        seasons: text(row, COL_SEASONS),
        director: text(row, COL_DIRECTOR),
        main_cast: text(row, COL_MAIN_CAST),
    };

    Some(Normalized {
        record: drama,
        warnings: coercer.warnings,
    })
}

/// Build a [`WatchEntry`] from one watch-history row.
///
/// Rows missing a title or a date are skipped. A date in an unknown format
/// is kept as-is (grouping works on the string) but reported.
pub fn normalize_watch_entry(row: &RawRow) -> Option<Normalized<WatchEntry>> {
    let Some(title) = text(row, COL_TITLE) else {
        debug!(line = row.line, "Skipping watch-history row with empty title");
        return None;
    };
    let Some(date_watched) = text(row, COL_DATE_WATCHED) else {
        debug!(line = row.line, title = %title, "Skipping watch-history row without date");
        return None;
    };

    let mut coercer = Coercer::new(row);
    if parse_watch_date(&date_watched).is_none() {
        coercer.warn(COL_DATE_WATCHED, &date_watched, "is not a recognised date");
    }

    Some(Normalized {
        record: WatchEntry::new(title, date_watched),
        warnings: coercer.warnings,
    })
}
