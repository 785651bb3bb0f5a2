//! Stateless reducers over the normalized catalog and watch history.
//!
//! Every aggregator answers [`EmptyDataset`] for an empty input so the
//! presentation layer can show a "no data" state instead of zeros.

use kdrama_models::{BingeRecord, Drama, GenreCounts, MostWatched, RatingHistogram, TagRank, WatchEntry, WatchSummary};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("no data available: the feed has no rows")]
pub struct EmptyDataset;

fn ensure_not_empty<T>(items: &[T]) -> Result<(), EmptyDataset> {
    if items.is_empty() {
        Err(EmptyDataset)
    } else {
        Ok(())
    }
}

/// Occurrence counts in order of first appearance
fn tally_first_seen<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for key in keys {
        match index.get(key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// Highest count; on a tie the key seen first in feed order wins
fn max_first_seen<'a>(counts: &[(&'a str, usize)]) -> Option<(&'a str, usize)> {
    let mut best: Option<(&'a str, usize)> = None;
    for &(key, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best
}

/// Count each distinct genre of each drama once
pub fn genre_counts(dramas: &[Drama]) -> Result<GenreCounts, EmptyDataset> {
    ensure_not_empty(dramas)?;

    let mut counts = GenreCounts::new();
    for drama in dramas {
        let mut seen = BTreeSet::new();
        for genre in &drama.genres {
            if seen.insert(genre.as_str()) {
                counts.increment(genre);
            }
        }
    }
    Ok(counts)
}

/// Dramas per rounded rating. Unrated dramas are left out, not bucketed at 0.
pub fn rating_histogram(dramas: &[Drama]) -> Result<RatingHistogram, EmptyDataset> {
    ensure_not_empty(dramas)?;

    let mut histogram = RatingHistogram::new();
    for bucket in dramas.iter().filter_map(Drama::rating_bucket) {
        histogram.increment(bucket);
    }
    Ok(histogram)
}

/// Sum of episodes times average duration over the whole catalog
pub fn total_minutes(dramas: &[Drama]) -> Result<f64, EmptyDataset> {
    ensure_not_empty(dramas)?;
    Ok(dramas.iter().map(Drama::minutes_watched).sum())
}

/// Every tag with its count, most frequent first, ties alphabetical
pub fn tag_ranking(dramas: &[Drama]) -> Result<Vec<TagRank>, EmptyDataset> {
    ensure_not_empty(dramas)?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in dramas.iter().flat_map(|drama| drama.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }

    let mut ranking: Vec<TagRank> = counts
        .into_iter()
        .map(|(tag, count)| TagRank {
            tag: tag.to_string(),
            count,
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    Ok(ranking)
}

/// The first `n` entries of a ranking
pub fn top_tags(ranking: &[TagRank], n: usize) -> Vec<TagRank> {
    ranking.iter().take(n).cloned().collect()
}

/// Day with the most entries; ties go to the date seen first in the feed
pub fn binge_record(entries: &[WatchEntry]) -> Result<BingeRecord, EmptyDataset> {
    let counts = tally_first_seen(entries.iter().map(|entry| entry.date_watched.as_str()));
    let (date, count) = max_first_seen(&counts).ok_or(EmptyDataset)?;
    Ok(BingeRecord {
        date: date.to_string(),
        count,
    })
}

/// Show with the most entries, seasons folded into the show title.
/// Ties go to the show seen first in the feed.
pub fn most_watched(entries: &[WatchEntry]) -> Result<MostWatched, EmptyDataset> {
    let counts = tally_first_seen(entries.iter().map(WatchEntry::show_title));
    let (title, count) = max_first_seen(&counts).ok_or(EmptyDataset)?;
    Ok(MostWatched {
        title: title.to_string(),
        count,
    })
}

/// Number of distinct shows in the watch history
pub fn unique_shows(entries: &[WatchEntry]) -> Result<usize, EmptyDataset> {
    ensure_not_empty(entries)?;
    let shows: BTreeSet<&str> = entries.iter().map(WatchEntry::show_title).collect();
    Ok(shows.len())
}

pub fn watch_summary(entries: &[WatchEntry]) -> Result<WatchSummary, EmptyDataset> {
    Ok(WatchSummary {
        total_shows: unique_shows(entries)?,
        binge_record: binge_record(entries)?,
        most_watched: most_watched(entries)?,
    })
}

/// Genres offered as filter choices, in order of first appearance
pub fn available_genres(dramas: &[Drama]) -> Vec<String> {
    tally_first_seen(dramas.iter().flat_map(|drama| drama.genres.iter().map(String::as_str)))
        .into_iter()
        .map(|(genre, _)| genre.to_string())
        .collect()
}

/// Release years present in the catalog, ascending
pub fn available_years(dramas: &[Drama]) -> Vec<i32> {
    dramas
        .iter()
        .filter_map(|drama| drama.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests;
