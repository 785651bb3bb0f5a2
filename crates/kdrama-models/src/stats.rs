use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many dramas list one genre
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Genre frequencies, kept in order of first occurrence
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GenreCounts {
    entries: Vec<GenreCount>,
}

impl GenreCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, genre: &str) {
        match self.entries.iter_mut().find(|entry| entry.genre == genre) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(GenreCount {
                genre: genre.to_string(),
                count: 1,
            }),
        }
    }

    pub fn get(&self, genre: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.genre == genre)
            .map(|entry| entry.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenreCount> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of genre tokens counted
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

/// Rounded rating -> number of dramas, ascending by rating
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RatingHistogram {
    buckets: BTreeMap<i64, usize>,
}

impl RatingHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, bucket: i64) {
        *self.buckets.entry(bucket).or_insert(0) += 1;
    }

    pub fn get(&self, bucket: i64) -> Option<usize> {
        self.buckets.get(&bucket).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.buckets.iter().map(|(bucket, count)| (*bucket, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total(&self) -> usize {
        self.buckets.values().sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagRank {
    pub tag: String,
    pub count: usize,
}

/// The day with the most watch-history entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BingeRecord {
    pub date: String,
    pub count: usize,
}

/// The show with the most watch-history entries, seasons folded together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MostWatched {
    pub title: String,
    pub count: usize,
}

/// Everything the "wrapped" tiles need from the watch history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchSummary {
    pub total_shows: usize,
    pub binge_record: BingeRecord,
    pub most_watched: MostWatched,
}
