pub mod drama;
pub mod slug;
pub mod stats;
pub mod watch_entry;

pub use drama::Drama;
pub use slug::slugify;
pub use stats::{BingeRecord, GenreCounts, MostWatched, RatingHistogram, TagRank, WatchSummary};
pub use watch_entry::WatchEntry;
