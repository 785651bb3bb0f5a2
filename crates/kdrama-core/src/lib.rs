pub mod aggregate;
pub mod filter;
pub mod load;
pub mod lookup;
pub mod tag_search;

pub use aggregate::{
    available_genres, available_years, binge_record, genre_counts, most_watched, rating_histogram, tag_ranking,
    top_tags, total_minutes, unique_shows, watch_summary, EmptyDataset,
};
pub use filter::{FilterSpec, YearRange};
pub use load::{load_catalog, load_watch_log, DataState};
pub use lookup::find_by_slug;
pub use tag_search::search_tags;
