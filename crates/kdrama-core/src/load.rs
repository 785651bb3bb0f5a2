use kdrama_models::{Drama, WatchEntry};
use kdrama_sources::{fetch_dramas, fetch_watch_history, FeedError, FeedSource};
use tracing::{error, warn};

/// What a presentation surface receives after the one fetch of a view.
///
/// "Nothing to show" has two distinct causes and they stay distinct:
/// the feed answered with no rows, or the feed could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    Ready(T),
    Empty,
    Unavailable { reason: String },
}

impl<T> DataState<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            DataState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

fn settle<T>(feed: &str, result: Result<Vec<T>, FeedError>) -> DataState<Vec<T>> {
    match result {
        Ok(records) if records.is_empty() => {
            warn!(feed, "Feed has no usable rows");
            DataState::Empty
        }
        Ok(records) => DataState::Ready(records),
        Err(e) => {
            error!(feed, status = ?e.status(), "Failed to load feed: {}", e);
            DataState::Unavailable { reason: e.to_string() }
        }
    }
}

/// Fetch and normalize the catalog once for one view
pub async fn load_catalog(source: &dyn FeedSource) -> DataState<Vec<Drama>> {
    settle(source.name(), fetch_dramas(source).await)
}

/// Fetch and normalize the watch history once for one view
pub async fn load_watch_log(source: &dyn FeedSource) -> DataState<Vec<WatchEntry>> {
    settle(source.name(), fetch_watch_history(source).await)
}
