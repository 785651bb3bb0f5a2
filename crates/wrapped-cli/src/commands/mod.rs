pub mod config;
pub mod filters;
pub mod reviews;
pub mod show;
pub mod stats;
pub mod tags;

use crate::output::Output;
use crate::ui::FetchSpinner;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use kdrama_config::Config;
use kdrama_core::{load_catalog, DataState};
use kdrama_models::Drama;
use kdrama_sources::{create_feed_client, FeedSource, FileFeed, HttpFeed};
use std::path::PathBuf;
use std::time::Duration;

/// Feeds and settings for one command run. Data is never cached between runs.
pub struct AppContext {
    pub config: Config,
    dramas: Box<dyn FeedSource>,
    history: Box<dyn FeedSource>,
}

impl AppContext {
    pub fn new(config: Config, dramas_file: Option<PathBuf>, history_file: Option<PathBuf>) -> Self {
        let client = create_feed_client(
            &config.feeds.user_agent,
            config.feeds.timeout_secs.map(Duration::from_secs),
        );

        let dramas: Box<dyn FeedSource> = match dramas_file {
            Some(path) => Box::new(FileFeed::new(path)),
            None => Box::new(HttpFeed::with_client(client.clone(), config.feeds.dramas_url.clone())),
        };
        let history: Box<dyn FeedSource> = match history_file {
            Some(path) => Box::new(FileFeed::new(path)),
            None => Box::new(HttpFeed::with_client(client, config.feeds.watch_history_url.clone())),
        };

        Self {
            config,
            dramas,
            history,
        }
    }

    pub fn dramas(&self) -> &dyn FeedSource {
        self.dramas.as_ref()
    }

    pub fn history(&self) -> &dyn FeedSource {
        self.history.as_ref()
    }

    /// Fetch and normalize the catalog once, reporting the no-data states
    pub async fn catalog(&self, output: &Output) -> Result<Option<Vec<Drama>>> {
        let spinner = FetchSpinner::start(output.is_human(), "Fetching dramas...");
        let state = load_catalog(self.dramas()).await;
        spinner.finish();
        take_ready("drama", state, output)
    }
}

/// Unwrap a loaded feed.
///
/// An empty feed is reported as a warning and yields `None`; a feed that
/// could not be loaded is an error.
pub fn take_ready<T>(label: &str, state: DataState<T>, output: &Output) -> Result<Option<T>> {
    match state {
        DataState::Ready(value) => Ok(Some(value)),
        DataState::Empty => {
            output.warn(format!("No data available: the {} feed is empty", label));
            Ok(None)
        }
        DataState::Unavailable { reason } => Err(eyre!(
            "No data available: could not load the {} feed: {}",
            label,
            reason
        )),
    }
}

/// Minutes as a whole number when possible
pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{:.0}", minutes)
    } else {
        format!("{:.1}", minutes)
    }
}
