use std::path::PathBuf;
use thiserror::Error;

/// Why a feed could not be turned into rows
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure or a non-success HTTP status
    #[error("failed to fetch {url}: {message}")]
    Fetch {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text could not be split into consistent rows
    #[error("malformed CSV: {0}")]
    Parse(String),

    #[error("missing required column: {column}. Available columns: {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}

impl FeedError {
    /// HTTP status of a failed fetch, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FeedError::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<csv::Error> for FeedError {
    fn from(err: csv::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}
