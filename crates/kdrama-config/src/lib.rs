pub mod config;
pub mod paths;

pub use config::{Config, DisplayConfig, FeedConfig, LoggingConfig};
pub use paths::{base_path_override, PathManager};
