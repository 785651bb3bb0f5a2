use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_DRAMAS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQG-VDV6Ze0RTQcFP22p7hPcWVZCumyQrSqJFzI0InaJmGPAPbr8ehQoBauDQOE6ypmsHpIa5qpC1AJ/pub?output=csv&gid=0";
const DEFAULT_WATCH_HISTORY_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQG-VDV6Ze0RTQcFP22p7hPcWVZCumyQrSqJFzI0InaJmGPAPbr8ehQoBauDQOE6ypmsHpIa5qpC1AJ/pub?output=csv&gid=856476277";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feeds: FeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the two spreadsheet exports live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_dramas_url")]
    pub dramas_url: String,
    #[serde(default = "default_watch_history_url")]
    pub watch_history_url: String,
    /// Request timeout; unset means the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_top_tags")]
    pub top_tags: usize,
    #[serde(default = "default_tag_search_limit")]
    pub tag_search_limit: usize,
    #[serde(default = "default_year_min")]
    pub year_min: i32,
    #[serde(default = "default_year_max")]
    pub year_max: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write logs to this file (rotated daily) instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_dramas_url() -> String {
    DEFAULT_DRAMAS_URL.to_string()
}

fn default_watch_history_url() -> String {
    DEFAULT_WATCH_HISTORY_URL.to_string()
}

fn default_user_agent() -> String {
    format!("kdrama-wrapped/{}", env!("CARGO_PKG_VERSION"))
}

fn default_top_tags() -> usize {
    10
}

fn default_tag_search_limit() -> usize {
    10
}

fn default_year_min() -> i32 {
    2000
}

fn default_year_max() -> i32 {
    2024
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            dramas_url: default_dramas_url(),
            watch_history_url: default_watch_history_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_tags: default_top_tags(),
            tag_search_limit: default_tag_search_limit(),
            year_min: default_year_min(),
            year_max: default_year_max(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    let url = url.trim();
    (url.starts_with("http://") || url.starts_with("https://")) && url.len() > "https://".len()
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path.display(), e))
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !is_http_url(&self.feeds.dramas_url) {
            return Err(anyhow::anyhow!("feeds.dramas_url must be an http(s) URL"));
        }
        if !is_http_url(&self.feeds.watch_history_url) {
            return Err(anyhow::anyhow!("feeds.watch_history_url must be an http(s) URL"));
        }
        if self.feeds.timeout_secs == Some(0) {
            return Err(anyhow::anyhow!("feeds.timeout_secs must be greater than zero"));
        }
        if self.display.top_tags == 0 {
            return Err(anyhow::anyhow!("display.top_tags must be greater than zero"));
        }
        if self.display.tag_search_limit == 0 {
            return Err(anyhow::anyhow!("display.tag_search_limit must be greater than zero"));
        }
        if self.display.year_min > self.display.year_max {
            return Err(anyhow::anyhow!(
                "display.year_min ({}) must not be after display.year_max ({})",
                self.display.year_min,
                self.display.year_max
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.feeds.dramas_url = "https://example.com/dramas.csv".to_string();
        config.feeds.timeout_secs = Some(15);
        config.display.top_tags = 5;

        config.save_to_file(file.path()).unwrap();

        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.feeds.dramas_url, "https://example.com/dramas.csv");
        assert_eq!(loaded.feeds.timeout_secs, Some(15));
        assert_eq!(loaded.display.top_tags, 5);
        assert_eq!(loaded.display.year_max, 2024);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nyear_min = 2010\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.display.year_min, 2010);
        assert_eq!(config.display.year_max, 2024);
        assert_eq!(config.display.tag_search_limit, 10);
        assert!(config.feeds.dramas_url.ends_with("gid=0"));
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.display.top_tags, 10);
    }

    #[test]
    fn test_load_or_default_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display\n").unwrap();
        let err = Config::load_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.feeds.watch_history_url = "ftp://example.com/history.csv".to_string();
        assert!(config.validate().is_err());
        config.feeds.watch_history_url = "https://example.com/history.csv".to_string();

        config.display.year_min = 2030;
        assert!(config.validate().is_err());
        config.display.year_min = 2000;

        config.display.top_tags = 0;
        assert!(config.validate().is_err());
        config.display.top_tags = 10;

        config.feeds.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }
}
