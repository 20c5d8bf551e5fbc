//! Configuration management for trendharvest.
//!
//! Configuration is read from `~/.config/trendharvest/config.toml` at startup,
//! or from the path given with `--config`. If the file doesn't exist, a default
//! configuration with comments is created.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::browser::BrowserConfig;
use crate::extract::SiteConfig;
use crate::fetcher::DownloadConfig;
use crate::store::StoreConfig;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub download: DownloadConfig,
    pub browser: BrowserConfig,
    pub site: SiteConfig,
}

impl Config {
    /// Load configuration from `path`, or from the default path when `None`.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/trendharvest/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("trendharvest").join("config.toml"))
    }

    /// Directory for the database and downloads when none is configured:
    /// `~/.local/share/trendharvest` on Linux.
    pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(data_dir.join("trendharvest"))
    }

    pub fn db_path(&self) -> Result<PathBuf, ConfigError> {
        match self.store.db_path {
            Some(ref path) => Ok(path.clone()),
            None => Ok(Self::default_data_dir()?.join("trendharvest.db")),
        }
    }

    pub fn download_dir(&self) -> Result<PathBuf, ConfigError> {
        match self.download.dir {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(Self::default_data_dir()?.join("downloads")),
        }
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# trendharvest configuration
#
# Every key is optional; anything left out uses the value shown here.

[store]
# SQLite database file (default: <data dir>/trendharvest/trendharvest.db)
# db_path = "/path/to/trendharvest.db"

# Table holding the track rows
table = "tracks"

[download]
# Directory audio files are saved into (default: <data dir>/trendharvest/downloads)
# dir = "/path/to/downloads"

# Connect and read timeout in seconds
timeout_secs = 45

# User agent sent with audio requests
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"

# Write buffer size in bytes
chunk_size = 8192

[browser]
# Run browser in headless mode (no visible window)
headless = true

# Chrome profile directory holding a signed-in session
# user_data_dir = "/path/to/chrome-profile"

# Page load timeout in seconds
page_timeout_secs = 40

# Wait after a page load or click for client-side rendering (milliseconds)
settle_ms = 5000

# Time allowed for reading the style tags of one track (seconds)
style_timeout_secs = 15

[site]
base_url = "https://suno.com"
listing_path = "/trending"

# Maximum tracks to look at per run
max_tracks = 50

# CSS selectors for the listing page
row_selector = "div[data-testid=\"song-row\"]"
title_link_selector = "a[href^=\"/song/\"]"
artist_link_selector = "a[href^=\"/@\"]"
plays_selector = "button[aria-label=\"Play Count\"]"

# CSS selectors for track pages
style_link_selector = "a[href^=\"/style/\"]"
expand_control_selector = "button, a, [role=\"button\"]"

# Text identifying the control that shows all style tags
expand_phrases = ["show full", "full styles"]

# Extensions accepted as audio links
audio_extensions = ["mp3", "wav", "ogg", "m4a", "flac"]

# Silent filler asset that is never a real track
placeholder_audio = "sil-100.mp3"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
