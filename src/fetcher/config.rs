use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for audio downloads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Directory downloaded files are written to; defaults to the platform data directory
    pub dir: Option<PathBuf>,

    /// Connect and read timeout in seconds (default: 45)
    pub timeout_secs: u64,

    /// User agent sent with download requests
    pub user_agent: String,

    /// Write buffer size in bytes (default: 8192)
    pub chunk_size: usize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            dir: None,
            timeout_secs: 45,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            chunk_size: 8192,
        }
    }
}

impl DownloadConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
