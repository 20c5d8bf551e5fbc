use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the browser session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Browser profile directory holding an already signed-in session
    pub user_data_dir: Option<PathBuf>,

    /// Page load and ready-wait timeout in seconds (default: 40)
    pub page_timeout_secs: u64,

    /// Wait after load or click for client-side rendering in milliseconds (default: 5000)
    pub settle_ms: u64,

    /// Time allowed for the whole style lookup on one track page in seconds (default: 15)
    pub style_timeout_secs: u64,

    /// User agent string to use
    pub user_agent: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            user_data_dir: None,
            page_timeout_secs: 40,
            settle_ms: 5000,
            style_timeout_secs: 15,
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl BrowserConfig {
    /// Get the page timeout as a Duration
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    /// Get the settle wait as a Duration
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Get the style lookup timeout as a Duration
    pub fn style_timeout(&self) -> Duration {
        Duration::from_secs(self.style_timeout_secs)
    }
}
