//! Page-source provider backed by a real browser.
//!
//! The trending pages are rendered client-side, so markup comes from a
//! browser session rather than a plain HTTP fetch. The session is expected to
//! be signed in already: point `user_data_dir` at a profile that holds the
//! login, and every page loads with those cookies.
//!
//! ```rust,ignore
//! use trendharvest::browser::{BrowserConfig, ChromePageSource, PageSource};
//!
//! let source = ChromePageSource::launch(BrowserConfig::default()).await?;
//! let html = source.load("https://suno.com/trending", Some("div[data-testid=\"song-row\"]")).await?;
//! source.close().await;
//! ```

mod chrome;
mod config;

pub use chrome::ChromePageSource;
pub use config::BrowserConfig;

use async_trait::async_trait;

use crate::app::Result;

/// Element to click: the first match of `selector` whose visible text
/// contains any of `phrases`, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub selector: String,
    pub phrases: Vec<String>,
}

/// Source of rendered page markup.
///
/// One instance is one browsing session; pages are visited one after another.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Navigate to `url` and return its markup once the page is ready.
    ///
    /// With a `ready_selector`, readiness means an element matching it exists.
    async fn load(&self, url: &str, ready_selector: Option<&str>) -> Result<String>;

    /// Click an element on the current page.
    async fn click(&self, locator: &Locator) -> Result<()>;

    /// Markup of the current page as it is now.
    async fn current_markup(&self) -> Result<String>;
}
