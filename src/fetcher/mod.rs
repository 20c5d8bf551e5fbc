pub mod cache;
pub mod config;
pub mod http_fetcher;

use std::path::PathBuf;

use async_trait::async_trait;

pub use cache::{sanitize, MediaCache};
pub use config::DownloadConfig;
pub use http_fetcher::HttpMediaFetcher;

#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Download the audio for one track and return where it was saved.
    ///
    /// Returns `None` when there is nothing to download or the download failed;
    /// failures are logged by the implementation.
    async fn fetch(&self, url: Option<&str>, artist: &str, title: &str) -> Option<PathBuf>;
}
