use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, warn};

use crate::app::{HarvestError, Result};
use crate::fetcher::{DownloadConfig, MediaCache, MediaFetcher};

/// Downloads audio over HTTP into a [`MediaCache`].
pub struct HttpMediaFetcher {
    client: Client,
    cache: MediaCache,
    chunk_size: usize,
}

impl HttpMediaFetcher {
    pub fn new(root: impl Into<PathBuf>, config: &DownloadConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.timeout())
            .read_timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, MediaCache::new(root), config.chunk_size))
    }

    pub fn with_client(client: Client, cache: MediaCache, chunk_size: usize) -> Self {
        Self {
            client,
            cache,
            chunk_size: chunk_size.max(1),
        }
    }

    async fn download(&self, url: &str, path: &Path) -> Result<(PathBuf, u64)> {
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        // Error pages come back as HTML with a 200 often enough to check
        if !is_media_content_type(&content_type) {
            return Err(HarvestError::ContentType {
                url: url.to_string(),
                content_type,
            });
        }

        let staging = self.cache.staging_file()?;
        let file = tokio::fs::File::from_std(staging.reopen()?);
        let mut writer = BufWriter::with_capacity(self.chunk_size, file);
        let mut stream = response.bytes_stream();
        let mut written = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        drop(writer);

        let path = self.cache.commit(staging, path)?;
        Ok((path, written))
    }
}

fn is_media_content_type(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("audio") || content_type.contains("octet-stream")
}

#[async_trait]
impl MediaFetcher for HttpMediaFetcher {
    async fn fetch(&self, url: Option<&str>, artist: &str, title: &str) -> Option<PathBuf> {
        let url = url.map(str::trim).filter(|u| !u.is_empty())?;
        let path = self.cache.local_path(artist, title);

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            info!(path = %path.display(), "File already downloaded");
            return Some(path);
        }

        info!(url, "Downloading");
        match self.download(url, &path).await {
            Ok((path, bytes)) => {
                info!(path = %path.display(), bytes, "Saved");
                Some(path)
            }
            Err(e) => {
                warn!(url, error = %e, "Download failed");
                None
            }
        }
    }
}
