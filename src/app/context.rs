use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::app::error::{HarvestError, Result};
use crate::config::Config;
use crate::extract::PageExtractor;
use crate::fetcher::{HttpMediaFetcher, MediaFetcher};
use crate::pipeline::Pipeline;
use crate::store::SqliteStore;

pub struct AppContext {
    pub config: Config,
    pub store: Arc<SqliteStore>,
    pub fetcher: Arc<dyn MediaFetcher>,
}

impl AppContext {
    /// Open the store and prepare the download directory.
    ///
    /// Fails when the database cannot be opened or migrated.
    pub fn new(config: Config) -> Result<Self> {
        let db_path = config
            .db_path()
            .map_err(|e| HarvestError::Config(e.to_string()))?;
        let download_dir = config
            .download_dir()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        ensure_parent(&db_path)?;
        std::fs::create_dir_all(&download_dir)?;

        info!(path = %db_path.display(), "Opening track store");
        let store = Arc::new(SqliteStore::with_table(&db_path, &config.store.table)?);
        debug!(dir = %download_dir.display(), "Download directory ready");

        let fetcher: Arc<dyn MediaFetcher> =
            Arc::new(HttpMediaFetcher::new(download_dir, &config.download)?);

        Ok(Self {
            config,
            store,
            fetcher,
        })
    }

    pub fn pipeline(&self) -> Result<Pipeline<SqliteStore>> {
        let extractor = PageExtractor::new(self.config.site.clone())?;
        Ok(Pipeline::new(
            self.store.clone(),
            self.fetcher.clone(),
            extractor,
            self.config.browser.style_timeout(),
        ))
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}
