pub mod sqlite;

use serde::{Deserialize, Serialize};

use crate::app::Result;
use crate::domain::{StoredTrack, Track};

pub use sqlite::SqliteStore;

pub const DEFAULT_TABLE: &str = "tracks";

/// Where and how tracks are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Database file; defaults to the platform data directory.
    pub db_path: Option<std::path::PathBuf>,
    /// Table holding the track rows.
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

pub trait Store {
    /// Create the track table and add any columns an older table is missing.
    ///
    /// Returns the names of the columns that were added.
    fn ensure_schema(&self) -> Result<Vec<String>>;

    fn exists(&self, track_url: &str) -> Result<bool>;

    /// Insert a fully enriched track.
    ///
    /// Fails with `DuplicateKey` when the URL is already stored and with
    /// `MissingTrackUrl` when the track has no URL.
    fn insert(&self, track: &Track) -> Result<i64>;

    fn get_track(&self, track_url: &str) -> Result<Option<StoredTrack>>;
    fn all_tracks(&self) -> Result<Vec<StoredTrack>>;
    fn count(&self) -> Result<i64>;
}
