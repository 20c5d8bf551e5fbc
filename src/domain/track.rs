use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trending track as scraped from the site.
///
/// Built from the listing page with only the listing fields filled in, then
/// enriched from the track's own page before it is stored once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub artist: String,
    pub title: String,
    /// Canonical page URL; the identity key in the store.
    pub track_url: Option<String>,
    pub audio_url: Option<String>,
    pub plays: u64,
    pub explicit: bool,
    /// Local path, only set after a successful download of `audio_url`.
    pub file_path: Option<String>,
    pub styles_preview: Option<String>,
    pub styles_full: Option<String>,
}

impl Track {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            track_url: None,
            audio_url: None,
            plays: 0,
            explicit: false,
            file_path: None,
            styles_preview: None,
            styles_full: None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    /// Record the style tags found on the detail page.
    ///
    /// The full list falls back to the preview, so `styles_full` is never
    /// empty while a preview exists.
    pub fn apply_styles(&mut self, preview: Option<String>, full: Option<String>) {
        self.styles_full = full.or_else(|| preview.clone());
        self.styles_preview = preview;
    }
}

/// A track row read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTrack {
    pub id: i64,
    pub track: Track,
    /// Insert time; `None` for rows that predate the column.
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredTrack {
    pub fn is_downloaded(&self) -> bool {
        self.track.file_path.is_some()
    }
}
