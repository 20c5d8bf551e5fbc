use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::Result;

/// Where the trending listing lives and how its markup is laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin that relative track links are resolved against
    pub base_url: String,

    /// Path of the trending listing page
    pub listing_path: String,

    /// Maximum number of listing rows to process per run (default: 50)
    pub max_tracks: usize,

    /// One element per track on the listing page
    pub row_selector: String,

    /// Link to the track's own page, inside a row
    pub title_link_selector: String,

    /// Link to the author's profile, inside a row
    pub artist_link_selector: String,

    /// Control whose text holds the abbreviated play count, inside a row
    pub plays_selector: String,

    /// Links into the style taxonomy on a track page
    pub style_link_selector: String,

    /// Elements that may act as the "show full styles" control
    pub expand_control_selector: String,

    /// Lowercase phrases identifying the expand control by its text
    pub expand_phrases: Vec<String>,

    /// Audio file extensions accepted as media links
    pub audio_extensions: Vec<String>,

    /// Silent filler asset the site embeds in place of real audio
    pub placeholder_audio: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://suno.com".to_string(),
            listing_path: "/trending".to_string(),
            max_tracks: 50,
            row_selector: "div[data-testid=\"song-row\"]".to_string(),
            title_link_selector: "a[href^=\"/song/\"]".to_string(),
            artist_link_selector: "a[href^=\"/@\"]".to_string(),
            plays_selector: "button[aria-label=\"Play Count\"]".to_string(),
            style_link_selector: "a[href^=\"/style/\"]".to_string(),
            expand_control_selector: "button, a, [role=\"button\"]".to_string(),
            expand_phrases: vec!["show full".to_string(), "full styles".to_string()],
            audio_extensions: ["mp3", "wav", "ogg", "m4a", "flac"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            placeholder_audio: "sil-100.mp3".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn base(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    pub fn listing_url(&self) -> Result<Url> {
        Ok(self.base()?.join(&self.listing_path)?)
    }
}
