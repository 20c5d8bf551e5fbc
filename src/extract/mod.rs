//! Markup extraction for the trending listing and individual track pages.
//!
//! Everything here works on plain HTML strings, so the browser only has to
//! hand over rendered markup:
//!
//! ```text
//! listing HTML → candidates (title, artist, URL, plays)
//! track HTML   → audio URL (scripts, then <audio>) + style tags
//! ```
//!
//! Every lookup returns an `Option`; a missing element degrades the result
//! instead of failing the track.

mod audio;
mod config;
mod listing;
mod plays;
mod styles;

pub use config::SiteConfig;
pub use plays::parse_play_count;
pub use styles::join_tags;

use regex::Regex;
use scraper::{ElementRef, Selector};
use url::Url;

use crate::app::{HarvestError, Result};
use crate::browser::Locator;

/// Compiled selectors and patterns for one site layout.
pub struct PageExtractor {
    config: SiteConfig,
    base: Url,
    row: Selector,
    title_link: Selector,
    artist_link: Selector,
    plays: Selector,
    style_link: Selector,
    expand_control: Selector,
    script: Selector,
    audio_tag: Selector,
    script_audio_url: Regex,
    audio_src: Regex,
}

impl PageExtractor {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let extensions = config
            .audio_extensions
            .iter()
            .map(|ext| regex::escape(ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join("|");

        let script_audio_url = Regex::new(&format!(
            r#"(?i)https?://[^\s'"<>]+\.(?:{})"#,
            extensions
        ))
        .map_err(|e| HarvestError::Config(format!("Invalid audio pattern: {}", e)))?;

        let audio_src = Regex::new(&format!(r"(?i)\.(?:{})$", extensions))
            .map_err(|e| HarvestError::Config(format!("Invalid audio pattern: {}", e)))?;

        Ok(Self {
            base: config.base()?,
            row: parse_selector(&config.row_selector)?,
            title_link: parse_selector(&config.title_link_selector)?,
            artist_link: parse_selector(&config.artist_link_selector)?,
            plays: parse_selector(&config.plays_selector)?,
            style_link: parse_selector(&config.style_link_selector)?,
            expand_control: parse_selector(&config.expand_control_selector)?,
            script: parse_selector("script")?,
            audio_tag: parse_selector("audio[src]")?,
            script_audio_url,
            audio_src,
            config,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Locator the page source uses to click the "show full styles" control.
    pub fn expand_locator(&self) -> Locator {
        Locator {
            selector: self.config.expand_control_selector.clone(),
            phrases: self.config.expand_phrases.clone(),
        }
    }

    fn is_placeholder(&self, url: &str) -> bool {
        url.contains(&self.config.placeholder_audio)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| HarvestError::Config(format!("Invalid selector {:?}: {}", selector, e)))
}

/// Visible text of an element with runs of whitespace collapsed.
fn text_content(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
