//! # trendharvest
//!
//! Collects the tracks on a music site's trending listing: metadata, audio
//! files and style tags, stored once per track in SQLite.
//!
//! ## Architecture
//!
//! One run is a single pass through a sequential pipeline:
//!
//! ```text
//! Browser → Extract → Store check → Enrich → Fetcher → Store
//! ```
//!
//! - [`browser`]: rendered page markup from a signed-in Chrome session
//! - [`extract`]: listing rows, audio links and style tags from HTML
//! - [`fetcher`]: audio downloads into a local directory
//! - [`store`]: SQLite persistence keyed by track URL
//!
//! ## Quick Start
//!
//! ```bash
//! # Scrape the trending listing once
//! trendharvest run
//!
//! # Only look at the first ten rows, with a visible browser
//! trendharvest run --max-tracks 10 --headed
//!
//! # Show what has been collected
//! trendharvest list
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the store, the
/// media fetcher and the configuration.
pub mod app;

/// Page-source provider backed by Chrome via chromiumoxide.
///
/// - [`PageSource`](browser::PageSource): Async trait for loading and clicking pages
/// - [`ChromePageSource`](browser::ChromePageSource): Chrome implementation
pub mod browser;

/// Command-line interface using clap.
///
/// - `run [--max-tracks N] [--headed]` - Scrape once and save new tracks
/// - `list` - List stored tracks
pub mod cli;

/// Configuration loaded from `~/.config/trendharvest/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Track`](domain::Track): A scraped track
/// - [`StoredTrack`](domain::StoredTrack): A track row with its id and insert time
pub mod domain;

/// Markup extraction for listing and track pages.
pub mod extract;

/// Audio downloads.
///
/// - [`MediaFetcher`](fetcher::MediaFetcher): Async trait for downloading a track's audio
/// - [`HttpMediaFetcher`](fetcher::HttpMediaFetcher): reqwest-based implementation
pub mod fetcher;

/// The scrape-and-save cycle and its per-track report.
pub mod pipeline;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): Trait defining storage operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
