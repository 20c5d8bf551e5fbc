//! Scrape-and-save cycle for the trending listing.
//!
//! ```text
//! listing page → candidates → store check → track page → audio + styles
//!              → download → insert
//! ```
//!
//! Each candidate ends in exactly one [`Outcome`]. Failures stay inside the
//! candidate that hit them; the run itself only gives up when the listing page
//! cannot be read.

mod report;

pub use report::{CandidateReport, Download, Outcome, RunReport};

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::app::Result;
use crate::browser::PageSource;
use crate::domain::Track;
use crate::extract::{join_tags, PageExtractor};
use crate::fetcher::MediaFetcher;
use crate::store::Store;

pub struct Pipeline<S: Store> {
    store: Arc<S>,
    fetcher: Arc<dyn MediaFetcher>,
    extractor: PageExtractor,
    style_timeout: Duration,
}

impl<S: Store> Pipeline<S> {
    pub fn new(
        store: Arc<S>,
        fetcher: Arc<dyn MediaFetcher>,
        extractor: PageExtractor,
        style_timeout: Duration,
    ) -> Self {
        Self {
            store,
            fetcher,
            extractor,
            style_timeout,
        }
    }

    /// Run one full cycle against an open page source.
    ///
    /// Never fails: listing errors yield an empty report and per-track errors
    /// are recorded in that track's outcome.
    pub async fn run(&self, source: &dyn PageSource) -> RunReport {
        let mut report = RunReport::default();

        let candidates = match self.collect_candidates(source).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!("Failed to read trending listing: {}", e);
                return report;
            }
        };
        info!("Found {} candidate tracks", candidates.len());

        for (index, track) in candidates.into_iter().enumerate() {
            info!(index = index + 1, track = %track.display_name(), "Processing");
            let candidate = self.process(source, track, &mut report).await;
            report.candidates.push(candidate);
        }

        report
    }

    async fn collect_candidates(&self, source: &dyn PageSource) -> Result<Vec<Track>> {
        let config = self.extractor.config();
        let url = config.listing_url()?;
        let html = source
            .load(url.as_str(), Some(config.row_selector.as_str()))
            .await?;
        Ok(self.extractor.extract_candidates(&html, config.max_tracks))
    }

    async fn process(
        &self,
        source: &dyn PageSource,
        mut track: Track,
        report: &mut RunReport,
    ) -> CandidateReport {
        let Some(track_url) = track.track_url.clone() else {
            warn!(track = %track.display_name(), "Skipping track without a link");
            return CandidateReport::new(track, Download::NotAttempted, Outcome::SkippedNoUrl);
        };

        match self.store.exists(&track_url) {
            Ok(true) => {
                info!(url = %track_url, "Already stored, skipping");
                return CandidateReport::new(track, Download::NotAttempted, Outcome::SkippedDuplicate);
            }
            Ok(false) => {}
            Err(e) => {
                warn!(url = %track_url, error = %e, "Store lookup failed");
                return CandidateReport::new(track, Download::NotAttempted, Outcome::SaveFailed);
            }
        }

        report.detail_pages_visited += 1;
        if let Err(e) = self.enrich(source, &mut track, &track_url).await {
            warn!(url = %track_url, error = %e, "Failed to process track page");
        }

        let download = match track.audio_url.as_deref() {
            Some(audio_url) => {
                match self
                    .fetcher
                    .fetch(Some(audio_url), &track.artist, &track.title)
                    .await
                {
                    Some(path) => {
                        track.file_path = Some(path.display().to_string());
                        Download::Downloaded
                    }
                    None => Download::Failed,
                }
            }
            None => {
                info!(url = %track_url, "No audio link found");
                Download::NotAttempted
            }
        };

        let outcome = match self.store.insert(&track) {
            Ok(_) => {
                info!(track = %track.display_name(), "Saved");
                Outcome::Saved
            }
            Err(e) if e.is_duplicate() => {
                debug!(url = %track_url, "Stored concurrently, not saved again");
                Outcome::SaveSkippedDuplicate
            }
            Err(e) => {
                warn!(url = %track_url, error = %e, "Failed to save track");
                Outcome::SaveFailed
            }
        };

        CandidateReport::new(track, download, outcome)
    }

    /// Visit the track page and fill in audio URL and style tags.
    async fn enrich(&self, source: &dyn PageSource, track: &mut Track, url: &str) -> Result<()> {
        let html = source.load(url, None).await?;

        track.audio_url = self.extractor.find_audio_url(&html);
        if let Some(ref audio_url) = track.audio_url {
            debug!(audio_url = %audio_url, "Found audio link");
        }

        match timeout(self.style_timeout, self.resolve_styles(source, &html)).await {
            Ok((preview, full)) => track.apply_styles(preview, full),
            Err(_) => warn!(url, "Style lookup timed out"),
        }

        Ok(())
    }

    /// Read the style preview, then try to expand it to the full list.
    ///
    /// Returns `(preview, full)`; `full` is `None` whenever expanding did not
    /// produce tags.
    async fn resolve_styles(
        &self,
        source: &dyn PageSource,
        html: &str,
    ) -> (Option<String>, Option<String>) {
        let Some(tags) = self.extractor.style_tags(html) else {
            debug!("No style links on track page");
            return (None, None);
        };
        let preview = join_tags(&tags);

        if !self.extractor.has_expand_control(html) {
            return (preview, None);
        }

        if let Err(e) = source.click(&self.extractor.expand_locator()).await {
            debug!(error = %e, "Could not expand styles");
            return (preview, None);
        }

        let full = match source.current_markup().await {
            Ok(expanded) => self
                .extractor
                .style_tags(&expanded)
                .and_then(|tags| join_tags(&tags)),
            Err(e) => {
                debug!(error = %e, "Could not read expanded styles");
                None
            }
        };

        (preview, full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::app::HarvestError;
    use crate::browser::Locator;
    use crate::extract::SiteConfig;
    use crate::domain::StoredTrack;
    use crate::store::SqliteStore;

    const LISTING_URL: &str = "https://suno.com/trending";

    /// Serves canned markup per URL and records every navigation.
    #[derive(Default)]
    struct FakePageSource {
        pages: HashMap<String, String>,
        /// Markup a page shows after its expand control is clicked
        expanded: HashMap<String, String>,
        click_delay: Option<Duration>,
        visits: Mutex<Vec<String>>,
        current: Mutex<Option<String>>,
        clicked: Mutex<bool>,
    }

    impl FakePageSource {
        fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
            self.pages.insert(url.to_string(), html.into());
            self
        }

        fn with_expanded(mut self, url: &str, html: impl Into<String>) -> Self {
            self.expanded.insert(url.to_string(), html.into());
            self
        }

        fn visits(&self) -> Vec<String> {
            self.visits.lock().unwrap().clone()
        }

        fn detail_visits(&self) -> usize {
            self.visits().iter().filter(|u| *u != LISTING_URL).count()
        }
    }

    #[async_trait]
    impl PageSource for FakePageSource {
        async fn load(&self, url: &str, _ready_selector: Option<&str>) -> Result<String> {
            self.visits.lock().unwrap().push(url.to_string());
            *self.clicked.lock().unwrap() = false;
            let html = self
                .pages
                .get(url)
                .cloned()
                .ok_or_else(|| HarvestError::Timeout(format!("loading {}", url)))?;
            *self.current.lock().unwrap() = Some(url.to_string());
            Ok(html)
        }

        async fn click(&self, _locator: &Locator) -> Result<()> {
            if let Some(delay) = self.click_delay {
                tokio::time::sleep(delay).await;
            }
            let current = self.current.lock().unwrap().clone().unwrap_or_default();
            if !self.expanded.contains_key(&current) {
                return Err(HarvestError::Browser("nothing to click".into()));
            }
            *self.clicked.lock().unwrap() = true;
            Ok(())
        }

        async fn current_markup(&self) -> Result<String> {
            let current = self.current.lock().unwrap().clone().unwrap_or_default();
            let map = if *self.clicked.lock().unwrap() {
                &self.expanded
            } else {
                &self.pages
            };
            map.get(&current)
                .cloned()
                .ok_or_else(|| HarvestError::Browser("no page".into()))
        }
    }

    /// Pretends to download, succeeding or failing for every URL.
    struct StubFetcher {
        succeed: bool,
        calls: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MediaFetcher for StubFetcher {
        async fn fetch(&self, url: Option<&str>, artist: &str, title: &str) -> Option<PathBuf> {
            let url = url?;
            self.calls.lock().unwrap().push(url.to_string());
            self.succeed
                .then(|| PathBuf::from(format!("/downloads/{} - {}.mp3", artist, title)))
        }
    }

    fn row(title: &str, href: Option<&str>, artist: &str, plays: &str) -> String {
        let title_link = match href {
            Some(href) => format!(r#"<a href="{}">{}</a>"#, href, title),
            None => format!("<span>{}</span>", title),
        };
        format!(
            r#"<div data-testid="song-row">{}<a href="/@{artist}">{artist}</a><button aria-label="Play Count">{plays}</button></div>"#,
            title_link
        )
    }

    fn listing(rows: &[String]) -> String {
        format!("<html><body>{}</body></html>", rows.concat())
    }

    fn detail(audio: Option<&str>, styles: &[&str], expandable: bool) -> String {
        let script = audio
            .map(|url| format!(r#"<script>self.__next_f.push([1,"{{\"audio_url\":\"{}\"}}"])</script>"#, url))
            .unwrap_or_default();
        let links: String = styles
            .iter()
            .map(|s| format!(r#"<a href="/style/{0}">{0}</a>"#, s))
            .collect();
        let container = if styles.is_empty() {
            String::new()
        } else {
            format!("<div class=\"styles\">{}</div>", links)
        };
        let control = if expandable {
            "<button>Show Full Styles</button>"
        } else {
            ""
        };
        format!(
            "<html><head>{}</head><body>{}{}</body></html>",
            script, container, control
        )
    }

    fn pipeline(store: Arc<SqliteStore>, fetcher: Arc<dyn MediaFetcher>) -> Pipeline<SqliteStore> {
        pipeline_with_timeout(store, fetcher, Duration::from_secs(5))
    }

    fn pipeline_with_timeout(
        store: Arc<SqliteStore>,
        fetcher: Arc<dyn MediaFetcher>,
        style_timeout: Duration,
    ) -> Pipeline<SqliteStore> {
        let extractor = PageExtractor::new(SiteConfig::default()).unwrap();
        Pipeline::new(store, fetcher, extractor, style_timeout)
    }

    fn single_song_source() -> FakePageSource {
        FakePageSource::default()
            .with_page(
                LISTING_URL,
                listing(&[row("Song A", Some("/song/1"), "DJ X", "1.2K")]),
            )
            .with_page(
                "https://suno.com/song/1",
                detail(Some("https://cdn.example/a.mp3"), &["lofi"], false),
            )
    }

    #[tokio::test]
    async fn test_full_run_saves_enriched_track() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let fetcher = Arc::new(StubFetcher::new(true));
        let source = single_song_source();

        let report = pipeline(store.clone(), fetcher.clone()).run(&source).await;

        assert_eq!(report.processed(), 1);
        assert_eq!(report.saved(), 1);
        assert_eq!(report.downloaded(), 1);
        assert_eq!(report.detail_pages_visited, 1);

        let stored = store.get_track("https://suno.com/song/1").unwrap().unwrap();
        assert_eq!(stored.track.title, "Song A");
        assert_eq!(stored.track.artist, "DJ X");
        assert_eq!(stored.track.plays, 1200);
        assert!(!stored.track.explicit);
        assert_eq!(stored.track.audio_url.as_deref(), Some("https://cdn.example/a.mp3"));
        assert_eq!(
            stored.track.file_path.as_deref(),
            Some("/downloads/DJ X - Song A.mp3")
        );
        assert_eq!(stored.track.styles_preview.as_deref(), Some("lofi"));
        assert_eq!(stored.track.styles_full.as_deref(), Some("lofi"));
        assert_eq!(
            *fetcher.calls.lock().unwrap(),
            vec!["https://cdn.example/a.mp3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_second_run_skips_stored_tracks() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let fetcher = Arc::new(StubFetcher::new(true));
        let pipeline = pipeline(store.clone(), fetcher.clone());

        pipeline.run(&single_song_source()).await;

        let source = single_song_source();
        let report = pipeline.run(&source).await;

        assert_eq!(report.processed(), 1);
        assert_eq!(report.saved(), 0);
        assert_eq!(report.count(Outcome::SkippedDuplicate), 1);
        assert_eq!(report.detail_pages_visited, 0);
        assert_eq!(source.detail_visits(), 0);
        assert_eq!(fetcher.calls.lock().unwrap().len(), 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_row_without_link_is_skipped() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let source = FakePageSource::default().with_page(
            LISTING_URL,
            listing(&[row("Song B", None, "DJ Y", "5")]),
        );

        let report = pipeline(store.clone(), Arc::new(StubFetcher::new(true)))
            .run(&source)
            .await;

        assert_eq!(report.processed(), 1);
        assert_eq!(report.candidates[0].outcome, Outcome::SkippedNoUrl);
        assert_eq!(report.detail_pages_visited, 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_track_page_still_saves_listing_fields() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let fetcher = Arc::new(StubFetcher::new(true));
        let source = FakePageSource::default().with_page(
            LISTING_URL,
            listing(&[row("Song A", Some("/song/1"), "DJ X", "1234")]),
        );

        let report = pipeline(store.clone(), fetcher.clone()).run(&source).await;

        assert_eq!(report.saved(), 1);
        assert_eq!(report.candidates[0].download, Download::NotAttempted);
        assert!(fetcher.calls.lock().unwrap().is_empty());

        let stored = store.get_track("https://suno.com/song/1").unwrap().unwrap();
        assert_eq!(stored.track.plays, 1234);
        assert!(stored.track.audio_url.is_none());
        assert!(stored.track.file_path.is_none());
        assert!(stored.track.styles_preview.is_none());
        assert!(stored.track.styles_full.is_none());
    }

    #[tokio::test]
    async fn test_expanded_styles_are_stored_as_full() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let url = "https://suno.com/song/1";
        let source = FakePageSource::default()
            .with_page(LISTING_URL, listing(&[row("Song A", Some("/song/1"), "DJ X", "7")]))
            .with_page(url, detail(None, &["lofi", "chill"], true))
            .with_expanded(url, detail(None, &["lofi", "chill", "jazz", "rain"], false));

        pipeline(store.clone(), Arc::new(StubFetcher::new(true)))
            .run(&source)
            .await;

        let stored = store.get_track(url).unwrap().unwrap();
        assert_eq!(stored.track.styles_preview.as_deref(), Some("lofi, chill"));
        assert_eq!(
            stored.track.styles_full.as_deref(),
            Some("lofi, chill, jazz, rain")
        );
    }

    #[tokio::test]
    async fn test_full_styles_fall_back_to_preview_without_control() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let url = "https://suno.com/song/1";
        let source = FakePageSource::default()
            .with_page(LISTING_URL, listing(&[row("Song A", Some("/song/1"), "DJ X", "7")]))
            .with_page(url, detail(None, &["lofi", "chill"], false));

        pipeline(store.clone(), Arc::new(StubFetcher::new(true)))
            .run(&source)
            .await;

        let stored = store.get_track(url).unwrap().unwrap();
        assert_eq!(stored.track.styles_preview.as_deref(), Some("lofi, chill"));
        assert_eq!(stored.track.styles_full.as_deref(), Some("lofi, chill"));
    }

    #[tokio::test]
    async fn test_failed_expand_falls_back_to_preview() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let url = "https://suno.com/song/1";
        // Control is shown but clicking it does nothing
        let source = FakePageSource::default()
            .with_page(LISTING_URL, listing(&[row("Song A", Some("/song/1"), "DJ X", "7")]))
            .with_page(url, detail(None, &["lofi"], true));

        pipeline(store.clone(), Arc::new(StubFetcher::new(true)))
            .run(&source)
            .await;

        let stored = store.get_track(url).unwrap().unwrap();
        assert_eq!(stored.track.styles_full.as_deref(), Some("lofi"));
    }

    #[tokio::test]
    async fn test_no_style_links_leaves_styles_empty() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let url = "https://suno.com/song/1";
        let source = FakePageSource::default()
            .with_page(LISTING_URL, listing(&[row("Song A", Some("/song/1"), "DJ X", "7")]))
            .with_page(url, detail(Some("https://cdn.example/a.mp3"), &[], false));

        pipeline(store.clone(), Arc::new(StubFetcher::new(true)))
            .run(&source)
            .await;

        let stored = store.get_track(url).unwrap().unwrap();
        assert!(stored.track.styles_preview.is_none());
        assert!(stored.track.styles_full.is_none());
        assert!(stored.track.audio_url.is_some());
    }

    #[tokio::test]
    async fn test_slow_style_lookup_times_out() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let url = "https://suno.com/song/1";
        let mut source = FakePageSource::default()
            .with_page(LISTING_URL, listing(&[row("Song A", Some("/song/1"), "DJ X", "7")]))
            .with_page(url, detail(Some("https://cdn.example/a.mp3"), &["lofi"], true))
            .with_expanded(url, detail(None, &["lofi", "jazz"], false));
        source.click_delay = Some(Duration::from_secs(5));

        let report = pipeline_with_timeout(
            store.clone(),
            Arc::new(StubFetcher::new(true)),
            Duration::from_millis(50),
        )
        .run(&source)
        .await;

        assert_eq!(report.saved(), 1);
        let stored = store.get_track(url).unwrap().unwrap();
        assert!(stored.track.styles_preview.is_none());
        assert!(stored.track.styles_full.is_none());
        assert!(stored.track.file_path.is_some());
    }

    #[tokio::test]
    async fn test_failed_download_saves_without_file() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let report = pipeline(store.clone(), Arc::new(StubFetcher::new(false)))
            .run(&single_song_source())
            .await;

        assert_eq!(report.saved(), 1);
        assert_eq!(report.candidates[0].download, Download::Failed);

        let stored = store.get_track("https://suno.com/song/1").unwrap().unwrap();
        assert_eq!(stored.track.audio_url.as_deref(), Some("https://cdn.example/a.mp3"));
        assert!(stored.track.file_path.is_none());
    }

    #[tokio::test]
    async fn test_missing_listing_gives_empty_report() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let source = FakePageSource::default();

        let report = pipeline(store.clone(), Arc::new(StubFetcher::new(true)))
            .run(&source)
            .await;

        assert_eq!(report.processed(), 0);
        assert_eq!(report.detail_pages_visited, 0);
        assert_eq!(source.visits(), vec![LISTING_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_listing_order_and_limit() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let rows: Vec<String> = (1..=4)
            .map(|i| row(&format!("Song {}", i), Some(&format!("/song/{}", i)), "DJ X", "1"))
            .collect();
        let source = FakePageSource::default().with_page(LISTING_URL, listing(&rows));

        let config = SiteConfig {
            max_tracks: 2,
            ..Default::default()
        };
        let pipeline = Pipeline::new(
            store.clone(),
            Arc::new(StubFetcher::new(true)),
            PageExtractor::new(config).unwrap(),
            Duration::from_secs(5),
        );
        let report = pipeline.run(&source).await;

        let titles: Vec<_> = report.candidates.iter().map(|c| c.track.title.as_str()).collect();
        assert_eq!(titles, vec!["Song 1", "Song 2"]);
        assert_eq!(
            source.visits(),
            vec![
                LISTING_URL.to_string(),
                "https://suno.com/song/1".to_string(),
                "https://suno.com/song/2".to_string(),
            ]
        );
    }

    /// Store whose lookups always miss, so duplicates only surface at insert.
    struct RacingStore {
        inner: SqliteStore,
        failing_insert: Option<String>,
        failing_lookup: Option<String>,
    }

    impl Store for RacingStore {
        fn ensure_schema(&self) -> Result<Vec<String>> {
            self.inner.ensure_schema()
        }

        fn exists(&self, track_url: &str) -> Result<bool> {
            if self.failing_lookup.as_deref() == Some(track_url) {
                return Err(HarvestError::Other("lookup failed".into()));
            }
            Ok(false)
        }

        fn insert(&self, track: &Track) -> Result<i64> {
            if self.failing_insert.is_some() && track.track_url == self.failing_insert {
                return Err(HarvestError::Other("disk full".into()));
            }
            self.inner.insert(track)
        }

        fn get_track(&self, track_url: &str) -> Result<Option<StoredTrack>> {
            self.inner.get_track(track_url)
        }

        fn all_tracks(&self) -> Result<Vec<StoredTrack>> {
            self.inner.all_tracks()
        }

        fn count(&self) -> Result<i64> {
            self.inner.count()
        }
    }

    fn three_song_source() -> FakePageSource {
        let rows: Vec<String> = (1..=3)
            .map(|i| row(&format!("Song {}", i), Some(&format!("/song/{}", i)), "DJ X", "1"))
            .collect();
        FakePageSource::default().with_page(LISTING_URL, listing(&rows))
    }

    fn racing_pipeline(store: Arc<RacingStore>) -> Pipeline<RacingStore> {
        Pipeline::new(
            store,
            Arc::new(StubFetcher::new(true)),
            PageExtractor::new(SiteConfig::default()).unwrap(),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_insert_race_and_save_failure_do_not_stop_the_run() {
        let inner = SqliteStore::in_memory().unwrap();
        let mut stored = Track::new("DJ X", "Song 1");
        stored.track_url = Some("https://suno.com/song/1".into());
        inner.insert(&stored).unwrap();

        let store = Arc::new(RacingStore {
            inner,
            failing_insert: Some("https://suno.com/song/2".into()),
            failing_lookup: None,
        });

        let report = racing_pipeline(store.clone()).run(&three_song_source()).await;

        let outcomes: Vec<_> = report.candidates.iter().map(|c| c.outcome).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::SaveSkippedDuplicate, Outcome::SaveFailed, Outcome::Saved]
        );
        assert_eq!(report.saved(), 1);
        assert_eq!(report.detail_pages_visited, 3);
        assert_eq!(store.count().unwrap(), 2);
        assert!(store.get_track("https://suno.com/song/3").unwrap().is_some());

        // The row that was already there is untouched
        let first = store.get_track("https://suno.com/song/1").unwrap().unwrap();
        assert_eq!(first.id, 1);
    }

    #[tokio::test]
    async fn test_failed_lookup_skips_track_without_visiting() {
        let store = Arc::new(RacingStore {
            inner: SqliteStore::in_memory().unwrap(),
            failing_insert: None,
            failing_lookup: Some("https://suno.com/song/2".into()),
        });
        let source = three_song_source();

        let report = racing_pipeline(store.clone()).run(&source).await;

        let outcomes: Vec<_> = report.candidates.iter().map(|c| c.outcome).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Saved, Outcome::SaveFailed, Outcome::Saved]
        );
        assert_eq!(report.detail_pages_visited, 2);
        assert!(!source.visits().contains(&"https://suno.com/song/2".to_string()));
        assert_eq!(store.count().unwrap(), 2);
    }
}
