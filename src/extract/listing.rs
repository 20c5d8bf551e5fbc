use scraper::Html;
use tracing::debug;

use super::{parse_play_count, text_content, PageExtractor};
use crate::domain::Track;

const UNTITLED: &str = "Untitled";
const UNKNOWN_ARTIST: &str = "Unknown";

impl PageExtractor {
    /// Extract up to `max_count` candidate tracks from the trending listing,
    /// in document order.
    ///
    /// Candidates carry only what the listing shows: title, artist, canonical
    /// URL and play count.
    pub fn extract_candidates(&self, html: &str, max_count: usize) -> Vec<Track> {
        let document = Html::parse_document(html);
        let rows: Vec<_> = document.select(&self.row).collect();
        debug!(rows = rows.len(), "Found listing rows");

        rows.into_iter()
            .take(max_count)
            .map(|row| {
                let title_link = row.select(&self.title_link).next();

                let title = title_link
                    .map(|link| text_content(&link))
                    .unwrap_or_else(|| UNTITLED.to_string());

                let artist = row
                    .select(&self.artist_link)
                    .next()
                    .map(|link| text_content(&link))
                    .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

                let mut track = Track::new(artist, title);
                track.track_url = title_link
                    .and_then(|link| link.value().attr("href"))
                    .and_then(|href| self.base.join(href).ok())
                    .map(String::from);
                track.plays = row
                    .select(&self.plays)
                    .next()
                    .map(|control| parse_play_count(&text_content(&control)))
                    .unwrap_or(0);

                track
            })
            .collect()
    }
}
