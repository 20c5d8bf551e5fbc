use scraper::Html;

use super::PageExtractor;

impl PageExtractor {
    /// Find the track's audio URL on its detail page.
    ///
    /// Inline scripts are searched first, then `<audio>` elements. The site's
    /// silent placeholder asset is never returned.
    pub fn find_audio_url(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        self.audio_from_scripts(&document)
            .or_else(|| self.audio_from_tag(&document))
    }

    fn audio_from_scripts(&self, document: &Html) -> Option<String> {
        document.select(&self.script).find_map(|script| {
            let body: String = script.text().collect();
            self.script_audio_url
                .find_iter(&body)
                .map(|m| m.as_str())
                .find(|url| !self.is_placeholder(url))
                .map(String::from)
        })
    }

    fn audio_from_tag(&self, document: &Html) -> Option<String> {
        document
            .select(&self.audio_tag)
            .filter_map(|audio| audio.value().attr("src"))
            .map(str::trim)
            .filter(|src| self.audio_src.is_match(src) && !self.is_placeholder(src))
            .find_map(|src| self.base.join(src).ok())
            .map(String::from)
    }
}
