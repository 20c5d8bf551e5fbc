use scraper::{ElementRef, Html};

use super::{text_content, PageExtractor};

/// Join tag texts into the stored comma-separated form, `None` when empty.
pub fn join_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(", "))
    }
}

impl PageExtractor {
    /// Collect the style tags on a track page.
    ///
    /// The container is the closest element around the first style link; all
    /// style links inside it are read. Returns `None` when the page has no style
    /// links at all, and an empty list when the links carry no visible text.
    pub fn style_tags(&self, html: &str) -> Option<Vec<String>> {
        let document = Html::parse_document(html);
        let first = document.select(&self.style_link).next()?;
        let container = first.parent().and_then(ElementRef::wrap).unwrap_or(first);

        let tags = container
            .select(&self.style_link)
            .map(|link| text_content(&link))
            .filter(|text| !text.is_empty())
            .collect();

        Some(tags)
    }

    /// Whether the page shows a control that expands the style list.
    pub fn has_expand_control(&self, html: &str) -> bool {
        let document = Html::parse_document(html);
        document.select(&self.expand_control).any(|control| {
            let text = text_content(&control).to_lowercase();
            self.config
                .expand_phrases
                .iter()
                .any(|phrase| text.contains(&phrase.to_lowercase()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::SiteConfig;

    fn extractor() -> PageExtractor {
        PageExtractor::new(SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_join_tags() {
        assert_eq!(
            join_tags(&["lofi".to_string(), "jazz".to_string()]).as_deref(),
            Some("lofi, jazz")
        );
        assert!(join_tags(&[]).is_none());
    }

    #[test]
    fn test_style_tags_from_container() {
        let html = r#"<html><body>
            <section class="meta">
              <div class="styles">
                <a href="/style/lofi">lofi</a>
                <a href="/style/jazz"> jazz </a>
              </div>
            </section>
            </body></html>"#;

        let tags = extractor().style_tags(html).unwrap();
        assert_eq!(tags, vec!["lofi", "jazz"]);
    }

    #[test]
    fn test_style_links_outside_container_ignored() {
        let html = r#"<body>
            <div class="styles"><a href="/style/lofi">lofi</a></div>
            <footer><a href="/style/popular">popular styles</a></footer>
            </body>"#;

        let tags = extractor().style_tags(html).unwrap();
        assert_eq!(tags, vec!["lofi"]);
    }

    #[test]
    fn test_no_style_container() {
        let html = r#"<body><a href="/song/1">Song</a></body>"#;
        assert!(extractor().style_tags(html).is_none());
    }

    #[test]
    fn test_empty_style_links() {
        let html = r#"<div><a href="/style/x"> </a><a href="/style/y"></a></div>"#;
        let tags = extractor().style_tags(html).unwrap();
        assert!(tags.is_empty());
        assert!(join_tags(&tags).is_none());
    }

    #[test]
    fn test_expand_control_detected_case_insensitively() {
        let html = r#"<div><button>Show Full Styles</button></div>"#;
        assert!(extractor().has_expand_control(html));

        let html = r#"<div><span role="button">View full STYLES</span></div>"#;
        assert!(extractor().has_expand_control(html));
    }

    #[test]
    fn test_expand_control_absent() {
        let html = r#"<div><button>Share</button><a href="/style/lofi">lofi</a></div>"#;
        assert!(!extractor().has_expand_control(html));
    }
}
