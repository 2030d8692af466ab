//! HTML link extraction
//!
//! The traversal engine only needs the raw `href` strings of a page, in
//! markup order. Resolution, canonicalization and filtering happen in the
//! URL normalizer, so extractors return hrefs exactly as written.

use scraper::{Html, Selector};

/// Capability for pulling hyperlinks out of fetched content
pub trait LinkExtractor {
    /// Returns every raw href in the content, in document order
    fn extract_hrefs(&self, content: &str) -> Vec<String>;
}

/// Extracts `<a href="...">` values from HTML using `scraper`
///
/// # Example
///
/// ```
/// use depth_crawler::crawler::{HtmlLinkExtractor, LinkExtractor};
///
/// let html = r#"<html><body><a href="/page">Link</a><a>none</a></body></html>"#;
/// let hrefs = HtmlLinkExtractor.extract_hrefs(html);
/// assert_eq!(hrefs, vec!["/page".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_hrefs(&self, content: &str) -> Vec<String> {
        let document = Html::parse_document(content);

        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}
