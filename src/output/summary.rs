//! End-of-crawl summary block

use crate::crawler::CrawlResult;

/// Width of the `=` rule framing the summary
const RULE_WIDTH: usize = 50;

/// Renders the summary block
///
/// The block starts with a blank line and is framed by `=` rules:
///
/// ```text
///
/// ==================================================
/// Crawl Summary:
/// Base URL: https://example.com/
/// Maximum Depth: 3
/// Total URLs discovered: 42
/// Total pages crawled: 17
/// ==================================================
/// ```
pub fn render_summary(result: &CrawlResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);

    format!(
        "\n{rule}\n\
         Crawl Summary:\n\
         Base URL: {}\n\
         Maximum Depth: {}\n\
         Total URLs discovered: {}\n\
         Total pages crawled: {}\n\
         {rule}\n",
        result.base_url,
        result.max_depth,
        result.total_discovered(),
        result.pages_crawled,
    )
}
