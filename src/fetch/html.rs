// src/fetch/html.rs
// =============================================================================
// This module pulls link targets out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Never fails: broken markup still produces a (partial) document
//
// Targets are returned exactly as written in the page (relative or
// absolute). Resolving them against the page URL is the crawler's job,
// because the PDF check looks at the raw href.
// =============================================================================

use scraper::{Html, Selector};

// Returns the raw href of every <a href> and <link href> element, in
// document order.
//
// Parameters:
//   body: the raw response bytes (decoded lossily if not valid UTF-8)
//
// Example:
//   body = "<a href='docs/guide.pdf'>Guide</a>"
//   result = ["docs/guide.pdf"]
pub fn extract_link_targets(body: &[u8]) -> Vec<String> {
    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);

    // The selector is a constant and known to be valid, so unwrap() can
    // only fail on a programmer error
    let selector = Selector::parse("a[href], link[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
        .collect()
}
