// src/crawl/scope.rs
// =============================================================================
// URL resolution and the same-domain rule.
//
// Every href found on a page goes through resolve_link() first. Only the
// resolved, absolute URL is ever compared against the visited/downloaded
// sets or checked for scope.
// =============================================================================

use url::Url;

/// Network location of a URL: host, plus ":port" when the port is explicit.
///
/// Returns an empty string for URLs without a host.
pub fn network_location(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// True when `url` lives on `base_domain`, or has no host at all.
pub fn is_in_scope(url: &Url, base_domain: &str) -> bool {
    let location = network_location(url);
    location.is_empty() || location == base_domain
}

/// Resolves a raw href against the page it was found on.
///
/// Returns None for targets the crawler never follows: in-page anchors,
/// mailto:/tel:/javascript:/data: links, anything that does not parse,
/// and anything that is not http(s) after resolution. The fragment is
/// dropped so `page.html#top` and `page.html` are the same page.
pub fn resolve_link(page: &Url, href: &str) -> Option<Url> {
    let lower = href.to_ascii_lowercase();
    if href.starts_with('#')
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("javascript:")
        || lower.starts_with("data:")
    {
        return None;
    }

    let mut url = page.join(href).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    url.set_fragment(None);
    Some(url)
}
