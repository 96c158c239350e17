// src/fetch/mod.rs
// =============================================================================
// This module is everything the crawler needs from the network.
//
// Submodules:
// - http: the real reqwest-backed fetcher (timeout + fixed User-Agent)
// - html: pulls raw href targets out of a page body
//
// The crawler only talks to the `Fetcher` trait, so tests can hand it an
// in-memory fake instead of a real HTTP client.
// =============================================================================

mod html;
mod http;

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;

pub use html::extract_link_targets;
pub use http::HttpFetcher;

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Value of the Content-Type header, if the server sent one
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    /// True when the server says this body is a PDF.
    ///
    /// A missing or unrecognised content type is NOT a PDF: such pages are
    /// parsed for links like HTML.
    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .map(crate::crawl::is_pdf_content_type)
            .unwrap_or(false)
    }
}

/// Performs one GET request.
///
/// Implementations must turn every failure (timeout, transport error,
/// non-success status) into a `FetchError` instead of panicking.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Response, FetchError>;
}
