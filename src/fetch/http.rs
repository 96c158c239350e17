// src/fetch/http.rs
// =============================================================================
// The real fetcher: one reqwest Client shared by the whole crawl.
//
// Key functionality:
// - Fixed timeout per request (30s by default)
// - Fixed User-Agent header on every request
// - Sorts failures into FetchError kinds (timeout, HTTP status, transport)
//
// Rust concepts:
// - async/await: each fetch waits for the network without blocking a thread
// - Traits: HttpFetcher implements the crate's Fetcher trait
// - From conversions: reqwest::Error -> FetchError with the ? operator
// =============================================================================

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::{Fetcher, Response};
use crate::error::{FetchError, SetupError};

/// Fetches pages and PDFs over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the given timeout and User-Agent.
    ///
    /// The client is created once and reused for every request so
    /// connections to the target host are pooled.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, SetupError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Response, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        // HTTP status codes:
        // - 2xx: success, keep the body
        // - anything else (after redirects were followed): a failed fetch
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // A timeout while reading the body is still a timeout
        let body = response.bytes().await?;

        Ok(Response {
            status: status.as_u16(),
            content_type,
            body: body.to_vec(),
        })
    }
}
