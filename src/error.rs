// src/error.rs
// =============================================================================
// Error kinds used by the crawler library.
//
// - FetchError: one HTTP request failed (timeout, bad status, network)
// - WriteError: saving a PDF to the output directory failed
// - DownloadError: either of the above, for one PDF
// - SetupError: the crawl cannot start at all (the only fatal kind)
//
// FetchError and WriteError are per-URL: the traversal loop logs them and
// moves on to the next link. Malformed HTML is not an error at all, the
// parser simply returns the links it could recover.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// A single GET request did not produce a usable response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request took longer than the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// Connection, DNS, TLS or body read failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The URL could not be requested (unsupported scheme etc.)
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else if error.is_builder() {
            FetchError::InvalidUrl(error.to_string())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

/// Saving a downloaded PDF failed.
#[derive(Error, Debug)]
#[error("failed to write {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Why one PDF download did not end up on disk.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Failures that stop the crawl before it starts.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
        let error = FetchError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "transport error: connection refused");
    }

    #[test]
    fn test_write_error_names_path() {
        let error = WriteError {
            path: PathBuf::from("out/report.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "failed to write out/report.pdf: denied");
    }

    #[test]
    fn test_setup_error_display() {
        let error = SetupError::InvalidSeed {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid seed URL 'nope': relative URL without a base"
        );
    }
}
