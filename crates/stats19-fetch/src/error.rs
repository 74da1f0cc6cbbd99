//! Error types for remote file retrieval.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving or downloading a remote file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The domain or joined path did not form a valid URL.
    #[error("invalid url from domain {domain:?} and path {path:?}: {source}")]
    Url {
        domain: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// Client construction or transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote returned 404; the filename is not published at the source.
    #[error("{url} returned 404 Not Found")]
    NotFound { url: String },

    /// Any other non-success HTTP status.
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Filesystem failure while staging or placing the download.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is the distinguished remote-missing condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
