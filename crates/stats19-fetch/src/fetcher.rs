//! Blocking download of published files into a local data directory.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::urls::resolve_url;

/// User agent sent with download requests.
const USER_AGENT_VALUE: &str = concat!("stats19/", env!("CARGO_PKG_VERSION"));

/// Retrieval seam: anything that can place a named remote file into a
/// directory. The loader is generic over this so tests can count or stub
/// network activity.
pub trait Downloader {
    /// Fetch `filename` and place it at `dest_dir/filename`, creating the
    /// directory if needed. Returns the destination path.
    fn pull(&self, filename: &str, dest_dir: &Path) -> Result<PathBuf, FetchError>;
}

/// HTTP implementation of [`Downloader`].
///
/// Downloads the whole resource into memory, stages it in a temp file in
/// the default temp location, then moves it into place, so an interrupted
/// download never leaves a half-written destination file. There is no
/// locking against concurrent pulls of the same file from other processes.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    domain: String,
    directory: String,
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Fetcher for `domain`/`directory` with the transport's default timeout.
    pub fn new(domain: impl Into<String>, directory: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(domain, directory, None)
    }

    /// Fetcher with an explicit request timeout.
    pub fn with_timeout(
        domain: impl Into<String>,
        directory: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT_VALUE);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            domain: domain.into(),
            directory: directory.into(),
            client,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }
}

impl Downloader for HttpFetcher {
    fn pull(&self, filename: &str, dest_dir: &Path) -> Result<PathBuf, FetchError> {
        let url = resolve_url(filename, &self.domain, &self.directory)?;
        std::fs::create_dir_all(dest_dir).map_err(|e| FetchError::io(dest_dir, e))?;

        info!(%url, "downloading");
        let response = self.client.get(url.as_str()).send()?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        let bytes = response.bytes()?;

        let dest = dest_dir.join(filename);
        let mut staged =
            NamedTempFile::new().map_err(|e| FetchError::io(std::env::temp_dir(), e))?;
        staged
            .write_all(&bytes)
            .map_err(|e| FetchError::io(staged.path(), e))?;
        if let Err(persist) = staged.persist(&dest) {
            // rename fails across filesystems; copy and let the temp file drop
            let staged_path = persist.file.into_temp_path();
            std::fs::copy(&staged_path, &dest).map_err(|e| FetchError::io(&dest, e))?;
        }

        debug!(bytes = bytes.len(), path = %dest.display(), "download complete");
        Ok(dest)
    }
}
