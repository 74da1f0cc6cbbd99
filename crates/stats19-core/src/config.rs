//! Local data directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the download directory.
pub const DOWNLOAD_DIR_ENV_VAR: &str = "STATS19_DOWNLOAD_DIRECTORY";

/// Read-only runtime configuration, resolved once at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Flat directory holding downloaded CSV files.
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve the data directory from [`DOWNLOAD_DIR_ENV_VAR`], falling
    /// back to `~/.stats19`.
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DOWNLOAD_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        Self { data_dir }
    }

    /// Configuration with an explicit data directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".stats19"))
        .unwrap_or_else(|| PathBuf::from(".stats19"))
}
