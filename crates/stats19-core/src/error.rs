use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

use stats19_fetch::FetchError;
use stats19_format::FormatError;
use stats19_schema::SchemaError;

/// Failures surfaced by the loading pipeline.
///
/// Catalog misuse (an unknown table name) and missing formatter
/// prerequisites are warnings, not errors; only the conditions below fail
/// a load.
#[derive(Debug, Error)]
pub enum Error {
    /// The file is not in the data directory and auto-download is off.
    #[error(
        "{path}: file not found locally; call pull() first or enable auto_download"
    )]
    NotFoundLocally { path: PathBuf },

    /// The remote returned 404: the name is not a published file.
    #[error(
        "{filename} is not a valid filename; call list_files() for the registered names"
    )]
    UnknownFilename { filename: String },

    /// Network or filesystem failure during a download.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Schema artifact could not be read or parsed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A formatting pass failed structurally.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// CSV parse or column access failure.
    #[error(transparent)]
    Frame(#[from] PolarsError),
}
