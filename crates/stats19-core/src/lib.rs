pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;

pub use catalog::FileCatalog;
pub use config::{Config, DOWNLOAD_DIR_ENV_VAR};
pub use error::Error;
pub use loader::{LoadOptions, ParseOptions, Stats19};

// The pieces callers combine with the loader, re-exported for convenience.
pub use stats19_fetch::{Downloader, FetchError, HttpFetcher};
pub use stats19_format::{
    GeoFrame, GeoOptions, LoadedTable, normalize_column_name,
};
pub use stats19_model::{ColumnDtype, TableKind, YearCoverage};
pub use stats19_schema::{SchemaIndex, SchemaError};
