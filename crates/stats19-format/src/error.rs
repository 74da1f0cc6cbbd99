use polars::error::PolarsError;
use thiserror::Error;

/// Errors raised by the formatting passes.
///
/// Missing prerequisite columns are not errors: those passes warn and
/// return the table unchanged. Only structural failures surface here.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Frame(#[from] PolarsError),

    #[error("unknown CRS {code:?}; expected EPSG:4326, EPSG:27700, or a proj string")]
    UnknownCrs { code: String },

    #[error("projection failed: {0}")]
    Projection(#[from] proj4rs::errors::Error),
}
