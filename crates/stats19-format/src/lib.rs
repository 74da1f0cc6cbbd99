pub mod columns;
pub mod error;
pub mod frame;
pub mod geo;
pub mod labels;
pub mod temporal;
pub mod value;

pub use columns::{normalize_column_name, normalize_columns};
pub use error::FormatError;
pub use frame::{GeoFrame, LoadedTable};
pub use geo::{GeoOptions, add_geo_info};
pub use labels::{TableLabelMap, convert_code_to_label};
pub use temporal::add_temporal_info;
