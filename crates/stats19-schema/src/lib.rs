pub mod artifact;
pub mod error;
pub mod index;

pub use artifact::{CodeLabels, FileEntry, SchemaArtifact, TableLabelMap};
pub use error::SchemaError;
pub use index::{SCHEMA_PATH_ENV_VAR, SchemaIndex};
