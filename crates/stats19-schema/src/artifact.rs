//! On-disk shape of the pre-built schema artifact.
//!
//! The artifact is generated offline from the published data guide and
//! shipped with the crate as versioned JSON. It is deserialized once and
//! never mutated at runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stats19_model::{ColumnDtype, TableKind, YearCoverage};

/// Code → human-readable label, for one column of one table.
pub type CodeLabels = BTreeMap<String, String>;

/// Formatted column name → code-label table.
pub type TableLabelMap = BTreeMap<String, CodeLabels>;

/// One registered remote file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Exact remote filename (also the local filename).
    pub name: String,
    /// Table kind the file contains.
    pub table: TableKind,
    /// Calendar years the file's records span.
    pub years: YearCoverage,
}

/// The complete artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaArtifact {
    /// Artifact build identifier (data-guide release date).
    pub version: String,
    /// Scheme + host of the publisher.
    pub source_domain: String,
    /// Path prefix under the domain where the files live.
    pub source_directory: String,
    /// Most recent year with published records; bounds open year ranges.
    pub latest_published_year: i32,
    /// Every downloadable file, with its table kind and year coverage.
    pub files: Vec<FileEntry>,
    /// Declared parse types, per table, keyed by formatted column name.
    pub dtypes: BTreeMap<TableKind, BTreeMap<String, ColumnDtype>>,
    /// Code-label maps, per table, keyed by formatted column name.
    pub code_labels: BTreeMap<TableKind, TableLabelMap>,
}
