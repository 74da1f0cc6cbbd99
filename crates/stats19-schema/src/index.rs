//! Read-only lookup structure over the schema artifact.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use stats19_model::{ColumnDtype, TableKind, YearCoverage};

use crate::artifact::{FileEntry, SchemaArtifact, TableLabelMap};
use crate::error::SchemaError;

/// Environment variable for overriding the bundled schema artifact.
pub const SCHEMA_PATH_ENV_VAR: &str = "STATS19_SCHEMA_PATH";

const BUNDLED_ARTIFACT: &str = include_str!("../data/stats19_schema.json");

/// Immutable schema index, constructed once and shared by reference.
///
/// Components receive the index at construction time; nothing in the
/// workspace holds it as a global.
#[derive(Debug, Clone)]
pub struct SchemaIndex {
    artifact: SchemaArtifact,
    by_name: BTreeMap<String, usize>,
}

impl SchemaIndex {
    /// Build the index from a parsed artifact.
    pub fn new(artifact: SchemaArtifact) -> Self {
        let by_name = artifact
            .files
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.name.clone(), idx))
            .collect();
        Self { artifact, by_name }
    }

    /// Load the artifact bundled with this crate, honoring
    /// [`SCHEMA_PATH_ENV_VAR`] when set.
    pub fn bundled() -> Result<Self, SchemaError> {
        if let Ok(path) = std::env::var(SCHEMA_PATH_ENV_VAR) {
            return Self::from_path(Path::new(&path));
        }
        Self::from_json_str(BUNDLED_ARTIFACT, Path::new("<bundled>"))
    }

    /// Load an artifact from an explicit path.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let raw = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
        Self::from_json_str(&raw, path)
    }

    /// Parse an artifact from JSON text; `origin` only labels errors.
    pub fn from_json_str(raw: &str, origin: &Path) -> Result<Self, SchemaError> {
        let artifact: SchemaArtifact =
            serde_json::from_str(raw).map_err(|e| SchemaError::json(origin, e))?;
        Ok(Self::new(artifact))
    }

    /// Every registered filename, in artifact order.
    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.artifact.files.iter()
    }

    /// Whether `filename` is registered.
    pub fn contains(&self, filename: &str) -> bool {
        self.by_name.contains_key(filename)
    }

    fn entry(&self, filename: &str) -> Option<&FileEntry> {
        self.by_name
            .get(filename)
            .map(|&idx| &self.artifact.files[idx])
    }

    /// Table kind a filename maps to.
    pub fn table_of(&self, filename: &str) -> Option<TableKind> {
        self.entry(filename).map(|e| e.table)
    }

    /// Declared year coverage for a filename.
    pub fn years_of(&self, filename: &str) -> Option<&YearCoverage> {
        self.entry(filename).map(|e| &e.years)
    }

    /// Declared column dtypes for a table kind, if any.
    pub fn dtypes_of(&self, table: TableKind) -> Option<&BTreeMap<String, ColumnDtype>> {
        self.artifact.dtypes.get(&table)
    }

    /// Code-label maps for a table kind, if any.
    pub fn labels_for(&self, table: TableKind) -> Option<&TableLabelMap> {
        self.artifact.code_labels.get(&table)
    }

    /// Code-label map for one column of one table.
    pub fn label_map(&self, table: TableKind, column: &str) -> Option<&BTreeMap<String, String>> {
        self.labels_for(table).and_then(|m| m.get(column))
    }

    pub fn source_domain(&self) -> &str {
        &self.artifact.source_domain
    }

    pub fn source_directory(&self) -> &str {
        &self.artifact.source_directory
    }

    pub fn latest_published_year(&self) -> i32 {
        self.artifact.latest_published_year
    }

    pub fn version(&self) -> &str {
        &self.artifact.version
    }
}

/// Convenience for tests and callers that already hold a path.
impl TryFrom<PathBuf> for SchemaIndex {
    type Error = SchemaError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        Self::from_path(&path)
    }
}
