//! Discovery of registered filenames.

use std::collections::BTreeSet;

use tracing::warn;

use stats19_model::TableKind;
use stats19_schema::SchemaIndex;

/// Answers "which filenames exist for year Y / table T".
///
/// A discovery API: invalid filters warn and return an empty result rather
/// than failing. Results are deduplicated and sorted so callers never
/// depend on index iteration order.
#[derive(Debug, Clone, Copy)]
pub struct FileCatalog<'a> {
    schema: &'a SchemaIndex,
}

impl<'a> FileCatalog<'a> {
    pub fn new(schema: &'a SchemaIndex) -> Self {
        Self { schema }
    }

    /// List registered filenames, optionally filtered by year and table.
    ///
    /// The table filter accepts the published aliases ("accident",
    /// "collision", "casualty", "vehicle", "e_scooter"), case-insensitively.
    /// An unrecognized name logs a warning and yields an empty list.
    pub fn list_files(&self, year: Option<i32>, table: Option<&str>) -> Vec<String> {
        let kind = match table {
            None => None,
            Some(name) => match TableKind::parse(name).filter(|k| k.is_catalog_table()) {
                Some(kind) => Some(kind),
                None => {
                    warn!(table = name, "skipped invalid table");
                    return Vec::new();
                }
            },
        };
        self.collect(year, kind)
    }

    /// Typed variant of [`Self::list_files`]; also reaches adjustment files.
    pub fn list_files_for(&self, table: TableKind, year: Option<i32>) -> Vec<String> {
        self.collect(year, Some(table))
    }

    fn collect(&self, year: Option<i32>, kind: Option<TableKind>) -> Vec<String> {
        let latest = self.schema.latest_published_year();
        let names: BTreeSet<String> = self
            .schema
            .files()
            .filter(|entry| kind.is_none_or(|k| entry.table == k))
            .filter(|entry| year.is_none_or(|y| entry.years.contains(y, latest)))
            .map(|entry| entry.name.clone())
            .collect();
        names.into_iter().collect()
    }
}
