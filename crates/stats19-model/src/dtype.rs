//! Declared column types for the typed CSV parse.

use serde::{Deserialize, Serialize};

/// Parse-time type declared for a column in the schema artifact.
///
/// Numeric kinds parse into nullable columns, so missing values never force
/// a column-wide fallback to text. Identifier columns (`accident_index` and
/// friends) are declared `Str` to preserve leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDtype {
    Int,
    Float,
    Str,
}
