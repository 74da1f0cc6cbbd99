//! The closed set of STATS19 table kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic content of a published STATS19 file.
///
/// The Department for Transport renamed the accident table to "collision"
/// in the 2022 release; both spellings parse to [`TableKind::Collision`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// One record per collision (historically "accident").
    Collision,
    /// One record per casualty involved in a collision.
    Casualty,
    /// One record per vehicle involved in a collision.
    Vehicle,
    /// The e-scooter extract published from 2020 onwards.
    EScooter,
    /// Severity-adjustment lookup tables, keyed by casualty.
    AdjustmentLookup,
}

impl TableKind {
    /// Parse a user-supplied table name, case-insensitively.
    ///
    /// Accepted aliases mirror the published dataset vocabulary:
    /// "accident"/"collision", "casualty", "vehicle", "e_scooter" or
    /// "e-scooter". Adjustment tables have no user-facing alias; they are
    /// addressed by filename only.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "accident" | "collision" => Some(Self::Collision),
            "casualty" => Some(Self::Casualty),
            "vehicle" => Some(Self::Vehicle),
            "e_scooter" | "e-scooter" => Some(Self::EScooter),
            _ => None,
        }
    }

    /// Canonical snake_case name, matching the schema artifact keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collision => "collision",
            Self::Casualty => "casualty",
            Self::Vehicle => "vehicle",
            Self::EScooter => "e_scooter",
            Self::AdjustmentLookup => "adjustment_lookup",
        }
    }

    /// Whether this kind is addressable through the catalog's table filter.
    ///
    /// Adjustment lookups are registered files but not a queryable table.
    pub fn is_catalog_table(self) -> bool {
        !matches!(self, Self::AdjustmentLookup)
    }

    /// All kinds, in artifact order.
    pub fn all() -> [Self; 5] {
        [
            Self::Collision,
            Self::Casualty,
            Self::Vehicle,
            Self::EScooter,
            Self::AdjustmentLookup,
        ]
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown table kind: {name:?}")]
pub struct ParseTableKindError {
    pub name: String,
}

impl FromStr for TableKind {
    type Err = ParseTableKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseTableKindError {
            name: s.to_string(),
        })
    }
}
