//! Year coverage declared for each published file.

use serde::{Deserialize, Serialize};

/// The calendar years a file's records span.
///
/// Per-year extracts list their years explicitly; the rolling files
/// ("last-5-years", "1979-latest-published-year") declare a range whose
/// upper bound may be open, meaning "through the latest published year".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearCoverage {
    /// An explicit list of covered years.
    Years(Vec<i32>),
    /// An inclusive range; a missing `to` tracks the latest published year.
    Range {
        from: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<i32>,
    },
}

impl YearCoverage {
    /// Whether `year` falls inside this coverage.
    ///
    /// `latest` bounds open-ended ranges: the publisher has no data past the
    /// latest published year, so nothing covers years beyond it.
    pub fn contains(&self, year: i32, latest: i32) -> bool {
        match self {
            Self::Years(years) => years.contains(&year),
            Self::Range { from, to } => year >= *from && year <= to.unwrap_or(latest),
        }
    }

    /// First covered year, if any.
    pub fn first_year(&self) -> Option<i32> {
        match self {
            Self::Years(years) => years.iter().copied().min(),
            Self::Range { from, .. } => Some(*from),
        }
    }

    /// Last covered year, resolving an open upper bound against `latest`.
    pub fn last_year(&self, latest: i32) -> Option<i32> {
        match self {
            Self::Years(years) => years.iter().copied().max(),
            Self::Range { to, .. } => Some(to.unwrap_or(latest)),
        }
    }
}
