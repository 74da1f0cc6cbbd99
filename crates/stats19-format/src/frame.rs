//! Loaded-table variants.

use geo_types::Point;
use polars::prelude::DataFrame;

/// A table whose rows carry a projected point geometry.
///
/// Built by the geo pass: rows with missing coordinates are dropped, so
/// `geometry` always has one point per remaining row.
#[derive(Debug, Clone)]
pub struct GeoFrame {
    data: DataFrame,
    geometry: Vec<Point<f64>>,
    crs: String,
}

impl GeoFrame {
    pub fn new(data: DataFrame, geometry: Vec<Point<f64>>, crs: impl Into<String>) -> Self {
        debug_assert_eq!(data.height(), geometry.len());
        Self {
            data,
            geometry,
            crs: crs.into(),
        }
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn geometry(&self) -> &[Point<f64>] {
        &self.geometry
    }

    /// CRS the geometry is expressed in (e.g. "EPSG:27700").
    pub fn crs(&self) -> &str {
        &self.crs
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn into_parts(self) -> (DataFrame, Vec<Point<f64>>, String) {
        (self.data, self.geometry, self.crs)
    }
}

/// Result of a load: a plain table, or a geometry-enabled one when the geo
/// pass ran and its prerequisite columns were present.
#[derive(Debug, Clone)]
pub enum LoadedTable {
    Frame(DataFrame),
    Geo(GeoFrame),
}

impl LoadedTable {
    /// The tabular data, whichever variant this is.
    pub fn frame(&self) -> &DataFrame {
        match self {
            Self::Frame(df) => df,
            Self::Geo(geo) => geo.data(),
        }
    }

    pub fn into_frame(self) -> DataFrame {
        match self {
            Self::Frame(df) => df,
            Self::Geo(geo) => geo.into_parts().0,
        }
    }

    pub fn as_geo(&self) -> Option<&GeoFrame> {
        match self {
            Self::Frame(_) => None,
            Self::Geo(geo) => Some(geo),
        }
    }

    pub fn is_geo(&self) -> bool {
        matches!(self, Self::Geo(_))
    }

    pub fn record_count(&self) -> usize {
        self.frame().height()
    }
}

impl From<DataFrame> for LoadedTable {
    fn from(df: DataFrame) -> Self {
        Self::Frame(df)
    }
}
