//! Geospatial point construction and reprojection.

use geo_types::Point;
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use proj4rs::Proj;
use proj4rs::transform::transform;
use tracing::warn;

use crate::error::FormatError;
use crate::frame::{GeoFrame, LoadedTable};
use crate::value::any_to_f64;

/// WGS84 geographic coordinates (the published longitude/latitude).
const WGS84: &str = "+proj=longlat +ellps=WGS84 +towgs84=0,0,0,0,0,0,0 +no_defs";

/// British National Grid (OSGB36 transverse mercator).
const BNG: &str = "+proj=tmerc +lat_0=49 +lon_0=-2 +k=0.9996012717 +x_0=400000 \
                   +y_0=-100000 +ellps=airy \
                   +towgs84=446.448,-125.157,542.06,0.15,0.247,0.842,-20.489 \
                   +units=m +no_defs";

/// Source and target coordinate reference systems for the geo pass.
///
/// Accepts `EPSG:4326`, `EPSG:27700`, or a raw proj string.
#[derive(Debug, Clone)]
pub struct GeoOptions {
    pub source_crs: String,
    pub target_crs: String,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self {
            source_crs: "EPSG:4326".to_string(),
            target_crs: "EPSG:27700".to_string(),
        }
    }
}

impl GeoOptions {
    pub fn with_source_crs(mut self, crs: impl Into<String>) -> Self {
        self.source_crs = crs.into();
        self
    }

    pub fn with_target_crs(mut self, crs: impl Into<String>) -> Self {
        self.target_crs = crs.into();
        self
    }
}

fn proj_definition(code: &str) -> Result<&str, FormatError> {
    if code.trim_start().starts_with('+') {
        return Ok(code);
    }
    if code.eq_ignore_ascii_case("EPSG:4326") {
        return Ok(WGS84);
    }
    if code.eq_ignore_ascii_case("EPSG:27700") {
        return Ok(BNG);
    }
    Err(FormatError::UnknownCrs {
        code: code.to_string(),
    })
}

/// Build per-row point geometry from `longitude`/`latitude` and reproject.
///
/// Rows with a missing coordinate are dropped (the count is logged). When
/// either column is absent the table is returned unchanged as a plain
/// frame, with a warning.
pub fn add_geo_info(df: DataFrame, options: &GeoOptions) -> Result<LoadedTable, FormatError> {
    if df.column("longitude").is_err() || df.column("latitude").is_err() {
        warn!("column longitude or latitude not found, geo info not added");
        return Ok(LoadedTable::Frame(df));
    }

    let longitude = df.column("longitude")?;
    let latitude = df.column("latitude")?;
    let mut keep: Vec<bool> = Vec::with_capacity(df.height());
    let mut coordinates: Vec<(f64, f64)> = Vec::new();
    for idx in 0..df.height() {
        match (
            any_to_f64(longitude.get(idx)?),
            any_to_f64(latitude.get(idx)?),
        ) {
            (Some(x), Some(y)) => {
                keep.push(true);
                coordinates.push((x, y));
            }
            _ => keep.push(false),
        }
    }

    let dropped = keep.iter().filter(|&&k| !k).count();
    if dropped > 0 {
        warn!(
            records = dropped,
            "removed records with missing longitude or latitude"
        );
    }

    let mask = BooleanChunked::from_slice("coordinate_mask".into(), &keep);
    let data = df.filter(&mask)?;

    let source = Proj::from_proj_string(proj_definition(&options.source_crs)?)?;
    let target = Proj::from_proj_string(proj_definition(&options.target_crs)?)?;
    let mut geometry = Vec::with_capacity(coordinates.len());
    for (x, y) in coordinates {
        let mut point = if source.is_latlong() {
            (x.to_radians(), y.to_radians(), 0.0)
        } else {
            (x, y, 0.0)
        };
        transform(&source, &target, &mut point)?;
        let (out_x, out_y) = if target.is_latlong() {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };
        geometry.push(Point::new(out_x, out_y));
    }

    Ok(LoadedTable::Geo(GeoFrame::new(
        data,
        geometry,
        options.target_crs.clone(),
    )))
}
