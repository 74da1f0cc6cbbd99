//! File resolution and loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use polars::prelude::{CsvReadOptions, DataFrame, DataType, PolarsResult, Schema, SerReader};
use tracing::{debug, info};

use stats19_fetch::{Downloader, FetchError, HttpFetcher};
use stats19_format::{
    GeoOptions, LoadedTable, add_geo_info, add_temporal_info, convert_code_to_label,
    normalize_columns,
};
use stats19_model::{ColumnDtype, TableKind};
use stats19_schema::SchemaIndex;

use crate::catalog::FileCatalog;
use crate::config::Config;
use crate::error::Error;

/// Pass-through options for the CSV parse.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Stop after this many data rows.
    pub n_rows: Option<usize>,
    /// Skip this many lines before the header.
    pub skip_rows: usize,
    /// Rows sampled for dtype inference of undeclared columns.
    pub infer_schema_length: Option<usize>,
    /// Trade speed for memory.
    pub low_memory: bool,
}

impl ParseOptions {
    pub fn with_n_rows(mut self, n_rows: Option<usize>) -> Self {
        self.n_rows = n_rows;
        self
    }

    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    pub fn with_infer_schema_length(mut self, length: Option<usize>) -> Self {
        self.infer_schema_length = length;
        self
    }

    pub fn with_low_memory(mut self, low_memory: bool) -> Self {
        self.low_memory = low_memory;
        self
    }
}

/// What `load` should do beyond parsing.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Download the file when absent locally.
    pub auto_download: bool,
    /// Apply the code→label pass.
    pub convert_code_to_label: bool,
    /// Apply the temporal pass.
    pub add_temporal_info: bool,
    /// Apply the geo pass.
    pub add_geo_info: bool,
    /// Table kind override; inferred from the filename when unset.
    pub table: Option<TableKind>,
    /// CSV parse pass-through.
    pub parse: ParseOptions,
    /// CRS configuration for the geo pass.
    pub geo: GeoOptions,
}

impl LoadOptions {
    pub fn with_auto_download(mut self, enable: bool) -> Self {
        self.auto_download = enable;
        self
    }

    pub fn with_code_labels(mut self, enable: bool) -> Self {
        self.convert_code_to_label = enable;
        self
    }

    pub fn with_temporal_info(mut self, enable: bool) -> Self {
        self.add_temporal_info = enable;
        self
    }

    pub fn with_geo_info(mut self, enable: bool) -> Self {
        self.add_geo_info = enable;
        self
    }

    pub fn with_table(mut self, table: TableKind) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_parse(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    pub fn with_geo(mut self, geo: GeoOptions) -> Self {
        self.geo = geo;
        self
    }

    fn any_format(&self) -> bool {
        self.convert_code_to_label || self.add_temporal_info || self.add_geo_info
    }
}

/// Entry point tying schema, configuration and fetcher together.
///
/// All collaborators are injected at construction, so tests run against a
/// stub fetcher and a purpose-built schema.
#[derive(Debug, Clone)]
pub struct Stats19<D = HttpFetcher> {
    schema: SchemaIndex,
    config: Config,
    fetcher: D,
}

impl Stats19<HttpFetcher> {
    /// Bundled schema, environment-resolved data directory, HTTP fetcher
    /// pointed at the schema's source domain.
    pub fn new() -> Result<Self, Error> {
        let schema = SchemaIndex::bundled()?;
        let config = Config::from_env();
        let fetcher = HttpFetcher::new(schema.source_domain(), schema.source_directory())?;
        Ok(Self {
            schema,
            config,
            fetcher,
        })
    }
}

impl<D: Downloader> Stats19<D> {
    /// Assemble from explicit parts.
    pub fn with_parts(schema: SchemaIndex, config: Config, fetcher: D) -> Self {
        Self {
            schema,
            config,
            fetcher,
        }
    }

    pub fn schema(&self) -> &SchemaIndex {
        &self.schema
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fetcher(&self) -> &D {
        &self.fetcher
    }

    /// Replace the configuration (e.g. an explicit data directory).
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// List registered filenames; see [`FileCatalog::list_files`].
    pub fn list_files(&self, year: Option<i32>, table: Option<&str>) -> Vec<String> {
        FileCatalog::new(&self.schema).list_files(year, table)
    }

    /// Typed listing; see [`FileCatalog::list_files_for`].
    pub fn list_files_for(&self, table: TableKind, year: Option<i32>) -> Vec<String> {
        FileCatalog::new(&self.schema).list_files_for(table, year)
    }

    /// Download `filename` into the data directory, replacing any local copy.
    pub fn pull(&self, filename: &str) -> Result<PathBuf, Error> {
        self.fetcher
            .pull(filename, &self.config.data_dir)
            .map_err(Error::from)
    }

    /// Load a data file, fetching and formatting per `options`.
    pub fn load(&self, filename: &str, options: &LoadOptions) -> Result<LoadedTable, Error> {
        let path = self.config.data_dir.join(filename);
        if !path.exists() {
            if !options.auto_download {
                return Err(Error::NotFoundLocally { path });
            }
            match self.fetcher.pull(filename, &self.config.data_dir) {
                Ok(_) => {}
                Err(FetchError::NotFound { .. }) => {
                    return Err(Error::UnknownFilename {
                        filename: filename.to_string(),
                    });
                }
                Err(error) => return Err(error.into()),
            }
        }

        let table = options.table.or_else(|| self.schema.table_of(filename));
        let dtypes = table.and_then(|kind| self.schema.dtypes_of(kind));
        let mut df = read_frame(&path, dtypes, &options.parse)?;
        debug!(
            rows = df.height(),
            columns = df.width(),
            path = %path.display(),
            "parsed"
        );

        if options.any_format() {
            normalize_columns(&mut df);
        }
        if options.convert_code_to_label
            && let Some(kind) = table
            && let Some(labels) = self.schema.labels_for(kind)
        {
            convert_code_to_label(&mut df, labels);
        }
        if options.add_temporal_info {
            add_temporal_info(&mut df)?;
        }
        if options.add_geo_info {
            let loaded = add_geo_info(df, &options.geo)?;
            info!(rows = loaded.record_count(), "loaded");
            return Ok(loaded);
        }
        info!(rows = df.height(), "loaded");
        Ok(LoadedTable::Frame(df))
    }
}

fn read_frame(
    path: &Path,
    dtypes: Option<&BTreeMap<String, ColumnDtype>>,
    parse: &ParseOptions,
) -> PolarsResult<DataFrame> {
    let mut options = CsvReadOptions::default()
        .with_has_header(true)
        .with_n_rows(parse.n_rows)
        .with_skip_rows(parse.skip_rows)
        .with_low_memory(parse.low_memory);
    if let Some(length) = parse.infer_schema_length {
        options = options.with_infer_schema_length(Some(length));
    }
    if let Some(dtypes) = dtypes
        && let Some(schema) = declared_schema(path, dtypes, parse)?
    {
        options = options.with_schema_overwrite(Some(schema));
    }
    options
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
}

/// Build the dtype overwrite for the columns actually present in the file.
///
/// The declared map is keyed by formatted name and spans the whole table;
/// a one-row sample read restricts it so undeclared or absent columns fall
/// back to inference.
fn declared_schema(
    path: &Path,
    dtypes: &BTreeMap<String, ColumnDtype>,
    parse: &ParseOptions,
) -> PolarsResult<Option<Arc<Schema>>> {
    let sample = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(parse.skip_rows)
        .with_n_rows(Some(1))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    let mut schema = Schema::default();
    for name in sample.get_column_names() {
        if let Some(dtype) = dtypes.get(name.as_str()) {
            schema.with_column(name.as_str().into(), polars_dtype(*dtype));
        }
    }
    if schema.len() == 0 {
        return Ok(None);
    }
    Ok(Some(Arc::new(schema)))
}

/// Declared dtypes parse into nullable columns, so missing values never
/// force a column-wide fallback.
fn polars_dtype(dtype: ColumnDtype) -> DataType {
    match dtype {
        ColumnDtype::Int => DataType::Int64,
        ColumnDtype::Float => DataType::Float64,
        ColumnDtype::Str => DataType::String,
    }
}
