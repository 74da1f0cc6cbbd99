use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use stats19_core::{
    Config, Downloader, Error, FetchError, LoadOptions, SchemaIndex, Stats19,
};

const SCHEMA: &str = r#"{
    "version": "test",
    "source_domain": "https://example.org",
    "source_directory": "data",
    "latest_published_year": 2023,
    "files": [
        {"name": "casualty-small.csv", "table": "casualty", "years": [2023]}
    ],
    "dtypes": {
        "casualty": {
            "accident_index": "str",
            "sex_of_casualty": "int",
            "age_of_casualty": "int",
            "date": "str",
            "time": "str",
            "longitude": "float",
            "latitude": "float"
        }
    },
    "code_labels": {
        "casualty": {
            "sex_of_casualty": {"1": "Male", "2": "Female"}
        }
    }
}"#;

const CSV: &str = "\
accident_index,sex_of_casualty,age_of_casualty,date,time,longitude,latitude
0123,1,34,15/06/2021,08:30,-0.1281,51.5080
0456,9,51,01/01/2022,23:45,,52.0
";

fn schema() -> SchemaIndex {
    SchemaIndex::from_json_str(SCHEMA, Path::new("<test>")).expect("test schema")
}

/// Downloader stub that counts calls and serves a canned payload.
struct CountingFetcher {
    calls: AtomicUsize,
    payload: Option<&'static str>,
}

impl CountingFetcher {
    fn serving(payload: &'static str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            payload: Some(payload),
        }
    }

    fn not_found() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            payload: None,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Downloader for CountingFetcher {
    fn pull(&self, filename: &str, dest_dir: &Path) -> Result<PathBuf, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let Some(payload) = self.payload else {
            return Err(FetchError::NotFound {
                url: format!("https://example.org/data/{filename}"),
            });
        };
        std::fs::create_dir_all(dest_dir).expect("create dest dir");
        let dest = dest_dir.join(filename);
        std::fs::write(&dest, payload).expect("write payload");
        Ok(dest)
    }
}

#[test]
fn missing_file_without_auto_download_touches_no_network() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loader = Stats19::with_parts(
        schema(),
        Config::with_data_dir(dir.path()),
        CountingFetcher::serving(CSV),
    );

    let err = loader
        .load("casualty-small.csv", &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::NotFoundLocally { .. }));
    assert_eq!(loader_fetch_count(&loader), 0);
}

#[test]
fn auto_download_fetches_once_then_reuses_the_local_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loader = Stats19::with_parts(
        schema(),
        Config::with_data_dir(dir.path()),
        CountingFetcher::serving(CSV),
    );
    let options = LoadOptions::default().with_auto_download(true);

    let table = loader.load("casualty-small.csv", &options).expect("load");
    assert_eq!(table.record_count(), 2);
    assert_eq!(loader_fetch_count(&loader), 1);

    let table = loader.load("casualty-small.csv", &options).expect("reload");
    assert_eq!(table.record_count(), 2);
    assert_eq!(loader_fetch_count(&loader), 1);
}

#[test]
fn remote_404_becomes_the_unknown_filename_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loader = Stats19::with_parts(
        schema(),
        Config::with_data_dir(dir.path()),
        CountingFetcher::not_found(),
    );
    let options = LoadOptions::default().with_auto_download(true);

    let err = loader.load("casualty-small.csv", &options).unwrap_err();
    match err {
        Error::UnknownFilename { filename } => assert_eq!(filename, "casualty-small.csv"),
        other => panic!("expected UnknownFilename, got {other}"),
    }
    assert_eq!(loader_fetch_count(&loader), 1);
}

#[test]
fn declared_dtypes_survive_the_parse() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("casualty-small.csv"), CSV).expect("seed csv");
    let loader = Stats19::with_parts(
        schema(),
        Config::with_data_dir(dir.path()),
        CountingFetcher::serving(CSV),
    );

    let table = loader
        .load("casualty-small.csv", &LoadOptions::default())
        .expect("load");
    let df = table.frame();

    // Identifier stays text with its leading zero; codes stay integers.
    let index = df.column("accident_index").unwrap();
    assert!(index.dtype().is_string());
    assert_eq!(index.get(0).unwrap().str_value(), "0123");
    let sex = df.column("sex_of_casualty").unwrap();
    assert!(sex.dtype().is_integer());
    // The empty longitude cell parses as null, not as a text column.
    let longitude = df.column("longitude").unwrap();
    assert!(longitude.dtype().is_float());
    assert!(longitude.get(1).unwrap().is_null());
}

#[test]
fn full_formatting_pipeline_produces_a_geo_frame() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("casualty-small.csv"), CSV).expect("seed csv");
    let loader = Stats19::with_parts(
        schema(),
        Config::with_data_dir(dir.path()),
        CountingFetcher::serving(CSV),
    );
    let options = LoadOptions::default()
        .with_code_labels(true)
        .with_temporal_info(true)
        .with_geo_info(true);

    let table = loader.load("casualty-small.csv", &options).expect("load");
    let geo = table.as_geo().expect("geo frame");

    // The second row has no longitude and is dropped.
    assert_eq!(geo.record_count(), 1);
    assert_eq!(geo.crs(), "EPSG:27700");
    let easting = geo.geometry()[0].x();
    assert!((450_000.0..650_000.0).contains(&easting), "easting {easting}");

    let df = geo.data();
    assert_eq!(
        df.column("sex_of_casualty").unwrap().get(0).unwrap().str_value(),
        "Male"
    );
    assert_eq!(df.column("season").unwrap().get(0).unwrap().str_value(), "summer");
    assert_eq!(
        df.column("daytime").unwrap().get(0).unwrap().str_value(),
        "morning rush (7-10)"
    );
}

#[test]
fn unregistered_files_still_load_with_normalized_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("extract.csv"),
        "Accident Index,1st Road Class\nA1,3\n",
    )
    .expect("seed csv");
    let loader = Stats19::with_parts(
        schema(),
        Config::with_data_dir(dir.path()),
        CountingFetcher::serving(CSV),
    );
    let options = LoadOptions::default().with_code_labels(true);

    let table = loader.load("extract.csv", &options).expect("load");
    let names: Vec<String> = table
        .frame()
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["accident_index", "first_road_class"]);
}

fn loader_fetch_count(loader: &Stats19<CountingFetcher>) -> usize {
    loader_fetcher(loader).call_count()
}

fn loader_fetcher<'a>(loader: &'a Stats19<CountingFetcher>) -> &'a CountingFetcher {
    loader.fetcher()
}
