//! Subcommand implementations.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use tracing::info;

use stats19_core::{
    Config, GeoOptions, LoadOptions, LoadedTable, Stats19, YearCoverage,
};

use crate::cli::{FilesArgs, LoadArgs, PullArgs};

pub fn run_files(args: &FilesArgs) -> Result<()> {
    let loader = Stats19::new().context("initialize")?;
    let files = loader.list_files(args.year, args.table.as_deref());
    let schema = loader.schema();
    let latest = schema.latest_published_year();

    let mut table = Table::new();
    table.set_header(vec!["Filename", "Table", "Years"]);
    apply_table_style(&mut table);
    for name in &files {
        let kind = schema
            .table_of(name)
            .map(|k| k.to_string())
            .unwrap_or_default();
        let years = schema
            .years_of(name)
            .map(|coverage| coverage_display(coverage, latest))
            .unwrap_or_default();
        table.add_row(vec![name.clone(), kind, years]);
    }
    println!("{table}");
    info!(files = files.len(), "listed");
    Ok(())
}

pub fn run_pull(args: &PullArgs) -> Result<()> {
    let loader = build_loader(args.data_dir.as_deref())?;
    let dest = loader
        .pull(&args.filename)
        .with_context(|| format!("pull {}", args.filename))?;
    println!("{}", dest.display());
    Ok(())
}

pub fn run_load(args: &LoadArgs) -> Result<()> {
    let loader = build_loader(args.data_dir.as_deref())?;
    let options = LoadOptions::default()
        .with_auto_download(args.download)
        .with_code_labels(args.labels)
        .with_temporal_info(args.temporal)
        .with_geo_info(args.geo)
        .with_geo(GeoOptions::default());

    let table = loader
        .load(&args.filename, &options)
        .with_context(|| format!("load {}", args.filename))?;

    match &table {
        LoadedTable::Frame(df) => {
            println!("{} rows x {} columns", df.height(), df.width());
            println!("{}", df.head(Some(args.head)));
        }
        LoadedTable::Geo(geo) => {
            println!(
                "{} rows x {} columns ({})",
                geo.record_count(),
                geo.data().width(),
                geo.crs()
            );
            println!("{}", geo.data().head(Some(args.head)));
        }
    }
    Ok(())
}

fn build_loader(data_dir: Option<&std::path::Path>) -> Result<Stats19> {
    let mut loader = Stats19::new().context("initialize")?;
    if let Some(dir) = data_dir {
        loader = loader.with_config(Config::with_data_dir(dir));
    }
    Ok(loader)
}

fn coverage_display(coverage: &YearCoverage, latest: i32) -> String {
    match coverage {
        YearCoverage::Years(years) => years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        YearCoverage::Range { from, to } => match to {
            Some(to) => format!("{from}-{to}"),
            None => format!("{from}-{latest}"),
        },
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
