//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stats19",
    version,
    about = "Access the STATS19 road casualty open dataset",
    long_about = "Download and load the Department for Transport's STATS19\n\
                  road casualty open data: collision, casualty, vehicle and\n\
                  e-scooter tables, with optional label, temporal and\n\
                  geospatial formatting."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered data files, optionally filtered by year and table.
    Files(FilesArgs),

    /// Download a data file into the local data directory.
    Pull(PullArgs),

    /// Load a data file and print a summary.
    Load(LoadArgs),
}

#[derive(Parser)]
pub struct FilesArgs {
    /// Keep only files whose declared coverage includes this year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Keep only files of this table (accident, collision, casualty,
    /// vehicle, e_scooter).
    #[arg(long)]
    pub table: Option<String>,
}

#[derive(Parser)]
pub struct PullArgs {
    /// Filename as listed by `stats19 files`.
    pub filename: String,

    /// Data directory (defaults to STATS19_DOWNLOAD_DIRECTORY or ~/.stats19).
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Filename as listed by `stats19 files`.
    pub filename: String,

    /// Data directory (defaults to STATS19_DOWNLOAD_DIRECTORY or ~/.stats19).
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Download the file first when it is absent locally.
    #[arg(long)]
    pub download: bool,

    /// Convert categorical codes to labels.
    #[arg(long)]
    pub labels: bool,

    /// Derive temporal columns from date/time.
    #[arg(long)]
    pub temporal: bool,

    /// Build point geometry reprojected to British National Grid.
    #[arg(long)]
    pub geo: bool,

    /// Rows of the loaded table to print.
    #[arg(long, default_value_t = 10)]
    pub head: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
