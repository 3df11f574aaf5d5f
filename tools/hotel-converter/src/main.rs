//! CLI tool for converting hotel CSV files to JSON and XML.
//!
//! # Usage
//!
//! ```bash
//! # Convert share/files/hotels.csv into share/results/
//! hotel-converter --file hotels.csv
//!
//! # Sort hotels by stars, best first
//! hotel-converter --file hotels.csv --sort descend
//!
//! # Custom directories, verbose logging
//! RUST_LOG=debug hotel-converter -f hotels.csv --files-dir data --results-dir out
//! ```
//!
//! Each run writes `<unix-seconds>-<name>.json` and `<unix-seconds>-<name>.xml`,
//! plus `<unix-seconds>-<name>-invalid.csv` when some rows were rejected.

use std::{
    fs::{self, File},
    io::{IsTerminal, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hotel_data::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Convert hotel records from CSV to JSON and XML.
///
/// Rows that fail validation are written to a separate CSV file
/// together with the original header row.
#[derive(Parser, Debug)]
#[command(name = "hotel-converter")]
#[command(version, about)]
struct Args {
    /// Input CSV file, relative to --files-dir unless absolute.
    #[arg(short, long)]
    file: PathBuf,

    /// Sort hotels by stars.
    #[arg(short, long, value_enum, ignore_case = true)]
    sort: Option<SortArg>,

    /// Directory holding input files.
    #[arg(long, default_value = "share/files")]
    files_dir: PathBuf,

    /// Directory for conversion results, created if missing.
    #[arg(long, default_value = "share/results")]
    results_dir: PathBuf,
}

/// Sort directions accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// Fewest stars first.
    Ascend,
    /// Most stars first.
    Descend,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Ascend => SortOrder::Ascending,
            SortArg::Descend => SortOrder::Descending,
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
struct AppConfig {
    input: PathBuf,
    results_dir: PathBuf,
    /// Unix seconds used as the output file name prefix.
    created_at: i64,
    convert: ConvertConfig,
}

impl AppConfig {
    fn new(args: Args, created_at: i64) -> Self {
        // `join` keeps an absolute `file` as is.
        let input = args.files_dir.join(&args.file);

        Self {
            input,
            results_dir: args.results_dir,
            created_at,
            convert: ConvertConfig { sort: args.sort.map(SortOrder::from) },
        }
    }

    /// Input file name without its last extension.
    fn stem(&self) -> String {
        self.input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
    }

    fn output_path(&self, format: Format) -> PathBuf {
        self.results_dir.join(format!("{}-{}.{}", self.created_at, self.stem(), format.extension()))
    }

    fn rejected_path(&self) -> PathBuf {
        self.results_dir.join(format!("{}-{}-invalid.csv", self.created_at, self.stem()))
    }
}

/// What a finished run produced.
#[derive(Debug)]
struct Report {
    hotels: usize,
    rejected: usize,
    files: Vec<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::new(args, jiff::Timestamp::now().as_second());

    info!(input = %config.input.display(), "Starting data conversion");

    let report = convert_file(&config)?;

    for file in &report.files {
        info!(path = %file.display(), "Written");
    }

    // Report result to stderr (so it doesn't interfere with stdout output)
    eprintln!("Converted {} hotel(s), rejected {} row(s)", report.hotels, report.rejected);

    Ok(())
}

/// Runs a full conversion of the configured input file.
fn convert_file(config: &AppConfig) -> Result<Report> {
    let file = File::open(&config.input)
        .with_context(|| format!("Failed to open input file: {}", config.input.display()))?;

    let output = convert(file, config.convert)?;
    let files = write_outputs(&output, config)?;

    Ok(Report { hotels: output.hotels.len(), rejected: output.rejected_count(), files })
}

/// Reads CSV rows from input and converts them in memory.
fn convert<R: Read>(input: R, config: ConvertConfig) -> Result<ConversionOutput> {
    let rows = RecordReader::new(input).read_all().context("Failed to read CSV records")?;

    Converter::new(config).convert(&rows).context("Failed to convert hotel records")
}

/// Writes every encoding, and the rejected rows if any, into the results directory.
fn write_outputs(output: &ConversionOutput, config: &AppConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.results_dir).with_context(|| {
        format!("Failed to create results directory: {}", config.results_dir.display())
    })?;

    let mut files = Vec::with_capacity(Format::ALL.len() + 1);

    for format in Format::ALL {
        let path = config.output_path(format);
        info!(%format, "Writing file");
        fs::write(&path, output.encoded(format))
            .with_context(|| format!("Failed to write {format} file: {}", path.display()))?;
        files.push(path);
    }

    if let Some((header, rows)) = output.rejected.as_deref().and_then(<[RawRow]>::split_first) {
        let path = config.rejected_path();
        info!(count = rows.len(), "Writing invalid records");
        write_rejected(&path, header, rows)?;
        files.push(path);
    }

    Ok(files)
}

fn write_rejected(path: &Path, header: &RawRow, rows: &[RawRow]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create invalid records file: {}", path.display()))?;

    let mut writer = RejectedWriter::new(file);
    writer.write_header(header).context("Failed to write CSV header")?;
    writer.write_all(rows).context("Failed to write invalid records")?;
    writer.flush().context("Failed to flush invalid records")?;

    Ok(())
}
