//! CLI entry point for the catalog preprocessing pipeline.

use anyhow::{Context, Result};
use catalog_processing::{Pipeline, PipelineConfig, PipelineStage, RunReport};
use chrono::Local;
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info};

/// CLI-compatible stage enum for resuming a run
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliStage {
    /// Start from the raw dump (full run)
    Project,
    /// Start from the projected file
    Normalize,
    /// Start from the normalized file
    Shuffle,
    /// Start from the shuffled file
    Nulls,
    /// Start from the null-canonicalized file
    Partition,
    /// Only rewrite the preview sample
    Sample,
}

impl From<CliStage> for PipelineStage {
    fn from(cli: CliStage) -> Self {
        match cli {
            CliStage::Project => PipelineStage::Projecting,
            CliStage::Normalize => PipelineStage::Normalizing,
            CliStage::Shuffle => PipelineStage::Shuffling,
            CliStage::Nulls => PipelineStage::CanonicalizingNulls,
            CliStage::Partition => PipelineStage::Partitioning,
            CliStage::Sample => PipelineStage::Sampling,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Food catalog preprocessing pipeline",
    long_about = "Cleans a line-delimited JSON catalog dump into train/test/valid files.\n\n\
                  The raw dump is read from <ROOT_DIR>/data/<DATASET_ID>_openfoodfacts_00.jsonl;\n\
                  every stage writes its own file next to it and a run log goes to <ROOT_DIR>/logs/.\n\n\
                  EXAMPLES:\n  \
                  # Full run\n  \
                  catalog-processing 10000 2024 /srv/catalog\n\n  \
                  # Reproducible shuffle and sample\n  \
                  catalog-processing 10000 2024 /srv/catalog --seed 42\n\n  \
                  # Redo the split from the existing null-canonicalized file\n  \
                  catalog-processing 10000 2024 /srv/catalog --from partition"
)]
struct Args {
    /// Records buffered per batch in every stage
    batch_size: usize,

    /// Identifier used to namespace every file name
    dataset_id: String,

    /// Directory holding the data/ and logs/ subdirectories
    root_dir: PathBuf,

    /// Seed for the shuffle and sample steps (OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of lines in the preview sample
    #[arg(long, default_value = "60")]
    sample_size: usize,

    /// Minimum share of records a joined country list needs to be kept
    #[arg(long, default_value = "0.001")]
    rare_country_threshold: f64,

    /// Stage to resume from; earlier outputs must already exist
    #[arg(long, value_enum, default_value = "project")]
    from: CliStage,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Initialize the tracing subscriber for logging.
///
/// Events go to stdout and to a run-scoped file under `logs_dir`, whose path
/// is returned.
fn init_logging(level: &str, logs_dir: &Path) -> Result<PathBuf> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Creating log directory {}", logs_dir.display()))?;
    let log_path = logs_dir.join(format!(
        "01_preprocessing_{}_logs.txt",
        Local::now().format("%d%m%Y%H%M%S%3f")
    ));
    let log_file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Opening run log {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(log_path)
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load environment variables from .env file (RUST_LOG)
    dotenv().ok();

    let mut config_builder = PipelineConfig::builder()
        .batch_size(args.batch_size)
        .dataset_id(&args.dataset_id)
        .root_dir(&args.root_dir)
        .sample_size(args.sample_size)
        .rare_country_threshold(args.rare_country_threshold)
        .start_stage(args.from.into());

    if let Some(seed) = args.seed {
        config_builder = config_builder.seed(seed);
    }

    let config = config_builder.build().context("Invalid arguments")?;

    let log_path = init_logging(&args.log_level, &config.paths().logs_dir)?;
    info!("Run log: {}", log_path.display());

    let pipeline = Pipeline::builder().config(config).build()?;
    match pipeline.run() {
        Ok(report) => {
            log_summary(&report);
            Ok(())
        }
        Err(e) => {
            error!("Preprocessing aborted: {}", e);
            Err(e.into())
        }
    }
}

fn log_summary(report: &RunReport) {
    if let Some(projected) = report.projected {
        info!("Projected records: {}", projected);
    }
    if let Some(normalized) = &report.normalized {
        info!(
            "Normalized records: {} kept of {}",
            normalized.records_out, normalized.records_in
        );
    }
    if let Some(shuffled) = report.shuffled {
        info!("Shuffled lines: {}", shuffled);
    }
    if let Some(nulls) = &report.nulls {
        info!("Null markers replaced: {}", nulls.replacements);
    }
    if let Some(partition) = &report.partition {
        info!(
            "Partitioned: train {}, test {}, valid {}, unassigned {}, skipped {}",
            partition.ok_written.train + partition.ko_written.train,
            partition.ok_written.test + partition.ko_written.test,
            partition.ok_written.valid + partition.ko_written.valid,
            partition.unassigned(),
            partition.skipped_lines
        );
    }
    if let Some(sampled) = report.sampled {
        info!("Sample lines: {}", sampled);
    }
    info!("Finished in {:.2?}", report.duration);
}
