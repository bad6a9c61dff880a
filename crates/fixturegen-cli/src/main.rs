mod logging;
mod report;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fixturegen_core::FixtureKind;
use fixturegen_generate::{FixtureEngine, GenerateOptions, GenerationError};
use logging::init_logging;
use report::write_json_atomic;
use settings::{SettingsError, load_settings};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "fixturegen", version, about = "Synthetic test-fixture generator")]
struct Cli {
    /// TOML settings file (defaults to ./fixturegen.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Directory fixtures are written to.
    #[arg(long, global = true, value_name = "DIR")]
    out_dir: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Write the run reports as JSON.
    #[arg(long, global = true, value_name = "PATH")]
    report: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Random nested JSON document.
    Json(NestedArgs),
    /// JSON array of fixed-schema objects.
    JsonArray(CountArgs),
    /// Newline-delimited JSON records.
    Ndjson(CountArgs),
    /// CSV rows with a header.
    Csv(CsvArgs),
    /// Every fixture, written into --out-dir.
    All,
}

#[derive(Args, Debug)]
struct NestedArgs {
    /// Maximum nesting depth (>= 1).
    #[arg(long)]
    max_depth: Option<usize>,
    /// Number of top-level keys.
    #[arg(long)]
    num_keys: Option<usize>,
    /// Output file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CountArgs {
    /// Number of records.
    #[arg(long)]
    count: Option<usize>,
    /// Output file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CsvArgs {
    /// Number of data rows.
    #[arg(long)]
    rows: Option<usize>,
    /// Output file.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut options = load_settings(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        options.seed = Some(seed);
    }
    if let Some(out_dir) = cli.out_dir {
        options.out_dir = out_dir;
    }
    let kind = apply_command(&mut options, cli.command);

    tracing::info!(event = "run_started", command = kind.map_or("all", FixtureKind::id));

    let engine = FixtureEngine::new(options);
    let reports = match kind {
        Some(kind) => vec![engine.run(kind)?],
        None => engine.run_all()?,
    };

    for report in &reports {
        println!(
            "{} file generated: {}",
            report.kind.label(),
            report.path.display()
        );
    }

    if let Some(path) = cli.report {
        write_json_atomic(&path, &reports)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    tracing::info!(event = "run_finished", fixtures = reports.len());
    Ok(())
}

/// Fold subcommand flags into `options`; `None` means every fixture.
fn apply_command(options: &mut GenerateOptions, command: Command) -> Option<FixtureKind> {
    match command {
        Command::Json(args) => {
            if let Some(max_depth) = args.max_depth {
                options.nested.max_depth = max_depth;
            }
            if let Some(num_keys) = args.num_keys {
                options.nested.num_keys = num_keys;
            }
            options.nested.out = args.out.or(options.nested.out.take());
            Some(FixtureKind::NestedJson)
        }
        Command::JsonArray(args) => {
            if let Some(count) = args.count {
                options.array.count = count;
            }
            options.array.out = args.out.or(options.array.out.take());
            Some(FixtureKind::JsonArray)
        }
        Command::Ndjson(args) => {
            if let Some(count) = args.count {
                options.ndjson.count = count;
            }
            options.ndjson.out = args.out.or(options.ndjson.out.take());
            Some(FixtureKind::Ndjson)
        }
        Command::Csv(args) => {
            if let Some(rows) = args.rows {
                options.csv.rows = rows;
            }
            options.csv.out = args.out.or(options.csv.out.take());
            Some(FixtureKind::Csv)
        }
        Command::All => None,
    }
}
