//! CLI for the README Harvester.
//!
//! This tool downloads `README.md` files from the configured GitHub
//! repositories, keeping only repositories whose license is on the
//! allow-list, and writes them to the output directory.

use clap::{Parser, ValueEnum};
use readme_harvester::{load_repo_list, RunSummary, Runner, RunnerConfig, Settings};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directory rotating log files are written to.
const LOG_DIR: &str = "logs";

/// Number of rotated log files retained.
const LOG_FILES_RETAINED: usize = 5;

/// README Harvester - Download README.md files from repositories with allow-listed licenses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repositories to process, in 'owner/repo' format.
    repos: Vec<String>,

    /// Path to a file with one 'owner/repo' entry per line.
    #[arg(long)]
    repos_file: Option<PathBuf>,

    /// Directory to save README files to. Defaults to the OUTPUT_DIR
    /// environment variable, falling back to 'output'.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Logging level.
    #[arg(long, value_enum, default_value = "INFO")]
    log_level: LogLevel,

    /// GitHub personal access token to increase API rate limits.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,
}

/// Supported logging levels.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "UPPER")]
enum LogLevel {
    Info,
    Debug,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Argument errors (including an invalid --log-level) exit here, before
    // any processing begins.
    let args = Args::parse();

    let _guard = match init_tracing(args.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::from(2);
        }
    };

    let started = Instant::now();

    // Per-repository failures are isolated inside the run and never affect
    // the exit code; only startup failures exit non-zero.
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary, started.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with console output and a rotating log file.
///
/// Sets up the global tracing subscriber with:
/// - Compact single-line console formatting
/// - A non-ANSI file layer writing to daily-rotated files under `logs/`,
///   keeping at most five files
/// - Log level filtering via the `RUST_LOG` env var, falling back to the
///   `--log-level` flag
///
/// The returned guard must be held for the lifetime of the program so the
/// non-blocking file writer flushes on shutdown.
fn init_tracing(level: LogLevel) -> Result<WorkerGuard, InitError> {
    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix("readme-harvester")
        .filename_suffix("log")
        .max_log_files(LOG_FILES_RETAINED)
        .build(LOG_DIR)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive())),
        )
        .init();

    Ok(guard)
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let settings = Settings::from_env();
    let output_dir = args.output_dir.unwrap_or(settings.output_dir);

    let mut repos = args.repos;
    if let Some(path) = &args.repos_file {
        repos.extend(load_repo_list(path)?);
    }

    let config = RunnerConfig::new(repos, output_dir, args.token);
    let runner = Runner::new(config)?;
    Ok(runner.run().await)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary, elapsed: Duration) {
    println!("\nSummary:");
    println!("  Repositories processed: {}", summary.processed);
    println!("  READMEs saved: {}", summary.saved);
    println!("  Skipped: {}", summary.skipped);
    println!("  Write failures: {}", summary.failed);
    println!("  Total time taken: {:.2} seconds", elapsed.as_secs_f64());
}
