//! Command implementation for the reading recap CLI
//!
//! Sets up logging, layers configuration, reads the CSV file and prints the
//! report. Errors are reported with `anyhow` context chains.

use crate::app::session::{IngestOutcome, ReadingSession};
use crate::cli::args::Args;
use crate::cli::report::generate_report;
use crate::config::RecapConfig;
use anyhow::{Context, Result, bail};
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner for the reading recap
///
/// 1. Set up logging and validate arguments
/// 2. Load configuration and apply command-line overrides
/// 3. Read and ingest the CSV file
/// 4. Apply the record filter and print the report
pub async fn run(args: Args) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Effective configuration: {:?}", config);

    info!("Reading {}", args.csv_path.display());
    let text = tokio::fs::read_to_string(&args.csv_path)
        .await
        .with_context(|| format!("Failed to read CSV file {}", args.csv_path.display()))?;

    let mut session = ReadingSession::new(config);
    let outcome = session
        .ingest(&text)
        .with_context(|| format!("Failed to load reading log {}", args.csv_path.display()))?;

    if outcome == IngestOutcome::Empty {
        bail!("No books found in {}", args.csv_path.display());
    }

    let filter = args.record_filter();
    if !filter.is_empty() {
        session.apply_filter(filter);
    }

    let report = generate_report(args.output_format, &session)?;
    println!("{}", report);

    info!(
        "Report generated in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Load the configuration file (if any), then apply command-line overrides
fn load_configuration(args: &Args) -> Result<RecapConfig> {
    let config = RecapConfig::load(args.config_file.as_deref()).with_context(|| {
        match &args.config_file {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Failed to build default configuration".to_string(),
        }
    })?;

    let config = args.apply_overrides(config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Set up structured logging to stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reading_recap={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
