//! redirect_validator library: redirect chain validation functionality
//!
//! This library validates that a list of redirection URLs (short links,
//! marketing links) eventually resolve to their expected destination domain.
//! For each input pair it records the observed redirect chain, the final
//! URL and status code, and a terminal verdict, then writes one row per
//! pair to a CSV report.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use redirect_validator::{run_validation, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["redirect_validator", "url_list.csv"]);
//! let report = run_validation(config).await?;
//! println!("Processed {} pairs", report.total_pairs);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod navigator;
pub mod report;
pub mod resolver;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use resolver::{ResolutionResult, ResolutionStatus, ResolverPolicy};
pub use run::{run_validation, ValidationReport};

// Internal run module (contains the driver loop)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::debug;

    use crate::app::{destination_host, log_pair_progress, log_run_summary};
    use crate::config::Config;
    use crate::error_handling::OutcomeStats;
    use crate::input::read_input_file;
    use crate::navigator::{HttpNavigatorFactory, NavigatorSlot};
    use crate::report::ReportWriter;
    use crate::resolver::{resolve_pair, ResolutionStatus, ResolverPolicy};

    /// Results of a validation run.
    ///
    /// Contains summary statistics about the completed run.
    #[derive(Debug, Clone)]
    pub struct ValidationReport {
        /// Total number of input pairs processed
        pub total_pairs: usize,
        /// Number of pairs whose chain terminated on the destination host
        pub successes: usize,
        /// Number of pairs with any other outcome
        pub failures: usize,
        /// Path to the CSV report
        pub report_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs redirect validation with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads input pairs
    /// from the configured file, resolves them strictly sequentially against
    /// a single navigator, and writes one report row per pair.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run (input path, report path, flags)
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file is missing or malformed
    /// - The report file cannot be created or written
    /// - The navigator cannot be (re)created
    ///
    /// Per-pair outcomes (timeouts, hop-limit skips, exhausted retries)
    /// are never errors; they are rows in the report.
    pub async fn run_validation(config: Config) -> Result<ValidationReport> {
        let start_time = std::time::Instant::now();

        let pairs = read_input_file(&config.input).context("Failed to read input file")?;
        let total = pairs.len();

        let mut report_writer =
            ReportWriter::create(&config.output).context("Failed to create report file")?;

        let factory = HttpNavigatorFactory::new(config.show_browser == 1)
            .context("Failed to initialize HTTP client")?;
        let mut slot = NavigatorSlot::new(factory)
            .await
            .context("Failed to create navigator")?;

        let policy = ResolverPolicy::default();
        let stats = OutcomeStats::new();

        for (i, pair) in pairs.iter().enumerate() {
            let index = i + 1;
            let shown_host = destination_host(&pair.destination_url)
                .unwrap_or_else(|| pair.destination_url.clone());
            log_pair_progress(index, total, &shown_host);

            // A navigator must be live before each pair; a recreation failure
            // here is unrecoverable for the run
            slot.ensure()
                .await
                .map(|_| ())
                .context("Navigator could not be recreated")?;

            let result = resolve_pair(pair, index, &mut slot, &policy).await;
            debug!("Pair {index} finished: {}", result.status);
            stats.record(result.status);
            report_writer
                .write_result(&result)
                .context("Failed to write report row")?;
        }

        slot.shutdown().await;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        let successes = stats.count(ResolutionStatus::Success);
        let failures = total - successes;
        log_run_summary(total, successes, failures, elapsed_seconds);
        stats.log_summary();

        Ok(ValidationReport {
            total_pairs: total,
            successes,
            failures,
            report_path: report_writer.path().to_path_buf(),
            elapsed_seconds,
        })
    }
}
