//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_validator` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//! - Opening the finished report in the default viewer
//!
//! All core functionality is implemented in the library crate. Internal
//! errors are reported to the operator but do not fail the process: the
//! completion message is always the last line.

use std::path::Path;

use clap::Parser;

use redirect_validator::initialization::init_logger_with;
use redirect_validator::{run_validation, Config};

#[tokio::main]
async fn main() {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    if let Err(e) = init_logger_with(config.log_level.into(), config.log_format) {
        eprintln!("Failed to initialize logger: {e}");
    }

    println!("--------------------------\nUrl Redirection Validator\n--------------------------\n");

    let open_report = config.open_report == 1;

    match run_validation(config).await {
        Ok(report) => {
            println!(
                "\nProcessed {} pair{} ({} succeeded, {} did not) in {:.1}s",
                report.total_pairs,
                if report.total_pairs == 1 { "" } else { "s" },
                report.successes,
                report.failures,
                report.elapsed_seconds
            );
            println!("Results are saved to {}", report.report_path.display());
            if open_report {
                open_in_viewer(&report.report_path);
            }
        }
        Err(e) => {
            eprintln!("\nredirect_validator error: {e:#}");
        }
    }

    println!("Processing complete.");
}

/// Opens the report with the platform's default handler (typically a
/// spreadsheet application for .csv). Failure to open is not fatal.
fn open_in_viewer(path: &Path) {
    println!("Opening report: {}", path.display());

    #[cfg(target_os = "windows")]
    let spawned = std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn();

    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(path).spawn();

    #[cfg(all(unix, not(target_os = "macos")))]
    let spawned = std::process::Command::new("xdg-open").arg(path).spawn();

    if let Err(e) = spawned {
        println!("Failed to open report: {e}");
    }
}
