//! Progress logging utilities.

use log::info;

/// Logs the per-pair progress line before resolution starts.
///
/// # Arguments
///
/// * `index` - 1-based position of the pair in the input file
/// * `total` - Total number of input pairs
/// * `destination_host` - Host the pair is expected to land on
pub fn log_pair_progress(index: usize, total: usize, destination_host: &str) {
    info!(
        "{:>4}/{}. Testing redirection for: {}",
        index, total, destination_host
    );
}

/// Logs the end-of-run summary line.
pub fn log_run_summary(total: usize, successes: usize, failures: usize, elapsed_seconds: f64) {
    info!(
        "Processed {} pair{} ({} succeeded, {} did not) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        successes,
        failures,
        elapsed_seconds
    );
}
