//! Input file reading.
//!
//! Parses the operator's delimited URL list into `(redirection URL,
//! destination URL)` pairs. The file has no header row and exactly two
//! columns per row; row order is preserved because it defines the 1-based
//! index used throughout the report.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;

use crate::error_handling::InputError;

/// One input row: a redirection URL and the destination it should land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPair {
    /// The short/marketing URL whose redirect chain is validated.
    pub redirection_url: String,
    /// The absolute URL whose host the chain must terminate on.
    pub destination_url: String,
}

/// Reads the input file into an ordered list of [`InputPair`]s.
///
/// # Arguments
///
/// * `path` - Path to a headerless, comma-delimited file with two columns
///
/// # Errors
///
/// Returns [`InputError::FileNotFound`] if the path does not exist,
/// [`InputError::Io`] if it cannot be read, and [`InputError::Parse`] on the
/// first malformed row. Any of these aborts the run.
pub fn read_input_file(path: &Path) -> Result<Vec<InputPair>, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut pairs = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| InputError::Parse {
            row,
            message: e.to_string(),
        })?;
        if record.len() != 2 {
            return Err(InputError::Parse {
                row,
                message: format!("expected 2 columns, found {}", record.len()),
            });
        }
        pairs.push(InputPair {
            redirection_url: record[0].to_string(),
            destination_url: record[1].to_string(),
        });
    }

    info!("Total input pairs: {}", pairs.len());
    Ok(pairs)
}
