//! CSV report writing.
//!
//! Serializes one row per [`ResolutionResult`], writing the column header
//! exactly once before the first row. Rows are flushed as they are written
//! so a mid-run crash never loses completed pairs.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::error_handling::ReportError;
use crate::resolver::ResolutionResult;

/// Report column header, in the fixed output order.
pub const REPORT_HEADER: [&str; 9] = [
    "Index",
    "RedirectionURL",
    "DestinationURL",
    "DestinationDomain",
    "FinalDomain",
    "Status",
    "StatusCode",
    "FinalUrl",
    "Redirects",
];

/// Appends one row per resolution result to a delimited report file.
pub struct ReportWriter {
    writer: Writer<File>,
    path: PathBuf,
}

impl ReportWriter {
    /// Creates (truncating) the report file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Create`] if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ReportWriter {
            writer: Writer::from_writer(file),
            path: path.to_path_buf(),
        })
    }

    /// Writes one result row, preceded by the header when this is the first
    /// input pair.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Csv`] on serialization failure or
    /// [`ReportError::Io`] if the row cannot be flushed to disk.
    pub fn write_result(&mut self, result: &ResolutionResult) -> Result<(), ReportError> {
        if result.index == 1 {
            self.writer.write_record(REPORT_HEADER)?;
        }
        self.writer.write_record([
            result.index.to_string().as_str(),
            result.redirection_url.as_str(),
            result.destination_url.as_str(),
            result.destination_domain.as_str(),
            result.final_domain.as_str(),
            result.status.to_string().as_str(),
            result.status_code.as_str(),
            result.final_url.as_str(),
            result.redirects_trace.as_str(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }

    /// Path of the report file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
