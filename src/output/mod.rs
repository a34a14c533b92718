//! Output module for exporting records and reporting on a run
//!
//! This module handles:
//! - Writing extracted records to CSV
//! - Summarizing crawl and extraction statistics

mod csv_export;
pub mod stats;

pub use csv_export::{CsvExporter, CSV_HEADER, EMPTY_PLACEHOLDER, JOIN_SEPARATOR};
pub use stats::{print_statistics, ScrapeStatistics};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
