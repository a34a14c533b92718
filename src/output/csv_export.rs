//! CSV export of extracted records
//!
//! One row per record under a fixed header. Multi-valued fields are joined
//! with `", "` and empty fields become `N/A`. Quoting follows RFC 4180, and the
//! output contains nothing run-specific, so the same records always produce the
//! same bytes.

use crate::extract::Record;
use crate::output::OutputResult;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column names of the export
pub const CSV_HEADER: [&str; 4] = ["Name", "Qualifications", "Specializations", "Email"];

/// Value written for an empty multi-valued field
pub const EMPTY_PLACEHOLDER: &str = "N/A";

/// Separator between values of a multi-valued field
pub const JOIN_SEPARATOR: &str = ", ";

/// Writes records as CSV
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Writes `records` to `path`, creating or truncating the file
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Successfully wrote the file
    /// * `Err(OutputError)` - The file could not be created or written
    pub fn export(&self, records: &[Record], path: &Path) -> OutputResult<()> {
        let file = File::create(path)?;
        self.write_to(records, file)
    }

    /// Writes the header and one row per record to any writer
    pub fn write_to<W: Write>(&self, records: &[Record], writer: W) -> OutputResult<()> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(writer);

        writer.write_record(CSV_HEADER)?;
        for record in records {
            writer.write_record(record_row(record))?;
        }
        writer.flush()?;

        Ok(())
    }
}

fn record_row(record: &Record) -> [String; 4] {
    [
        record.name.clone(),
        join_or_placeholder(&record.qualifications),
        join_or_placeholder(&record.specializations),
        join_or_placeholder(&record.emails),
    ]
}

fn join_or_placeholder<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let joined = values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(JOIN_SEPARATOR);

    if joined.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        joined
    }
}
