//! CSV rows -> typed [`RawRow`]s

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::RawRow;

/// Read the books CSV into typed rows.
///
/// An unreadable spreadsheet is fatal: the run has nothing to work with.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path)
        .map_err(|e| Error::file_parse(path.display().to_string(), e.to_string()))?;
    rows_from_reader(file)
}

/// Read rows from any CSV byte stream.
///
/// Fields are decoded lossily to UTF-8; columns are matched to the row
/// schema by exact header name. Short records are tolerated.
pub fn rows_from_reader<R: io::Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        let record = record?;
        let fields = headers
            .iter()
            .map(String::as_str)
            .zip(record.iter().map(|f| String::from_utf8_lossy(f).into_owned()));
        rows.push(RawRow::from_fields(index + 1, fields));
    }

    tracing::debug!(rows = rows.len(), "read books CSV");
    Ok(rows)
}
