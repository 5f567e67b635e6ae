//! Delimited-text reading.

use std::path::Path;

use crate::error::{FrameError, FrameResult};
use crate::types::{Frame, Record};

/// Read a delimited file into a [`Frame`].
///
/// Rules:
///
/// - The first line is the header; header names must be unique.
/// - Every cell is kept as an untrimmed `Value::Utf8`. Use
///   [`crate::processing::parse_numeric`] / [`crate::processing::parse_dates`] to type columns.
/// - Short rows are allowed and simply lack their trailing columns; extra cells beyond the
///   header are dropped.
pub fn read_csv_from_path(path: impl AsRef<Path>, delimiter: u8) -> FrameResult<Frame> {
    let mut rdr = reader_builder(delimiter).from_path(path)?;
    read_csv_from_reader(&mut rdr)
}

/// Read delimited text held in memory.
pub fn read_csv_from_str(input: &str, delimiter: u8) -> FrameResult<Frame> {
    let mut rdr = reader_builder(delimiter).from_reader(input.as_bytes());
    read_csv_from_reader(&mut rdr)
}

/// Read from an existing CSV reader.
///
/// The reader should have headers enabled; build it with `flexible(true)` to accept ragged rows.
pub fn read_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> FrameResult<Frame> {
    let headers = rdr.headers()?.clone();

    for (idx, name) in headers.iter().enumerate() {
        if headers.iter().take(idx).any(|h| h == name) {
            return Err(FrameError::UnsupportedFormat {
                message: format!(
                    "duplicate column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            });
        }
    }

    let mut rows: Vec<Record> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: Record = headers.iter().zip(record.iter()).collect();
        rows.push(row);
    }

    Ok(Frame::new(rows))
}

fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).delimiter(delimiter).flexible(true);
    builder
}
