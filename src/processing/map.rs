//! Column extraction, selection and derivation for [`crate::types::Frame`].
//!
//! All functions return a new frame; the input is never modified.

use chrono::NaiveDate;

use crate::error::{FrameError, FrameResult};
use crate::types::{Frame, Record, Series, Value};

/// Extract `name` as a [`Series`], one value per row.
///
/// Rows lacking the column contribute [`Value::Missing`].
pub fn column(frame: &Frame, name: &str) -> Series {
    frame
        .rows
        .iter()
        .map(|row| row.get(name).cloned().unwrap_or(Value::Missing))
        .collect()
}

/// Keep only the listed columns, in the order given.
///
/// A listed column absent from a row is left out of that row rather than filled.
pub fn select(frame: &Frame, columns: &[&str]) -> Frame {
    frame.map_rows(|row| {
        columns
            .iter()
            .filter_map(|&name| row.get(name).map(|v| (name, v.clone())))
            .collect()
    })
}

/// Remove the listed columns from every row.
pub fn drop_columns(frame: &Frame, columns: &[&str]) -> Frame {
    frame.map_rows(|row| {
        row.iter()
            .filter(|(name, _)| !columns.contains(name))
            .map(|(name, v)| (name, v.clone()))
            .collect()
    })
}

/// Rename column `from` to `to` in every row, keeping its position.
pub fn rename_column(frame: &Frame, from: &str, to: &str) -> Frame {
    frame.map_rows(|row| {
        row.iter()
            .map(|(name, v)| (if name == from { to } else { name }, v.clone()))
            .collect()
    })
}

/// Add (or overwrite) column `name` with `values`, pairing them with rows by position.
///
/// # Errors
///
/// Returns [`FrameError::LengthMismatch`] if `values.len()` differs from the row count.
pub fn add_column(frame: &Frame, name: &str, values: Vec<Value>) -> FrameResult<Frame> {
    if values.len() != frame.row_count() {
        return Err(FrameError::LengthMismatch {
            operation: "add_column",
            expected: frame.row_count(),
            actual: values.len(),
        });
    }

    Ok(frame
        .rows
        .iter()
        .zip(values)
        .map(|(row, v)| {
            let mut out = row.clone();
            out.insert(name, v);
            out
        })
        .collect())
}

/// Add (or overwrite) column `name` with the value `derive` computes from each row.
pub fn derive_column<F>(frame: &Frame, name: &str, mut derive: F) -> Frame
where
    F: FnMut(&Record) -> Value,
{
    frame.map_rows(|row| {
        let mut out = row.clone();
        out.insert(name, derive(row));
        out
    })
}

/// Parse string cells in `columns` as numbers.
///
/// Integer-looking strings become `Int64`, other numeric strings `Float64`, and anything
/// unparseable becomes `Float64(NaN)`. Cells that are not strings are left as they are.
pub fn parse_numeric(frame: &Frame, columns: &[&str]) -> Frame {
    frame.map_rows(|row| {
        let mut out = row.clone();
        for &name in columns {
            if let Some(Value::Utf8(raw)) = row.get(name) {
                out.insert(name, parse_number(raw).unwrap_or(Value::Float64(f64::NAN)));
            }
        }
        out
    })
}

/// Like [`parse_numeric`], but an unparseable cell is an error.
///
/// # Errors
///
/// Returns [`FrameError::ParseError`] naming the first offending row (1-based) and column.
pub fn parse_numeric_strict(frame: &Frame, columns: &[&str]) -> FrameResult<Frame> {
    let mut rows = Vec::with_capacity(frame.row_count());
    for (idx0, row) in frame.rows.iter().enumerate() {
        let mut out = row.clone();
        for &name in columns {
            if let Some(Value::Utf8(raw)) = row.get(name) {
                let parsed = parse_number(raw).ok_or_else(|| FrameError::ParseError {
                    row: idx0 + 1,
                    column: name.to_owned(),
                    raw: raw.clone(),
                    message: "expected a number".to_string(),
                })?;
                out.insert(name, parsed);
            }
        }
        rows.push(out);
    }
    Ok(Frame::new(rows))
}

/// Parse string cells in `columns` as dates using a chrono `format` (e.g. `"%Y-%m-%d"`).
///
/// # Errors
///
/// Returns [`FrameError::ParseError`] for the first cell that does not match `format`.
pub fn parse_dates(frame: &Frame, columns: &[&str], format: &str) -> FrameResult<Frame> {
    let mut rows = Vec::with_capacity(frame.row_count());
    for (idx0, row) in frame.rows.iter().enumerate() {
        let mut out = row.clone();
        for &name in columns {
            if let Some(Value::Utf8(raw)) = row.get(name) {
                let date = NaiveDate::parse_from_str(raw.trim(), format).map_err(|e| {
                    FrameError::ParseError {
                        row: idx0 + 1,
                        column: name.to_owned(),
                        raw: raw.clone(),
                        message: e.to_string(),
                    }
                })?;
                out.insert(name, Value::Date(date));
            }
        }
        rows.push(out);
    }
    Ok(Frame::new(rows))
}

fn parse_number(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(Value::Int64(v));
    }
    // Rust accepts "NaN"/"inf" spellings; those are not numbers for our purposes.
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(Value::Float64(v)),
        _ => None,
    }
}
