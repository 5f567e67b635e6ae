//! Writing a [`Frame`] back out as delimited text or JSON.
//!
//! The header is [`Frame::columns`], so ragged frames are written with empty cells wherever a
//! row lacks a column. `Null` and `Missing` both become empty cells.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::FrameResult;
use crate::types::{Frame, Value};

/// Write `frame` as delimited text to `writer`.
///
/// Nothing is written for a frame with no columns.
pub fn write_csv<W: Write>(frame: &Frame, writer: W, delimiter: u8) -> FrameResult<()> {
    let columns = frame.columns();
    if columns.is_empty() {
        return Ok(());
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    wtr.write_record(&columns)?;
    for row in &frame.rows {
        wtr.write_record(columns.iter().map(|c| cell_text(row.get(c))))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `frame` to it.
pub fn write_csv_to_path(frame: &Frame, path: impl AsRef<Path>, delimiter: u8) -> FrameResult<()> {
    let file = File::create(path)?;
    write_csv(frame, file, delimiter)
}

/// Serialize `frame` as a JSON array of objects, keys in column order.
pub fn to_json_string(frame: &Frame) -> FrameResult<String> {
    Ok(serde_json::to_string(frame)?)
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Missing) => String::new(),
        Some(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestion::csv::read_csv_from_str;
    use crate::record;

    #[test]
    fn csv_output_uses_column_union() {
        let frame = Frame::new(vec![
            record! { "k" => "a", "v" => 1 },
            record! { "k" => "b", "w" => true },
            record! { "k" => Value::Null, "v" => 2.5 },
        ]);
        let mut buf = Vec::new();
        write_csv(&frame, &mut buf, b',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "k,v,w\na,1,\nb,,true\n,2.5,\n");
    }

    #[test]
    fn csv_output_reads_back_as_text() {
        let frame = Frame::new(vec![record! { "name" => "x;y", "n" => 3 }]);
        let mut buf = Vec::new();
        write_csv(&frame, &mut buf, b';').unwrap();
        let text = String::from_utf8(buf).unwrap();
        let back = read_csv_from_str(&text, b';').unwrap();
        assert_eq!(back.rows[0], record! { "name" => "x;y", "n" => "3" });
    }

    #[test]
    fn empty_frame_writes_nothing() {
        let mut buf = Vec::new();
        write_csv(&Frame::default(), &mut buf, b',').unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn json_keeps_column_order_and_nulls() {
        let frame = Frame::new(vec![
            record! { "z" => 1, "a" => f64::NAN, "d" => chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap() },
            record! { "z" => Value::Missing },
        ]);
        let json = to_json_string(&frame).unwrap();
        assert_eq!(json, r#"[{"z":1,"a":null,"d":"2024-02-29"},{"z":null}]"#);
    }
}
