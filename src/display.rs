//! Plain-text table rendering for [`Frame`].

use std::fmt;

use crate::types::{Frame, Value};

/// Rows shown by the [`fmt::Display`] impl before the table is cut off.
pub const DEFAULT_MAX_ROWS: usize = 20;

const MAX_CELL_WIDTH: usize = 30;

/// Render the first `max_rows` rows of `frame` as a boxed text table.
///
/// Columns are the union of every row's columns. Cells longer than 30 characters are cut and
/// suffixed with `...`; a row absent a column shows an empty cell. The last line is
/// `[N rows x M columns]`.
pub fn render_table(frame: &Frame, max_rows: usize) -> String {
    let columns = frame.columns();
    let shown = frame.row_count().min(max_rows);

    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| c.chars().count().min(MAX_CELL_WIDTH))
        .collect();
    let cells: Vec<Vec<String>> = frame.rows[..shown]
        .iter()
        .map(|row| {
            columns
                .iter()
                .zip(widths.iter_mut())
                .map(|(name, width)| {
                    let cell = truncate(&render_cell(row.get(name)));
                    *width = (*width).max(cell.chars().count());
                    cell
                })
                .collect()
        })
        .collect();

    let sep: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .collect::<String>()
        + "+";
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    let header: Vec<String> = columns.iter().map(|c| truncate(c)).collect();
    out.push_str(&table_line(header.iter().map(String::as_str), &widths));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        out.push_str(&table_line(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    if frame.row_count() > shown {
        out.push_str(&table_line(std::iter::repeat_n("...", widths.len()), &widths));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!(
        "[{} rows x {} columns]",
        frame.row_count(),
        columns.len()
    ));
    out
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(s, &w)| format!("| {s:w$} "))
        .collect::<String>()
        + "|"
}

fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Missing) => String::new(),
        Some(v) => v.to_string(),
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() > MAX_CELL_WIDTH {
        let head: String = s.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_table(self, DEFAULT_MAX_ROWS))
    }
}
