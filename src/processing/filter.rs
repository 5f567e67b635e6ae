//! Row selection and ordering for [`crate::types::Frame`].

use std::cmp::Ordering;

use crate::types::{Frame, Record, Value};

/// Returns a new [`Frame`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`Frame::filter_rows`].
pub fn filter<F>(frame: &Frame, predicate: F) -> Frame
where
    F: FnMut(&Record) -> bool,
{
    frame.filter_rows(predicate)
}

/// Sort direction for [`sort_by_column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Stable sort of the rows by `compare`.
pub fn sort_by<F>(frame: &Frame, mut compare: F) -> Frame
where
    F: FnMut(&Record, &Record) -> Ordering,
{
    let mut rows = frame.rows.clone();
    rows.sort_by(|a, b| compare(a, b));
    Frame::new(rows)
}

/// Stable sort of the rows by the values in `column`.
///
/// Values are grouped by kind (numbers, then booleans, text, dates) and ordered within a kind
/// per `order`. Rows whose value is absent, null or NaN keep their relative order and sort after
/// everything else.
pub fn sort_by_column(frame: &Frame, column: &str, order: SortOrder) -> Frame {
    let mut keyed: Vec<&Record> = frame.rows.iter().collect();
    keyed.sort_by(|a, b| match (sort_key(a, column), sort_key(b, column)) {
        (Some(x), Some(y)) => {
            let ord = x
                .kind()
                .cmp(&y.kind())
                .then_with(|| x.compare(y).unwrap_or(Ordering::Equal));
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    keyed.into_iter().cloned().collect()
}

/// Rows `start..end`, clamped to the frame.
pub fn slice(frame: &Frame, start: usize, end: usize) -> Frame {
    let end = end.min(frame.row_count());
    let start = start.min(end);
    Frame::new(frame.rows[start..end].to_vec())
}

/// The first `n` rows.
pub fn head(frame: &Frame, n: usize) -> Frame {
    slice(frame, 0, n)
}

/// The last `n` rows.
pub fn tail(frame: &Frame, n: usize) -> Frame {
    let len = frame.row_count();
    slice(frame, len.saturating_sub(n), len)
}

fn sort_key<'a>(row: &'a Record, column: &str) -> Option<&'a Value> {
    row.get(column)
        .filter(|v| v.compare(v) == Some(Ordering::Equal))
}
