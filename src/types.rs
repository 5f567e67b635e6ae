//! Core data model types.
//!
//! A [`Frame`] is an ordered list of [`Record`]s, and a record is an ordered list of
//! `(column, Value)` pairs. Records in one frame normally share a column set, but nothing
//! enforces it: a column absent from a record simply reads as absent.
//!
//! A [`Series`] is a plain ordered `Vec<Value>`, usually produced by
//! [`crate::processing::column`].

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// An ordered sequence of values (a single column).
pub type Series = Vec<Value>;

/// A single scalar value in a [`Record`] or [`Series`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null (e.g. JSON `null`).
    Null,
    /// The column is absent in the source row.
    ///
    /// Produced by column extraction and by [`crate::processing::merge()`] when a row has no value
    /// for a column that exists elsewhere. Distinct from [`Value::Null`] and from a NaN float.
    Missing,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float. NaN is the "not a number" result of undefined statistics.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Calendar date.
    Date(NaiveDate),
}

/// Coarse classification of a [`Value`], used for equality-by-kind in grouping and counting.
///
/// Integers and floats share [`ValueKind::Number`], so `Int64(1)` and `Float64(1.0)` are the
/// same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Null,
    Missing,
    Number,
    Bool,
    Text,
    Date,
}

impl Value {
    /// Numeric view of the value. Only `Int64` and `Float64` have one; strings are never coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// String view of the value, if it is `Utf8`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Missing => ValueKind::Missing,
            Value::Int64(_) | Value::Float64(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Utf8(_) => ValueKind::Text,
            Value::Date(_) => ValueKind::Date,
        }
    }

    /// Compare two values of the same kind.
    ///
    /// Numbers compare numerically (`None` if either is NaN), strings lexicographically, booleans
    /// and dates by their natural order. Values of different kinds are incomparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Utf8(a), Value::Utf8(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Int64(a), Value::Int64(b)) => Some(a.cmp(b)),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Missing => f.write_str("missing"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int64(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

/// One row: an ordered mapping from column name to [`Value`].
///
/// Column order is insertion order. Equality is order-sensitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns the value stored under `column`, if present.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    /// Set `column` to `value`.
    ///
    /// An existing column keeps its position and the previous value is returned; a new column is
    /// appended.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((column, value));
                None
            }
        }
    }

    /// Remove `column`, returning its value if it was present.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let idx = self.fields.iter().position(|(name, _)| name == column)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Iterate column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate `(column, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Build a [`Record`] from `column => value` pairs.
///
/// ```rust
/// use frame_stats::record;
/// use frame_stats::types::Value;
///
/// let r = record! { "label" => "A", "value" => 7 };
/// assert_eq!(r.get("value"), Some(&Value::Int64(7)));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::types::Record::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::types::Record::new();
        $( record.insert($column, $value); )+
        record
    }};
}

/// In-memory dataframe: an ordered list of [`Record`]s.
///
/// Row order is meaningful and every transformation in this crate returns a new frame rather
/// than mutating its input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Row storage.
    pub rows: Vec<Record>,
}

impl Frame {
    /// Create a frame from rows.
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    /// Number of rows in the frame.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of column names across all rows, in first-occurrence order.
    pub fn columns(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for row in &self.rows {
            for name in row.columns() {
                if !out.iter().any(|c| c == name) {
                    out.push(name.to_owned());
                }
            }
        }
        out
    }

    /// Create a new frame containing only rows that match `predicate`.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        self.rows
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// Create a new frame by applying `mapper` to every row.
    pub fn map_rows<F>(&self, mapper: F) -> Self
    where
        F: FnMut(&Record) -> Record,
    {
        self.rows.iter().map(mapper).collect()
    }

    /// Reduce (fold) all rows into an accumulator value.
    pub fn reduce_rows<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &Record) -> A,
    {
        self.rows.iter().fold(init, |acc, row| reducer(acc, row))
    }

    /// Feed the frame through `f`, so free functions chain like methods.
    ///
    /// ```rust
    /// use frame_stats::processing::head;
    /// use frame_stats::record;
    /// use frame_stats::types::Frame;
    ///
    /// let df = Frame::new(vec![record! {"a" => 1}, record! {"a" => 2}]);
    /// let first = df.pipe(|f| head(&f, 1));
    /// assert_eq!(first.row_count(), 1);
    /// ```
    pub fn pipe<T, F>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }
}

impl FromIterator<Record> for Frame {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Numbers serialize as numbers (non-finite floats as `null`), dates as ISO strings, and both
/// [`Value::Null`] and [`Value::Missing`] as `null`.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null | Value::Missing => serializer.serialize_none(),
            Value::Int64(v) => serializer.serialize_i64(*v),
            Value::Float64(v) if v.is_finite() => serializer.serialize_f64(*v),
            Value::Float64(_) => serializer.serialize_none(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Utf8(s) => serializer.serialize_str(s),
            Value::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
        }
    }
}

/// Serializes as a map in column order.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Serializes as a sequence of row maps.
impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
