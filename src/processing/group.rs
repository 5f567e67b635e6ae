//! Grouping and per-group aggregation.
//!
//! [`group_by`] partitions a frame into [`Group`]s. The `gb_*` aggregators reduce one column of
//! every group to a scalar and return a small frame with a [`GROUP_COLUMN`] column and one
//! statistic column. [`gb_describe`] merges all six into a single per-group summary table.
//!
//! ## Group identity
//!
//! A group is identified by the *rendered* form of its key value, so `Int64(1)`, `Float64(1.0)`
//! and `Utf8("1")` all land in the same group. This is intentional. The [`GroupKey`] keeps the
//! kind and the key value of the first record that opened the group, and that value is
//! what appears in the `group` column of aggregate tables.

use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::types::{Frame, Record, Value, ValueKind};

use super::merge::merge;
use super::reduce::{numeric_values, std_of};

/// Key column of every aggregate table.
pub const GROUP_COLUMN: &str = "group";

/// Suffix passed to both sides of the merges in [`gb_describe`]. Single-statistic tables never
/// collide, so this never changes a column name.
pub const DESCRIBE_SUFFIX: &str = "";

/// Identity of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupKey {
    /// Kind of the first key value seen for this group.
    pub kind: ValueKind,
    /// Rendered key; this is what grouping compares.
    pub rendered: String,
    /// First key value seen for this group.
    pub value: Value,
}

impl GroupKey {
    pub fn from_value(value: Value) -> Self {
        Self {
            kind: value.kind(),
            rendered: value.to_string(),
            value,
        }
    }
}

/// One bucket of a [`Grouping`]: the key and the records that produced it, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: GroupKey,
    pub rows: Vec<Record>,
}

impl Group {
    /// Extract `name` from this group's rows (absent cells become [`Value::Missing`]).
    pub fn column(&self, name: &str) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| row.get(name).cloned().unwrap_or(Value::Missing))
            .collect()
    }
}

/// A frame partitioned by key. Groups are kept in first-occurrence order.
///
/// Every source record is in exactly one group, unchanged.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl Grouping {
    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up a group by its rendered key.
    pub fn get(&self, rendered: &str) -> Option<&Group> {
        self.index.get(rendered).map(|&idx| &self.groups[idx])
    }

    /// Rendered keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.rendered.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    fn push(&mut self, key: Value, row: Record) {
        let rendered = key.to_string();
        match self.index.get(&rendered) {
            Some(&idx) => self.groups[idx].rows.push(row),
            None => {
                self.index.insert(rendered, self.groups.len());
                self.groups.push(Group {
                    key: GroupKey::from_value(key),
                    rows: vec![row],
                });
            }
        }
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition `frame` by the value `key_fn` returns for each record.
///
/// Records are copied into their group as-is. A panic in `key_fn` propagates.
pub fn group_by<F>(frame: &Frame, mut key_fn: F) -> Grouping
where
    F: FnMut(&Record) -> Value,
{
    let mut grouping = Grouping::default();
    for row in &frame.rows {
        let key = key_fn(row);
        grouping.push(key, row.clone());
    }
    grouping
}

/// [`group_by`] on the value of `column`; rows lacking it group under [`Value::Missing`].
pub fn group_by_column(frame: &Frame, column: &str) -> Grouping {
    group_by(frame, |row| row.get(column).cloned().unwrap_or(Value::Missing))
}

/// Per-group statistic computed by the `gb_*` aggregators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupStat {
    /// Smallest raw value (see [`gb_min`]).
    Min,
    /// Largest raw value (see [`gb_max`]).
    Max,
    /// Raw row count.
    Count,
    /// Sum of numeric values.
    Sum,
    /// Numeric sum divided by the raw row count (see [`gb_mean`]).
    Mean,
    /// Sample standard deviation of numeric values.
    Std,
}

/// Order in which [`gb_describe`] merges the statistics.
pub const DESCRIBE_ORDER: [GroupStat; 6] = [
    GroupStat::Min,
    GroupStat::Max,
    GroupStat::Count,
    GroupStat::Sum,
    GroupStat::Mean,
    GroupStat::Std,
];

impl GroupStat {
    /// Column name of the statistic in aggregate tables.
    pub fn name(self) -> &'static str {
        match self {
            GroupStat::Min => "min",
            GroupStat::Max => "max",
            GroupStat::Count => "count",
            GroupStat::Sum => "sum",
            GroupStat::Mean => "mean",
            GroupStat::Std => "std",
        }
    }

    /// Reduce `column` of one group's rows.
    pub fn reduce(self, column: &str, group: &Group) -> Value {
        let values = group.column(column);
        match self {
            GroupStat::Min => fold_extreme(&values, f64::INFINITY, Ordering::Less),
            GroupStat::Max => fold_extreme(&values, f64::NEG_INFINITY, Ordering::Greater),
            GroupStat::Count => Value::Int64(group.rows.len() as i64),
            GroupStat::Sum => Value::Float64(numeric_values(&values).iter().sum()),
            GroupStat::Mean => {
                let total: f64 = numeric_values(&values).iter().sum();
                Value::Float64(total / group.rows.len() as f64)
            }
            GroupStat::Std => Value::Float64(std_of(&numeric_values(&values))),
        }
    }
}

/// Reduce `column` within every group, producing `{group, <stat name>}` rows in group order.
pub fn gb_aggregate(column: &str, grouping: &Grouping, stat: GroupStat) -> Frame {
    grouping
        .iter()
        .map(|group| {
            let mut row = Record::with_capacity(2);
            row.insert(GROUP_COLUMN, group.key.value.clone());
            row.insert(stat.name(), stat.reduce(column, group));
            row
        })
        .collect()
}

/// Per-group sum of the numeric values in `column`.
pub fn gb_sum(column: &str, grouping: &Grouping) -> Frame {
    gb_aggregate(column, grouping, GroupStat::Sum)
}

/// Per-group mean of `column`.
///
/// The numeric sum is divided by the group's *raw* row count, not by the number of numeric
/// values. A group with non-numeric cells in `column` therefore reports a diluted mean:
/// `[4, "x"]` has mean `2`. Use [`crate::processing::mean`] on [`Group::column`] for the
/// filtered mean.
pub fn gb_mean(column: &str, grouping: &Grouping) -> Frame {
    gb_aggregate(column, grouping, GroupStat::Mean)
}

/// Per-group sample standard deviation; NaN for groups with fewer than two numeric values.
pub fn gb_std(column: &str, grouping: &Grouping) -> Frame {
    gb_aggregate(column, grouping, GroupStat::Std)
}

/// Per-group minimum over the raw values of `column`.
///
/// The fold starts at `+∞` and a value replaces the running minimum only when both compare
/// numerically and the value is strictly smaller. Strings, booleans, dates, nulls and NaN never
/// win, so a group without numeric values reports `+∞`. The winning value keeps its variant.
pub fn gb_min(column: &str, grouping: &Grouping) -> Frame {
    gb_aggregate(column, grouping, GroupStat::Min)
}

/// Per-group maximum; mirror image of [`gb_min`], seeded at `-∞`.
pub fn gb_max(column: &str, grouping: &Grouping) -> Frame {
    gb_aggregate(column, grouping, GroupStat::Max)
}

/// Per-group raw row count.
pub fn gb_count(column: &str, grouping: &Grouping) -> Frame {
    gb_aggregate(column, grouping, GroupStat::Count)
}

/// Wide per-group summary of `column`: `group, min, max, count, sum, mean, std`.
///
/// The six aggregate tables are computed in parallel on the rayon pool, then merged on
/// [`GROUP_COLUMN`] strictly in [`DESCRIBE_ORDER`].
///
/// ```rust
/// use frame_stats::processing::{gb_describe, group_by};
/// use frame_stats::record;
/// use frame_stats::types::{Frame, Value};
///
/// let df = Frame::new(vec![
///     record! { "label" => "A", "value" => 7 },
///     record! { "label" => "A", "value" => 3 },
///     record! { "label" => "C", "value" => 75 },
/// ]);
/// let grouping = group_by(&df, |r| r.get("label").cloned().unwrap_or(Value::Missing));
/// let summary = gb_describe("value", &grouping);
///
/// assert_eq!(summary.columns(), ["group", "min", "max", "count", "sum", "mean", "std"]);
/// assert_eq!(summary.rows[0].get("mean"), Some(&Value::Float64(5.0)));
/// ```
pub fn gb_describe(column: &str, grouping: &Grouping) -> Frame {
    let tables: Vec<Frame> = DESCRIBE_ORDER[..]
        .par_iter()
        .map(|&stat| gb_aggregate(column, grouping, stat))
        .collect();

    let mut tables = tables.into_iter();
    let first = tables.next().unwrap_or_default();
    tables.fold(first, |acc, next| {
        merge(
            &acc,
            &next,
            GROUP_COLUMN,
            GROUP_COLUMN,
            DESCRIBE_SUFFIX,
            DESCRIBE_SUFFIX,
        )
    })
}

/// Per-group [`gb_describe`] for several columns, keyed by column name.
pub fn gb_describe_columns(columns: &[&str], grouping: &Grouping) -> Vec<(String, Frame)> {
    columns
        .par_iter()
        .map(|&name| (name.to_owned(), gb_describe(name, grouping)))
        .collect()
}

fn fold_extreme(values: &[Value], seed: f64, wanted: Ordering) -> Value {
    values.iter().fold(Value::Float64(seed), |acc, v| {
        match (v.as_f64(), acc.as_f64()) {
            (Some(x), Some(a)) if x.partial_cmp(&a) == Some(wanted) => v.clone(),
            _ => acc,
        }
    })
}
