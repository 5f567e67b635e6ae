//! In-memory frame transformations and statistics.
//!
//! Every function here is pure: it borrows its inputs and returns a newly built value.
//!
//! - [`filter()`], [`sort_by()`], [`sort_by_column()`], [`slice()`], [`head()`], [`tail()`]: row
//!   selection and ordering
//! - [`column()`], [`select()`], [`drop_columns()`], [`add_column()`], [`derive_column()`],
//!   [`parse_numeric()`], [`parse_dates()`]: column utilities
//! - [`mean()`], [`median()`], [`std()`], [`corr()`], [`describe()`], ...: series statistics
//! - [`pct_change()`], [`diff()`], [`rolling()`], [`cumulative()`]: index-aligned transforms
//! - [`group_by()`] and the `gb_*` aggregators, [`gb_describe()`]: grouped summaries
//! - [`merge()`]: left-biased key join
//!
//! ## Example: group → describe
//!
//! ```rust
//! use frame_stats::ingestion::csv::read_csv_from_str;
//! use frame_stats::processing::{gb_describe, group_by_column, parse_numeric};
//! use frame_stats::types::Value;
//!
//! let raw = read_csv_from_str("label,value\nA,7\nA,3\nB,2\nB,5\nC,75\n", b',').unwrap();
//! let df = parse_numeric(&raw, &["value"]);
//!
//! let summary = gb_describe("value", &group_by_column(&df, "label"));
//! assert_eq!(summary.row_count(), 3);
//! assert_eq!(summary.rows[1].get("sum"), Some(&Value::Float64(7.0)));
//! assert!(matches!(summary.rows[2].get("std"), Some(Value::Float64(v)) if v.is_nan()));
//! ```

pub mod filter;
pub mod group;
pub mod map;
pub mod merge;
pub mod reduce;
pub mod window;

pub use filter::{filter, head, slice, sort_by, sort_by_column, tail, SortOrder};
pub use group::{
    gb_aggregate, gb_count, gb_describe, gb_describe_columns, gb_max, gb_mean, gb_min, gb_std,
    gb_sum, group_by, group_by_column, Group, GroupKey, GroupStat, Grouping, DESCRIBE_ORDER,
    DESCRIBE_SUFFIX, GROUP_COLUMN,
};
pub use map::{
    add_column, column, derive_column, drop_columns, parse_dates, parse_numeric,
    parse_numeric_strict, rename_column, select,
};
pub use merge::merge;
pub use reduce::{
    corr, count_unique, describe, is_numeric, kurt, max, mean, median, min, numeric_values, prod,
    reduce, skew, std, sum, summarize, value_counts, ReduceOp, SeriesSummary,
};
pub use window::{cumulative, diff, pct_change, rolling, Windowed, INSUFFICIENT_WINDOW};
