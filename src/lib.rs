//! `frame-stats` is a small record-oriented dataframe library: load delimited text or JSON into an
//! in-memory [`types::Frame`], reshape it, and compute descriptive and grouped statistics.
//!
//! The primary read entrypoint is [`ingestion::read_from_path`], which picks a reader from the
//! file extension (or you can force one via [`ingestion::ReadOptions`]).
//!
//! ## Data model
//!
//! - A [`types::Frame`] is an ordered `Vec` of [`types::Record`]s.
//! - A [`types::Record`] is an ordered list of `(column, Value)` pairs.
//! - A [`types::Series`] is one column pulled out of a frame with [`processing::column()`].
//!
//! Readers keep every delimited-text cell as [`types::Value::Utf8`]; convert numeric columns
//! explicitly with [`processing::parse_numeric()`]. Statistics only count `Int64` and finite
//! `Float64` values, and return `NaN` instead of failing on empty input.
//!
//! ## Quick example
//!
//! ```rust
//! use frame_stats::ingestion::csv::read_csv_from_str;
//! use frame_stats::processing::{column, gb_mean, group_by_column, mean, parse_numeric};
//! use frame_stats::types::Value;
//!
//! # fn main() -> Result<(), frame_stats::FrameError> {
//! let raw = read_csv_from_str("label,value\nA,7\nA,3\nB,2\nB,5\nC,75\n", b',')?;
//! let df = parse_numeric(&raw, &["value"]);
//!
//! assert_eq!(mean(&column(&df, "value")), 18.4);
//!
//! let means = gb_mean("value", &group_by_column(&df, "label"));
//! assert_eq!(means.rows[0].get("group"), Some(&Value::from("A")));
//! assert_eq!(means.rows[0].get("mean"), Some(&Value::Float64(5.0)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV/TSV/JSON readers, unified entrypoint, read observers
//! - [`types`]: `Value`, `Record`, `Frame`
//! - [`processing`]: row and column utilities, statistics, windows, grouping, merge
//! - [`export`]: CSV and JSON writers
//! - [`display`]: text-table rendering
//! - [`error`]: the crate error type

pub mod display;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{FrameError, FrameResult};
