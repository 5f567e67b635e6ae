//! Readers that load delimited text and JSON into a [`crate::types::Frame`].
//!
//! Most callers should use [`read_from_path`] (from [`unified`]) which:
//!
//! - infers the format from the file extension (or you can force it via [`ReadOptions`])
//! - reads the file into an in-memory [`crate::types::Frame`]
//! - optionally reports success/failure/alerts to a [`ReadObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, LogObserver, ReadContext, ReadObserver, ReadSeverity, ReadStats,
    StdErrObserver,
};
pub use unified::{read_from_path, ReadFormat, ReadOptions, ReadRequest};
