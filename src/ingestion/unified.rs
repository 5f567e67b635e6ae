//! Unified read entrypoint.
//!
//! Most callers should use [`read_from_path`], which reads a file into an in-memory
//! [`crate::types::Frame`].
//!
//! - If [`ReadOptions::format`] is `None`, the format is inferred from the file extension.
//! - If a [`super::observability::ReadObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{FrameError, FrameResult};
use crate::types::Frame;

use super::observability::{ReadContext, ReadObserver, ReadSeverity, ReadStats};
use super::{csv, json};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// JSON array-of-objects or NDJSON.
    Json,
}

impl ReadFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }

    /// Field delimiter used when [`ReadOptions::delimiter`] is not set.
    pub fn default_delimiter(self) -> u8 {
        match self {
            Self::Tsv => b'\t',
            Self::Csv | Self::Json => b',',
        }
    }
}

/// Options controlling [`read_from_path`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ReadOptions {
    /// If `None`, infer the format from the file extension.
    pub format: Option<ReadFormat>,
    /// Override the delimiter for delimited formats.
    pub delimiter: Option<u8>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ReadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ReadSeverity,
}

impl fmt::Debug for ReadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOptions")
            .field("format", &self.format)
            .field("delimiter", &self.delimiter.map(char::from))
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            format: None,
            delimiter: None,
            observer: None,
            alert_at_or_above: ReadSeverity::Critical,
        }
    }
}

/// Read `path` into a [`Frame`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use frame_stats::ingestion::{read_from_path, ReadFormat, ReadOptions};
///
/// # fn main() -> Result<(), frame_stats::FrameError> {
/// // Uses `.csv` to select the reader.
/// let df = read_from_path("scores.csv", &ReadOptions::default())?;
/// println!("rows={}", df.row_count());
///
/// // Semicolon-separated file without a useful extension.
/// let opts = ReadOptions {
///     format: Some(ReadFormat::Csv),
///     delimiter: Some(b';'),
///     ..Default::default()
/// };
/// let df = read_from_path("export.txt", &opts)?;
/// println!("rows={}", df.row_count());
/// # Ok(())
/// # }
/// ```
pub fn read_from_path(path: impl AsRef<Path>, options: &ReadOptions) -> FrameResult<Frame> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = ReadContext {
        path: path.to_path_buf(),
        format,
    };

    let delimiter = options.delimiter.unwrap_or(format.default_delimiter());
    let result = match format {
        ReadFormat::Csv | ReadFormat::Tsv => csv::read_csv_from_path(path, delimiter),
        ReadFormat::Json => json::read_json_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(df) => obs.on_success(
                &ctx,
                ReadStats {
                    rows: df.row_count(),
                    columns: df.columns().len(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &FrameError) -> ReadSeverity {
    match e {
        FrameError::Io(_) => ReadSeverity::Critical,
        FrameError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => ReadSeverity::Critical,
            _ => ReadSeverity::Error,
        },
        FrameError::Json(err) if err.is_io() => ReadSeverity::Critical,
        FrameError::Json(_) => ReadSeverity::Error,
        FrameError::UnsupportedFormat { .. }
        | FrameError::ParseError { .. }
        | FrameError::LengthMismatch { .. } => ReadSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> FrameResult<ReadFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| FrameError::UnsupportedFormat {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    ReadFormat::from_extension(ext).ok_or_else(|| FrameError::UnsupportedFormat {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// An owned read request, e.g. for queuing reads in a job system.
#[derive(Clone)]
pub struct ReadRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling the read.
    pub options: ReadOptions,
}

impl fmt::Debug for ReadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl ReadRequest {
    /// Execute the request by calling [`read_from_path`].
    pub fn run(&self) -> FrameResult<Frame> {
        read_from_path(&self.path, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(ReadFormat::from_extension("CSV"), Some(ReadFormat::Csv));
        assert_eq!(ReadFormat::from_extension("tsv"), Some(ReadFormat::Tsv));
        assert_eq!(ReadFormat::from_extension("ndjson"), Some(ReadFormat::Json));
        assert_eq!(ReadFormat::from_extension("xlsx"), None);
    }

    #[test]
    fn infer_format_requires_known_extension() {
        assert!(infer_format_from_path(Path::new("data")).is_err());
        let err = infer_format_from_path(Path::new("data.parquet")).unwrap_err();
        assert!(err.to_string().contains("extension 'parquet'"));
    }

    #[test]
    fn io_failures_are_critical() {
        let io = FrameError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(severity_for_error(&io), ReadSeverity::Critical);
        let shape = FrameError::UnsupportedFormat {
            message: "x".to_string(),
        };
        assert_eq!(severity_for_error(&shape), ReadSeverity::Error);
    }
}
