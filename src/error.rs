use thiserror::Error;

/// Convenience result type for frame operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Error type returned by readers, writers and the length-checked frame operations.
///
/// Statistics over empty input are not errors (they resolve to NaN), and a join key without a
/// right-hand partner is not an error either. Everything that *is* reported goes through this
/// single enum so callers can match on the kind.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Two inputs that must be index-aligned have different lengths.
    #[error("length mismatch in {operation}: expected {expected}, got {actual}")]
    LengthMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON read/write error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not in a shape or format this crate can read.
    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },

    /// A value could not be parsed into a number or date.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

impl FrameError {
    /// Returns `true` for [`FrameError::LengthMismatch`].
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }
}
