//! Hooks for watching [`super::read_from_path`] outcomes.
//!
//! A read reports exactly one of `on_success` or `on_failure`, plus `on_alert` when a failure's
//! [`ReadSeverity`] reaches [`super::ReadOptions::alert_at_or_above`].

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::FrameError;

use super::unified::ReadFormat;

/// How bad a read outcome is. Ordered, so thresholds compare with `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadSeverity {
    Info,
    Warning,
    /// The input was reachable but its content or shape was rejected.
    Error,
    /// The input could not be read at all (missing file, permissions, ...).
    Critical,
}

impl ReadSeverity {
    /// Lowercase tag used in observer output.
    pub fn label(self) -> &'static str {
        match self {
            ReadSeverity::Info => "info",
            ReadSeverity::Warning => "warning",
            ReadSeverity::Error => "error",
            ReadSeverity::Critical => "critical",
        }
    }
}

/// Which file was read and how.
#[derive(Debug, Clone)]
pub struct ReadContext {
    pub path: PathBuf,
    pub format: ReadFormat,
}

impl fmt::Display for ReadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.path.display(), self.format)
    }
}

/// Shape of a frame that was read successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadStats {
    pub rows: usize,
    /// Distinct columns across all rows, see [`crate::types::Frame::columns`].
    pub columns: usize,
}

/// Receives read outcomes. All callbacks default to doing nothing, except `on_alert`, which
/// falls back to `on_failure`.
pub trait ReadObserver: Send + Sync {
    fn on_success(&self, _ctx: &ReadContext, _stats: ReadStats) {}

    fn on_failure(&self, _ctx: &ReadContext, _severity: ReadSeverity, _error: &FrameError) {}

    fn on_alert(&self, ctx: &ReadContext, severity: ReadSeverity, error: &FrameError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Forwards every callback to each inner observer, in insertion order.
#[derive(Default, Clone)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ReadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn ReadObserver>>) -> Self {
        Self { observers }
    }

    /// Builder-style append.
    pub fn with(mut self, observer: Arc<dyn ReadObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompositeObserver({} observers)", self.observers.len())
    }
}

impl ReadObserver for CompositeObserver {
    fn on_success(&self, ctx: &ReadContext, stats: ReadStats) {
        self.observers
            .iter()
            .for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &ReadContext, severity: ReadSeverity, error: &FrameError) {
        self.observers
            .iter()
            .for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &ReadContext, severity: ReadSeverity, error: &FrameError) {
        self.observers
            .iter()
            .for_each(|o| o.on_alert(ctx, severity, error));
    }
}

fn success_line(ctx: &ReadContext, stats: ReadStats) -> String {
    format!("read {ctx}: {} rows x {} columns", stats.rows, stats.columns)
}

fn failure_line(ctx: &ReadContext, severity: ReadSeverity, error: &FrameError) -> String {
    format!("read {ctx} failed [{}]: {error}", severity.label())
}

/// Prints one line per event on stderr; alerts are prefixed with `ALERT`.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ReadObserver for StdErrObserver {
    fn on_success(&self, ctx: &ReadContext, stats: ReadStats) {
        eprintln!("{}", success_line(ctx, stats));
    }

    fn on_failure(&self, ctx: &ReadContext, severity: ReadSeverity, error: &FrameError) {
        eprintln!("{}", failure_line(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &ReadContext, severity: ReadSeverity, error: &FrameError) {
        eprintln!("ALERT {}", failure_line(ctx, severity, error));
    }
}

const LOG_TARGET: &str = "frame_stats::read";

/// Sends events to the [`log`] facade under the `frame_stats::read` target: `info` for
/// successes, `warn` for failures, `error` for alerts.
#[derive(Debug, Default)]
pub struct LogObserver;

impl ReadObserver for LogObserver {
    fn on_success(&self, ctx: &ReadContext, stats: ReadStats) {
        log::info!(target: LOG_TARGET, "{}", success_line(ctx, stats));
    }

    fn on_failure(&self, ctx: &ReadContext, severity: ReadSeverity, error: &FrameError) {
        log::warn!(target: LOG_TARGET, "{}", failure_line(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &ReadContext, severity: ReadSeverity, error: &FrameError) {
        log::error!(target: LOG_TARGET, "ALERT {}", failure_line(ctx, severity, error));
    }
}
