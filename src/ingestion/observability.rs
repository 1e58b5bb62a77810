use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};

use crate::error::DataError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Error-level event (the load failed on bad input).
    Error,
    /// Critical error (missing file or other I/O failure).
    Critical,
}

impl IngestionSeverity {
    /// Severity a failed load is reported with.
    pub fn for_error(e: &DataError) -> Self {
        match e {
            DataError::NotFound { .. } | DataError::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input path.
    pub path: PathBuf,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of rows loaded.
    pub rows: usize,
    /// Number of distinct columns across all rows.
    pub columns: usize,
}

/// Observer interface for load outcomes.
pub trait IngestionObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &DataError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Fan out to `observers`, called in order.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards load events to the [`log`] facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        info!(
            "[load][ok] path={} rows={} columns={}",
            ctx.path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataError) {
        warn!("[load][{:?}] path={} err={}", severity, ctx.path.display(), error);
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataError) {
        error!("[ALERT][load][{:?}] path={} err={}", severity, ctx.path.display(), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_input_is_an_error_and_missing_input_is_critical() {
        let encoding = crate::ingestion::read_table_from_reader(&b"\xff\n"[..]).unwrap_err();
        assert!(matches!(encoding, DataError::Encoding { line: 1, .. }));
        assert_eq!(IngestionSeverity::for_error(&encoding), IngestionSeverity::Error);

        let missing = DataError::NotFound { path: PathBuf::from("gone.json") };
        assert_eq!(IngestionSeverity::for_error(&missing), IngestionSeverity::Critical);
        assert!(IngestionSeverity::Error < IngestionSeverity::Critical);
    }
}
