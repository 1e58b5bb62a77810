//! Observed loading entrypoint.
//!
//! [`load_table`] behaves exactly like [`super::json::read_table`] but reports the outcome to an
//! optional [`IngestionObserver`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::DataResult;
use crate::types::RecordTable;

use super::json;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Options controlling observed loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load an NDJSON file, reporting to `options.observer` when one is set.
///
/// - `on_success` with row/column counts
/// - `on_failure` with a computed severity (missing file and I/O are `Critical`, bad or non-UTF-8 lines `Error`)
/// - `on_alert` when that severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use business_categories::ingestion::{load_table, LoadOptions, LogObserver};
///
/// # fn main() -> Result<(), business_categories::DataError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let table = load_table("business.json", &opts)?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_table(path: impl AsRef<Path>, options: &LoadOptions) -> DataResult<RecordTable> {
    let path = path.as_ref();
    let result = json::read_table(path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = IngestionContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok(table) => obs.on_success(
                &ctx,
                IngestionStats {
                    rows: table.row_count(),
                    columns: table.columns().len(),
                },
            ),
            Err(e) => {
                let sev = IngestionSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}
