//! Export of completed results
//!
//! A read-only derived operation: completed items with a non-empty result
//! are handed to the sink one at a time, in insertion order, with a fixed
//! delay between items so a downstream consumer is never flooded.
//! Best-effort: an individual failure is logged and skipped, with no retry
//! and no change to the item's status.

use crate::delegate::ExportSink;
use crate::store::BatchStore;
use crate::types::{BatchConfig, BatchItem, ExportSummary, ItemStatus};
use tracing::{debug, warn};

/// Hand every completed, non-empty result to the sink sequentially
pub async fn export_completed(
    store: &BatchStore,
    sink: &dyn ExportSink,
    config: &BatchConfig,
) -> ExportSummary {
    let mut summary = ExportSummary {
        exported: 0,
        failed: 0,
    };
    let mut first = true;

    for item in store.items() {
        if item.status != ItemStatus::Completed {
            continue;
        }
        let Some(result) = item.result.as_deref().filter(|r| !r.is_empty()) else {
            continue;
        };

        if !first {
            tokio::time::sleep(config.export_delay).await;
        }
        first = false;

        let name = export_name(item);
        match sink.save(&name, result).await {
            Ok(()) => {
                debug!(item = %item.id, name = %name, "exported result");
                summary.exported += 1;
            }
            Err(e) => {
                warn!(item = %item.id, error = %e, "export failed; continuing");
                summary.failed += 1;
            }
        }
    }

    summary
}

/// Export name for an item: the source file's stem, or the item id
///
/// The sink owns format and extension decisions.
fn export_name(item: &BatchItem) -> String {
    item.source_file
        .as_ref()
        .map(|file| {
            file.name
                .rsplit_once('.')
                .map(|(stem, _)| stem.to_string())
                .unwrap_or_else(|| file.name.clone())
        })
        .unwrap_or_else(|| item.id.clone())
}
