//! Batch pipeline driver - runs the whole pending set as one unit

use crate::delegate::ProcessDelegate;
use crate::error::{BatchError, Result};
use crate::store::BatchStore;
use crate::types::RunSummary;
use tracing::{info, warn};

/// Drives pending items through the externally supplied processing function
///
/// A run is a single logical barrier: every currently pending item moves to
/// processing together, the delegate is awaited once for the whole set, and
/// the outcome applies to every run item uniformly (all completed or all
/// failed). The run-in-progress flag is an invariant check, not a lock:
/// triggering a second run while one is in flight is an error, never a wait.
#[derive(Debug, Default)]
pub struct BatchDriver {
    running: bool,
}

impl BatchDriver {
    /// New idle driver
    pub fn new() -> Self {
        Self { running: false }
    }

    /// Whether a run is currently in flight
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Process all currently pending items as one batch
    ///
    /// With nothing pending this is a no-op returning an empty summary.
    ///
    /// # Errors
    /// [`BatchError::RunInProgress`] if a run is already in flight;
    /// [`BatchError::ProcessingFailed`] if the delegate rejected the run, in
    /// which case every run item is left `Failed` with the shared error
    /// message and the caller may [`BatchStore::reset`] items to retry.
    pub async fn run(
        &mut self,
        store: &mut BatchStore,
        delegate: &dyn ProcessDelegate,
    ) -> Result<RunSummary> {
        if self.running {
            return Err(BatchError::RunInProgress);
        }

        let snapshot = store.begin_run();
        if snapshot.is_empty() {
            return Ok(RunSummary {
                total: 0,
                completed: 0,
            });
        }

        self.running = true;
        info!(items = snapshot.len(), "starting batch run");

        let outcome = delegate.process(&snapshot).await;
        self.running = false;

        match outcome {
            Ok(results) => {
                store.complete_run(&results);
                info!(items = snapshot.len(), "batch run completed");
                Ok(RunSummary {
                    total: snapshot.len(),
                    completed: snapshot.len(),
                })
            }
            Err(e) => {
                let message = e.to_string();
                store.fail_run(&message);
                warn!(items = snapshot.len(), error = %message, "batch run failed");
                Err(BatchError::ProcessingFailed(message))
            }
        }
    }
}
