//! External capabilities the pipeline delegates to
//!
//! The driver never performs speech work itself; it hands the whole run to
//! a [`ProcessDelegate`] and completed results to an [`ExportSink`], both
//! supplied by the caller.

use crate::types::BatchItem;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Per-item outcome returned by a successful processing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResult {
    /// Id of the item this outcome belongs to
    pub id: String,

    /// Result reference (synthesized audio handle, transcript text)
    pub result: String,
}

/// The externally supplied processing function
///
/// Invoked once per batch run with the run's entire item set. The driver
/// treats the call as a single unit: one success completes every item, one
/// failure fails every item.
#[async_trait]
pub trait ProcessDelegate: Send + Sync {
    /// Process a batch of items as one unit
    ///
    /// # Errors
    /// Any error fails the whole run; the driver applies the message to
    /// every item uniformly.
    async fn process(&self, items: &[BatchItem]) -> vox_core::Result<Vec<ItemResult>>;
}

/// Persists one named result to durable storage
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Save one result under the given name
    ///
    /// # Errors
    /// Returns an error if the sink cannot persist the result; export is
    /// best-effort and the caller logs and continues.
    async fn save(&self, name: &str, contents: &str) -> vox_core::Result<()>;
}
