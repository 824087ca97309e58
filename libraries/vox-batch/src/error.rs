//! Error types for the batch pipeline

use thiserror::Error;

/// Batch pipeline errors
#[derive(Debug, Error)]
pub enum BatchError {
    /// Attempt to edit an item that is no longer pending
    #[error("Edit rejected: item {id} is not pending")]
    EditRejected {
        /// Id of the item the edit targeted
        id: String,
    },

    /// Attempt to remove an item with in-flight work
    #[error("Remove rejected: item {id} is processing")]
    RemoveRejected {
        /// Id of the item the removal targeted
        id: String,
    },

    /// Attempt to reset an item that has not failed
    #[error("Reset rejected: item {id} is not failed")]
    ResetRejected {
        /// Id of the item the reset targeted
        id: String,
    },

    /// No item with this id exists in the store
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// More files than one ingestion call accepts
    #[error("Too many files: {count} exceeds the limit of {max}")]
    TooManyFiles {
        /// Number of handles offered
        count: usize,
        /// Per-call limit
        max: usize,
    },

    /// A run was triggered while another is still in flight
    #[error("A batch run is already in progress")]
    RunInProgress,

    /// The processing delegate rejected the run
    #[error("Batch processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;
