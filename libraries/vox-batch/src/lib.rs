//! Vox Engine - Batch Pipeline
//!
//! Queued work items for multi-file speech jobs and the driver that pushes
//! them through an externally supplied processing function.
//!
//! This crate provides:
//! - [`BatchStore`]: an ordered collection of [`BatchItem`]s with guarded
//!   lifecycle mutations (edit only while pending, never remove in-flight
//!   work, explicit reset of failed items)
//! - [`BatchDriver`]: one run at a time, all pending items as a single unit,
//!   all-or-nothing reconciliation of the delegate's outcome
//! - Sequential best-effort export of completed results through an
//!   [`ExportSink`]
//!
//! The processing function itself (a transcription or TTS service) is a
//! caller-supplied [`ProcessDelegate`]; the driver has no knowledge of its
//! internals.
//!
//! # Example
//!
//! ```rust
//! use vox_batch::{BatchDriver, BatchMode, BatchStore, ItemResult, ProcessDelegate};
//! use vox_batch::types::ItemStatus;
//! use async_trait::async_trait;
//!
//! struct EchoDelegate;
//!
//! #[async_trait]
//! impl ProcessDelegate for EchoDelegate {
//!     async fn process(
//!         &self,
//!         items: &[vox_batch::BatchItem],
//!     ) -> vox_core::Result<Vec<ItemResult>> {
//!         Ok(items
//!             .iter()
//!             .map(|item| ItemResult {
//!                 id: item.id.clone(),
//!                 result: format!("spoken:{}", item.content),
//!             })
//!             .collect())
//!     }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let mut store = BatchStore::new(BatchMode::Text);
//! store.add_text("Hello");
//!
//! let mut driver = BatchDriver::new();
//! let summary = driver.run(&mut store, &EchoDelegate).await.unwrap();
//! assert_eq!(summary.completed, 1);
//! assert_eq!(store.items()[0].status, ItemStatus::Completed);
//! # });
//! ```

mod delegate;
mod driver;
mod error;
mod export;
mod store;
pub mod types;

// Public exports
pub use delegate::{ExportSink, ItemResult, ProcessDelegate};
pub use driver::BatchDriver;
pub use error::{BatchError, Result};
pub use export::export_completed;
pub use store::BatchStore;
pub use types::{BatchConfig, BatchItem, BatchMode, ExportSummary, ItemKind, ItemStatus, RunSummary};
