//! Batch item store - ordered collection with guarded lifecycle mutations
//!
//! The store exclusively owns all item mutation. Iteration order equals
//! insertion order; ids are unique for the store's lifetime.

use crate::delegate::ItemResult;
use crate::error::{BatchError, Result};
use crate::types::{BatchConfig, BatchItem, BatchMode, ItemStatus};
use tracing::debug;
use vox_core::FileHandle;

/// Ordered collection of batch work items
#[derive(Debug, Clone)]
pub struct BatchStore {
    items: Vec<BatchItem>,
    mode: BatchMode,
    config: BatchConfig,
}

impl BatchStore {
    /// Empty store for the given ingestion mode
    pub fn new(mode: BatchMode) -> Self {
        Self::with_config(mode, BatchConfig::default())
    }

    /// Empty store with explicit configuration
    pub fn with_config(mode: BatchMode, config: BatchConfig) -> Self {
        Self {
            items: Vec::new(),
            mode,
            config,
        }
    }

    /// Ingestion mode of this store
    pub fn mode(&self) -> BatchMode {
        self.mode
    }

    /// Store configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Append one pending text item; returns its id
    pub fn add_text(&mut self, content: impl Into<String>) -> String {
        let item = BatchItem::text(content);
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Append pending items for a set of ingested file handles
    ///
    /// At most [`BatchConfig::max_files_per_add`] handles per call; handles
    /// outside the mode's extension allow-list are skipped silently.
    /// Returns the ids of the items actually added, in arrival order.
    pub fn add_files(&mut self, files: Vec<FileHandle>) -> Result<Vec<String>> {
        if files.len() > self.config.max_files_per_add {
            return Err(BatchError::TooManyFiles {
                count: files.len(),
                max: self.config.max_files_per_add,
            });
        }

        let mut added = Vec::new();
        for file in files {
            if !self.mode.accepts(&file) {
                debug!(file = %file.name, "skipping file outside the allow-list");
                continue;
            }
            let item = BatchItem::from_file(self.mode.item_kind(), file);
            added.push(item.id.clone());
            self.items.push(item);
        }
        Ok(added)
    }

    /// Replace an item's content
    ///
    /// Permitted only while the item is pending: an item already dispatched
    /// for processing must not have its content changed underneath the
    /// pipeline.
    pub fn update(&mut self, id: &str, content: impl Into<String>) -> Result<()> {
        let item = self.find_mut(id)?;
        if item.status != ItemStatus::Pending {
            return Err(BatchError::EditRejected { id: id.to_string() });
        }
        item.content = content.into();
        Ok(())
    }

    /// Remove an item, returning it
    ///
    /// Rejected while the item is processing, so in-flight work is never
    /// orphaned.
    pub fn remove(&mut self, id: &str) -> Result<BatchItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| BatchError::ItemNotFound(id.to_string()))?;
        if self.items[index].status == ItemStatus::Processing {
            return Err(BatchError::RemoveRejected { id: id.to_string() });
        }
        Ok(self.items.remove(index))
    }

    /// Make a failed item eligible for the next run again
    ///
    /// The explicit caller-driven `Failed -> Pending` transition; the store
    /// never resets automatically.
    pub fn reset(&mut self, id: &str) -> Result<()> {
        let item = self.find_mut(id)?;
        if item.status != ItemStatus::Failed {
            return Err(BatchError::ResetRejected { id: id.to_string() });
        }
        item.status = ItemStatus::Pending;
        item.error = None;
        item.result = None;
        Ok(())
    }

    /// All items in insertion order
    pub fn items(&self) -> &[BatchItem] {
        &self.items
    }

    /// Look up one item by id
    pub fn get(&self, id: &str) -> Option<&BatchItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items waiting for the next run
    pub fn pending_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == ItemStatus::Pending)
            .count()
    }

    /// Transition every pending item to processing as one barrier
    ///
    /// Returns a snapshot of the run set for the delegate.
    pub(crate) fn begin_run(&mut self) -> Vec<BatchItem> {
        let mut run = Vec::new();
        for item in &mut self.items {
            if item.status == ItemStatus::Pending {
                item.status = ItemStatus::Processing;
                run.push(item.clone());
            }
        }
        run
    }

    /// Complete every processing item with its delegate result
    ///
    /// An item the delegate returned no outcome for gets an empty result
    /// reference (and export will skip it).
    pub(crate) fn complete_run(&mut self, results: &[ItemResult]) {
        for item in &mut self.items {
            if item.status != ItemStatus::Processing {
                continue;
            }
            let result = results
                .iter()
                .find(|outcome| outcome.id == item.id)
                .map(|outcome| outcome.result.clone())
                .unwrap_or_default();
            item.status = ItemStatus::Completed;
            item.result = Some(result);
            item.error = None;
        }
    }

    /// Fail every processing item with the shared run error
    pub(crate) fn fail_run(&mut self, error: &str) {
        for item in &mut self.items {
            if item.status != ItemStatus::Processing {
                continue;
            }
            item.status = ItemStatus::Failed;
            item.error = Some(error.to_string());
            item.result = None;
        }
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut BatchItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| BatchError::ItemNotFound(id.to_string()))
    }
}
