//! Core types for the batch pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;
use vox_core::FileHandle;

/// What a work item carries into processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Text content to be synthesized
    Text,

    /// An audio file to be transcribed
    Audio,
}

/// Lifecycle state of a work item
///
/// Transitions: `Pending -> Processing -> Completed | Failed`, plus the
/// explicit caller-driven `Failed -> Pending` reset. Editing is permitted
/// only while `Pending`; removal any time except `Processing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Waiting for the next batch run
    Pending,

    /// Part of the run currently in flight
    Processing,

    /// Processed successfully; `result` is set
    Completed,

    /// The run it belonged to failed; `error` is set
    Failed,
}

/// One queued unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    /// Unique identifier, immutable for the item's lifetime
    pub id: String,

    /// Kind of work this item represents
    pub kind: ItemKind,

    /// Item payload (text to synthesize, or a label for an audio file);
    /// mutable only while the item is pending
    pub content: String,

    /// Source file metadata for file-ingested items
    pub source_file: Option<FileHandle>,

    /// Lifecycle state
    pub status: ItemStatus,

    /// Result reference, set when the item completes
    pub result: Option<String>,

    /// Shared run error message, set when the item fails
    pub error: Option<String>,
}

impl BatchItem {
    /// New pending text item with a fresh id
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: ItemKind::Text,
            content: content.into(),
            source_file: None,
            status: ItemStatus::Pending,
            result: None,
            error: None,
        }
    }

    /// New pending item backed by an ingested file
    pub fn from_file(kind: ItemKind, file: FileHandle) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            content: String::new(),
            source_file: Some(file),
            status: ItemStatus::Pending,
            result: None,
            error: None,
        }
    }
}

/// Ingestion mode for a batch
///
/// Determines both the kind of created items and the extension allow-list
/// applied when files are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchMode {
    /// Text-to-speech batches: text/markdown files
    Text,

    /// Transcription batches: common audio container formats
    Audio,
}

impl BatchMode {
    /// Extensions accepted by this mode
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Text => &["txt", "md"],
            Self::Audio => &["mp3", "wav", "m4a", "ogg", "flac", "aac"],
        }
    }

    /// Whether a file handle passes this mode's allow-list
    pub fn accepts(&self, file: &FileHandle) -> bool {
        file.extension()
            .map(|ext| self.allowed_extensions().contains(&ext.as_str()))
            .unwrap_or(false)
    }

    /// Kind of item this mode produces
    pub fn item_kind(&self) -> ItemKind {
        match self {
            Self::Text => ItemKind::Text,
            Self::Audio => ItemKind::Audio,
        }
    }
}

/// Configuration for the batch pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum file handles one `add_files` call accepts (default: 50)
    pub max_files_per_add: usize,

    /// Fixed delay between consecutive exports (default: 500ms)
    pub export_delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_files_per_add: 50,
            export_delay: Duration::from_millis(500),
        }
    }
}

/// Outcome of one successful batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Items the run processed
    pub total: usize,

    /// Items that completed (equals `total`; runs are all-or-nothing)
    pub completed: usize,
}

/// Outcome of one export pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Results handed to the sink successfully
    pub exported: usize,

    /// Sink failures that were logged and skipped
    pub failed: usize,
}
