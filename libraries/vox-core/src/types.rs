//! Core domain types for Vox Engine

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Reference to a single audio asset
///
/// Opaque to the engine: either a remote URL resolved through a
/// [`crate::SourceFetcher`], or bytes already loaded by the host. A source is
/// immutable once assigned; replacing it invalidates all derived envelope and
/// clock state (the waveform extractor's generation counter enforces this for
/// in-flight decodes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Remote asset, fetched by the host environment
    Url(String),

    /// Asset bytes already in memory
    Bytes(Arc<Vec<u8>>),
}

impl AudioSource {
    /// Wrap already-loaded bytes as a source
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::Bytes(Arc::new(bytes))
    }

    /// Whether this source needs a fetch before it can be decoded
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

/// Live playback position, owned by the playback clock
///
/// Mutated only in response to media-transport events or explicit seek
/// commands. `position <= duration` is the steady-state invariant; transient
/// violations during a seek self-correct on the next transport tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackPosition {
    /// Current position from the start of the asset
    pub position: Duration,

    /// Total asset duration (zero until metadata is known)
    pub duration: Duration,

    /// Whether the transport is currently playing
    pub is_playing: bool,
}

impl PlaybackPosition {
    /// Position at zero, not playing, duration unknown
    pub fn idle() -> Self {
        Self {
            position: Duration::ZERO,
            duration: Duration::ZERO,
            is_playing: false,
        }
    }

    /// Playback progress as a fraction in `[0.0, 1.0]`
    ///
    /// A zero duration yields `0.0`, never a division by zero.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let fraction = self.position.as_secs_f64() / self.duration.as_secs_f64();
        fraction.clamp(0.0, 1.0) as f32
    }
}

impl Default for PlaybackPosition {
    fn default() -> Self {
        Self::idle()
    }
}

/// Metadata for a file handed to the engine by the host
///
/// The engine never opens files itself; ingestion receives name and size
/// metadata and the host keeps the actual handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// File name including extension
    pub name: String,

    /// File size in bytes
    pub size: u64,
}

impl FileHandle {
    /// Create a new file handle
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Lower-cased extension, if the name has one
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_ascii_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_at_half() {
        let position = PlaybackPosition {
            position: Duration::from_secs(5),
            duration: Duration::from_secs(10),
            is_playing: true,
        };
        assert_eq!(position.progress(), 0.5);
    }

    #[test]
    fn progress_with_zero_duration_is_zero() {
        let position = PlaybackPosition {
            position: Duration::from_secs(3),
            duration: Duration::ZERO,
            is_playing: false,
        };
        assert_eq!(position.progress(), 0.0);
    }

    #[test]
    fn progress_clamps_transient_overshoot() {
        // Position past duration is permitted transiently during a seek
        let position = PlaybackPosition {
            position: Duration::from_secs(12),
            duration: Duration::from_secs(10),
            is_playing: true,
        };
        assert_eq!(position.progress(), 1.0);
    }

    #[test]
    fn file_handle_extension_is_lowercased() {
        let handle = FileHandle::new("Interview.WAV", 1024);
        assert_eq!(handle.extension().as_deref(), Some("wav"));
    }

    #[test]
    fn file_handle_without_extension() {
        assert_eq!(FileHandle::new("notes", 10).extension(), None);
        assert_eq!(FileHandle::new("notes.", 10).extension(), None);
    }

    #[test]
    fn bytes_source_is_not_remote() {
        let source = AudioSource::from_bytes(vec![0u8; 4]);
        assert!(!source.is_remote());
        assert!(AudioSource::Url("https://x/y.mp3".into()).is_remote());
    }
}
