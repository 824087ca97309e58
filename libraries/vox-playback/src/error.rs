//! Error types for the playback clock

use thiserror::Error;

/// Playback clock errors
#[derive(Debug, Error)]
pub enum ClockError {
    /// The transport has no media loaded
    #[error("No media loaded")]
    NoMedia,

    /// The transport rejected a command
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for clock operations
pub type Result<T> = std::result::Result<T, ClockError>;
