//! Error types for waveform extraction and rendering

use thiserror::Error;
use vox_core::VoxError;

/// Waveform errors
#[derive(Debug, Error)]
pub enum WaveformError {
    /// Source bytes could not be retrieved
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Audio data could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// The container holds no decodable audio track
    #[error("No audio track found")]
    NoAudioTrack,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<VoxError> for WaveformError {
    fn from(err: VoxError) -> Self {
        match err {
            VoxError::Fetch(msg) => Self::Fetch(msg),
            VoxError::Io(err) => Self::Io(err),
            other => Self::Fetch(other.to_string()),
        }
    }
}

/// Result type for waveform operations
pub type Result<T> = std::result::Result<T, WaveformError>;
