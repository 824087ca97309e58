/// Core error types for Vox Engine
use thiserror::Error;

/// Result type alias using `VoxError`
pub type Result<T> = std::result::Result<T, VoxError>;

/// Core error type for Vox Engine
///
/// This is the error surface of the host-capability traits. Engine crates
/// define their own richer error enums and convert from this one where
/// needed.
#[derive(Error, Debug)]
pub enum VoxError {
    /// Source bytes could not be retrieved
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Media transport rejected a command
    #[error("Transport error: {0}")]
    Transport(String),

    /// The external processing delegate failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// The export sink rejected a result
    #[error("Export error: {0}")]
    Export(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl VoxError {
    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a processing error
    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing(msg.into())
    }

    /// Create an export error
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
