//! Vox Engine Core
//!
//! Shared types, traits, and error handling for Vox Engine.
//!
//! Vox Engine is the audio core of a voice-AI product surface: waveform
//! visualization with playback synchronization, and a batch pipeline for
//! multi-file speech jobs. This crate provides the foundational building
//! blocks the engine crates share.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: [`AudioSource`], [`PlaybackPosition`], [`FileHandle`]
//! - **Capability Traits**: [`SourceFetcher`] (byte retrieval for audio
//!   sources, supplied by the host environment)
//! - **Error Handling**: Unified [`VoxError`] and [`Result`] types
//!
//! Everything host-specific (HTTP clients, media elements, processing
//! services, file savers) lives behind traits and is constructor-injected by
//! the embedding application. There is no global state anywhere in the
//! workspace.
//!
//! # Example
//!
//! ```rust
//! use vox_core::{AudioSource, PlaybackPosition};
//! use std::time::Duration;
//!
//! let source = AudioSource::Url("https://example.com/take-1.wav".to_string());
//! assert!(source.is_remote());
//!
//! let position = PlaybackPosition {
//!     position: Duration::from_secs(5),
//!     duration: Duration::from_secs(10),
//!     is_playing: true,
//! };
//! assert_eq!(position.progress(), 0.5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VoxError};
pub use traits::SourceFetcher;
pub use types::{AudioSource, FileHandle, PlaybackPosition};
