//! Vox Engine - Waveform Extraction and Rendering
//!
//! Turns an audio asset into a fixed-resolution amplitude envelope and paints
//! that envelope as a progress-colored bar chart on a pixel surface.
//!
//! This crate provides:
//! - Symphonia-based decoding of an [`AudioSource`](vox_core::AudioSource)
//!   into an [`AmplitudeEnvelope`] (fixed block count, mean absolute
//!   amplitude per block)
//! - Stale-result protection for overlapping decodes via a generation counter
//! - A [`SourceFetcher`](vox_core::SourceFetcher) implementation over HTTP
//! - A renderer mapping `(envelope, playback position)` to an RGBA surface,
//!   plus the inverse surface-coordinate-to-seek mapping
//!
//! # Example
//!
//! ```rust
//! use vox_waveform::{AmplitudeEnvelope, RendererConfig, WaveformRenderer};
//! use vox_core::PlaybackPosition;
//! use std::time::Duration;
//!
//! // A 10-second ramp signal reduced to 200 blocks
//! let samples: Vec<f32> = (0..48_000).map(|i| i as f32 / 48_000.0).collect();
//! let envelope =
//!     AmplitudeEnvelope::from_samples(&samples, 200, Duration::from_secs(10));
//! assert_eq!(envelope.len(), 200);
//!
//! let renderer = WaveformRenderer::new(RendererConfig::default());
//! let surface = renderer.render(
//!     &envelope,
//!     &PlaybackPosition {
//!         position: Duration::from_secs(5),
//!         duration: Duration::from_secs(10),
//!         is_playing: true,
//!     },
//! );
//! assert_eq!(surface.width(), renderer.config().width);
//! ```

mod envelope;
mod error;
mod extractor;
mod fetch;
mod renderer;

// Public exports
pub use envelope::AmplitudeEnvelope;
pub use error::{Result, WaveformError};
pub use extractor::{ExtractorConfig, WaveformExtractor};
pub use fetch::HttpFetcher;
pub use renderer::{Color, PixelSurface, RendererConfig, WaveformRenderer};
