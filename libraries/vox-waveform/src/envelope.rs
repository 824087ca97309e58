//! Fixed-resolution amplitude envelope
//!
//! A coarse summary of a waveform's loudness over time, used for
//! visualization rather than exact reconstruction. The renderer draws one
//! bar per block.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Amplitude envelope of one decoded audio asset
///
/// Holds `block_count` non-negative block means plus the source duration.
/// A successfully decoded source always yields exactly `block_count` blocks;
/// a failed decode is represented by [`AmplitudeEnvelope::empty`], which the
/// renderer treats as an idle surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeEnvelope {
    /// Mean absolute amplitude per block, in `[0.0, 1.0]` for full-scale input
    blocks: Vec<f32>,

    /// Duration of the decoded asset
    duration: Duration,
}

impl AmplitudeEnvelope {
    /// Envelope of a source that failed to decode
    pub fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    /// Reduce raw samples to `block_count` mean-absolute-amplitude blocks
    ///
    /// The sample array is partitioned into `block_count` contiguous blocks
    /// of `floor(len / block_count)` samples; trailing remainder samples are
    /// dropped. Deterministic and restartable. For inputs shorter than
    /// `block_count` the block size degenerates to zero and every block is
    /// `0.0`, still yielding exactly `block_count` blocks.
    pub fn from_samples(samples: &[f32], block_count: usize, duration: Duration) -> Self {
        if block_count == 0 {
            return Self::empty();
        }

        let block_len = samples.len() / block_count;
        let blocks = (0..block_count)
            .map(|block| {
                if block_len == 0 {
                    return 0.0;
                }
                let start = block * block_len;
                let sum: f32 = samples[start..start + block_len]
                    .iter()
                    .map(|s| s.abs())
                    .sum();
                sum / block_len as f32
            })
            .collect();

        Self { blocks, duration }
    }

    /// Block values
    pub fn blocks(&self) -> &[f32] {
        &self.blocks
    }

    /// Duration of the decoded asset
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` for the failed-decode envelope
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Largest block value (useful for display normalisation)
    pub fn peak(&self) -> f32 {
        self.blocks.iter().copied().fold(0.0_f32, f32::max)
    }
}
