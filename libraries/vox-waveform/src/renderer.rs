//! Waveform renderer - progress-colored bar chart on a pixel surface
//!
//! Maps an [`AmplitudeEnvelope`] plus the live playback position to an RGBA
//! surface, one bar per envelope block. The policy is a full repaint on
//! every change; bar count is small and fixed, so there is no incremental
//! diffing. The inverse mapping (surface x coordinate to seek target) lives
//! here too so the two stay exact inverses of each other.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vox_core::PlaybackPosition;

use crate::envelope::AmplitudeEnvelope;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Configuration for the waveform renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Surface width in pixels (default: 800)
    pub width: u32,

    /// Surface height in pixels (default: 120)
    pub height: u32,

    /// Fixed gap between bars in pixels (default: 1.0)
    pub bar_gap: f32,

    /// Fraction of the surface height a full-scale bar occupies (default: 0.8)
    pub height_scale: f32,

    /// Color of bars at or before the playback position
    pub played: Color,

    /// Color of bars after the playback position
    pub unplayed: Color,

    /// Surface background
    pub background: Color,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 120,
            bar_gap: 1.0,
            height_scale: 0.8,
            played: Color::rgb(99, 102, 241),
            unplayed: Color::rgb(203, 213, 225),
            background: Color::rgba(0, 0, 0, 0),
        }
    }
}

/// Owned RGBA8 framebuffer the renderer paints into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Allocate a surface filled with one color
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&[fill.r, fill.g, fill.b, fill.a]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Color at a pixel; out-of-bounds coordinates return `None`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        Some(Color::rgba(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ))
    }

    /// Fill a rectangle, clipped to the surface bounds
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                let idx = ((row * self.width + col) * 4) as usize;
                self.data[idx] = color.r;
                self.data[idx + 1] = color.g;
                self.data[idx + 2] = color.b;
                self.data[idx + 3] = color.a;
            }
        }
    }
}

/// Paints amplitude envelopes and maps clicks back to seek targets
pub struct WaveformRenderer {
    config: RendererConfig,
}

impl WaveformRenderer {
    /// Create a renderer with the given configuration
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Renderer configuration
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Full repaint of the envelope at the given playback position
    ///
    /// An empty envelope yields the idle surface (background only). A zero
    /// duration renders everything unplayed.
    pub fn render(&self, envelope: &AmplitudeEnvelope, playback: &PlaybackPosition) -> PixelSurface {
        let cfg = &self.config;
        let mut surface = PixelSurface::new(cfg.width, cfg.height, cfg.background);

        if envelope.is_empty() || cfg.width == 0 || cfg.height == 0 {
            return surface;
        }

        let n = envelope.len();
        let progress = playback.progress();
        let slot = cfg.width as f32 / n as f32;
        let bar_width = (slot - cfg.bar_gap).max(1.0).round() as u32;
        let max_bar_height = cfg.height_scale * cfg.height as f32;

        for (i, &value) in envelope.blocks().iter().enumerate() {
            let bar_height = (value.clamp(0.0, 1.0) * max_bar_height)
                .min(cfg.height as f32)
                .round() as u32;
            if bar_height == 0 {
                continue;
            }
            let x = (i as f32 * slot).round() as u32;
            let y = (cfg.height - bar_height) / 2;
            let color = if bar_is_played(i, n, progress) {
                cfg.played
            } else {
                cfg.unplayed
            };
            surface.fill_rect(x, y, bar_width, bar_height, color);
        }

        surface
    }

    /// Number of bars painted "played" for an envelope of `block_count` bars
    pub fn played_bars(&self, block_count: usize, playback: &PlaybackPosition) -> usize {
        let progress = playback.progress();
        (0..block_count)
            .filter(|&i| bar_is_played(i, block_count, progress))
            .count()
    }

    /// Playback fraction for a horizontal surface coordinate
    ///
    /// The exact inverse of the forward color-boundary computation: clicking
    /// at the played/unplayed boundary round-trips to the same progress
    /// fraction within one bar width.
    pub fn seek_fraction(&self, x: f32) -> f32 {
        if self.config.width == 0 {
            return 0.0;
        }
        (x / self.config.width as f32).clamp(0.0, 1.0)
    }

    /// Seek target for a horizontal surface coordinate
    pub fn seek_target(&self, x: f32, duration: Duration) -> Duration {
        duration.mul_f64(f64::from(self.seek_fraction(x)))
    }
}

/// A bar is played when its leading edge sits before the progress boundary
fn bar_is_played(index: usize, block_count: usize, progress: f32) -> bool {
    (index as f32) < progress * block_count as f32
}
