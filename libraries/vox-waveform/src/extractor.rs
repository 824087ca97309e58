//! Waveform extractor - decode an audio source into an amplitude envelope
//!
//! Decoding uses Symphonia. Only the first channel feeds the envelope; the
//! envelope is a fixed-resolution rectification/downsampling of that channel
//! (mean absolute value per block).

use std::io::Cursor;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};
use vox_core::{AudioSource, SourceFetcher};

use crate::envelope::AmplitudeEnvelope;
use crate::error::{Result, WaveformError};

/// Configuration for the waveform extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Number of envelope blocks per asset (default: 200)
    pub block_count: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { block_count: 200 }
    }
}

/// Decodes audio sources into fixed-resolution amplitude envelopes
///
/// Supports whatever containers/codecs the enabled Symphonia features cover
/// (WAV, MP3, FLAC, OGG/Vorbis). Byte retrieval for remote sources goes
/// through the injected [`SourceFetcher`].
///
/// Overlapping extractions are not ordered; [`WaveformExtractor::extract_latest`]
/// tags each request with a generation and discards completions that a newer
/// request has superseded.
pub struct WaveformExtractor {
    fetcher: Arc<dyn SourceFetcher>,
    config: ExtractorConfig,
    generation: AtomicU64,
}

impl WaveformExtractor {
    /// Create a new extractor over the given fetcher
    pub fn new(fetcher: Arc<dyn SourceFetcher>, config: ExtractorConfig) -> Self {
        Self {
            fetcher,
            config,
            generation: AtomicU64::new(0),
        }
    }

    /// Number of envelope blocks this extractor produces
    pub fn block_count(&self) -> usize {
        self.config.block_count
    }

    /// Fetch and decode a source into its amplitude envelope
    ///
    /// Does not mutate the source and has no side effects beyond the decode.
    /// The documented caller contract on failure is to fall back to
    /// [`AmplitudeEnvelope::empty`] and render an idle surface.
    pub async fn extract(&self, source: &AudioSource) -> Result<AmplitudeEnvelope> {
        let bytes = match source {
            AudioSource::Bytes(bytes) => bytes.to_vec(),
            AudioSource::Url(_) => self.fetcher.fetch(source).await?,
        };
        self.decode_envelope(bytes)
    }

    /// Extract, discarding the result if a newer extraction has begun
    ///
    /// Each call claims the next generation before any suspension point; on
    /// completion the result is dropped (`Ok(None)`) when the claimed
    /// generation is no longer current. Errors from superseded requests are
    /// swallowed the same way.
    pub async fn extract_latest(&self, source: &AudioSource) -> Result<Option<AmplitudeEnvelope>> {
        let tag = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.extract(source).await;

        if self.generation.load(Ordering::SeqCst) != tag {
            debug!(generation = tag, "discarding stale envelope");
            return Ok(None);
        }
        outcome.map(Some)
    }

    /// Decode container bytes and reduce the first channel to an envelope
    fn decode_envelope(&self, bytes: Vec<u8>) -> Result<AmplitudeEnvelope> {
        let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

        let probed = symphonia::default::get_probe()
            .format(
                &Hint::new(),
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| WaveformError::Decode(format!("failed to probe source: {}", e)))?;

        let mut format = probed.format;

        let track = format.default_track().ok_or(WaveformError::NoAudioTrack)?;
        let track_id = track.id;
        let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);
        let known_duration = track
            .codec_params
            .n_frames
            .map(|frames| Duration::from_secs_f64(frames as f64 / sample_rate as f64));

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| WaveformError::Decode(format!("failed to create decoder: {}", e)))?;

        let mut samples: Vec<f32> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => break,
                Err(e) => {
                    return Err(WaveformError::Decode(format!("packet read failed: {}", e)))
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => extend_first_channel(&decoded, &mut samples),
                Err(SymphoniaError::DecodeError(e)) => {
                    // Malformed packets are skipped, not fatal
                    warn!(error = %e, "skipping undecodable packet");
                }
                Err(e) => return Err(WaveformError::Decode(format!("decode failed: {}", e))),
            }
        }

        if samples.is_empty() {
            return Err(WaveformError::Decode("no audio frames decoded".to_string()));
        }

        let duration = known_duration.unwrap_or_else(|| {
            Duration::from_secs_f64(samples.len() as f64 / sample_rate as f64)
        });

        debug!(
            samples = samples.len(),
            sample_rate,
            blocks = self.config.block_count,
            "decoded source"
        );

        Ok(AmplitudeEnvelope::from_samples(
            &samples,
            self.config.block_count,
            duration,
        ))
    }
}

/// Append the first channel of a decoded buffer as f32 samples
///
/// Signed integers use symmetric scaling (divide by 2^(N-1)) so the
/// [-1.0, 1.0] range is symmetric; unsigned integers are centered around
/// zero first.
fn extend_first_channel(decoded: &AudioBufferRef, out: &mut Vec<f32>) {
    if decoded.spec().channels.count() == 0 {
        return;
    }

    match decoded {
        AudioBufferRef::F32(buf) => out.extend(buf.chan(0).iter().copied()),
        AudioBufferRef::F64(buf) => out.extend(buf.chan(0).iter().map(|&s| s as f32)),
        AudioBufferRef::S32(buf) => out.extend(
            buf.chan(0)
                .iter()
                .map(|&s| s as f32 / 2_147_483_648.0),
        ),
        AudioBufferRef::S24(buf) => out.extend(
            buf.chan(0)
                .iter()
                .map(|s| s.inner() as f32 / 8_388_608.0),
        ),
        AudioBufferRef::S16(buf) => {
            out.extend(buf.chan(0).iter().map(|&s| s as f32 / 32_768.0));
        }
        AudioBufferRef::S8(buf) => out.extend(buf.chan(0).iter().map(|&s| s as f32 / 128.0)),
        AudioBufferRef::U32(buf) => out.extend(
            buf.chan(0)
                .iter()
                .map(|&s| (s as f32 / u32::MAX as f32) * 2.0 - 1.0),
        ),
        AudioBufferRef::U24(buf) => out.extend(
            buf.chan(0)
                .iter()
                .map(|s| (s.inner() as f32 / 16_777_215.0) * 2.0 - 1.0),
        ),
        AudioBufferRef::U16(buf) => out.extend(
            buf.chan(0)
                .iter()
                .map(|&s| (s as f32 / u16::MAX as f32) * 2.0 - 1.0),
        ),
        AudioBufferRef::U8(buf) => out.extend(
            buf.chan(0)
                .iter()
                .map(|&s| (s as f32 / u8::MAX as f32) * 2.0 - 1.0),
        ),
    }
}
