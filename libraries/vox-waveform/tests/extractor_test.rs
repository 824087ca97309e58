//! Integration tests for the waveform extractor
//!
//! Fixtures are synthesized in memory with hound and decoded through the
//! real Symphonia path.

use async_trait::async_trait;
use std::f32::consts::PI;
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use vox_core::{AudioSource, SourceFetcher, VoxError};
use vox_waveform::{
    AmplitudeEnvelope, ExtractorConfig, RendererConfig, WaveformError, WaveformExtractor,
    WaveformRenderer,
};

const SAMPLE_RATE: u32 = 16_000;

/// Encode a mono sine tone as a WAV file in memory
fn sine_wav(frequency: f32, duration_secs: f32, amplitude: f32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("wav writer");
        let num_samples = (SAMPLE_RATE as f32 * duration_secs) as u32;
        for i in 0..num_samples {
            let t = i as f32 / SAMPLE_RATE as f32;
            let sample = (2.0 * PI * frequency * t).sin() * amplitude;
            writer
                .write_sample((sample * i16::MAX as f32) as i16)
                .expect("write sample");
        }
        writer.finalize().expect("finalize wav");
    }
    cursor.into_inner()
}

/// Fetcher that never succeeds; in-memory sources bypass it entirely
struct NullFetcher;

#[async_trait]
impl SourceFetcher for NullFetcher {
    async fn fetch(&self, _source: &AudioSource) -> vox_core::Result<Vec<u8>> {
        Err(VoxError::fetch("network disabled in tests"))
    }
}

/// Fetcher that parks until released, then serves fixed bytes
struct GatedFetcher {
    gate: Notify,
    bytes: Vec<u8>,
}

#[async_trait]
impl SourceFetcher for GatedFetcher {
    async fn fetch(&self, _source: &AudioSource) -> vox_core::Result<Vec<u8>> {
        self.gate.notified().await;
        Ok(self.bytes.clone())
    }
}

fn extractor_with(fetcher: Arc<dyn SourceFetcher>) -> WaveformExtractor {
    WaveformExtractor::new(fetcher, ExtractorConfig::default())
}

#[tokio::test]
async fn decodes_wav_into_full_length_envelope() {
    let extractor = extractor_with(Arc::new(NullFetcher));
    let source = AudioSource::from_bytes(sine_wav(440.0, 10.0, 0.8));

    let envelope = extractor.extract(&source).await.expect("decode");

    assert_eq!(envelope.len(), 200);
    assert!(envelope.blocks().iter().all(|&b| b >= 0.0));
    // Mean absolute value of a sine at amplitude 0.8 is 2/pi * 0.8 ~ 0.51
    assert!(envelope.peak() > 0.3, "peak = {}", envelope.peak());

    let duration = envelope.duration().as_secs_f64();
    assert!((duration - 10.0).abs() < 0.05, "duration = {duration}");
}

#[tokio::test]
async fn garbage_bytes_fail_with_decode_error() {
    let extractor = extractor_with(Arc::new(NullFetcher));
    let source = AudioSource::from_bytes(vec![0xAB; 512]);

    let err = extractor.extract(&source).await.unwrap_err();
    assert!(
        matches!(err, WaveformError::Decode(_) | WaveformError::NoAudioTrack),
        "unexpected error: {err:?}"
    );

    // The documented fallback renders as an idle surface
    let envelope = AmplitudeEnvelope::empty();
    let renderer = WaveformRenderer::new(RendererConfig::default());
    let surface = renderer.render(&envelope, &vox_core::PlaybackPosition::idle());
    assert_eq!(surface.pixel(10, 10), Some(renderer.config().background));
}

#[tokio::test]
async fn unreachable_url_fails_with_fetch_error() {
    let extractor = extractor_with(Arc::new(NullFetcher));
    let source = AudioSource::Url("https://example.invalid/take.wav".to_string());

    let err = extractor.extract(&source).await.unwrap_err();
    assert!(matches!(err, WaveformError::Fetch(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn halfway_through_a_ten_second_tone_paints_half_the_bars() {
    let extractor = extractor_with(Arc::new(NullFetcher));
    let source = AudioSource::from_bytes(sine_wav(440.0, 10.0, 0.8));
    let envelope = extractor.extract(&source).await.expect("decode");
    assert_eq!(envelope.len(), 200);

    let renderer = WaveformRenderer::new(RendererConfig::default());
    let playback = vox_core::PlaybackPosition {
        position: Duration::from_secs(5),
        duration: envelope.duration(),
        is_playing: true,
    };

    assert_eq!(renderer.played_bars(envelope.len(), &playback), 100);
}

#[tokio::test]
async fn superseded_extraction_is_discarded() {
    let gated = Arc::new(GatedFetcher {
        gate: Notify::new(),
        bytes: sine_wav(220.0, 1.0, 0.5),
    });
    let extractor = extractor_with(gated.clone());

    let slow = AudioSource::Url("https://example.invalid/slow.wav".to_string());
    let fast = AudioSource::from_bytes(sine_wav(440.0, 1.0, 0.5));

    let (stale, fresh) = tokio::join!(extractor.extract_latest(&slow), async {
        // Let the first request claim its generation before superseding it
        tokio::task::yield_now().await;
        let fresh = extractor.extract_latest(&fast).await;
        gated.gate.notify_one();
        fresh
    });

    assert!(stale.expect("stale request must not error").is_none());
    assert!(fresh.expect("fresh request").is_some());
}
