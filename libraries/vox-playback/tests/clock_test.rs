//! Integration tests for the playback clock
//!
//! Drives the clock through a scriptable transport fake and checks the
//! command/event contract end to end.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vox_core::PlaybackPosition;
use vox_playback::{ClockError, MediaTransport, PlaybackClock, TransportEvent};

/// Scriptable transport; `refuse_seek` simulates a transport that has not
/// confirmed a position change yet.
struct ScriptedTransport {
    has_media: bool,
    refuse_seek: bool,
    position: Duration,
    duration: Option<Duration>,
}

impl ScriptedTransport {
    fn loaded(duration_secs: u64) -> Self {
        Self {
            has_media: true,
            refuse_seek: false,
            position: Duration::ZERO,
            duration: Some(Duration::from_secs(duration_secs)),
        }
    }
}

impl MediaTransport for ScriptedTransport {
    fn play(&mut self) -> vox_playback::Result<()> {
        if !self.has_media {
            return Err(ClockError::NoMedia);
        }
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_position(&mut self, position: Duration) -> vox_playback::Result<()> {
        if self.refuse_seek {
            return Err(ClockError::Transport("not ready".to_string()));
        }
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn has_media(&self) -> bool {
        self.has_media
    }
}

#[test]
fn end_of_stream_pauses_and_parks_at_duration() {
    let mut clock = PlaybackClock::new(Box::new(ScriptedTransport::loaded(10)));
    clock.play();
    clock.on_transport_event(TransportEvent::Ended);

    let position = clock.position();
    assert!(!position.is_playing);
    assert_eq!(position.position, Duration::from_secs(10));
}

#[test]
fn restart_resets_position_but_not_play_state() {
    let mut clock = PlaybackClock::new(Box::new(ScriptedTransport::loaded(10)));
    clock.play();
    clock.seek(Duration::from_secs(7));
    clock.restart();

    let position = clock.position();
    assert_eq!(position.position, Duration::ZERO);
    assert!(position.is_playing, "restart must not change the play state");
}

#[test]
fn optimistic_seek_applies_before_transport_confirms() {
    let mut clock = PlaybackClock::new(Box::new(ScriptedTransport {
        refuse_seek: true,
        ..ScriptedTransport::loaded(10)
    }));

    clock.seek(Duration::from_secs(6));
    assert_eq!(clock.position().position, Duration::from_secs(6));
}

#[test]
fn time_updates_are_authoritative_over_optimistic_seeks() {
    let mut clock = PlaybackClock::new(Box::new(ScriptedTransport::loaded(10)));
    clock.seek(Duration::from_secs(6));
    clock.on_transport_event(TransportEvent::TimeUpdate {
        position: Duration::from_millis(6_120),
    });
    assert_eq!(clock.position().position, Duration::from_millis(6_120));
}

#[test]
fn metadata_loaded_sets_duration() {
    let mut clock = PlaybackClock::new(Box::new(ScriptedTransport {
        duration: None,
        ..ScriptedTransport::loaded(0)
    }));
    assert_eq!(clock.position().duration, Duration::ZERO);

    clock.on_transport_event(TransportEvent::MetadataLoaded {
        duration: Duration::from_secs(42),
    });
    assert_eq!(clock.position().duration, Duration::from_secs(42));
}

#[test]
fn every_change_is_broadcast_in_order() {
    let mut clock = PlaybackClock::new(Box::new(ScriptedTransport::loaded(10)));
    let heard: Arc<Mutex<Vec<PlaybackPosition>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = heard.clone();
    clock.subscribe(move |position| {
        sink.lock().unwrap().push(*position);
    });

    clock.play();
    clock.seek(Duration::from_secs(3));
    clock.on_transport_event(TransportEvent::Ended);

    let heard = heard.lock().unwrap();
    assert_eq!(heard.len(), 3);
    assert!(heard[0].is_playing);
    assert_eq!(heard[1].position, Duration::from_secs(3));
    assert!(!heard[2].is_playing);
    assert_eq!(heard[2].position, Duration::from_secs(10));
}

proptest! {
    /// Property: after any seek, the position is clamped into [0, duration]
    #[test]
    fn seek_always_lands_in_range(
        duration_secs in 0u64..600,
        seek_secs in -1_000.0f64..10_000.0,
    ) {
        let mut clock =
            PlaybackClock::new(Box::new(ScriptedTransport::loaded(duration_secs)));
        clock.seek_seconds(seek_secs);

        let position = clock.position();
        prop_assert!(position.position <= position.duration);
    }
}
