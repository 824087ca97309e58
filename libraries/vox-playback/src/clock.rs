//! Playback clock - position ownership, commands, and broadcasting

use crate::transport::{MediaTransport, TransportEvent};
use std::time::Duration;
use tracing::debug;
use vox_core::PlaybackPosition;

/// Handle for one registered position listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PlaybackPosition) + Send>;

/// Bridges a live media transport to the rendering and interaction layer
///
/// Owns the [`PlaybackPosition`]. Commands mutate it optimistically and push
/// to the transport; transport events overwrite it authoritatively. Every
/// change is broadcast to subscribers.
pub struct PlaybackClock {
    transport: Box<dyn MediaTransport>,
    state: PlaybackPosition,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PlaybackClock {
    /// Wrap a media transport
    ///
    /// The duration is taken from the transport if metadata is already
    /// loaded; otherwise it stays zero until a `MetadataLoaded` event.
    pub fn new(transport: Box<dyn MediaTransport>) -> Self {
        let mut state = PlaybackPosition::idle();
        if let Some(duration) = transport.duration() {
            state.duration = duration;
        }
        Self {
            transport,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current position snapshot (pull-based access)
    pub fn position(&self) -> PlaybackPosition {
        self.state
    }

    /// Register a listener called on every position change
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&PlaybackPosition) + Send + 'static,
    ) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Start playback
    ///
    /// Idempotent while already playing. With no loaded media (or a
    /// transport refusal) the command fails silently: no crash, position
    /// unchanged.
    pub fn play(&mut self) {
        if self.state.is_playing {
            return;
        }
        if !self.transport.has_media() {
            debug!("play ignored: transport has no media");
            return;
        }
        match self.transport.play() {
            Ok(()) => {
                self.state.is_playing = true;
                self.broadcast();
            }
            Err(e) => debug!(error = %e, "play ignored: transport refused"),
        }
    }

    /// Pause playback; no-op while already paused
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.transport.pause();
        self.state.is_playing = false;
        self.broadcast();
    }

    /// Flip between playing and paused
    pub fn toggle_playback(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Seek to a target position
    ///
    /// Clamps into `[0, duration]` and updates the owned position
    /// immediately (optimistic), before the transport confirms. Subsequent
    /// `TimeUpdate` events overwrite with authoritative values. The latest
    /// seek always wins; nothing is queued.
    pub fn seek(&mut self, target: Duration) {
        let clamped = target.min(self.state.duration);
        self.state.position = clamped;
        if let Err(e) = self.transport.set_position(clamped) {
            debug!(error = %e, "transport rejected seek; keeping optimistic position");
        }
        self.broadcast();
    }

    /// Seek by seconds; negative values clamp to zero
    pub fn seek_seconds(&mut self, seconds: f64) {
        self.seek(Duration::from_secs_f64(seconds.max(0.0)));
    }

    /// Force position back to the start, leaving the play state unchanged
    pub fn restart(&mut self) {
        self.state.position = Duration::ZERO;
        if let Err(e) = self.transport.set_position(Duration::ZERO) {
            debug!(error = %e, "transport rejected restart seek");
        }
        self.broadcast();
    }

    /// Apply one event from the transport's own ordered event sequence
    pub fn on_transport_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::MetadataLoaded { duration } => {
                self.state.duration = duration;
            }
            TransportEvent::TimeUpdate { position } => {
                // Authoritative: overwrites any optimistic seek value
                self.state.position = position;
            }
            TransportEvent::Ended => {
                // Position stays at the end; restart() is the explicit reset
                self.state.is_playing = false;
                self.state.position = self.state.duration;
            }
        }
        self.broadcast();
    }

    fn broadcast(&mut self) {
        let state = self.state;
        for (_, listener) in &mut self.listeners {
            listener(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClockError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Transport fake with scriptable media availability
    struct FakeTransport {
        has_media: bool,
        playing: bool,
        position: Duration,
        duration: Option<Duration>,
    }

    impl FakeTransport {
        fn loaded(duration_secs: u64) -> Self {
            Self {
                has_media: true,
                playing: false,
                position: Duration::ZERO,
                duration: Some(Duration::from_secs(duration_secs)),
            }
        }

        fn unloaded() -> Self {
            Self {
                has_media: false,
                playing: false,
                position: Duration::ZERO,
                duration: None,
            }
        }
    }

    impl MediaTransport for FakeTransport {
        fn play(&mut self) -> crate::Result<()> {
            if !self.has_media {
                return Err(ClockError::NoMedia);
            }
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn set_position(&mut self, position: Duration) -> crate::Result<()> {
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
    fn play_without_media_fails_silently() {
        let mut clock = PlaybackClock::new(Box::new(FakeTransport::unloaded()));
        clock.play();
        assert!(!clock.position().is_playing);
        assert_eq!(clock.position().position, Duration::ZERO);
    }

    #[test]
    fn play_is_idempotent_while_playing() {
        let mut clock = PlaybackClock::new(Box::new(FakeTransport::loaded(10)));
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = notified.clone();
        clock.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        clock.play();
        clock.play();

        assert!(clock.position().is_playing);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn toggle_flips_between_states() {
        let mut clock = PlaybackClock::new(Box::new(FakeTransport::loaded(10)));
        clock.toggle_playback();
        assert!(clock.position().is_playing);
        clock.toggle_playback();
        assert!(!clock.position().is_playing);
    }

    #[test]
    fn seek_clamps_past_duration() {
        let mut clock = PlaybackClock::new(Box::new(FakeTransport::loaded(10)));
        clock.seek(Duration::from_secs(110));
        assert_eq!(clock.position().position, Duration::from_secs(10));
    }

    #[test]
    fn seek_seconds_clamps_negative_input() {
        let mut clock = PlaybackClock::new(Box::new(FakeTransport::loaded(10)));
        clock.seek_seconds(-5.0);
        assert_eq!(clock.position().position, Duration::ZERO);
    }

    #[test]
    fn unsubscribe_is_deterministic() {
        let mut clock = PlaybackClock::new(Box::new(FakeTransport::loaded(10)));
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = notified.clone();
        let id = clock.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        clock.seek(Duration::from_secs(1));
        assert_eq!(notified.load(Ordering::SeqCst), 1);

        assert!(clock.unsubscribe(id));
        assert!(!clock.unsubscribe(id));
        assert_eq!(clock.subscriber_count(), 0);

        clock.seek(Duration::from_secs(2));
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }
}
