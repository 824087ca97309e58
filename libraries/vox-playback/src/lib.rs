//! Vox Engine - Playback Clock
//!
//! A thin reactive wrapper over a live, externally driven media transport.
//!
//! This crate provides:
//! - The [`MediaTransport`] trait (the host's media element: play, pause,
//!   position read/write, duration, end-of-stream notifications)
//! - [`PlaybackClock`], which owns the [`PlaybackPosition`](vox_core::PlaybackPosition)
//!   and exposes `play`/`pause`/`toggle_playback`/`seek`/`restart`
//! - A subscription model: every position change is broadcast to registered
//!   listeners, with deterministic unsubscribe
//!
//! The clock never reorders transport events, never queues commands, and
//! applies the latest command unconditionally (last-write-wins) - there is
//! at most one active media element.
//!
//! # Example
//!
//! ```rust
//! use vox_playback::{MediaTransport, PlaybackClock};
//! # use vox_playback::Result;
//! use std::time::Duration;
//!
//! # struct Silence;
//! # impl MediaTransport for Silence {
//! #     fn play(&mut self) -> Result<()> { Ok(()) }
//! #     fn pause(&mut self) {}
//! #     fn set_position(&mut self, _p: Duration) -> Result<()> { Ok(()) }
//! #     fn position(&self) -> Duration { Duration::ZERO }
//! #     fn duration(&self) -> Option<Duration> { Some(Duration::from_secs(8)) }
//! #     fn has_media(&self) -> bool { true }
//! # }
//! let mut clock = PlaybackClock::new(Box::new(Silence));
//!
//! let heard = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
//! let counter = heard.clone();
//! let subscription = clock.subscribe(move |_position| {
//!     counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
//! });
//!
//! clock.toggle_playback();
//! clock.seek(Duration::from_secs(4));
//! assert!(clock.position().is_playing);
//!
//! assert!(clock.unsubscribe(subscription));
//! ```

mod clock;
mod error;
mod transport;

// Public exports
pub use clock::{PlaybackClock, SubscriptionId};
pub use error::{ClockError, Result};
pub use transport::{MediaTransport, TransportEvent};
