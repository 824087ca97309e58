//! Media transport abstraction
//!
//! Abstracts the host's playable media element (an HTML audio element, a
//! native player handle) behind a narrow command-and-query surface. The
//! transport is the authority on position and duration; the clock's own
//! state is an optimistic mirror corrected by [`TransportEvent`]s.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable media element supplied by the host
pub trait MediaTransport: Send {
    /// Start or resume playback
    ///
    /// # Errors
    /// Returns an error if the transport cannot play (no source, device
    /// refused). The clock swallows this at the command boundary.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Push a new position to the transport
    ///
    /// # Errors
    /// Returns an error if the transport cannot seek; the clock keeps its
    /// optimistic position and lets the next time update win.
    fn set_position(&mut self, position: Duration) -> Result<()>;

    /// Current transport position
    fn position(&self) -> Duration;

    /// Total duration, once metadata is known
    fn duration(&self) -> Option<Duration>;

    /// Whether a source is loaded and playable
    fn has_media(&self) -> bool;
}

/// Events the transport's own event sequence delivers to the clock
///
/// Strictly ordered by the underlying media transport; the clock applies
/// them in arrival order and never reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportEvent {
    /// Duration became known (metadata loaded)
    MetadataLoaded {
        /// Total duration of the loaded media
        duration: Duration,
    },

    /// Periodic authoritative position update
    TimeUpdate {
        /// Current position reported by the transport
        position: Duration,
    },

    /// Playback reached end of stream
    Ended,
}
