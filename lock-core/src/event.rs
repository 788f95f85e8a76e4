//! Touch events driving the gesture tracker.

use serde::{Deserialize, Serialize};

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// Touch started (finger down).
    Start,
    /// Touch moved (finger dragging).
    Move,
    /// Touch ended (finger up).
    End,
    /// Touch cancelled (e.g., palm rejection).
    Cancel,
}

/// A single-pointer touch event in widget-local coordinates.
///
/// The tracker is single-threaded and never reads a wall clock; all timing
/// flows through `timestamp_ms`, a host-supplied monotonic millisecond
/// timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    /// Phase of this touch event.
    pub phase: TouchPhase,
    /// X position in widget coordinates.
    pub x: f32,
    /// Y position in widget coordinates.
    pub y: f32,
    /// Timestamp in milliseconds on the host timeline.
    pub timestamp_ms: u64,
}

impl TouchEvent {
    /// Create a new touch event.
    #[must_use]
    pub fn new(phase: TouchPhase, x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            phase,
            x,
            y,
            timestamp_ms,
        }
    }

    /// Create a touch-down event.
    #[must_use]
    pub fn down(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Start, x, y, timestamp_ms)
    }

    /// Create a touch-move event.
    #[must_use]
    pub fn moved(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Move, x, y, timestamp_ms)
    }

    /// Create a touch-up event.
    #[must_use]
    pub fn up(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::End, x, y, timestamp_ms)
    }

    /// Create a touch-cancel event.
    #[must_use]
    pub fn cancel(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Cancel, x, y, timestamp_ms)
    }
}
