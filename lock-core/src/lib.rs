//! # Gesture Pattern Lock Core
//!
//! Recognition core for a 3x3 pattern lock widget: continuous pointer
//! motion in, an ordered digit pattern out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               GestureTracker                │
//! ├─────────────────────┬───────────────────────┤
//! │  Grid               │  PressPath            │
//! │  - 3x3 geometry     │  - ordered selection  │
//! │  - hit testing      │  - gap filling        │
//! ├─────────────────────┼───────────────────────┤
//! │  State machine      │  Feedback             │
//! │  - Idle/Tracking    │  - radius animation   │
//! │  - error display    │  - observer signals   │
//! │  - deferred clear   │  - haptic pulses      │
//! └─────────────────────┴───────────────────────┘
//! ```
//!
//! The crate is pure logic: no rendering surface, no clock, no device
//! access. Hosts feed [`TouchEvent`]s and a millisecond timeline in, take
//! [`Snapshot`]s out, and implement the [`GestureObserver`] and
//! [`Haptics`] seams.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod cell;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod observer;
pub mod path;
pub mod tracker;

pub use animation::{RadiusAnimation, ScaleMode};
pub use cell::{Cell, CellIndex, CellStatus, CELL_COUNT};
pub use config::TrackerConfig;
pub use error::{LockError, LockResult};
pub use event::{TouchEvent, TouchPhase};
pub use grid::Grid;
pub use observer::{GestureObserver, Haptics};
pub use path::PressPath;
pub use tracker::{GestureTracker, Snapshot, TrackerState};

/// Pattern lock core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
