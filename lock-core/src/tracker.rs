//! # Gesture tracker
//!
//! The state machine at the center of the widget: it turns a stream of
//! touch events into an ordered, duplicate-free path of grid cells,
//! inserting skipped intermediate cells, and drives the visual feedback
//! states (normal/pressed/error) and the observer signals.
//!
//! ```text
//! Idle ──down──▶ Tracking ──up/cancel──▶ Idle ──show_error──▶ ErrorDisplay
//!   ▲                                                              │
//!   └──────────────── tick (deadline) / clear ─────────────────────┘
//! ```
//!
//! Everything runs synchronously on the caller's thread. The tracker never
//! reads a clock: events carry timestamps and the host pumps [`GestureTracker::tick`].

use serde::{Deserialize, Serialize};

use crate::animation::RadiusAnimation;
use crate::cell::{Cell, CellIndex, CellStatus};
use crate::config::TrackerConfig;
use crate::event::{TouchEvent, TouchPhase};
use crate::grid::Grid;
use crate::observer::{GestureObserver, Haptics};
use crate::path::PressPath;
use crate::LockResult;

/// Position of the tracker in its gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerState {
    /// No gesture in progress.
    Idle,
    /// Finger down, accumulating cells.
    Tracking,
    /// Showing the error presentation of the last pattern.
    ErrorDisplay,
}

/// Drawable state of the widget at one instant.
///
/// Taking a snapshot applies any clear queued by
/// [`GestureTracker::clear_view`]; this is the draw cycle the deferred
/// reset waits for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Side length of the square widget area.
    pub side: f32,
    /// All nine cells in row-major order: center, visual radius, status.
    pub cells: Vec<Cell>,
    /// Selected cells in selection order.
    pub path: Vec<CellIndex>,
    /// Live pointer X (connector endpoint while tracking).
    pub pointer_x: f32,
    /// Live pointer Y.
    pub pointer_y: f32,
}

impl Snapshot {
    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> LockResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> LockResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Recognizes 3x3 pattern gestures from single-pointer touch events.
pub struct GestureTracker {
    grid: Grid,
    config: TrackerConfig,
    path: PressPath,
    state: TrackerState,
    pointer_x: f32,
    pointer_y: f32,
    /// Set by `show_error`, cleared by the next gesture or a clear. The
    /// timed reset checks it at fire time instead of being cancelled.
    error_active: bool,
    error_deadline_ms: Option<u64>,
    animations: Vec<RadiusAnimation>,
    pending_clear: bool,
    needs_redraw: bool,
    observer: Option<Box<dyn GestureObserver>>,
    haptics: Option<Box<dyn Haptics>>,
}

impl GestureTracker {
    /// Create a tracker for a square widget of the given side length with
    /// the default configuration.
    #[must_use]
    pub fn new(side: f32) -> Self {
        Self::with_config(side, TrackerConfig::default())
    }

    /// Create a tracker with a custom configuration. Out-of-range config
    /// values are clamped here, at configuration time.
    #[must_use]
    pub fn with_config(side: f32, config: TrackerConfig) -> Self {
        let config = config.clamped();
        Self {
            grid: Grid::new(side, config.radius_ratio),
            config,
            path: PressPath::new(),
            state: TrackerState::Idle,
            pointer_x: 0.0,
            pointer_y: 0.0,
            error_active: false,
            error_deadline_ms: None,
            animations: Vec::new(),
            pending_clear: false,
            needs_redraw: false,
            observer: None,
            haptics: None,
        }
    }

    /// Register the observer notified at the gesture signal points.
    /// Replaces any previously attached observer.
    pub fn attach_observer(&mut self, observer: Box<dyn GestureObserver>) {
        self.observer = Some(observer);
    }

    /// Remove the registered observer, returning it if one was attached.
    pub fn detach_observer(&mut self) -> Option<Box<dyn GestureObserver>> {
        self.observer.take()
    }

    /// Register the haptic capability pulsed once per accumulated cell.
    pub fn attach_haptics(&mut self, haptics: Box<dyn Haptics>) {
        self.haptics = Some(haptics);
    }

    /// Remove the haptic capability.
    pub fn detach_haptics(&mut self) -> Option<Box<dyn Haptics>> {
        self.haptics.take()
    }

    /// Recompute the grid for a new side length. Any gesture in progress
    /// is discarded along with its animations.
    pub fn resize(&mut self, side: f32) {
        self.grid.resize(side);
        self.path.clear();
        self.animations.clear();
        self.state = TrackerState::Idle;
        self.needs_redraw = true;
    }

    /// Feed one touch event into the state machine.
    pub fn handle_event(&mut self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Start => self.handle_down(event),
            TouchPhase::Move => self.handle_move(event),
            TouchPhase::End | TouchPhase::Cancel => self.handle_up(),
        }
        self.needs_redraw = true;
    }

    fn handle_down(&mut self, event: &TouchEvent) {
        tracing::debug!("Gesture started at ({}, {})", event.x, event.y);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_started();
        }
        self.reset_cells_and_path();
        self.error_active = false;
        self.pointer_x = event.x;
        self.pointer_y = event.y;
        self.state = TrackerState::Tracking;
        self.press_at(event.x, event.y, event.timestamp_ms);
    }

    fn handle_move(&mut self, event: &TouchEvent) {
        if self.state != TrackerState::Tracking {
            return;
        }
        self.pointer_x = event.x;
        self.pointer_y = event.y;
        self.press_at(event.x, event.y, event.timestamp_ms);
    }

    fn handle_up(&mut self) {
        let digits = self.path.digits();
        tracing::debug!("Gesture complete: \"{digits}\"");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_complete(&digits);
        }
        // Snap the connector to the last selected cell rather than the
        // release point.
        if let Some(last) = self.path.last() {
            let cell = self.grid.cell_at(last);
            self.pointer_x = cell.x;
            self.pointer_y = cell.y;
        }
        self.finish_animations();
        self.state = TrackerState::Idle;
    }

    /// One hit-test/accumulate pass. No hit is a normal silent outcome.
    fn press_at(&mut self, x: f32, y: f32, now_ms: u64) {
        if let Some(index) = self.grid.hit_test(x, y) {
            self.press_cell(index, now_ms);
        }
    }

    /// Accumulate a hit cell: gap-fill, append, animate, pulse, notify.
    fn press_cell(&mut self, index: CellIndex, now_ms: u64) {
        if self.path.contains(index) {
            return;
        }
        if !self.path.is_empty() {
            self.fill_gap(index, now_ms);
        }
        self.path.push(index);
        self.grid.cell_at_mut(index).status = CellStatus::Pressed;
        self.start_animation(index, now_ms);
        if let Some(haptics) = self.haptics.as_mut() {
            haptics.pulse(self.config.vibrate_duration_ms);
        }
        let digits = self.path.digits();
        tracing::trace!("Cell {index} pressed, path \"{digits}\"");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_progress(&digits);
        }
    }

    /// Midpoint gap fill: if the straight line from the last selected cell
    /// to the new one passes over an unselected cell, insert it first.
    ///
    /// Deliberately single-level: one midpoint check per append, chaining
    /// only through the recursive re-entry of `press_cell`. A single move
    /// event that jumps two or more cells in line is not filled beyond
    /// what the midpoint happens to land on.
    fn fill_gap(&mut self, index: CellIndex, now_ms: u64) {
        let Some(last) = self.path.last() else {
            return;
        };
        if last == index {
            return;
        }
        let last_cell = self.grid.cell_at(last);
        let new_cell = self.grid.cell_at(index);
        let mid_x = (last_cell.x + new_cell.x) / 2.0;
        let mid_y = (last_cell.y + new_cell.y) / 2.0;
        if let Some(middle) = self.grid.hit_test(mid_x, mid_y) {
            self.press_cell(middle, now_ms);
        }
    }

    fn start_animation(&mut self, index: CellIndex, now_ms: u64) {
        let animation = RadiusAnimation::new(
            index,
            self.grid.hit_radius(),
            self.config.scale_rate,
            self.config.scale_mode,
            now_ms,
            self.config.animation_duration_ms,
        );
        self.grid.cell_at_mut(index).radius = animation.value_at(now_ms);
        self.animations.push(animation);
    }

    /// Advance animations and the timed error reset to `now_ms`.
    ///
    /// The delayed reset fires only if the error flag is still set: a new
    /// gesture or an explicit clear in the interim makes it a no-op.
    pub fn tick(&mut self, now_ms: u64) {
        for animation in &self.animations {
            self.grid.cell_at_mut(animation.cell).radius = animation.value_at(now_ms);
        }
        let before = self.animations.len();
        self.animations.retain(|a| !a.is_finished(now_ms));
        if before > self.animations.len() || !self.animations.is_empty() {
            self.needs_redraw = true;
        }

        if let Some(deadline) = self.error_deadline_ms {
            if now_ms >= deadline {
                self.error_deadline_ms = None;
                if self.error_active {
                    tracing::debug!("Timed error display elapsed, clearing");
                    self.reset_cells_and_path();
                    self.error_active = false;
                    self.state = TrackerState::Idle;
                    self.needs_redraw = true;
                }
            }
        }
    }

    /// Force every in-flight press animation to its end value immediately.
    pub fn finish_animations(&mut self) {
        for animation in self.animations.drain(..) {
            self.grid.cell_at_mut(animation.cell).radius = animation.end_value();
        }
    }

    /// Mark every cell in the current path as an error and request a
    /// redraw. The path itself is kept. With an empty path this has no
    /// visible effect.
    pub fn show_error(&mut self) {
        self.error_active = true;
        self.state = TrackerState::ErrorDisplay;
        let indices: Vec<CellIndex> = self.path.iter().collect();
        for index in indices {
            self.grid.cell_at_mut(index).status = CellStatus::Error;
        }
        self.needs_redraw = true;
    }

    /// [`show_error`](Self::show_error), then auto-reset to the cleared
    /// idle state once `duration_ms` has elapsed on the `tick` timeline --
    /// unless a new gesture or clear intervenes first.
    pub fn show_error_for(&mut self, duration_ms: u64, now_ms: u64) {
        self.show_error();
        self.error_deadline_ms = Some(now_ms.saturating_add(duration_ms));
    }

    /// Queue a reset of all cell statuses and the path for the next draw
    /// cycle (the next [`snapshot`](Self::snapshot)). Does not move the
    /// state machine.
    pub fn clear_view(&mut self) {
        self.pending_clear = true;
        self.needs_redraw = true;
    }

    /// Capture the drawable state, applying any queued clear first.
    pub fn snapshot(&mut self) -> Snapshot {
        if self.pending_clear {
            self.pending_clear = false;
            self.reset_cells_and_path();
            self.error_active = false;
        }
        Snapshot {
            side: self.grid.side(),
            cells: self.grid.cells().copied().collect(),
            path: self.path.iter().collect(),
            pointer_x: self.pointer_x,
            pointer_y: self.pointer_y,
        }
    }

    /// Whether a redraw has been requested since the last call. Reading
    /// clears the latch.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// The fixed touch-detection radius.
    #[must_use]
    pub fn hit_radius(&self) -> f32 {
        self.grid.hit_radius()
    }

    /// Current state machine position.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// The current path as a digit string.
    #[must_use]
    pub fn path_digits(&self) -> String {
        self.path.digits()
    }

    /// Whether the error display is active.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error_active
    }

    /// The tracker configuration (after clamping).
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The grid, for hosts that draw cells directly.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn reset_cells_and_path(&mut self) {
        self.grid.reset_cells();
        self.path.clear();
        self.animations.clear();
    }
}
