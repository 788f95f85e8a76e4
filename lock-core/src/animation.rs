//! Per-cell radius animation.
//!
//! Presses enlarge or shrink a cell's visual radius over a short tween.
//! Nothing here owns a clock: the host calls [`crate::GestureTracker::tick`]
//! with its own millisecond timeline, and on touch-up every in-flight tween
//! is forced to its end value so no cell is ever left at a mid-animation
//! radius.

use serde::{Deserialize, Serialize};

use crate::cell::CellIndex;

/// How a press scales the cell's visual radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Start enlarged at `rate * base` and shrink back to the base radius.
    #[default]
    Normal,
    /// Grow from the base radius to `rate * base`, then back.
    Reverse,
}

/// A live radius tween on one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusAnimation {
    /// The animated cell.
    pub cell: CellIndex,
    base_radius: f32,
    scale_rate: f32,
    mode: ScaleMode,
    started_ms: u64,
    duration_ms: u64,
}

impl RadiusAnimation {
    /// Start a tween on `cell` at `started_ms`.
    #[must_use]
    pub fn new(
        cell: CellIndex,
        base_radius: f32,
        scale_rate: f32,
        mode: ScaleMode,
        started_ms: u64,
        duration_ms: u64,
    ) -> Self {
        Self {
            cell,
            base_radius,
            scale_rate,
            mode,
            started_ms,
            duration_ms,
        }
    }

    /// Whether the tween has run its full duration at `now_ms`.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) >= self.duration_ms
    }

    /// The radius every tween settles on.
    #[must_use]
    pub fn end_value(&self) -> f32 {
        self.base_radius
    }

    /// Interpolated radius at `now_ms`. Clamps to the end value once the
    /// duration has elapsed; times before the start read as the start.
    #[must_use]
    pub fn value_at(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 || self.is_finished(now_ms) {
            return self.end_value();
        }
        #[allow(clippy::cast_precision_loss)]
        let t = now_ms.saturating_sub(self.started_ms) as f32 / self.duration_ms as f32;
        let peak = self.scale_rate * self.base_radius;
        match self.mode {
            // Linear shrink from the enlarged radius back to base.
            ScaleMode::Normal => peak + (self.base_radius - peak) * t,
            // Out to the peak over the first half, back over the second.
            ScaleMode::Reverse => {
                if t < 0.5 {
                    self.base_radius + (peak - self.base_radius) * (t * 2.0)
                } else {
                    peak + (self.base_radius - peak) * ((t - 0.5) * 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> CellIndex {
        CellIndex::new(i).expect("valid index")
    }

    #[test]
    fn test_normal_mode_shrinks_to_base() {
        let anim = RadiusAnimation::new(idx(0), 30.0, 1.5, ScaleMode::Normal, 1000, 200);
        assert!((anim.value_at(1000) - 45.0).abs() < 1e-4);
        assert!((anim.value_at(1100) - 37.5).abs() < 1e-4);
        assert!((anim.value_at(1200) - 30.0).abs() < 1e-4);
        assert!(anim.is_finished(1200));
    }

    #[test]
    fn test_reverse_mode_peaks_at_midpoint() {
        let anim = RadiusAnimation::new(idx(4), 30.0, 1.5, ScaleMode::Reverse, 0, 200);
        assert!((anim.value_at(0) - 30.0).abs() < 1e-4);
        assert!((anim.value_at(100) - 45.0).abs() < 1e-4);
        assert!((anim.value_at(200) - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_end_value_is_base_radius() {
        let anim = RadiusAnimation::new(idx(2), 25.0, 2.0, ScaleMode::Normal, 0, 300);
        assert!((anim.end_value() - 25.0).abs() < f32::EPSILON);
        // Well past the end: still base.
        assert!((anim.value_at(10_000) - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_duration_is_immediately_done() {
        let anim = RadiusAnimation::new(idx(1), 30.0, 1.5, ScaleMode::Normal, 500, 0);
        assert!(anim.is_finished(500));
        assert!((anim.value_at(500) - 30.0).abs() < f32::EPSILON);
    }
}
