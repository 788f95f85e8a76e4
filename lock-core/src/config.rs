//! Tracker configuration.

use serde::{Deserialize, Serialize};

use crate::animation::ScaleMode;
use crate::{LockError, LockResult};

/// Configuration for the gesture tracker.
///
/// Values are validated and clamped here, at configuration time; the
/// hit-test and accumulation paths assume a well-formed config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Cell radius as a fraction of `side / 6`, clamped to `[0, 1]`.
    pub radius_ratio: f32,
    /// Duration of the per-cell press animation.
    pub animation_duration_ms: u64,
    /// How the press animation scales the visual radius.
    pub scale_mode: ScaleMode,
    /// Peak scale factor of the press animation, clamped to `>= 0`.
    pub scale_rate: f32,
    /// Duration of the haptic pulse fired per accumulated cell.
    pub vibrate_duration_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            radius_ratio: 0.6,
            animation_duration_ms: 200,
            scale_mode: ScaleMode::Normal,
            scale_rate: 1.5,
            vibrate_duration_ms: 40,
        }
    }
}

impl TrackerConfig {
    /// Clamp out-of-range values into their legal ranges.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.radius_ratio = self.radius_ratio.clamp(0.0, 1.0);
        self.scale_rate = self.scale_rate.max(0.0);
        self
    }

    /// Reject configs that clamping cannot repair.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::InvalidConfig`] if any float field is not
    /// finite.
    pub fn validate(&self) -> LockResult<()> {
        if !self.radius_ratio.is_finite() {
            return Err(LockError::InvalidConfig(format!(
                "radius_ratio must be finite, got {}",
                self.radius_ratio
            )));
        }
        if !self.scale_rate.is_finite() {
            return Err(LockError::InvalidConfig(format!(
                "scale_rate must be finite, got {}",
                self.scale_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = TrackerConfig::default();
        assert!((config.radius_ratio - 0.6).abs() < f32::EPSILON);
        assert_eq!(config.animation_duration_ms, 200);
        assert_eq!(config.scale_mode, ScaleMode::Normal);
        assert!((config.scale_rate - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.vibrate_duration_ms, 40);
    }

    #[test]
    fn test_clamping() {
        let config = TrackerConfig {
            radius_ratio: 1.7,
            scale_rate: -2.0,
            ..TrackerConfig::default()
        }
        .clamped();
        assert!((config.radius_ratio - 1.0).abs() < f32::EPSILON);
        assert!(config.scale_rate.abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = TrackerConfig {
            radius_ratio: f32::NAN,
            ..TrackerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LockError::InvalidConfig(_))
        ));
        assert!(TrackerConfig::default().validate().is_ok());
    }
}
