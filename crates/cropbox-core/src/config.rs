//! Tunable constants for the crop engine.

use crate::error::CropError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine configuration.
///
/// All distances are in view pixels. Missing fields fall back to their
/// defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Hit radius around corners and edges.
    pub touch_radius: f32,
    /// Upper cap for the box's minimum dimension.
    pub min_size: f32,
    /// Overshoot past a pinned edge before auto-pan engages.
    pub auto_pan_threshold: f32,
    /// Base auto-pan step, scaled by `max(1, zoom_level / 2)`.
    pub auto_pan_step: f32,
    /// Delay between repeated auto-pan ticks.
    pub auto_pan_interval_ms: u64,
    /// Delay before (and between) auto zoom-out requests.
    pub zoom_out_delay_ms: u64,
    /// Fraction of the viewport `scale_box` grows to (0.0 to 1.0).
    pub scale_fraction: f32,
    /// Box size fraction at or below which ending a gesture asks to zoom in.
    pub zoom_in_fraction: f32,
    /// No auto zoom-in at or above this zoom level.
    pub max_zoom_level: f32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            touch_radius: 48.0,
            min_size: 100.0,
            auto_pan_threshold: 20.0,
            auto_pan_step: 8.0,
            auto_pan_interval_ms: 16,
            zoom_out_delay_ms: 400,
            scale_fraction: 0.75,
            zoom_in_fraction: 0.5,
            max_zoom_level: 8.0,
        }
    }
}

impl CropConfig {
    /// Check every value is finite and in range.
    pub fn validate(&self) -> Result<(), CropError> {
        let positive = [
            ("touch_radius", self.touch_radius),
            ("min_size", self.min_size),
            ("auto_pan_step", self.auto_pan_step),
            ("max_zoom_level", self.max_zoom_level),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CropError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.auto_pan_threshold.is_finite() && self.auto_pan_threshold >= 0.0) {
            return Err(CropError::InvalidConfig(format!(
                "auto_pan_threshold must be non-negative, got {}",
                self.auto_pan_threshold
            )));
        }
        let fractions = [
            ("scale_fraction", self.scale_fraction),
            ("zoom_in_fraction", self.zoom_in_fraction),
        ];
        for (name, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(CropError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn auto_pan_interval(&self) -> Duration {
        Duration::from_millis(self.auto_pan_interval_ms)
    }

    pub fn zoom_out_delay(&self) -> Duration {
        Duration::from_millis(self.zoom_out_delay_ms)
    }
}
