//! Error types for the crop engine.

use thiserror::Error;

/// Errors raised while constructing engine inputs.
///
/// Geometry during a gesture never fails: every move is clamped into a
/// valid state before it is committed.
#[derive(Debug, Error, PartialEq)]
pub enum CropError {
    /// A ratio term is zero, negative or not finite.
    #[error("Invalid aspect ratio {x}:{y}")]
    InvalidAspectRatio { x: f32, y: f32 },

    /// The viewport is not finite or has no area.
    #[error("Invalid viewport ({left}, {top}, {right}, {bottom})")]
    InvalidViewport {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CropError::InvalidAspectRatio { x: 0.0, y: 1.0 };
        assert_eq!(err.to_string(), "Invalid aspect ratio 0:1");

        let err = CropError::InvalidConfig("touch_radius must be positive".into());
        assert!(err.to_string().contains("touch_radius"));
    }
}
