//! Aspect-ratio policy for the crop box.
//!
//! A fixed ratio couples the two axes: every horizontal change has a
//! matching vertical change. The free ratio leaves the axes independent and
//! both conversion functions become the identity.

use crate::error::CropError;
use serde::{Deserialize, Serialize};

/// A positive `x:y` ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    x: f32,
    y: f32,
}

impl Ratio {
    /// Create a ratio, rejecting zero, negative and non-finite terms.
    pub fn new(x: f32, y: f32) -> Result<Self, CropError> {
        if !(x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0) {
            return Err(CropError::InvalidAspectRatio { x, y });
        }
        Ok(Self { x, y })
    }

    const fn preset(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }
}

/// The aspect-ratio constraint applied while resizing the crop box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AspectRatio {
    /// No coupling between width and height.
    #[default]
    Free,
    /// Locked to the source image's own proportions.
    Original(Ratio),
    /// A preset or user-chosen ratio.
    Fixed(Ratio),
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio::Fixed(Ratio::preset(1.0, 1.0));
    pub const LANDSCAPE_4_3: AspectRatio = AspectRatio::Fixed(Ratio::preset(4.0, 3.0));
    pub const PORTRAIT_3_4: AspectRatio = AspectRatio::Fixed(Ratio::preset(3.0, 4.0));
    pub const LANDSCAPE_3_2: AspectRatio = AspectRatio::Fixed(Ratio::preset(3.0, 2.0));
    pub const PORTRAIT_2_3: AspectRatio = AspectRatio::Fixed(Ratio::preset(2.0, 3.0));
    pub const WIDE_16_9: AspectRatio = AspectRatio::Fixed(Ratio::preset(16.0, 9.0));
    pub const TALL_9_16: AspectRatio = AspectRatio::Fixed(Ratio::preset(9.0, 16.0));

    /// Fixed ratios offered by the ratio picker, in display order.
    pub const PRESETS: [AspectRatio; 7] = [
        Self::SQUARE,
        Self::LANDSCAPE_4_3,
        Self::PORTRAIT_3_4,
        Self::LANDSCAPE_3_2,
        Self::PORTRAIT_2_3,
        Self::WIDE_16_9,
        Self::TALL_9_16,
    ];

    /// A fixed `x:y` ratio.
    pub fn fixed(x: f32, y: f32) -> Result<Self, CropError> {
        Ratio::new(x, y).map(AspectRatio::Fixed)
    }

    /// The ratio of the source image.
    pub fn original(image_width: f32, image_height: f32) -> Result<Self, CropError> {
        Ratio::new(image_width, image_height).map(AspectRatio::Original)
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self, AspectRatio::Free)
    }

    /// The coupling ratio, `None` when free.
    pub fn ratio(&self) -> Option<Ratio> {
        match self {
            AspectRatio::Free => None,
            AspectRatio::Original(r) | AspectRatio::Fixed(r) => Some(*r),
        }
    }

    /// Vertical change matching a horizontal change of `horizontal`.
    #[inline]
    pub fn vertical_for(&self, horizontal: f32) -> f32 {
        match self.ratio() {
            None => horizontal,
            Some(r) => horizontal * r.y / r.x,
        }
    }

    /// Horizontal change matching a vertical change of `vertical`.
    #[inline]
    pub fn horizontal_for(&self, vertical: f32) -> f32 {
        match self.ratio() {
            None => vertical,
            Some(r) => vertical * r.x / r.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_is_identity() {
        let free = AspectRatio::Free;
        assert_eq!(free.vertical_for(42.0), 42.0);
        assert_eq!(free.horizontal_for(-7.5), -7.5);
        assert!(free.is_free());
        assert!(free.ratio().is_none());
    }

    #[test]
    fn test_fixed_conversion() {
        let r = AspectRatio::fixed(4.0, 3.0).unwrap();
        assert!((r.vertical_for(400.0) - 300.0).abs() < 1e-4);
        assert!((r.horizontal_for(300.0) - 400.0).abs() < 1e-4);
        assert!(!r.is_free());
    }

    #[test]
    fn test_conversions_are_inverse() {
        for ratio in AspectRatio::PRESETS {
            let v = ratio.vertical_for(123.0);
            assert!((ratio.horizontal_for(v) - 123.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_original_uses_image_size() {
        let r = AspectRatio::original(6000.0, 4000.0).unwrap();
        assert!(matches!(r, AspectRatio::Original(_)));
        assert!((r.vertical_for(300.0) - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        assert!(Ratio::new(0.0, 1.0).is_err());
        assert!(Ratio::new(1.0, -3.0).is_err());
        assert!(Ratio::new(f32::INFINITY, 1.0).is_err());
        assert!(AspectRatio::original(0.0, 100.0).is_err());
    }

    #[test]
    fn test_default_is_free() {
        assert_eq!(AspectRatio::default(), AspectRatio::Free);
    }
}
