//! Cropbox Core - interactive crop-box geometry engine
//!
//! This crate provides the geometry behind the photo editor's crop tool:
//! the crop box and its minimum-size constraint, aspect-ratio coupling,
//! handle hit-testing, and the move engine that resizes or drags the box
//! inside the visible image bounds.
//!
//! Rendering, gesture recognition and image cropping live elsewhere; they
//! read the box from [`CropMoveHandler::crop_box`] and react to the
//! [`EngineEvent`]s it returns.
//!
//! # Coordinate System
//!
//! - View pixels, origin at the top-left corner
//! - The viewport is the image's currently visible bounds

pub mod aspect_ratio;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod handle;

pub use aspect_ratio::{AspectRatio, Ratio};
pub use config::CropConfig;
pub use engine::{
    CropMoveHandler, Direction, DirectionPair, EngineEvent, MoveOutcome, MoveSession,
    PendingTimer, TimerKind, TimerToken,
};
pub use error::CropError;
pub use geometry::{Axis, CropBox, Edge, Point, Rect, Segment};
pub use handle::{EdgeHandle, HandlerType};
