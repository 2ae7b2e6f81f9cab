//! Events the engine hands back to the viewport layer.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Auto-pan direction along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    None,
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    /// Sign of the coordinate change in this direction.
    pub fn sign(self) -> f32 {
        match self {
            Direction::None => 0.0,
            Direction::Left | Direction::Top => -1.0,
            Direction::Right | Direction::Bottom => 1.0,
        }
    }
}

/// One direction per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionPair {
    /// `Left`, `Right` or `None`.
    pub x: Direction,
    /// `Top`, `Bottom` or `None`.
    pub y: Direction,
}

impl DirectionPair {
    pub const NONE: DirectionPair = DirectionPair {
        x: Direction::None,
        y: Direction::None,
    };

    pub fn new(x: Direction, y: Direction) -> Self {
        Self { x, y }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Something the viewport controller should react to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// The box is pinned against the viewport while the drag keeps pushing.
    ///
    /// `direction` of `NONE` (with zero deltas) cancels auto-pan.
    BoundsHit {
        delta_x: f32,
        delta_y: f32,
        direction: DirectionPair,
    },
    /// Zoom around `center`, out if `zoom_out` else in.
    ZoomRequested { center: Point, zoom_out: bool },
}

impl EngineEvent {
    /// Bounds-hit event for `direction` stepping `translate` pixels per axis.
    pub fn bounds_hit(direction: DirectionPair, translate: f32) -> Self {
        EngineEvent::BoundsHit {
            delta_x: direction.x.sign() * translate,
            delta_y: direction.y.sign() * translate,
            direction,
        }
    }
}
