//! Geometry primitives for the crop engine.
//!
//! All coordinates are in view pixels with the origin at the top-left
//! corner: x grows to the right, y grows downwards.

mod crop_box;

pub use crop_box::CropBox;

use crate::error::CropError;
use serde::{Deserialize, Serialize};

/// One of the two screen axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis (left/right edges).
    X,
    /// Vertical axis (top/bottom edges).
    Y,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// One of the four sides of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    /// Axis this edge moves along.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::X,
            Edge::Top | Edge::Bottom => Axis::Y,
        }
    }

    /// Right and bottom are the outer member of their axis pair.
    #[inline]
    pub fn is_outer(self) -> bool {
        matches!(self, Edge::Right | Edge::Bottom)
    }

    /// Sign of a coordinate change that moves this edge away from the
    /// box center.
    #[inline]
    pub fn outward(self) -> f32 {
        if self.is_outer() {
            1.0
        } else {
            -1.0
        }
    }

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Left => Edge::Right,
            Edge::Top => Edge::Bottom,
            Edge::Right => Edge::Left,
            Edge::Bottom => Edge::Top,
        }
    }

    /// The leading (`Left`/`Top`) and trailing edge of `axis`.
    pub fn pair(axis: Axis) -> (Edge, Edge) {
        match axis {
            Axis::X => (Edge::Left, Edge::Right),
            Axis::Y => (Edge::Top, Edge::Bottom),
        }
    }
}

/// A point in view coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A line segment between two points, used for the four box edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether `p` lies within `radius` of this axis-aligned segment.
    ///
    /// The perpendicular distance must be within `radius` and the point
    /// must project onto the segment's span (inclusive).
    pub fn is_near(&self, p: Point, radius: f32) -> bool {
        if self.start.y == self.end.y {
            let (lo, hi) = ordered(self.start.x, self.end.x);
            (p.y - self.start.y).abs() <= radius && p.x >= lo && p.x <= hi
        } else {
            let (lo, hi) = ordered(self.start.y, self.end.y);
            (p.x - self.start.x).abs() <= radius && p.y >= lo && p.y <= hi
        }
    }
}

#[inline]
fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An axis-aligned rectangle given by its four edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Create a rectangle and check that it can serve as a viewport:
    /// finite edges and a strictly positive width and height.
    pub fn validated(left: f32, top: f32, right: f32, bottom: f32) -> Result<Self, CropError> {
        let rect = Self::new(left, top, right, bottom);
        if !rect.is_finite() || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Err(CropError::InvalidViewport {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(rect)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Value of one edge.
    #[inline]
    pub fn edge(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    /// The `(leading, trailing)` edge values along `axis`.
    #[inline]
    pub fn span(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::X => (self.left, self.right),
            Axis::Y => (self.top, self.bottom),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Whether `other` lies entirely within this rectangle (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Move every edge inward by `(dx, dy)`; negative values inflate.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right - dx,
            self.bottom - dy,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }
}

/// Offset that brings the span `[lead, trail]` inside `[lo, hi]`.
///
/// If the leading edge is past `lo` the span is shifted to align with
/// `lo`; otherwise if the trailing edge is past `hi` it aligns with `hi`.
/// Returns zero when the span already fits. A span longer than the range
/// is centered on it.
pub fn axis_fit(lead: f32, trail: f32, lo: f32, hi: f32) -> f32 {
    if trail - lead > hi - lo {
        (lo + hi) / 2.0 - (lead + trail) / 2.0
    } else if lead < lo {
        lo - lead
    } else if trail > hi {
        hi - trail
    } else {
        0.0
    }
}
