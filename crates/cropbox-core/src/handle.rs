//! Interaction targets on the crop box and their legal ranges.

use crate::geometry::{Axis, CropBox, Edge, Point, Rect};
use serde::{Deserialize, Serialize};

/// What a gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerType {
    Top,
    Right,
    Bottom,
    Left,
    LeftTop,
    RightTop,
    RightBottom,
    LeftBottom,
    /// The body of the box, moved as a whole.
    Box,
    /// No handle engaged.
    #[default]
    None,
}

impl HandlerType {
    /// Corners in hit-test priority order.
    pub const CORNERS: [HandlerType; 4] = [
        HandlerType::LeftTop,
        HandlerType::RightTop,
        HandlerType::RightBottom,
        HandlerType::LeftBottom,
    ];

    /// Edges in hit-test priority order.
    pub const EDGES: [HandlerType; 4] = [
        HandlerType::Top,
        HandlerType::Right,
        HandlerType::Bottom,
        HandlerType::Left,
    ];

    pub fn is_edge(self) -> bool {
        Self::EDGES.contains(&self)
    }

    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Whether this handler resizes the box (an edge or a corner).
    pub fn is_resize(self) -> bool {
        self.is_edge() || self.is_corner()
    }

    /// The `(horizontal-axis, vertical-axis)` edges this handler drags.
    ///
    /// # Panics
    ///
    /// Panics for `Box` and `None`, which drag no single edge.
    pub fn edges(self) -> (Option<Edge>, Option<Edge>) {
        match self {
            HandlerType::Top => (None, Some(Edge::Top)),
            HandlerType::Right => (Some(Edge::Right), None),
            HandlerType::Bottom => (None, Some(Edge::Bottom)),
            HandlerType::Left => (Some(Edge::Left), None),
            HandlerType::LeftTop => (Some(Edge::Left), Some(Edge::Top)),
            HandlerType::RightTop => (Some(Edge::Right), Some(Edge::Top)),
            HandlerType::RightBottom => (Some(Edge::Right), Some(Edge::Bottom)),
            HandlerType::LeftBottom => (Some(Edge::Left), Some(Edge::Bottom)),
            HandlerType::Box | HandlerType::None => {
                panic!("handler {:?} has no edges", self)
            }
        }
    }

    /// Where this handle currently sits on `crop_box`.
    ///
    /// Edges report their coordinate on their own axis and take the other
    /// component from `touch`, so seeding from it never moves the pointer
    /// along the edge.
    ///
    /// # Panics
    ///
    /// Panics for `Box` and `None`.
    pub fn position(self, crop_box: &CropBox, touch: Point) -> Point {
        match self.edges() {
            (Some(h), Some(v)) => Point::new(crop_box.edge(h), crop_box.edge(v)),
            (Some(h), None) => Point::new(crop_box.edge(h), touch.y),
            (None, Some(v)) => Point::new(touch.x, crop_box.edge(v)),
            (None, None) => unreachable!("every resize handler drags at least one edge"),
        }
    }

    /// Whether this handler drags `edge`.
    pub fn drags(self, edge: Edge) -> bool {
        if !self.is_resize() {
            return false;
        }
        let (h, v) = self.edges();
        h == Some(edge) || v == Some(edge)
    }
}

/// Read-only projection of one box edge and the range it may move in.
///
/// Built on demand from a box and the viewport; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHandle {
    pub edge: Edge,
    /// Current coordinate.
    pub value: f32,
    /// Viewport edge on the same side.
    pub outer: f32,
    /// Furthest the edge may travel toward its opposite edge.
    pub inner: f32,
    /// Furthest the edge may travel when both edges of its axis shrink
    /// symmetrically.
    pub center: f32,
}

impl EdgeHandle {
    pub fn of(edge: Edge, crop_box: &CropBox, viewport: &Rect) -> Self {
        let inner_bound = crop_box.inner_bound();
        let center_bound = crop_box.center_bound();
        Self {
            edge,
            value: crop_box.edge(edge),
            outer: viewport.edge(edge),
            inner: inner_bound.edge(edge.opposite()),
            center: center_bound.edge(edge),
        }
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.edge.axis()
    }

    #[inline]
    pub fn is_outer(&self) -> bool {
        self.edge.is_outer()
    }

    /// Legal outward growth against the inner bound: `(shrink_limit, grow_limit)`.
    ///
    /// Growth is measured away from the box center, so shrinking is negative.
    pub fn growth_range(&self) -> (f32, f32) {
        let sign = self.edge.outward();
        (sign * (self.inner - self.value), sign * (self.outer - self.value))
    }

    /// Legal outward growth against the center bound.
    pub fn symmetric_growth_range(&self) -> (f32, f32) {
        let sign = self.edge.outward();
        (
            sign * (self.center - self.value),
            sign * (self.outer - self.value),
        )
    }

    /// Clamp a requested move of this edge to `requested`.
    ///
    /// Returns the coordinate delta: `requested - value` when the request
    /// lies in range, otherwise the delta to whichever bound was exceeded.
    pub fn delta_to(&self, requested: f32) -> f32 {
        let growth = self.edge.outward() * (requested - self.value);
        self.edge.outward() * clamp_growth(growth, self.growth_range())
    }

    /// Clamp a requested outward growth of this edge while its opposite
    /// edge mirrors it.
    pub fn clamp_symmetric(&self, growth: f32) -> f32 {
        clamp_growth(growth, self.symmetric_growth_range())
    }

    /// Whether the edge sits on (or past) the viewport edge.
    pub fn is_pinned(&self) -> bool {
        self.edge.outward() * (self.value - self.outer) >= -PIN_EPSILON
    }
}

const PIN_EPSILON: f32 = 1e-3;

/// Clamp `growth` into `(lo, hi)`, with the shrink limit taking priority
/// if the range is inverted (box already outside the viewport).
#[inline]
pub(crate) fn clamp_growth(growth: f32, (lo, hi): (f32, f32)) -> f32 {
    growth.min(hi).max(lo)
}
