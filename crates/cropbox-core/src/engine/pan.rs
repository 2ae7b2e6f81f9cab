//! Whole-box translation and auto-pan detection.

use super::event::{Direction, DirectionPair};
use crate::geometry::{Axis, CropBox, Edge, Rect};
use crate::handle::EdgeHandle;

/// Result of dragging the box body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    /// The snapshot moved by the capped delta.
    pub crop_box: CropBox,
    /// Auto-pan state for this sample.
    pub pan: DirectionPair,
}

/// Move `snapshot` by `(dx, dy)`, capped per axis so it stays in `viewport`.
///
/// On each axis, if the box ends up pinned against a viewport edge while
/// the uncapped drag overshoots that edge by more than `threshold`, the
/// axis reports the direction of that edge.
pub fn translate(
    snapshot: &CropBox,
    viewport: &Rect,
    (dx, dy): (f32, f32),
    threshold: f32,
) -> Translation {
    let cap_x = cap_delta(snapshot, viewport, Axis::X, dx);
    let cap_y = cap_delta(snapshot, viewport, Axis::Y, dy);

    let mut crop_box = *snapshot;
    crop_box.move_by(cap_x, cap_y);

    let pan = DirectionPair::new(
        pan_direction(&crop_box, viewport, Axis::X, dx - cap_x, threshold),
        pan_direction(&crop_box, viewport, Axis::Y, dy - cap_y, threshold),
    );

    Translation { crop_box, pan }
}

fn cap_delta(snapshot: &CropBox, viewport: &Rect, axis: Axis, delta: f32) -> f32 {
    let (lead, trail) = snapshot.rect().span(axis);
    let (lo, hi) = viewport.span(axis);
    delta.min(hi - trail).max(lo - lead)
}

fn pan_direction(
    moved: &CropBox,
    viewport: &Rect,
    axis: Axis,
    overshoot: f32,
    threshold: f32,
) -> Direction {
    let (lead, trail) = Edge::pair(axis);
    if overshoot < -threshold && EdgeHandle::of(lead, moved, viewport).is_pinned() {
        match axis {
            Axis::X => Direction::Left,
            Axis::Y => Direction::Top,
        }
    } else if overshoot > threshold && EdgeHandle::of(trail, moved, viewport).is_pinned() {
        match axis {
            Axis::X => Direction::Right,
            Axis::Y => Direction::Bottom,
        }
    } else {
        Direction::None
    }
}
