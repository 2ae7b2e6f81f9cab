//! Resize math for edge and corner handles.
//!
//! Every function works on a copy of the box and returns the resized box,
//! so a caller only ever commits a fully clamped result.
//!
//! Deltas are expressed as outward *growth*: positive moves an edge away
//! from the box center, negative pulls it in. That makes the four edges
//! symmetric and the ratio conversion sign-free.

use crate::aspect_ratio::AspectRatio;
use crate::geometry::{Axis, CropBox, Edge, Point, Rect};
use crate::handle::{clamp_growth, EdgeHandle, HandlerType};

/// Of two candidate deltas, the one closest to zero. Ties keep `a`.
#[inline]
pub(crate) fn min_magnitude(a: f32, b: f32) -> f32 {
    if a.abs() <= b.abs() {
        a
    } else {
        b
    }
}

/// Growth on the cross axis matching `growth` on `axis`.
#[inline]
fn to_cross(ratio: AspectRatio, axis: Axis, growth: f32) -> f32 {
    match axis {
        Axis::X => ratio.vertical_for(growth),
        Axis::Y => ratio.horizontal_for(growth),
    }
}

/// Growth on `axis` matching `cross` growth on the cross axis.
#[inline]
fn from_cross(ratio: AspectRatio, axis: Axis, cross: f32) -> f32 {
    match axis {
        Axis::X => ratio.horizontal_for(cross),
        Axis::Y => ratio.vertical_for(cross),
    }
}

fn grow_edge(crop_box: &mut CropBox, edge: Edge, growth: f32) {
    let value = crop_box.edge(edge) + edge.outward() * growth;
    crop_box.set_edge(edge, value);
}

/// Resize `handler` so its handle follows `pointer`.
///
/// # Panics
///
/// Panics if `handler` is `Box` or `None`.
pub(crate) fn resize(
    crop_box: &CropBox,
    viewport: &Rect,
    ratio: AspectRatio,
    handler: HandlerType,
    pointer: Point,
) -> CropBox {
    match handler.edges() {
        (Some(h), Some(v)) => resize_corner(crop_box, viewport, ratio, (h, v), pointer),
        (Some(h), None) => resize_edge(crop_box, viewport, ratio, h, pointer.x),
        (None, Some(v)) => resize_edge(crop_box, viewport, ratio, v, pointer.y),
        (None, None) => unreachable!("every resize handler drags at least one edge"),
    }
}

/// Move a single edge toward `requested`.
///
/// Under a fixed ratio the two edges of the cross axis follow
/// symmetrically, each by half the matching cross-axis growth. Each
/// dependent edge is clamped against its own outer and center bound and
/// the most restrictive result, mapped back through the ratio, limits the
/// driving edge.
pub(crate) fn resize_edge(
    crop_box: &CropBox,
    viewport: &Rect,
    ratio: AspectRatio,
    edge: Edge,
    requested: f32,
) -> CropBox {
    let mut out = *crop_box;
    let handle = EdgeHandle::of(edge, crop_box, viewport);
    let delta = handle.delta_to(requested);

    if ratio.is_free() {
        out.set_edge(edge, handle.value + delta);
        return out;
    }

    let axis = edge.axis();
    let mut growth = edge.outward() * delta;
    let (lead, trail) = Edge::pair(axis.cross());
    let half = to_cross(ratio, axis, growth) / 2.0;
    for dependent in [lead, trail] {
        let allowed = EdgeHandle::of(dependent, crop_box, viewport).clamp_symmetric(half);
        growth = min_magnitude(growth, from_cross(ratio, axis, allowed * 2.0));
    }

    let half = to_cross(ratio, axis, growth) / 2.0;
    grow_edge(&mut out, edge, growth);
    grow_edge(&mut out, lead, half);
    grow_edge(&mut out, trail, half);
    out
}

/// Move a corner toward `pointer`.
///
/// Free ratio: both edges follow independently. Fixed ratio: the smaller
/// of the two requested growths (the vertical one mapped to horizontal
/// units) drives both axes, and the projected result is clamped again
/// against each edge's true range since the projection can overshoot.
pub(crate) fn resize_corner(
    crop_box: &CropBox,
    viewport: &Rect,
    ratio: AspectRatio,
    (h_edge, v_edge): (Edge, Edge),
    pointer: Point,
) -> CropBox {
    let mut out = *crop_box;
    let hx = EdgeHandle::of(h_edge, crop_box, viewport);
    let hy = EdgeHandle::of(v_edge, crop_box, viewport);

    if ratio.is_free() {
        out.set_edge(h_edge, hx.value + hx.delta_to(pointer.x));
        out.set_edge(v_edge, hy.value + hy.delta_to(pointer.y));
        return out;
    }

    let gx = h_edge.outward() * (pointer.x - hx.value);
    let gy = v_edge.outward() * (pointer.y - hy.value);
    let driving = gx.min(ratio.horizontal_for(gy));

    let clamped_x = clamp_growth(driving, hx.growth_range());
    let clamped_y = clamp_growth(ratio.vertical_for(driving), hy.growth_range());
    let growth_x = min_magnitude(clamped_x, ratio.horizontal_for(clamped_y));
    let growth_y = ratio.vertical_for(growth_x);

    grow_edge(&mut out, h_edge, growth_x);
    grow_edge(&mut out, v_edge, growth_y);
    out
}
