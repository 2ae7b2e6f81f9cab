//! The crop box: a mutable rectangle with a minimum-dimension constraint.

use super::{Edge, Point, Rect, Segment};
use crate::aspect_ratio::AspectRatio;
use serde::{Deserialize, Serialize};

/// The interactive crop rectangle.
///
/// `min_dimens` is fixed at creation and bounds how close two opposing
/// edges may get. Mutation methods return `&mut Self` so calls can be
/// chained; snapshots are plain copies (`CropBox` is `Copy`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropBox {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    min_dimens: f32,
}

impl CropBox {
    /// Create a box covering `rect` with the given minimum dimension.
    pub fn new(rect: Rect, min_dimens: f32) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
            min_dimens,
        }
    }

    /// The largest box inside `viewport` that honors `ratio`, centered.
    ///
    /// `Free` and `Original` fill the whole viewport. For a fixed ratio the
    /// candidate size is projected from the smaller viewport dimension and
    /// shrunk to the other dimension if the projection overflows it.
    ///
    /// The minimum dimension is a quarter of the smaller viewport side,
    /// capped at `min_size_hint` and never larger than the box itself.
    pub fn from(viewport: &Rect, ratio: AspectRatio, min_size_hint: f32) -> Self {
        let vw = viewport.width();
        let vh = viewport.height();

        let (width, height) = match ratio {
            AspectRatio::Free | AspectRatio::Original(_) => (vw, vh),
            AspectRatio::Fixed(_) => {
                if vw <= vh {
                    let height = ratio.vertical_for(vw);
                    if height > vh {
                        (ratio.horizontal_for(vh), vh)
                    } else {
                        (vw, height)
                    }
                } else {
                    let width = ratio.horizontal_for(vh);
                    if width > vw {
                        (vw, ratio.vertical_for(vw))
                    } else {
                        (width, vh)
                    }
                }
            }
        };

        let center = viewport.center();
        let rect = Rect::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            center.x + width / 2.0,
            center.y + height / 2.0,
        );
        let min_dimens = (vw.min(vh) / 4.0)
            .min(min_size_hint)
            .min(width)
            .min(height);
        Self::new(rect, min_dimens)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    #[inline]
    pub fn min_dimens(&self) -> f32 {
        self.min_dimens
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
        self.rect().center()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    #[inline]
    pub fn edge(&self, edge: Edge) -> f32 {
        self.rect().edge(edge)
    }

    pub(crate) fn set_edge(&mut self, edge: Edge, value: f32) {
        match edge {
            Edge::Left => self.left = value,
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
        }
    }

    pub fn left_top(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn right_top(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn right_bottom(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    pub fn left_bottom(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    pub fn top_edge(&self) -> Segment {
        Segment::new(self.left_top(), self.right_top())
    }

    pub fn right_edge(&self) -> Segment {
        Segment::new(self.right_top(), self.right_bottom())
    }

    pub fn bottom_edge(&self) -> Segment {
        Segment::new(self.left_bottom(), self.right_bottom())
    }

    pub fn left_edge(&self) -> Segment {
        Segment::new(self.left_top(), self.left_bottom())
    }

    /// Square of side `min_dimens` around the center.
    ///
    /// Two opposing edges shrinking symmetrically stop at this rectangle.
    pub fn center_bound(&self) -> Rect {
        let c = self.center();
        let half = self.min_dimens / 2.0;
        Rect::new(c.x - half, c.y - half, c.x + half, c.y + half)
    }

    /// Each edge moved inward by `min_dimens`.
    ///
    /// `inner_bound().right` is the furthest the left edge may travel, and
    /// likewise for the other sides.
    pub fn inner_bound(&self) -> Rect {
        self.rect().inset(self.min_dimens, self.min_dimens)
    }

    /// Translate all four edges.
    pub fn move_by(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.left += dx;
        self.right += dx;
        self.top += dy;
        self.bottom += dy;
        self
    }

    /// Resize symmetrically around the current center.
    pub fn grow_to(&mut self, width: f32, height: f32) -> &mut Self {
        let dx = (width - self.width()) / 2.0;
        let dy = (height - self.height()) / 2.0;
        self.left -= dx;
        self.right += dx;
        self.top -= dy;
        self.bottom += dy;
        self
    }

    /// Pull every edge inward: left/top by `(dx, dy)` towards the
    /// center, right/bottom by the same amount.
    pub fn shrink(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.left += dx;
        self.right -= dx;
        self.top += dy;
        self.bottom -= dy;
        self
    }

    /// Inclusive hit test.
    pub fn is_within(&self, x: f32, y: f32) -> bool {
        self.rect().contains(x, y)
    }

    /// Whether both dimensions respect `min_dimens`, with a small tolerance
    /// for accumulated float error.
    pub fn meets_min_dimens(&self) -> bool {
        let tolerance = self.min_dimens * 1e-4;
        self.width() + tolerance >= self.min_dimens && self.height() + tolerance >= self.min_dimens
    }

    /// The box in `0..1` coordinates of `image`, the form the save
    /// pipeline crops with.
    pub fn normalized_in(&self, image: &Rect) -> Rect {
        let w = image.width();
        let h = image.height();
        if w <= 0.0 || h <= 0.0 {
            return Rect::new(0.0, 0.0, 1.0, 1.0);
        }
        Rect::new(
            ((self.left - image.left) / w).clamp(0.0, 1.0),
            ((self.top - image.top) / h).clamp(0.0, 1.0),
            ((self.right - image.left) / w).clamp(0.0, 1.0),
            ((self.bottom - image.top) / h).clamp(0.0, 1.0),
        )
    }
}
