//! State of one drag gesture, from touch-down to release.

use super::event::DirectionPair;
use super::pan::{self, Translation};
use super::resize;
use crate::aspect_ratio::AspectRatio;
use crate::geometry::{CropBox, Point, Rect};
use crate::handle::HandlerType;

/// A gesture in progress.
///
/// The engine holds `Option<MoveSession>`: `None` while idle, `Some` while a
/// handle or the body is being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSession {
    handler: HandlerType,
    /// Raw touch-down point.
    touch: Point,
    /// Pointer reference: the grabbed handle's own coordinate at
    /// touch-down, or the touch point for a body drag.
    anchor: Point,
    /// The box as it was at touch-down.
    snapshot: CropBox,
    /// Last reported auto-pan state.
    pan: DirectionPair,
    /// Auto-pan step that went with `pan`.
    translate: f32,
}

impl MoveSession {
    /// Start dragging `handler` from `touch`.
    ///
    /// # Panics
    ///
    /// Panics if `handler` is `None`.
    pub fn begin(handler: HandlerType, touch: Point, crop_box: &CropBox) -> Self {
        let anchor = match handler {
            HandlerType::Box => touch,
            HandlerType::None => panic!("cannot start a move session without a handler"),
            _ => handler.position(crop_box, touch),
        };
        Self {
            handler,
            touch,
            anchor,
            snapshot: *crop_box,
            pan: DirectionPair::NONE,
            translate: 0.0,
        }
    }

    #[inline]
    pub fn handler(&self) -> HandlerType {
        self.handler
    }

    pub fn pan(&self) -> DirectionPair {
        self.pan
    }

    pub fn translate(&self) -> f32 {
        self.translate
    }

    pub(crate) fn set_pan(&mut self, pan: DirectionPair, translate: f32) {
        self.pan = pan;
        self.translate = translate;
    }

    /// Pointer movement since touch-down.
    pub fn drag_delta(&self, raw: Point) -> (f32, f32) {
        (raw.x - self.touch.x, raw.y - self.touch.y)
    }

    /// Where the grabbed handle should be for pointer sample `raw`.
    ///
    /// The handle keeps its offset from the finger, so touching a few
    /// pixels off an edge never snaps the edge under the finger.
    pub fn handle_target(&self, raw: Point) -> Point {
        let (dx, dy) = self.drag_delta(raw);
        Point::new(self.anchor.x + dx, self.anchor.y + dy)
    }

    /// Box resized for pointer sample `raw`.
    ///
    /// # Panics
    ///
    /// Panics if this session drags the body.
    pub fn resize(
        &self,
        crop_box: &CropBox,
        viewport: &Rect,
        ratio: AspectRatio,
        raw: Point,
    ) -> CropBox {
        resize::resize(
            crop_box,
            viewport,
            ratio,
            self.handler,
            self.handle_target(raw),
        )
    }

    /// Snapshot translated for pointer sample `raw`.
    pub fn translate_body(&self, viewport: &Rect, raw: Point, threshold: f32) -> Translation {
        pan::translate(&self.snapshot, viewport, self.drag_delta(raw), threshold)
    }
}
