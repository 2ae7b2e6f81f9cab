//! The crop move engine.
//!
//! `CropMoveHandler` owns the crop box and the viewport it must stay in,
//! and turns pointer samples into box updates:
//!
//! - `start_move` hit-tests corners, then edges, then the body
//! - `on_move` resizes or translates, clamped before anything is committed
//! - `end_move` / `cancel` close the gesture
//!
//! Events for the viewport controller (auto-pan, zoom requests) are returned
//! from the call that produced them. Delayed repeats go through a single
//! timer slot the host fires via `on_timer`.

mod event;
mod pan;
mod resize;
mod session;
mod timer;

pub use event::{Direction, DirectionPair, EngineEvent};
pub use pan::Translation;
pub use session::MoveSession;
pub use timer::{PendingTimer, TimerKind, TimerToken};

use crate::aspect_ratio::AspectRatio;
use crate::config::CropConfig;
use crate::error::CropError;
use crate::geometry::{axis_fit, CropBox, Edge, Point, Rect};
use crate::handle::{EdgeHandle, HandlerType};
use serde::Serialize;
use timer::TimerSlot;
use tracing::{debug, trace, warn};

/// Outcome of one pointer sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoveOutcome {
    /// The box changed and should be redrawn.
    pub changed: bool,
    pub events: Vec<EngineEvent>,
}

/// Drives the crop box from pointer input.
#[derive(Debug)]
pub struct CropMoveHandler {
    config: CropConfig,
    viewport: Rect,
    crop_box: CropBox,
    aspect_ratio: AspectRatio,
    zoom_level: f32,
    session: Option<MoveSession>,
    timer: TimerSlot,
}

impl CropMoveHandler {
    /// Create an engine whose box fills `viewport` under `aspect_ratio`.
    pub fn new(
        viewport: Rect,
        aspect_ratio: AspectRatio,
        config: CropConfig,
    ) -> Result<Self, CropError> {
        config.validate()?;
        let viewport = Rect::validated(viewport.left, viewport.top, viewport.right, viewport.bottom)?;
        let crop_box = CropBox::from(&viewport, aspect_ratio, config.min_size);
        debug!(?viewport, ?aspect_ratio, "crop engine created");
        Ok(Self {
            config,
            viewport,
            crop_box,
            aspect_ratio,
            zoom_level: 1.0,
            session: None,
            timer: TimerSlot::default(),
        })
    }

    /// The live box. Read it to draw; mutate only through the engine.
    pub fn crop_box(&self) -> &CropBox {
        &self.crop_box
    }

    /// Visible image bounds all clamping is done against.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Current magnification, `1.0` when the image fits the view.
    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Whether a gesture is in progress.
    pub fn is_moving(&self) -> bool {
        self.session.is_some()
    }

    /// The handle being dragged, `None` while idle.
    pub fn active_handler(&self) -> HandlerType {
        self.session
            .as_ref()
            .map_or(HandlerType::None, MoveSession::handler)
    }

    /// The gesture in progress, if any.
    pub fn session(&self) -> Option<&MoveSession> {
        self.session.as_ref()
    }

    /// The timer the host should fire next, if any.
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.timer.pending()
    }

    /// Change the ratio. Cancels any gesture and rebuilds the box.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.cancel();
        self.aspect_ratio = aspect_ratio;
        self.reset();
    }

    /// Kept in sync by the viewport controller.
    ///
    /// Non-finite and non-positive levels are ignored.
    pub fn set_zoom_level(&mut self, zoom_level: f32) {
        if !(zoom_level.is_finite() && zoom_level > 0.0) {
            warn!(zoom_level, "ignoring invalid zoom level");
            return;
        }
        self.zoom_level = zoom_level;
    }

    /// Rebuild the box as the largest one fitting the viewport.
    pub fn reset(&mut self) {
        self.crop_box = CropBox::from(&self.viewport, self.aspect_ratio, self.config.min_size);
        debug!(crop = ?self.crop_box.rect(), "crop box reset");
    }

    /// Replace the box edges, e.g. when restoring a saved crop.
    ///
    /// Cancels any gesture. Under a fixed ratio the longer side is trimmed
    /// around the center to match it. The rectangle is then grown to the
    /// minimum dimension if needed and fitted into the viewport.
    pub fn set_crop_rect(&mut self, rect: Rect) -> Rect {
        self.cancel();
        let min = self.crop_box.min_dimens();
        let (width, height) = fit_ratio(
            self.aspect_ratio,
            rect.width().max(min),
            rect.height().max(min),
        );
        let (width, height) = at_least(width, height, min);
        let mut crop_box = CropBox::new(rect, min);
        crop_box.grow_to(width, height);
        self.crop_box = crop_box;
        self.update_border()
    }

    /// Use `viewport` for all later bound checks.
    pub fn update_bounds(&mut self, viewport: Rect) -> Result<(), CropError> {
        self.viewport =
            Rect::validated(viewport.left, viewport.top, viewport.right, viewport.bottom)?;
        trace!(viewport = ?self.viewport, "bounds updated");
        Ok(())
    }

    /// What a touch at `(x, y)` would grab.
    ///
    /// Corners win over edges, and edges over the body.
    pub fn hit_test(&self, x: f32, y: f32) -> HandlerType {
        let p = Point::new(x, y);
        let radius = self.config.touch_radius;
        let b = &self.crop_box;

        let corners = [b.left_top(), b.right_top(), b.right_bottom(), b.left_bottom()];
        for (handler, corner) in HandlerType::CORNERS.into_iter().zip(corners) {
            if p.distance_to(corner) <= radius {
                return handler;
            }
        }

        let edges = [b.top_edge(), b.right_edge(), b.bottom_edge(), b.left_edge()];
        for (handler, edge) in HandlerType::EDGES.into_iter().zip(edges) {
            if edge.is_near(p, radius) {
                return handler;
            }
        }

        if b.is_within(x, y) {
            HandlerType::Box
        } else {
            HandlerType::None
        }
    }

    /// Begin a gesture at `(x, y)`. Returns false if nothing was hit.
    pub fn start_move(&mut self, x: f32, y: f32) -> bool {
        self.cancel();
        let handler = self.hit_test(x, y);
        if handler == HandlerType::None {
            return false;
        }
        self.session = Some(MoveSession::begin(
            handler,
            Point::new(x, y),
            &self.crop_box,
        ));
        debug!(?handler, x, y, "move started");
        true
    }

    /// Feed a pointer sample. A no-op while idle.
    pub fn on_move(&mut self, x: f32, y: f32) -> MoveOutcome {
        let Some(mut session) = self.session.take() else {
            return MoveOutcome::default();
        };
        let raw = Point::new(x, y);
        let mut events = Vec::new();

        let updated = match session.handler() {
            HandlerType::Box => {
                let t = session.translate_body(&self.viewport, raw, self.config.auto_pan_threshold);
                if t.pan != session.pan() {
                    let translate = self.auto_pan_translate();
                    session.set_pan(t.pan, translate);
                    events.push(self.bounds_hit(&session));
                    if t.pan.is_none() {
                        self.timer.clear_kind(TimerKind::AutoPan);
                    } else {
                        self.timer
                            .schedule(TimerKind::AutoPan, self.config.auto_pan_interval());
                    }
                }
                t.crop_box
            }
            _ => {
                let resized =
                    session.resize(&self.crop_box, &self.viewport, self.aspect_ratio, raw);
                self.update_zoom_out(&session, &resized, raw);
                resized
            }
        };

        let changed = updated != self.crop_box;
        if changed {
            trace!(handler = ?session.handler(), crop = ?updated.rect(), "box moved");
            self.crop_box = updated;
        }
        self.session = Some(session);
        MoveOutcome { changed, events }
    }

    /// Finish the gesture.
    ///
    /// Requests a zoom-in around the box when it ended up at most
    /// `zoom_in_fraction` of the viewport on both axes.
    pub fn end_move(&mut self) -> Vec<EngineEvent> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        self.timer.clear();
        debug!(handler = ?session.handler(), crop = ?self.crop_box.rect(), "move ended");

        let fraction = self.config.zoom_in_fraction;
        let small = self.crop_box.width() <= self.viewport.width() * fraction
            && self.crop_box.height() <= self.viewport.height() * fraction;
        if small && self.zoom_level < self.config.max_zoom_level {
            let event = EngineEvent::ZoomRequested {
                center: self.crop_box.center(),
                zoom_out: false,
            };
            debug!(?event, "auto zoom-in");
            return vec![event];
        }
        Vec::new()
    }

    /// Abort the gesture without evaluating auto zoom-in.
    pub fn cancel(&mut self) {
        self.timer.clear();
        if let Some(session) = self.session.take() {
            debug!(handler = ?session.handler(), "move cancelled");
        }
    }

    /// Fire the pending timer. Stale tokens are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> Vec<EngineEvent> {
        let Some(kind) = self.timer.fire(token) else {
            trace!(?token, "stale timer ignored");
            return Vec::new();
        };
        let Some(session) = self.session else {
            return Vec::new();
        };

        match kind {
            TimerKind::AutoPan if !session.pan().is_none() => {
                self.timer
                    .schedule(TimerKind::AutoPan, self.config.auto_pan_interval());
                vec![self.bounds_hit(&session)]
            }
            TimerKind::ZoomOut if self.zoom_level > 1.0 => {
                self.timer
                    .schedule(TimerKind::ZoomOut, self.config.zoom_out_delay());
                let event = EngineEvent::ZoomRequested {
                    center: self.crop_box.center(),
                    zoom_out: true,
                };
                debug!(?event, "auto zoom-out");
                vec![event]
            }
            _ => Vec::new(),
        }
    }

    /// Grow the box to `scale_fraction` of the viewport and keep it inside.
    ///
    /// Used right after a zoom-in, when the box has become small relative
    /// to the new viewport. A fixed ratio is honored by limiting on
    /// whichever axis reaches the fraction first.
    pub fn scale_box(&mut self) -> Rect {
        let fraction = self.config.scale_fraction;
        let max_w = self.viewport.width() * fraction;
        let max_h = self.viewport.height() * fraction;
        let (width, height) = if self.aspect_ratio.is_free() {
            (max_w, max_h)
        } else {
            let height = self.aspect_ratio.vertical_for(max_w);
            if height > max_h {
                (self.aspect_ratio.horizontal_for(max_h), max_h)
            } else {
                (max_w, height)
            }
        };

        self.crop_box.grow_to(width, height);
        let rect = self.fit_translation();
        debug!(crop = ?rect, "box scaled");
        rect
    }

    /// Reconcile the box with a changed viewport.
    ///
    /// A box that still fits is only translated back inside. An oversized
    /// box is first shrunk around its center (keeping its proportions under
    /// a fixed ratio) and then translated.
    ///
    /// The box never shrinks below `min_dimens`. On a viewport narrower
    /// than that, the box overhangs it and is centered on that axis.
    pub fn update_border(&mut self) -> Rect {
        let vw = self.viewport.width();
        let vh = self.viewport.height();
        let w = self.crop_box.width();
        let h = self.crop_box.height();
        let min = self.crop_box.min_dimens();

        if w > vw || h > vh {
            let (new_w, new_h) = if self.aspect_ratio.is_free() {
                (w.min(vw).max(min), h.min(vh).max(min))
            } else {
                let scale = (vw / w).min(vh / h);
                at_least((w * scale).min(vw), (h * scale).min(vh), min)
            };
            self.crop_box.shrink((w - new_w) / 2.0, (h - new_h) / 2.0);
            debug!(width = new_w, height = new_h, "box shrunk to viewport");
        }
        self.fit_translation()
    }

    /// Translate the box so it lies inside the viewport; returns its rect.
    fn fit_translation(&mut self) -> Rect {
        let b = self.crop_box.rect();
        let vp = self.viewport;
        let dx = axis_fit(b.left, b.right, vp.left, vp.right);
        let dy = axis_fit(b.top, b.bottom, vp.top, vp.bottom);
        self.crop_box.move_by(dx, dy);
        self.crop_box.rect()
    }

    fn auto_pan_translate(&self) -> f32 {
        self.config.auto_pan_step * (self.zoom_level / 2.0).max(1.0)
    }

    fn bounds_hit(&self, session: &MoveSession) -> EngineEvent {
        let event = EngineEvent::bounds_hit(session.pan(), session.translate());
        debug!(?event, "bounds hit");
        event
    }

    /// Arm or disarm auto zoom-out for a resize sample.
    ///
    /// Armed while a fixed ratio is active, the view is zoomed in, and the
    /// pointer is outside the viewport with a dragged edge pinned against it.
    fn update_zoom_out(&mut self, session: &MoveSession, resized: &CropBox, raw: Point) {
        let handler = session.handler();
        let wants_zoom_out = !self.aspect_ratio.is_free()
            && handler.is_resize()
            && self.zoom_level > 1.0
            && !self.viewport.contains(raw.x, raw.y)
            && Edge::ALL.into_iter().any(|edge| {
                handler.drags(edge) && EdgeHandle::of(edge, resized, &self.viewport).is_pinned()
            });

        if wants_zoom_out {
            if !self.timer.is_armed(TimerKind::ZoomOut) {
                self.timer
                    .schedule(TimerKind::ZoomOut, self.config.zoom_out_delay());
                debug!(?handler, "auto zoom-out armed");
            }
        } else if self.timer.is_armed(TimerKind::ZoomOut) {
            self.timer.clear_kind(TimerKind::ZoomOut);
            debug!(?handler, "auto zoom-out disarmed");
        }
    }
}

/// Largest `width x height` within the given size that honors `ratio`.
fn fit_ratio(ratio: AspectRatio, width: f32, height: f32) -> (f32, f32) {
    if ratio.is_free() {
        return (width, height);
    }
    let fitted = ratio.vertical_for(width);
    if fitted > height {
        (ratio.horizontal_for(height), height)
    } else {
        (width, fitted)
    }
}

/// Scale `width x height` up uniformly until both sides reach `min`.
fn at_least(width: f32, height: f32, min: f32) -> (f32, f32) {
    let up = (min / width).max(min / height).max(1.0);
    (width * up, height * up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const EPS: f32 = 1e-3;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 1000.0)
    }

    fn engine(ratio: AspectRatio) -> CropMoveHandler {
        CropMoveHandler::new(viewport(), ratio, CropConfig::default()).unwrap()
    }

    /// Engine with a 400x400 box at (200, 200).
    fn engine_with_box(ratio: AspectRatio) -> CropMoveHandler {
        let mut e = engine(ratio);
        e.set_crop_rect(Rect::new(200.0, 200.0, 600.0, 600.0));
        e
    }

    #[test]
    fn test_new_fills_viewport() {
        let e = engine(AspectRatio::Free);
        assert_eq!(e.crop_box().rect(), viewport());
        assert_eq!(e.crop_box().min_dimens(), 100.0);
        assert!(!e.is_moving());
        assert_eq!(e.active_handler(), HandlerType::None);
    }

    #[test]
    fn test_new_rejects_bad_input() {
        let bad_vp = Rect::new(0.0, 0.0, 0.0, 100.0);
        assert!(CropMoveHandler::new(bad_vp, AspectRatio::Free, CropConfig::default()).is_err());

        let mut config = CropConfig::default();
        config.min_size = -1.0;
        assert!(matches!(
            CropMoveHandler::new(viewport(), AspectRatio::Free, config),
            Err(CropError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_hit_test_priority() {
        let e = engine_with_box(AspectRatio::Free);
        assert_eq!(e.hit_test(205.0, 205.0), HandlerType::LeftTop);
        assert_eq!(e.hit_test(598.0, 603.0), HandlerType::RightBottom);
        assert_eq!(e.hit_test(400.0, 210.0), HandlerType::Top);
        assert_eq!(e.hit_test(640.0, 400.0), HandlerType::Right);
        assert_eq!(e.hit_test(400.0, 400.0), HandlerType::Box);
        assert_eq!(e.hit_test(900.0, 900.0), HandlerType::None);
    }

    #[test]
    fn test_start_move_miss() {
        let mut e = engine_with_box(AspectRatio::Free);
        assert!(!e.start_move(900.0, 900.0));
        assert!(!e.is_moving());
    }

    #[test]
    fn test_on_move_idle_is_noop() {
        let mut e = engine_with_box(AspectRatio::Free);
        let before = *e.crop_box();
        assert_eq!(e.on_move(10.0, 10.0), MoveOutcome::default());
        assert_eq!(*e.crop_box(), before);
    }

    #[test]
    fn test_edge_drag_keeps_grab_offset() {
        let mut e = engine_with_box(AspectRatio::Free);
        // Grab 20px inside the right edge
        assert!(e.start_move(580.0, 400.0));
        assert_eq!(e.active_handler(), HandlerType::Right);
        let first = e.on_move(580.0, 400.0);
        assert!(!first.changed);
        let outcome = e.on_move(630.0, 400.0);
        assert!(outcome.changed);
        assert_eq!(e.crop_box().right(), 650.0);
    }

    #[test]
    fn test_left_edge_stops_at_min_dimens() {
        let mut e = engine_with_box(AspectRatio::Free);
        assert!(e.start_move(200.0, 400.0));
        e.on_move(2000.0, 400.0);
        let b = e.crop_box();
        assert_eq!(b.left(), b.right() - b.min_dimens());
    }

    #[test]
    fn test_end_move_requests_zoom_in_for_small_box() {
        let mut e = engine(AspectRatio::Free);
        e.set_crop_rect(Rect::new(300.0, 300.0, 500.0, 500.0));
        assert!(e.start_move(400.0, 400.0));
        let events = e.end_move();
        assert_eq!(
            events,
            vec![EngineEvent::ZoomRequested {
                center: Point::new(400.0, 400.0),
                zoom_out: false,
            }]
        );
        assert!(!e.is_moving());
    }

    #[test]
    fn test_no_zoom_in_at_max_zoom() {
        let mut e = engine(AspectRatio::Free);
        e.set_crop_rect(Rect::new(300.0, 300.0, 500.0, 500.0));
        e.set_zoom_level(8.0);
        assert!(e.start_move(400.0, 400.0));
        assert!(e.end_move().is_empty());
    }

    #[test]
    fn test_no_zoom_in_for_large_box() {
        let mut e = engine_with_box(AspectRatio::Free);
        e.set_crop_rect(Rect::new(100.0, 100.0, 700.0, 400.0));
        assert!(e.start_move(400.0, 250.0));
        assert!(e.end_move().is_empty());
    }

    #[test]
    fn test_end_move_while_idle() {
        let mut e = engine(AspectRatio::Free);
        assert!(e.end_move().is_empty());
    }

    #[test]
    fn test_cancel_skips_zoom_in() {
        let mut e = engine(AspectRatio::Free);
        e.set_crop_rect(Rect::new(300.0, 300.0, 500.0, 500.0));
        assert!(e.start_move(400.0, 400.0));
        e.cancel();
        assert!(!e.is_moving());
        assert!(e.end_move().is_empty());
    }

    #[test]
    fn test_auto_pan_timer_repeats() {
        let mut e = engine_with_box(AspectRatio::Free);
        assert!(e.start_move(400.0, 400.0));

        let outcome = e.on_move(100.0, 400.0);
        let expected = EngineEvent::BoundsHit {
            delta_x: -8.0,
            delta_y: 0.0,
            direction: DirectionPair::new(Direction::Left, Direction::None),
        };
        assert!(outcome.changed);
        assert_eq!(outcome.events, vec![expected]);

        let timer = e.pending_timer().unwrap();
        assert_eq!(timer.kind, TimerKind::AutoPan);
        assert_eq!(timer.delay, Duration::from_millis(16));

        assert_eq!(e.on_timer(timer.token), vec![expected]);
        let next = e.pending_timer().unwrap();
        assert_ne!(next.token, timer.token);
        // The replaced token no longer fires
        assert!(e.on_timer(timer.token).is_empty());

        // Same direction again: no new event
        assert!(e.on_move(90.0, 400.0).events.is_empty());
    }

    #[test]
    fn test_auto_pan_cancel_clears_timer() {
        let mut e = engine_with_box(AspectRatio::Free);
        assert!(e.start_move(400.0, 400.0));
        e.on_move(100.0, 400.0);
        let outcome = e.on_move(200.0, 400.0);
        assert_eq!(
            outcome.events,
            vec![EngineEvent::BoundsHit {
                delta_x: 0.0,
                delta_y: 0.0,
                direction: DirectionPair::NONE,
            }]
        );
        assert!(e.pending_timer().is_none());
    }

    #[test]
    fn test_auto_pan_step_scales_with_zoom() {
        let mut e = engine_with_box(AspectRatio::Free);
        e.set_zoom_level(8.0);
        assert!(e.start_move(400.0, 400.0));
        let outcome = e.on_move(400.0, 1000.0);
        assert_eq!(
            outcome.events,
            vec![EngineEvent::BoundsHit {
                delta_x: 0.0,
                delta_y: 32.0,
                direction: DirectionPair::new(Direction::None, Direction::Bottom),
            }]
        );
    }

    #[test]
    fn test_end_move_clears_timer() {
        let mut e = engine_with_box(AspectRatio::Free);
        assert!(e.start_move(400.0, 400.0));
        e.on_move(100.0, 400.0);
        let token = e.pending_timer().unwrap().token;
        e.end_move();
        assert!(e.pending_timer().is_none());
        assert!(e.on_timer(token).is_empty());
    }

    #[test]
    fn test_auto_zoom_out_while_resizing() {
        let mut e = engine_with_box(AspectRatio::SQUARE);
        e.set_zoom_level(2.0);
        assert!(e.start_move(600.0, 400.0));
        assert_eq!(e.active_handler(), HandlerType::Right);

        e.on_move(1100.0, 400.0);
        assert_eq!(e.crop_box().rect(), Rect::new(200.0, 0.0, 1000.0, 800.0));
        let timer = e.pending_timer().unwrap();
        assert_eq!(timer.kind, TimerKind::ZoomOut);
        assert_eq!(timer.delay, Duration::from_millis(400));

        // Staying outside keeps the same timer
        e.on_move(1150.0, 400.0);
        assert_eq!(e.pending_timer().unwrap().token, timer.token);

        assert_eq!(
            e.on_timer(timer.token),
            vec![EngineEvent::ZoomRequested {
                center: Point::new(600.0, 400.0),
                zoom_out: true,
            }]
        );
        assert!(e.pending_timer().is_some());

        // Back inside: disarmed
        e.on_move(900.0, 400.0);
        assert!(e.pending_timer().is_none());
        assert_eq!(e.crop_box().rect(), Rect::new(200.0, 50.0, 900.0, 750.0));
    }

    #[test]
    fn test_no_auto_zoom_out_at_base_zoom_or_free_ratio() {
        let mut e = engine_with_box(AspectRatio::SQUARE);
        assert!(e.start_move(600.0, 400.0));
        e.on_move(1100.0, 400.0);
        assert!(e.pending_timer().is_none());

        let mut e = engine_with_box(AspectRatio::Free);
        e.set_zoom_level(2.0);
        assert!(e.start_move(600.0, 400.0));
        e.on_move(1100.0, 400.0);
        assert!(e.pending_timer().is_none());
    }

    #[test]
    fn test_set_aspect_ratio_rebuilds_box() {
        let mut e = CropMoveHandler::new(
            Rect::new(0.0, 0.0, 1000.0, 800.0),
            AspectRatio::Free,
            CropConfig::default(),
        )
        .unwrap();
        assert!(e.start_move(500.0, 400.0));
        e.set_aspect_ratio(AspectRatio::SQUARE);
        assert!(!e.is_moving());
        assert_eq!(e.crop_box().rect(), Rect::new(100.0, 0.0, 900.0, 800.0));
    }

    #[test]
    fn test_update_bounds_rejects_empty() {
        let mut e = engine(AspectRatio::Free);
        assert!(e.update_bounds(Rect::new(0.0, 0.0, 100.0, 0.0)).is_err());
        assert_eq!(e.viewport(), viewport());
    }

    #[test]
    fn test_update_border_translates_fitting_box() {
        let mut e = engine_with_box(AspectRatio::Free);
        e.update_bounds(Rect::new(300.0, 0.0, 1300.0, 1000.0)).unwrap();
        let rect = e.update_border();
        assert_eq!(rect, Rect::new(300.0, 200.0, 700.0, 600.0));
    }

    #[test]
    fn test_update_border_shrinks_free_box() {
        let mut e = engine(AspectRatio::Free);
        e.set_crop_rect(Rect::new(100.0, 100.0, 900.0, 900.0));
        e.update_bounds(Rect::new(0.0, 0.0, 600.0, 1000.0)).unwrap();
        let rect = e.update_border();
        assert_eq!(rect, Rect::new(0.0, 100.0, 600.0, 900.0));
        assert_eq!(e.update_border(), rect);
    }

    #[test]
    fn test_update_border_shrinks_ratio_box() {
        let mut e = engine(AspectRatio::LANDSCAPE_4_3);
        e.update_bounds(Rect::new(0.0, 0.0, 800.0, 1000.0)).unwrap();
        let rect = e.update_border();
        assert!((rect.left - 0.0).abs() < EPS);
        assert!((rect.right - 800.0).abs() < EPS);
        assert!((rect.top - 200.0).abs() < EPS);
        assert!((rect.bottom - 800.0).abs() < EPS);
        assert!((rect.width() / rect.height() - 4.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_scale_box_free() {
        let mut e = engine(AspectRatio::Free);
        e.set_crop_rect(Rect::new(100.0, 100.0, 300.0, 300.0));
        let rect = e.scale_box();
        assert_eq!(rect, Rect::new(0.0, 0.0, 750.0, 750.0));
        assert_eq!(e.crop_box().rect(), rect);
    }

    #[test]
    fn test_scale_box_ratio_height_limited() {
        let mut e = CropMoveHandler::new(
            Rect::new(0.0, 0.0, 1000.0, 600.0),
            AspectRatio::SQUARE,
            CropConfig::default(),
        )
        .unwrap();
        e.set_crop_rect(Rect::new(400.0, 200.0, 600.0, 400.0));
        let rect = e.scale_box();
        assert!((rect.width() - 450.0).abs() < EPS);
        assert!((rect.height() - 450.0).abs() < EPS);
        assert!((rect.center().x - 500.0).abs() < EPS);
        assert!(Rect::new(0.0, 0.0, 1000.0, 600.0).contains_rect(&rect));
    }

    #[test]
    fn test_set_crop_rect_applies_fixed_ratio() {
        let mut e = engine(AspectRatio::SQUARE);
        let rect = e.set_crop_rect(Rect::new(200.0, 200.0, 600.0, 400.0));
        assert_eq!(rect, Rect::new(300.0, 200.0, 500.0, 400.0));

        assert!(e.start_move(500.0, 400.0));
        assert_eq!(e.active_handler(), HandlerType::RightBottom);
        e.on_move(600.0, 500.0);
        let b = e.crop_box();
        assert!((b.width() - b.height()).abs() < EPS);
        assert!((b.width() - 300.0).abs() < EPS);
    }

    #[test]
    fn test_set_crop_rect_ratio_respects_min_dimens() {
        let mut e = engine(AspectRatio::TALL_9_16);
        let rect = e.set_crop_rect(Rect::new(450.0, 450.0, 550.0, 550.0));
        assert!((rect.width() - 100.0).abs() < EPS);
        assert!((rect.height() - 1600.0 / 9.0).abs() < EPS);
        assert!((rect.center().x - 500.0).abs() < EPS);
        assert!((rect.center().y - 500.0).abs() < EPS);
    }

    #[test]
    fn test_update_border_keeps_min_dimens_on_narrow_viewport() {
        let mut e = engine(AspectRatio::Free);
        e.update_bounds(Rect::new(0.0, 0.0, 60.0, 1000.0)).unwrap();
        let rect = e.update_border();
        assert_eq!(rect, Rect::new(-20.0, 0.0, 80.0, 1000.0));
        assert_eq!(e.update_border(), rect);
    }

    #[test]
    fn test_update_border_ratio_keeps_min_dimens_on_narrow_viewport() {
        let mut e = engine(AspectRatio::SQUARE);
        e.update_bounds(Rect::new(0.0, 0.0, 60.0, 1000.0)).unwrap();
        let rect = e.update_border();
        assert!((rect.width() - 100.0).abs() < EPS);
        assert!((rect.height() - 100.0).abs() < EPS);
        assert!((rect.center().x - 30.0).abs() < EPS);
        assert!((rect.center().y - 500.0).abs() < EPS);
    }

    #[test]
    fn test_set_zoom_level_ignores_invalid() {
        let mut e = engine(AspectRatio::Free);
        e.set_zoom_level(4.0);
        for bad in [f32::NAN, f32::INFINITY, 0.0, -2.0] {
            e.set_zoom_level(bad);
            assert_eq!(e.zoom_level(), 4.0);
        }
        e.set_zoom_level(0.5);
        assert_eq!(e.zoom_level(), 0.5);
    }

    #[test]
    fn test_set_crop_rect_enforces_min_dimens() {
        let mut e = engine(AspectRatio::Free);
        let rect = e.set_crop_rect(Rect::new(500.0, 500.0, 520.0, 700.0));
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 200.0);
        assert_eq!(rect.center(), Point::new(510.0, 600.0));
    }
}
