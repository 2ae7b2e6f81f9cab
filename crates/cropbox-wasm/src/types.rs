//! Conversions between core types and JavaScript-friendly values.
//!
//! Rectangles cross the boundary as `Float32Array`s of
//! `[left, top, right, bottom]`; events and timers as plain objects.

use cropbox_core::{AspectRatio, CropError, HandlerType, PendingTimer, Rect, TimerKind};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Flatten a rect for JavaScript.
pub(crate) fn rect_to_vec(rect: Rect) -> Vec<f32> {
    vec![rect.left, rect.top, rect.right, rect.bottom]
}

/// Map a core error to a JavaScript error string.
pub(crate) fn to_js_error(err: CropError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Parse the ratio picker's `(kind, x, y)` triple.
///
/// `kind` is `"free"`, `"original"` (x/y = image size) or `"fixed"`.
pub(crate) fn parse_aspect_ratio(kind: &str, x: f32, y: f32) -> Result<AspectRatio, String> {
    match kind {
        "free" => Ok(AspectRatio::Free),
        "original" => AspectRatio::original(x, y).map_err(|e| e.to_string()),
        "fixed" => AspectRatio::fixed(x, y).map_err(|e| e.to_string()),
        other => Err(format!("Unknown aspect ratio kind: {}", other)),
    }
}

/// Handler name as used by the overlay (`"left_top"`, `"box"`, ...).
pub(crate) fn handler_name(handler: HandlerType) -> &'static str {
    match handler {
        HandlerType::Top => "top",
        HandlerType::Right => "right",
        HandlerType::Bottom => "bottom",
        HandlerType::Left => "left",
        HandlerType::LeftTop => "left_top",
        HandlerType::RightTop => "right_top",
        HandlerType::RightBottom => "right_bottom",
        HandlerType::LeftBottom => "left_bottom",
        HandlerType::Box => "box",
        HandlerType::None => "none",
    }
}

/// Pending timer as seen from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TimerJs {
    /// Token to pass back to `on_timer`.
    pub token: u32,
    pub kind: TimerKind,
    pub delay_ms: u32,
}

impl From<PendingTimer> for TimerJs {
    fn from(timer: PendingTimer) -> Self {
        Self {
            token: timer.token.0 as u32,
            kind: timer.kind,
            delay_ms: timer.delay.as_millis() as u32,
        }
    }
}
