//! WASM bindings for the crop move engine.
//!
//! The overlay forwards pointer events here, redraws from `crop_box()`
//! whenever a move reports a change, and hands bounds-hit and zoom events
//! to the viewport controller.

use crate::types::{handler_name, parse_aspect_ratio, rect_to_vec, to_js_error, TimerJs};
use cropbox_core::{AspectRatio, CropConfig, CropMoveHandler, Rect, TimerToken};
use wasm_bindgen::prelude::*;

/// Crop engine wrapper for JavaScript.
#[wasm_bindgen]
pub struct JsCropEngine {
    inner: CropMoveHandler,
}

#[wasm_bindgen]
impl JsCropEngine {
    /// Create an engine with a free ratio and default configuration.
    ///
    /// # Arguments
    /// * `left`, `top`, `right`, `bottom` - Visible image bounds in view pixels
    #[wasm_bindgen(constructor)]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Result<JsCropEngine, JsValue> {
        let inner = CropMoveHandler::new(
            Rect::new(left, top, right, bottom),
            AspectRatio::Free,
            CropConfig::default(),
        )
        .map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Create an engine with a configuration object.
    ///
    /// # Arguments
    ///
    /// * `left`, `top`, `right`, `bottom` - Visible image bounds in view pixels
    /// * `config` - Object with any of the `CropConfig` fields
    ///   (`touch_radius`, `min_size`, ...); missing fields take their defaults
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// const engine = JsCropEngine.with_config(0, 0, 800, 600, { touch_radius: 32 });
    /// ```
    pub fn with_config(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        config: JsValue,
    ) -> Result<JsCropEngine, JsValue> {
        let config: CropConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid crop config: {}", e)))?;
        let inner = CropMoveHandler::new(
            Rect::new(left, top, right, bottom),
            AspectRatio::Free,
            config,
        )
        .map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Set the aspect ratio.
    ///
    /// Cancels any gesture and rebuilds the box to the largest one fitting
    /// the viewport.
    ///
    /// # Arguments
    ///
    /// * `kind` - `"free"`, `"original"` or `"fixed"`
    /// * `x`, `y` - Ratio terms for `"fixed"`, image size for `"original"`;
    ///   ignored for `"free"`
    pub fn set_aspect_ratio(&mut self, kind: &str, x: f32, y: f32) -> Result<(), JsValue> {
        let ratio = parse_aspect_ratio(kind, x, y).map_err(|e| JsValue::from_str(&e))?;
        self.inner.set_aspect_ratio(ratio);
        Ok(())
    }

    /// Get the current zoom level
    #[wasm_bindgen(getter)]
    pub fn zoom_level(&self) -> f32 {
        self.inner.zoom_level()
    }

    /// Set the current zoom level. Non-finite and non-positive values are
    /// ignored.
    #[wasm_bindgen(setter)]
    pub fn set_zoom_level(&mut self, value: f32) {
        self.inner.set_zoom_level(value);
    }

    /// Whether a gesture is in progress
    #[wasm_bindgen(getter)]
    pub fn is_moving(&self) -> bool {
        self.inner.is_moving()
    }

    /// Current box as `[left, top, right, bottom]`.
    pub fn crop_box(&self) -> Vec<f32> {
        rect_to_vec(self.inner.crop_box().rect())
    }

    /// Box in `0..1` coordinates of the given image bounds.
    ///
    /// # Arguments
    ///
    /// * `left`, `top`, `right`, `bottom` - Displayed image bounds in view pixels
    ///
    /// # Returns
    ///
    /// `[left, top, right, bottom]`, each clamped to `0..1`.
    pub fn normalized_crop(&self, left: f32, top: f32, right: f32, bottom: f32) -> Vec<f32> {
        let image = Rect::new(left, top, right, bottom);
        rect_to_vec(self.inner.crop_box().normalized_in(&image))
    }

    /// Handle under `(x, y)` without starting a gesture.
    ///
    /// # Returns
    ///
    /// `"top"`, `"right"`, `"bottom"`, `"left"`, a corner such as
    /// `"left_top"`, `"box"` for the body, or `"none"`.
    pub fn hit_test(&self, x: f32, y: f32) -> String {
        handler_name(self.inner.hit_test(x, y)).to_string()
    }

    /// Handle grabbed by the current gesture, `"none"` while idle.
    pub fn active_handler(&self) -> String {
        handler_name(self.inner.active_handler()).to_string()
    }

    /// Begin a gesture at a pointer-down position.
    ///
    /// Corners win over edges, and edges over the box body.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Pointer position in view pixels
    ///
    /// # Returns
    ///
    /// `true` if a handle or the body was grabbed. On `false` the engine
    /// stays idle and later `on_move` calls do nothing.
    pub fn start_move(&mut self, x: f32, y: f32) -> bool {
        self.inner.start_move(x, y)
    }

    /// Feed a pointer sample.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Pointer position in view pixels
    ///
    /// # Returns
    ///
    /// `{ changed, events }`. Redraw from `crop_box()` when `changed` is
    /// true. `events` holds `{ type: "bounds_hit", delta_x, delta_y,
    /// direction }` objects for the viewport controller.
    pub fn on_move(&mut self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        let outcome = self.inner.on_move(x, y);
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Finish the gesture on pointer-up.
    ///
    /// # Returns
    ///
    /// Emitted events: a `{ type: "zoom_requested", center, zoom_out: false }`
    /// when the box ended up small enough to zoom in on, otherwise empty.
    pub fn end_move(&mut self) -> Result<js_sys::Array, JsValue> {
        let events = js_sys::Array::new();
        for event in self.inner.end_move() {
            let value = serde_wasm_bindgen::to_value(&event)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            events.push(&value);
        }
        Ok(events)
    }

    /// Abort the gesture, e.g. when a second pointer starts a pinch.
    ///
    /// Clears any pending timer and skips the zoom-in check.
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    /// Replace the visible image bounds after the image pans, zooms or
    /// rotates.
    ///
    /// # Arguments
    ///
    /// * `left`, `top`, `right`, `bottom` - New visible bounds in view pixels
    ///
    /// # Errors
    ///
    /// Rejects non-finite or empty bounds and keeps the previous ones.
    pub fn update_bounds(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Result<(), JsValue> {
        self.inner
            .update_bounds(Rect::new(left, top, right, bottom))
            .map_err(to_js_error)
    }

    /// Fit the box into the current bounds.
    ///
    /// # Returns
    ///
    /// The new box as `[left, top, right, bottom]`.
    pub fn update_border(&mut self) -> Vec<f32> {
        rect_to_vec(self.inner.update_border())
    }

    /// Grow the box after a zoom-in to the configured fraction of the
    /// bounds, keeping the aspect ratio.
    ///
    /// # Returns
    ///
    /// The new box as `[left, top, right, bottom]`.
    pub fn scale_box(&mut self) -> Vec<f32> {
        rect_to_vec(self.inner.scale_box())
    }

    /// Restore a saved box.
    ///
    /// The box is trimmed to the aspect ratio, grown to the minimum size and
    /// fitted into the bounds.
    ///
    /// # Returns
    ///
    /// The box as fitted, `[left, top, right, bottom]`.
    pub fn set_crop_box(&mut self, left: f32, top: f32, right: f32, bottom: f32) -> Vec<f32> {
        rect_to_vec(self.inner.set_crop_rect(Rect::new(left, top, right, bottom)))
    }

    /// The timer the host should schedule next.
    ///
    /// # Returns
    ///
    /// `{ token, kind, delay_ms }` with `kind` `"auto_pan"` or `"zoom_out"`,
    /// or `null` when nothing is pending. After `delay_ms`, call
    /// `on_timer(token)`.
    pub fn pending_timer(&self) -> Result<JsValue, JsValue> {
        match self.inner.pending_timer() {
            Some(timer) => serde_wasm_bindgen::to_value(&TimerJs::from(timer))
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::NULL),
        }
    }

    /// Fire the timer identified by `token`.
    ///
    /// Stale tokens (replaced or cleared since they were issued) are ignored.
    ///
    /// # Returns
    ///
    /// Emitted events; empty for a stale token.
    pub fn on_timer(&mut self, token: u32) -> Result<js_sys::Array, JsValue> {
        let events = js_sys::Array::new();
        for event in self.inner.on_timer(TimerToken(u64::from(token))) {
            let value = serde_wasm_bindgen::to_value(&event)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            events.push(&value);
        }
        Ok(events)
    }
}
