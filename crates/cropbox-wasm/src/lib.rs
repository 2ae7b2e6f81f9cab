//! Cropbox WASM - WebAssembly bindings for the crop engine
//!
//! This crate exposes the cropbox-core move engine to the TypeScript
//! overlay that draws the crop box and the viewport controller that pans
//! and zooms the image underneath it.
//!
//! # Module Structure
//!
//! - `engine` - The `JsCropEngine` wrapper around the move engine
//! - `types` - Conversions between core types and JavaScript values
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropEngine } from '@cropbox/wasm';
//!
//! await init();
//!
//! const engine = new JsCropEngine(0, 0, view.width, view.height);
//! engine.set_aspect_ratio('fixed', 4, 3);
//!
//! if (engine.start_move(e.offsetX, e.offsetY)) {
//!   const { changed, events } = engine.on_move(x, y);
//!   if (changed) draw(engine.crop_box());
//! }
//! ```

use wasm_bindgen::prelude::*;

mod engine;
mod types;

pub use engine::JsCropEngine;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
