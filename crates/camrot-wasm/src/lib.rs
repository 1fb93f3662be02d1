//! Camrot WASM - WebAssembly bindings for Camrot
//!
//! This crate exposes the camrot-core orientation math to JavaScript/TypeScript
//! camera views, with the browser's Screen Orientation API as the display host.
//!
//! # Module Structure
//!
//! - `orientation` - Angle, frame rotation and lock bindings
//! - `host` - [`BrowserHost`], the `DisplayHost` backed by `screen.orientation`
//! - `types` - Conversions between core types and Screen Orientation API values
//!
//! # Usage
//!
//! ```typescript
//! import init, { current_snapshot, display_orientation } from '@camrot/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const state = current_snapshot();
//! const naturalLandscape = state.natural_orientation === "landscape";
//! const rotation = display_orientation(sensorAngle, state.display_rotation, naturalLandscape, false);
//! ```

use wasm_bindgen::prelude::*;

mod host;
mod orientation;
mod types;

// Re-export public types
pub use host::BrowserHost;
pub use orientation::{
    activity_orientation, current_snapshot, display_orientation, is_landscape, is_portrait,
    lock_activity_orientation, mirror_degrees, normalize_angle,
};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Library code only emits tracing events; the page decides whether to
    // install a subscriber.
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
