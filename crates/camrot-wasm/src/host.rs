//! Browser implementation of the display host.
//!
//! Reads `window.screen.orientation`. When the API is unavailable (no window,
//! no screen, or the getter throws) the host degrades to rotation 0 and an
//! undefined configuration, which the core treats as an upright portrait
//! device.

use camrot_core::{ConfigurationOrientation, DisplayHost};
use wasm_bindgen::prelude::*;
use web_sys::ScreenOrientation;

use crate::types::{configuration_from_type, surface_index_from_angle};

/// A [`DisplayHost`] backed by the Screen Orientation API.
pub struct BrowserHost {
    orientation: Option<ScreenOrientation>,
}

impl BrowserHost {
    /// Look up the screen orientation object of the current window.
    pub fn current() -> Self {
        let orientation = web_sys::window()
            .and_then(|window| window.screen().ok())
            .map(|screen| screen.orientation());
        if orientation.is_none() {
            tracing::warn!("Screen orientation API unavailable, assuming 0° portrait");
        }
        Self { orientation }
    }

    /// The underlying orientation object.
    pub fn screen_orientation(&self) -> Result<&ScreenOrientation, JsValue> {
        self.orientation
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Screen orientation API unavailable"))
    }
}

impl DisplayHost for BrowserHost {
    fn surface_rotation(&self) -> i32 {
        match self.orientation.as_ref().map(ScreenOrientation::angle) {
            Some(Ok(angle)) => surface_index_from_angle(angle),
            Some(Err(err)) => {
                tracing::warn!(?err, "Failed to read screen angle");
                0
            }
            None => 0,
        }
    }

    fn configuration_orientation(&self) -> ConfigurationOrientation {
        match self.orientation.as_ref().map(ScreenOrientation::type_) {
            Some(Ok(kind)) => configuration_from_type(kind),
            Some(Err(err)) => {
                tracing::warn!(?err, "Failed to read screen orientation type");
                ConfigurationOrientation::Undefined
            }
            None => ConfigurationOrientation::Undefined,
        }
    }
}
