//! WASM bindings for orientation math.
//!
//! Angles cross the boundary as plain numbers and are normalized leniently:
//! no binding throws for an unexpected angle.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! // Back sensor mounted at 90 on a portrait phone held upright
//! const rotation = display_orientation(90, 0, false, false); // 90
//!
//! // Keep the current orientation while recording
//! await lock_activity_orientation();
//! ```

use camrot_core::{
    activity_orientation_on, orientation, Angle, CameraFacing, OrientationSnapshot,
};
use wasm_bindgen::prelude::*;

use crate::host::BrowserHost;
use crate::types::{lock_name, lock_type_for, natural_from_flag};

/// Reduce any angle into 0, 90, 180 or 270.
///
/// Angles off the quarter-turn grid return 0.
#[wasm_bindgen]
pub fn normalize_angle(degrees: i32) -> u16 {
    Angle::normalize(degrees).degrees()
}

/// The angle half a turn away. Non-canonical input returns 0.
#[wasm_bindgen]
pub fn mirror_degrees(degrees: i32) -> u16 {
    camrot_core::mirror_degrees(degrees).degrees()
}

/// Rotation to apply to a captured frame so it shows upright.
///
/// # Arguments
///
/// * `sensor` - Sensor mounting angle in degrees
/// * `display` - Current display rotation in degrees
/// * `natural_landscape` - Whether the device is naturally landscape
/// * `front` - Whether the frame comes from the front camera
#[wasm_bindgen]
pub fn display_orientation(
    sensor: i32,
    display: i32,
    natural_landscape: bool,
    front: bool,
) -> u16 {
    let facing = if front {
        CameraFacing::Front
    } else {
        CameraFacing::Back
    };
    orientation::display_orientation(
        Angle::normalize(sensor),
        Angle::normalize(display),
        natural_from_flag(natural_landscape),
        facing,
    )
    .degrees()
}

/// Lock name (e.g. `"landscape-primary"`) keeping the given display rotation.
#[wasm_bindgen]
pub fn activity_orientation(display: i32, natural_landscape: bool) -> String {
    let lock =
        orientation::activity_orientation_degrees(display, natural_from_flag(natural_landscape));
    lock_name(lock).to_string()
}

/// Whether the device is in portrait at the given display rotation.
#[wasm_bindgen]
pub fn is_portrait(display: i32, natural_landscape: bool) -> bool {
    orientation::is_portrait_degrees(display, natural_from_flag(natural_landscape))
}

/// Whether the device is in landscape at the given display rotation.
#[wasm_bindgen]
pub fn is_landscape(display: i32, natural_landscape: bool) -> bool {
    orientation::is_landscape_degrees(display, natural_from_flag(natural_landscape))
}

/// Read the browser's rotation state.
///
/// Returns an object `{ display_rotation, natural_orientation, portrait,
/// activity_orientation }`.
#[wasm_bindgen]
pub fn current_snapshot() -> Result<JsValue, JsValue> {
    let snapshot = OrientationSnapshot::capture(&BrowserHost::current());
    serde_wasm_bindgen::to_value(&snapshot).map_err(JsValue::from)
}

/// Lock the screen to its current orientation.
///
/// Resolves when the browser applies the lock; rejects where locking is not
/// allowed (e.g. outside fullscreen).
#[wasm_bindgen]
pub fn lock_activity_orientation() -> Result<js_sys::Promise, JsValue> {
    let browser = BrowserHost::current();
    let lock = lock_type_for(activity_orientation_on(&browser));
    browser.screen_orientation()?.lock(lock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(-90), 270);
        assert_eq!(normalize_angle(450), 90);
        assert_eq!(normalize_angle(360), 0);
        assert_eq!(normalize_angle(45), 0);
    }

    #[test]
    fn test_mirror_degrees() {
        assert_eq!(mirror_degrees(0), 180);
        assert_eq!(mirror_degrees(270), 90);
        assert_eq!(mirror_degrees(33), 0);
    }

    #[test]
    fn test_display_orientation() {
        assert_eq!(display_orientation(90, 0, false, false), 90);
        assert_eq!(display_orientation(90, 0, false, true), 90);
        assert_eq!(display_orientation(0, 90, true, true), 270);
        // Portrait phone turned to 90, front sensor at 270: 180 mirrored
        assert_eq!(display_orientation(270, 90, false, true), 0);
    }

    #[test]
    fn test_activity_orientation() {
        assert_eq!(activity_orientation(0, true), "landscape-primary");
        assert_eq!(activity_orientation(90, false), "landscape-primary");
        assert_eq!(activity_orientation(180, true), "landscape-secondary");
        assert_eq!(activity_orientation(270, false), "landscape-secondary");
        assert_eq!(activity_orientation(12, false), "portrait-primary");
    }

    #[test]
    fn test_predicates() {
        assert!(is_portrait(0, false));
        assert!(is_landscape(90, false));
        assert!(is_portrait(90, true));
        assert!(!is_portrait(45, false));
        assert!(!is_landscape(45, false));
    }
}
