//! Orientation classification and mapping.
//!
//! All functions here are pure: they take the display rotation and the
//! device's natural orientation as values. Use [`crate::host`] to read those
//! values from a running platform.
//!
//! # Conventions
//!
//! - A device whose natural orientation is portrait is in portrait at 0° and
//!   180°, and in landscape at 90° and 270°. A landscape-natural device is the
//!   other way around.
//! - Functions ending in `_degrees` take raw platform integers and never fail;
//!   unknown values fall back to the 0° behavior.

mod mapping;
mod types;

pub use mapping::{
    activity_orientation, activity_orientation_degrees, display_orientation, is_landscape,
    is_landscape_degrees, is_portrait, is_portrait_degrees,
};
pub use types::{ActivityOrientation, CameraFacing, ConfigurationOrientation, NaturalOrientation};
