//! Camrot Core - Camera orientation math
//!
//! This crate answers the rotation questions a camera preview has to ask:
//! how far to rotate a captured frame so it shows upright, whether the device
//! is in portrait or landscape, and which orientation lock keeps the current
//! screen orientation.
//!
//! # Module Structure
//!
//! - `angle` - Quarter-turn [`Angle`] type, normalization and mirroring
//! - `orientation` - Pure sensor/display/activity mappings
//! - `host` - The [`DisplayHost`] capability and derived queries
//! - `exif` - Mapping frame rotations to EXIF orientation and applying them
//!
//! # Example
//!
//! ```ignore
//! use camrot_core::{display_orientation, Angle, CameraFacing, NaturalOrientation};
//!
//! let rotation = display_orientation(
//!     Angle::Deg90,
//!     Angle::Deg0,
//!     NaturalOrientation::Portrait,
//!     CameraFacing::Back,
//! );
//! assert_eq!(rotation, Angle::Deg90);
//! ```

pub mod angle;
pub mod exif;
pub mod host;
pub mod orientation;

pub use angle::{mirror_degrees, normalize_degrees, Angle, AngleError};
pub use crate::exif::{ExifError, ExifOrientation};
pub use host::{
    activity_orientation_on, display_rotation, is_landscape_on, is_portrait_on,
    natural_orientation, DisplayHost, FixedHost, OrientationSnapshot,
};
pub use orientation::{
    activity_orientation, activity_orientation_degrees, display_orientation, is_landscape,
    is_portrait, ActivityOrientation, CameraFacing, ConfigurationOrientation, NaturalOrientation,
};
