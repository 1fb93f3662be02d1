//! EXIF orientation for captured frames.
//!
//! A camera normally stores frames in sensor order and records the rotation
//! needed to show them upright in the EXIF orientation tag. This module maps a
//! frame rotation computed by [`crate::orientation::display_orientation`] to
//! that tag, reads it back from a JPEG, and applies it to decoded pixels.

mod apply;
mod read;
mod types;

pub use apply::{upright_camera_frame, upright_frame};
pub use read::{orientation_or_normal, read_orientation};
pub use types::{ExifError, ExifOrientation};
