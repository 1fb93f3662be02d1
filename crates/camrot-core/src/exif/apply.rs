//! Turning a captured frame upright.

use image::DynamicImage;

use super::ExifOrientation;
use crate::angle::Angle;
use crate::orientation::CameraFacing;

/// Apply an EXIF orientation to a frame: rotate clockwise, then flip if mirrored.
pub fn upright_frame(img: DynamicImage, orientation: ExifOrientation) -> DynamicImage {
    match orientation {
        ExifOrientation::Normal => img,
        ExifOrientation::FlipHorizontal => img.fliph(),
        ExifOrientation::Rotate180 => img.rotate180(),
        ExifOrientation::FlipVertical => img.flipv(),
        ExifOrientation::Transpose => img.rotate90().fliph(),
        ExifOrientation::Rotate90CW => img.rotate90(),
        ExifOrientation::Transverse => img.rotate270().fliph(),
        ExifOrientation::Rotate270CW => img.rotate270(),
    }
}

/// Rotate a frame by a computed frame rotation.
///
/// Front-camera frames are additionally flipped so they read like a mirror,
/// matching what the preview shows.
pub fn upright_camera_frame(
    img: DynamicImage,
    rotation: Angle,
    facing: CameraFacing,
) -> DynamicImage {
    upright_frame(img, ExifOrientation::from_rotation(rotation, facing.is_front()))
}
