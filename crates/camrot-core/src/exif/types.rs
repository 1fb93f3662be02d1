//! EXIF orientation tag and related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::angle::Angle;

/// Errors from reading orientation metadata.
#[derive(Debug, Error)]
pub enum ExifError {
    /// The container or its EXIF block could not be parsed.
    #[error("EXIF error: {0}")]
    Parse(String),

    /// The EXIF block has no orientation tag.
    #[error("No orientation tag found")]
    MissingTag,

    /// The orientation tag holds a value outside 1-8.
    #[error("Invalid orientation value: {0}")]
    InvalidValue(u32),
}

/// EXIF orientation values (1-8).
///
/// Each value describes the transform a viewer applies to show the stored
/// frame upright: a clockwise rotation, optionally followed by a horizontal
/// flip.
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExifOrientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip (rotate 180 + horizontal flip).
    FlipVertical = 4,
    /// Transpose (rotate 90 CW + horizontal flip).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (rotate 270 CW + horizontal flip).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl ExifOrientation {
    /// The tag for a clockwise frame rotation, mirrored or not.
    pub fn from_rotation(rotation: Angle, mirrored: bool) -> Self {
        const PLAIN: [ExifOrientation; 4] = [
            ExifOrientation::Normal,
            ExifOrientation::Rotate90CW,
            ExifOrientation::Rotate180,
            ExifOrientation::Rotate270CW,
        ];
        const MIRRORED: [ExifOrientation; 4] = [
            ExifOrientation::FlipHorizontal,
            ExifOrientation::Transpose,
            ExifOrientation::FlipVertical,
            ExifOrientation::Transverse,
        ];
        let table = if mirrored { &MIRRORED } else { &PLAIN };
        table[usize::from(rotation.quarter_turns())]
    }

    /// Strict conversion from the raw tag value.
    pub fn from_tag(value: u32) -> Result<Self, ExifError> {
        match value {
            1 => Ok(ExifOrientation::Normal),
            2 => Ok(ExifOrientation::FlipHorizontal),
            3 => Ok(ExifOrientation::Rotate180),
            4 => Ok(ExifOrientation::FlipVertical),
            5 => Ok(ExifOrientation::Transpose),
            6 => Ok(ExifOrientation::Rotate90CW),
            7 => Ok(ExifOrientation::Transverse),
            8 => Ok(ExifOrientation::Rotate270CW),
            other => Err(ExifError::InvalidValue(other)),
        }
    }

    /// Raw tag value.
    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Clockwise rotation component.
    pub fn rotation(self) -> Angle {
        match self {
            ExifOrientation::Normal | ExifOrientation::FlipHorizontal => Angle::Deg0,
            ExifOrientation::Rotate90CW | ExifOrientation::Transpose => Angle::Deg90,
            ExifOrientation::Rotate180 | ExifOrientation::FlipVertical => Angle::Deg180,
            ExifOrientation::Rotate270CW | ExifOrientation::Transverse => Angle::Deg270,
        }
    }

    /// Whether a horizontal flip follows the rotation.
    #[inline]
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            ExifOrientation::FlipHorizontal
                | ExifOrientation::FlipVertical
                | ExifOrientation::Transpose
                | ExifOrientation::Transverse
        )
    }

    /// Returns true if this orientation swaps width and height dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        !self.rotation().is_upright_axis()
    }

    /// Dimensions of a `width` x `height` frame after applying this orientation.
    pub fn oriented_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

impl From<u32> for ExifOrientation {
    fn from(value: u32) -> Self {
        ExifOrientation::from_tag(value).unwrap_or_default()
    }
}
