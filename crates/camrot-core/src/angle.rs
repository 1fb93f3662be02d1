//! Quarter-turn angles used by cameras and displays.
//!
//! Sensor orientation, display rotation and frame rotation are always one of
//! four values: 0°, 90°, 180° or 270°. [`Angle`] makes any other value
//! unrepresentable. Raw integers coming from a platform are brought into the
//! domain either leniently ([`Angle::normalize`], never fails) or strictly
//! ([`Angle::from_degrees`], rejects anything that is not a quarter turn).
//!
//! 360° is accepted as an alias for 0° everywhere a raw integer is taken.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by strict angle validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AngleError {
    /// The value is not one of 0, 90, 180, 270 (or the 360 alias).
    #[error("Angle {0}° is not a quarter turn (expected 0, 90, 180 or 270)")]
    NotCanonical(i32),
}

/// A rotation restricted to quarter turns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum Angle {
    /// No rotation.
    #[default]
    Deg0 = 0,
    /// Quarter turn.
    Deg90 = 90,
    /// Half turn.
    Deg180 = 180,
    /// Three quarter turns.
    Deg270 = 270,
}

impl Angle {
    /// All four angles in ascending order.
    pub const ALL: [Angle; 4] = [Angle::Deg0, Angle::Deg90, Angle::Deg180, Angle::Deg270];

    /// Bring any integer into the quarter-turn domain.
    ///
    /// The value is first reduced into `[0, 360)` (see [`normalize_degrees`]).
    /// A result that is not a multiple of 90 has no quarter-turn
    /// representation and falls back to [`Angle::Deg0`].
    pub fn normalize(degrees: i32) -> Angle {
        match normalize_degrees(degrees) {
            90 => Angle::Deg90,
            180 => Angle::Deg180,
            270 => Angle::Deg270,
            _ => Angle::Deg0,
        }
    }

    /// Strictly convert a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::NotCanonical`] unless `degrees` is 0, 90, 180,
    /// 270 or 360.
    pub fn from_degrees(degrees: i32) -> Result<Angle, AngleError> {
        match degrees {
            0 | 360 => Ok(Angle::Deg0),
            90 => Ok(Angle::Deg90),
            180 => Ok(Angle::Deg180),
            270 => Ok(Angle::Deg270),
            other => Err(AngleError::NotCanonical(other)),
        }
    }

    /// Map a platform surface rotation index (0..=3) to an angle.
    ///
    /// Unknown indices map to [`Angle::Deg0`].
    pub fn from_surface_rotation(index: i32) -> Angle {
        match index {
            1 => Angle::Deg90,
            2 => Angle::Deg180,
            3 => Angle::Deg270,
            _ => Angle::Deg0,
        }
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(self) -> u16 {
        self as u16
    }

    /// Number of clockwise quarter turns (0..=3).
    #[inline]
    pub fn quarter_turns(self) -> u8 {
        (self.degrees() / 90) as u8
    }

    /// The angle 180° opposite on the circle: 0↔180, 90↔270.
    pub fn mirror(self) -> Angle {
        match self {
            Angle::Deg0 => Angle::Deg180,
            Angle::Deg90 => Angle::Deg270,
            Angle::Deg180 => Angle::Deg0,
            Angle::Deg270 => Angle::Deg90,
        }
    }

    /// True for 0° and 180°, the rotations that keep a device on its natural axis.
    #[inline]
    pub fn is_upright_axis(self) -> bool {
        matches!(self, Angle::Deg0 | Angle::Deg180)
    }
}

impl TryFrom<i32> for Angle {
    type Error = AngleError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Angle::from_degrees(value)
    }
}

impl TryFrom<u16> for Angle {
    type Error = AngleError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Angle::from_degrees(i32::from(value))
    }
}

impl From<Angle> for u16 {
    fn from(angle: Angle) -> Self {
        angle.degrees()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Reduce any integer into `[0, 360)`.
///
/// `normalize_degrees(360) == 0`, `normalize_degrees(-90) == 270`.
#[inline]
pub fn normalize_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Mirror a raw integer angle.
///
/// 360 behaves as 0. Any value outside the canonical set maps to
/// [`Angle::Deg0`] instead of failing.
pub fn mirror_degrees(degrees: i32) -> Angle {
    match Angle::from_degrees(degrees) {
        Ok(angle) => angle.mirror(),
        Err(_) => Angle::Deg0,
    }
}
