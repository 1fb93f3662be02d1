//! Orientation enums shared by the mapping functions and host layer.

use serde::{Deserialize, Serialize};

/// The physical default orientation of a device, independent of how it is
/// currently rotated. Phones are usually portrait, many tablets landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaturalOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// Which side of the device the camera sensor faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraFacing {
    Front,
    #[default]
    Back,
}

impl CameraFacing {
    #[inline]
    pub fn is_front(self) -> bool {
        self == CameraFacing::Front
    }
}

/// The orientation the platform reports for its current configuration.
///
/// Unlike [`NaturalOrientation`] this follows the screen as it rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationOrientation {
    /// Not reported, or a value this crate does not know (e.g. square).
    #[default]
    Undefined,
    Portrait,
    Landscape,
}

impl ConfigurationOrientation {
    /// Map a platform configuration code (1 = portrait, 2 = landscape).
    ///
    /// Any other code is `Undefined`.
    pub fn from_platform_code(code: i32) -> Self {
        match code {
            1 => ConfigurationOrientation::Portrait,
            2 => ConfigurationOrientation::Landscape,
            _ => ConfigurationOrientation::Undefined,
        }
    }
}

/// A screen-orientation lock request for the hosting activity or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityOrientation {
    Portrait,
    Landscape,
    ReversePortrait,
    ReverseLandscape,
}

impl ActivityOrientation {
    /// The platform's screen-orientation constant for this lock.
    pub fn platform_code(self) -> i32 {
        match self {
            ActivityOrientation::Landscape => 0,
            ActivityOrientation::Portrait => 1,
            ActivityOrientation::ReverseLandscape => 8,
            ActivityOrientation::ReversePortrait => 9,
        }
    }

    /// True for the two portrait locks.
    pub fn is_portrait(self) -> bool {
        matches!(
            self,
            ActivityOrientation::Portrait | ActivityOrientation::ReversePortrait
        )
    }
}
