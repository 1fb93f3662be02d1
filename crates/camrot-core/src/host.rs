//! Reading rotation state from the platform that embeds the camera view.
//!
//! The math in [`crate::orientation`] needs two facts it cannot derive on its
//! own: the current display rotation and the orientation the platform reports
//! for its current configuration. [`DisplayHost`] is the seam where a
//! windowing integration supplies them. Everything else, including the
//! device's natural orientation, is derived here.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::orientation::{
    activity_orientation, display_orientation, is_landscape, is_portrait, ActivityOrientation,
    CameraFacing, ConfigurationOrientation, NaturalOrientation,
};

/// Synchronous access to the platform's current rotation state.
///
/// Implementations should be cheap, non-blocking reads.
pub trait DisplayHost {
    /// The platform surface rotation index (0 = 0°, 1 = 90°, 2 = 180°, 3 = 270°).
    fn surface_rotation(&self) -> i32;

    /// The orientation of the platform's current configuration.
    fn configuration_orientation(&self) -> ConfigurationOrientation;
}

/// Current display rotation. Unknown platform values read as 0°.
pub fn display_rotation<H: DisplayHost + ?Sized>(host: &H) -> Angle {
    Angle::from_surface_rotation(host.surface_rotation())
}

/// Derive the device's natural orientation from its current state.
///
/// A device reporting landscape while upright (0°/180°), or portrait while
/// turned (90°/270°), is naturally landscape. Everything else, including an
/// undefined configuration, is treated as naturally portrait.
pub fn natural_orientation<H: DisplayHost + ?Sized>(host: &H) -> NaturalOrientation {
    natural_orientation_from(display_rotation(host), host.configuration_orientation())
}

/// [`natural_orientation`] over already-read values.
pub fn natural_orientation_from(
    rotation: Angle,
    configuration: ConfigurationOrientation,
) -> NaturalOrientation {
    let landscape = match configuration {
        ConfigurationOrientation::Landscape => rotation.is_upright_axis(),
        ConfigurationOrientation::Portrait => !rotation.is_upright_axis(),
        ConfigurationOrientation::Undefined => false,
    };
    if landscape {
        NaturalOrientation::Landscape
    } else {
        NaturalOrientation::Portrait
    }
}

/// Whether the host is currently in portrait.
pub fn is_portrait_on<H: DisplayHost + ?Sized>(host: &H) -> bool {
    is_portrait(display_rotation(host), natural_orientation(host))
}

/// Whether the host is currently in landscape.
pub fn is_landscape_on<H: DisplayHost + ?Sized>(host: &H) -> bool {
    is_landscape(display_rotation(host), natural_orientation(host))
}

/// The orientation lock that keeps the host in its current orientation.
pub fn activity_orientation_on<H: DisplayHost + ?Sized>(host: &H) -> ActivityOrientation {
    activity_orientation(display_rotation(host), natural_orientation(host))
}

/// A host with fixed values.
///
/// Useful for embedders that receive the rotation state from elsewhere
/// (e.g. as JSON over a bridge) and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixedHost {
    /// Surface rotation index (0..=3).
    pub surface_rotation: i32,
    /// Configuration orientation.
    #[serde(default)]
    pub configuration: ConfigurationOrientation,
}

impl FixedHost {
    pub fn new(surface_rotation: i32, configuration: ConfigurationOrientation) -> Self {
        Self {
            surface_rotation,
            configuration,
        }
    }
}

impl DisplayHost for FixedHost {
    fn surface_rotation(&self) -> i32 {
        self.surface_rotation
    }

    fn configuration_orientation(&self) -> ConfigurationOrientation {
        self.configuration
    }
}

/// Rotation state read from a host in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationSnapshot {
    /// Current display rotation.
    pub display_rotation: Angle,
    /// Natural orientation of the device.
    pub natural_orientation: NaturalOrientation,
    /// Whether the device is currently in portrait.
    pub portrait: bool,
    /// Lock that keeps the current orientation.
    pub activity_orientation: ActivityOrientation,
}

impl OrientationSnapshot {
    /// Read the host once and derive everything from that read.
    pub fn capture<H: DisplayHost + ?Sized>(host: &H) -> Self {
        let display_rotation = display_rotation(host);
        let natural_orientation =
            natural_orientation_from(display_rotation, host.configuration_orientation());
        Self {
            display_rotation,
            natural_orientation,
            portrait: is_portrait(display_rotation, natural_orientation),
            activity_orientation: activity_orientation(display_rotation, natural_orientation),
        }
    }

    /// Rotation to apply to a frame from the given sensor in this state.
    pub fn frame_rotation(&self, sensor: Angle, facing: CameraFacing) -> Angle {
        display_orientation(
            sensor,
            self.display_rotation,
            self.natural_orientation,
            facing,
        )
    }
}
