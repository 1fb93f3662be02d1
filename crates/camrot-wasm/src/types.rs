//! Conversions between core orientation types and Screen Orientation API values.

use camrot_core::{ActivityOrientation, ConfigurationOrientation, NaturalOrientation};
use web_sys::{OrientationLockType, OrientationType};

/// Convert the `natural_landscape` flag taken by the bindings.
pub(crate) fn natural_from_flag(natural_landscape: bool) -> NaturalOrientation {
    if natural_landscape {
        NaturalOrientation::Landscape
    } else {
        NaturalOrientation::Portrait
    }
}

/// Convert `screen.orientation.angle` to a surface rotation index.
///
/// Angles that are not quarter turns return -1, which the core reads as 0°.
pub(crate) fn surface_index_from_angle(angle: u16) -> i32 {
    if angle % 90 == 0 {
        i32::from(angle % 360 / 90)
    } else {
        -1
    }
}

/// Convert `screen.orientation.type` to a configuration orientation.
pub(crate) fn configuration_from_type(kind: OrientationType) -> ConfigurationOrientation {
    match kind {
        OrientationType::PortraitPrimary | OrientationType::PortraitSecondary => {
            ConfigurationOrientation::Portrait
        }
        OrientationType::LandscapePrimary | OrientationType::LandscapeSecondary => {
            ConfigurationOrientation::Landscape
        }
        _ => ConfigurationOrientation::Undefined,
    }
}

/// The lock type that requests the given orientation.
pub(crate) fn lock_type_for(orientation: ActivityOrientation) -> OrientationLockType {
    match orientation {
        ActivityOrientation::Portrait => OrientationLockType::PortraitPrimary,
        ActivityOrientation::ReversePortrait => OrientationLockType::PortraitSecondary,
        ActivityOrientation::Landscape => OrientationLockType::LandscapePrimary,
        ActivityOrientation::ReverseLandscape => OrientationLockType::LandscapeSecondary,
    }
}

/// The lock type's name as used by `screen.orientation.lock()`.
pub(crate) fn lock_name(orientation: ActivityOrientation) -> &'static str {
    match orientation {
        ActivityOrientation::Portrait => "portrait-primary",
        ActivityOrientation::ReversePortrait => "portrait-secondary",
        ActivityOrientation::Landscape => "landscape-primary",
        ActivityOrientation::ReverseLandscape => "landscape-secondary",
    }
}
