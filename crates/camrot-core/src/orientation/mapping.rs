//! Pure mappings between sensor, display and activity orientation.
//!
//! # Frame rotation
//!
//! A camera sensor is mounted at a fixed angle relative to the device's
//! natural orientation. To show a captured frame upright, it must be rotated
//! by the sensor angle minus the current display rotation:
//!
//! ```text
//! frame = normalize(sensor - (display == 0 ? 360 : display))
//! ```
//!
//! Front sensors are mirrored relative to back sensors, so when the device
//! is held in landscape the front-camera result is flipped by half a turn.

use crate::angle::Angle;

use super::types::{ActivityOrientation, CameraFacing, NaturalOrientation};

/// Compute the angle a captured frame must be rotated to appear upright.
///
/// # Arguments
///
/// * `sensor` - Mounting angle of the camera sensor
/// * `display` - Current display rotation
/// * `natural` - Natural orientation of the device
/// * `facing` - Which camera produced the frame
pub fn display_orientation(
    sensor: Angle,
    display: Angle,
    natural: NaturalOrientation,
    facing: CameraFacing,
) -> Angle {
    let landscape_now = is_landscape(display, natural);

    // 0 is subtracted as a full turn
    let display_degrees = match display {
        Angle::Deg0 => 360,
        other => i32::from(other.degrees()),
    };
    let result = Angle::normalize(i32::from(sensor.degrees()) - display_degrees);

    if landscape_now && facing.is_front() {
        result.mirror()
    } else {
        result
    }
}

/// Pick the screen-orientation lock matching the current display rotation.
///
/// | display | natural = Landscape | natural = Portrait |
/// |---------|---------------------|--------------------|
/// | 0       | Landscape           | Portrait           |
/// | 90      | ReversePortrait     | Landscape          |
/// | 180     | ReverseLandscape    | ReversePortrait    |
/// | 270     | Portrait            | ReverseLandscape   |
pub fn activity_orientation(display: Angle, natural: NaturalOrientation) -> ActivityOrientation {
    use ActivityOrientation::*;

    let landscape_natural = natural == NaturalOrientation::Landscape;
    match display {
        Angle::Deg0 if landscape_natural => Landscape,
        Angle::Deg0 => Portrait,
        Angle::Deg90 if landscape_natural => ReversePortrait,
        Angle::Deg90 => Landscape,
        Angle::Deg180 if landscape_natural => ReverseLandscape,
        Angle::Deg180 => ReversePortrait,
        Angle::Deg270 if landscape_natural => Portrait,
        Angle::Deg270 => ReverseLandscape,
    }
}

/// [`activity_orientation`] for a raw integer display rotation.
///
/// An unrecognized angle is logged and treated as 0°.
pub fn activity_orientation_degrees(
    display_degrees: i32,
    natural: NaturalOrientation,
) -> ActivityOrientation {
    let display = Angle::from_degrees(display_degrees).unwrap_or_else(|err| {
        tracing::warn!(%err, "Unknown screen orientation, defaulting to 0°");
        Angle::Deg0
    });
    activity_orientation(display, natural)
}

/// True if the device is in portrait at the given display rotation.
pub fn is_portrait(display: Angle, natural: NaturalOrientation) -> bool {
    match natural {
        NaturalOrientation::Landscape => !display.is_upright_axis(),
        NaturalOrientation::Portrait => display.is_upright_axis(),
    }
}

/// True if the device is in landscape at the given display rotation.
///
/// Always the complement of [`is_portrait`].
pub fn is_landscape(display: Angle, natural: NaturalOrientation) -> bool {
    !is_portrait(display, natural)
}

/// [`is_portrait`] for a raw integer; non-canonical input is never portrait.
pub fn is_portrait_degrees(display_degrees: i32, natural: NaturalOrientation) -> bool {
    Angle::from_degrees(display_degrees)
        .map(|display| is_portrait(display, natural))
        .unwrap_or(false)
}

/// [`is_landscape`] for a raw integer; non-canonical input is never landscape.
pub fn is_landscape_degrees(display_degrees: i32, natural: NaturalOrientation) -> bool {
    Angle::from_degrees(display_degrees)
        .map(|display| is_landscape(display, natural))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::ActivityOrientation as A;
    use crate::orientation::NaturalOrientation::{Landscape, Portrait};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[test]
    fn test_display_orientation_back_portrait_device() {
        let result = display_orientation(Angle::Deg90, Angle::Deg0, Portrait, CameraFacing::Back);
        assert_eq!(result, Angle::Deg90);
    }

    #[test]
    fn test_display_orientation_front_not_mirrored_in_portrait() {
        // isLandscape(0, Portrait) is false so no mirror
        let result =
            display_orientation(Angle::Deg90, Angle::Deg0, Portrait, CameraFacing::Front);
        assert_eq!(result, Angle::Deg90);
    }

    #[test]
    fn test_display_orientation_landscape_natural_device() {
        // isLandscape(90, Landscape) is false: 0 - 90 = 270
        let result =
            display_orientation(Angle::Deg0, Angle::Deg90, Landscape, CameraFacing::Front);
        assert_eq!(result, Angle::Deg270);
    }

    #[test]
    fn test_display_orientation_front_mirrored_in_landscape() {
        // Portrait phone rotated to 90 is landscape: 270 - 90 = 180, mirrored to 0
        let back = display_orientation(Angle::Deg270, Angle::Deg90, Portrait, CameraFacing::Back);
        let front =
            display_orientation(Angle::Deg270, Angle::Deg90, Portrait, CameraFacing::Front);
        assert_eq!(back, Angle::Deg180);
        assert_eq!(front, Angle::Deg0);
    }

    #[test]
    fn test_display_orientation_upside_down() {
        let result = display_orientation(Angle::Deg90, Angle::Deg180, Portrait, CameraFacing::Back);
        assert_eq!(result, Angle::Deg270);
    }

    #[test]
    fn test_activity_orientation_table() {
        let cases = [
            (Angle::Deg0, Landscape, A::Landscape),
            (Angle::Deg0, Portrait, A::Portrait),
            (Angle::Deg90, Landscape, A::ReversePortrait),
            (Angle::Deg90, Portrait, A::Landscape),
            (Angle::Deg180, Landscape, A::ReverseLandscape),
            (Angle::Deg180, Portrait, A::ReversePortrait),
            (Angle::Deg270, Landscape, A::Portrait),
            (Angle::Deg270, Portrait, A::ReverseLandscape),
        ];
        for (display, natural, expected) in cases {
            assert_eq!(
                activity_orientation(display, natural),
                expected,
                "display {} natural {:?}",
                display,
                natural
            );
        }
    }

    #[test]
    fn test_activity_orientation_degrees_unknown_defaults_to_zero() {
        assert_eq!(activity_orientation_degrees(45, Landscape), A::Landscape);
        assert_eq!(activity_orientation_degrees(-90, Portrait), A::Portrait);
    }

    /// Counts WARN events seen while installed.
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn warnings_during(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_activity_orientation_degrees_warns_on_unknown_angle() {
        let warnings = warnings_during(|| {
            assert_eq!(activity_orientation_degrees(45, Portrait), A::Portrait);
        });
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_activity_orientation_degrees_silent_on_known_angle() {
        let warnings = warnings_during(|| {
            activity_orientation_degrees(90, Landscape);
            activity_orientation_degrees(360, Portrait);
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_activity_orientation_degrees_accepts_360() {
        assert_eq!(activity_orientation_degrees(360, Portrait), A::Portrait);
        assert_eq!(activity_orientation_degrees(270, Portrait), A::ReverseLandscape);
    }

    #[test]
    fn test_is_portrait() {
        assert!(is_portrait(Angle::Deg0, Portrait));
        assert!(is_portrait(Angle::Deg180, Portrait));
        assert!(!is_portrait(Angle::Deg90, Portrait));
        assert!(is_portrait(Angle::Deg90, Landscape));
        assert!(is_portrait(Angle::Deg270, Landscape));
        assert!(!is_portrait(Angle::Deg0, Landscape));
    }

    #[test]
    fn test_portrait_and_landscape_are_exclusive() {
        for display in Angle::ALL {
            for natural in [Portrait, Landscape] {
                assert_ne!(is_portrait(display, natural), is_landscape(display, natural));
            }
        }
    }

    #[test]
    fn test_raw_predicates() {
        assert!(is_portrait_degrees(360, Portrait));
        assert!(is_landscape_degrees(360, Landscape));
        assert!(is_landscape_degrees(270, Portrait));
        assert!(!is_portrait_degrees(45, Portrait));
        assert!(!is_landscape_degrees(45, Portrait));
    }
}
