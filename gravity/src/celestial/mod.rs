//! Celestial body definitions and calculations
//!
//! Point-mass bodies in a plane, the force one body exerts on another, and a
//! check of a recorded orbital speed against the circular-orbit speed.

use crate::constants::{PhysicalConstants, EARTH_MASS_KG, EARTH_MOON_DISTANCE_M};
use crate::force::{ensure_finite, gravitational_force, ForceError};
use log::{debug, warn};
use nalgebra::Vector2;

/// Mean radius of the Earth (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Mean radius of the Moon (m)
pub const MOON_RADIUS_M: f64 = 1_737_000.0;

/// Moon mass used for the planar two-body setup (kg)
pub const MOON_BODY_MASS_KG: f64 = 7.347673e22;

/// Initial tangential speed of the Moon in the planar two-body setup (m/s)
pub const MOON_BODY_SPEED_MPS: f64 = 1023.006;

/// Recorded speeds further than this fraction from circular are logged as warnings
const ORBIT_SPEED_TOLERANCE: f64 = 0.05;

/// A point mass with a position and velocity in the orbital plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Mass (kg)
    pub mass: f64,
    /// Position (m)
    pub position: Vector2<f64>,
    /// Velocity (m/s)
    pub velocity: Vector2<f64>,
    /// Physical radius (m), informational only
    pub radius: f64,
}

impl Body {
    pub fn new(mass: f64, position: Vector2<f64>, velocity: Vector2<f64>, radius: f64) -> Self {
        Self {
            mass,
            position,
            velocity,
            radius,
        }
    }

    /// The Earth at rest at the origin
    pub fn earth() -> Self {
        Self::new(
            EARTH_MASS_KG,
            Vector2::zeros(),
            Vector2::zeros(),
            EARTH_RADIUS_M,
        )
    }

    /// The Moon one mean distance along -x, moving along +y
    pub fn moon() -> Self {
        Self::new(
            MOON_BODY_MASS_KG,
            Vector2::new(-EARTH_MOON_DISTANCE_M, 0.0),
            Vector2::new(0.0, MOON_BODY_SPEED_MPS),
            MOON_RADIUS_M,
        )
    }

    /// Magnitude of the velocity (m/s)
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Centre-to-centre distance between two bodies (m)
pub fn distance(a: &Body, b: &Body) -> f64 {
    (b.position - a.position).norm()
}

/// Force exerted on `a` by `b` (N).
///
/// Points from `a` toward `b`; the force on `b` is the negation. Coincident
/// bodies give [`ForceError::ZeroSeparation`].
pub fn pair_force(a: &Body, b: &Body, g: f64) -> Result<Vector2<f64>, ForceError> {
    let delta = b.position - a.position;
    let r = delta.norm();
    let magnitude = gravitational_force(g, a.mass, b.mass, r)?;
    // Normalise before scaling so magnitude / r cannot overflow
    let force = (delta / r) * magnitude;
    ensure_finite("force", force.x)?;
    ensure_finite("force", force.y)?;
    Ok(force)
}

/// Speed of a circular orbit of radius `radius` around `central_mass` (m/s).
///
/// v = sqrt(G·M / r)
pub fn circular_orbit_speed(g: f64, central_mass: f64, radius: f64) -> Result<f64, ForceError> {
    ensure_finite("gravitational constant", g)?;
    ensure_finite("central mass", central_mass)?;
    ensure_finite("radius", radius)?;
    if radius == 0.0 {
        return Err(ForceError::ZeroSeparation);
    }
    ensure_finite("orbital speed", (g * central_mass / radius).sqrt())
}

/// Recorded orbital speed compared with the circular-orbit speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCheck {
    /// Recorded speed of the secondary (m/s)
    pub recorded: f64,
    /// Circular-orbit speed at the recorded separation (m/s)
    pub circular: f64,
    /// `recorded / circular`
    pub ratio: f64,
}

impl OrbitCheck {
    /// True when the recorded speed is within `tolerance` (fractional) of circular
    pub fn is_near_circular(&self, tolerance: f64) -> bool {
        (self.ratio - 1.0).abs() <= tolerance
    }
}

/// Compare `secondary_velocity` against the circular-orbit speed around the primary.
pub fn orbit_check(constants: &PhysicalConstants) -> Result<OrbitCheck, ForceError> {
    let circular = circular_orbit_speed(
        constants.gravitational_constant,
        constants.mass_primary,
        constants.separation,
    )?;
    let recorded = constants.secondary_velocity;
    let check = OrbitCheck {
        recorded,
        circular,
        ratio: recorded / circular,
    };

    if check.is_near_circular(ORBIT_SPEED_TOLERANCE) {
        debug!(
            "Recorded orbital speed {:.1} m/s vs circular {:.1} m/s (ratio {:.4})",
            recorded, circular, check.ratio
        );
    } else {
        warn!(
            "Recorded orbital speed {:.1} m/s is far from circular {:.1} m/s (ratio {:.4})",
            recorded, circular, check.ratio
        );
    }

    Ok(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITATIONAL_CONSTANT;
    use approx::assert_relative_eq;

    #[test]
    fn test_presets() {
        let earth = Body::earth();
        let moon = Body::moon();

        assert_eq!(earth.speed(), 0.0);
        assert_relative_eq!(moon.speed(), 1023.006);
        assert_relative_eq!(distance(&earth, &moon), EARTH_MOON_DISTANCE_M);
        assert_relative_eq!(distance(&moon, &earth), EARTH_MOON_DISTANCE_M);
    }

    #[test]
    fn test_pair_force_matches_scalar_law() {
        let earth = Body::earth();
        let moon = Body::moon();

        let on_earth = pair_force(&earth, &moon, GRAVITATIONAL_CONSTANT).unwrap();
        let expected = gravitational_force(
            GRAVITATIONAL_CONSTANT,
            earth.mass,
            moon.mass,
            EARTH_MOON_DISTANCE_M,
        )
        .unwrap();

        assert_relative_eq!(on_earth.norm(), expected, max_relative = 1e-12);
        // Moon sits on -x, so Earth is pulled toward -x
        assert!(on_earth.x < 0.0);
        assert_relative_eq!(on_earth.y, 0.0);
    }

    #[test]
    fn test_pair_force_is_equal_and_opposite() {
        let a = Body::new(3.0e20, Vector2::new(1.0e6, -2.0e6), Vector2::zeros(), 1.0);
        let b = Body::new(5.0e21, Vector2::new(-4.0e6, 7.0e6), Vector2::zeros(), 1.0);

        let on_a = pair_force(&a, &b, GRAVITATIONAL_CONSTANT).unwrap();
        let on_b = pair_force(&b, &a, GRAVITATIONAL_CONSTANT).unwrap();

        assert_relative_eq!(on_a, -on_b, max_relative = 1e-12);
        // Attractive: force on a points toward b
        assert!(on_a.dot(&(b.position - a.position)) > 0.0);
    }

    #[test]
    fn test_pair_force_coincident_bodies() {
        let earth = Body::earth();
        let result = pair_force(&earth, &earth, GRAVITATIONAL_CONSTANT);
        assert!(matches!(result, Err(ForceError::ZeroSeparation)));
    }

    #[test]
    fn test_pair_force_tiny_separation_stays_finite() {
        let a = Body::new(1.0, Vector2::zeros(), Vector2::zeros(), 0.0);
        let b = Body::new(1.0, Vector2::new(1e-150, 0.0), Vector2::zeros(), 0.0);

        let on_a = pair_force(&a, &b, GRAVITATIONAL_CONSTANT).unwrap();
        assert!(on_a.x.is_finite() && on_a.y.is_finite());
        assert_relative_eq!(on_a.x, GRAVITATIONAL_CONSTANT / 1e-300, max_relative = 1e-12);
        assert_eq!(on_a.y, 0.0);
    }

    #[test]
    fn test_pair_force_overflowing_magnitude() {
        let a = Body::new(1e300, Vector2::zeros(), Vector2::zeros(), 0.0);
        let b = Body::new(1e300, Vector2::new(1.0, 1.0), Vector2::zeros(), 0.0);

        let result = pair_force(&a, &b, GRAVITATIONAL_CONSTANT);
        assert!(matches!(
            result,
            Err(ForceError::NonFinite {
                quantity: "force",
                ..
            })
        ));
    }

    #[test]
    fn test_circular_orbit_speed() {
        let v = circular_orbit_speed(GRAVITATIONAL_CONSTANT, EARTH_MASS_KG, EARTH_MOON_DISTANCE_M)
            .unwrap();
        assert_relative_eq!(v, 1018.266_160_168_769, max_relative = 1e-9);

        let result = circular_orbit_speed(GRAVITATIONAL_CONSTANT, EARTH_MASS_KG, 0.0);
        assert!(matches!(result, Err(ForceError::ZeroSeparation)));

        let result = circular_orbit_speed(GRAVITATIONAL_CONSTANT, EARTH_MASS_KG, -1.0);
        assert!(matches!(result, Err(ForceError::NonFinite { .. })));
    }

    #[test]
    fn test_orbit_check_earth_moon() {
        let check = orbit_check(&PhysicalConstants::earth_moon()).unwrap();

        assert_eq!(check.recorded, 1022.0);
        assert_relative_eq!(check.ratio, 1.003_666_860_372_353, max_relative = 1e-9);
        assert!(check.is_near_circular(0.01));
        assert!(!check.is_near_circular(0.001));
    }

    #[test]
    fn test_circular_orbit_speed_names_bad_input() {
        let result = circular_orbit_speed(f64::NAN, EARTH_MASS_KG, EARTH_MOON_DISTANCE_M);
        assert!(matches!(
            result,
            Err(ForceError::NonFinite {
                quantity: "gravitational constant",
                ..
            })
        ));

        let result =
            circular_orbit_speed(GRAVITATIONAL_CONSTANT, f64::INFINITY, EARTH_MOON_DISTANCE_M);
        assert!(matches!(
            result,
            Err(ForceError::NonFinite {
                quantity: "central mass",
                ..
            })
        ));
    }

    #[test]
    fn test_orbit_check_far_from_circular() {
        let constants = PhysicalConstants {
            secondary_velocity: 2000.0,
            ..PhysicalConstants::earth_moon()
        };
        let check = orbit_check(&constants).unwrap();

        assert_eq!(check.recorded, 2000.0);
        assert!(check.ratio > 1.9);
        assert!(!check.is_near_circular(ORBIT_SPEED_TOLERANCE));
        assert!(!check.is_near_circular(0.05));
    }

    #[test]
    fn test_orbit_check_non_finite_mass() {
        let constants = PhysicalConstants::earth_moon().with_mass_primary(f64::NAN);
        assert!(matches!(
            orbit_check(&constants),
            Err(ForceError::NonFinite {
                quantity: "central mass",
                ..
            })
        ));
    }

    #[test]
    fn test_orbit_check_zero_separation() {
        let constants = PhysicalConstants::earth_moon().with_separation(0.0);
        assert!(matches!(
            orbit_check(&constants),
            Err(ForceError::ZeroSeparation)
        ));
    }
}
