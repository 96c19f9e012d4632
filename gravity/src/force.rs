//! Newton's law of universal gravitation for two point masses.
//!
//! The scalar force magnitude is
//!
//! ```text
//! F = G · m₁ · m₂ / r²
//! ```
//!
//! with G in N·m²/kg², masses in kg and r in metres, giving F in newtons.
//! A zero separation is reported as [`ForceError::ZeroSeparation`] instead of
//! being allowed to produce an infinite result.

use crate::constants::PhysicalConstants;
use log::debug;
use thiserror::Error;

/// Errors that can occur while evaluating the force law
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForceError {
    #[error("Division by zero: separation between bodies is zero")]
    ZeroSeparation,

    #[error("Non-finite {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, ForceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ForceError::NonFinite { quantity, value })
    }
}

/// Gravitational force magnitude between two point masses.
///
/// # Arguments
///
/// * `g` - Gravitational constant (N·m²/kg²)
/// * `m1` - Mass of the first body (kg)
/// * `m2` - Mass of the second body (kg)
/// * `r` - Distance between the body centres (m)
///
/// # Returns
///
/// * `Ok(f64)` - Force magnitude in newtons
/// * `Err(ForceError::ZeroSeparation)` - `r` is zero
/// * `Err(ForceError::NonFinite)` - an input, or the result, is NaN or infinite
///
/// # Examples
///
/// ```rust
/// use gravity::force::gravitational_force;
///
/// let f = gravitational_force(6.674e-11, 1.0, 1.0, 1.0).unwrap();
/// assert_eq!(f, 6.674e-11);
/// ```
pub fn gravitational_force(g: f64, m1: f64, m2: f64, r: f64) -> Result<f64, ForceError> {
    ensure_finite("gravitational constant", g)?;
    ensure_finite("primary mass", m1)?;
    ensure_finite("secondary mass", m2)?;
    ensure_finite("separation", r)?;

    // Catches -0.0 as well
    if r == 0.0 {
        return Err(ForceError::ZeroSeparation);
    }

    // r² can still underflow to zero for tiny separations
    ensure_finite("force", g * m1 * m2 / (r * r))
}

/// Computes the force between the two bodies described by a [`PhysicalConstants`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForceCalculator {
    constants: PhysicalConstants,
}

impl ForceCalculator {
    /// Create a calculator over the given constants
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    /// Calculator over the Earth-Moon values
    pub fn earth_moon() -> Self {
        Self::new(PhysicalConstants::earth_moon())
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Gravitational force magnitude in newtons.
    ///
    /// Fails with [`ForceError::ZeroSeparation`] when the separation is zero.
    pub fn compute_force(&self) -> Result<f64, ForceError> {
        let c = &self.constants;
        let force = gravitational_force(
            c.gravitational_constant,
            c.mass_primary,
            c.mass_secondary,
            c.separation,
        )?;

        debug!(
            "F = {:e} * {:e} * {:e} / ({:e})^2 = {:e} N",
            c.gravitational_constant, c.mass_primary, c.mass_secondary, c.separation, force
        );

        Ok(force)
    }
}
