//! Physical constants for the Earth-Moon force calculation.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Newtonian gravitational constant (N·m²/kg²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Mass of the Earth (kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Mass of the Moon (kg)
pub const MOON_MASS_KG: f64 = 7.348e22;

/// Mean Earth-Moon centre distance (m)
pub const EARTH_MOON_DISTANCE_M: f64 = 384_400_000.0;

/// Recorded mean orbital speed of the Moon (m/s)
pub const MOON_ORBITAL_VELOCITY_MPS: f64 = 1022.0;

/// Earth-Moon values as a single constant set.
pub const EARTH_MOON: PhysicalConstants = PhysicalConstants {
    gravitational_constant: GRAVITATIONAL_CONSTANT,
    mass_primary: EARTH_MASS_KG,
    mass_secondary: MOON_MASS_KG,
    separation: EARTH_MOON_DISTANCE_M,
    secondary_velocity: MOON_ORBITAL_VELOCITY_MPS,
};

/// Inputs to the two-body force law.
///
/// Values are fixed once constructed. The `with_*` methods return modified
/// copies rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Gravitational constant G (N·m²/kg²)
    pub gravitational_constant: f64,
    /// Mass of the primary body (kg)
    pub mass_primary: f64,
    /// Mass of the secondary body (kg)
    pub mass_secondary: f64,
    /// Centre-to-centre distance between the bodies (m). Must be nonzero.
    pub separation: f64,
    /// Recorded orbital speed of the secondary (m/s).
    ///
    /// Not used by the force law; only [`crate::celestial::orbit_check`] reads it.
    pub secondary_velocity: f64,
}

impl PhysicalConstants {
    /// Earth as primary, Moon as secondary
    pub const fn earth_moon() -> Self {
        EARTH_MOON
    }

    pub fn with_separation(self, separation: f64) -> Self {
        Self { separation, ..self }
    }

    pub fn with_mass_primary(self, mass_primary: f64) -> Self {
        Self {
            mass_primary,
            ..self
        }
    }

    pub fn with_mass_secondary(self, mass_secondary: f64) -> Self {
        Self {
            mass_secondary,
            ..self
        }
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load from JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::earth_moon()
    }
}
