//! Newtonian gravity for the Earth-Moon system.
//!
//! The crate is organised around a single calculation, F = G·m₁·m₂/r²:
//!
//! - [`constants`]: the physical values the calculation reads
//! - [`force`]: [`ForceCalculator`] and the scalar force law
//! - [`celestial`]: point bodies, the pairwise force vector and an orbital speed check
//! - [`report`]: the line printed by the `earth_moon_force` binary

pub mod celestial;
pub mod constants;
pub mod force;
pub mod report;

pub use constants::PhysicalConstants;
pub use force::{ForceCalculator, ForceError};
