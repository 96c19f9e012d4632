//! Prints the gravitational force between the Earth and the Moon.
//!
//! Takes no options. Set `RUST_LOG=debug` to see the inputs and the orbital
//! speed check on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use gravity::celestial::orbit_check;
use gravity::report::format_force_line;
use gravity::ForceCalculator;

#[derive(Parser, Debug)]
#[command(
    name = "earth_moon_force",
    about = "Computes F = G·m₁·m₂/r² for the Earth and the Moon",
    version,
    long_about = None
)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let calculator = ForceCalculator::earth_moon();
    let force = calculator
        .compute_force()
        .context("Failed to compute Earth-Moon force")?;

    // Diagnostic only; the recorded Moon speed plays no part in the force
    if let Err(e) = orbit_check(calculator.constants()) {
        log::warn!("Orbit check skipped: {e}");
    }

    println!("{}", format_force_line(force));
    Ok(())
}
