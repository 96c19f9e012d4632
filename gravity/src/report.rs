//! Formatting of the force result line.

/// Label that starts the output line
pub const FORCE_LABEL: &str = "Force between earth and moon:";

/// Unit suffix for force values
pub const FORCE_UNIT: &str = "N";

/// Format the single line printed by `earth_moon_force`.
///
/// The label is followed by two spaces, the value in the default `f64`
/// representation, one space and the unit.
pub fn format_force_line(force_newtons: f64) -> String {
    format!("{FORCE_LABEL}  {force_newtons} {FORCE_UNIT}")
}
