//! Numeric format rules.
//!
//! These match the textual form of a value, so both `"42"` and `42` satisfy
//! `isInteger`. Floats are coerced in shortest form: `2.0` reads as `"2"`.

use super::ids;
use crate::core::error::ConfigurationError;
use crate::registry::Registry;

/// Optionally negative integer.
pub const INTEGER_PATTERN: &str = r"^-?[0-9]+$";
/// Unsigned integer.
pub const POSITIVE_INTEGER_PATTERN: &str = r"^[0-9]+$";
/// Integer with a leading minus sign.
pub const NEGATIVE_INTEGER_PATTERN: &str = r"^-[0-9]+$";
/// Number with a fractional part.
pub const DECIMAL_PATTERN: &str = r"^-?[0-9]*\.[0-9]+$";
/// Latitude, -90 to 90.
pub const LATITUDE_PATTERN: &str = r"^([-+]?([1-8]?[0-9](\.[0-9]+)?|90(\.0+)?))$";
/// Longitude, -180 to 180.
pub const LONGITUDE_PATTERN: &str = r"^([-+]?(180(\.0+)?|((1[0-7][0-9])|([1-9]?[0-9]))(\.[0-9]+)?))$";

/// Register the numeric format rules.
pub fn register(registry: &Registry) -> Result<(), ConfigurationError> {
    registry.declare_pattern_rule(ids::IS_INTEGER, INTEGER_PATTERN, "The property must be an integer.")?;
    registry.declare_pattern_rule(
        ids::IS_POSITIVE_INTEGER,
        POSITIVE_INTEGER_PATTERN,
        "The property must be a positive integer.",
    )?;
    registry.declare_pattern_rule(
        ids::IS_NEGATIVE_INTEGER,
        NEGATIVE_INTEGER_PATTERN,
        "The property must be a negative integer.",
    )?;
    registry.declare_pattern_rule(ids::IS_DECIMAL, DECIMAL_PATTERN, "The property must be a decimal number.")?;
    registry.declare_pattern_rule(ids::IS_LATITUDE, LATITUDE_PATTERN, "The property must be a valid latitude.")?;
    registry.declare_pattern_rule(ids::IS_LONGITUDE, LONGITUDE_PATTERN, "The property must be a valid longitude.")?;
    Ok(())
}
