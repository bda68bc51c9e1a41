//! Type and range rules.

use super::ids;
use crate::core::error::ConfigurationError;
use crate::core::rule::Rule;
use crate::core::types::Value;
use crate::registry::Registry;
use crate::rules::declare::RuleBinder;

/// Register the type rules.
pub fn register(registry: &Registry) -> Result<(), ConfigurationError> {
    registry.register_rule(is_int())?;
    registry.register_rule(is_string())?;
    Ok(())
}

/// Numeric value without a fractional part.
///
/// Fractional and non-finite floats are rejected, as are numeric strings.
pub fn is_int() -> Rule {
    Rule::new(
        ids::IS_INT,
        |value: &Value| match value {
            Value::Integer(_) => true,
            Value::Float(f) => f.is_finite() && f.fract() == 0.0,
            _ => false,
        },
        "the Property Need To Be Of Type Int",
    )
}

/// String value.
pub fn is_string() -> Rule {
    Rule::new(
        ids::IS_STRING,
        |value: &Value| matches!(value, Value::String(_)),
        "the Property Need To Be Of Type String",
    )
}

/// Numeric value within `[min, max]`, under a custom identifier.
pub fn range_rule(identifier: impl Into<String>, min: f64, max: f64) -> Rule {
    Rule::new(
        identifier,
        move |value: &Value| value.as_float().map_or(false, |n| n >= min && n <= max),
        format!("the Property Need To Be Between {} and {}", min, max),
    )
}

/// Declare the `inRange` rule with the given bounds.
///
/// The identifier is fixed, so a registry holds one `inRange` rule; declare
/// further ranges with [`in_range_as`].
pub fn in_range(registry: &Registry, min: f64, max: f64) -> Result<RuleBinder<'_>, ConfigurationError> {
    in_range_as(registry, ids::IN_RANGE, min, max)
}

/// Declare a range rule under its own identifier.
pub fn in_range_as(
    registry: &Registry,
    identifier: impl Into<String>,
    min: f64,
    max: f64,
) -> Result<RuleBinder<'_>, ConfigurationError> {
    registry.declare(range_rule(identifier, min, max))
}
