//! String format rules: contact details, identifiers, dates and codes.

use super::ids;
use crate::core::error::ConfigurationError;
use crate::core::rule::Rule;
use crate::core::types::Value;
use crate::registry::Registry;

/// Email address.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$";
/// HTTP(S) URL with optional scheme and path.
pub const URL_PATTERN: &str = r"^(https?://)?([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]+(/[A-Za-z0-9_ ./?%&=-]*)?$";
/// US phone number, optional `+1` prefix.
pub const PHONE_NUMBER_PATTERN: &str = r"^\+?1?\s?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$";
/// US ZIP or ZIP+4 code.
pub const POSTAL_CODE_PATTERN: &str = r"^[0-9]{5}(-[0-9]{4})?$";
/// Major card network numbers.
pub const CREDIT_CARD_PATTERN: &str = r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11})$";
/// `YYYY-MM-DD` date shape.
pub const DATE_PATTERN: &str = r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$";
/// Three or six digit hex color.
pub const HEX_COLOR_PATTERN: &str = r"^#?([a-fA-F0-9]{6}|[a-fA-F0-9]{3})$";
/// US SSN, excluding the never-issued area, group and serial numbers.
pub const SSN_PATTERN: &str = r"^(?!000|666|9[0-9][0-9])[0-9]{3}-(?!00)[0-9]{2}-(?!0000)[0-9]{4}$";
/// ASCII letters and digits only.
pub const ALPHANUMERIC_PATTERN: &str = r"^[a-zA-Z0-9]+$";
/// At least 8 characters with a lowercase, uppercase, digit and symbol.
pub const STRONG_PASSWORD_PATTERN: &str =
    r"^(?=.*[a-z])(?=.*[A-Z])(?=.*[0-9])(?=.*[@$!%*?&])[A-Za-z0-9@$!%*?&]{8,}$";

/// Register the format rules.
pub fn register(registry: &Registry) -> Result<(), ConfigurationError> {
    registry.declare_pattern_rule(ids::IS_EMAIL, EMAIL_PATTERN, "the property must be an email")?;
    registry.declare_pattern_rule(ids::IS_URL, URL_PATTERN, "The property must be a valid URL.")?;
    registry.declare_pattern_rule(
        ids::IS_PHONE_NUMBER,
        PHONE_NUMBER_PATTERN,
        "The property must be a valid US phone number.",
    )?;
    registry.declare_pattern_rule(
        ids::IS_POSTAL_CODE,
        POSTAL_CODE_PATTERN,
        "The property must be a valid US postal code.",
    )?;
    registry.declare_pattern_rule(
        ids::IS_CREDIT_CARD,
        CREDIT_CARD_PATTERN,
        "The property must be a valid credit card number.",
    )?;
    registry.declare_pattern_rule(
        ids::IS_DATE,
        DATE_PATTERN,
        "The property must be a valid date in YYYY-MM-DD format.",
    )?;
    registry.declare_pattern_rule(
        ids::IS_HEX_COLOR,
        HEX_COLOR_PATTERN,
        "The property must be a valid hex color code.",
    )?;
    registry.declare_pattern_rule(
        ids::IS_SSN,
        SSN_PATTERN,
        "The property must be a valid U.S. Social Security Number.",
    )?;
    registry.declare_pattern_rule(
        ids::IS_ALPHANUMERIC,
        ALPHANUMERIC_PATTERN,
        "The property must be alphanumeric (letters and numbers only).",
    )?;
    registry.declare_pattern_rule(
        ids::IS_STRONG_PASSWORD,
        STRONG_PASSWORD_PATTERN,
        "The password must be at least 8 characters long and include at least one uppercase letter, one lowercase letter, one number, and one special character.",
    )?;
    registry.register_rule(is_json_string())?;
    Ok(())
}

/// String that parses as a JSON object.
pub fn is_json_string() -> Rule {
    Rule::new(
        ids::IS_JSON_STRING,
        |value: &Value| {
            value
                .as_str()
                .and_then(|s| serde_json::from_str::<serde_json::Value>(s).ok())
                .map_or(false, |parsed| parsed.is_object())
        },
        "The property must be a valid JSON string.",
    )
}
