//! Built-in rule catalog.
//!
//! This module contains the standard rules that ship with fieldguard. All of
//! them except the parameterized [`in_range`] are registered by
//! [`register_all`] (and so by [`Registry::with_builtins`] and the global
//! registry) and are bound by identifier:
//!
//! ```rust,ignore
//! registry.schema::<User>().rule("email", ids::IS_EMAIL);
//! ```

mod types;
mod formats;
mod numeric;
mod network;

use crate::core::error::ConfigurationError;
use crate::registry::Registry;

/// Identifiers of the built-in rules.
pub mod ids {
    /// Numeric value with no fractional part.
    ///
    /// Stricter than a plain "is a number" check: `7.5` fails, while `7.0`
    /// passes. Declare a custom rule to accept any number.
    pub const IS_INT: &str = "isInt";
    /// String value.
    pub const IS_STRING: &str = "isString";
    /// Numeric value within inclusive bounds.
    pub const IN_RANGE: &str = "inRange";
    /// Email address.
    pub const IS_EMAIL: &str = "isEmail";
    /// HTTP(S) URL, scheme optional.
    pub const IS_URL: &str = "isUrl";
    /// US phone number.
    pub const IS_PHONE_NUMBER: &str = "isPhoneNumber";
    /// US postal (ZIP or ZIP+4) code.
    pub const IS_POSTAL_CODE: &str = "isPostalCode";
    /// Integer in decimal notation.
    pub const IS_INTEGER: &str = "isInteger";
    /// Unsigned integer in decimal notation.
    pub const IS_POSITIVE_INTEGER: &str = "isPositiveInteger";
    /// Integer with a leading minus sign.
    pub const IS_NEGATIVE_INTEGER: &str = "isNegativeInteger";
    /// Number with a fractional part.
    pub const IS_DECIMAL: &str = "isDecimal";
    /// Visa, MasterCard, Discover, Amex, Diners or JCB card number.
    pub const IS_CREDIT_CARD: &str = "isCreditCard";
    /// Dotted-quad IPv4 address.
    pub const IS_IPV4: &str = "isIPv4";
    /// Full (uncompressed) IPv6 address.
    pub const IS_IPV6: &str = "isIPv6";
    /// `YYYY-MM-DD` date.
    pub const IS_DATE: &str = "isDate";
    /// Hex color code, `#` optional.
    pub const IS_HEX_COLOR: &str = "isHexColor";
    /// US Social Security Number.
    pub const IS_SSN: &str = "isSSN";
    /// ASCII letters and digits.
    pub const IS_ALPHANUMERIC: &str = "isAlphanumeric";
    /// Password of at least 8 characters mixing cases, digits and symbols.
    pub const IS_STRONG_PASSWORD: &str = "isStrongPassword";
    /// MAC address.
    pub const IS_MAC_ADDRESS: &str = "isMACAddress";
    /// String holding a JSON object.
    pub const IS_JSON_STRING: &str = "isJsonString";
    /// Latitude in degrees.
    pub const IS_LATITUDE: &str = "isLatitude";
    /// Longitude in degrees.
    pub const IS_LONGITUDE: &str = "isLongitude";
}

/// Register all built-in rules.
pub fn register_all(registry: &Registry) -> Result<(), ConfigurationError> {
    types::register(registry)?;
    formats::register(registry)?;
    numeric::register(registry)?;
    network::register(registry)?;
    Ok(())
}

// Re-export for direct access
pub use types::{in_range, in_range_as, is_int, is_string, range_rule};
pub use formats::{
    is_json_string,
    ALPHANUMERIC_PATTERN, CREDIT_CARD_PATTERN, DATE_PATTERN, EMAIL_PATTERN, HEX_COLOR_PATTERN,
    PHONE_NUMBER_PATTERN, POSTAL_CODE_PATTERN, SSN_PATTERN, STRONG_PASSWORD_PATTERN, URL_PATTERN,
};
pub use numeric::{
    DECIMAL_PATTERN, INTEGER_PATTERN, LATITUDE_PATTERN, LONGITUDE_PATTERN,
    NEGATIVE_INTEGER_PATTERN, POSITIVE_INTEGER_PATTERN,
};
pub use network::{IPV4_PATTERN, IPV6_PATTERN, MAC_ADDRESS_PATTERN};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let registry = Registry::new();
        register_all(&registry).unwrap();

        for id in [
            ids::IS_INT,
            ids::IS_STRING,
            ids::IS_EMAIL,
            ids::IS_URL,
            ids::IS_PHONE_NUMBER,
            ids::IS_POSTAL_CODE,
            ids::IS_INTEGER,
            ids::IS_POSITIVE_INTEGER,
            ids::IS_NEGATIVE_INTEGER,
            ids::IS_DECIMAL,
            ids::IS_CREDIT_CARD,
            ids::IS_IPV4,
            ids::IS_IPV6,
            ids::IS_DATE,
            ids::IS_HEX_COLOR,
            ids::IS_SSN,
            ids::IS_ALPHANUMERIC,
            ids::IS_STRONG_PASSWORD,
            ids::IS_MAC_ADDRESS,
            ids::IS_JSON_STRING,
            ids::IS_LATITUDE,
            ids::IS_LONGITUDE,
        ] {
            assert!(registry.contains_rule(id), "missing built-in rule {id}");
        }
        assert_eq!(registry.rule_count(), 22);
    }

    #[test]
    fn test_register_all_twice_fails() {
        let registry = Registry::new();
        register_all(&registry).unwrap();
        assert!(matches!(
            register_all(&registry),
            Err(ConfigurationError::DuplicateRule { .. })
        ));
    }
}
