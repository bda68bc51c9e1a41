//! Network address rules.

use super::ids;
use crate::core::error::ConfigurationError;
use crate::registry::Registry;

/// Dotted-quad shape; octet values are not range checked.
pub const IPV4_PATTERN: &str = r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$";
/// Eight colon-separated groups; `::` compression is not accepted.
pub const IPV6_PATTERN: &str = r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$";
/// Six hex pairs separated by `:` or `-`.
pub const MAC_ADDRESS_PATTERN: &str = r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$";

/// Register the network address rules.
pub fn register(registry: &Registry) -> Result<(), ConfigurationError> {
    registry.declare_pattern_rule(ids::IS_IPV4, IPV4_PATTERN, "The property must be a valid IPv4 address.")?;
    registry.declare_pattern_rule(ids::IS_IPV6, IPV6_PATTERN, "The property must be a valid IPv6 address.")?;
    registry.declare_pattern_rule(
        ids::IS_MAC_ADDRESS,
        MAC_ADDRESS_PATTERN,
        "The property must be a valid MAC address.",
    )?;
    Ok(())
}
