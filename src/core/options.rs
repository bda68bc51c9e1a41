//! Per-call validation options.
//!
//! Options can be built in code or loaded from a TOML table; any field left
//! out takes its default.
//!
//! ```toml
//! skip_missing_properties = true
//!
//! [return_options]
//! target = false
//! ```

use crate::core::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Options controlling a single validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Skip missing properties instead of reporting them as required.
    pub skip_missing_properties: bool,
    /// Which optional fields to attach to produced errors.
    pub return_options: ReturnOptions,
}

/// Optional fields echoed back on each [`crate::ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnOptions {
    /// Attach a snapshot of the validated instance.
    pub target: bool,
    /// Attach the offending property value.
    pub value: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            skip_missing_properties: false,
            return_options: ReturnOptions::default(),
        }
    }
}

impl Default for ReturnOptions {
    fn default() -> Self {
        Self {
            target: true,
            value: true,
        }
    }
}

impl ValidationOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(source).map_err(|e| ConfigurationError::InvalidOptions(e.to_string()))
    }

    /// Set whether missing properties are skipped.
    pub fn skip_missing_properties(mut self, skip: bool) -> Self {
        self.skip_missing_properties = skip;
        self
    }

    /// Set whether errors carry the instance snapshot.
    pub fn return_target(mut self, target: bool) -> Self {
        self.return_options.target = target;
        self
    }

    /// Set whether errors carry the offending value.
    pub fn return_value(mut self, value: bool) -> Self {
        self.return_options.value = value;
        self
    }
}
