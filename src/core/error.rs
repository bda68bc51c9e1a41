//! Error types for fieldguard.
//!
//! Two kinds of failure exist and they never mix:
//! - [`ConfigurationError`]: a rule catalog that cannot be built (duplicate
//!   identifiers, malformed patterns, unreadable options). Raised when rules
//!   are declared, never while validating.
//! - [`ValidationError`]: one failing property of one instance. These are
//!   ordinary values returned by the validator.

use crate::core::types::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of the constraint added for a missing property.
pub const REQUIRED_CONSTRAINT: &str = "required";

/// Message of the constraint added for a missing property.
pub const REQUIRED_MESSAGE: &str = "This property is required";

/// Top-level error type for fieldguard.
#[derive(Error, Debug)]
pub enum FieldguardError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while declaring rules or loading options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("A validation rule with the identifier '{identifier}' already exists. Each validation rule must have a unique identifier.")]
    DuplicateRule { identifier: String },

    #[error("Invalid pattern for rule '{identifier}' ({pattern}): {reason}")]
    InvalidPattern {
        identifier: String,
        pattern: String,
        reason: String,
    },

    #[error("Invalid validation options: {0}")]
    InvalidOptions(String),
}

/// Structured failure record for one property.
///
/// `constraints` maps each failed rule identifier to its message, in the
/// order the rules ran. The validator only hands out errors whose
/// constraint map is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the failing property.
    pub property: String,
    /// Snapshot of the validated instance, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Value>,
    /// The offending value, when requested and present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Failed rule identifier → error message.
    pub constraints: IndexMap<String, String>,
    /// Errors of nested objects. Reserved; nested validation is not performed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ValidationError>,
}

/// Compact serializable form of a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorSummary {
    /// Name of the failing property.
    pub property: String,
    /// Error messages in rule evaluation order.
    pub constraints: Vec<String>,
}

impl ValidationError {
    /// Create an empty error for a property.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            target: None,
            value: None,
            constraints: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Record a failed constraint.
    pub fn add_constraint(&mut self, identifier: impl Into<String>, message: impl Into<String>) {
        self.constraints.insert(identifier.into(), message.into());
    }

    /// Whether any constraint has been recorded.
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }

    /// Message recorded for a constraint identifier.
    pub fn constraint(&self, identifier: &str) -> Option<&str> {
        self.constraints.get(identifier).map(|s| s.as_str())
    }

    /// Failed constraint identifiers in evaluation order.
    pub fn constraint_ids(&self) -> impl Iterator<Item = &str> {
        self.constraints.keys().map(|s| s.as_str())
    }

    /// Error messages in evaluation order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.constraints.values().map(|s| s.as_str())
    }

    /// Whether the property was reported as missing.
    pub fn is_required_failure(&self) -> bool {
        self.constraints.contains_key(REQUIRED_CONSTRAINT)
    }

    /// Compact form: property name plus messages.
    pub fn summary(&self) -> ValidationErrorSummary {
        ValidationErrorSummary {
            property: self.property.clone(),
            constraints: self.messages().map(str::to_string).collect(),
        }
    }

    /// Compact form as JSON: `{"property": ..., "constraints": [...]}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "property": self.property,
            "constraints": self.messages().collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property '{}' failed", self.property)?;
        let mut messages = self.messages();
        if let Some(first) = messages.next() {
            write!(f, ": {}", first)?;
            for message in messages {
                write!(f, "; {}", message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type alias for fieldguard operations.
pub type FieldguardResult<T> = Result<T, FieldguardError>;

/// Result type alias for rule declaration.
pub type ConfigResult<T> = Result<T, ConfigurationError>;
