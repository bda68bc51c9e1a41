//! Validation rules.
//!
//! A rule is a plain value: an identifier, a predicate, and the message
//! reported when the predicate rejects a value. Every rule executes the same
//! way, so there is no rule hierarchy, only many [`Rule`] instances.

use crate::core::error::ConfigurationError;
use crate::core::types::Value;
use fancy_regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a value satisfies a rule.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A named predicate plus the error message reported when it fails.
#[derive(Clone)]
pub struct Rule {
    identifier: String,
    predicate: Predicate,
    error_message: String,
}

impl Rule {
    /// Create a rule from an identifier, predicate and error message.
    pub fn new<F>(
        identifier: impl Into<String>,
        predicate: F,
        error_message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            identifier: identifier.into(),
            predicate: Arc::new(predicate),
            error_message: error_message.into(),
        }
    }

    /// Create a rule that matches a regular expression against the value.
    ///
    /// The pattern is compiled here, so a malformed pattern is reported when
    /// the rule is declared rather than when it first runs. Values are
    /// matched through [`Value::coerce_to_string`]; a match that the engine
    /// cannot complete (backtrack limit) counts as a failure.
    pub fn pattern(
        identifier: impl Into<String>,
        pattern: &str,
        error_message: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let identifier = identifier.into();
        let regex = Regex::new(pattern).map_err(|e| ConfigurationError::InvalidPattern {
            identifier: identifier.clone(),
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::new(
            identifier,
            move |value: &Value| {
                let text = value.coerce_to_string();
                regex.is_match(&text).unwrap_or(false)
            },
            error_message,
        ))
    }

    /// Unique identifier of this rule.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Message reported when the rule fails.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Run the predicate against a value.
    pub fn execute(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("identifier", &self.identifier)
            .field("error_message", &self.error_message)
            .field("predicate", &"<closure>")
            .finish()
    }
}
