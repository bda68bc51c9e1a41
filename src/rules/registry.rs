//! Rule registry: the canonical definition of every rule, by identifier.

use crate::core::error::ConfigurationError;
use crate::core::rule::Rule;
use indexmap::IndexMap;
use std::sync::Arc;

/// Registry of all declared rules.
///
/// Identifiers are unique. Registering an identifier a second time is a
/// configuration error even when the rule content is identical; rules are
/// never replaced or removed once registered.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    /// Rules indexed by their unique identifier, in registration order.
    rules: IndexMap<String, Arc<Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Register a rule.
    pub fn register(&mut self, rule: Rule) -> Result<Arc<Rule>, ConfigurationError> {
        if self.rules.contains_key(rule.identifier()) {
            return Err(ConfigurationError::DuplicateRule {
                identifier: rule.identifier().to_string(),
            });
        }

        let rule = Arc::new(rule);
        self.rules
            .insert(rule.identifier().to_string(), Arc::clone(&rule));
        Ok(rule)
    }

    /// Look up a rule by identifier.
    pub fn get(&self, identifier: &str) -> Option<Arc<Rule>> {
        self.rules.get(identifier).cloned()
    }

    /// Check if a rule is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.rules.contains_key(identifier)
    }

    /// Get all registered identifiers, in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|s| s.as_str())
    }

    /// Get the total number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
