//! The registry handle shared by declarations and the validator.
//!
//! A [`Registry`] pairs a [`RuleRegistry`] with a [`MetadataStore`]. Rules
//! and bindings are written into it while types are being set up, and the
//! [`crate::Validator`] reads from it afterwards. Registries are ordinary
//! values, so tests can build isolated ones; [`Registry::global`] is the
//! process-wide instance preloaded with the built-in catalog.

use crate::core::error::{ConfigResult, ConfigurationError};
use crate::core::rule::Rule;
use crate::core::types::{ClassId, Validatable};
use crate::metadata::MetadataStore;
use crate::rules::registry::RuleRegistry;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

static GLOBAL: Lazy<Registry> =
    Lazy::new(|| Registry::with_builtins().expect("built-in rule catalog is valid"));

/// Rule registry plus per-type metadata.
///
/// Registration takes write locks; validation only ever takes read locks
/// and never holds one while a rule predicate runs.
#[derive(Debug, Default)]
pub struct Registry {
    rules: RwLock<RuleRegistry>,
    metadata: RwLock<MetadataStore>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(RuleRegistry::new()),
            metadata: RwLock::new(MetadataStore::new()),
        }
    }

    /// Create a registry pre-populated with the built-in rules.
    pub fn with_builtins() -> ConfigResult<Self> {
        let registry = Self::new();
        registry.load_builtins()?;
        Ok(registry)
    }

    /// Register the built-in rules into this registry.
    ///
    /// Fails on the first catalog identifier that is already taken; rules
    /// registered before the failure stay registered.
    pub fn load_builtins(&self) -> ConfigResult<()> {
        crate::rules::builtin::register_all(self)?;
        log::debug!("Loaded built-in rules ({} registered)", self.rule_count());
        Ok(())
    }

    /// The process-wide registry, with the built-in rules registered.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    // ========================================================================
    // Rules
    // ========================================================================

    /// Register a rule under its identifier.
    pub fn register_rule(&self, rule: Rule) -> Result<Arc<Rule>, ConfigurationError> {
        let rule = self.rules.write().register(rule)?;
        log::debug!("Registered rule '{}'", rule.identifier());
        Ok(rule)
    }

    /// Look up a rule by identifier.
    pub fn rule(&self, identifier: &str) -> Option<Arc<Rule>> {
        self.rules.read().get(identifier)
    }

    /// Check if a rule is registered.
    pub fn contains_rule(&self, identifier: &str) -> bool {
        self.rules.read().contains(identifier)
    }

    /// Get all registered rule identifiers, in registration order.
    pub fn rule_identifiers(&self) -> Vec<String> {
        self.rules.read().identifiers().map(str::to_string).collect()
    }

    /// Get the total number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.read().len()
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// Track a property of `T` for validation.
    pub fn register_property<T: Validatable>(&self, property: &str) {
        self.register_property_for_class(ClassId::of::<T>(), property);
    }

    /// Bind a rule identifier to a property of `T`, tracking the property.
    pub fn bind_rule<T: Validatable>(&self, property: &str, identifier: &str) {
        self.bind_rule_for_class(ClassId::of::<T>(), property, identifier);
    }

    /// Tracked properties of `T`, in enumeration order.
    pub fn properties_for<T: Validatable>(&self) -> Vec<String> {
        self.properties_for_class(ClassId::of::<T>())
    }

    /// Resolved rules bound to a property of `T`.
    ///
    /// `None` means no rule was ever bound; identifiers that are no longer
    /// registered are left out.
    pub fn validators_for<T: Validatable>(&self, property: &str) -> Option<Vec<Arc<Rule>>> {
        self.validators_for_class(ClassId::of::<T>(), property)
    }

    pub(crate) fn register_property_for_class(&self, class: ClassId, property: &str) {
        self.metadata.write().register_property_for_class(class, property);
    }

    pub(crate) fn bind_rule_for_class(&self, class: ClassId, property: &str, identifier: &str) {
        let mut metadata = self.metadata.write();
        metadata.register_property_for_class(class, property);
        metadata.register_validator_for_property(class, property, identifier);
        log::debug!("Bound rule '{}' to {}.{}", identifier, class, property);
    }

    pub(crate) fn properties_for_class(&self, class: ClassId) -> Vec<String> {
        self.metadata.read().properties_for_class(class)
    }

    pub(crate) fn validators_for_class(
        &self,
        class: ClassId,
        property: &str,
    ) -> Option<Vec<Arc<Rule>>> {
        let metadata = self.metadata.read();
        let rules = self.rules.read();
        metadata.validators_for_property(class, property, &rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Value;

    struct Profile;

    impl Validatable for Profile {
        fn property(&self, _name: &str) -> Option<Value> {
            None
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert_eq!(registry.rule_count(), 0);
        assert!(registry.properties_for::<Profile>().is_empty());
    }

    #[test]
    fn test_with_builtins() {
        let registry = Registry::with_builtins().unwrap();
        // One rule from each catalog category
        assert!(registry.contains_rule("isString"));
        assert!(registry.contains_rule("isEmail"));
        assert!(registry.contains_rule("isLongitude"));
        assert!(registry.contains_rule("isMACAddress"));
        assert_eq!(registry.rule_count(), 22);
        // Parameterized rules are declared on demand
        assert!(!registry.contains_rule("inRange"));
    }

    #[test]
    fn test_load_builtins_reports_conflict() {
        let registry = Registry::new();
        registry
            .register_rule(Rule::new("isUrl", |_: &Value| true, "taken"))
            .unwrap();

        let err = registry.load_builtins().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DuplicateRule {
                identifier: "isUrl".to_string()
            }
        );
        // Later categories were never reached
        assert!(!registry.contains_rule("isLongitude"));
        assert!(!registry.contains_rule("isIPv4"));
    }

    #[test]
    fn test_global_has_builtins() {
        assert!(Registry::global().contains_rule("isSSN"));
    }

    #[test]
    fn test_bind_rule_tracks_property() {
        let registry = Registry::new();
        registry
            .register_rule(Rule::new("isString", |v: &Value| v.as_str().is_some(), "string"))
            .unwrap();

        registry.bind_rule::<Profile>("nickname", "isString");
        registry.bind_rule::<Profile>("nickname", "isString");
        registry.register_property::<Profile>("nickname");

        assert_eq!(registry.properties_for::<Profile>(), vec!["nickname"]);
        assert_eq!(registry.validators_for::<Profile>("nickname").unwrap().len(), 2);
        assert!(registry.validators_for::<Profile>("bio").is_none());
    }

    #[test]
    fn test_duplicate_registration_through_handle() {
        let registry = Registry::new();
        let rule = Rule::new("isX", |_: &Value| true, "x");
        registry.register_rule(rule.clone()).unwrap();
        assert!(matches!(
            registry.register_rule(rule),
            Err(ConfigurationError::DuplicateRule { .. })
        ));
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
