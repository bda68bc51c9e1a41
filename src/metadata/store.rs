//! Per-type validation metadata.
//!
//! For each validatable type the store records which properties take part
//! in validation (deduplicated, first-insertion order) and, per property,
//! the identifiers of the rules bound to it (declaration order). Rules are
//! stored by identifier and resolved through a [`RuleRegistry`] on lookup.

use crate::core::rule::Rule;
use crate::core::types::ClassId;
use crate::rules::registry::RuleRegistry;
use indexmap::{IndexMap, IndexSet};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Metadata recorded for one type.
#[derive(Debug, Clone)]
pub struct ClassMetadata {
    /// Identity of the type.
    pub class: ClassId,
    /// Tracked properties, deduplicated, in first-insertion order.
    properties: IndexSet<String>,
    /// Bound rule identifiers per property, in declaration order.
    validators: IndexMap<String, Vec<String>>,
}

impl ClassMetadata {
    fn new(class: ClassId) -> Self {
        Self {
            class,
            properties: IndexSet::new(),
            validators: IndexMap::new(),
        }
    }

    /// Tracked properties in enumeration order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|s| s.as_str())
    }

    /// Rule identifiers bound to a property, if any were ever bound.
    pub fn rule_identifiers(&self, property: &str) -> Option<&[String]> {
        self.validators.get(property).map(|ids| ids.as_slice())
    }
}

/// Store of validation metadata for every type with bindings.
#[derive(Debug, Default)]
pub struct MetadataStore {
    classes: HashMap<TypeId, ClassMetadata>,
}

impl MetadataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    fn entry(&mut self, class: ClassId) -> &mut ClassMetadata {
        self.classes
            .entry(class.type_id())
            .or_insert_with(|| ClassMetadata::new(class))
    }

    /// Track a property of a type. Tracking it again is a no-op.
    pub fn register_property_for_class(&mut self, class: ClassId, property: &str) {
        let metadata = self.entry(class);
        if metadata.properties.insert(property.to_string()) {
            log::trace!("Tracking property '{}' on {}", property, class);
        }
    }

    /// Tracked properties of a type, empty if the type has none.
    pub fn properties_for_class(&self, class: ClassId) -> Vec<String> {
        self.classes
            .get(&class.type_id())
            .map(|m| m.properties.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Append a rule identifier to a property's bindings.
    pub fn register_validator_for_property(
        &mut self,
        class: ClassId,
        property: &str,
        identifier: &str,
    ) {
        self.entry(class)
            .validators
            .entry(property.to_string())
            .or_insert_with(Vec::new)
            .push(identifier.to_string());
    }

    /// Resolve the rules bound to a property.
    ///
    /// Returns `None` if no rule was ever bound to the property. Bound
    /// identifiers that do not resolve in `rules` are skipped, so the result
    /// may be an empty list.
    pub fn validators_for_property(
        &self,
        class: ClassId,
        property: &str,
        rules: &RuleRegistry,
    ) -> Option<Vec<Arc<Rule>>> {
        let identifiers = self.classes.get(&class.type_id())?.rule_identifiers(property)?;

        let resolved = identifiers
            .iter()
            .filter_map(|id| {
                let rule = rules.get(id);
                if rule.is_none() {
                    log::debug!(
                        "Rule '{}' bound to {}.{} is not registered; skipping",
                        id,
                        class,
                        property
                    );
                }
                rule
            })
            .collect();

        Some(resolved)
    }

    /// Metadata recorded for a type.
    pub fn class_metadata(&self, class: ClassId) -> Option<&ClassMetadata> {
        self.classes.get(&class.type_id())
    }

    /// Whether any property of the type is tracked.
    pub fn is_tracked(&self, class: ClassId) -> bool {
        self.classes
            .get(&class.type_id())
            .map_or(false, |m| !m.properties.is_empty())
    }

    /// Number of types with recorded metadata.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Value;

    struct Account;
    struct Invoice;

    fn rules() -> RuleRegistry {
        let mut rules = RuleRegistry::new();
        rules.register(Rule::new("isString", |v: &Value| v.as_str().is_some(), "string")).unwrap();
        rules.register(Rule::new("isNonEmpty", |v: &Value| v.as_str().map_or(false, |s| !s.is_empty()), "non-empty")).unwrap();
        rules
    }

    #[test]
    fn test_unknown_class_has_no_properties() {
        let store = MetadataStore::new();
        assert!(store.properties_for_class(ClassId::of::<Account>()).is_empty());
        assert!(!store.is_tracked(ClassId::of::<Account>()));
    }

    #[test]
    fn test_properties_deduplicated_in_insertion_order() {
        let mut store = MetadataStore::new();
        let class = ClassId::of::<Account>();
        store.register_property_for_class(class, "name");
        store.register_property_for_class(class, "email");
        store.register_property_for_class(class, "name");

        assert_eq!(store.properties_for_class(class), vec!["name", "email"]);
    }

    #[test]
    fn test_metadata_is_per_class() {
        let mut store = MetadataStore::new();
        store.register_property_for_class(ClassId::of::<Account>(), "name");
        store.register_property_for_class(ClassId::of::<Invoice>(), "total");

        assert_eq!(store.properties_for_class(ClassId::of::<Account>()), vec!["name"]);
        assert_eq!(store.properties_for_class(ClassId::of::<Invoice>()), vec!["total"]);
        assert_eq!(store.class_count(), 2);
    }

    #[test]
    fn test_validators_resolve_in_binding_order() {
        let rules = rules();
        let mut store = MetadataStore::new();
        let class = ClassId::of::<Account>();
        store.register_validator_for_property(class, "name", "isNonEmpty");
        store.register_validator_for_property(class, "name", "isString");

        let resolved = store.validators_for_property(class, "name", &rules).unwrap();
        let ids: Vec<_> = resolved.iter().map(|r| r.identifier()).collect();
        assert_eq!(ids, vec!["isNonEmpty", "isString"]);
    }

    #[test]
    fn test_no_bindings_is_distinct_from_empty() {
        let rules = rules();
        let mut store = MetadataStore::new();
        let class = ClassId::of::<Account>();

        assert!(store.validators_for_property(class, "name", &rules).is_none());

        store.register_validator_for_property(class, "name", "isUnknown");
        let resolved = store.validators_for_property(class, "name", &rules);
        assert_eq!(resolved.map(|r| r.len()), Some(0));
    }

    #[test]
    fn test_unresolved_identifiers_are_dropped() {
        let rules = rules();
        let mut store = MetadataStore::new();
        let class = ClassId::of::<Invoice>();
        store.register_validator_for_property(class, "ref", "isString");
        store.register_validator_for_property(class, "ref", "isGone");
        store.register_validator_for_property(class, "ref", "isNonEmpty");

        let resolved = store.validators_for_property(class, "ref", &rules).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(
            store.class_metadata(class).unwrap().rule_identifiers("ref").unwrap().len(),
            3
        );
    }
}
