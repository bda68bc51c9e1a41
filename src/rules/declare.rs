//! Rule declaration and binding.
//!
//! Declaring a rule registers it right away and hands back a [`RuleBinder`].
//! The binder attaches the rule to properties of validatable types; each
//! attachment tracks the property and appends the rule to its bindings.
//! A type's bindings can also be declared in one place with a
//! [`SchemaBuilder`].
//!
//! ```rust,ignore
//! let registry = Registry::with_builtins()?;
//!
//! let is_slug = registry.declare_pattern_rule("isSlug", r"^[a-z0-9-]+$", "must be a slug")?;
//!
//! registry
//!     .schema::<Article>()
//!     .rule("author_email", ids::IS_EMAIL)
//!     .bind("slug", &is_slug)
//!     .rules("title", &[ids::IS_STRING]);
//! ```

use crate::core::error::ConfigurationError;
use crate::core::rule::Rule;
use crate::core::types::{ClassId, Validatable, Value};
use crate::registry::Registry;
use std::marker::PhantomData;

/// Handle for binding a declared rule to type properties.
#[derive(Debug, Clone)]
pub struct RuleBinder<'r> {
    registry: &'r Registry,
    identifier: String,
}

impl<'r> RuleBinder<'r> {
    /// Identifier of the rule this binder attaches.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Bind the rule to a property of `T`.
    pub fn bind<T: Validatable>(&self, property: &str) -> &Self {
        self.bind_class(ClassId::of::<T>(), property)
    }

    /// Bind the rule to a property of the type identified by `class`.
    pub fn bind_class(&self, class: ClassId, property: &str) -> &Self {
        self.registry.bind_rule_for_class(class, property, &self.identifier);
        self
    }
}

impl Registry {
    /// Declare a rule from a predicate and register it immediately.
    pub fn declare_rule<F>(
        &self,
        identifier: impl Into<String>,
        predicate: F,
        error_message: impl Into<String>,
    ) -> Result<RuleBinder<'_>, ConfigurationError>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.declare(Rule::new(identifier, predicate, error_message))
    }

    /// Declare a rule that matches a regular expression against the whole
    /// value, and register it immediately.
    pub fn declare_pattern_rule(
        &self,
        identifier: impl Into<String>,
        pattern: &str,
        error_message: impl Into<String>,
    ) -> Result<RuleBinder<'_>, ConfigurationError> {
        self.declare(Rule::pattern(identifier, pattern, error_message)?)
    }

    /// Register an already built rule and return its binder.
    pub fn declare(&self, rule: Rule) -> Result<RuleBinder<'_>, ConfigurationError> {
        let rule = self.register_rule(rule)?;
        Ok(RuleBinder {
            registry: self,
            identifier: rule.identifier().to_string(),
        })
    }

    /// Binder for a rule identifier, declared or not.
    ///
    /// Bindings to an identifier that is never registered are skipped when
    /// validating.
    pub fn binder(&self, identifier: impl Into<String>) -> RuleBinder<'_> {
        RuleBinder {
            registry: self,
            identifier: identifier.into(),
        }
    }

    /// Start declaring the validation schema of `T`.
    pub fn schema<T: Validatable>(&self) -> SchemaBuilder<'_, T> {
        SchemaBuilder {
            registry: self,
            _marker: PhantomData,
        }
    }
}

/// Fluent declaration of a type's property bindings.
///
/// Each call is applied to the registry as it is made.
pub struct SchemaBuilder<'r, T> {
    registry: &'r Registry,
    _marker: PhantomData<fn() -> T>,
}

impl<'r, T: Validatable> SchemaBuilder<'r, T> {
    /// Track a property without binding any rule to it.
    ///
    /// A tracked property is still reported as required when missing.
    pub fn property(self, property: &str) -> Self {
        self.registry.register_property::<T>(property);
        self
    }

    /// Bind a rule identifier to a property.
    pub fn rule(self, property: &str, identifier: &str) -> Self {
        self.registry.bind_rule::<T>(property, identifier);
        self
    }

    /// Bind several rule identifiers to a property, in order.
    pub fn rules(self, property: &str, identifiers: &[&str]) -> Self {
        for identifier in identifiers {
            self.registry.bind_rule::<T>(property, identifier);
        }
        self
    }

    /// Bind a declared rule to a property.
    pub fn bind(self, property: &str, binder: &RuleBinder<'_>) -> Self {
        binder.bind::<T>(property);
        self
    }

    /// The registry this schema is written into.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }
}
