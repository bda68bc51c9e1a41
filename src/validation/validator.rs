//! Validator implementation.

use crate::core::error::{ValidationError, REQUIRED_CONSTRAINT, REQUIRED_MESSAGE};
use crate::core::options::ValidationOptions;
use crate::core::types::{ClassId, Validatable, Value};
use crate::registry::Registry;
use indexmap::IndexMap;

/// Validates instances against the rules bound to their type.
///
/// Properties are visited in the order they were first bound. For each one
/// the validator reads the current value and then either:
/// - runs every bound rule against a present value, collecting one
///   constraint per failing rule;
/// - reports a single `required` constraint for a missing value; or
/// - skips a missing value entirely when `skip_missing_properties` is set.
///
/// A property yields an error only if at least one constraint was collected.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r Registry,
    options: ValidationOptions,
}

impl<'r> Validator<'r> {
    /// Create a validator reading from `registry`, with default options.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            options: ValidationOptions::default(),
        }
    }

    /// Set the options used by the entry points that take none.
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Options used by the entry points that take none.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate every tracked property.
    ///
    /// Returns `None` when no property failed.
    pub fn validate<T: Validatable>(&self, instance: &T) -> Option<Vec<ValidationError>> {
        self.validate_with(instance, &self.options)
    }

    /// [`Validator::validate`] with explicit options.
    pub fn validate_with<T: Validatable>(
        &self,
        instance: &T,
        options: &ValidationOptions,
    ) -> Option<Vec<ValidationError>> {
        let class = ClassId::of::<T>();
        let properties = self.registry.properties_for_class(class);
        log::trace!("Validating {} ({} properties)", class, properties.len());

        let errors: Vec<ValidationError> = properties
            .iter()
            .filter_map(|property| {
                self.validate_property(instance, class, property, &properties, options)
            })
            .collect();

        if errors.is_empty() {
            None
        } else {
            Some(errors)
        }
    }

    /// Validate properties until the first one fails.
    ///
    /// Returns that property's error, or `None` when every property passed.
    pub fn validate_first_failure<T: Validatable>(&self, instance: &T) -> Option<ValidationError> {
        self.validate_first_failure_with(instance, &self.options)
    }

    /// [`Validator::validate_first_failure`] with explicit options.
    pub fn validate_first_failure_with<T: Validatable>(
        &self,
        instance: &T,
        options: &ValidationOptions,
    ) -> Option<ValidationError> {
        let class = ClassId::of::<T>();
        let properties = self.registry.properties_for_class(class);

        properties.iter().find_map(|property| {
            self.validate_property(instance, class, property, &properties, options)
        })
    }

    /// Like [`Validator::validate_first_failure`], but returns the first
    /// failure as an `Err`.
    pub fn validate_or_fail<T: Validatable>(&self, instance: &T) -> Result<(), ValidationError> {
        self.validate_or_fail_with(instance, &self.options)
    }

    /// [`Validator::validate_or_fail`] with explicit options.
    pub fn validate_or_fail_with<T: Validatable>(
        &self,
        instance: &T,
        options: &ValidationOptions,
    ) -> Result<(), ValidationError> {
        match self.validate_first_failure_with(instance, options) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn validate_property<T: Validatable>(
        &self,
        instance: &T,
        class: ClassId,
        property: &str,
        properties: &[String],
        options: &ValidationOptions,
    ) -> Option<ValidationError> {
        let value = instance.property(property);
        let mut error = ValidationError::new(property);

        match &value {
            Some(value) => self.apply_validators(&mut error, class, property, value),
            None if !options.skip_missing_properties => {
                error.add_constraint(REQUIRED_CONSTRAINT, REQUIRED_MESSAGE);
            }
            None => {
                log::trace!("Skipping missing property {}.{}", class, property);
            }
        }

        if !error.has_constraints() {
            return None;
        }

        // Echoes are only built for properties that actually failed
        if options.return_options.target {
            error.target = Some(snapshot(instance, properties));
        }
        if options.return_options.value {
            error.value = value;
        }
        Some(error)
    }

    fn apply_validators(
        &self,
        error: &mut ValidationError,
        class: ClassId,
        property: &str,
        value: &Value,
    ) {
        let Some(rules) = self.registry.validators_for_class(class, property) else {
            return;
        };

        for rule in rules {
            if !rule.execute(value) {
                log::trace!("{}.{} failed rule '{}'", class, property, rule.identifier());
                error.add_constraint(rule.identifier(), rule.error_message());
            }
        }
    }
}

impl Validator<'static> {
    /// Create a validator over the process-wide registry.
    pub fn global() -> Self {
        Self::new(Registry::global())
    }
}

/// Snapshot of the tracked properties that are present on an instance.
fn snapshot<T: Validatable>(instance: &T, properties: &[String]) -> Value {
    let fields: IndexMap<String, Value> = properties
        .iter()
        .filter_map(|name| instance.property(name).map(|v| (name.clone(), v)))
        .collect();
    Value::Map(fields)
}
