//! # Fieldguard - Declarative Property Validation
//!
//! Fieldguard validates the properties of your types against declarative
//! rules. Rules are declared once, bound to properties of a type, and every
//! instance of that type is then validated against those bindings.
//!
//! ## Features
//!
//! - **Rule Registry**: every rule is registered under a unique identifier;
//!   duplicates are rejected when declared
//! - **Per-type Metadata**: bindings are keyed by type, so one declaration
//!   governs all instances
//! - **Built-in Catalog**: type checks, ranges, and formats such as email,
//!   URL, SSN, IP and MAC addresses
//! - **Three Entry Points**: collect all errors, stop at the first, or fail
//!   with it as an `Err`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldguard::prelude::*;
//!
//! struct User {
//!     email: Option<String>,
//!     age: Option<i64>,
//! }
//!
//! impl Validatable for User {
//!     fn property(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "email" => self.email.clone().map(Value::from),
//!             "age" => self.age.map(Value::from),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! // Declare the schema once, at startup
//! let registry = Registry::with_builtins()?;
//! let adult = in_range(&registry, 18.0, 130.0)?;
//! registry
//!     .schema::<User>()
//!     .rule("email", ids::IS_EMAIL)
//!     .rule("age", ids::IS_INT)
//!     .bind("age", &adult);
//!
//! // Validate any number of instances
//! let validator = Validator::new(&registry);
//! let user = User { email: Some("invalidemail".into()), age: Some(30) };
//!
//! if let Some(errors) = validator.validate(&user) {
//!     for error in &errors {
//!         println!("{}", error);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: values, rules, options and error types
//! - [`rules`]: rule registry, declaration facility and built-in catalog
//! - [`metadata`]: per-type property and binding metadata
//! - [`registry`]: the shared handle pairing rules with metadata
//! - [`validation`]: the validator

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod metadata;
pub mod registry;
pub mod rules;
pub mod validation;

pub use crate::core::error::{ConfigurationError, FieldguardError, ValidationError};
pub use crate::core::types::{Validatable, Value};
pub use crate::registry::Registry;
pub use crate::validation::Validator;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use fieldguard::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{ClassId, Validatable, Value, ValueKind};
    pub use crate::core::rule::Rule;
    pub use crate::core::options::{ReturnOptions, ValidationOptions};

    // Errors
    pub use crate::core::error::{
        ConfigResult, ConfigurationError, FieldguardError, FieldguardResult, ValidationError,
        ValidationErrorSummary, REQUIRED_CONSTRAINT, REQUIRED_MESSAGE,
    };

    // Registration
    pub use crate::registry::Registry;
    pub use crate::rules::declare::{RuleBinder, SchemaBuilder};
    pub use crate::rules::builtin::{ids, in_range, in_range_as};

    // Validation
    pub use crate::validation::Validator;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
