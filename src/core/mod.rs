//! Core types for the fieldguard validation library.
//!
//! This module contains the foundational pieces the registry and validator
//! are built from:
//! - Property values and the [`Validatable`] trait
//! - Rules
//! - Validation options
//! - Error types

pub mod types;
pub mod rule;
pub mod options;
pub mod error;

// Re-export commonly used types
pub use types::{ClassId, Validatable, Value, ValueKind};
pub use rule::{Predicate, Rule};
pub use options::{ReturnOptions, ValidationOptions};
pub use error::{
    ConfigurationError, FieldguardError, ValidationError, ValidationErrorSummary,
    REQUIRED_CONSTRAINT, REQUIRED_MESSAGE,
};
