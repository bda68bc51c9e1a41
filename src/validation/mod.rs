//! Validation module.
//!
//! The validator reads the bindings recorded for an instance's type and runs
//! them against the instance's current property values.

pub mod validator;

pub use validator::Validator;
