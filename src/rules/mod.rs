//! Rules module.
//!
//! Contains the rule registry, the declaration facility, and the built-in
//! rule catalog.

pub mod registry;
pub mod declare;
pub mod builtin;

pub use registry::RuleRegistry;
pub use declare::{RuleBinder, SchemaBuilder};
pub use builtin::ids;
