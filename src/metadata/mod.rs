//! Metadata module.
//!
//! Records which properties of which types are validated, and by which rules.

pub mod store;

pub use store::{ClassMetadata, MetadataStore};
