//! Schema hint rendering (verb module)
//!
//! Builds the textual context block handed to the translation service:
//! semantic metadata from the registry, a raw physical column listing, or
//! both combined.

mod context;
mod physical;
mod semantic;

pub use context::build_schema_context;
pub use physical::{build_physical_hint, PhysicalColumn, PhysicalTable, NO_PHYSICAL_SCHEMA};
pub use semantic::{build_semantic_hint, NO_SEMANTIC_METADATA};
