//! Semantic schema metadata (noun module)
//!
//! Business-meaning annotations layered over the physical schema: what a
//! database serves, what each table records, what each field means and how
//! it is meaningfully queried. Read-only after startup.

mod builtin;
mod database;
mod field;
mod registry;
mod table;
mod types;

pub use database::DatabaseSemantic;
pub use field::{FieldSemantic, Relationship};
pub use registry::SemanticRegistry;
pub use table::TableSemantic;
pub use types::DataType;
