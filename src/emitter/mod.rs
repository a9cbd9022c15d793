//! SQL rendering (verb module)
//!
//! Deterministic, pure translation from a SelectQuery to a single MySQL
//! statement string.

mod sql;

pub use sql::{render_sql, with_physical_source};
