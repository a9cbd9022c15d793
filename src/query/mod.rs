//! Structured query representation (noun module)
//!
//! The dialect-independent SELECT shape produced by the translation
//! service: select list, sources, joins, predicates, grouping, ordering
//! and limit.

mod column;
mod condition;
mod join;
mod order;
mod select;

pub use column::ColumnRef;
pub use condition::{Condition, ConditionError, ScalarValue};
pub use join::{Join, JoinKind};
pub use order::{OrderItem, SortDirection};
pub use select::{SelectQuery, SemanticQuery};
