//! The SELECT-shaped query and its envelope

use serde::{Deserialize, Serialize};
use super::column::ColumnRef;
use super::condition::Condition;
use super::join::Join;
use super::order::OrderItem;

/// A single SELECT-shaped query
///
/// Built fresh per question, normalized once, then treated as immutable by
/// the renderer. On the wire the source list is keyed `from` and the filter
/// list `where`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectQuery {
    /// Select list; the renderer substitutes `*` when empty
    #[serde(default)]
    pub select: Vec<ColumnRef>,
    /// Source tables; more than one means comma-join semantics
    #[serde(rename = "from")]
    pub from_: Vec<String>,
    #[serde(default)]
    pub joins: Option<Vec<Join>>,
    /// WHERE predicates, conjunctive
    #[serde(rename = "where", default)]
    pub where_: Option<Vec<Condition>>,
    /// GROUP BY expressions, emitted unquoted
    #[serde(default)]
    pub group_by: Option<Vec<String>>,
    /// HAVING predicates, conjunctive
    #[serde(default)]
    pub having: Option<Vec<Condition>>,
    #[serde(default)]
    pub order_by: Option<Vec<OrderItem>>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl SelectQuery {
    /// Unrestricted read of every column of a single table
    pub fn all_from(table: impl Into<String>) -> Self {
        Self {
            select: vec![ColumnRef::expression("*")],
            from_: vec![table.into()],
            ..Default::default()
        }
    }
}

/// A translated query: natural-language intent plus the structured statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticQuery {
    /// Short summary of what the query answers
    pub intent: String,
    pub query: SelectQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_key_aliases() {
        let query = SelectQuery::all_from("users");
        let value = serde_json::to_value(&query).unwrap();
        assert!(value.get("from").is_some());
        assert!(value.get("from_").is_none());
        assert!(value.get("where").is_some());
        assert!(value.get("where_").is_none());
    }

    #[test]
    fn test_deserialize_from_wire_shape() {
        let json = r#"{
            "select": [{"table": null, "column": "*", "alias": null}],
            "from": ["users"],
            "where": [{"left": "is_active", "op": "=", "right": "true"}],
            "limit": 5
        }"#;
        let query: SelectQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.from_, ["users"]);
        assert_eq!(query.where_.as_ref().unwrap().len(), 1);
        assert_eq!(query.limit, Some(5));
        assert!(query.joins.is_none());
    }
}
