//! Field-level semantics

use serde::Serialize;
use super::types::DataType;

/// A reference from one field to a field in another table
#[derive(Debug, Clone, Serialize)]
pub struct Relationship {
    /// Target table name
    pub table: String,
    /// Target field name
    pub field: String,
}

/// Business semantics of a single column
///
/// Capability flags describe what the field is meaningfully used for; they
/// all default to true, with primary keys opting out of aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSemantic {
    pub name: String,
    pub data_type: DataType,
    /// What the value means to the business
    pub business_meaning: String,
    /// Sample values, rendered into the hint when present
    pub examples: Option<Vec<String>>,
    /// Constraint labels such as "primary key", "unique", "not null"
    pub constraints: Option<Vec<String>>,
    /// Foreign-key style references, in declaration order
    pub relationships: Option<Vec<Relationship>>,
    pub supports_aggregation: bool,
    pub supports_filter: bool,
    pub supports_sort: bool,
}

impl FieldSemantic {
    pub fn new(
        name: impl Into<String>,
        data_type: DataType,
        business_meaning: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            business_meaning: business_meaning.into(),
            examples: None,
            constraints: None,
            relationships: None,
            supports_aggregation: true,
            supports_filter: true,
            supports_sort: true,
        }
    }

    pub fn with_examples(mut self, examples: &[&str]) -> Self {
        self.examples = Some(examples.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_constraints(mut self, constraints: &[&str]) -> Self {
        self.constraints = Some(constraints.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Add a reference to `table`.`field`
    pub fn with_relationship(mut self, table: impl Into<String>, field: impl Into<String>) -> Self {
        self.relationships
            .get_or_insert_with(Vec::new)
            .push(Relationship {
                table: table.into(),
                field: field.into(),
            });
        self
    }

    pub fn no_aggregation(mut self) -> Self {
        self.supports_aggregation = false;
        self
    }

    pub fn no_filter(mut self) -> Self {
        self.supports_filter = false;
        self
    }

    pub fn no_sort(mut self) -> Self {
        self.supports_sort = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_defaults() {
        let field = FieldSemantic::new("amount", DataType::Decimal, "Order amount");
        assert!(field.supports_aggregation);
        assert!(field.supports_filter);
        assert!(field.supports_sort);
        assert!(field.examples.is_none());
        assert!(field.relationships.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let field = FieldSemantic::new("id", DataType::Integer, "Identifier")
            .with_constraints(&["primary key"])
            .no_aggregation()
            .no_sort();
        assert!(!field.supports_aggregation);
        assert!(field.supports_filter);
        assert!(!field.supports_sort);
        assert_eq!(field.constraints.as_deref().unwrap(), ["primary key"]);

        let opaque = FieldSemantic::new("payload", DataType::Json, "Raw event payload").no_filter();
        assert!(!opaque.supports_filter);
    }

    #[test]
    fn test_relationships_accumulate_in_order() {
        let field = FieldSemantic::new("user_id", DataType::Integer, "Owner")
            .with_relationship("users", "id")
            .with_relationship("accounts", "user_id");
        let rels = field.relationships.unwrap();
        assert_eq!(rels[0].table, "users");
        assert_eq!(rels[0].field, "id");
        assert_eq!(rels[1].table, "accounts");
    }
}
