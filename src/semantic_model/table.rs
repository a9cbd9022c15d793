//! Table-level semantics

use serde::Serialize;
use super::field::FieldSemantic;

/// Business semantics of a table
#[derive(Debug, Clone, Serialize)]
pub struct TableSemantic {
    pub name: String,
    /// One-line business meaning
    pub business_meaning: String,
    /// Free-text description
    pub description: String,
    /// Primary key expression, possibly composite ("a,b,c")
    pub primary_key: Option<String>,
    /// Query patterns this table commonly answers
    pub common_queries: Option<Vec<String>>,
    /// Business rules the data is expected to obey
    pub business_rules: Option<Vec<String>>,
    /// Fields in declaration order
    pub fields: Vec<FieldSemantic>,
}

impl TableSemantic {
    pub fn new(
        name: impl Into<String>,
        business_meaning: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            business_meaning: business_meaning.into(),
            description: description.into(),
            primary_key: None,
            common_queries: None,
            business_rules: None,
            fields: Vec::new(),
        }
    }

    pub fn with_primary_key(mut self, key: impl Into<String>) -> Self {
        self.primary_key = Some(key.into());
        self
    }

    pub fn with_common_queries(mut self, queries: &[&str]) -> Self {
        self.common_queries = Some(queries.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_business_rules(mut self, rules: &[&str]) -> Self {
        self.business_rules = Some(rules.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldSemantic>) -> Self {
        self.fields = fields;
        self
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSemantic> {
        self.fields.iter().find(|f| f.name == name)
    }
}
