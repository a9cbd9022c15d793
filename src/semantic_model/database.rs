//! Database-level semantics

use serde::Serialize;
use super::table::TableSemantic;

/// Business semantics of a whole database
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseSemantic {
    pub name: String,
    pub description: String,
    /// Business domain the database serves (retail, monitoring, ...)
    pub business_domain: String,
    /// Tables in declaration order
    pub tables: Vec<TableSemantic>,
}

impl DatabaseSemantic {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        business_domain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            business_domain: business_domain.into(),
            tables: Vec::new(),
        }
    }

    pub fn with_tables(mut self, tables: Vec<TableSemantic>) -> Self {
        self.tables = tables;
        self
    }

    /// Get a table by name
    pub fn table(&self, name: &str) -> Option<&TableSemantic> {
        self.tables.iter().find(|t| t.name == name)
    }
}
