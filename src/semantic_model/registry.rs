//! Registry of semantic database definitions
//!
//! An explicit object built once at process start and shared by reference.
//! Nothing is written after construction, so concurrent reads need no
//! synchronization.

use super::builtin;
use super::database::DatabaseSemantic;
use super::field::FieldSemantic;
use super::table::TableSemantic;

/// In-memory collection of annotated databases, keyed by name
///
/// Lookups return `None` for anything unknown; absence of metadata is an
/// ordinary state, never a failure.
#[derive(Debug, Clone, Default)]
pub struct SemanticRegistry {
    databases: Vec<DatabaseSemantic>,
}

impl SemanticRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in definitions (shop, network)
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(builtin::shop());
        registry.register(builtin::network());
        registry
    }

    /// Add a database definition, replacing any existing one with the same
    /// name. Insertion order is preserved and drives hint rendering.
    pub fn register(&mut self, database: DatabaseSemantic) {
        match self.databases.iter().position(|d| d.name == database.name) {
            Some(index) => self.databases[index] = database,
            None => self.databases.push(database),
        }
    }

    /// Get a database by name
    pub fn database(&self, name: &str) -> Option<&DatabaseSemantic> {
        self.databases.iter().find(|d| d.name == name)
    }

    /// Get a table by (database, table) name
    pub fn table(&self, database: &str, table: &str) -> Option<&TableSemantic> {
        self.database(database)?.table(table)
    }

    /// Get a field by (database, table, field) name
    pub fn field(&self, database: &str, table: &str, field: &str) -> Option<&FieldSemantic> {
        self.table(database, table)?.field(field)
    }

    /// All registered databases, in registration order
    pub fn databases(&self) -> &[DatabaseSemantic] {
        &self.databases
    }

    pub fn len(&self) -> usize {
        self.databases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic_model::DataType;

    #[test]
    fn test_builtin_contents() {
        let registry = SemanticRegistry::builtin();
        assert_eq!(registry.len(), 2);
        assert!(registry.database("shop").is_some());
        assert!(registry.database("network").is_some());
        assert!(registry.database("warehouse").is_none());
    }

    #[test]
    fn test_nested_lookups() {
        let registry = SemanticRegistry::builtin();

        let orders = registry.table("shop", "orders").unwrap();
        assert_eq!(orders.primary_key.as_deref(), Some("id"));

        let amount = registry.field("shop", "orders", "total_amount").unwrap();
        assert_eq!(amount.data_type, DataType::Decimal);
        assert!(amount.supports_aggregation);

        let user_id = registry.field("shop", "orders", "user_id").unwrap();
        let rels = user_id.relationships.as_ref().unwrap();
        assert_eq!(rels[0].table, "users");
        assert_eq!(rels[0].field, "id");
    }

    #[test]
    fn test_absent_lookups_return_none() {
        let registry = SemanticRegistry::builtin();
        assert!(registry.table("shop", "invoices").is_none());
        assert!(registry.field("shop", "orders", "discount").is_none());
        assert!(registry.field("nowhere", "orders", "id").is_none());
    }

    #[test]
    fn test_primary_keys_opt_out_of_aggregation() {
        let registry = SemanticRegistry::builtin();
        for (db, table) in [("shop", "users"), ("shop", "orders"), ("shop", "products")] {
            let id = registry.field(db, table, "id").unwrap();
            assert!(!id.supports_aggregation, "{}.{}.id", db, table);
            assert!(id.supports_filter);
        }
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = SemanticRegistry::builtin();
        registry.register(DatabaseSemantic::new("shop", "Replacement", "Retail"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.database("shop").unwrap().description, "Replacement");
        // Order unchanged: shop still first
        assert_eq!(registry.databases()[0].name, "shop");
    }
}
