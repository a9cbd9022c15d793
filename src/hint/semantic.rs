//! Semantic hint rendering

use crate::semantic_model::SemanticRegistry;

/// Sentinel emitted when a database has no semantic definitions
pub const NO_SEMANTIC_METADATA: &str = "(no semantic metadata defined)";

/// Render the semantic metadata of `database` as a human-readable block.
///
/// `tables`, when given, is an allow-list; tables not on it are skipped
/// entirely. Table and field order always follows the registry's insertion
/// order. An unknown database yields the sentinel rather than an error.
pub fn build_semantic_hint(
    registry: &SemanticRegistry,
    database: &str,
    tables: Option<&[String]>,
) -> String {
    let schema = match registry.database(database) {
        Some(schema) => schema,
        None => return NO_SEMANTIC_METADATA.to_string(),
    };

    let mut lines = vec![
        format!("Database: {} - {}", schema.name, schema.description),
        format!("Business domain: {}", schema.business_domain),
        String::new(),
    ];

    for table in &schema.tables {
        if let Some(allowed) = tables {
            if !allowed.iter().any(|name| name == &table.name) {
                continue;
            }
        }

        lines.push(format!("Table: {}", table.name));
        lines.push(format!("  Meaning: {}", table.business_meaning));
        lines.push(format!("  Description: {}", table.description));

        if let Some(key) = &table.primary_key {
            lines.push(format!("  Primary key: {}", key));
        }
        if let Some(queries) = &table.common_queries {
            lines.push(format!("  Common queries: {}", queries.join(", ")));
        }
        if let Some(rules) = &table.business_rules {
            lines.push(format!("  Business rules: {}", rules.join("; ")));
        }

        lines.push("  Fields:".to_string());
        for field in &table.fields {
            let mut line = format!(
                "    - {} ({}): {}",
                field.name, field.data_type, field.business_meaning
            );
            if let Some(examples) = &field.examples {
                line.push_str(&format!(" [examples: {}]", examples.join(", ")));
            }
            if let Some(constraints) = &field.constraints {
                line.push_str(&format!(" [constraints: {}]", constraints.join(", ")));
            }
            if let Some(relationships) = &field.relationships {
                let targets: Vec<String> = relationships
                    .iter()
                    .map(|r| format!("{}.{}", r.table, r.field))
                    .collect();
                line.push_str(&format!(" [references: {}]", targets.join(", ")));
            }
            lines.push(line);
        }

        lines.push(String::new());
    }

    lines.join("\n")
}
