//! Physical schema hint rendering

use serde::{Deserialize, Serialize};

/// Sentinel emitted when no physical columns are supplied
pub const NO_PHYSICAL_SCHEMA: &str = "(no explicit table structure; infer from context)";

/// One raw column as reported by live introspection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalColumn {
    pub name: String,
    pub column_type: String,
}

/// One table worth of raw columns, in ordinal position order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalTable {
    pub name: String,
    pub columns: Vec<PhysicalColumn>,
}

impl PhysicalTable {
    pub fn new(name: impl Into<String>, columns: &[(&str, &str)]) -> Self {
        Self {
            name: name.into(),
            columns: columns
                .iter()
                .map(|(name, column_type)| PhysicalColumn {
                    name: name.to_string(),
                    column_type: column_type.to_string(),
                })
                .collect(),
        }
    }
}

/// Render a raw column listing, one line per table.
///
/// Used when a table has no semantic metadata, so the translation service
/// at least sees names and physical types.
pub fn build_physical_hint(schema: &[PhysicalTable]) -> String {
    if schema.is_empty() {
        return NO_PHYSICAL_SCHEMA.to_string();
    }

    schema
        .iter()
        .map(|table| {
            let columns: Vec<String> = table
                .columns
                .iter()
                .map(|c| format!("{} {}", c.name, c.column_type))
                .collect();
            format!("- {}: {}", table.name, columns.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
