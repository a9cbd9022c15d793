//! Combined schema context

use crate::semantic_model::SemanticRegistry;
use super::physical::{build_physical_hint, PhysicalTable};
use super::semantic::{build_semantic_hint, NO_SEMANTIC_METADATA};

/// Assemble the full context block for the translation prompt.
///
/// When the database has semantic metadata the semantic block leads and the
/// physical listing follows. Without it, only the physical listing is
/// emitted, with a note telling the service to infer business meaning from
/// raw names.
pub fn build_schema_context(
    registry: &SemanticRegistry,
    database: &str,
    tables: Option<&[String]>,
    physical: &[PhysicalTable],
) -> String {
    let semantic = build_semantic_hint(registry, database, tables);
    let physical_hint = build_physical_hint(physical);

    if semantic == NO_SEMANTIC_METADATA {
        format!(
            "Physical schema:\n{}\n\n(no semantic metadata defined; infer business meaning from table and column names)",
            physical_hint
        )
    } else {
        format!(
            "Semantic model:\n{}\n\nPhysical schema:\n{}",
            semantic, physical_hint
        )
    }
}
