//! semsql - Translate natural-language questions into semantic SQL
//!
//! This library provides:
//! - Semantic schema metadata (business meaning for databases, tables, fields)
//! - Hint rendering (the schema context block given to the language model)
//! - A structured query representation (SemanticQuery, SelectQuery)
//! - Candidate normalization (best-effort repair of model replies)
//! - A deterministic MySQL statement renderer
//! - The translation orchestrator with its fixed fallback policy
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `semantic_model/` - annotated databases (SemanticRegistry, DatabaseSemantic, TableSemantic, FieldSemantic)
//! - `query/` - structured query types (SemanticQuery, SelectQuery, Condition, Join, OrderItem)
//!
//! **Verb modules** (transformations):
//! - `hint/` - registry + raw columns → schema context text
//! - `normalizer/` - wire candidate → validated SemanticQuery
//! - `emitter/` - SelectQuery → MySQL statement string
//! - `translator/` - question → prompt → backend → Translation
//!
//! # Example
//!
//! ```ignore
//! use semsql::{translate_question, OllamaBackend, SemanticRegistry, TranslateOptions};
//!
//! let registry = SemanticRegistry::builtin();
//! let backend = OllamaBackend::from_env("qwen2.5:7b");
//! let result = translate_question(
//!     &registry,
//!     &backend,
//!     "How many orders were placed last week?",
//!     &TranslateOptions::default(),
//! ).await;
//! println!("{}", result.sql);
//! ```

pub mod emitter;
pub mod hint;
pub mod normalizer;
pub mod query;
pub mod semantic_model;
pub mod translator;

// Re-export commonly used types
pub use emitter::{render_sql, with_physical_source};
pub use hint::{
    build_physical_hint, build_schema_context, build_semantic_hint, PhysicalColumn, PhysicalTable,
    NO_PHYSICAL_SCHEMA, NO_SEMANTIC_METADATA,
};
pub use normalizer::{normalize_reply, CandidateQuery, CandidateReply, NormalizeError};
pub use query::{
    ColumnRef, Condition, ConditionError, Join, JoinKind, OrderItem, ScalarValue, SelectQuery,
    SemanticQuery, SortDirection,
};
pub use semantic_model::{
    DataType, DatabaseSemantic, FieldSemantic, Relationship, SemanticRegistry, TableSemantic,
};
pub use translator::{
    build_prompt, translate_question, OllamaBackend, TranslateError, TranslateOptions,
    Translation, TranslationBackend, DEFAULT_OLLAMA_URL,
};
