//! End-to-end question translation

use tracing::{debug, info, warn};
use crate::emitter::render_sql;
use crate::hint::{build_schema_context, PhysicalTable};
use crate::normalizer::{normalize_reply, CandidateReply};
use crate::query::{SelectQuery, SemanticQuery};
use crate::semantic_model::SemanticRegistry;
use super::backend::TranslationBackend;
use super::error::TranslateError;
use super::prompt::build_prompt;

/// Table read when translation fails and no better answer exists
const FALLBACK_TABLE: &str = "users";

/// What the translation runs against
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Database whose semantic metadata feeds the hint
    pub database: String,
    /// Optional allow-list restricting the hint to these tables
    pub tables: Option<Vec<String>>,
    /// Raw physical columns, when live introspection supplied them
    pub physical_schema: Vec<PhysicalTable>,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            database: "shop".to_string(),
            tables: None,
            physical_schema: Vec::new(),
        }
    }
}

/// Outcome of one translation: always a usable query, possibly the fallback
#[derive(Debug)]
pub struct Translation {
    /// The structured query, normalized
    pub semantic: SemanticQuery,
    /// The rendered statement
    pub sql: String,
    /// The failure that forced the fallback, when one occurred
    pub error: Option<TranslateError>,
}

impl Translation {
    /// True when the result is the fixed fallback rather than a real reply
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Translate a natural-language question into a semantic query and its SQL.
///
/// Failures to reach the service or to decode its reply never surface as
/// hard errors: the fixed fallback query is substituted, rendered through
/// the same path, and the cause is reported in `Translation::error`.
pub async fn translate_question(
    registry: &SemanticRegistry,
    backend: &dyn TranslationBackend,
    question: &str,
    options: &TranslateOptions,
) -> Translation {
    info!(question, database = %options.database, "translating question");

    let context = build_schema_context(
        registry,
        &options.database,
        options.tables.as_deref(),
        &options.physical_schema,
    );
    let prompt = build_prompt(question, &context);

    match obtain_candidate(backend, &prompt).await {
        Ok(semantic) => {
            info!(intent = %semantic.intent, "translation succeeded");
            finish(semantic, None)
        }
        Err(error) => {
            warn!(%error, "translation failed; substituting fallback query");
            finish(fallback_query(), Some(error))
        }
    }
}

async fn obtain_candidate(
    backend: &dyn TranslationBackend,
    prompt: &str,
) -> Result<SemanticQuery, TranslateError> {
    let reply = backend.complete(prompt).await?;
    let body = strip_code_fence(&reply);
    let candidate: CandidateReply = serde_json::from_str(body).map_err(|e| {
        TranslateError::InvalidReply(format!("reply is not the expected JSON shape: {}", e))
    })?;
    normalize_reply(candidate).map_err(|e| TranslateError::InvalidReply(e.to_string()))
}

fn finish(semantic: SemanticQuery, error: Option<TranslateError>) -> Translation {
    let sql = render_sql(&semantic.query);
    debug!(%sql, "rendered statement");
    Translation {
        semantic,
        sql,
        error,
    }
}

/// Full unrestricted read of the default table; always renders valid SQL.
fn fallback_query() -> SemanticQuery {
    SemanticQuery {
        intent: "Look up user records".to_string(),
        query: SelectQuery::all_from(FALLBACK_TABLE),
    }
}

/// Strip one optional Markdown code fence around the reply body.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}
