//! Permissive wire shapes for translation replies

use serde::Deserialize;
use serde_json::Value;
use crate::query::{ColumnRef, Join, OrderItem};

/// The reply envelope the translation service must produce
#[derive(Debug, Deserialize)]
pub struct CandidateReply {
    pub intent: String,
    pub query: CandidateQuery,
}

/// A candidate query as it comes off the wire
///
/// WHERE and HAVING entries stay raw JSON here: the service occasionally
/// emits fragments that are not valid predicates, and those must be
/// filtered out individually rather than failing the whole parse.
#[derive(Debug, Deserialize)]
pub struct CandidateQuery {
    #[serde(default)]
    pub select: Vec<ColumnRef>,
    #[serde(rename = "from")]
    pub from_: Vec<String>,
    #[serde(default)]
    pub joins: Option<Vec<Join>>,
    #[serde(rename = "where", default)]
    pub where_: Option<Vec<Value>>,
    #[serde(default)]
    pub group_by: Option<Vec<String>>,
    #[serde(default)]
    pub having: Option<Vec<Value>>,
    #[serde(default)]
    pub order_by: Option<Vec<OrderItem>>,
    #[serde(default)]
    pub limit: Option<u64>,
}
