//! Candidate repair and validation

use serde_json::Value;
use crate::query::{Condition, ScalarValue, SelectQuery, SemanticQuery};
use super::error::NormalizeError;
use super::types::CandidateReply;

/// Validate and repair a freshly parsed candidate.
///
/// Malformed WHERE and HAVING entries are dropped silently; everything else
/// passes through unchanged. A partially wrong query is preferred over no
/// query, since the statement is illustrative for human review. Only a
/// candidate with no source table at all is rejected.
pub fn normalize_reply(reply: CandidateReply) -> Result<SemanticQuery, NormalizeError> {
    let candidate = reply.query;
    if candidate.from_.is_empty() {
        return Err(NormalizeError::NoSourceTables);
    }

    let query = SelectQuery {
        select: candidate.select,
        from_: candidate.from_,
        joins: candidate.joins,
        where_: candidate.where_.map(keep_valid_conditions),
        group_by: candidate.group_by,
        having: candidate.having.map(keep_valid_conditions),
        order_by: candidate.order_by,
        limit: candidate.limit,
    };

    Ok(SemanticQuery {
        intent: reply.intent,
        query,
    })
}

fn keep_valid_conditions(entries: Vec<Value>) -> Vec<Condition> {
    entries.iter().filter_map(condition_from_value).collect()
}

/// A predicate survives only as an object with a non-empty string `left`,
/// a non-empty string `op`, and a present text or numeric `right`.
fn condition_from_value(value: &Value) -> Option<Condition> {
    let entry = value.as_object()?;
    let left = entry.get("left")?.as_str()?;
    let op = entry.get("op")?.as_str()?;
    if left.is_empty() || op.is_empty() {
        return None;
    }
    let right = match entry.get("right")? {
        Value::String(text) => ScalarValue::Text(text.clone()),
        Value::Number(number) => ScalarValue::Number(number.clone()),
        _ => return None,
    };
    Condition::new(left, op, right).ok()
}
