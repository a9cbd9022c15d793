//! Instruction prompt for the translation service

/// The JSON shape the service must reply with, shown verbatim in the prompt
const REPLY_SHAPE: &str = r#"{
  "intent": "one-line summary of the query intent",
  "query": {
    "select": [
      {"table": "table name or null", "column": "column name or expression", "alias": "alias or null"}
    ],
    "from": ["primary table name"],
    "joins": [
      {"table": "table name", "on": "join condition", "kind": "inner"}
    ],
    "where": [
      {"left": "left-hand expression", "op": "operator", "right": "right-hand value"}
    ],
    "group_by": ["grouping column"],
    "having": [
      {"left": "left-hand expression", "op": "operator", "right": "right-hand value"}
    ],
    "order_by": [
      {"by": "sort expression", "direction": "asc"}
    ],
    "limit": null
  }
}"#;

/// Render the full instruction given to the translation service.
///
/// `schema_context` is the combined hint block; the reply contract is the
/// JSON shape embedded below and nothing else.
pub fn build_prompt(question: &str, schema_context: &str) -> String {
    format!(
        "You are an expert data analysis assistant. Given a natural-language question and \
the database context below (business semantics plus physical structure), produce a JSON \
object describing the matching semantic SQL query.

{schema_context}

Analyse the business intent of the question, pick the appropriate tables and fields, and \
reply with exactly the following JSON shape and nothing else:

{REPLY_SHAPE}

Guidelines:
1. Choose aggregate functions (COUNT, SUM, AVG, MAX, MIN) from the business meaning of each field
2. Time fields usually drive filtering and grouping; use suitable date functions
3. Foreign-key relationships drive joins; mind the join conditions
4. Boolean fields are usually status filters
5. Monetary fields are usually aggregated and sorted

Question: {question}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_question_and_context() {
        let prompt = build_prompt("How many users signed up today?", "Table: users");
        assert!(prompt.contains("Question: How many users signed up today?"));
        assert!(prompt.contains("Table: users"));
    }

    #[test]
    fn test_prompt_carries_reply_shape() {
        let prompt = build_prompt("q", "ctx");
        assert!(prompt.contains("\"intent\""));
        assert!(prompt.contains("\"from\": [\"primary table name\"]"));
        assert!(prompt.contains("\"order_by\""));
    }
}
