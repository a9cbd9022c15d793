//! End-to-end translation tests with scripted backends
//!
//! Exercises the full pipeline: hint → prompt → backend reply → normalize →
//! render, including the fallback policy.

mod common;

use common::{ScriptedBackend, UnreachableBackend};
use semsql::{translate_question, SemanticRegistry, TranslateError, TranslateOptions};

fn registry() -> SemanticRegistry {
    SemanticRegistry::builtin()
}

#[tokio::test]
async fn test_happy_path_renders_reply() {
    let backend = ScriptedBackend::new(
        r#"{
            "intent": "Count orders per user",
            "query": {
                "select": [{"table": null, "column": "count(*)", "alias": "cnt"}],
                "from": ["orders"],
                "group_by": ["user_id"],
                "order_by": [{"by": "cnt", "direction": "desc"}],
                "limit": 10
            }
        }"#,
    );

    let result = translate_question(
        &registry(),
        &backend,
        "Which users place the most orders?",
        &TranslateOptions::default(),
    )
    .await;

    assert!(!result.is_fallback());
    assert_eq!(result.semantic.intent, "Count orders per user");
    assert_eq!(
        result.sql,
        "SELECT count(*) AS `cnt` FROM `orders` GROUP BY user_id ORDER BY cnt DESC LIMIT 10"
    );
}

#[tokio::test]
async fn test_fenced_reply_is_stripped() {
    let backend = ScriptedBackend::new(
        "```json\n{\"intent\": \"All users\", \"query\": {\"select\": [{\"table\": null, \"column\": \"*\", \"alias\": null}], \"from\": [\"users\"]}}\n```",
    );

    let result = translate_question(
        &registry(),
        &backend,
        "Show all users",
        &TranslateOptions::default(),
    )
    .await;

    assert!(!result.is_fallback());
    assert_eq!(result.sql, "SELECT * FROM `users`");
}

#[tokio::test]
async fn test_malformed_predicates_are_repaired_not_fatal() {
    let backend = ScriptedBackend::new(
        r#"{
            "intent": "Paid orders",
            "query": {
                "select": [{"table": null, "column": "*", "alias": null}],
                "from": ["orders"],
                "where": [
                    {"left": "status", "op": "=", "right": "'paid'"},
                    {"left": "", "op": "=", "right": "1"},
                    {"left": "total_amount", "op": ">", "right": null},
                    "not a predicate"
                ]
            }
        }"#,
    );

    let result = translate_question(
        &registry(),
        &backend,
        "Show paid orders",
        &TranslateOptions::default(),
    )
    .await;

    assert!(!result.is_fallback());
    assert_eq!(result.sql, "SELECT * FROM `orders` WHERE status = 'paid'");
}

#[tokio::test]
async fn test_unparseable_reply_falls_back() {
    let backend = ScriptedBackend::new("I am sorry, I cannot answer that.");

    let result = translate_question(
        &registry(),
        &backend,
        "Show all users",
        &TranslateOptions::default(),
    )
    .await;

    assert!(result.is_fallback());
    assert_eq!(result.sql, "SELECT * FROM `users`");
    assert_eq!(result.semantic.intent, "Look up user records");
    assert!(matches!(
        result.error,
        Some(TranslateError::InvalidReply(_))
    ));
}

#[tokio::test]
async fn test_reply_without_sources_falls_back() {
    let backend = ScriptedBackend::new(
        r#"{"intent": "Nothing", "query": {"select": [], "from": []}}"#,
    );

    let result = translate_question(
        &registry(),
        &backend,
        "Show me something",
        &TranslateOptions::default(),
    )
    .await;

    assert!(result.is_fallback());
    assert_eq!(result.sql, "SELECT * FROM `users`");
}

#[tokio::test]
async fn test_unreachable_service_falls_back_with_transport_error() {
    let result = translate_question(
        &registry(),
        &UnreachableBackend,
        "Show all users",
        &TranslateOptions::default(),
    )
    .await;

    assert!(result.is_fallback());
    assert_eq!(result.sql, "SELECT * FROM `users`");
    assert!(matches!(result.error, Some(TranslateError::Transport(_))));
}

#[tokio::test]
async fn test_unknown_database_still_translates() {
    let backend = ScriptedBackend::new(
        r#"{"intent": "All rows", "query": {"select": [{"table": null, "column": "*", "alias": null}], "from": ["mystery"]}}"#,
    );

    let options = TranslateOptions {
        database: "warehouse".to_string(),
        ..Default::default()
    };
    let result =
        translate_question(&registry(), &backend, "Show everything", &options).await;

    assert!(!result.is_fallback());
    assert_eq!(result.sql, "SELECT * FROM `mystery`");
}
