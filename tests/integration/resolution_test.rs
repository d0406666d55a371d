//! Fallback Resolution Integration Tests
//!
//! Exercises the provider chain through the public crate surface:
//! short-circuit on first success, deterministic static fallback on
//! exhaustion, and timeout handling.

use serde_json::{json, Value};

use intervue::{Constraint, FallbackConfig, FieldSpec, InvokeOptions, ProviderChain};

use crate::support::ScriptedProvider;

fn verdict_schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(
            "score",
            Constraint::NumberInRange {
                min: 0.0,
                max: 100.0,
            },
            json!(50.0),
        ),
        FieldSpec::new("verdict", Constraint::NonEmptyText, json!("No verdict.")),
    ]
}

// ============================================================================
// Short-circuit
// ============================================================================

#[tokio::test]
async fn test_first_success_stops_the_chain() {
    let broken = ScriptedProvider::failing("broken");
    let garbled = ScriptedProvider::new("garbled", vec![Ok("sorry, prose only".to_string())]);
    let healthy = ScriptedProvider::new(
        "healthy",
        vec![Ok(r#"{"score": 91, "verdict": "strong"}"#.to_string())],
    );
    let spare = ScriptedProvider::new("spare", vec![Ok(r#"{"score": 1}"#.to_string())]);

    let chain = ProviderChain::new(vec![
        broken.clone(),
        garbled.clone(),
        healthy.clone(),
        spare.clone(),
    ]);
    let (record, log) = chain
        .resolve("prompt", &InvokeOptions::json(), &verdict_schema(), &Value::Null)
        .await;

    assert_eq!(record["score"], json!(91.0));
    assert_eq!(record["verdict"], json!("strong"));
    assert_eq!(log.resolved_via.as_deref(), Some("healthy"));
    assert_eq!(log.attempts.len(), 3);
    assert_eq!(log.failed_attempts_count(), 2);
    assert_eq!(spare.call_count(), 0);
}

// ============================================================================
// Exhaustion
// ============================================================================

#[tokio::test]
async fn test_exhaustion_serves_the_same_record_every_time() {
    let fallback = json!({ "score": 42, "verdict": "prepared offline" });

    for _ in 0..3 {
        let chain = ProviderChain::new(vec![
            ScriptedProvider::failing("a"),
            ScriptedProvider::failing("b"),
        ]);
        let (record, log) = chain
            .resolve("prompt", &InvokeOptions::json(), &verdict_schema(), &fallback)
            .await;

        assert_eq!(record["score"], json!(42.0));
        assert_eq!(record["verdict"], json!("prepared offline"));
        assert!(log.used_static_fallback);
        assert!(log.resolved_via.is_none());
        assert_eq!(log.failed_attempts_count(), 2);
    }
}

// ============================================================================
// Timeouts
// ============================================================================

#[tokio::test]
async fn test_stalled_provider_gives_way_under_deadline() {
    let stalled = ScriptedProvider::slow("stalled", 500);
    let healthy = ScriptedProvider::new("healthy", vec![Ok(r#"{"score": 70}"#.to_string())]);

    let chain = ProviderChain::new(vec![stalled, healthy]).with_config(FallbackConfig {
        timeout_per_attempt_ms: 25,
    });
    let (record, log) = chain
        .resolve("prompt", &InvokeOptions::json(), &verdict_schema(), &Value::Null)
        .await;

    assert_eq!(record["score"], json!(70.0));
    assert_eq!(log.attempts[0].failure_kind.as_deref(), Some("timeout"));
    assert_eq!(log.resolved_via.as_deref(), Some("healthy"));
}
