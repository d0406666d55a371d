//! Question Generation Integration Tests
//!
//! End-to-end generation through the provider chain: AI-sourced sets,
//! bank-sourced degraded sets, and the variety rotation between calls.

use std::sync::Arc;

use serde_json::json;

use intervue::{
    InterviewType, ProviderChain, QuestionBankConfig, QuestionGenerator, QuestionRequest,
    SelectionStrategy,
};

use crate::support::ScriptedProvider;

fn generator(providers: Vec<Arc<ScriptedProvider>>) -> QuestionGenerator {
    let providers = providers
        .into_iter()
        .map(|p| p as Arc<dyn intervue::LlmProvider>)
        .collect();
    QuestionGenerator::new(Arc::new(ProviderChain::new(providers)))
        .with_strategy(SelectionStrategy::RoundRobin)
}

// ============================================================================
// AI-sourced sets
// ============================================================================

#[tokio::test]
async fn test_resume_grounded_generation() {
    let provider = ScriptedProvider::new(
        "openai",
        vec![Ok(json!({
            "questions": [
                "How did you shard the payments ledger?",
                "What made you pick Rust over Go for the gateway?",
                "Walk me through the outage you handled in 2024.",
                "How do you test retry logic?",
                "Which part of the migration would you redo?",
            ]
        })
        .to_string())],
    );
    let generator = generator(vec![provider.clone()]);

    let request = QuestionRequest::with_resume(
        InterviewType::Technical,
        "Five years on payments infrastructure, led a Rust gateway migration.",
        "Backend Engineer",
    );
    let questions = generator.generate(&request).await;

    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0].id, 1);
    assert_eq!(questions[4].id, 5);
    assert!(questions
        .iter()
        .all(|q| q.question_type == InterviewType::Technical));
    assert_eq!(questions[0].text, "How did you shard the payments ledger?");

    let prompts = provider.prompts();
    assert!(prompts[0].contains("payments infrastructure"));
    assert!(prompts[0].contains("Backend Engineer"));
}

#[tokio::test]
async fn test_count_bounds_the_output() {
    let provider = ScriptedProvider::new(
        "openai",
        vec![Ok(
            json!({ "questions": ["A?", "B?", "C?", "D?", "E?"] }).to_string()
        )],
    );
    let generator = generator(vec![provider]);

    let mut request = QuestionRequest::for_type(InterviewType::Behavioral);
    request.count = 2;
    let questions = generator.generate(&request).await;

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[1].id, 2);
    assert_eq!(questions[1].text, "B?");
}

// ============================================================================
// Degraded sets
// ============================================================================

#[tokio::test]
async fn test_outage_serves_bank_set_with_same_shape() {
    let generator = generator(vec![
        ScriptedProvider::failing("openai"),
        ScriptedProvider::failing("pollinations"),
    ]);

    let questions = generator
        .generate(&QuestionRequest::for_type(InterviewType::Hr))
        .await;

    let banks = QuestionBankConfig::default();
    let expected = &banks.variants_for(InterviewType::Hr)[0];
    assert_eq!(questions.len(), 5);
    for (index, question) in questions.iter().enumerate() {
        assert_eq!(question.id, index as u32 + 1);
        assert_eq!(question.question_type, InterviewType::Hr);
        assert_eq!(question.text, expected[index]);
    }
}

#[tokio::test]
async fn test_repeated_outages_rotate_bank_variants() {
    let generator = generator(vec![ScriptedProvider::failing("openai")]);
    let request = QuestionRequest::for_type(InterviewType::Communication);

    let first = generator.generate(&request).await;
    let second = generator.generate(&request).await;

    let first_texts: Vec<&str> = first.iter().map(|q| q.text.as_str()).collect();
    let second_texts: Vec<&str> = second.iter().map(|q| q.text.as_str()).collect();
    assert_ne!(first_texts, second_texts);
}

#[tokio::test]
async fn test_second_provider_rescues_generation() {
    let broken = ScriptedProvider::failing("openai");
    let backup = ScriptedProvider::new(
        "pollinations",
        vec![Ok(json!({ "questions": ["Backup question?"] }).to_string())],
    );
    let generator = generator(vec![broken.clone(), backup.clone()]);

    let questions = generator
        .generate(&QuestionRequest::for_type(InterviewType::Custom))
        .await;

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].text, "Backup question?");
    assert_eq!(broken.call_count(), 1);
    assert_eq!(backup.call_count(), 1);
}
