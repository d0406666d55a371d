//! Feedback Integration Tests
//!
//! Answer analysis and resume review through the provider chain: vendor
//! casing variance, outage baselines, and input validation.

use std::sync::Arc;

use serde_json::json;

use intervue::{
    AnswerAnalysisRequest, AnswerAnalyzer, CoreError, EmotionalTone, InterviewType, ProviderChain,
    ResumeReviewRequest,
};

use crate::support::ScriptedProvider;

fn analyzer(providers: Vec<Arc<ScriptedProvider>>) -> AnswerAnalyzer {
    let providers = providers
        .into_iter()
        .map(|p| p as Arc<dyn intervue::LlmProvider>)
        .collect();
    AnswerAnalyzer::new(Arc::new(ProviderChain::new(providers)))
}

// ============================================================================
// Answer analysis
// ============================================================================

#[tokio::test]
async fn test_vendor_casing_variance_is_absorbed() {
    let payload = json!({
        "overall_score": "82",
        "fluencyScore": 88,
        "confidence_score": 79,
        "content_quality_score": 85,
        "areas_for_improvement": ["Tie the example back to the question"],
        "filler_word_count": 3,
        "emotional_tone": "Enthusiastic"
    });
    let analyzer = analyzer(vec![ScriptedProvider::new(
        "openai",
        vec![Ok(payload.to_string())],
    )]);

    let feedback = analyzer
        .analyze(&AnswerAnalysisRequest::new(
            "Describe your most significant achievement.",
            "I led the migration of our billing system with zero downtime.",
            InterviewType::Communication,
        ))
        .await
        .unwrap();

    // Numeric string, snake_case, and suffixed keys all land canonically.
    assert_eq!(feedback.overall_score, 82.0);
    assert_eq!(feedback.fluency_score, 88.0);
    assert_eq!(feedback.confidence_score, 79.0);
    assert_eq!(feedback.content_quality, 85.0);
    assert_eq!(feedback.filler_word_count, 3);
    assert_eq!(feedback.emotional_tone, EmotionalTone::Enthusiastic);
    assert_eq!(
        feedback.improvements,
        vec!["Tie the example back to the question"]
    );
}

#[tokio::test]
async fn test_silent_answer_with_outage_gets_baseline_feedback() {
    let analyzer = analyzer(vec![
        ScriptedProvider::failing("openai"),
        ScriptedProvider::failing("pollinations"),
    ]);

    let feedback = analyzer
        .analyze(&AnswerAnalysisRequest::new(
            "Why should we hire you?",
            "",
            InterviewType::Hr,
        ))
        .await
        .unwrap();

    assert_eq!(feedback.overall_score, 75.0);
    assert_eq!(feedback.clarity_score, 85.0);
    assert_eq!(feedback.emotional_tone, EmotionalTone::Professional);
    assert!(!feedback.strengths.is_empty());
    assert!(!feedback.improvements.is_empty());
}

#[tokio::test]
async fn test_prose_reply_falls_through_to_next_provider() {
    let chatty = ScriptedProvider::new(
        "chatty",
        vec![Ok("Here is my feedback: great answer!".to_string())],
    );
    let structured = ScriptedProvider::new(
        "structured",
        vec![Ok(json!({ "overallScore": 68 }).to_string())],
    );
    let analyzer = analyzer(vec![chatty, structured]);

    let feedback = analyzer
        .analyze(&AnswerAnalysisRequest::new(
            "Tell me about yourself.",
            "I am a backend engineer.",
            InterviewType::Custom,
        ))
        .await
        .unwrap();

    assert_eq!(feedback.overall_score, 68.0);
}

#[tokio::test]
async fn test_blank_question_is_rejected_before_any_provider_call() {
    let provider = ScriptedProvider::failing("openai");
    let analyzer = analyzer(vec![provider.clone()]);

    let result = analyzer
        .analyze(&AnswerAnalysisRequest::new("", "answer", InterviewType::Technical))
        .await;

    assert!(matches!(result, Err(CoreError::Validation(_))));
    assert_eq!(provider.call_count(), 0);
}

// ============================================================================
// Resume review
// ============================================================================

#[tokio::test]
async fn test_resume_review_round_trip() {
    let payload = json!({
        "strengths": ["Measured impact on every project"],
        "weaknesses": ["No distributed-systems exposure listed"],
        "improvements": ["Lead with the platform migration"],
        "matchScore": 77,
        "missingKeywords": ["Terraform"]
    });
    let analyzer = analyzer(vec![ScriptedProvider::new(
        "openai",
        vec![Ok(payload.to_string())],
    )]);

    let insights = analyzer
        .review_resume(&ResumeReviewRequest {
            resume_text: "Four years building deployment tooling in Rust.".to_string(),
            target_role: "Platform Engineer".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(insights.match_score, 77.0);
    assert_eq!(insights.missing_keywords, vec!["Terraform"]);
    assert_eq!(insights.weaknesses.len(), 1);
}

#[tokio::test]
async fn test_resume_review_requires_a_target_role() {
    let analyzer = analyzer(vec![ScriptedProvider::failing("openai")]);

    let result = analyzer
        .review_resume(&ResumeReviewRequest {
            resume_text: "Four years building deployment tooling.".to_string(),
            target_role: "  ".to_string(),
        })
        .await;

    assert!(matches!(result, Err(CoreError::Validation(_))));
}
