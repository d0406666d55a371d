//! Session Flow Integration Tests
//!
//! A whole practice session end to end: generate questions, analyze
//! answers, aggregate webcam emotion, finalize, and verify the single
//! store write.

use std::sync::Arc;

use serde_json::json;

use intervue::{
    AnswerAnalysisRequest, AnswerAnalyzer, DetectedEmotion, EmotionAggregator, EmotionSample,
    FaceReading, FrameAnalysis, InMemorySessionStore, InterviewType, ProviderChain,
    QuestionGenerator, QuestionRequest, SelectionStrategy, SessionTracker,
};

use crate::support::ScriptedProvider;

fn chain(providers: Vec<Arc<ScriptedProvider>>) -> Arc<ProviderChain> {
    let providers = providers
        .into_iter()
        .map(|p| p as Arc<dyn intervue::LlmProvider>)
        .collect();
    Arc::new(ProviderChain::new(providers))
}

fn feedback_payload(overall: u32) -> String {
    json!({
        "overallScore": overall,
        "strengths": ["Clear narrative"],
        "improvements": ["Quantify the outcome"],
        "emotionalTone": "confident"
    })
    .to_string()
}

// ============================================================================
// Full session
// ============================================================================

#[tokio::test]
async fn test_full_session_produces_one_stored_result() {
    let provider = ScriptedProvider::new(
        "openai",
        vec![
            Ok(json!({ "questions": ["Q1?", "Q2?"] }).to_string()),
            Ok(feedback_payload(80)),
            Ok(feedback_payload(90)),
        ],
    );
    let chain = chain(vec![provider]);
    let generator = QuestionGenerator::new(chain.clone())
        .with_strategy(SelectionStrategy::RoundRobin);
    let analyzer = AnswerAnalyzer::new(chain);
    let store = InMemorySessionStore::new();

    let mut request = QuestionRequest::for_type(InterviewType::Behavioral);
    request.count = 2;
    let questions = generator.generate(&request).await;
    assert_eq!(questions.len(), 2);

    let mut tracker = SessionTracker::new(InterviewType::Behavioral);
    let mut aggregator = EmotionAggregator::new();

    for (question, answer) in questions.into_iter().zip([
        "I rebuilt the on-call rotation after we missed two incidents.",
        "I paired with the new hire until they shipped on their own.",
    ]) {
        let feedback = analyzer
            .analyze(&AnswerAnalysisRequest::new(
                question.text.clone(),
                answer,
                InterviewType::Behavioral,
            ))
            .await
            .unwrap();
        tracker.record_answer(question, feedback);

        aggregator.record_frame(&FrameAnalysis {
            success: true,
            faces: vec![FaceReading {
                emotion: DetectedEmotion::Happy,
                confidence: 0.9,
            }],
            timestamp: Some(tracker.answered_count() as u64 * 30),
            message: None,
        });
    }
    aggregator.record(EmotionSample::new(70, DetectedEmotion::Neutral, 0.8));

    let summary = aggregator.finalize();
    let result = tracker.finish(Some(summary), &store).await.unwrap();

    assert_eq!(store.len(), 1);
    let stored = &store.results()[0];
    assert_eq!(stored.id, result.id);
    assert_eq!(stored.overall_score, 85);
    assert_eq!(stored.records.len(), 2);
    assert_eq!(stored.records[0].question.id, 1);
    assert_eq!(stored.records[0].feedback.overall_score, 80.0);
    assert_eq!(stored.records[1].feedback.overall_score, 90.0);

    let emotion = stored.emotion_summary.as_ref().unwrap();
    assert_eq!(emotion.dominant_emotion, DetectedEmotion::Happy);
    assert_eq!(emotion.total_samples, 3);
    assert!(chrono::DateTime::parse_from_rfc3339(&stored.completed_at).is_ok());
}

#[tokio::test]
async fn test_degraded_session_still_finalizes_cleanly() {
    // Every provider is down: bank questions, baseline feedback, and the
    // session result all still come out whole.
    let chain = chain(vec![ScriptedProvider::failing("openai")]);
    let generator = QuestionGenerator::new(chain.clone())
        .with_strategy(SelectionStrategy::RoundRobin);
    let analyzer = AnswerAnalyzer::new(chain);
    let store = InMemorySessionStore::new();

    let questions = generator
        .generate(&QuestionRequest::for_type(InterviewType::Technical))
        .await;
    assert_eq!(questions.len(), 5);

    let mut tracker = SessionTracker::new(InterviewType::Technical);
    let first = questions.into_iter().next().unwrap();
    let feedback = analyzer
        .analyze(&AnswerAnalysisRequest::new(
            first.text.clone(),
            "Let is block scoped, var is function scoped.",
            InterviewType::Technical,
        ))
        .await
        .unwrap();
    tracker.record_answer(first, feedback);

    let result = tracker.finish(None, &store).await.unwrap();
    assert_eq!(result.overall_score, 75);
    assert!(result.duration_seconds < 5);
    assert!(result.emotion_summary.is_none());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_empty_session_scores_zero() {
    let store = InMemorySessionStore::new();
    let tracker = SessionTracker::new(InterviewType::Hr);

    let mut aggregator = EmotionAggregator::new();
    let summary = aggregator.finalize();

    let result = tracker.finish(Some(summary), &store).await.unwrap();
    assert_eq!(result.overall_score, 0);
    assert!(result.records.is_empty());

    let emotion = result.emotion_summary.unwrap();
    assert_eq!(emotion.dominant_emotion, DetectedEmotion::Neutral);
    assert_eq!(emotion.average_sentiment, 0.0);
}
