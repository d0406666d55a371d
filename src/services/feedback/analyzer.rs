//! Answer Analyzer
//!
//! Turns one (question, answer) pair into a total `AnswerFeedback`
//! record. Provider problems never surface here: the fallback chain
//! absorbs them and the schema defaults keep the record whole. The only
//! failure a caller can see is invalid input.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, error};

use intervue_core::normalize::{Constraint, FieldSpec};
use intervue_core::{CoreError, CoreResult};
use intervue_llm::types::InvokeOptions;

use crate::models::{AnswerAnalysisRequest, AnswerFeedback, EmotionalTone};
use crate::services::fallback::ProviderChain;

/// Scores answers and reviews resumes through the provider chain
pub struct AnswerAnalyzer {
    chain: Arc<ProviderChain>,
}

impl AnswerAnalyzer {
    pub fn new(chain: Arc<ProviderChain>) -> Self {
        Self { chain }
    }

    pub(super) fn chain(&self) -> &ProviderChain {
        &self.chain
    }

    /// Evaluate one answer.
    ///
    /// The question must be non-empty; the answer may be blank (silence
    /// is an answer worth scoring).
    pub async fn analyze(&self, request: &AnswerAnalysisRequest) -> CoreResult<AnswerFeedback> {
        if request.question.trim().is_empty() {
            return Err(CoreError::validation("question text must not be empty"));
        }

        let prompt = build_feedback_prompt(request);
        let schema = feedback_schema();
        let (record, log) = self
            .chain
            .resolve(&prompt, &InvokeOptions::json(), &schema, &Value::Null)
            .await;
        debug!(
            "Answer analysis resolved via {} in {}ms",
            log.resolved_via.as_deref().unwrap_or("static fallback"),
            log.total_duration_ms
        );

        into_feedback(record)
    }
}

/// Convert a normalized record into the typed feedback shape.
///
/// The schema mirrors `AnswerFeedback` field for field, so a conversion
/// failure is a programming defect, not an upstream problem.
pub(super) fn into_feedback(record: serde_json::Map<String, Value>) -> CoreResult<AnswerFeedback> {
    serde_json::from_value(Value::Object(record)).map_err(|e| {
        error!("Normalized feedback record failed typed conversion: {}", e);
        CoreError::internal(format!("feedback record does not match its schema: {}", e))
    })
}

fn build_feedback_prompt(request: &AnswerAnalysisRequest) -> String {
    format!(
        "You are an expert interview coach analyzing a candidate's response.\n\
         \n\
         Interview Type: {}\n\
         Question: {}\n\
         Candidate's Answer: {}\n\
         \n\
         Provide detailed feedback including:\n\
         1. Overall score (0-100)\n\
         2. Specific strengths (2-3 points)\n\
         3. Areas for improvement (2-3 points)\n\
         4. Fluency score (0-100)\n\
         5. Confidence score (0-100)\n\
         6. Content quality score (0-100)\n\
         7. Clarity score (0-100)\n\
         8. Sentiment score (0-100)\n\
         9. Engagement score (0-100)\n\
         10. Count of filler words (um, uh, like, etc.)\n\
         11. Emotional tone, exactly one of: {}\n\
         12. A one-sentence note each on sentiment, pacing, answer structure, and use of examples\n\
         \n\
         Format your response as JSON with keys: overallScore, strengths, improvements, \
         fluencyScore, confidenceScore, contentQuality, clarityScore, sentimentScore, \
         engagementScore, fillerWordCount, emotionalTone, sentimentDetails, paceAnalysis, \
         structureQuality, exampleQuality.",
        request.interview_type,
        request.question,
        request.answer,
        EmotionalTone::NAMES.join(", "),
    )
}

/// Schema for answer feedback: every field of `AnswerFeedback`, with the
/// alias spellings vendors actually send and encouraging neutral defaults
pub(super) fn feedback_schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("overallScore", score_range(), json!(75.0))
            .alias("overall_score")
            .alias("overall"),
        FieldSpec::new("fluencyScore", score_range(), json!(80.0)).alias("fluency_score"),
        FieldSpec::new("confidenceScore", score_range(), json!(75.0)).alias("confidence_score"),
        // Vendors disagree on whether this one carries a "Score" suffix.
        FieldSpec::new("contentQuality", score_range(), json!(80.0))
            .alias("content_quality_score")
            .alias("contentQualityScore")
            .alias("content_quality"),
        FieldSpec::new("clarityScore", score_range(), json!(85.0)).alias("clarity_score"),
        FieldSpec::new("sentimentScore", score_range(), json!(70.0)).alias("sentiment_score"),
        FieldSpec::new("engagementScore", score_range(), json!(75.0)).alias("engagement_score"),
        FieldSpec::new(
            "strengths",
            Constraint::NonEmptyStringList,
            json!(["Good answer structure", "Relevant content"]),
        ),
        FieldSpec::new(
            "improvements",
            Constraint::NonEmptyStringList,
            json!(["Could provide more specific examples"]),
        )
        .alias("areas_for_improvement")
        .alias("areasForImprovement"),
        FieldSpec::new("fillerWordCount", Constraint::NonNegativeInt, json!(0))
            .alias("filler_word_count"),
        FieldSpec::new(
            "emotionalTone",
            Constraint::OneOf(&EmotionalTone::NAMES),
            json!("professional"),
        )
        .alias("emotional_tone"),
        FieldSpec::new(
            "sentimentDetails",
            Constraint::NonEmptyText,
            json!("Overall tone reads as steady and professional."),
        )
        .alias("sentiment_details"),
        FieldSpec::new(
            "paceAnalysis",
            Constraint::NonEmptyText,
            json!("Pacing is even and easy to follow."),
        )
        .alias("pace_analysis"),
        FieldSpec::new(
            "structureQuality",
            Constraint::NonEmptyText,
            json!("The answer follows a clear structure."),
        )
        .alias("structure_quality"),
        FieldSpec::new(
            "exampleQuality",
            Constraint::NonEmptyText,
            json!("Examples would make the main points more concrete."),
        )
        .alias("example_quality"),
    ]
}

fn score_range() -> Constraint {
    Constraint::NumberInRange {
        min: 0.0,
        max: 100.0,
    }
}
