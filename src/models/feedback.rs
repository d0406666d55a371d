//! Feedback Models
//!
//! Data structures for answer evaluation and resume review.

use serde::{Deserialize, Serialize};

use super::question::InterviewType;

/// Tone the evaluator attributes to an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    Confident,
    Nervous,
    Enthusiastic,
    Uncertain,
    Professional,
    Defensive,
    Optimistic,
    Pessimistic,
}

impl EmotionalTone {
    /// Wire names of every tone, in prompt order
    pub const NAMES: [&'static str; 8] = [
        "confident",
        "nervous",
        "enthusiastic",
        "uncertain",
        "professional",
        "defensive",
        "optimistic",
        "pessimistic",
    ];
}

/// Multi-dimensional evaluation of one answer
///
/// Always total: every field carries a documented default, so a provider
/// outage never produces holes in the record a caller sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    /// Overall quality score in [0, 100]
    pub overall_score: f64,
    /// Speech fluency score in [0, 100]
    pub fluency_score: f64,
    /// Projected confidence score in [0, 100]
    pub confidence_score: f64,
    /// Substance and relevance score in [0, 100]
    pub content_quality: f64,
    /// Clarity of expression score in [0, 100]
    pub clarity_score: f64,
    /// Emotional valence score in [0, 100]
    pub sentiment_score: f64,
    /// Listener engagement score in [0, 100]
    pub engagement_score: f64,
    /// What the answer did well
    pub strengths: Vec<String>,
    /// Concrete areas to improve
    pub improvements: Vec<String>,
    /// Estimated count of filler words
    pub filler_word_count: u64,
    /// Dominant tone of the delivery
    pub emotional_tone: EmotionalTone,
    /// One-sentence note on emotional valence
    pub sentiment_details: String,
    /// One-sentence note on pacing
    pub pace_analysis: String,
    /// One-sentence note on answer structure
    pub structure_quality: String,
    /// One-sentence note on the examples used
    pub example_quality: String,
}

/// Answer analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerAnalysisRequest {
    /// Question that was asked
    pub question: String,
    /// Transcribed answer; may be empty when the candidate said nothing
    #[serde(default)]
    pub answer: String,
    /// Category the question came from
    pub interview_type: InterviewType,
}

impl AnswerAnalysisRequest {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        interview_type: InterviewType,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            interview_type,
        }
    }
}

/// Resume review request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReviewRequest {
    /// Full resume text
    pub resume_text: String,
    /// Role the resume is being weighed against
    pub target_role: String,
}

/// Resume assessment against a target role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInsights {
    /// What the resume presents well
    pub strengths: Vec<String>,
    /// Weak spots relative to the role
    pub weaknesses: Vec<String>,
    /// Concrete edits that would help
    pub improvements: Vec<String>,
    /// Fit for the target role in [0, 100]
    pub match_score: f64,
    /// Skills or keywords the resume lacks for this role
    pub missing_keywords: Vec<String>,
}
