//! Session Models
//!
//! Data structures for a completed practice session.

use serde::{Deserialize, Serialize};

use super::emotion::EmotionSummary;
use super::feedback::AnswerFeedback;
use super::question::{InterviewType, Question};

/// One answered question with its evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// Question that was asked
    pub question: Question,
    /// Evaluation of the answer given
    pub feedback: AnswerFeedback,
}

/// Immutable summary of a completed practice session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    /// Unique session identifier
    pub id: String,
    /// Category the session ran under
    pub interview_type: InterviewType,
    /// Every answered question, in order
    pub records: Vec<AnswerRecord>,
    /// Rounded mean of per-answer overall scores; 0 when nothing was answered
    pub overall_score: u32,
    /// Seconds from session start to finish
    pub duration_seconds: u64,
    /// Emotion aggregation, when webcam analysis ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_summary: Option<EmotionSummary>,
    /// Completion timestamp (ISO 8601)
    pub completed_at: String,
}
