//! Session Tracker
//!
//! Accumulates answered questions over one practice session and folds
//! them into the immutable `SessionResult` at the end. `finish` takes the
//! tracker by value, so a session can only be finalized once.

use chrono::{DateTime, Utc};
use tracing::info;

use intervue_core::CoreResult;

use crate::models::{
    AnswerFeedback, AnswerRecord, EmotionSummary, InterviewType, Question, SessionResult,
};

use super::store::SessionStore;

/// Running state of one practice session
#[derive(Debug)]
pub struct SessionTracker {
    id: String,
    interview_type: InterviewType,
    started_at: DateTime<Utc>,
    records: Vec<AnswerRecord>,
}

impl SessionTracker {
    /// Start a session now, under a fresh unique id
    pub fn new(interview_type: InterviewType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            interview_type,
            started_at: Utc::now(),
            records: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn interview_type(&self) -> InterviewType {
        self.interview_type
    }

    pub fn answered_count(&self) -> usize {
        self.records.len()
    }

    /// Append one answered question with its evaluation
    pub fn record_answer(&mut self, question: Question, feedback: AnswerFeedback) {
        self.records.push(AnswerRecord { question, feedback });
    }

    /// Rounded mean of per-answer overall scores; 0 when nothing was
    /// answered yet
    pub fn overall_score(&self) -> u32 {
        if self.records.is_empty() {
            return 0;
        }
        let total: f64 = self
            .records
            .iter()
            .map(|record| record.feedback.overall_score)
            .sum();
        (total / self.records.len() as f64).round() as u32
    }

    /// Close the session: build the result and hand it to the store.
    ///
    /// Consumes the tracker, so each session produces exactly one result
    /// and exactly one store write.
    pub async fn finish(
        self,
        emotion_summary: Option<EmotionSummary>,
        store: &dyn SessionStore,
    ) -> CoreResult<SessionResult> {
        let now = Utc::now();
        let result = SessionResult {
            overall_score: self.overall_score(),
            duration_seconds: (now - self.started_at).num_seconds().max(0) as u64,
            id: self.id,
            interview_type: self.interview_type,
            records: self.records,
            emotion_summary,
            completed_at: now.to_rfc3339(),
        };

        store.put(&result).await?;
        info!(
            "Session {} finished: {} answers, overall score {}, {}s",
            result.id,
            result.records.len(),
            result.overall_score,
            result.duration_seconds
        );
        Ok(result)
    }
}
