//! Question Models
//!
//! Data structures for interview questions and generation requests.

use serde::{Deserialize, Serialize};

/// Interview category
///
/// Unknown wire values land in `Technical`, the default category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Technical,
    Behavioral,
    Hr,
    Communication,
    Custom,
}

impl InterviewType {
    /// All categories, in bank order
    pub const ALL: [InterviewType; 5] = [
        InterviewType::Technical,
        InterviewType::Behavioral,
        InterviewType::Hr,
        InterviewType::Communication,
        InterviewType::Custom,
    ];

    /// Parse a wire string; unknown categories become `Technical`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "behavioral" => InterviewType::Behavioral,
            "hr" => InterviewType::Hr,
            "communication" => InterviewType::Communication,
            "custom" => InterviewType::Custom,
            _ => InterviewType::Technical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
            InterviewType::Hr => "hr",
            InterviewType::Communication => "communication",
            InterviewType::Custom => "custom",
        }
    }
}

impl std::fmt::Display for InterviewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for InterviewType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(InterviewType::parse(&value))
    }
}

/// One generated interview question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 1-based position within the session
    pub id: u32,
    /// Question text shown to the candidate
    pub text: String,
    /// Category this question belongs to
    #[serde(rename = "type")]
    pub question_type: InterviewType,
}

/// Question generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    /// Resume text; only a bounded prefix reaches the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_text: Option<String>,
    /// Role the candidate is practicing for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    /// Interview category to generate for
    pub interview_type: InterviewType,
    /// Requested question count; clamped to at least 1
    #[serde(default = "default_question_count")]
    pub count: usize,
}

fn default_question_count() -> usize {
    5
}

impl QuestionRequest {
    /// Create a plain request with no resume context
    pub fn for_type(interview_type: InterviewType) -> Self {
        Self {
            resume_text: None,
            target_role: None,
            interview_type,
            count: default_question_count(),
        }
    }

    /// Create a resume-grounded request
    pub fn with_resume(
        interview_type: InterviewType,
        resume_text: impl Into<String>,
        target_role: impl Into<String>,
    ) -> Self {
        Self {
            resume_text: Some(resume_text.into()),
            target_role: Some(target_role.into()),
            interview_type,
            count: default_question_count(),
        }
    }
}
