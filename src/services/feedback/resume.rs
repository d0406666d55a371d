//! Resume Review
//!
//! Assesses a resume against a target role: strengths, weaknesses,
//! actionable edits, an ATS-style match score, and missing keywords.
//! Rides the same provider chain and normalization as answer analysis.

use serde_json::{json, Value};
use tracing::{debug, error};

use intervue_core::normalize::{Constraint, FieldSpec};
use intervue_core::{CoreError, CoreResult};
use intervue_llm::types::InvokeOptions;

use crate::models::{ResumeInsights, ResumeReviewRequest};
use crate::services::questions::resume_excerpt;

use super::analyzer::AnswerAnalyzer;

impl AnswerAnalyzer {
    /// Review a resume against a target role.
    ///
    /// Both the resume text and the role are required; everything else is
    /// total the same way answer analysis is.
    pub async fn review_resume(&self, request: &ResumeReviewRequest) -> CoreResult<ResumeInsights> {
        if request.resume_text.trim().is_empty() {
            return Err(CoreError::validation("resume text must not be empty"));
        }
        if request.target_role.trim().is_empty() {
            return Err(CoreError::validation("target role must not be empty"));
        }

        let prompt = build_review_prompt(request);
        let schema = insights_schema();
        let (record, log) = self
            .chain()
            .resolve(&prompt, &InvokeOptions::json(), &schema, &Value::Null)
            .await;
        debug!(
            "Resume review resolved via {} in {}ms",
            log.resolved_via.as_deref().unwrap_or("static fallback"),
            log.total_duration_ms
        );

        into_insights(record)
    }
}

fn into_insights(record: serde_json::Map<String, Value>) -> CoreResult<ResumeInsights> {
    serde_json::from_value(Value::Object(record)).map_err(|e| {
        error!("Normalized resume record failed typed conversion: {}", e);
        CoreError::internal(format!("resume record does not match its schema: {}", e))
    })
}

fn build_review_prompt(request: &ResumeReviewRequest) -> String {
    let role = request.target_role.trim();
    format!(
        "You are an expert resume analyzer and career coach. Analyze the following resume \
         for a {role} position.\n\
         \n\
         Resume Content:\n\
         {resume}\n\
         \n\
         Provide detailed analysis including:\n\
         1. Strengths (3-5 specific points)\n\
         2. Weaknesses (3-5 specific points)\n\
         3. Actionable improvements (4-6 recommendations)\n\
         4. ATS match score (0-100) for the {role} role\n\
         5. Missing keywords or skills for {role}\n\
         \n\
         Format your response as JSON with keys: strengths (array), weaknesses (array), \
         improvements (array), matchScore (number), missingKeywords (array).",
        role = role,
        resume = resume_excerpt(request.resume_text.trim()),
    )
}

/// Schema for resume insight records
fn insights_schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(
            "strengths",
            Constraint::NonEmptyStringList,
            json!(["Clear presentation of experience"]),
        ),
        FieldSpec::new(
            "weaknesses",
            Constraint::NonEmptyStringList,
            json!(["Impact of individual contributions is hard to judge"]),
        ),
        FieldSpec::new(
            "improvements",
            Constraint::NonEmptyStringList,
            json!(["Quantify achievements with concrete numbers"]),
        ),
        FieldSpec::new(
            "matchScore",
            Constraint::NumberInRange {
                min: 0.0,
                max: 100.0,
            },
            json!(70.0),
        )
        .alias("match_score"),
        FieldSpec::new(
            "missingKeywords",
            Constraint::NonEmptyStringList,
            json!(["None identified"]),
        )
        .alias("missing_keywords"),
    ]
}
