//! Question Generator
//!
//! Produces personalized interview questions through the provider chain,
//! or out of the question banks when every provider is down. Output shape
//! is identical either way: `min(count, available)` questions numbered
//! from 1.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use intervue_core::CoreResult;
use intervue_core::normalize::{Constraint, FieldSpec};
use intervue_llm::types::InvokeOptions;

use crate::models::{InterviewType, Question, QuestionRequest};
use crate::services::fallback::ProviderChain;

use super::banks::QuestionBankConfig;
use super::variety::{SelectionStrategy, VarietySelector};

/// Longest resume prefix embedded in any prompt, in characters
pub(crate) const RESUME_EXCERPT_MAX_CHARS: usize = 2000;

/// Generates interview questions for one practice product
pub struct QuestionGenerator {
    chain: Arc<ProviderChain>,
    banks: QuestionBankConfig,
    selector: VarietySelector,
}

impl QuestionGenerator {
    /// Create a generator with the built-in banks and random variety
    pub fn new(chain: Arc<ProviderChain>) -> Self {
        Self {
            chain,
            banks: QuestionBankConfig::default(),
            selector: VarietySelector::new(SelectionStrategy::Random),
        }
    }

    /// Replace the question banks, validating the config first
    ///
    /// Only validated configs reach the generator, so bank lookups always
    /// have at least one variant to draw from.
    pub fn with_banks(mut self, banks: QuestionBankConfig) -> CoreResult<Self> {
        banks.validate()?;
        self.banks = banks;
        Ok(self)
    }

    /// Replace the selection strategy
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.selector = VarietySelector::new(strategy);
        self
    }

    /// Generate questions for `request`.
    ///
    /// Never fails: provider outcomes only decide whether the texts come
    /// from a model or from a bank variant.
    pub async fn generate(&self, request: &QuestionRequest) -> Vec<Question> {
        let interview_type = request.interview_type;
        let count = request.count.max(1);

        let focus_area = self.pick_focus_area(interview_type);
        let (variant_index, bank_variant) = self.pick_bank_variant(interview_type);
        debug!(
            "Generating {} {} questions (focus: {}, bank variant: {})",
            count, interview_type, focus_area, variant_index
        );

        let prompt = build_prompt(request, count, focus_area);
        let schema = questions_schema(bank_variant);
        let (record, log) = self
            .chain
            .resolve(&prompt, &InvokeOptions::json(), &schema, &Value::Null)
            .await;
        debug!(
            "Question resolution for {} took {}ms (static fallback: {})",
            interview_type, log.total_duration_ms, log.used_static_fallback
        );

        collect_questions(record.get("questions"), interview_type, count)
    }

    fn pick_focus_area(&self, interview_type: InterviewType) -> &'static str {
        let areas = focus_areas(interview_type);
        let index = self
            .selector
            .pick(&format!("focus:{}", interview_type), areas.len());
        areas[index]
    }

    fn pick_bank_variant(&self, interview_type: InterviewType) -> (usize, &[String]) {
        let variants = self.banks.variants_for(interview_type);
        let index = self
            .selector
            .pick(&format!("bank:{}", interview_type), variants.len());
        (index, &variants[index])
    }
}

/// Fixed focus rotation per interview category
fn focus_areas(interview_type: InterviewType) -> &'static [&'static str] {
    match interview_type {
        InterviewType::Technical => &[
            "system design trade-offs",
            "debugging and troubleshooting",
            "algorithms and data structures",
            "testing and code quality",
        ],
        InterviewType::Behavioral => &[
            "teamwork and collaboration",
            "conflict resolution",
            "leadership moments",
            "resilience after setbacks",
        ],
        InterviewType::Hr => &[
            "motivation and culture fit",
            "career trajectory",
            "compensation expectations",
            "company knowledge",
        ],
        InterviewType::Communication => &[
            "explaining ideas to non-experts",
            "storytelling and structure",
            "active listening",
            "presentation delivery",
        ],
        InterviewType::Custom => &[
            "problem-solving approach",
            "goals and motivation",
            "adaptability",
            "response to feedback",
        ],
    }
}

fn build_prompt(request: &QuestionRequest, count: usize, focus_area: &str) -> String {
    let interview_type = request.interview_type;
    let resume = request
        .resume_text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty());

    let mut prompt = match request.target_role.as_deref().map(str::trim) {
        Some(role) if !role.is_empty() => format!(
            "Generate {} personalized {} interview questions for a {} candidate.\n",
            count, interview_type, role
        ),
        _ => format!(
            "Generate {} personalized {} interview questions.\n",
            count, interview_type
        ),
    };

    if let Some(text) = resume {
        prompt.push_str("\nBased on this resume/experience:\n");
        prompt.push_str(resume_excerpt(text));
        prompt.push('\n');
    }

    prompt.push_str("\nGenerate questions that:\n");
    let mut rules: Vec<String> = vec![
        "Are highly relevant to the candidate's experience and the target position".to_string(),
        format!("Match the {} interview style", interview_type),
    ];
    if resume.is_some() {
        rules.push(
            "Reference specific skills, projects, or technologies from their resume \
             rather than generic topics"
                .to_string(),
        );
    }
    rules.push("Are challenging but fair and appropriate for their level".to_string());
    rules.push(format!("Put extra weight on {}", focus_area));
    for (index, rule) in rules.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", index + 1, rule));
    }

    prompt.push_str(&format!(
        "\nReturn your response as a JSON object with a \"questions\" array containing \
         exactly {} question strings.\n\
         Example format: {{\"questions\": [\"Question 1?\", \"Question 2?\", \"Question 3?\"]}}",
        count
    ));
    prompt
}

/// Schema for the provider reply; the bank variant is the default, so an
/// empty or missing array substitutes static questions
fn questions_schema(bank_variant: &[String]) -> Vec<FieldSpec> {
    vec![FieldSpec::new(
        "questions",
        Constraint::NonEmptyStringList,
        json!(bank_variant),
    )
    .alias("interview_questions")]
}

/// Number the first `count` texts 1..k
fn collect_questions(
    questions: Option<&Value>,
    interview_type: InterviewType,
    count: usize,
) -> Vec<Question> {
    questions
        .and_then(Value::as_array)
        .map(|texts| {
            texts
                .iter()
                .filter_map(Value::as_str)
                .take(count)
                .enumerate()
                .map(|(index, text)| Question {
                    id: index as u32 + 1,
                    text: text.to_string(),
                    question_type: interview_type,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Bounded resume prefix, safe on multi-byte boundaries
pub(crate) fn resume_excerpt(text: &str) -> &str {
    match text.char_indices().nth(RESUME_EXCERPT_MAX_CHARS) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
