//! Question Banks
//!
//! Versioned, immutable question sets served when no provider can. Each
//! interview type maps to one or more variants; which variant a given
//! session sees is the selector's choice, so even the no-AI path varies
//! between sessions. A bank config can be loaded from a JSON resource or
//! taken from the built-in default.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use intervue_core::{CoreError, CoreResult};

use crate::models::InterviewType;

/// One immutable set of question texts
pub type QuestionSet = Vec<String>;

/// Versioned mapping from interview type to question-set variants
///
/// Invariants enforced at load time: every listed type has at least one
/// variant, every variant at least one non-blank question, and the
/// `custom` bank is present, since it backs any type the resource omits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBankConfig {
    /// Resource revision tag
    pub version: String,
    /// Variants per interview type
    pub banks: HashMap<InterviewType, Vec<QuestionSet>>,
}

impl QuestionBankConfig {
    /// Load a bank config from a JSON file and validate it
    pub fn load_from_path(path: &Path) -> CoreResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: QuestionBankConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the structural invariants of a bank config
    pub fn validate(&self) -> CoreResult<()> {
        if self.version.trim().is_empty() {
            return Err(CoreError::config("question bank version must not be empty"));
        }
        if !self.banks.contains_key(&InterviewType::Custom) {
            return Err(CoreError::config(
                "question banks must include the custom catch-all bank",
            ));
        }
        for (interview_type, variants) in &self.banks {
            if variants.is_empty() {
                return Err(CoreError::config(format!(
                    "bank for {} has no variants",
                    interview_type
                )));
            }
            for (index, variant) in variants.iter().enumerate() {
                if variant.is_empty() {
                    return Err(CoreError::config(format!(
                        "bank for {} variant {} is empty",
                        interview_type, index
                    )));
                }
                if variant.iter().any(|q| q.trim().is_empty()) {
                    return Err(CoreError::config(format!(
                        "bank for {} variant {} contains a blank question",
                        interview_type, index
                    )));
                }
            }
        }
        Ok(())
    }

    /// Variants for `interview_type`, falling back to the custom bank
    /// when the resource does not list that type
    pub fn variants_for(&self, interview_type: InterviewType) -> &[QuestionSet] {
        self.banks
            .get(&interview_type)
            .filter(|variants| !variants.is_empty())
            .or_else(|| self.banks.get(&InterviewType::Custom))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of variants available for `interview_type`
    pub fn variant_count(&self, interview_type: InterviewType) -> usize {
        self.variants_for(interview_type).len()
    }
}

impl Default for QuestionBankConfig {
    /// Built-in banks: two variants per interview type
    fn default() -> Self {
        let mut banks = HashMap::new();
        banks.insert(
            InterviewType::Technical,
            vec![
                to_set(&[
                    "Explain the difference between let, const, and var in JavaScript.",
                    "What is the time complexity of binary search?",
                    "Describe how you would implement a queue using two stacks.",
                    "What are React hooks and why are they useful?",
                    "Explain the concept of closure in JavaScript.",
                ]),
                to_set(&[
                    "What happens when you type a URL into the browser and press enter?",
                    "How does a hash map handle collisions?",
                    "Explain the difference between processes and threads.",
                    "What is database indexing and when can an index hurt performance?",
                    "How would you find a memory leak in a long-running application?",
                ]),
            ],
        );
        banks.insert(
            InterviewType::Behavioral,
            vec![
                to_set(&[
                    "Tell me about a time when you faced a challenging problem at work.",
                    "Describe a situation where you had to work with a difficult team member.",
                    "How do you handle tight deadlines and pressure?",
                    "Tell me about a time you failed and what you learned from it.",
                    "Describe your leadership style with an example.",
                ]),
                to_set(&[
                    "Tell me about a time you disagreed with your manager's decision.",
                    "Describe a project that did not go as planned. What did you do?",
                    "Give an example of a goal you set and how you reached it.",
                    "Tell me about a time you had to learn something new quickly.",
                    "Describe a situation where you went beyond what was expected.",
                ]),
            ],
        );
        banks.insert(
            InterviewType::Hr,
            vec![
                to_set(&[
                    "Why do you want to work for our company?",
                    "Where do you see yourself in 5 years?",
                    "What are your salary expectations?",
                    "Why should we hire you?",
                    "What are your greatest strengths and weaknesses?",
                ]),
                to_set(&[
                    "What do you know about our company and products?",
                    "Why are you leaving your current role?",
                    "How do you evaluate success in your work?",
                    "What kind of work environment helps you do your best work?",
                    "Do you have any questions for us?",
                ]),
            ],
        );
        banks.insert(
            InterviewType::Communication,
            vec![
                to_set(&[
                    "Introduce yourself and your background.",
                    "Explain a complex technical concept to a non-technical person.",
                    "Describe your most significant achievement.",
                    "Walk me through your resume.",
                    "What motivates you in your career?",
                ]),
                to_set(&[
                    "Describe a time you had to deliver difficult news to a stakeholder.",
                    "How do you tailor a presentation for different audiences?",
                    "Summarize your current project in under a minute.",
                    "Tell me about a time a misunderstanding caused a problem at work.",
                    "How do you make sure your written updates are clear?",
                ]),
            ],
        );
        banks.insert(
            InterviewType::Custom,
            vec![
                to_set(&[
                    "Tell me about yourself.",
                    "What are your career goals?",
                    "Why are you interested in this position?",
                    "What is your approach to problem-solving?",
                    "How do you handle constructive criticism?",
                ]),
                to_set(&[
                    "What accomplishment are you most proud of?",
                    "How do you prioritize when everything feels urgent?",
                    "What would your previous colleagues say about you?",
                    "Describe your ideal role.",
                    "What do you do to keep your skills sharp?",
                ]),
            ],
        );

        Self {
            version: "1".to_string(),
            banks,
        }
    }
}

fn to_set(texts: &[&str]) -> QuestionSet {
    texts.iter().map(|t| t.to_string()).collect()
}
