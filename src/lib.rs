//! Intervue - AI Interview Practice Orchestration
//!
//! Library layer between an interview-practice product and its language
//! model vendors. It covers:
//! - Question generation with static bank fallback
//! - Answer scoring and resume review as total records
//! - Ordered provider fallback with per-attempt resolution logging
//! - Session-level emotion aggregation and result finalization

pub mod models;
pub mod services;

// Re-export the request/response DTOs
pub use models::{
    AnswerAnalysisRequest, AnswerFeedback, AnswerRecord, DetectedEmotion, EmotionSample,
    EmotionSummary, EmotionalTone, FaceReading, FrameAnalysis, FrameRequest, InterviewType,
    Question, QuestionRequest, ResumeInsights, ResumeReviewRequest, SessionResult,
};
// Re-export the services callers wire together
pub use services::{
    AnswerAnalyzer, EmotionAggregator, FallbackConfig, InMemorySessionStore, ProviderChain,
    QuestionBankConfig, QuestionGenerator, ResolutionLog, SelectionStrategy, SessionStore,
    SessionTracker,
};
// Re-export the foundation the sub-crates provide
pub use intervue_core::{Constraint, CoreError, CoreResult, FieldSpec};
pub use intervue_llm::{
    InvokeOptions, LlmProvider, OpenAIProvider, PollinationsProvider, ProviderConfig,
    ProviderError, ProviderResult, ProviderType,
};
