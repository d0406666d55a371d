//! Emotion Models
//!
//! Data structures for per-frame emotion classification and the
//! session-level summary derived from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Discrete emotion labels produced by the face classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedEmotion {
    Happy,
    Neutral,
    Sad,
    Angry,
    Surprise,
    Fear,
    Disgust,
}

impl DetectedEmotion {
    /// Every label the classifier can produce
    pub const ALL: [DetectedEmotion; 7] = [
        DetectedEmotion::Happy,
        DetectedEmotion::Neutral,
        DetectedEmotion::Sad,
        DetectedEmotion::Angry,
        DetectedEmotion::Surprise,
        DetectedEmotion::Fear,
        DetectedEmotion::Disgust,
    ];

    /// Valence each label maps to when averaging session sentiment
    pub fn sentiment(self) -> f64 {
        match self {
            DetectedEmotion::Happy => 1.0,
            DetectedEmotion::Surprise => 0.5,
            DetectedEmotion::Neutral => 0.0,
            DetectedEmotion::Fear => -0.3,
            DetectedEmotion::Sad => -0.6,
            DetectedEmotion::Angry => -0.8,
            DetectedEmotion::Disgust => -0.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedEmotion::Happy => "happy",
            DetectedEmotion::Neutral => "neutral",
            DetectedEmotion::Sad => "sad",
            DetectedEmotion::Angry => "angry",
            DetectedEmotion::Surprise => "surprise",
            DetectedEmotion::Fear => "fear",
            DetectedEmotion::Disgust => "disgust",
        }
    }
}

impl std::fmt::Display for DetectedEmotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionSample {
    /// Seconds since recording started
    pub timestamp: u64,
    /// Classified emotion
    pub emotion: DetectedEmotion,
    /// Classifier confidence in [0, 1]
    pub confidence: f64,
}

impl EmotionSample {
    pub fn new(timestamp: u64, emotion: DetectedEmotion, confidence: f64) -> Self {
        Self {
            timestamp,
            emotion,
            confidence,
        }
    }
}

/// Session-level aggregation of the sample sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionSummary {
    /// Mode of the sequence; ties break toward the first-seen emotion
    pub dominant_emotion: DetectedEmotion,
    /// Mean mapped valence in [-1, 1]; 0 for a session with no samples
    pub average_sentiment: f64,
    /// Per-emotion sample counts
    pub emotion_distribution: BTreeMap<DetectedEmotion, u64>,
    /// Number of samples folded in
    pub total_samples: usize,
    /// The full retained sample sequence
    pub timeline: Vec<EmotionSample>,
}

/// Classifier response for one captured frame
///
/// `success: false` or an empty `faces` list means the tick produced no
/// usable sample. Neither is an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAnalysis {
    /// Whether the classifier processed the frame
    pub success: bool,
    /// Detected faces, strongest detection first
    #[serde(default)]
    pub faces: Vec<FaceReading>,
    /// Seconds since recording started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Classifier diagnostic, present on skipped frames
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One detected face's classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceReading {
    /// Classified emotion for this face
    pub emotion: DetectedEmotion,
    /// Classifier confidence in [0, 1]
    pub confidence: f64,
}

/// Request sent to the face classifier for one captured frame
///
/// The image payload is an opaque base64 string here; only the classifier
/// decodes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    /// Base64-encoded frame capture
    pub image: String,
    /// Seconds since recording started
    pub timestamp: u64,
}
