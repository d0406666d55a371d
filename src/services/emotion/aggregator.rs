//! Emotion Aggregator
//!
//! Accumulates per-frame emotion samples during a session and reduces
//! them to one `EmotionSummary` at the end. Sampling never blocks the
//! question/answer flow: a frame with nothing usable in it is skipped,
//! not retried, and a late sample after finalization is dropped.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{DetectedEmotion, EmotionSample, EmotionSummary, FrameAnalysis};

/// Lifecycle of one aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AggregatorState {
    Accumulating,
    Finalized,
}

/// Per-session emotion accumulation
///
/// Single-writer: one aggregator belongs to one session's sampling loop.
/// Ties in the dominant-emotion tally go to the emotion seen first.
#[derive(Debug)]
pub struct EmotionAggregator {
    state: AggregatorState,
    samples: Vec<EmotionSample>,
    /// Counts in first-seen order, which decides ties
    tallies: Vec<(DetectedEmotion, u64)>,
    sentiment_total: f64,
}

impl EmotionAggregator {
    pub fn new() -> Self {
        Self {
            state: AggregatorState::Accumulating,
            samples: Vec::new(),
            tallies: Vec::new(),
            sentiment_total: 0.0,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.state == AggregatorState::Finalized
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Record one sample. After finalization this is a no-op.
    pub fn record(&mut self, sample: EmotionSample) {
        if self.is_finalized() {
            debug!(
                "Dropping {} sample at t={}: aggregation already finalized",
                sample.emotion, sample.timestamp
            );
            return;
        }

        self.sentiment_total += sample.emotion.sentiment();
        match self
            .tallies
            .iter_mut()
            .find(|(emotion, _)| *emotion == sample.emotion)
        {
            Some((_, count)) => *count += 1,
            None => self.tallies.push((sample.emotion, 1)),
        }
        self.samples.push(sample);
    }

    /// Record the strongest face from one classifier response.
    ///
    /// `success: false` or an empty face list means the tick produced
    /// nothing; a missing timestamp is recorded as zero. Returns whether
    /// a sample was taken.
    pub fn record_frame(&mut self, frame: &FrameAnalysis) -> bool {
        if !frame.success || frame.faces.is_empty() {
            debug!(
                "Skipping frame at t={:?}: {}",
                frame.timestamp,
                frame.message.as_deref().unwrap_or("no face detected")
            );
            return false;
        }
        if self.is_finalized() {
            debug!(
                "Dropping frame at t={:?}: aggregation already finalized",
                frame.timestamp
            );
            return false;
        }

        let face = &frame.faces[0];
        self.record(EmotionSample::new(
            frame.timestamp.unwrap_or(0),
            face.emotion,
            face.confidence,
        ));
        true
    }

    /// Summary over everything recorded so far, without finalizing
    pub fn running_summary(&self) -> EmotionSummary {
        self.summarize()
    }

    /// Stop accumulating and produce the final summary.
    ///
    /// Idempotent: calling again returns the same summary.
    pub fn finalize(&mut self) -> EmotionSummary {
        self.state = AggregatorState::Finalized;
        self.summarize()
    }

    fn summarize(&self) -> EmotionSummary {
        let mut distribution: BTreeMap<DetectedEmotion, u64> =
            DetectedEmotion::ALL.iter().map(|&e| (e, 0)).collect();
        for (emotion, count) in &self.tallies {
            distribution.insert(*emotion, *count);
        }

        // Strictly-greater comparison keeps the first-seen emotion on ties.
        let dominant_emotion = self
            .tallies
            .iter()
            .fold(None::<(DetectedEmotion, u64)>, |best, &(emotion, count)| {
                match best {
                    Some((_, best_count)) if best_count >= count => best,
                    _ => Some((emotion, count)),
                }
            })
            .map(|(emotion, _)| emotion)
            .unwrap_or(DetectedEmotion::Neutral);

        let average_sentiment = if self.samples.is_empty() {
            0.0
        } else {
            self.sentiment_total / self.samples.len() as f64
        };

        EmotionSummary {
            dominant_emotion,
            average_sentiment,
            emotion_distribution: distribution,
            total_samples: self.samples.len(),
            timeline: self.samples.clone(),
        }
    }
}

impl Default for EmotionAggregator {
    fn default() -> Self {
        Self::new()
    }
}
