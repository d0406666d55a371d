//! Emotion
//!
//! Session-level aggregation of per-frame emotion classifications. The
//! classifier itself is an external collaborator; this module owns what
//! happens to its readings between session start and the final summary.

pub mod aggregator;

pub use aggregator::EmotionAggregator;
