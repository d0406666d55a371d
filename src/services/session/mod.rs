//! Session
//!
//! Per-session bookkeeping: a tracker that accumulates answers while the
//! interview runs, and the store seam the finished result is written to.

pub mod store;
pub mod tracker;

pub use store::{InMemorySessionStore, SessionStore};
pub use tracker::SessionTracker;
