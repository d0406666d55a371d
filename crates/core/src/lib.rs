//! Intervue Core
//!
//! Foundational error types and response normalization for the Intervue
//! workspace. This crate has zero dependencies on application-level code
//! (HTTP clients, async runtime, LLM providers, etc.).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `normalize` - Alias-aware normalization of vendor JSON (`FieldSpec`, `normalize`)
//!
//! ## Design Principles
//!
//! 1. **Totality at the boundary** - anything crossing from a vendor into the
//!    domain passes through `normalize` and comes out with every field present
//! 2. **Zero external dependencies beyond serde_json/thiserror** - keeps build
//!    times minimal
//! 3. **Unidirectional dependency** - this crate depends on nothing else in
//!    the workspace

pub mod error;
pub mod normalize;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Response Normalization ─────────────────────────────────────────────
pub use normalize::{normalize, Constraint, FieldSpec};
