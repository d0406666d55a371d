//! Integration Tests Module
//!
//! This module contains end-to-end tests for the Intervue orchestration layer.
//! Tests cover provider fallback resolution, question generation, answer and
//! resume feedback, and full interview session lifecycles.

// Shared scripted provider harness
mod support;

// Provider chain resolution tests
mod resolution_test;

// Question generation flow tests
mod question_flow_test;

// Answer and resume feedback flow tests
mod feedback_flow_test;

// Session lifecycle tests
mod session_flow_test;
