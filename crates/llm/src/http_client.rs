//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with the
//! timeouts provider calls rely on.

use std::time::Duration;

/// Hard stop for a single HTTP exchange
const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Deadline for establishing a connection
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Build a `reqwest::Client` with request and connect timeouts applied.
///
/// The fallback chain enforces its own per-attempt deadline on top of
/// these; the client timeout exists so a stalled socket cannot outlive
/// the attempt that issued it by much.
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .expect("failed to build reqwest client")
}
