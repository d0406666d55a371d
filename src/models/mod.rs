//! Data Models
//!
//! Contains all data structures used throughout the application.

pub mod emotion;
pub mod feedback;
pub mod question;
pub mod session;

pub use emotion::*;
pub use feedback::*;
pub use question::*;
pub use session::*;
