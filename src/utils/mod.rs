//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`post_json`] - JSON POST with timeout
//! - [`race_with_timeout`] - Promise racing for timeout behavior

pub mod dom;
mod fetch;

pub use fetch::{post_json, race_with_timeout, RaceResult};
