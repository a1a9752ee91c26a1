//! # Mapsight Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Canned level details and statistics fixtures
//! - A stub renderer for exercising the preview pipeline
//! - Property-based testing re-exports

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;

/// Re-export proptest for convenience.
pub use proptest;
