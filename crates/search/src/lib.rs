//! Nearest-match search over embedding streams.
//!
//! - [`nearest`] — single-pass scan that keeps the best-scoring candidate
//! - [`metrics`] — distance and similarity metrics for the scan

pub mod metrics;
pub mod nearest;
