//! Analysis module for A/B test evaluation.
//!
//! This module implements the evaluation pipeline for a two-variant test:
//!
//! 1. **Z-test** ([`ztest`]): Two-proportion pooled z-test producing the
//!    p-value, lift, and verdict
//! 2. **Narrative** ([`narrative`]): Natural-language interpretation of a
//!    result for reports and the results view

pub mod narrative;
pub mod ztest;

pub use narrative::interpret;
pub use ztest::compute_significance;
