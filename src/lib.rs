//! # splitstat
//!
//! Statistical significance for two-variant A/B tests.
//!
//! This crate is the significance engine behind an A/B-test results view:
//! given raw (conversions, impressions) counts for a control and an
//! experiment variant, it runs a two-proportion pooled z-test, outputting:
//! - Two-tailed p-value from the standard normal distribution
//! - Relative lift of the experiment over the control (percent)
//! - Significance verdict at the fixed 0.05 threshold
//! - A human-readable interpretation sentence
//!
//! ## Common Pitfall: Unsanitized Form Input
//!
//! The engine assumes sanitized counts: non-negative conversions and
//! impressions of at least 1 per variant. It does **not** defend against
//! malformed input - zero impressions produce non-finite rates. Parse raw
//! form strings through the [`input`] module, which coerces garbage to safe
//! defaults, before calling the engine.
//!
//! ```
//! // WRONG - ad hoc parsing, zero impressions slip through mid-edit
//! // let control = GroupObservation::new(text.parse().unwrap(), 0);
//!
//! // CORRECT - boundary coercion, then the pure engine
//! use splitstat::{compute_significance, input};
//!
//! let control = input::parse_observation("100", "1000");
//! let experiment = input::parse_observation("150", "1000");
//! let result = compute_significance(&control, &experiment);
//! assert!(result.is_significant);
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use splitstat::{compute_significance, interpret, GroupObservation};
//!
//! let control = GroupObservation::new(100, 1000);
//! let experiment = GroupObservation::new(150, 1000);
//!
//! let result = compute_significance(&control, &experiment);
//! if result.is_significant {
//!     println!("{}", interpret(&result));
//! }
//! ```
//!
//! ## Degenerate Inputs
//!
//! The engine never fails: it always returns a [`SignificanceResult`] whose
//! raw fields may be `NaN` or infinite for degenerate inputs (zero control
//! rate, zero pooled variance). Display layers should go through the checked
//! accessors [`SignificanceResult::lift`] and
//! [`SignificanceResult::p_value_checked`] rather than assume clean numbers.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod constants;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod input;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{compute_significance, interpret};
pub use constants::{DEFAULT_IMPRESSIONS, SIGNIFICANCE_THRESHOLD};
pub use result::{LiftDirection, SignificanceResult};
pub use statistics::{normal_cdf, two_tailed_p};
pub use types::{GroupObservation, Variant};
