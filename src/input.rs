//! Form-boundary parsing for results entry.
//!
//! The results-entry form supplies raw strings for each count field. All
//! coercion happens here, before the engine runs: malformed input never
//! raises an error mid-edit and never reaches the pure computation.
//!
//! - Conversions: invalid or empty input coerces to 0.
//! - Impressions: invalid, empty, or zero input coerces to
//!   [`DEFAULT_IMPRESSIONS`](crate::DEFAULT_IMPRESSIONS), keeping rates
//!   well-defined while the user is still typing.

use crate::constants::DEFAULT_IMPRESSIONS;
use crate::types::GroupObservation;

/// Parse a conversions field: non-negative integer, 0 on anything else.
pub fn parse_conversions(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// Parse an impressions field: positive integer, the interactive default on
/// anything else (including 0, which would make rates undefined).
pub fn parse_impressions(raw: &str) -> u64 {
    match raw.trim().parse() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_IMPRESSIONS,
    }
}

/// Parse both fields of one variant into a sanitized observation.
///
/// The returned observation always has `impressions >= 1`, so the engine's
/// rate computations are well-defined.
pub fn parse_observation(conversions: &str, impressions: &str) -> GroupObservation {
    GroupObservation::new(parse_conversions(conversions), parse_impressions(impressions))
}
