//! Numeric constants shared across the crate.

/// Fixed significance threshold for the verdict: significant iff p < 0.05.
///
/// Deliberately not configurable. The surrounding application reports results
/// at the 95% confidence level and nothing else.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// Default impressions count substituted for empty or invalid form input.
///
/// Keeps rates well-defined while the user is still typing; see the `input`
/// module.
pub const DEFAULT_IMPRESSIONS: u64 = 1000;

/// Scale factor for the auxiliary variable t = 1 / (1 + NORM_T_SCALE * |x|)
/// in the normal CDF approximation (Zelen & Severo 26.2.17).
pub(crate) const NORM_T_SCALE: f64 = 0.2316419;

/// Standard normal density scale, 1 / sqrt(2 * pi) to seven digits.
pub(crate) const NORM_PDF_SCALE: f64 = 0.3989423;

/// Polynomial coefficients b1..b5 of the Zelen & Severo tail approximation,
/// applied in Horner order from b5 down.
pub(crate) const NORM_B: [f64; 5] = [0.3193815, -0.3565638, 1.781478, -1.821256, 1.330274];
