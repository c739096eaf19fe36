//! Two-proportion z-test with pooled variance.
//!
//! This module implements the significance engine for a two-variant A/B test.
//! Under the null hypothesis of no difference, both variants share one
//! conversion rate, estimated by pooling the samples:
//!
//! ```text
//! p_hat = (c_ctl + c_exp) / (n_ctl + n_exp)
//! se    = sqrt(p_hat * (1 - p_hat) * (1/n_ctl + 1/n_exp))
//! z     = |r_exp - r_ctl| / se
//! ```
//!
//! The two-tailed p-value comes from the standard normal distribution and the
//! verdict applies the fixed 0.05 threshold.
//!
//! ## Degenerate inputs
//!
//! A zero standard error (both variants converted at 0% or both at 100%)
//! always coincides with a zero rate difference, so z is 0/0 = `NaN` and the
//! p-value is `NaN`; `NaN < 0.05` is false, so such inputs are never
//! significant. A zero control rate makes the relative lift infinite (or
//! `NaN` for 0/0). Both propagate into the raw result fields unclamped; the
//! checked accessors on [`SignificanceResult`] cover display.

use crate::constants::SIGNIFICANCE_THRESHOLD;
use crate::result::SignificanceResult;
use crate::statistics::two_tailed_p;
use crate::types::GroupObservation;

/// Evaluate a two-variant test with a two-proportion pooled z-test.
///
/// Pure function: no side effects, no shared state, safe to call on every
/// keystroke of a results-entry form and for many tests concurrently.
///
/// # Arguments
///
/// * `control` - Baseline counts; `impressions` must be >= 1
/// * `experiment` - Treatment counts; `impressions` must be >= 1
///
/// # Returns
///
/// A [`SignificanceResult`] with both rates, the absolute z statistic, the
/// two-tailed p-value, the relative lift in percent, and the verdict.
pub fn compute_significance(
    control: &GroupObservation,
    experiment: &GroupObservation,
) -> SignificanceResult {
    let control_rate = control.rate();
    let experiment_rate = experiment.rate();

    let pooled = (control.conversions + experiment.conversions) as f64
        / (control.impressions + experiment.impressions) as f64;

    let standard_error = (pooled
        * (1.0 - pooled)
        * (1.0 / control.impressions as f64 + 1.0 / experiment.impressions as f64))
        .sqrt();

    let z_score = ((experiment_rate - control_rate) / standard_error).abs();
    let p_value = two_tailed_p(z_score);

    let relative_lift = (experiment_rate - control_rate) / control_rate * 100.0;

    SignificanceResult {
        control_rate,
        experiment_rate,
        z_score,
        p_value,
        relative_lift,
        is_significant: p_value < SIGNIFICANCE_THRESHOLD,
    }
}
