//! Result type produced by the significance engine.

use serde::{Deserialize, Serialize};

use crate::constants::SIGNIFICANCE_THRESHOLD;

/// Outcome of a two-proportion z-test between control and experiment.
///
/// Raw fields carry exactly what the arithmetic produced, including `NaN` or
/// infinities for degenerate inputs (zero control rate, zero pooled
/// variance). The checked accessors [`lift`](Self::lift) and
/// [`p_value_checked`](Self::p_value_checked) filter non-finite values for
/// display layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceResult {
    /// Control conversion rate in [0, 1].
    pub control_rate: f64,
    /// Experiment conversion rate in [0, 1].
    pub experiment_rate: f64,
    /// Absolute pooled z statistic. `NaN` when the pooled variance is zero.
    pub z_score: f64,
    /// Two-tailed p-value in [0, 1], or `NaN` when the z statistic is `NaN`.
    pub p_value: f64,
    /// Relative lift of the experiment over the control, in percent.
    ///
    /// Infinite when the control rate is zero and the experiment converted;
    /// `NaN` when both rates are zero (0/0).
    pub relative_lift: f64,
    /// True iff `p_value < 0.05`. `NaN` p-values compare false, so degenerate
    /// inputs are never reported as significant.
    pub is_significant: bool,
}

impl SignificanceResult {
    /// Relative lift, or `None` when non-finite.
    pub fn lift(&self) -> Option<f64> {
        self.relative_lift.is_finite().then_some(self.relative_lift)
    }

    /// Two-tailed p-value, or `None` when non-finite.
    pub fn p_value_checked(&self) -> Option<f64> {
        self.p_value.is_finite().then_some(self.p_value)
    }

    /// Direction of the rate difference, or `None` when the rates are equal.
    ///
    /// Compares the rates directly rather than the lift, so a direction is
    /// still reported when the lift is non-finite (zero control rate).
    pub fn direction(&self) -> Option<LiftDirection> {
        if self.experiment_rate > self.control_rate {
            Some(LiftDirection::Increase)
        } else if self.experiment_rate < self.control_rate {
            Some(LiftDirection::Decrease)
        } else {
            None
        }
    }

    /// Re-derive the verdict from the p-value.
    ///
    /// Always equals `is_significant`; exists so downstream code can state
    /// the threshold relationship explicitly in one place.
    pub fn verdict(&self) -> bool {
        self.p_value < SIGNIFICANCE_THRESHOLD
    }
}

/// Direction of the experiment's rate relative to the control's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiftDirection {
    /// Experiment converted at a higher rate than control.
    Increase,
    /// Experiment converted at a lower rate than control.
    Decrease,
}

impl LiftDirection {
    /// Comparative adjective used in narrative sentences.
    pub fn comparative(&self) -> &'static str {
        match self {
            LiftDirection::Increase => "higher",
            LiftDirection::Decrease => "lower",
        }
    }
}
