//! Shared types for test observations.

use serde::{Deserialize, Serialize};

/// Raw counts observed for one variant of an A/B test.
///
/// The engine trusts these counts as given: `impressions` must be at least 1
/// (the `input` module guarantees this at the form boundary), and
/// `conversions <= impressions` is expected but not enforced. Garbage in,
/// garbage out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupObservation {
    /// Count of successful outcomes (e.g., purchases) for this variant.
    pub conversions: u64,
    /// Count of exposures/trials for this variant. Must be >= 1.
    pub impressions: u64,
}

impl GroupObservation {
    /// Create an observation from raw counts.
    pub fn new(conversions: u64, impressions: u64) -> Self {
        Self {
            conversions,
            impressions,
        }
    }

    /// Conversion rate, conversions / impressions.
    ///
    /// Non-finite when `impressions == 0`; sanitized callers never hit that.
    pub fn rate(&self) -> f64 {
        self.conversions as f64 / self.impressions as f64
    }
}

/// Variant arm identifier for an A/B test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Baseline variant the experiment is compared against.
    Control,
    /// Treatment variant under evaluation.
    Experiment,
}

impl Variant {
    /// Human-readable label used in chart and report rows.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Control => "Control",
            Variant::Experiment => "Experiment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_basic() {
        let obs = GroupObservation::new(100, 1000);
        assert!((obs.rate() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn rate_zero_conversions() {
        let obs = GroupObservation::new(0, 1000);
        assert_eq!(obs.rate(), 0.0);
    }

    #[test]
    fn rate_full_conversion() {
        let obs = GroupObservation::new(500, 500);
        assert_eq!(obs.rate(), 1.0);
    }

    #[test]
    fn variant_labels() {
        assert_eq!(Variant::Control.label(), "Control");
        assert_eq!(Variant::Experiment.label(), "Experiment");
    }
}
