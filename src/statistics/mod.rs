//! Statistical primitives for the significance engine.
//!
//! This module provides the distribution machinery behind the z-test:
//! - Standard normal CDF via the Zelen & Severo rational approximation
//! - Two-tailed p-value computation from a z statistic

mod normal;

pub use normal::{normal_cdf, two_tailed_p};
