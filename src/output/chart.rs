//! Chart data and summary-table rows for the report/export layer.
//!
//! The chart renderer draws one bar per variant; the PDF export prints a
//! labelled summary table. Both consume pre-formatted data from here so the
//! defensive formatting of non-finite values lives in one place.

use serde::{Deserialize, Serialize};

use crate::analysis::narrative::{format_lift, format_p, format_rate, interpret};
use crate::result::SignificanceResult;
use crate::types::Variant;

/// One bar of the control-vs-experiment chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Which variant this bar represents.
    pub variant: Variant,
    /// Bar magnitude: conversion rate in percent.
    pub rate_pct: f64,
}

/// Bar magnitudes for the results chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Control and experiment bars, in that order.
    pub bars: [ChartBar; 2],
}

/// One labelled row of the PDF summary table, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Row label, e.g. "p-value".
    pub label: String,
    /// Formatted value, "n/a" for non-finite numbers.
    pub value: String,
}

/// Build the chart bars from a result.
pub fn chart_data(result: &SignificanceResult) -> ChartData {
    ChartData {
        bars: [
            ChartBar {
                variant: Variant::Control,
                rate_pct: result.control_rate * 100.0,
            },
            ChartBar {
                variant: Variant::Experiment,
                rate_pct: result.experiment_rate * 100.0,
            },
        ],
    }
}

/// Build the summary-table rows for the PDF export.
///
/// Rows: both rates, relative lift, p-value, verdict, and the interpretation
/// sentence, in display order.
pub fn summary_rows(result: &SignificanceResult) -> Vec<SummaryRow> {
    let verdict = if result.is_significant {
        "Significant at 95% confidence"
    } else {
        "Not significant"
    };

    vec![
        SummaryRow {
            label: "Control conversion rate".to_string(),
            value: format_rate(result.control_rate),
        },
        SummaryRow {
            label: "Experiment conversion rate".to_string(),
            value: format_rate(result.experiment_rate),
        },
        SummaryRow {
            label: "Relative lift".to_string(),
            value: format_lift(result.relative_lift),
        },
        SummaryRow {
            label: "p-value".to_string(),
            value: format_p(result.p_value),
        },
        SummaryRow {
            label: "Verdict".to_string(),
            value: verdict.to_string(),
        },
        SummaryRow {
            label: "Interpretation".to_string(),
            value: interpret(result),
        },
    ]
}
