//! Output formatting for significance results.
//!
//! This module provides formatters for displaying `SignificanceResult` in the
//! formats the surrounding application consumes:
//! - Terminal: Human-readable output with colors and box drawing
//! - JSON: Machine-readable serialization for the export layer
//! - Chart: Bar magnitudes and summary-table rows for the chart renderer and
//!   PDF export

pub mod chart;
mod json;
mod terminal;

pub use chart::{chart_data, summary_rows, ChartData, SummaryRow};
pub use json::{to_json, to_json_pretty};
pub use terminal::format_result;
