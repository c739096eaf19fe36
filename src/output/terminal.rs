//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::analysis::narrative::{format_lift, format_p, format_rate, interpret};
use crate::result::SignificanceResult;

/// Format a SignificanceResult for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing for clear presentation.
/// Includes a checkmark for significant results and a circle for
/// inconclusive ones. Non-finite values render as "n/a".
pub fn format_result(result: &SignificanceResult) -> String {
    let mut output = String::new();

    // Header with verdict indicator
    let header = if result.is_significant {
        format!(
            "{} {}",
            "\u{2713}".green().bold(),
            "STATISTICALLY SIGNIFICANT".green().bold()
        )
    } else {
        format!(
            "{} {}",
            "\u{25CB}".yellow().bold(),
            "NOT SIGNIFICANT".yellow().bold()
        )
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    // Conversion rates
    let control_str = format!("Control:    {}", format_rate(result.control_rate));
    output.push_str(&format_box_line(&control_str));

    let experiment_str = format!("Experiment: {}", format_rate(result.experiment_rate));
    output.push_str(&format_box_line(&experiment_str));

    output.push_str(&format_box_separator());

    // Relative lift, colored by direction
    let lift_str = format!("Relative Lift: {}", format_lift(result.relative_lift));
    let lift_colored = match result.lift() {
        Some(lift) if lift > 0.0 => lift_str.green(),
        Some(lift) if lift < 0.0 => lift_str.red(),
        _ => lift_str.normal(),
    };
    output.push_str(&format_box_line(&lift_colored.to_string()));

    // p-value, colored by verdict
    let p_str = format!("p-value: {}", format_p(result.p_value));
    let p_colored = if result.is_significant {
        p_str.green()
    } else {
        p_str.yellow()
    };
    output.push_str(&format_box_line(&p_colored.to_string()));

    output.push_str(&format_box_bottom());

    // Narrative footer
    output.push_str(&format!("\n{}\n", interpret(result)));
    output.push_str(&format!(
        "{}\n",
        "Note: Significance uses a two-proportion z-test at the fixed 0.05 threshold."
            .dimmed()
            .italic()
    ));

    output
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    let visible = visible_len(content);
    let padding = BOX_WIDTH.saturating_sub(visible + 1);
    format!("\u{2502} {}{}\u{2502}\n", content, " ".repeat(padding))
}

/// Character count excluding ANSI escape sequences, so colored content pads
/// to the same width as plain content.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\u{1b}' {
            in_escape = true;
        } else {
            len += 1;
        }
    }
    len
}
