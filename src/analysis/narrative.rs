//! Natural-language interpretation of a significance result.
//!
//! The narrative is the only consumer-visible contract of the engine's
//! numeric output: the results view shows it verbatim and the PDF export
//! embeds it in the summary table. Factual claims (direction of lift, rate
//! percentages, p-value) must match the numeric result; the prose itself is
//! not load-bearing.

use crate::result::SignificanceResult;

/// Produce the interpretation sentence for a result.
///
/// Significant results state the direction and size of the lift with 95%
/// confidence language; non-significant results state that no winner can be
/// called. Rates are reported as percentages to 2 decimal places and the
/// p-value to 4. Non-finite values render as "n/a" instead of `NaN` or
/// `Infinity`.
pub fn interpret(result: &SignificanceResult) -> String {
    let control_pct = format_rate(result.control_rate);
    let experiment_pct = format_rate(result.experiment_rate);
    let p = format_p(result.p_value);

    if result.is_significant {
        let comparison = match (result.lift(), result.direction()) {
            (Some(lift), Some(direction)) => {
                format!("{:.1}% {}", lift.abs(), direction.comparative())
            }
            // Zero control rate: lift is infinite but the direction is known.
            (None, Some(direction)) => direction.comparative().to_string(),
            // Significant with equal rates cannot happen (z would be 0).
            (_, None) => "different".to_string(),
        };
        format!(
            "The experiment variant's conversion rate ({}) was {} than the \
             control variant's ({}). This difference is statistically \
             significant at the 95% confidence level (p = {}).",
            experiment_pct, comparison, control_pct, p
        )
    } else {
        format!(
            "The experiment variant converted at {} versus {} for control. \
             The difference between variants is not statistically significant \
             (p = {}); no winner can be called with confidence.",
            experiment_pct, control_pct, p
        )
    }
}

/// Format a [0, 1] rate as a percentage with 2 decimal places, "n/a" when
/// non-finite.
pub(crate) fn format_rate(rate: f64) -> String {
    if rate.is_finite() {
        format!("{:.2}%", rate * 100.0)
    } else {
        "n/a".to_string()
    }
}

/// Format a p-value to 4 decimal places, "n/a" when non-finite.
pub(crate) fn format_p(p: f64) -> String {
    if p.is_finite() {
        format!("{:.4}", p)
    } else {
        "n/a".to_string()
    }
}

/// Format a lift percentage with sign and 1 decimal place, "n/a" when
/// non-finite.
pub(crate) fn format_lift(lift: f64) -> String {
    if lift.is_finite() {
        format!("{:+.1}%", lift)
    } else {
        "n/a".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_significance;
    use crate::types::GroupObservation;

    #[test]
    fn significant_sentence_states_both_rates_and_p() {
        let result = compute_significance(
            &GroupObservation::new(100, 1000),
            &GroupObservation::new(150, 1000),
        );
        let sentence = interpret(&result);

        assert!(sentence.contains("15.00%"), "{}", sentence);
        assert!(sentence.contains("10.00%"), "{}", sentence);
        assert!(sentence.contains("higher"), "{}", sentence);
        assert!(sentence.contains("50.0%"), "{}", sentence);
        assert!(sentence.contains("95% confidence"), "{}", sentence);
        assert!(
            sentence.contains(&format!("p = {:.4}", result.p_value)),
            "{}",
            sentence
        );
    }

    #[test]
    fn significant_drop_reads_lower() {
        let result = compute_significance(
            &GroupObservation::new(150, 1000),
            &GroupObservation::new(100, 1000),
        );
        let sentence = interpret(&result);

        assert!(result.is_significant);
        assert!(sentence.contains("lower"), "{}", sentence);
        assert!(!sentence.contains("higher"), "{}", sentence);
    }

    #[test]
    fn not_significant_sentence_claims_no_confidence() {
        let result = compute_significance(
            &GroupObservation::new(50, 1000),
            &GroupObservation::new(52, 1000),
        );
        let sentence = interpret(&result);

        assert!(sentence.contains("not statistically significant"), "{}", sentence);
        assert!(sentence.contains("5.20%"), "{}", sentence);
        assert!(sentence.contains("5.00%"), "{}", sentence);
        assert!(
            sentence.contains(&format!("p = {:.4}", result.p_value)),
            "{}",
            sentence
        );
    }

    #[test]
    fn infinite_lift_renders_without_numbers() {
        let result = compute_significance(
            &GroupObservation::new(0, 1000),
            &GroupObservation::new(50, 1000),
        );
        let sentence = interpret(&result);

        assert!(result.is_significant);
        assert!(!sentence.contains("inf"), "{}", sentence);
        assert!(!sentence.contains("NaN"), "{}", sentence);
        assert!(sentence.contains("higher"), "{}", sentence);
        assert!(sentence.contains("0.00%"), "{}", sentence);
    }

    #[test]
    fn degenerate_result_renders_na() {
        let result = compute_significance(
            &GroupObservation::new(0, 1000),
            &GroupObservation::new(0, 1000),
        );
        let sentence = interpret(&result);

        assert!(sentence.contains("p = n/a"), "{}", sentence);
        assert!(!sentence.contains("NaN"), "{}", sentence);
    }

    #[test]
    fn formatting_helpers() {
        assert_eq!(format_rate(0.1234), "12.34%");
        assert_eq!(format_rate(f64::NAN), "n/a");
        assert_eq!(format_p(0.04999), "0.0500");
        assert_eq!(format_p(f64::NAN), "n/a");
        assert_eq!(format_lift(50.0), "+50.0%");
        assert_eq!(format_lift(-33.33), "-33.3%");
        assert_eq!(format_lift(f64::INFINITY), "n/a");
    }
}
