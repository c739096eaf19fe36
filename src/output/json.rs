//! JSON serialization of significance results.
//!
//! The export layer persists and ships results as JSON. Note that
//! `serde_json` serializes the non-finite `f64` values a degenerate result
//! can carry (`NaN`, infinite lift) as `null`, which downstream consumers
//! treat the same as the checked accessors returning `None`.

use crate::result::SignificanceResult;

/// Serialize a result to a compact JSON string.
pub fn to_json(result: &SignificanceResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

/// Serialize a result to a pretty-printed JSON string.
pub fn to_json_pretty(result: &SignificanceResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_significance;
    use crate::types::GroupObservation;

    #[test]
    fn json_contains_all_fields() {
        let result = compute_significance(
            &GroupObservation::new(100, 1000),
            &GroupObservation::new(150, 1000),
        );
        let json = to_json(&result).unwrap();

        for field in [
            "control_rate",
            "experiment_rate",
            "z_score",
            "p_value",
            "relative_lift",
            "is_significant",
        ] {
            assert!(json.contains(field), "missing {} in {}", field, json);
        }
    }

    #[test]
    fn degenerate_values_serialize_as_null() {
        let result = compute_significance(
            &GroupObservation::new(0, 1000),
            &GroupObservation::new(0, 1000),
        );
        let json = to_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["p_value"].is_null());
        assert!(value["relative_lift"].is_null());
        assert_eq!(value["is_significant"], serde_json::Value::Bool(false));
    }

    #[test]
    fn pretty_output_is_multiline() {
        let result = compute_significance(
            &GroupObservation::new(50, 1000),
            &GroupObservation::new(52, 1000),
        );
        let pretty = to_json_pretty(&result).unwrap();
        assert!(pretty.lines().count() > 1);
    }
}
