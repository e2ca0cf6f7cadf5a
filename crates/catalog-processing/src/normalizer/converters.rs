//! Scalar field conversions for the normalizer.

use super::tags::{join_list, strip_locale_prefixes};
use crate::types::NOT_APPLICABLE_SCORE;
use serde_json::Value;

/// Text form of a scalar value. Null, lists and objects have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `groups`: `"unknown"` is missing, other strings are lower-cased.
///
/// The marker is matched before lower-casing, so `"Unknown"` survives as
/// `"unknown"`. Non-string values are missing.
pub fn normalize_group(value: &Value) -> Option<String> {
    match value.as_str()? {
        "unknown" => None,
        s => Some(s.to_lowercase()),
    }
}

/// `name`: empty is missing, other strings are lower-cased.
pub fn normalize_name(value: &Value) -> Option<String> {
    match value.as_str()? {
        "" => None,
        s => Some(s.to_lowercase()),
    }
}

/// `code`: numeric value rounded half-to-even to an integer.
///
/// Integer literals are taken exactly so long barcodes keep every digit.
/// Empty strings, non-numeric text and non-finite or out-of-range numbers are
/// missing.
pub fn parse_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(round_to_i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(round_to_i64))
        }
        _ => None,
    }
}

fn round_to_i64(value: f64) -> Option<i64> {
    let rounded = value.round_ties_even();
    // i64::MAX is not representable as f64; the bound is exclusive.
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Some(rounded as i64)
    } else {
        None
    }
}

/// `packaging`: empty is missing; locale prefixes are stripped from text;
/// every value is then rendered lower-case.
pub fn normalize_packaging(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::String(s) => strip_locale_prefixes(s).into_owned(),
        Value::Array(_) => strip_locale_prefixes(&join_list(value).unwrap_or_default()).into_owned(),
        other => scalar_text(other).unwrap_or_else(|| other.to_string()),
    };
    Some(text.to_lowercase())
}

/// `ecoscore_groups`: lists are joined; `"unknown"`, `""` and
/// `"not-applicable"` are missing.
pub fn normalize_ecoscore_groups(value: &Value) -> Option<String> {
    let text = match value {
        Value::Array(_) => join_list(value)?,
        other => scalar_text(other)?,
    };
    match text.as_str() {
        "unknown" | "" | "not-applicable" => None,
        _ => Some(text),
    }
}

/// `ecoscore_note`: clamped into [0, 100] unless at or above the
/// not-applicable sentinel, which passes unchanged.
///
/// Numeric strings are accepted; `"unknown"`, `""` and any other text are
/// missing.
pub fn normalize_score(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !score.is_finite() {
        return None;
    }
    Some(clamp_score(score))
}

/// Clamp a finite score into [0, 100], leaving the sentinel range untouched.
pub fn clamp_score(score: f64) -> f64 {
    if score >= NOT_APPLICABLE_SCORE {
        score
    } else {
        score.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_rules() {
        assert_eq!(normalize_group(&json!("unknown")), None);
        assert_eq!(normalize_group(&json!("Fruits and Vegetables")), Some("fruits and vegetables".into()));
        assert_eq!(normalize_group(&json!("Unknown")), Some("unknown".into()));
        assert_eq!(normalize_group(&json!(3)), None);
        assert_eq!(normalize_group(&Value::Null), None);
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(normalize_name(&json!("")), None);
        assert_eq!(normalize_name(&json!("Nutella")), Some("nutella".into()));
        assert_eq!(normalize_name(&Value::Null), None);
    }

    #[test]
    fn test_code_parsing() {
        assert_eq!(parse_code(&json!("3017620422003")), Some(3017620422003));
        assert_eq!(parse_code(&json!(" 0042 ")), Some(42));
        assert_eq!(parse_code(&json!(12.5)), Some(12));
        assert_eq!(parse_code(&json!(13.5)), Some(14));
        assert_eq!(parse_code(&json!("7.6")), Some(8));
        assert_eq!(parse_code(&json!("")), None);
        assert_eq!(parse_code(&json!("abc")), None);
        assert_eq!(parse_code(&json!("1e400")), None);
        assert_eq!(parse_code(&Value::Null), None);
        assert_eq!(parse_code(&json!(true)), None);
    }

    #[test]
    fn test_packaging_rules() {
        assert_eq!(normalize_packaging(&json!("")), None);
        assert_eq!(normalize_packaging(&Value::Null), None);
        assert_eq!(
            normalize_packaging(&json!("en:Plastic, fr:Carton")),
            Some("plastic, carton".into())
        );
        assert_eq!(normalize_packaging(&json!(12)), Some("12".into()));
        assert_eq!(normalize_packaging(&json!(["en:glass", "Box"])), Some("glass, box".into()));
    }

    #[test]
    fn test_ecoscore_groups_rules() {
        assert_eq!(normalize_ecoscore_groups(&json!(["b"])), Some("b".into()));
        assert_eq!(normalize_ecoscore_groups(&json!(["unknown"])), None);
        assert_eq!(normalize_ecoscore_groups(&json!("not-applicable")), None);
        assert_eq!(normalize_ecoscore_groups(&json!([])), None);
        assert_eq!(normalize_ecoscore_groups(&json!("")), None);
        assert_eq!(normalize_ecoscore_groups(&Value::Null), None);
        assert_eq!(normalize_ecoscore_groups(&json!(["a", "b"])), Some("a, b".into()));
    }

    #[test]
    fn test_score_clamping() {
        assert_eq!(normalize_score(&json!(150)), Some(100.0));
        assert_eq!(normalize_score(&json!(-5)), Some(0.0));
        assert_eq!(normalize_score(&json!(42.5)), Some(42.5));
        assert_eq!(normalize_score(&json!(999)), Some(999.0));
        assert_eq!(normalize_score(&json!(1200)), Some(1200.0));
        assert_eq!(normalize_score(&json!("73")), Some(73.0));
    }

    #[test]
    fn test_score_missing_markers() {
        assert_eq!(normalize_score(&json!("unknown")), None);
        assert_eq!(normalize_score(&json!("")), None);
        assert_eq!(normalize_score(&Value::Null), None);
        assert_eq!(normalize_score(&json!([50])), None);
    }

    #[test]
    fn test_clamp_boundaries() {
        assert_eq!(clamp_score(100.0), 100.0);
        assert_eq!(clamp_score(0.0), 0.0);
        assert_eq!(clamp_score(998.9), 100.0);
    }
}
