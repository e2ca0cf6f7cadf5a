//! Tag extraction for `<lang>:<value>` hierarchical labels.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;

/// Two word characters and a colon, bounded on both sides (`fr:`, `en:`).
static LOCALE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w{2}:\b").expect("Invalid regex: locale prefix"));

const ENGLISH_PREFIX: &str = "en:";

/// Remove every locale prefix from `text`.
pub(crate) fn strip_locale_prefixes(text: &str) -> Cow<'_, str> {
    LOCALE_PREFIX.replace_all(text, "")
}

/// Text form of a scalar list element; nulls and nested values are skipped.
fn element_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Join the elements of a list value with `", "`; non-lists give `None`.
pub(crate) fn join_list(value: &Value) -> Option<String> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(element_text)
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Extract English ingredient/category tags.
///
/// The list is flattened to `"a, b, c"` text and split back on `", "`, so an
/// element containing `", "` yields several tokens. Only `en:` tokens are
/// kept, reduced to the text after their last colon. Non-list values count as
/// an empty list; an empty result is `None`.
pub fn extract_english_tags(value: &Value) -> Option<String> {
    let joined = join_list(value).unwrap_or_default();
    let suffixes: Vec<&str> = joined
        .trim_matches(|c| c == '[' || c == ']')
        .split(", ")
        .filter(|token| token.starts_with(ENGLISH_PREFIX))
        .filter_map(|token| token.rsplit(':').next())
        .collect();

    let result = suffixes.join(", ");
    if result.is_empty() { None } else { Some(result) }
}

/// Count English labels, capped at [`MAX_LABELS_NOTE`](crate::types::MAX_LABELS_NOTE).
///
/// Accepts a list or a `", "`-separated string. Null, `""`, `"None"` and
/// `"none"` mean no labels.
pub fn count_english_labels(value: &Value) -> u8 {
    let tokens: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(element_text).collect(),
        Value::String(s) if matches!(s.as_str(), "" | "None" | "none") => Vec::new(),
        Value::String(s) => s.split(", ").map(str::to_string).collect(),
        _ => Vec::new(),
    };

    let english = tokens
        .iter()
        .filter(|token| token.starts_with(ENGLISH_PREFIX))
        .filter_map(|token| token.split_once(':').map(|(_, rest)| rest))
        .count();

    english.min(usize::from(crate::types::MAX_LABELS_NOTE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_keeps_only_english() {
        assert_eq!(
            extract_english_tags(&json!(["en:sugar", "de:zucker"])),
            Some("sugar".to_string())
        );
    }

    #[test]
    fn test_extract_uses_last_colon_segment() {
        assert_eq!(
            extract_english_tags(&json!(["en:fr:lait", "en:salt"])),
            Some("lait, salt".to_string())
        );
    }

    #[test]
    fn test_extract_empty_and_non_list() {
        assert_eq!(extract_english_tags(&json!([])), None);
        assert_eq!(extract_english_tags(&json!(["fr:sucre"])), None);
        assert_eq!(extract_english_tags(&Value::Null), None);
        assert_eq!(extract_english_tags(&json!("en:sugar")), None);
    }

    #[test]
    fn test_extract_splits_embedded_separators() {
        assert_eq!(
            extract_english_tags(&json!(["en:water, en:salt"])),
            Some("water, salt".to_string())
        );
    }

    #[test]
    fn test_strip_locale_prefixes() {
        assert_eq!(strip_locale_prefixes("en:plastic, fr:carton"), "plastic, carton");
        assert_eq!(strip_locale_prefixes("box"), "box");
        // No word character after the colon, so nothing to strip.
        assert_eq!(strip_locale_prefixes("fr: "), "fr: ");
    }

    #[test]
    fn test_count_labels() {
        assert_eq!(count_english_labels(&json!(["en:organic", "fr:bio", "en:vegan"])), 2);
        assert_eq!(count_english_labels(&json!("en:organic, en:fair-trade")), 2);
        assert_eq!(count_english_labels(&json!("None")), 0);
        assert_eq!(count_english_labels(&json!("")), 0);
        assert_eq!(count_english_labels(&Value::Null), 0);
        assert_eq!(count_english_labels(&json!(42)), 0);
    }

    #[test]
    fn test_count_labels_is_capped() {
        let labels: Vec<String> = (0..14).map(|i| format!("en:label-{i}")).collect();
        assert_eq!(count_english_labels(&json!(labels)), 9);
    }
}
