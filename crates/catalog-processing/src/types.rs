//! Record types flowing between the pipeline stages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source fields retained by the projector, in output order.
pub const PROJECTED_FIELDS: [&str; 10] = [
    "pnns_groups_1",
    "ingredients_tags",
    "packaging",
    "product_name",
    "ecoscore_tags",
    "categories_tags",
    "ecoscore_score",
    "labels_tags",
    "code",
    "countries",
];

/// A raw catalog record reduced to the allow-listed fields.
///
/// Deserializing a full raw record into this type is the projection itself:
/// unknown fields are ignored and absent ones default to JSON null. Field
/// values are kept untyped because the dump mixes strings, lists and numbers
/// for the same key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedProduct {
    #[serde(default)]
    pub pnns_groups_1: Value,
    #[serde(default)]
    pub ingredients_tags: Value,
    #[serde(default)]
    pub packaging: Value,
    #[serde(default)]
    pub product_name: Value,
    #[serde(default)]
    pub ecoscore_tags: Value,
    #[serde(default)]
    pub categories_tags: Value,
    #[serde(default)]
    pub ecoscore_score: Value,
    #[serde(default)]
    pub labels_tags: Value,
    #[serde(default)]
    pub code: Value,
    #[serde(default)]
    pub countries: Value,
}

/// A record after field normalization, under its canonical field names.
///
/// `None` is written as JSON null, the canonical missing sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    pub groups: Option<String>,
    pub packaging: Option<String>,
    pub name: String,
    pub ecoscore_groups: Option<String>,
    /// In [0, 100], or at least [`NOT_APPLICABLE_SCORE`].
    pub ecoscore_note: Option<f64>,
    pub code: i64,
    pub countries: Option<String>,
    pub ingredients: Option<String>,
    pub categories: Option<String>,
    /// Number of English labels, at most [`MAX_LABELS_NOTE`].
    pub labels_note: u8,
}

/// Scores at or above this value mean "not applicable" and are never clamped.
pub const NOT_APPLICABLE_SCORE: f64 = 999.0;

pub const MAX_LABELS_NOTE: u8 = 9;

/// Stratification key used by the partitioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreClass {
    /// `ecoscore_note` holds a finite number (including the not-applicable sentinel).
    Ok,
    /// `ecoscore_note` is missing.
    Ko,
}

impl ScoreClass {
    /// Classify a decoded record by the presence of its score.
    ///
    /// An absent key, JSON null or any non-numeric value counts as missing.
    pub fn of(record: &serde_json::Map<String, Value>) -> Self {
        match record.get("ecoscore_note").and_then(Value::as_f64) {
            Some(score) if score.is_finite() => Self::Ok,
            _ => Self::Ko,
        }
    }
}

/// One of the three partition outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    Train,
    Test,
    Valid,
}

impl Split {
    /// Fill priority within a category: valid first, then test, then train.
    pub const PRIORITY: [Split; 3] = [Split::Valid, Split::Test, Split::Train];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
            Self::Valid => "valid",
        }
    }
}

/// Per-split counters for one score category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCounts {
    pub train: usize,
    pub test: usize,
    pub valid: usize,
}

impl SplitCounts {
    pub fn get(&self, split: Split) -> usize {
        match split {
            Split::Train => self.train,
            Split::Test => self.test,
            Split::Valid => self.valid,
        }
    }

    pub fn get_mut(&mut self, split: Split) -> &mut usize {
        match split {
            Split::Train => &mut self.train,
            Split::Test => &mut self.test,
            Split::Valid => &mut self.valid,
        }
    }

    pub fn total(&self) -> usize {
        self.train + self.test + self.valid
    }
}

/// Summary of a normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeSummary {
    pub records_in: usize,
    pub dropped_missing_identity: usize,
    pub dropped_sparse: usize,
    pub records_out: usize,
}

/// Summary of a partitioning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionReport {
    pub ok_count: usize,
    pub ko_count: usize,
    /// `ok` records carrying the not-applicable sentinel score.
    pub not_applicable_count: usize,
    pub total_count: usize,
    pub skipped_lines: usize,
    pub ok_quota: SplitCounts,
    pub ko_quota: SplitCounts,
    pub ok_written: SplitCounts,
    pub ko_written: SplitCounts,
}

impl PartitionReport {
    /// Records that fit in no split because every quota of their category was full.
    pub fn unassigned(&self) -> usize {
        self.total_count - self.ok_written.total() - self.ko_written.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_projection_ignores_unknown_and_nulls_missing() {
        let raw = json!({"code": "123", "creator": "x", "product_name": "Jam"});
        let projected: ProjectedProduct = serde_json::from_value(raw).unwrap();
        assert_eq!(projected.code, json!("123"));
        assert_eq!(projected.product_name, json!("Jam"));
        assert_eq!(projected.countries, Value::Null);
    }

    #[test]
    fn test_projected_field_order_matches_allow_list() {
        let encoded = serde_json::to_value(ProjectedProduct::default()).unwrap();
        let keys: Vec<&str> = encoded.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, PROJECTED_FIELDS);
    }

    #[test]
    fn test_score_class() {
        assert_eq!(ScoreClass::of(&object(json!({"ecoscore_note": 42}))), ScoreClass::Ok);
        assert_eq!(ScoreClass::of(&object(json!({"ecoscore_note": 999}))), ScoreClass::Ok);
        assert_eq!(ScoreClass::of(&object(json!({"ecoscore_note": null}))), ScoreClass::Ko);
        assert_eq!(ScoreClass::of(&object(json!({"ecoscore_note": "none"}))), ScoreClass::Ko);
        assert_eq!(ScoreClass::of(&object(json!({"name": "x"}))), ScoreClass::Ko);
    }

    #[test]
    fn test_split_counts_accessors() {
        let mut counts = SplitCounts::default();
        *counts.get_mut(Split::Valid) += 2;
        *counts.get_mut(Split::Train) += 1;
        assert_eq!(counts.get(Split::Valid), 2);
        assert_eq!(counts.total(), 3);
    }
}
