//! Country canonicalization and rare-country suppression.
//!
//! Canonicalization is record-local. Suppression needs the share of every
//! joined country list across the whole file, so the normalizer first builds a
//! [`CountryFrequencies`] snapshot in a read-only pass and only then rewrites
//! records against it.

use super::country_table::COUNTRY_ALIASES;
use super::tags::strip_locale_prefixes;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// Alias lookup built once from [`COUNTRY_ALIASES`]; later entries overwrite
/// earlier ones with the same key.
static COUNTRY_LOOKUP: Lazy<HashMap<&'static str, Option<&'static str>>> = Lazy::new(|| {
    let mut lookup = HashMap::with_capacity(COUNTRY_ALIASES.len());
    for &(alias, canonical) in COUNTRY_ALIASES {
        lookup.insert(alias, canonical);
    }
    lookup
});

/// Canonical name for one country token.
///
/// The token is lower-cased and stripped of locale prefixes first. Spellings
/// absent from the table pass through; spellings the table maps to nothing
/// (and empty tokens) give `None`.
pub fn canonical_country(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();
    let cleaned = strip_locale_prefixes(&lowered);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    match COUNTRY_LOOKUP.get(cleaned) {
        Some(Some(canonical)) => Some((*canonical).to_string()),
        Some(None) => None,
        None => Some(cleaned.to_string()),
    }
}

/// Split a `countries` value into raw tokens.
///
/// Lists pass through (nulls skipped, other scalars stringified); strings are
/// split on `", "`; null, `""`, `"None"`, `"none"` and any other shape give
/// an empty list.
fn country_tokens(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) if matches!(s.as_str(), "" | "None" | "none") => Vec::new(),
        Value::String(s) => s.split(", ").map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Canonical country names of a record, in input order.
pub fn canonical_countries(value: &Value) -> Vec<String> {
    country_tokens(value)
        .iter()
        .filter_map(|token| canonical_country(token))
        .collect()
}

/// Snapshot of how often each joined country list occurs across a file.
///
/// Every surveyed record contributes one count to its `", "`-joined list of
/// canonical countries (the empty string for a record without countries).
/// A token is dropped when it equals a joined value whose share of all
/// records is below the threshold, so `"france, tuvalu"` being rare never
/// removes `tuvalu` while a rare lone `"germany"` removes `germany`
/// everywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryFrequencies {
    counts: HashMap<String, u64>,
    records: u64,
    threshold: f64,
}

impl CountryFrequencies {
    /// Empty snapshot suppressing values whose share is below `threshold`.
    pub fn new(threshold: f64) -> Self {
        Self {
            counts: HashMap::new(),
            records: 0,
            threshold,
        }
    }

    /// Record the countries of one record.
    pub fn observe(&mut self, countries: &[String]) {
        *self.counts.entry(countries.join(", ")).or_insert(0) += 1;
        self.records += 1;
    }

    /// Number of records observed.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Number of distinct joined values observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Share of all records whose joined countries equal `value`.
    pub fn share(&self, value: &str) -> f64 {
        if self.records == 0 {
            return 0.0;
        }
        let count = self.counts.get(value).copied().unwrap_or(0);
        count as f64 / self.records as f64
    }

    /// Whether `value` was observed with a share below the threshold.
    pub fn is_rare(&self, value: &str) -> bool {
        self.counts.contains_key(value) && self.share(value) < self.threshold
    }

    /// Number of distinct joined values that are rare.
    pub fn rare_count(&self) -> usize {
        self.counts.keys().filter(|v| self.is_rare(v)).count()
    }

    /// Drop tokens equal to a rare value and join the rest with `", "`.
    ///
    /// A record without countries, or whose tokens are all rare, keeps an
    /// empty string.
    pub fn retain_common(&self, countries: Vec<String>) -> Option<String> {
        let kept: Vec<String> = countries.into_iter().filter(|c| !self.is_rare(c)).collect();
        Some(kept.join(", "))
    }
}
