//! Field normalization for projected catalog records.
//!
//! This module provides:
//! - Renaming to canonical field names
//! - Per-field cleaning (case folding, missing markers, numeric clamping)
//! - English tag extraction for ingredients, categories and labels
//! - Country canonicalization with rare-country suppression
//! - Row admission filters
//!
//! Normalization runs in two passes over the projected file. The survey pass
//! is read-only and produces the [`CountryFrequencies`] snapshot; the
//! transform pass rewrites every record against that snapshot.

mod converters;
mod countries;
mod country_table;
mod tags;

pub use converters::{
    clamp_score, normalize_ecoscore_groups, normalize_group, normalize_name, normalize_packaging,
    normalize_score, parse_code,
};
pub use countries::{CountryFrequencies, canonical_countries, canonical_country};
pub use tags::{count_english_labels, extract_english_tags};

use crate::error::Result;
use crate::jsonl::{self, LineBatches};
use crate::pipeline::{PipelineStage, ProgressReporter, ProgressUpdate};
use crate::translate::{TextTranslator, translate_field};
use crate::types::{NormalizeSummary, NormalizedProduct, ProjectedProduct};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of normalizing a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Kept(Box<NormalizedProduct>),
    /// Dropped because `name` or `code` is missing.
    MissingIdentity,
    /// Dropped because too few classification fields are present.
    Sparse,
}

/// Applies the per-field rules and row filters to projected records.
pub struct Normalizer {
    batch_size: usize,
    rare_country_threshold: f64,
    translator: Option<Arc<dyn TextTranslator>>,
}

impl Normalizer {
    pub fn new(batch_size: usize, rare_country_threshold: f64) -> Self {
        Self {
            batch_size,
            rare_country_threshold,
            translator: None,
        }
    }

    /// Run `translator` over the free-text fields of every record.
    pub fn with_translator(mut self, translator: Arc<dyn TextTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }

    fn translate(&self, field: Option<String>) -> Option<String> {
        translate_field(self.translator.as_deref(), field)
    }

    /// Read-only pass: joined country lists of every record with a name and code.
    pub fn survey(&self, input: &Path) -> Result<(CountryFrequencies, usize)> {
        let reader = jsonl::open_input(PipelineStage::Normalizing, input)?;
        let mut frequencies = CountryFrequencies::new(self.rare_country_threshold);
        let mut records = 0;

        for batch in LineBatches::new(reader, self.batch_size) {
            for line in batch? {
                let raw: ProjectedProduct = jsonl::decode_line(input, &line)?;
                records += 1;
                if has_identity(&raw) {
                    frequencies.observe(&canonical_countries(&raw.countries));
                }
            }
        }

        info!(
            "Country survey: {} records, {} distinct country lists, {} below {:.3}%",
            frequencies.records(),
            frequencies.distinct(),
            frequencies.rare_count(),
            self.rare_country_threshold * 100.0
        );
        Ok((frequencies, records))
    }

    /// Normalize one projected record against a country snapshot.
    pub fn normalize(&self, raw: &ProjectedProduct, frequencies: &CountryFrequencies) -> Outcome {
        let groups = self.translate(normalize_group(&raw.pnns_groups_1));
        let name = self.translate(normalize_name(&raw.product_name));
        let code = parse_code(&raw.code);

        let (Some(name), Some(code)) = (name, code) else {
            return Outcome::MissingIdentity;
        };

        let ingredients = self.translate(extract_english_tags(&raw.ingredients_tags));
        let packaging = self.translate(normalize_packaging(&raw.packaging));
        let ecoscore_groups = normalize_ecoscore_groups(&raw.ecoscore_tags);
        let categories = self.translate(extract_english_tags(&raw.categories_tags));
        let countries = frequencies.retain_common(canonical_countries(&raw.countries));
        let ecoscore_note = normalize_score(&raw.ecoscore_score);

        if is_sparse(groups.is_none(), categories.is_none(), ecoscore_groups.is_none()) {
            return Outcome::Sparse;
        }

        Outcome::Kept(Box::new(NormalizedProduct {
            groups,
            packaging,
            name,
            ecoscore_groups,
            ecoscore_note,
            code,
            countries,
            ingredients,
            categories,
            labels_note: count_english_labels(&raw.labels_tags),
        }))
    }

    /// Normalize `input` into `output`.
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<NormalizeSummary> {
        let (frequencies, records) = self.survey(input)?;
        let total_batches = jsonl::batch_count(records, self.batch_size);
        info!("start preprocessing, total batches estimated: {}", total_batches);

        let reader = jsonl::open_input(PipelineStage::Normalizing, input)?;
        let mut writer = jsonl::create_output(output)?;
        let mut summary = NormalizeSummary::default();

        for (index, batch) in LineBatches::new(reader, self.batch_size).enumerate() {
            let batch = batch?;
            let mut kept = Vec::with_capacity(batch.len());
            for line in &batch {
                let raw: ProjectedProduct = jsonl::decode_line(input, line)?;
                summary.records_in += 1;
                match self.normalize(&raw, &frequencies) {
                    Outcome::Kept(product) => kept.push(product),
                    Outcome::MissingIdentity => summary.dropped_missing_identity += 1,
                    Outcome::Sparse => summary.dropped_sparse += 1,
                }
            }
            for product in &kept {
                jsonl::write_record(&mut writer, product)?;
            }
            summary.records_out += kept.len();

            debug!("Batch {}: kept {} of {}", index + 1, kept.len(), batch.len());
            let update = ProgressUpdate::with_items(
                PipelineStage::Normalizing,
                format!("Batch {}/{}", index + 1, total_batches),
                index + 1,
                total_batches,
                "saved content",
            );
            info!("saved content, progress: {:.1}%", update.stage_percent());
            reporter.report(update);
        }

        writer.flush()?;
        info!(
            "Normalized {} records: kept {}, dropped {} without name/code, {} too sparse",
            summary.records_in,
            summary.records_out,
            summary.dropped_missing_identity,
            summary.dropped_sparse
        );
        Ok(summary)
    }
}

/// Whether a record survives the name/code filter, judged without translation.
fn has_identity(raw: &ProjectedProduct) -> bool {
    normalize_name(&raw.product_name).is_some() && parse_code(&raw.code).is_some()
}

/// Any two of groups, categories and ecoscore groups missing drops the row.
fn is_sparse(groups_missing: bool, categories_missing: bool, eco_groups_missing: bool) -> bool {
    (groups_missing && categories_missing)
        || (eco_groups_missing && groups_missing)
        || (eco_groups_missing && categories_missing)
}
