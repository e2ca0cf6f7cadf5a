//! Configuration types for the catalog preprocessing pipeline.
//!
//! This module provides configuration options using the builder pattern,
//! plus [`DatasetPaths`], which derives every stage file from the dataset
//! identifier and root directory.

use crate::pipeline::PipelineStage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Whole-number percentages of one score category routed to each split.
///
/// Quotas are `floor(count * pct / 100)`; the three percentages may sum to
/// less than 100, in which case the remainder is written nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPercentages {
    pub train: u32,
    pub test: u32,
    pub valid: u32,
}

impl SplitPercentages {
    pub const fn new(train: u32, test: u32, valid: u32) -> Self {
        Self { train, test, valid }
    }

    pub fn total(&self) -> u32 {
        self.train + self.test + self.valid
    }
}

/// Split percentages for records with a score (`ok`) and without (`ko`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRatios {
    pub ok: SplitPercentages,
    pub ko: SplitPercentages,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            ok: SplitPercentages::new(80, 15, 5),
            ko: SplitPercentages::new(80, 20, 0),
        }
    }
}

/// Configuration for the preprocessing pipeline.
///
/// Use [`PipelineConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_processing::config::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .batch_size(10_000)
///     .dataset_id("2024")
///     .root_dir("/srv/catalog")
///     .seed(42)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of records buffered per batch in every stage.
    pub batch_size: usize,

    /// Identifier used to namespace all file names.
    pub dataset_id: String,

    /// Directory holding the `data/` and `logs/` subdirectories.
    pub root_dir: PathBuf,

    /// Seed for the shuffle and sample steps. `None` seeds from OS entropy.
    /// Default: None
    pub seed: Option<u64>,

    /// Number of lines copied into the preview file.
    /// Default: 60
    pub sample_size: usize,

    /// Joined country lists whose share of all records falls below this
    /// value are rare; tokens equal to a rare value leave every list.
    /// Default: 0.001 (0.1%)
    pub rare_country_threshold: f64,

    /// Per-category split percentages.
    pub split_ratios: SplitRatios,

    /// First stage to run; earlier stage outputs must already exist.
    /// Default: Projecting
    pub start_stage: PipelineStage,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: 10_000,
            dataset_id: String::from("dataset"),
            root_dir: PathBuf::from("."),
            seed: None,
            sample_size: 60,
            rare_country_threshold: 0.001,
            split_ratios: SplitRatios::default(),
            start_stage: PipelineStage::Projecting,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// File layout derived from this configuration.
    pub fn paths(&self) -> DatasetPaths {
        DatasetPaths::new(&self.root_dir, &self.dataset_id)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.batch_size == 0 {
            return Err(ConfigValidationError::InvalidBatchSize(self.batch_size));
        }

        if self.dataset_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDatasetId);
        }

        if !(0.0..1.0).contains(&self.rare_country_threshold) {
            return Err(ConfigValidationError::InvalidThreshold(
                self.rare_country_threshold,
            ));
        }

        for (category, pct) in [("ok", self.split_ratios.ok), ("ko", self.split_ratios.ko)] {
            if pct.total() > 100 {
                return Err(ConfigValidationError::SplitOverflow {
                    category: category.to_string(),
                    total: pct.total(),
                });
            }
        }

        if !matches!(
            self.start_stage,
            PipelineStage::Projecting
                | PipelineStage::Normalizing
                | PipelineStage::Shuffling
                | PipelineStage::CanonicalizingNulls
                | PipelineStage::Partitioning
                | PipelineStage::Sampling
        ) {
            return Err(ConfigValidationError::InvalidStartStage(self.start_stage));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),

    #[error("Dataset identifier must not be empty")]
    EmptyDatasetId,

    #[error("Invalid rare country threshold: {0} (must be in [0.0, 1.0))")]
    InvalidThreshold(f64),

    #[error("Split percentages for '{category}' sum to {total} (must be at most 100)")]
    SplitOverflow { category: String, total: u32 },

    #[error("Cannot start a run at stage {0:?}")]
    InvalidStartStage(PipelineStage),
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    batch_size: Option<usize>,
    dataset_id: Option<String>,
    root_dir: Option<PathBuf>,
    seed: Option<u64>,
    sample_size: Option<usize>,
    rare_country_threshold: Option<f64>,
    split_ratios: Option<SplitRatios>,
    start_stage: Option<PipelineStage>,
}

impl PipelineConfigBuilder {
    /// Set the number of records buffered per batch.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Set the dataset identifier used in every file name.
    pub fn dataset_id(mut self, id: impl Into<String>) -> Self {
        self.dataset_id = Some(id.into());
        self
    }

    /// Set the root directory holding `data/` and `logs/`.
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(path.into());
        self
    }

    /// Seed every randomized step for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of preview lines.
    pub fn sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    /// Set the rare country share threshold.
    pub fn rare_country_threshold(mut self, threshold: f64) -> Self {
        self.rare_country_threshold = Some(threshold);
        self
    }

    /// Override the split percentages.
    pub fn split_ratios(mut self, ratios: SplitRatios) -> Self {
        self.split_ratios = Some(ratios);
        self
    }

    /// Resume a run at the given stage.
    pub fn start_stage(mut self, stage: PipelineStage) -> Self {
        self.start_stage = Some(stage);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if validation fails.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let defaults = PipelineConfig::default();
        let config = PipelineConfig {
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            dataset_id: self.dataset_id.unwrap_or(defaults.dataset_id),
            root_dir: self.root_dir.unwrap_or(defaults.root_dir),
            seed: self.seed,
            sample_size: self.sample_size.unwrap_or(defaults.sample_size),
            rare_country_threshold: self
                .rare_country_threshold
                .unwrap_or(defaults.rare_country_threshold),
            split_ratios: self.split_ratios.unwrap_or_default(),
            start_stage: self.start_stage.unwrap_or(defaults.start_stage),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Every file a run reads or writes, namespaced by dataset identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub raw: PathBuf,
    pub projected: PathBuf,
    pub normalized: PathBuf,
    pub shuffled: PathBuf,
    pub canonical: PathBuf,
    pub train: PathBuf,
    pub test: PathBuf,
    pub valid: PathBuf,
    pub sample: PathBuf,
    pub logs_dir: PathBuf,
}

impl DatasetPaths {
    pub fn new(root: &Path, dataset_id: &str) -> Self {
        let data = root.join("data");
        let stage = |n: &str| data.join(format!("{dataset_id}_openfoodfacts_{n}.jsonl"));
        Self {
            raw: stage("00"),
            projected: stage("01"),
            normalized: stage("02"),
            shuffled: stage("03"),
            canonical: stage("04"),
            train: data.join(format!("{dataset_id}_train.jsonl")),
            test: data.join(format!("{dataset_id}_test.jsonl")),
            valid: data.join(format!("{dataset_id}_valid.jsonl")),
            sample: stage("sample"),
            logs_dir: root.join("logs"),
        }
    }

    /// Scratch file used by the first shuffle phase.
    pub fn shuffle_scratch(&self) -> PathBuf {
        let mut name = self.shuffled.clone().into_os_string();
        name.push(".temp");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.sample_size, 60);
        assert_eq!(config.rare_country_threshold, 0.001);
        assert_eq!(config.split_ratios.ok, SplitPercentages::new(80, 15, 5));
        assert_eq!(config.split_ratios.ko, SplitPercentages::new(80, 20, 0));
        assert_eq!(config.start_stage, PipelineStage::Projecting);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = PipelineConfig::builder()
            .batch_size(500)
            .dataset_id("fr")
            .root_dir("/tmp/catalog")
            .seed(7)
            .sample_size(10)
            .build()
            .unwrap();

        assert_eq!(config.batch_size, 500);
        assert_eq!(config.dataset_id, "fr");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sample_size, 10);
    }

    #[test]
    fn test_validation_zero_batch_size() {
        let result = PipelineConfig::builder().batch_size(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidBatchSize(0)
        ));
    }

    #[test]
    fn test_validation_empty_dataset_id() {
        let result = PipelineConfig::builder().dataset_id("  ").build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyDatasetId
        ));
    }

    #[test]
    fn test_validation_split_overflow() {
        let ratios = SplitRatios {
            ok: SplitPercentages::new(80, 15, 10),
            ..SplitRatios::default()
        };
        let result = PipelineConfig::builder().split_ratios(ratios).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::SplitOverflow { total: 105, .. }
        ));
    }

    #[test]
    fn test_validation_terminal_start_stage() {
        let result = PipelineConfig::builder()
            .start_stage(PipelineStage::Complete)
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidStartStage(PipelineStage::Complete)
        ));
    }

    #[test]
    fn test_dataset_paths_layout() {
        let paths = DatasetPaths::new(Path::new("/srv"), "v2");
        assert_eq!(paths.raw, PathBuf::from("/srv/data/v2_openfoodfacts_00.jsonl"));
        assert_eq!(paths.canonical, PathBuf::from("/srv/data/v2_openfoodfacts_04.jsonl"));
        assert_eq!(paths.train, PathBuf::from("/srv/data/v2_train.jsonl"));
        assert_eq!(paths.sample, PathBuf::from("/srv/data/v2_openfoodfacts_sample.jsonl"));
        assert_eq!(
            paths.shuffle_scratch(),
            PathBuf::from("/srv/data/v2_openfoodfacts_03.jsonl.temp")
        );
        assert_eq!(paths.logs_dir, PathBuf::from("/srv/logs"));
    }

    #[test]
    fn test_config_serialization() {
        let config = PipelineConfig::builder().seed(3).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.seed, Some(3));
        assert_eq!(deserialized.split_ratios, config.split_ratios);
        assert_eq!(deserialized.start_stage, config.start_stage);
    }
}
