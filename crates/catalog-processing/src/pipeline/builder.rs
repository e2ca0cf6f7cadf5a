//! Main preprocessing pipeline module.
//!
//! This module provides the core `Pipeline` struct and builder for running
//! the stages in order over the files of one dataset.

use crate::config::{DatasetPaths, PipelineConfig};
use crate::error::{PipelineError, Result, ResultExt};
use crate::normalizer::Normalizer;
use crate::nulls::{NullCanonicalizer, NullSummary};
use crate::partition::{PartitionOutputs, Partitioner};
use crate::pipeline::progress::{
    ClosureProgressReporter, PipelineStage, ProgressReporter, ProgressUpdate, SilentReporter,
};
use crate::projector::FieldProjector;
use crate::sampler::Sampler;
use crate::shuffler::Shuffler;
use crate::translate::TextTranslator;
use crate::types::{NormalizeSummary, PartitionReport};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Per-stage results of a run. Stages skipped by a resume are `None`.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub projected: Option<usize>,
    pub normalized: Option<NormalizeSummary>,
    pub shuffled: Option<usize>,
    pub nulls: Option<NullSummary>,
    pub partition: Option<PartitionReport>,
    pub sampled: Option<usize>,
    pub duration: Duration,
}

/// The preprocessing pipeline.
///
/// Use [`Pipeline::builder()`] to create a new pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_processing::{Pipeline, PipelineConfig};
///
/// let report = Pipeline::builder()
///     .config(PipelineConfig::builder().dataset_id("2024").seed(7).build()?)
///     .on_progress(|update| {
///         println!("[{:.0}%] {}", update.progress * 100.0, update.message);
///     })
///     .build()?
///     .run()?;
/// ```
pub struct Pipeline {
    config: PipelineConfig,
    translator: Option<Arc<dyn TextTranslator>>,
    progress_reporter: Option<Arc<dyn ProgressReporter>>,
}

// Ensure Pipeline is Send (can be moved to a worker thread)
static_assertions::assert_impl_all!(Pipeline: Send);

impl Pipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage from `config.start_stage` to the end.
    ///
    /// # Errors
    ///
    /// Fails on the first fatal stage error; the error carries the stage name
    /// and the input file it was reading.
    pub fn run(&self) -> Result<RunReport> {
        match self.run_internal() {
            Ok(report) => {
                self.reporter().report(ProgressUpdate::complete("Pipeline completed successfully"));
                Ok(report)
            }
            Err(e) => {
                self.reporter().report(ProgressUpdate::failed(e.to_string()));
                error!("Pipeline error [{}]: {}", e.error_code(), e);
                Err(e)
            }
        }
    }

    fn reporter(&self) -> &dyn ProgressReporter {
        match &self.progress_reporter {
            Some(reporter) => reporter.as_ref(),
            None => &SilentReporter,
        }
    }

    fn run_internal(&self) -> Result<RunReport> {
        let start_time = Instant::now();
        let paths = self.config.paths();
        let reporter = self.reporter();
        let batch_size = self.config.batch_size;

        info!(
            "Starting preprocessing of dataset '{}' under {} (batch size {}, from {})",
            self.config.dataset_id,
            self.config.root_dir.display(),
            batch_size,
            self.config.start_stage.display_name()
        );
        reporter.report(ProgressUpdate::new(
            PipelineStage::Initializing,
            0.0,
            "Starting preprocessing pipeline...",
        ));

        let mut rng = match self.config.seed {
            Some(seed) => {
                info!("Random steps seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let mut report = RunReport::default();

        for stage in PipelineStage::processing_order() {
            if stage < self.config.start_stage {
                continue;
            }
            let input = stage_input(&paths, stage);
            info!("Step: {} ({})", stage.display_name(), input.display());
            reporter.report(ProgressUpdate::new(stage, 0.0, format!("{}...", stage.display_name())));

            let context = format!("{} failed on {}", stage.display_name(), input.display());
            match stage {
                PipelineStage::Projecting => {
                    let written = FieldProjector::new(batch_size)
                        .run(input, &paths.projected, reporter)
                        .context(context)?;
                    report.projected = Some(written);
                }
                PipelineStage::Normalizing => {
                    let summary = self
                        .normalizer()
                        .run(input, &paths.normalized, reporter)
                        .context(context)?;
                    report.normalized = Some(summary);
                }
                PipelineStage::Shuffling => {
                    let written = Shuffler::new(batch_size)
                        .run(input, &paths.shuffled, &paths.shuffle_scratch(), &mut rng, reporter)
                        .context(context)?;
                    report.shuffled = Some(written);
                }
                PipelineStage::CanonicalizingNulls => {
                    let summary = NullCanonicalizer::new(batch_size)
                        .run(input, &paths.canonical, reporter)
                        .context(context)?;
                    report.nulls = Some(summary);
                }
                PipelineStage::Partitioning => {
                    let outputs = PartitionOutputs {
                        train: paths.train.clone(),
                        test: paths.test.clone(),
                        valid: paths.valid.clone(),
                    };
                    let partition = Partitioner::new(batch_size, self.config.split_ratios)
                        .run(input, &outputs, reporter)
                        .context(context)?;
                    report.partition = Some(partition);
                }
                PipelineStage::Sampling => {
                    let sampled = Sampler::new(batch_size, self.config.sample_size)
                        .run(input, &paths.sample, &mut rng, reporter)
                        .context(context)?;
                    report.sampled = Some(sampled);
                }
                other => {
                    return Err(PipelineError::Config(
                        crate::config::ConfigValidationError::InvalidStartStage(other),
                    ));
                }
            }
        }

        report.duration = start_time.elapsed();
        info!("Pipeline completed in {:.2?}", report.duration);
        Ok(report)
    }

    fn normalizer(&self) -> Normalizer {
        let normalizer = Normalizer::new(self.config.batch_size, self.config.rare_country_threshold);
        match &self.translator {
            Some(translator) => {
                info!("Translating text fields with {}", translator.name());
                normalizer.with_translator(Arc::clone(translator))
            }
            None => normalizer,
        }
    }
}

/// File a stage reads from.
fn stage_input(paths: &DatasetPaths, stage: PipelineStage) -> &Path {
    match stage {
        PipelineStage::Projecting => &paths.raw,
        PipelineStage::Normalizing => &paths.projected,
        PipelineStage::Shuffling => &paths.normalized,
        PipelineStage::CanonicalizingNulls => &paths.shuffled,
        PipelineStage::Partitioning | PipelineStage::Sampling => &paths.canonical,
        PipelineStage::Initializing | PipelineStage::Complete | PipelineStage::Failed => &paths.raw,
    }
}

/// Builder for creating a [`Pipeline`] instance.
///
/// Use [`Pipeline::builder()`] to get started.
#[derive(Default)]
pub struct PipelineBuilder {
    config: Option<PipelineConfig>,
    translator: Option<Arc<dyn TextTranslator>>,
    progress_reporter: Option<Arc<dyn ProgressReporter>>,
}

static_assertions::assert_impl_all!(PipelineBuilder: Send);

impl PipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a translator applied to the free-text fields during normalization.
    ///
    /// Without one the text fields are only cleaned by their own rules.
    pub fn translator(mut self, translator: Arc<dyn TextTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Set a progress reporter for receiving updates during processing.
    pub fn progress_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.progress_reporter = Some(reporter);
        self
    }

    /// Set a progress callback closure.
    ///
    /// This is a convenience method for simple progress handling.
    /// For more complex scenarios, use [`progress_reporter`](Self::progress_reporter).
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ProgressUpdate) + Send + Sync + 'static,
    {
        self.progress_reporter = Some(Arc::new(ClosureProgressReporter::new(callback)));
        self
    }

    /// Build the pipeline, validating the configuration.
    pub fn build(self) -> Result<Pipeline> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(Pipeline {
            config,
            translator: self.translator,
            progress_reporter: self.progress_reporter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = PipelineConfig {
            batch_size: 0,
            ..PipelineConfig::default()
        };
        let Err(err) = Pipeline::builder().config(config).build() else {
            panic!("zero batch size should be rejected");
        };
        assert!(err.is_config_error());
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_stage_inputs_chain() {
        let paths = DatasetPaths::new(Path::new("/srv"), "x");
        assert_eq!(stage_input(&paths, PipelineStage::Normalizing), paths.projected.as_path());
        assert_eq!(stage_input(&paths, PipelineStage::Partitioning), paths.canonical.as_path());
        assert_eq!(stage_input(&paths, PipelineStage::Sampling), paths.canonical.as_path());
    }

    #[test]
    fn test_missing_raw_input_names_stage_and_file() {
        let dir = TempDir::new().unwrap();
        let stages = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&stages);
        let config = PipelineConfig::builder()
            .dataset_id("t")
            .root_dir(dir.path())
            .build()
            .unwrap();

        let err = Pipeline::builder()
            .config(config)
            .on_progress(move |u| seen.lock().unwrap().push(u.stage))
            .build()
            .unwrap()
            .run()
            .unwrap_err();

        assert_eq!(err.error_code(), "MISSING_INPUT");
        let message = err.to_string();
        assert!(message.contains("Projecting Fields"));
        assert!(message.contains("t_openfoodfacts_00.jsonl"));
        assert_eq!(stages.lock().unwrap().last(), Some(&PipelineStage::Failed));
    }
}
