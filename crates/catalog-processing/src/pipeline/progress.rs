//! Progress reporting for the preprocessing pipeline.
//!
//! Every stage receives a `&dyn ProgressReporter` and emits
//! [`ProgressUpdate`]s through it: batch progress, expected quotas and final
//! counts. The reporter is scoped to one run and owned by the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_processing::{Pipeline, PipelineConfig};
//!
//! Pipeline::builder()
//!     .config(config)
//!     .on_progress(|update| {
//!         println!("[{:.0}%] {}", update.progress * 100.0, update.message);
//!     })
//!     .build()?
//!     .run()?;
//! ```

use serde::{Deserialize, Serialize};

/// Stages of the preprocessing pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Pipeline is resolving paths and reporting configuration
    Initializing,
    /// Keeping only the allow-listed fields of each raw record
    Projecting,
    /// Applying the per-field cleaning rules and row filters
    Normalizing,
    /// Batch-local then full-file shuffle
    Shuffling,
    /// Rewriting textual null markers to JSON null
    CanonicalizingNulls,
    /// Routing records into train/test/valid by quota
    Partitioning,
    /// Writing the preview sample
    Sampling,
    /// Pipeline completed successfully
    Complete,
    /// Pipeline failed with an error
    Failed,
}

impl PipelineStage {
    /// Returns a human-readable name for the stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Initializing => "Initializing",
            Self::Projecting => "Projecting Fields",
            Self::Normalizing => "Normalizing Fields",
            Self::Shuffling => "Shuffling",
            Self::CanonicalizingNulls => "Canonicalizing Nulls",
            Self::Partitioning => "Partitioning",
            Self::Sampling => "Sampling",
            Self::Complete => "Complete",
            Self::Failed => "Failed",
        }
    }

    /// Returns the typical weight of this stage in the overall pipeline (0.0 - 1.0).
    pub fn weight(&self) -> f32 {
        match self {
            Self::Initializing => 0.01,
            Self::Projecting => 0.10,
            Self::Normalizing => 0.45,
            Self::Shuffling => 0.15,
            Self::CanonicalizingNulls => 0.09,
            Self::Partitioning => 0.15,
            Self::Sampling => 0.05,
            Self::Complete => 0.0,
            Self::Failed => 0.0,
        }
    }

    /// Returns the cumulative progress at the start of this stage.
    pub fn base_progress(&self) -> f32 {
        match self {
            Self::Initializing => 0.0,
            Self::Projecting => 0.01,
            Self::Normalizing => 0.11,
            Self::Shuffling => 0.56,
            Self::CanonicalizingNulls => 0.71,
            Self::Partitioning => 0.80,
            Self::Sampling => 0.95,
            Self::Complete => 1.0,
            Self::Failed => 0.0,
        }
    }

    /// The data-processing stages, in the order a full run executes them.
    pub fn processing_order() -> [PipelineStage; 6] {
        [
            Self::Projecting,
            Self::Normalizing,
            Self::Shuffling,
            Self::CanonicalizingNulls,
            Self::Partitioning,
            Self::Sampling,
        ]
    }
}

/// A progress update emitted by a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// Current pipeline stage
    pub stage: PipelineStage,

    /// Optional sub-stage description (e.g., "Batch 3/10", "ok quotas")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_stage: Option<String>,

    /// Overall progress (0.0 - 1.0)
    pub progress: f32,

    /// Progress within current stage (0.0 - 1.0)
    pub stage_progress: f32,

    /// Human-readable message describing current activity
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_processed: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_total: Option<usize>,
}

impl ProgressUpdate {
    /// Creates a new progress update for a stage without sub-stage info.
    pub fn new(stage: PipelineStage, stage_progress: f32, message: impl Into<String>) -> Self {
        let progress = stage.base_progress() + (stage.weight() * stage_progress);
        Self {
            stage,
            sub_stage: None,
            progress: progress.clamp(0.0, 1.0),
            stage_progress: stage_progress.clamp(0.0, 1.0),
            message: message.into(),
            items_processed: None,
            items_total: None,
        }
    }

    /// Creates a new progress update with item counts.
    pub fn with_items(
        stage: PipelineStage,
        sub_stage: impl Into<String>,
        current: usize,
        total: usize,
        message: impl Into<String>,
    ) -> Self {
        let stage_progress = if total > 0 {
            current as f32 / total as f32
        } else {
            0.0
        };
        let mut update = Self::new(stage, stage_progress, message);
        update.sub_stage = Some(sub_stage.into());
        update.items_processed = Some(current);
        update.items_total = Some(total);
        update
    }

    /// Creates a completion progress update.
    pub fn complete(message: impl Into<String>) -> Self {
        Self::new(PipelineStage::Complete, 1.0, message)
    }

    /// Creates a failed progress update.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(PipelineStage::Failed, 0.0, message)
    }

    /// Stage progress as a percentage, for log lines.
    pub fn stage_percent(&self) -> f32 {
        self.stage_progress * 100.0
    }
}

/// Trait for receiving progress updates from the stages.
pub trait ProgressReporter: Send + Sync {
    /// Called when a stage makes progress or produces summary counts.
    fn report(&self, update: ProgressUpdate);
}

/// Wrapper that implements [`ProgressReporter`] using a closure.
pub struct ClosureProgressReporter<F>
where
    F: Fn(ProgressUpdate) + Send + Sync,
{
    callback: F,
}

impl<F> ClosureProgressReporter<F>
where
    F: Fn(ProgressUpdate) + Send + Sync,
{
    /// Creates a new closure-based progress reporter.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ProgressReporter for ClosureProgressReporter<F>
where
    F: Fn(ProgressUpdate) + Send + Sync,
{
    fn report(&self, update: ProgressUpdate) {
        (self.callback)(update);
    }
}

/// Reporter that discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&self, _update: ProgressUpdate) {}
}

static_assertions::assert_impl_all!(ProgressUpdate: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_stage_weights_sum_to_one() {
        let total: f32 = [PipelineStage::Initializing]
            .iter()
            .chain(PipelineStage::processing_order().iter())
            .map(|s| s.weight())
            .sum();
        assert!((total - 1.0).abs() < 1e-4, "weights sum to {total}");
    }

    #[test]
    fn test_base_progress_is_cumulative() {
        let order = PipelineStage::processing_order();
        for pair in order.windows(2) {
            let expected = pair[0].base_progress() + pair[0].weight();
            assert!((pair[1].base_progress() - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_with_items_progress() {
        let update =
            ProgressUpdate::with_items(PipelineStage::Normalizing, "Batch 1/4", 1, 4, "saved");
        assert_eq!(update.stage_progress, 0.25);
        assert_eq!(update.items_total, Some(4));
        assert_eq!(update.stage_percent(), 25.0);
        let expected = 0.11 + 0.45 * 0.25;
        assert!((update.progress - expected).abs() < 1e-4);
    }

    #[test]
    fn test_with_items_zero_total() {
        let update = ProgressUpdate::with_items(PipelineStage::Shuffling, "Batch", 0, 0, "empty");
        assert_eq!(update.stage_progress, 0.0);
    }

    #[test]
    fn test_closure_reporter_receives_updates() {
        let seen = Mutex::new(Vec::new());
        let reporter = ClosureProgressReporter::new(|u: ProgressUpdate| {
            seen.lock().unwrap().push(u.stage);
        });
        reporter.report(ProgressUpdate::new(PipelineStage::Sampling, 0.5, "half"));
        reporter.report(ProgressUpdate::complete("done"));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![PipelineStage::Sampling, PipelineStage::Complete]
        );
    }

    #[test]
    fn test_stage_ordering_follows_pipeline() {
        assert!(PipelineStage::Projecting < PipelineStage::Normalizing);
        assert!(PipelineStage::Partitioning < PipelineStage::Sampling);
    }

    #[test]
    fn test_stage_serialization_snake_case() {
        let json = serde_json::to_string(&PipelineStage::CanonicalizingNulls).unwrap();
        assert_eq!(json, "\"canonicalizing_nulls\"");
    }
}
