//! Catalog Preprocessing Pipeline Library
//!
//! Batch cleaning of a food-product catalog dump, turning raw line-delimited
//! JSON records into train/test/valid files for model training.
//!
//! # Overview
//!
//! A run executes six file-to-file stages in order:
//!
//! - **Projection**: keep a fixed allow-list of fields
//! - **Normalization**: rename fields, clean values, canonicalize countries and drop unusable rows
//! - **Shuffling**: batch-local then full-file permutation
//! - **Null canonicalization**: textual `None` markers become JSON null
//! - **Partitioning**: quota-based train/test/valid split, stratified by score presence
//! - **Sampling**: a small random preview of the final file
//!
//! Every stage reads the previous stage's file under `data/` and writes its own;
//! a run can resume from any stage whose input already exists.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use catalog_processing::{Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::builder()
//!     .batch_size(10_000)
//!     .dataset_id("2024")
//!     .root_dir("/srv/catalog")
//!     .seed(42)
//!     .build()?;
//!
//! let report = Pipeline::builder()
//!     .config(config)
//!     .on_progress(|update| {
//!         println!("[{:.0}%] {}", update.progress * 100.0, update.message);
//!     })
//!     .build()?
//!     .run()?;
//!
//! if let Some(partition) = report.partition {
//!     println!("{} records left out of every split", partition.unassigned());
//! }
//! ```

pub mod config;
pub mod error;
pub mod jsonl;
pub mod normalizer;
pub mod nulls;
pub mod partition;
pub mod pipeline;
pub mod projector;
pub mod sampler;
pub mod shuffler;
pub mod translate;
pub mod types;

// Re-exports for convenient access
pub use config::{
    ConfigValidationError, DatasetPaths, PipelineConfig, PipelineConfigBuilder, SplitPercentages,
    SplitRatios,
};
pub use error::{PipelineError, Result as PipelineResult, ResultExt};
pub use normalizer::{CountryFrequencies, Normalizer, Outcome};
pub use nulls::{NullCanonicalizer, NullSummary, canonicalize_nulls};
pub use partition::{PartitionOutputs, PartitionQuotas, Partitioner, QuotaTracker};
pub use pipeline::{
    ClosureProgressReporter, Pipeline, PipelineBuilder, PipelineStage, ProgressReporter,
    ProgressUpdate, RunReport, SilentReporter,
};
pub use projector::FieldProjector;
pub use sampler::Sampler;
pub use shuffler::Shuffler;
pub use translate::{LowercaseTranslator, TextTranslator};
pub use types::{
    NormalizeSummary, NormalizedProduct, PartitionReport, ProjectedProduct, ScoreClass, Split,
    SplitCounts,
};
