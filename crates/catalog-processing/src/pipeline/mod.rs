//! Pipeline module.
//!
//! This module provides the stage orchestrator and progress reporting.

mod builder;
pub mod progress;

pub use builder::{Pipeline, PipelineBuilder, RunReport};
pub use progress::{
    ClosureProgressReporter, PipelineStage, ProgressReporter, ProgressUpdate, SilentReporter,
};
