//! Null canonicalization.
//!
//! Rewrites the textual `None`/`none` markers to JSON null so the partitioner
//! sees a single representation of a missing value.

use crate::error::Result;
use crate::jsonl::{self, LineBatches};
use crate::pipeline::{PipelineStage, ProgressReporter, ProgressUpdate};
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Markers that mean "missing", matched case-sensitively against whole strings.
const NULL_MARKERS: [&str; 2] = ["None", "none"];

/// Replace null markers in `value` with JSON null, returning how many were replaced.
///
/// Strings inside arrays and objects are rewritten too.
pub fn canonicalize_nulls(value: &mut Value) -> usize {
    match value {
        Value::String(s) if NULL_MARKERS.contains(&s.as_str()) => {
            *value = Value::Null;
            1
        }
        Value::Array(items) => items.iter_mut().map(canonicalize_nulls).sum(),
        Value::Object(map) => map.values_mut().map(canonicalize_nulls).sum(),
        _ => 0,
    }
}

/// Summary of a canonicalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSummary {
    pub lines: usize,
    pub replacements: usize,
    /// Lines that did not decode and were copied unchanged.
    pub passed_through: usize,
}

/// Stage wrapper around [`canonicalize_nulls`].
pub struct NullCanonicalizer {
    batch_size: usize,
}

impl NullCanonicalizer {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Canonicalize every line of `input` into `output`.
    ///
    /// A line that is not valid JSON is copied as-is and logged; rejecting it
    /// is left to the partitioner.
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<NullSummary> {
        let total_batches = jsonl::batch_count(
            jsonl::count_lines(PipelineStage::CanonicalizingNulls, input)?,
            self.batch_size,
        );
        let reader = jsonl::open_input(PipelineStage::CanonicalizingNulls, input)?;
        let mut writer = jsonl::create_output(output)?;
        let mut summary = NullSummary::default();

        for (index, batch) in LineBatches::new(reader, self.batch_size).enumerate() {
            for line in batch? {
                summary.lines += 1;
                match serde_json::from_str::<Value>(&line.text) {
                    Ok(mut value) => {
                        summary.replacements += canonicalize_nulls(&mut value);
                        jsonl::write_record(&mut writer, &value)?;
                    }
                    Err(e) => {
                        warn!("{}:{} is not valid JSON, copied unchanged: {}", input.display(), line.number, e);
                        summary.passed_through += 1;
                        jsonl::write_line(&mut writer, &line.text)?;
                    }
                }
            }
            reporter.report(ProgressUpdate::with_items(
                PipelineStage::CanonicalizingNulls,
                format!("Batch {}/{}", index + 1, total_batches),
                index + 1,
                total_batches,
                format!("{} markers replaced", summary.replacements),
            ));
        }

        writer.flush()?;
        info!(
            "Replaced {} null markers in {} lines ({} lines copied unchanged)",
            summary.replacements, summary.lines, summary.passed_through
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SilentReporter;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_markers_become_null() {
        let mut value = json!({"groups": "None", "countries": "none", "name": "jam"});
        assert_eq!(canonicalize_nulls(&mut value), 2);
        assert_eq!(value, json!({"groups": null, "countries": null, "name": "jam"}));
    }

    #[test]
    fn test_markers_are_case_sensitive_and_whole_value() {
        let mut value = json!({"a": "NONE", "b": "none of it", "c": "Nonesuch"});
        assert_eq!(canonicalize_nulls(&mut value), 0);
    }

    #[test]
    fn test_nested_markers() {
        let mut value = json!({"tags": ["en:milk", "None"], "nested": {"x": "none"}});
        assert_eq!(canonicalize_nulls(&mut value), 2);
        assert_eq!(value, json!({"tags": ["en:milk", null], "nested": {"x": null}}));
    }

    #[test]
    fn test_run_preserves_order_and_passes_bad_lines() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("03.jsonl");
        let output = dir.path().join("04.jsonl");
        fs::write(
            &input,
            "{\"name\":\"a\",\"ecoscore_note\":\"None\",\"code\":1}\nbroken\n{\"name\":\"b\"}\n",
        )
        .unwrap();

        let summary = NullCanonicalizer::new(2).run(&input, &output, &SilentReporter).unwrap();
        assert_eq!(summary, NullSummary { lines: 3, replacements: 1, passed_through: 1 });
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\"name\":\"a\",\"ecoscore_note\":null,\"code\":1}\nbroken\n{\"name\":\"b\"}\n"
        );
    }
}
