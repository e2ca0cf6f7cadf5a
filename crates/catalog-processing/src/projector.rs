//! Field projection: keep only the allow-listed fields of each raw record.

use crate::error::Result;
use crate::jsonl::{self, LineBatches};
use crate::pipeline::{PipelineStage, ProgressReporter, ProgressUpdate};
use crate::types::ProjectedProduct;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Reduces raw catalog records to [`ProjectedProduct`].
///
/// Order is preserved. Every line must be a JSON object; a malformed line
/// aborts the stage since the raw dump format is a precondition.
pub struct FieldProjector {
    batch_size: usize,
}

impl FieldProjector {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Project `input` into `output`, returning the number of records written.
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<usize> {
        let total_batches =
            jsonl::batch_count(jsonl::count_lines(PipelineStage::Projecting, input)?, self.batch_size);
        let reader = jsonl::open_input(PipelineStage::Projecting, input)?;
        let mut writer = jsonl::create_output(output)?;
        let mut written = 0;

        for (index, batch) in LineBatches::new(reader, self.batch_size).enumerate() {
            let batch = batch?;
            let mut buffer = Vec::with_capacity(batch.len());
            for line in &batch {
                let record: ProjectedProduct = jsonl::decode_line(input, line)?;
                buffer.push(serde_json::to_string(&record)?);
            }
            for encoded in &buffer {
                jsonl::write_line(&mut writer, encoded)?;
            }
            written += buffer.len();
            debug!("Projected batch {} ({} records)", index + 1, buffer.len());
            reporter.report(ProgressUpdate::with_items(
                PipelineStage::Projecting,
                format!("Batch {}/{}", index + 1, total_batches),
                index + 1,
                total_batches,
                format!("{written} records projected"),
            ));
        }

        writer.flush()?;
        info!("jsonl filtered generated from {}: {} records", input.display(), written);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SilentReporter;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_projection_keeps_allow_list_in_order() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("raw.jsonl");
        let output = dir.path().join("projected.jsonl");
        fs::write(
            &input,
            "{\"code\":\"1\",\"product_name\":\"Jam\",\"brands\":\"x\"}\n{\"countries\":\"France\"}\n",
        )
        .unwrap();

        let written = FieldProjector::new(1).run(&input, &output, &SilentReporter).unwrap();
        assert_eq!(written, 2);

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "{\"pnns_groups_1\":null,\"ingredients_tags\":null,\"packaging\":null,\
             \"product_name\":\"Jam\",\"ecoscore_tags\":null,\"categories_tags\":null,\
             \"ecoscore_score\":null,\"labels_tags\":null,\"code\":\"1\",\"countries\":null}"
        );
        assert!(lines[1].ends_with("\"countries\":\"France\"}"));
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("raw.jsonl");
        fs::write(&input, "{\"code\":\"1\"}\nnot json\n").unwrap();

        let err = FieldProjector::new(10)
            .run(&input, &dir.path().join("out.jsonl"), &SilentReporter)
            .unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_RECORD");
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("raw.jsonl");
        fs::write(&input, "{\"code\":12,\"labels_tags\":[\"en:organic\"]}\n").unwrap();
        let first = dir.path().join("a.jsonl");
        let second = dir.path().join("b.jsonl");

        let projector = FieldProjector::new(3);
        projector.run(&input, &first, &SilentReporter).unwrap();
        projector.run(&input, &second, &SilentReporter).unwrap();
        assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
    }
}
