//! Two-phase line shuffle.
//!
//! Phase one permutes each batch independently into a scratch file with
//! bounded memory. Phase two loads the whole scratch file, permutes it again
//! and writes the final output, then removes the scratch file.

use crate::error::{Result, ResultExt};
use crate::jsonl::{self, LineBatches};
use crate::pipeline::{PipelineStage, ProgressReporter, ProgressUpdate};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// Shuffles the lines of a file; lines are copied verbatim.
pub struct Shuffler {
    batch_size: usize,
}

impl Shuffler {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Shuffle `input` into `output` through `scratch`, returning the line count.
    pub fn run<R: Rng + ?Sized>(
        &self,
        input: &Path,
        output: &Path,
        scratch: &Path,
        rng: &mut R,
        reporter: &dyn ProgressReporter,
    ) -> Result<usize> {
        let total_batches =
            jsonl::batch_count(jsonl::count_lines(PipelineStage::Shuffling, input)?, self.batch_size);
        info!("start shuffling, total batches estimated: {}", total_batches);

        let batched = self.shuffle_batches(input, scratch, rng, total_batches, reporter)?;
        let written = self.shuffle_all(scratch, output, rng)?;
        fs::remove_file(scratch).context(format!("Removing {}", scratch.display()))?;
        debug!("Removed scratch file {}", scratch.display());

        reporter.report(ProgressUpdate::new(
            PipelineStage::Shuffling,
            1.0,
            format!("{written} lines shuffled"),
        ));
        info!("Shuffled {} lines into {} ({} after batch phase)", written, output.display(), batched);
        Ok(written)
    }

    fn shuffle_batches<R: Rng + ?Sized>(
        &self,
        input: &Path,
        scratch: &Path,
        rng: &mut R,
        total_batches: usize,
        reporter: &dyn ProgressReporter,
    ) -> Result<usize> {
        let reader = jsonl::open_input(PipelineStage::Shuffling, input)?;
        let mut writer = jsonl::create_output(scratch)?;
        let mut written = 0;

        for (index, batch) in LineBatches::new(reader, self.batch_size).enumerate() {
            let mut batch = batch?;
            batch.shuffle(rng);
            for line in &batch {
                jsonl::write_line(&mut writer, &line.text)?;
            }
            written += batch.len();

            // Phase one covers the first half of the stage.
            let update = ProgressUpdate::new(
                PipelineStage::Shuffling,
                0.5 * (index + 1) as f32 / total_batches.max(1) as f32,
                format!("Batch {}/{} shuffled", index + 1, total_batches),
            );
            info!("saved content, progress: {:.1}%", update.stage_percent());
            reporter.report(update);
        }

        writer.flush()?;
        Ok(written)
    }

    fn shuffle_all<R: Rng + ?Sized>(&self, scratch: &Path, output: &Path, rng: &mut R) -> Result<usize> {
        let reader = jsonl::open_input(PipelineStage::Shuffling, scratch)?;
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        lines.shuffle(rng);

        let mut writer = jsonl::create_output(output)?;
        for line in &lines {
            jsonl::write_line(&mut writer, line)?;
        }
        writer.flush()?;
        Ok(lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SilentReporter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn write_numbered(path: &Path, count: usize) {
        let text: String = (0..count).map(|i| format!("{{\"id\":{i}}}\n")).collect();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("02.jsonl");
        let output = dir.path().join("03.jsonl");
        let scratch = dir.path().join("03.jsonl.temp");
        write_numbered(&input, 50);

        let mut rng = StdRng::seed_from_u64(7);
        let written = Shuffler::new(8)
            .run(&input, &output, &scratch, &mut rng, &SilentReporter)
            .unwrap();
        assert_eq!(written, 50);

        let mut before: Vec<String> = fs::read_to_string(&input).unwrap().lines().map(String::from).collect();
        let mut after: Vec<String> = fs::read_to_string(&output).unwrap().lines().map(String::from).collect();
        assert_ne!(before, after);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_scratch_file_is_removed() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("02.jsonl");
        let scratch = dir.path().join("03.jsonl.temp");
        write_numbered(&input, 5);

        Shuffler::new(2)
            .run(&input, &dir.path().join("03.jsonl"), &scratch, &mut StdRng::seed_from_u64(1), &SilentReporter)
            .unwrap();
        assert!(!scratch.exists());
    }

    #[test]
    fn test_same_seed_same_order() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("02.jsonl");
        write_numbered(&input, 30);
        let shuffler = Shuffler::new(4);
        let scratch = dir.path().join("scratch");

        let first = dir.path().join("a.jsonl");
        let second = dir.path().join("b.jsonl");
        shuffler
            .run(&input, &first, &scratch, &mut StdRng::seed_from_u64(42), &SilentReporter)
            .unwrap();
        shuffler
            .run(&input, &second, &scratch, &mut StdRng::seed_from_u64(42), &SilentReporter)
            .unwrap();
        assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = Shuffler::new(2)
            .run(
                &dir.path().join("absent.jsonl"),
                &dir.path().join("out.jsonl"),
                &dir.path().join("scratch"),
                &mut StdRng::seed_from_u64(0),
                &SilentReporter,
            )
            .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }
}
