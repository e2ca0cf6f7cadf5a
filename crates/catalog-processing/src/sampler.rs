//! Preview sample for manual spot-checks.

use crate::error::Result;
use crate::jsonl::{self, LineBatches};
use crate::pipeline::{PipelineStage, ProgressReporter, ProgressUpdate};
use rand::Rng;
use rand::seq::index;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Copies a uniform random subset of lines, in file order, to a preview file.
pub struct Sampler {
    batch_size: usize,
    sample_size: usize,
}

impl Sampler {
    pub fn new(batch_size: usize, sample_size: usize) -> Self {
        Self { batch_size, sample_size }
    }

    /// Write `min(sample_size, lines)` distinct lines of `input` to `output`.
    pub fn run<R: Rng + ?Sized>(
        &self,
        input: &Path,
        output: &Path,
        rng: &mut R,
        reporter: &dyn ProgressReporter,
    ) -> Result<usize> {
        let total = jsonl::count_lines(PipelineStage::Sampling, input)?;
        let amount = self.sample_size.min(total);
        let mut picked = index::sample(rng, total, amount).into_vec();
        picked.sort_unstable();

        let reader = jsonl::open_input(PipelineStage::Sampling, input)?;
        let mut writer = jsonl::create_output(output)?;
        let mut wanted = picked.iter().copied().peekable();
        let mut position = 0;

        'lines: for batch in LineBatches::new(reader, self.batch_size) {
            for line in batch? {
                let Some(&next) = wanted.peek() else {
                    break 'lines;
                };
                if position == next {
                    jsonl::write_line(&mut writer, &line.text)?;
                    wanted.next();
                }
                position += 1;
            }
        }

        writer.flush()?;
        reporter.report(ProgressUpdate::new(
            PipelineStage::Sampling,
            1.0,
            format!("{amount} lines sampled"),
        ));
        info!("Sampled {} of {} lines into {}", amount, total, output.display());
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SilentReporter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    fn write_numbered(path: &Path, count: usize) {
        let text: String = (0..count).map(|i| format!("{{\"id\":{i}}}\n")).collect();
        fs::write(path, text).unwrap();
    }

    fn ids(path: &Path) -> Vec<u64> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["id"].as_u64().unwrap())
            .collect()
    }

    #[test]
    fn test_sample_is_distinct_and_ordered() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("04.jsonl");
        let output = dir.path().join("sample.jsonl");
        write_numbered(&input, 200);

        let written = Sampler::new(16, 60)
            .run(&input, &output, &mut StdRng::seed_from_u64(3), &SilentReporter)
            .unwrap();
        assert_eq!(written, 60);

        let sampled = ids(&output);
        assert_eq!(sampled.len(), 60);
        assert!(sampled.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_clamps_to_file_size() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("04.jsonl");
        let output = dir.path().join("sample.jsonl");
        write_numbered(&input, 5);

        let written = Sampler::new(2, 60)
            .run(&input, &output, &mut StdRng::seed_from_u64(3), &SilentReporter)
            .unwrap();
        assert_eq!(written, 5);
        assert_eq!(ids(&output), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_input_gives_empty_sample() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("04.jsonl");
        let output = dir.path().join("sample.jsonl");
        fs::write(&input, "").unwrap();

        let written = Sampler::new(2, 60)
            .run(&input, &output, &mut StdRng::seed_from_u64(3), &SilentReporter)
            .unwrap();
        assert_eq!(written, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }
}
