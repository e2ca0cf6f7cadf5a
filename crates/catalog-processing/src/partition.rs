//! Quota-based train/test/valid partitioning.
//!
//! Partitioning is two passes over the same file. The counting pass classifies
//! every line by the presence of `ecoscore_note` and fixes the quotas; the
//! assignment pass routes each record to the first split of its category that
//! still has room, in [`Split::PRIORITY`] order. Records arriving after all
//! three quotas of their category are full are written nowhere.

use crate::config::{SplitPercentages, SplitRatios};
use crate::error::Result;
use crate::jsonl::{self, LineBatches, NumberedLine};
use crate::pipeline::{PipelineStage, ProgressReporter, ProgressUpdate};
use crate::types::{NOT_APPLICABLE_SCORE, PartitionReport, ScoreClass, Split, SplitCounts};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Output files of the partitioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOutputs {
    pub train: PathBuf,
    pub test: PathBuf,
    pub valid: PathBuf,
}

impl PartitionOutputs {
    fn path(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.train,
            Split::Test => &self.test,
            Split::Valid => &self.valid,
        }
    }
}

/// Per-category quotas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionQuotas {
    pub ok: SplitCounts,
    pub ko: SplitCounts,
}

impl PartitionQuotas {
    /// Floor of each percentage of the category count.
    pub fn from_counts(ok_count: usize, ko_count: usize, ratios: &SplitRatios) -> Self {
        Self {
            ok: quota(ok_count, &ratios.ok),
            ko: quota(ko_count, &ratios.ko),
        }
    }

    pub fn get(&self, class: ScoreClass) -> &SplitCounts {
        match class {
            ScoreClass::Ok => &self.ok,
            ScoreClass::Ko => &self.ko,
        }
    }
}

fn quota(count: usize, pct: &SplitPercentages) -> SplitCounts {
    let share = |p: u32| count * p as usize / 100;
    SplitCounts {
        train: share(pct.train),
        test: share(pct.test),
        valid: share(pct.valid),
    }
}

/// Tracks how much of each quota has been used.
#[derive(Debug, Clone)]
pub struct QuotaTracker {
    quotas: PartitionQuotas,
    ok_written: SplitCounts,
    ko_written: SplitCounts,
}

impl QuotaTracker {
    pub fn new(quotas: PartitionQuotas) -> Self {
        Self {
            quotas,
            ok_written: SplitCounts::default(),
            ko_written: SplitCounts::default(),
        }
    }

    /// Claim a slot for a record of `class`, or `None` when its quotas are full.
    pub fn assign(&mut self, class: ScoreClass) -> Option<Split> {
        let quota = *self.quotas.get(class);
        let written = match class {
            ScoreClass::Ok => &mut self.ok_written,
            ScoreClass::Ko => &mut self.ko_written,
        };
        let split = Split::PRIORITY
            .into_iter()
            .find(|&split| written.get(split) < quota.get(split))?;
        *written.get_mut(split) += 1;
        Some(split)
    }

    pub fn written(&self, class: ScoreClass) -> SplitCounts {
        match class {
            ScoreClass::Ok => self.ok_written,
            ScoreClass::Ko => self.ko_written,
        }
    }
}

/// Decode a line into its score category and not-applicable flag, or the
/// reason it must be skipped.
fn classify(line: &NumberedLine) -> std::result::Result<(ScoreClass, bool), String> {
    match serde_json::from_str::<Value>(&line.text) {
        Ok(Value::Object(record)) => {
            let class = ScoreClass::of(&record);
            let not_applicable = record
                .get("ecoscore_note")
                .and_then(Value::as_f64)
                .is_some_and(|score| score >= NOT_APPLICABLE_SCORE);
            Ok((class, not_applicable))
        }
        Ok(_) => Err("not a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Splits a file into train/test/valid outputs by per-category quota.
pub struct Partitioner {
    batch_size: usize,
    ratios: SplitRatios,
}

impl Partitioner {
    pub fn new(batch_size: usize, ratios: SplitRatios) -> Self {
        Self { batch_size, ratios }
    }

    /// Counting pass: category totals over every decodable line.
    pub fn count(&self, input: &Path) -> Result<PartitionReport> {
        let reader = jsonl::open_input(PipelineStage::Partitioning, input)?;
        let mut report = PartitionReport::default();

        for batch in LineBatches::new(reader, self.batch_size) {
            for line in batch? {
                match classify(&line) {
                    Ok((class, not_applicable)) => {
                        report.total_count += 1;
                        match class {
                            ScoreClass::Ok => report.ok_count += 1,
                            ScoreClass::Ko => report.ko_count += 1,
                        }
                        if not_applicable {
                            report.not_applicable_count += 1;
                        }
                    }
                    Err(reason) => {
                        warn!("Skipping {}:{}: {}", input.display(), line.number, reason);
                        report.skipped_lines += 1;
                    }
                }
            }
        }

        if report.total_count != report.ok_count + report.ko_count {
            warn!(
                "Decoded {} records but categorized {} ok and {} ko",
                report.total_count, report.ok_count, report.ko_count
            );
        }
        info!(
            "number of lines with ecoscore_note: {} (not applicable: {}), without: {}, total: {}",
            report.ok_count, report.not_applicable_count, report.ko_count, report.total_count
        );
        Ok(report)
    }

    /// Partition `input` into `outputs`.
    pub fn run(
        &self,
        input: &Path,
        outputs: &PartitionOutputs,
        reporter: &dyn ProgressReporter,
    ) -> Result<PartitionReport> {
        let mut report = self.count(input)?;
        let quotas = PartitionQuotas::from_counts(report.ok_count, report.ko_count, &self.ratios);
        report.ok_quota = quotas.ok;
        report.ko_quota = quotas.ko;
        info!(
            "ok quotas: train {}, test {}, valid {}; ko quotas: train {}, test {}, valid {}",
            quotas.ok.train, quotas.ok.test, quotas.ok.valid, quotas.ko.train, quotas.ko.test, quotas.ko.valid
        );
        reporter.report(ProgressUpdate::new(
            PipelineStage::Partitioning,
            0.5,
            format!("{} ok and {} ko records counted", report.ok_count, report.ko_count),
        ));

        let mut writers = SplitWriters::create(outputs)?;
        let mut tracker = QuotaTracker::new(quotas);
        let total_batches = jsonl::batch_count(report.total_count + report.skipped_lines, self.batch_size);
        let reader = jsonl::open_input(PipelineStage::Partitioning, input)?;

        for (index, batch) in LineBatches::new(reader, self.batch_size).enumerate() {
            for line in batch? {
                let Ok((class, _)) = classify(&line) else {
                    debug!("Line {} skipped again in assignment pass", line.number);
                    continue;
                };
                if let Some(split) = tracker.assign(class) {
                    jsonl::write_line(writers.get_mut(split), &line.text)?;
                }
            }
            reporter.report(ProgressUpdate::new(
                PipelineStage::Partitioning,
                0.5 + 0.5 * (index + 1) as f32 / total_batches.max(1) as f32,
                format!("Batch {}/{} assigned", index + 1, total_batches),
            ));
        }

        writers.flush()?;
        report.ok_written = tracker.written(ScoreClass::Ok);
        report.ko_written = tracker.written(ScoreClass::Ko);

        for split in Split::PRIORITY {
            info!(
                "{}: {} ok + {} ko records written to {}",
                split.name(),
                report.ok_written.get(split),
                report.ko_written.get(split),
                outputs.path(split).display()
            );
        }
        info!("{} records left out of every split", report.unassigned());
        Ok(report)
    }
}

struct SplitWriters {
    train: BufWriter<File>,
    test: BufWriter<File>,
    valid: BufWriter<File>,
}

impl SplitWriters {
    fn create(outputs: &PartitionOutputs) -> Result<Self> {
        Ok(Self {
            train: jsonl::create_output(&outputs.train)?,
            test: jsonl::create_output(&outputs.test)?,
            valid: jsonl::create_output(&outputs.valid)?,
        })
    }

    fn get_mut(&mut self, split: Split) -> &mut BufWriter<File> {
        match split {
            Split::Train => &mut self.train,
            Split::Test => &mut self.test,
            Split::Valid => &mut self.valid,
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.train.flush()?;
        self.test.flush()?;
        self.valid.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SilentReporter;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn outputs(dir: &Path) -> PartitionOutputs {
        PartitionOutputs {
            train: dir.join("train.jsonl"),
            test: dir.join("test.jsonl"),
            valid: dir.join("valid.jsonl"),
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path).unwrap().lines().map(String::from).collect()
    }

    #[test]
    fn test_default_quotas_for_thousand_ok() {
        let quotas = PartitionQuotas::from_counts(1000, 0, &SplitRatios::default());
        assert_eq!(quotas.ok, SplitCounts { train: 800, test: 150, valid: 50 });
        assert_eq!(quotas.ko, SplitCounts::default());
    }

    #[test]
    fn test_quotas_are_floored() {
        let quotas = PartitionQuotas::from_counts(19, 7, &SplitRatios::default());
        assert_eq!(quotas.ok, SplitCounts { train: 15, test: 2, valid: 0 });
        assert_eq!(quotas.ko, SplitCounts { train: 5, test: 1, valid: 0 });
    }

    #[test]
    fn test_tracker_fills_valid_then_test_then_train() {
        let quotas = PartitionQuotas {
            ok: SplitCounts { train: 2, test: 1, valid: 1 },
            ko: SplitCounts::default(),
        };
        let mut tracker = QuotaTracker::new(quotas);
        let order: Vec<Option<Split>> = (0..5).map(|_| tracker.assign(ScoreClass::Ok)).collect();
        assert_eq!(
            order,
            vec![Some(Split::Valid), Some(Split::Test), Some(Split::Train), Some(Split::Train), None]
        );
        assert_eq!(tracker.assign(ScoreClass::Ko), None);
    }

    #[test]
    fn test_ten_ok_records_with_custom_quota() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("04.jsonl");
        let text: String = (0..10).map(|i| format!("{{\"code\":{i},\"ecoscore_note\":{}}}\n", i * 10)).collect();
        fs::write(&input, text).unwrap();

        let ratios = SplitRatios {
            ok: SplitPercentages::new(80, 10, 10),
            ko: SplitPercentages::new(80, 20, 0),
        };
        let outputs = outputs(dir.path());
        let report = Partitioner::new(3, ratios).run(&input, &outputs, &SilentReporter).unwrap();

        assert_eq!(report.ok_quota, SplitCounts { train: 8, test: 1, valid: 1 });
        let valid = read_lines(&outputs.valid);
        let test = read_lines(&outputs.test);
        let train = read_lines(&outputs.train);
        assert_eq!(valid, vec!["{\"code\":0,\"ecoscore_note\":0}".to_string()]);
        assert_eq!(test, vec!["{\"code\":1,\"ecoscore_note\":10}".to_string()]);
        assert_eq!(train.len(), 8);

        let unique: HashSet<&String> = valid.iter().chain(&test).chain(&train).collect();
        assert_eq!(unique.len(), 10);
        assert_eq!(report.unassigned(), 0);
    }

    #[test]
    fn test_categories_are_independent() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("04.jsonl");
        let mut text = String::new();
        for i in 0..20 {
            text.push_str(&format!("{{\"code\":{i},\"ecoscore_note\":50}}\n"));
            text.push_str(&format!("{{\"code\":{},\"ecoscore_note\":null}}\n", 100 + i));
        }
        fs::write(&input, text).unwrap();

        let outputs = outputs(dir.path());
        let report = Partitioner::new(7, SplitRatios::default())
            .run(&input, &outputs, &SilentReporter)
            .unwrap();

        assert_eq!(report.ok_written, SplitCounts { train: 16, test: 3, valid: 1 });
        assert_eq!(report.ko_written, SplitCounts { train: 16, test: 4, valid: 0 });
        assert_eq!(report.unassigned(), 0);
        assert_eq!(read_lines(&outputs.valid).len(), 1);
        assert_eq!(read_lines(&outputs.test).len(), 7);
        assert_eq!(read_lines(&outputs.train).len(), 32);
    }

    #[test]
    fn test_remainder_is_dropped() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("04.jsonl");
        let text: String = (0..9).map(|i| format!("{{\"code\":{i},\"ecoscore_note\":1}}\n")).collect();
        fs::write(&input, text).unwrap();

        let report = Partitioner::new(10, SplitRatios::default())
            .run(&input, &outputs(dir.path()), &SilentReporter)
            .unwrap();
        // floor(7.2) + floor(1.35) + floor(0.45) = 8
        assert_eq!(report.ok_written.total(), 8);
        assert_eq!(report.unassigned(), 1);
    }

    #[test]
    fn test_undecodable_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("04.jsonl");
        fs::write(&input, "{\"ecoscore_note\":999}\n{oops\n[1,2]\n{\"ecoscore_note\":null}\n").unwrap();

        let partitioner = Partitioner::new(10, SplitRatios::default());
        let report = partitioner.count(&input).unwrap();
        assert_eq!(report.ok_count, 1);
        assert_eq!(report.not_applicable_count, 1);
        assert_eq!(report.ko_count, 1);
        assert_eq!(report.skipped_lines, 2);
        assert_eq!(report.total_count, 2);
    }

    #[test]
    fn test_total_counts_every_decoded_record() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("04.jsonl");
        let lines = [
            r#"{"ecoscore_note":12.5}"#,
            r#"{"ecoscore_note":"None"}"#,
            r#"{}"#,
            "",
            r#"{"ecoscore_note":0}"#,
            r#""text""#,
        ];
        fs::write(&input, lines.join("\n") + "\n").unwrap();

        let report = Partitioner::new(2, SplitRatios::default()).count(&input).unwrap();
        assert_eq!(report.total_count, 4);
        assert_eq!(report.ok_count, 2);
        assert_eq!(report.ko_count, 2);
        assert_eq!(report.total_count, report.ok_count + report.ko_count);
        assert_eq!(report.skipped_lines, 1);
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = Partitioner::new(10, SplitRatios::default())
            .run(&dir.path().join("absent.jsonl"), &outputs(dir.path()), &SilentReporter)
            .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }
}
