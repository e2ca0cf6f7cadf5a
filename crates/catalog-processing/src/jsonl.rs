//! Line-delimited JSON helpers shared by every stage.

use crate::error::{PipelineError, Result, ResultExt};
use crate::pipeline::PipelineStage;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

/// Open a stage input, failing loudly when it does not exist.
pub fn open_input(stage: PipelineStage, path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        return Err(PipelineError::MissingInput {
            stage,
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).context(format!("Opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Create (or truncate) a stage output, creating parent directories.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).context(format!("Creating {}", parent.display()))?;
    }
    let file = File::create(path).context(format!("Creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Count the non-empty lines of a stage input.
pub fn count_lines(stage: PipelineStage, path: &Path) -> Result<usize> {
    let reader = open_input(stage, path)?;
    let mut count = 0;
    for line in reader.lines() {
        if !line?.trim().is_empty() {
            count += 1;
        }
    }
    Ok(count)
}

/// Number of batches needed to cover `lines` records.
pub fn batch_count(lines: usize, batch_size: usize) -> usize {
    lines.div_ceil(batch_size.max(1))
}

/// Write one serializable record as a JSON line.
pub fn write_record<W: Write, T: Serialize>(writer: &mut W, record: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, record)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write an already-encoded JSON line, adding the terminator.
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// A line of input together with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub number: usize,
    pub text: String,
}

/// Iterator over batches of at most `batch_size` non-empty lines.
///
/// Blank lines are skipped but still advance the line counter so that error
/// messages point at the real position in the file.
pub struct LineBatches<R: BufRead> {
    lines: Lines<R>,
    batch_size: usize,
    position: usize,
}

impl<R: BufRead> LineBatches<R> {
    pub fn new(reader: R, batch_size: usize) -> Self {
        Self {
            lines: reader.lines(),
            batch_size: batch_size.max(1),
            position: 0,
        }
    }
}

impl<R: BufRead> Iterator for LineBatches<R> {
    type Item = Result<Vec<NumberedLine>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        while batch.len() < self.batch_size {
            match self.lines.next() {
                Some(Ok(text)) => {
                    self.position += 1;
                    if text.trim().is_empty() {
                        continue;
                    }
                    batch.push(NumberedLine {
                        number: self.position,
                        text,
                    });
                }
                Some(Err(e)) => return Some(Err(e.into())),
                None => break,
            }
        }
        if batch.is_empty() { None } else { Some(Ok(batch)) }
    }
}

/// Decode a line that must be well-formed, naming its position on failure.
pub fn decode_line<T: serde::de::DeserializeOwned>(path: &Path, line: &NumberedLine) -> Result<T> {
    serde_json::from_str(&line.text).map_err(|source| PipelineError::MalformedRecord {
        path: path.to_path_buf(),
        line: line.number,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_batches_respect_size_and_skip_blanks() {
        let input = Cursor::new("a\n\nb\nc\nd\n");
        let batches: Vec<Vec<NumberedLine>> = LineBatches::new(input, 2)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0][0].text, "a");
        assert_eq!(batches[0][1].text, "b");
        assert_eq!(batches[0][1].number, 3);
        assert_eq!(batches[1].iter().map(|l| l.text.as_str()).collect::<Vec<_>>(), ["c", "d"]);
    }

    #[test]
    fn test_empty_input_yields_no_batches() {
        assert_eq!(LineBatches::new(Cursor::new(""), 10).count(), 0);
    }

    #[test]
    fn test_open_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = open_input(PipelineStage::Normalizing, &dir.path().join("nope.jsonl")).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_create_output_makes_parents_and_counts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data/out.jsonl");
        {
            let mut writer = create_output(&path).unwrap();
            write_line(&mut writer, "{\"a\":1}").unwrap();
            write_record(&mut writer, &serde_json::json!({"b": 2})).unwrap();
        }
        assert_eq!(count_lines(PipelineStage::Sampling, &path).unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn test_batch_count_rounds_up() {
        assert_eq!(batch_count(0, 10), 0);
        assert_eq!(batch_count(10, 10), 1);
        assert_eq!(batch_count(11, 10), 2);
    }

    #[test]
    fn test_decode_line_reports_position() {
        let line = NumberedLine { number: 4, text: "[1,".to_string() };
        let err = decode_line::<serde_json::Value>(Path::new("x.jsonl"), &line).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedRecord { line: 4, .. }));
    }
}
