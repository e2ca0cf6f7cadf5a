//! Integration tests for the catalog preprocessing pipeline.
//!
//! These tests run the full stage chain over a synthetic dump in a scratch
//! root directory.

use catalog_processing::{
    DatasetPaths, LowercaseTranslator, NormalizedProduct, Pipeline, PipelineConfig, PipelineStage,
    ProgressUpdate, SplitCounts,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const DATASET: &str = "test";

fn raw_record(index: usize, score: Value) -> Value {
    let group = if index % 7 == 0 { "unknown" } else { "Beverages" };
    let packaging = if index % 5 == 0 { "None" } else { "en:Plastic, fr:Bouteille" };
    json!({
        "code": format!("{:013}", 3_000_000_000_000u64 + index as u64),
        "product_name": format!("Product {index}"),
        "brands": "Ignored Brand",
        "pnns_groups_1": group,
        "ingredients_tags": ["en:water", "fr:eau", "en:sugar"],
        "packaging": packaging,
        "ecoscore_tags": ["c"],
        "categories_tags": ["en:drinks", "de:getranke"],
        "ecoscore_score": score,
        "labels_tags": ["en:vegan", "fr:bio", "en:no-preservatives"],
        "countries": "en:France, Deutschland",
        "created_t": 1_600_000_000 + index
    })
}

/// 100 records with a score, 50 without, 5 without a name.
fn write_raw_dump(root: &Path) -> DatasetPaths {
    let paths = DatasetPaths::new(root, DATASET);
    fs::create_dir_all(paths.raw.parent().unwrap()).unwrap();

    let mut lines = Vec::new();
    for i in 0..100 {
        lines.push(raw_record(i, json!(i as f64 * 1.5 - 10.0)).to_string());
    }
    for i in 100..150 {
        let score = if i % 2 == 0 { Value::Null } else { json!("unknown") };
        lines.push(raw_record(i, score).to_string());
    }
    for i in 150..155 {
        let mut record = raw_record(i, json!(50));
        record["product_name"] = json!("");
        lines.push(record.to_string());
    }
    fs::write(&paths.raw, lines.join("\n") + "\n").unwrap();
    paths
}

fn config(root: &Path, seed: u64) -> PipelineConfig {
    PipelineConfig::builder()
        .batch_size(16)
        .dataset_id(DATASET)
        .root_dir(root)
        .seed(seed)
        .build()
        .unwrap()
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

// ============================================================================
// Full Pipeline Tests
// ============================================================================

#[test]
fn test_full_pipeline_produces_every_file() {
    let dir = TempDir::new().unwrap();
    let paths = write_raw_dump(dir.path());

    let report = Pipeline::builder()
        .config(config(dir.path(), 11))
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(report.projected, Some(155));
    let normalized = report.normalized.unwrap();
    assert_eq!(normalized.records_out, 150);
    assert_eq!(normalized.dropped_missing_identity, 5);
    assert_eq!(report.shuffled, Some(150));
    assert_eq!(report.sampled, Some(60));

    for path in [
        &paths.projected,
        &paths.normalized,
        &paths.shuffled,
        &paths.canonical,
        &paths.train,
        &paths.test,
        &paths.valid,
        &paths.sample,
    ] {
        assert!(path.exists(), "{} missing", path.display());
    }
    assert!(!paths.shuffle_scratch().exists());
}

#[test]
fn test_partition_quotas_per_category() {
    let dir = TempDir::new().unwrap();
    let paths = write_raw_dump(dir.path());

    let report = Pipeline::builder()
        .config(config(dir.path(), 5))
        .build()
        .unwrap()
        .run()
        .unwrap();
    let partition = report.partition.unwrap();

    assert_eq!(partition.ok_count, 100);
    assert_eq!(partition.ko_count, 50);
    assert_eq!(partition.ok_written, SplitCounts { train: 80, test: 15, valid: 5 });
    assert_eq!(partition.ko_written, SplitCounts { train: 40, test: 10, valid: 0 });
    assert_eq!(partition.unassigned(), 0);

    assert_eq!(read_lines(&paths.train).len(), 120);
    assert_eq!(read_lines(&paths.test).len(), 25);
    assert_eq!(read_lines(&paths.valid).len(), 5);
}

#[test]
fn test_outputs_are_disjoint_and_clean() {
    let dir = TempDir::new().unwrap();
    let paths = write_raw_dump(dir.path());
    Pipeline::builder()
        .config(config(dir.path(), 99))
        .build()
        .unwrap()
        .run()
        .unwrap();

    let mut codes = HashSet::new();
    for path in [&paths.train, &paths.test, &paths.valid] {
        for line in read_lines(path) {
            let product: NormalizedProduct = serde_json::from_str(&line).unwrap();
            assert!(codes.insert(product.code), "code {} in two splits", product.code);
            assert!(!product.name.is_empty());
            assert!(product.labels_note <= 9);
            assert_eq!(product.labels_note, 2);
            assert_eq!(product.ingredients.as_deref(), Some("water, sugar"));
            assert_eq!(product.countries.as_deref(), Some("france, germany"));
            assert_ne!(product.packaging.as_deref(), Some("none"));
            if let Some(score) = product.ecoscore_note {
                assert!((0.0..=100.0).contains(&score));
            }
        }
    }
    assert_eq!(codes.len(), 150);
}

#[test]
fn test_valid_split_only_holds_scored_records() {
    let dir = TempDir::new().unwrap();
    let paths = write_raw_dump(dir.path());
    Pipeline::builder()
        .config(config(dir.path(), 3))
        .build()
        .unwrap()
        .run()
        .unwrap();

    for line in read_lines(&paths.valid) {
        let value: Value = serde_json::from_str(&line).unwrap();
        assert!(value["ecoscore_note"].is_number());
    }
}

#[test]
fn test_same_seed_gives_identical_outputs() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let first_paths = write_raw_dump(first.path());
    let second_paths = write_raw_dump(second.path());

    for dir in [&first, &second] {
        Pipeline::builder()
            .config(config(dir.path(), 2024))
            .build()
            .unwrap()
            .run()
            .unwrap();
    }

    assert_eq!(
        fs::read(&first_paths.normalized).unwrap(),
        fs::read(&second_paths.normalized).unwrap()
    );
    assert_eq!(
        fs::read(&first_paths.train).unwrap(),
        fs::read(&second_paths.train).unwrap()
    );
    assert_eq!(
        fs::read(&first_paths.sample).unwrap(),
        fs::read(&second_paths.sample).unwrap()
    );
}

#[test]
fn test_resume_from_partitioning() {
    let dir = TempDir::new().unwrap();
    let paths = write_raw_dump(dir.path());
    Pipeline::builder()
        .config(config(dir.path(), 8))
        .build()
        .unwrap()
        .run()
        .unwrap();
    let train_before = fs::read(&paths.train).unwrap();
    fs::remove_file(&paths.raw).unwrap();

    let resumed = PipelineConfig {
        start_stage: PipelineStage::Partitioning,
        ..config(dir.path(), 8)
    };
    let report = Pipeline::builder()
        .config(resumed)
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert!(report.projected.is_none());
    assert!(report.normalized.is_none());
    assert!(report.partition.is_some());
    assert_eq!(fs::read(&paths.train).unwrap(), train_before);
}

#[test]
fn test_resume_without_intermediate_fails() {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        start_stage: PipelineStage::Shuffling,
        ..config(dir.path(), 1)
    };
    let err = Pipeline::builder()
        .config(config)
        .build()
        .unwrap()
        .run()
        .unwrap_err();

    assert_eq!(err.error_code(), "MISSING_INPUT");
    assert!(err.to_string().contains("test_openfoodfacts_02.jsonl"));
}

#[test]
fn test_progress_reports_every_stage() {
    let dir = TempDir::new().unwrap();
    write_raw_dump(dir.path());
    let updates: Arc<Mutex<Vec<ProgressUpdate>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&updates);

    Pipeline::builder()
        .config(config(dir.path(), 4))
        .translator(Arc::new(LowercaseTranslator))
        .on_progress(move |update| sink.lock().unwrap().push(update))
        .build()
        .unwrap()
        .run()
        .unwrap();

    let updates = updates.lock().unwrap();
    let stages: HashSet<PipelineStage> = updates.iter().map(|u| u.stage).collect();
    for stage in PipelineStage::processing_order() {
        assert!(stages.contains(&stage), "no update for {stage:?}");
    }
    assert_eq!(updates.last().map(|u| u.stage), Some(PipelineStage::Complete));
    assert!(
        updates
            .windows(2)
            .all(|pair| pair[0].progress <= pair[1].progress + 1e-5)
    );
}

#[test]
fn test_projector_output_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    let paths = write_raw_dump(dir.path());
    let pipeline = Pipeline::builder()
        .config(config(dir.path(), 1))
        .build()
        .unwrap();

    pipeline.run().unwrap();
    let projected = fs::read(&paths.projected).unwrap();
    let normalized = fs::read(&paths.normalized).unwrap();
    pipeline.run().unwrap();

    assert_eq!(fs::read(&paths.projected).unwrap(), projected);
    assert_eq!(fs::read(&paths.normalized).unwrap(), normalized);
}
