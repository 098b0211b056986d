//! Integration tests for [`storage::ResultStore`].
//!
//! Covers record persistence, newest-first history with a limit, and
//! tolerance of unreadable files.

use generator::{GenerationMetadata, GenerationResult, Solution};
use std::fs;
use std::thread::sleep;
use std::time::Duration;
use storage::{DataPaths, ResultStore, TestConfig, TestRecord};
use tempfile::TempDir;

fn store(root: &TempDir) -> ResultStore {
    let paths = DataPaths::new(root.path());
    paths.ensure().expect("create data dirs");
    ResultStore::new(&paths)
}

fn sample_record(problem_id: &str) -> TestRecord {
    let metadata = GenerationMetadata {
        tokens: 150,
        input_tokens: 100,
        output_tokens: 50,
        cost_usd: 0.00105,
        latency_ms: 12.5,
        model: "test-model".to_string(),
        temperature: 0.8,
    };
    let results = GenerationResult {
        solutions: vec![Solution {
            title: "A".to_string(),
            prompt: "try this".to_string(),
            tools_used: vec!["spotify".to_string()],
            tags: vec!["easy".to_string()],
            extra: serde_json::Map::new(),
        }],
        metadata: metadata.clone(),
    };
    let config = TestConfig {
        problem_id: problem_id.to_string(),
        problem_text: "a problem".to_string(),
        domain: "health".to_string(),
        level: 2,
        tools: vec!["spotify".to_string()],
        temperature: 0.8,
        max_tokens: 4000,
    };
    TestRecord::new(results, config)
}

/// **Test: A saved record round-trips through history, with the metadata copy
/// matching the results' metadata.**
#[test]
fn save_then_load_history() {
    let root = TempDir::new().unwrap();
    let results = store(&root);

    let record = sample_record("p1");
    let path = results.save(&record).expect("save record");
    assert!(path.exists());
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with(&format!("{}.json", record.test_id)));
    assert!(!name.contains(':'), "filename must be filesystem-safe");

    let history = results.load_history(10).expect("load history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].test_id, record.test_id);
    assert_eq!(history[0].config.problem_id, "p1");
    assert_eq!(history[0].metadata, history[0].results.metadata);
    assert_eq!(history[0].results.solutions[0].title, "A");
}

/// **Test: History is newest-first and bounded by the limit.**
#[test]
fn history_is_newest_first_and_limited() {
    let root = TempDir::new().unwrap();
    let results = store(&root);

    for problem_id in ["p1", "p2", "p3"] {
        results.save(&sample_record(problem_id)).unwrap();
        // Distinct mtimes so ordering is unambiguous.
        sleep(Duration::from_millis(20));
    }

    let history = results.load_history(2).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].config.problem_id, "p3");
    assert_eq!(history[1].config.problem_id, "p2");
}

/// **Test: Lookup by test id returns the matching record; an unknown id is
/// `NotFound`.**
#[test]
fn find_by_id_matches_filename_suffix() {
    let root = TempDir::new().unwrap();
    let results = store(&root);

    let record = sample_record("p1");
    results.save(&record).unwrap();
    results.save(&sample_record("p2")).unwrap();

    let found = results.find_by_id(&record.test_id).expect("record present");
    assert_eq!(found.test_id, record.test_id);
    assert_eq!(found.config.problem_id, "p1");

    let err = results.find_by_id("no-such-id").unwrap_err();
    assert!(matches!(err, storage::StorageError::NotFound(_)));
}

/// **Test: A corrupt record file is skipped without aborting the load.**
#[test]
fn corrupt_record_is_skipped() {
    let root = TempDir::new().unwrap();
    let results = store(&root);

    results.save(&sample_record("p1")).unwrap();
    fs::write(root.path().join("test_results/broken.json"), "not json").unwrap();

    let history = results.load_history(10).unwrap();
    assert_eq!(history.len(), 1);
}
