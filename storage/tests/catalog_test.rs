//! Integration tests for [`storage::CatalogStore`].
//!
//! Covers single-record vs array files, tolerance of bad files, defaulted
//! problem fields, and id-based tool loading. Uses temp dirs, no fixtures.

use std::fs;
use storage::{CatalogStore, DataPaths};
use tempfile::TempDir;

fn store(root: &TempDir) -> CatalogStore {
    let paths = DataPaths::new(root.path());
    paths.ensure().expect("create data dirs");
    CatalogStore::new(&paths)
}

/// **Test: One single-object file plus one two-object array file yields three
/// records.**
#[test]
fn single_and_array_files_concatenate() {
    let root = TempDir::new().unwrap();
    let catalog = store(&root);
    let problems_dir = root.path().join("problems");

    fs::write(
        problems_dir.join("one.json"),
        r#"{"problem_id":"p1","problem_text":"first","domain":"health","level":2}"#,
    )
    .unwrap();
    fs::write(
        problems_dir.join("two.json"),
        r#"[
            {"problem_id":"p2","problem_text":"second"},
            {"problem_id":"p3","problem_text":"third"}
        ]"#,
    )
    .unwrap();

    let problems = catalog.load_problems().expect("load problems");
    assert_eq!(problems.len(), 3);
}

/// **Test: Missing `domain` and `level` default to "Unknown" and 1.**
#[test]
fn problem_fields_default() {
    let root = TempDir::new().unwrap();
    let catalog = store(&root);

    fs::write(
        root.path().join("problems/min.json"),
        r#"{"problem_id":"p1","problem_text":"minimal"}"#,
    )
    .unwrap();

    let problems = catalog.load_problems().unwrap();
    assert_eq!(problems[0].domain, "Unknown");
    assert_eq!(problems[0].level, 1);
}

/// **Test: A malformed file is skipped; valid files still load.**
#[test]
fn bad_file_does_not_abort_loading() {
    let root = TempDir::new().unwrap();
    let catalog = store(&root);
    let problems_dir = root.path().join("problems");

    fs::write(problems_dir.join("bad.json"), "{not json at all").unwrap();
    fs::write(
        problems_dir.join("good.json"),
        r#"{"problem_id":"p1","problem_text":"fine"}"#,
    )
    .unwrap();
    // Non-JSON extensions are ignored entirely.
    fs::write(problems_dir.join("notes.txt"), "ignore me").unwrap();

    let problems = catalog.load_problems().unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].problem_id, "p1");
}

/// **Test: Both tool shapes load from the tools directory.**
#[test]
fn loads_simple_and_complex_tools() {
    let root = TempDir::new().unwrap();
    let catalog = store(&root);
    let tools_dir = root.path().join("tools");

    fs::write(
        tools_dir.join("watch.json"),
        r#"{"tool_id":"apple_watch","display_name":"Apple Watch"}"#,
    )
    .unwrap();
    fs::write(
        tools_dir.join("home.json"),
        r#"{"main_system":"Apple Home","integration_score":7,"sub_systems":{}}"#,
    )
    .unwrap();

    let tools = catalog.load_tools().unwrap();
    assert_eq!(tools.len(), 2);
    let mut ids: Vec<String> = tools.iter().map(|tool| tool.tool_id()).collect();
    ids.sort();
    assert_eq!(ids, vec!["apple_home", "apple_watch"]);
}

/// **Test: Loading by id reads `{id}.json` and skips missing ids.**
#[test]
fn load_tools_by_id_skips_missing() {
    let root = TempDir::new().unwrap();
    let catalog = store(&root);

    fs::write(
        root.path().join("tools/spotify.json"),
        r#"{"tool_id":"spotify"}"#,
    )
    .unwrap();

    let tools = catalog
        .load_tools_by_id(&["spotify".to_string(), "missing".to_string()])
        .unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].tool_id(), "spotify");
}

/// **Test: A catalog directory that does not exist loads as empty.**
#[test]
fn missing_directory_loads_empty() {
    let root = TempDir::new().unwrap();
    let catalog = CatalogStore::new(&DataPaths::new(root.path().join("nowhere")));
    assert!(catalog.load_problems().unwrap().is_empty());
}
