//! Integration tests driving the library the way a front end would
//!
//! Tests the full flow: read headers → validate a selection → run the
//! engine → read the output files back with a standard CSV reader.

use csv_splitter::engine::{ProcessingResult, SplitEngine, SplitRequest};
use csv_splitter::progress::NullSink;
use csv_splitter::validate::validate;
use csv_splitter::read_headers;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

fn write_source(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("source.csv");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn read_back(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

const SALES: &str = "\"Date\",\"Region\",\"Product\",\"Amount\"\n\
                     \"2024-01-01\",\"West\",\"Widget\",\"120\"\n\
                     \"2024-01-02\",\"East\",\"Widget\",\"80\"\n\
                     \"2024-01-03\",\"West\",\"Gadget\",\"45\"\n\
                     \"2024-01-04\",\"West\",\"Widget\",\"60\"\n";

// ============================================================================
// Front-End Flow
// ============================================================================

#[test]
fn test_picker_to_split_flow() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), SALES);
    let out = dir.path().join("out");

    // A front end first reads the headers to populate its field pickers.
    let headers = read_headers(&source).unwrap();
    assert_eq!(headers, vec!["Date", "Region", "Product", "Amount"]);

    // Then validates the user's selection before doing any work.
    let request = SplitRequest::new(&source, &out)
        .with_group_by(["Region"])
        .with_included(["Date", "Amount"]);
    validate(&request).unwrap();

    // Then runs the engine with a progress callback.
    let messages: Arc<Mutex<Vec<String>>> = Arc::default();
    let seen = Arc::clone(&messages);
    let engine = SplitEngine::with_progress(move |msg: &str| {
        seen.lock().unwrap().push(msg.to_string());
    });
    let result = engine.run(&request);
    assert_eq!(result, ProcessingResult::ok(2, 4));

    let west = read_back(&out.join("West.csv"));
    assert_eq!(
        west,
        vec![
            vec!["Date", "Amount"],
            vec!["2024-01-01", "120"],
            vec!["2024-01-03", "45"],
            vec!["2024-01-04", "60"],
        ]
    );

    let east = read_back(&out.join("East.csv"));
    assert_eq!(east, vec![vec!["Date", "Amount"], vec!["2024-01-02", "80"]]);

    let messages = messages.lock().unwrap();
    assert!(messages
        .iter()
        .any(|m| m == "Created file for Region='West' with 3 rows"));
    assert!(messages
        .iter()
        .any(|m| m == "Created file for Region='East' with 1 rows"));
}

#[test]
fn test_each_row_lands_in_exactly_one_file() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), SALES);
    let out = dir.path().join("out");

    let request = SplitRequest::new(&source, &out)
        .with_group_by(["Product"])
        .with_included(["Date", "Product"]);
    let result = SplitEngine::with_progress(NullSink).run(&request);
    assert!(result.success);

    // Every source date appears once across all outputs, in the file whose
    // name matches the row's product.
    let mut seen = Vec::new();
    for entry in fs::read_dir(&out).unwrap() {
        let path = entry.unwrap().path();
        let rows = read_back(&path);
        let stem = path.file_stem().unwrap().to_string_lossy().to_string();
        for row in &rows[1..] {
            assert_eq!(row[1], stem);
            seen.push(row[0].clone());
        }
    }
    seen.sort();
    assert_eq!(
        seen,
        vec!["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"]
    );
}

#[test]
fn test_output_round_trips_through_standard_reader() {
    let dir = tempdir().unwrap();
    let source = write_source(
        dir.path(),
        "\"K\",\"Note\"\n\"A\",\"line one\nline two, with comma and \"\"quote\"\"\"\n",
    );
    let out = dir.path().join("out");

    let request = SplitRequest::new(&source, &out)
        .with_group_by(["K"])
        .with_included(["Note"]);
    assert!(SplitEngine::with_progress(NullSink).run(&request).success);

    let rows = read_back(&out.join("A.csv"));
    assert_eq!(rows[0], vec!["Note"]);
    assert_eq!(rows[1], vec!["line one\nline two, with comma and \"quote\""]);
}

// ============================================================================
// Failure Reporting
// ============================================================================

#[test]
fn test_missing_fields_reported_as_result_not_panic() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), SALES);

    let request = SplitRequest::new(&source, dir.path().join("out"))
        .with_group_by(["Territory"])
        .with_included(["Amount", "Price"]);
    let result = SplitEngine::with_progress(NullSink).run(&request);

    assert!(!result.success);
    assert_eq!(result.files_created, 0);
    let error = result.error.unwrap();
    assert!(error.contains("Territory"));
    assert!(error.contains("Price"));
}

#[test]
fn test_unwritable_output_dir_fails_cleanly() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), SALES);

    // A file where the output directory should be.
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "not a directory").unwrap();

    let request = SplitRequest::new(&source, &blocker)
        .with_group_by(["Region"])
        .with_included(["Amount"]);
    let result = SplitEngine::with_progress(NullSink).run(&request);

    assert!(!result.success);
    assert!(result.error.is_some());
}

#[test]
fn test_validation_rejects_before_engine_runs() {
    let dir = tempdir().unwrap();
    let source = write_source(dir.path(), SALES);

    let request = SplitRequest::new(&source, dir.path().join("out")).with_included(["Amount"]);
    let err = validate(&request).unwrap_err();
    assert!(err.is_validation());

    let result = SplitEngine::with_progress(NullSink).run(&request);
    assert!(!result.success);
    assert!(!dir.path().join("out").exists());
}
