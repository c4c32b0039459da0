//! Loading project documents from disk
//!
//! Covers the terminal fallback states (missing file, malformed JSON, empty
//! document) and the end-to-end order/counter of a small document.

use folio_common::loader::{load_catalog, load_projects, EMPTY_MESSAGE, LOAD_ERROR_MESSAGE};
use folio_common::{Catalog, DataSource, FilterState, RenderContext};
use std::io::Write;

fn write_document(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write document");
    file
}

#[tokio::test]
async fn test_sample_document_order_and_counter() {
    let file = write_document(
        r#"{"2024": [{"Project":"A","Date":"01/03/2024"}], "2025": [{"Project":"B","Date":"2025-02-10"}]}"#,
    );
    let source = DataSource::File(file.path().to_path_buf());

    let catalog = load_catalog(&source).await;
    let ctx = RenderContext::compute(catalog.records(), &FilterState::new());

    let names: Vec<_> = ctx.visible.iter().map(|e| e.record.name().unwrap()).collect();
    assert_eq!(names, vec!["B", "A"]);
    assert_eq!(ctx.count.to_string(), "Showing: 2/2");
}

#[tokio::test]
async fn test_years_are_injected() {
    let file = write_document(r#"{"2023": [{"Project":"Old"}], "2026": [{"Project":"New"}]}"#);
    let source = DataSource::File(file.path().to_path_buf());

    let records = load_projects(&source).await.unwrap();
    assert_eq!(records[0].year.as_deref(), Some("2023"));
    assert_eq!(records[1].year.as_deref(), Some("2026"));
}

#[tokio::test]
async fn test_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let source = DataSource::File(dir.path().join("data.json"));

    let catalog = load_catalog(&source).await;
    assert_eq!(catalog, Catalog::Unavailable);
    assert_eq!(catalog.fallback_message(), Some(LOAD_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_malformed_json_is_unavailable() {
    let file = write_document("{\"2024\": [");
    let source = DataSource::File(file.path().to_path_buf());

    assert_eq!(load_catalog(&source).await, Catalog::Unavailable);
}

#[tokio::test]
async fn test_null_document_is_unavailable() {
    let file = write_document("null");
    let source = DataSource::File(file.path().to_path_buf());

    assert_eq!(load_catalog(&source).await, Catalog::Unavailable);
}

#[tokio::test]
async fn test_flat_array_document_is_empty() {
    let file = write_document(r#"[{"Project": "A"}]"#);
    let source = DataSource::File(file.path().to_path_buf());

    let catalog = load_catalog(&source).await;
    assert_eq!(catalog, Catalog::Empty);
    assert_eq!(catalog.fallback_message(), Some(EMPTY_MESSAGE));
}

#[tokio::test]
async fn test_empty_document_is_empty() {
    let file = write_document(r#"{"2024": [], "notes": "nothing yet"}"#);
    let source = DataSource::File(file.path().to_path_buf());

    let catalog = load_catalog(&source).await;
    assert_eq!(catalog, Catalog::Empty);
    assert_eq!(catalog.fallback_message(), Some(EMPTY_MESSAGE));
}
