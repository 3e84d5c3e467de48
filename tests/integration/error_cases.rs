//! Failure handling: corrupted inputs, empty documents, stop-on-error,
//! and output overwrite policies.

use crate::common::{body_texts, docx_with_paragraphs, write_docx, write_fixture};
use docxcat::config::{Config, OverwriteMode};
use docxcat::descriptor::DocumentDescriptor;
use docxcat::error::DocxCatError;
use docxcat::merge::{MergeStage, Merger};
use docxcat::validation::Validator;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn broken_fixture(dir: &Path, name: &str) -> DocumentDescriptor {
    let path = dir.join(name);
    std::fs::write(&path, b"definitely not a zip archive").unwrap();
    DocumentDescriptor::unanalyzed(&path, 28)
}

#[tokio::test]
async fn corrupted_document_is_skipped_and_reported() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "good1.docx", docx_with_paragraphs(&["one"])),
        broken_fixture(dir.path(), "broken.docx"),
        write_fixture(dir.path(), "good2.docx", docx_with_paragraphs(&["two"])),
    ];

    let result = Merger::new(Config::default()).merge(&docs).await.unwrap();

    assert_eq!(result.summary.documents_processed, 2);
    assert_eq!(result.summary.documents_skipped, 1);
    assert_eq!(result.summary.errors.len(), 1);
    assert_eq!(result.summary.errors[0].name, "broken");
    assert_eq!(result.summary.errors[0].stage, MergeStage::Load);
    assert!(!result.summary.halted);
    assert_eq!(body_texts(&result.document), vec!["one", "two"]);
}

#[tokio::test]
async fn stop_on_error_halts_with_partial_result() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "good1.docx", docx_with_paragraphs(&["kept"])),
        broken_fixture(dir.path(), "broken.docx"),
        write_fixture(dir.path(), "good2.docx", docx_with_paragraphs(&["never merged"])),
    ];

    let config = Config {
        stop_on_error: true,
        ..Default::default()
    };
    let result = Merger::new(config).merge(&docs).await.unwrap();

    assert!(result.summary.halted);
    assert_eq!(result.summary.documents_processed, 1);
    assert_eq!(result.summary.errors.len(), 1);
    assert_eq!(body_texts(&result.document), vec!["kept"]);
}

#[tokio::test]
async fn empty_document_never_halts() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "blank.docx", docx_with_paragraphs(&["", "  "])),
        write_fixture(dir.path(), "real.docx", docx_with_paragraphs(&["content"])),
    ];

    let config = Config {
        stop_on_error: true,
        ..Default::default()
    };
    let result = Merger::new(config).merge(&docs).await.unwrap();

    assert!(!result.summary.halted);
    assert_eq!(result.summary.documents_processed, 1);
    assert_eq!(result.summary.documents_skipped, 1);
    assert_eq!(result.summary.errors[0].stage, MergeStage::Append);
    assert_eq!(body_texts(&result.document), vec!["content"]);
}

#[tokio::test]
async fn all_inputs_invalid_is_an_error() {
    let dir = tempdir().unwrap();
    let docs = vec![
        broken_fixture(dir.path(), "bad1.docx"),
        broken_fixture(dir.path(), "bad2.docx"),
    ];

    let result = Merger::new(Config::default()).merge(&docs).await;
    assert!(matches!(result, Err(DocxCatError::NoDocumentsToMerge)));
}

#[tokio::test]
async fn validation_reports_every_failure() {
    let dir = tempdir().unwrap();
    let good = write_docx(dir.path(), "good.docx", docx_with_paragraphs(&["fine"]));
    let empty = dir.path().join("empty.docx");
    std::fs::write(&empty, b"").unwrap();
    let missing = dir.path().join("missing.docx");

    let validator = Validator::new();
    let summary = validator
        .validate_files(&[good, empty, missing])
        .await
        .unwrap();

    assert_eq!(summary.files_validated, 1);
    assert_eq!(summary.files_failed, 2);
    assert_eq!(summary.failures.len(), 2);
}

#[tokio::test]
async fn nonexistent_file_fails_validation() {
    let validator = Validator::new();
    let result = validator
        .validate_file(Path::new("/no/such/place/report.docx"))
        .await;
    assert!(matches!(result, Err(DocxCatError::FileNotFound { .. })));
}

#[test]
fn no_clobber_rejects_existing_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("merged.docx");
    std::fs::write(&output, b"existing").unwrap();

    let mut config = Config::new(vec![PathBuf::from("a.docx")], output);
    config.overwrite_mode = OverwriteMode::NoClobber;

    let validator = Validator::new();
    let result = validator.validate_output(&config);
    assert!(matches!(result, Err(DocxCatError::OutputExists { .. })));
}

#[test]
fn force_accepts_existing_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("merged.docx");
    std::fs::write(&output, b"existing").unwrap();

    let mut config = Config::new(vec![PathBuf::from("a.docx")], output);
    config.overwrite_mode = OverwriteMode::Force;

    let validator = Validator::new();
    assert!(validator.validate_output(&config).is_ok());
}
