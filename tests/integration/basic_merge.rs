//! End-to-end merge scenarios covering ordering and content preservation.

use crate::common::{
    body_texts, docx_with_image, docx_with_paragraphs, docx_with_table, read_back, table_count,
    write_fixture,
};
use docxcat::config::Config;
use docxcat::io::DocxWriter;
use docxcat::merge::Merger;
use tempfile::tempdir;

#[tokio::test]
async fn merge_preserves_input_order() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "first.docx", docx_with_paragraphs(&["alpha"])),
        write_fixture(dir.path(), "second.docx", docx_with_paragraphs(&["beta"])),
        write_fixture(dir.path(), "third.docx", docx_with_paragraphs(&["gamma"])),
    ];

    let merger = Merger::new(Config::default());
    let result = merger.merge(&docs).await.unwrap();

    assert_eq!(result.summary.documents_processed, 3);
    assert_eq!(result.summary.documents_skipped, 0);
    assert!(result.summary.errors.is_empty());
    assert_eq!(body_texts(&result.document), vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn merge_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "a.docx", docx_with_paragraphs(&["chapter one"])),
        write_fixture(dir.path(), "b.docx", docx_with_paragraphs(&["chapter two"])),
    ];
    let output = dir.path().join("merged.docx");

    let merger = Merger::new(Config::default());
    let result = merger.merge(&docs).await.unwrap();

    let writer = DocxWriter::new();
    writer.save(result.document, &output).await.unwrap();

    let reloaded = read_back(&output);
    assert_eq!(body_texts(&reloaded), vec!["chapter one", "chapter two"]);
}

#[tokio::test]
async fn merge_carries_tables() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "text.docx", docx_with_paragraphs(&["intro"])),
        write_fixture(dir.path(), "table.docx", docx_with_table("data follows", "cell value")),
    ];

    let merger = Merger::new(Config::default());
    let result = merger.merge(&docs).await.unwrap();

    assert_eq!(result.summary.tables_copied, 1);
    assert_eq!(table_count(&result.document), 1);
}

#[tokio::test]
async fn merge_counts_images() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "pic.docx", docx_with_image("see figure")),
        write_fixture(dir.path(), "plain.docx", docx_with_paragraphs(&["no figure"])),
    ];

    let merger = Merger::new(Config::default());
    let result = merger.merge(&docs).await.unwrap();

    assert_eq!(result.summary.documents_processed, 2);
    assert_eq!(result.summary.images_copied, 1);
}

#[tokio::test]
async fn merge_mixed_content_batch() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "a.docx", docx_with_paragraphs(&["para one", "para two"])),
        write_fixture(dir.path(), "b.docx", docx_with_table("table intro", "value")),
        write_fixture(dir.path(), "c.docx", docx_with_image("figure caption")),
    ];

    let merger = Merger::new(Config::default());
    let result = merger.merge(&docs).await.unwrap();

    assert_eq!(result.summary.documents_processed, 3);
    assert_eq!(result.summary.documents_skipped, 0);
    assert!(result.summary.errors.is_empty());
    assert_eq!(result.summary.tables_copied, 1);
    assert_eq!(result.summary.images_copied, 1);
    assert_eq!(
        body_texts(&result.document),
        vec!["para one", "para two", "table intro", "figure caption"]
    );
    assert_eq!(table_count(&result.document), 1);
}

#[tokio::test]
async fn merge_single_document() {
    let dir = tempdir().unwrap();
    let docs = vec![write_fixture(
        dir.path(),
        "only.docx",
        docx_with_paragraphs(&["solo content"]),
    )];

    let merger = Merger::new(Config::default());
    let result = merger.merge(&docs).await.unwrap();

    assert_eq!(result.summary.documents_processed, 1);
    assert_eq!(body_texts(&result.document), vec!["solo content"]);
}

#[tokio::test]
async fn merge_strips_leading_empty_paragraphs() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "a.docx", docx_with_paragraphs(&["end of first"])),
        write_fixture(dir.path(), "b.docx", docx_with_paragraphs(&["", "  ", "real start"])),
    ];

    let merger = Merger::new(Config::default());
    let result = merger.merge(&docs).await.unwrap();

    assert_eq!(
        body_texts(&result.document),
        vec!["end of first", "real start"]
    );
}
