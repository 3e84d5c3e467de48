//! Tests for merge options: numbering, cover page, table of contents,
//! page breaks, separators, and style preservation.

use crate::common::{body_texts, docx_with_paragraphs, docx_with_style, write_fixture};
use docx_rs::DocumentChild;
use docxcat::config::{Config, CoverPage};
use docxcat::merge::Merger;
use docxcat::utils::paragraph_has_page_break;
use rstest::rstest;
use tempfile::tempdir;

#[tokio::test]
async fn numerate_prefixes_each_document_in_order() {
    let dir = tempdir().unwrap();
    // Deliberately non-alphabetical order: numbering follows merge order.
    let docs = vec![
        write_fixture(dir.path(), "c.docx", docx_with_paragraphs(&["c body"])),
        write_fixture(dir.path(), "a.docx", docx_with_paragraphs(&["a body"])),
        write_fixture(dir.path(), "b.docx", docx_with_paragraphs(&["b body"])),
    ];

    let config = Config {
        numerate: true,
        ..Default::default()
    };
    let result = Merger::new(config).merge(&docs).await.unwrap();

    let texts = body_texts(&result.document);
    assert_eq!(
        texts,
        vec!["1. c", "c body", "2. a", "a body", "3. b", "b body"]
    );
}

#[tokio::test]
async fn cover_page_precedes_all_content() {
    let dir = tempdir().unwrap();
    let docs = vec![write_fixture(
        dir.path(),
        "doc.docx",
        docx_with_paragraphs(&["document body"]),
    )];

    let config = Config {
        cover: Some(CoverPage::new(
            "Combined Report",
            Some("Q3 Edition".into()),
            Some("Jane Doe".into()),
            Some("2026-08-30".into()),
        )),
        ..Default::default()
    };
    let result = Merger::new(config).merge(&docs).await.unwrap();

    let texts = body_texts(&result.document);
    assert_eq!(texts[0], "Combined Report");
    assert_eq!(texts[1], "Q3 Edition");
    assert_eq!(texts[2], "Jane Doe");
    assert_eq!(texts[3], "2026-08-30");
    assert_eq!(texts[4], "document body");
}

#[tokio::test]
async fn toc_lists_documents_between_cover_and_content() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "one.docx", docx_with_paragraphs(&["one body"])),
        write_fixture(dir.path(), "two.docx", docx_with_paragraphs(&["two body"])),
    ];

    let config = Config {
        cover: Some(CoverPage::new("Title", None, None, None)),
        table_of_contents: true,
        ..Default::default()
    };
    let result = Merger::new(config).merge(&docs).await.unwrap();

    let texts = body_texts(&result.document);
    assert_eq!(texts[0], "Title");
    assert_eq!(texts[1], "Table of Contents");
    assert_eq!(texts[2], "1. one");
    assert_eq!(texts[3], "2. two");
    assert_eq!(texts[4], "one body");
    assert_eq!(texts[5], "two body");
}

#[rstest]
#[case(true, 1)]
#[case(false, 0)]
#[tokio::test]
async fn page_breaks_between_documents(#[case] page_breaks: bool, #[case] expected_breaks: usize) {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "a.docx", docx_with_paragraphs(&["a"])),
        write_fixture(dir.path(), "b.docx", docx_with_paragraphs(&["b"])),
    ];

    let config = Config {
        page_breaks,
        ..Default::default()
    };
    let result = Merger::new(config).merge(&docs).await.unwrap();

    let breaks = result
        .document
        .document
        .children
        .iter()
        .filter(|c| match c {
            DocumentChild::Paragraph(p) => paragraph_has_page_break(p),
            _ => false,
        })
        .count();
    assert_eq!(breaks, expected_breaks);
}

#[tokio::test]
async fn no_break_after_last_document() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "a.docx", docx_with_paragraphs(&["a"])),
        write_fixture(dir.path(), "b.docx", docx_with_paragraphs(&["b"])),
    ];

    let result = Merger::new(Config::default()).merge(&docs).await.unwrap();

    // The final block must be content, not a trailing page break.
    let last = result.document.document.children.last().unwrap();
    if let DocumentChild::Paragraph(p) = last {
        assert!(!paragraph_has_page_break(p));
    }
}

#[tokio::test]
async fn separators_inserted_between_documents() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(dir.path(), "a.docx", docx_with_paragraphs(&["a"])),
        write_fixture(dir.path(), "b.docx", docx_with_paragraphs(&["b"])),
        write_fixture(dir.path(), "c.docx", docx_with_paragraphs(&["c"])),
    ];

    let config = Config {
        separators: true,
        page_breaks: false,
        ..Default::default()
    };
    let result = Merger::new(config).merge(&docs).await.unwrap();

    let separator_count = body_texts(&result.document)
        .iter()
        .filter(|t| t.chars().all(|c| c == '\u{2500}') && !t.is_empty())
        .count();
    assert_eq!(separator_count, 2);
}

#[tokio::test]
async fn styles_imported_first_wins() {
    let dir = tempdir().unwrap();
    let docs = vec![
        write_fixture(
            dir.path(),
            "styled1.docx",
            docx_with_style("quoted text", "FancyQuote", "Fancy Quote"),
        ),
        write_fixture(
            dir.path(),
            "styled2.docx",
            docx_with_style("more quotes", "FancyQuote", "Fancy Quote Alt"),
        ),
    ];

    let result = Merger::new(Config::default()).merge(&docs).await.unwrap();

    // Only the first definition of FancyQuote survives.
    let fancy: Vec<_> = result
        .document
        .styles
        .styles
        .iter()
        .filter(|s| s.style_id == "FancyQuote")
        .collect();
    assert_eq!(fancy.len(), 1);
    assert_eq!(fancy[0].name, docx_rs::Name::new("Fancy Quote"));
    assert!(result.summary.styles_imported >= 1);
}

#[tokio::test]
async fn style_import_disabled() {
    let dir = tempdir().unwrap();
    let docs = vec![write_fixture(
        dir.path(),
        "styled.docx",
        docx_with_style("text", "FancyQuote", "Fancy Quote"),
    )];

    let config = Config {
        preserve_styles: false,
        ..Default::default()
    };
    let result = Merger::new(config).merge(&docs).await.unwrap();

    assert_eq!(result.summary.styles_imported, 0);
    assert!(
        !result
            .document
            .styles
            .styles
            .iter()
            .any(|s| s.style_id == "FancyQuote")
    );
}
