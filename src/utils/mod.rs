//! Utility functions shared across docxcat.
//!
//! Path collection (glob patterns and directory scans), lightweight
//! inspection of parsed documents, and formatting helpers.

use crate::error::{DocxCatError, Result};
use docx_rs::{BreakType, Docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use serde::Serializer;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

/// Expand glob patterns into concrete file paths, preserving order.
///
/// Each pattern's matches are sorted before being appended, so the overall
/// order is deterministic. A pattern that matches nothing is kept as a
/// literal path, letting validation report it as a missing file rather than
/// silently dropping it.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let mut matched = Vec::new();

        match glob::glob(pattern) {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Ok(path) => matched.push(path),
                        Err(e) => {
                            return Err(DocxCatError::other(format!(
                                "Failed to read glob entry for '{pattern}': {e}"
                            )));
                        }
                    }
                }
            }
            Err(e) => {
                return Err(DocxCatError::other(format!(
                    "Invalid glob pattern '{pattern}': {e}"
                )));
            }
        }

        if matched.is_empty() {
            paths.push(PathBuf::from(pattern));
        } else {
            matched.sort();
            paths.extend(matched);
        }
    }

    Ok(paths)
}

/// Find all `.docx` files directly inside a directory, sorted by name.
///
/// Word lock files (names starting with `~$`) are excluded.
pub fn find_docx_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(DocxCatError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(DocxCatError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DocxCatError::other(format!("Failed to scan directory: {e}")))?;
        let path = entry.path();
        if path.is_file() && is_docx_file(path) {
            found.push(path.to_path_buf());
        }
    }
    found.sort();
    Ok(found)
}

/// Check whether a path looks like a Word document.
///
/// Matches on a case-insensitive `.docx` extension and rejects `~$` lock
/// files Word leaves next to open documents.
pub fn is_docx_file(path: &Path) -> bool {
    let is_lockfile = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("~$"));
    if is_lockfile {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"))
}

/// Extract the visible text of a paragraph.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

/// Check whether a paragraph has no visible content.
///
/// A paragraph counts as empty when its text is all whitespace and it
/// contains no inline images.
pub fn paragraph_is_empty(paragraph: &Paragraph) -> bool {
    paragraph_text(paragraph).trim().is_empty() && paragraph_image_count(paragraph) == 0
}

/// Check whether a paragraph contains an explicit page break.
pub fn paragraph_has_page_break(paragraph: &Paragraph) -> bool {
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Break(br) = rc
                    && *br == docx_rs::Break::new(BreakType::Page)
                {
                    return true;
                }
            }
        }
    }
    false
}

/// Count inline images in a paragraph.
pub fn paragraph_image_count(paragraph: &Paragraph) -> usize {
    let mut count = 0;
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if matches!(rc, RunChild::Drawing(_)) {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Count whitespace-separated words in a paragraph.
pub fn paragraph_word_count(paragraph: &Paragraph) -> usize {
    paragraph_text(paragraph).split_whitespace().count()
}

/// Count body paragraphs in a document.
pub fn body_paragraph_count(docx: &Docx) -> usize {
    docx.document
        .children
        .iter()
        .filter(|c| matches!(c, DocumentChild::Paragraph(_)))
        .count()
}

/// Count body tables in a document.
pub fn body_table_count(docx: &Docx) -> usize {
    docx.document
        .children
        .iter()
        .filter(|c| matches!(c, DocumentChild::Table(_)))
        .count()
}

/// Count inline images across the document body.
pub fn body_image_count(docx: &Docx) -> usize {
    docx.document
        .children
        .iter()
        .map(|c| match c {
            DocumentChild::Paragraph(p) => paragraph_image_count(p),
            _ => 0,
        })
        .sum()
}

/// Count words across the document body.
pub fn body_word_count(docx: &Docx) -> usize {
    docx.document
        .children
        .iter()
        .map(|c| match c {
            DocumentChild::Paragraph(p) => paragraph_word_count(p),
            _ => 0,
        })
        .sum()
}

/// Check whether a document has any content worth copying.
///
/// A document with only empty paragraphs and no tables is treated as empty.
pub fn has_real_content(docx: &Docx) -> bool {
    docx.document.children.iter().any(|c| match c {
        DocumentChild::Paragraph(p) => !paragraph_is_empty(p),
        DocumentChild::Table(_) => true,
        _ => false,
    })
}

/// Format a byte count in human-readable form.
pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = size as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", size as u64, UNITS[unit])
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

/// Serialize a [`Duration`] as fractional seconds for JSON summaries.
pub fn serialize_duration_secs<S>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}
