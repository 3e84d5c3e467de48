//! Per-document metadata and the ordered input list.
//!
//! [`DocumentDescriptor`] records what validation learned about one input:
//! its size, whether it parsed, and (when analysis is enabled) content
//! counts and a rough page estimate. [`DocumentList`] keeps descriptors in
//! merge order and supports the reordering operations the queue needs.

use crate::utils;
use docx_rs::Docx;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Rough number of paragraphs assumed to fill one page.
const PARAGRAPHS_PER_PAGE: usize = 50;

/// Metadata describing one input document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentDescriptor {
    /// Path to the file on disk.
    pub path: PathBuf,
    /// Name shown in output, headings, and the table of contents.
    pub display_name: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Number of body paragraphs.
    pub paragraph_count: usize,
    /// Number of body tables.
    pub table_count: usize,
    /// Number of inline images.
    pub image_count: usize,
    /// Number of words in the body text.
    pub word_count: usize,
    /// Estimated page count, derived from the paragraph count.
    pub page_estimate: usize,
    /// Whether content analysis was performed.
    pub analyzed: bool,
    /// Whether the file parsed as a valid document.
    pub is_valid: bool,
}

impl DocumentDescriptor {
    /// Build a descriptor from a parsed document, with full analysis.
    pub fn from_docx(path: &Path, file_size: u64, docx: &Docx) -> Self {
        let paragraph_count = utils::body_paragraph_count(docx);
        Self {
            path: path.to_path_buf(),
            display_name: display_name_for(path),
            file_size,
            paragraph_count,
            table_count: utils::body_table_count(docx),
            image_count: utils::body_image_count(docx),
            word_count: utils::body_word_count(docx),
            page_estimate: (paragraph_count / PARAGRAPHS_PER_PAGE).max(1),
            analyzed: true,
            is_valid: true,
        }
    }

    /// Build a descriptor for a file that parsed but was not analyzed.
    pub fn unanalyzed(path: &Path, file_size: u64) -> Self {
        Self {
            path: path.to_path_buf(),
            display_name: display_name_for(path),
            file_size,
            paragraph_count: 0,
            table_count: 0,
            image_count: 0,
            word_count: 0,
            page_estimate: 0,
            analyzed: false,
            is_valid: true,
        }
    }

    /// Build a descriptor for a file that failed validation.
    pub fn invalid(path: &Path, file_size: u64) -> Self {
        Self {
            is_valid: false,
            ..Self::unanalyzed(path, file_size)
        }
    }

    /// Human-readable file size.
    pub fn formatted_size(&self) -> String {
        utils::format_file_size(self.file_size)
    }
}

fn display_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("(unnamed)")
        .to_string()
}

/// Ordered collection of document descriptors.
///
/// The order of the list is the merge order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentList {
    documents: Vec<DocumentDescriptor>,
}

impl DocumentList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor at the end of the list.
    pub fn push(&mut self, descriptor: DocumentDescriptor) {
        self.documents.push(descriptor);
    }

    /// Number of documents in the list.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get a descriptor by position.
    pub fn get(&self, index: usize) -> Option<&DocumentDescriptor> {
        self.documents.get(index)
    }

    /// Remove and return the descriptor at `index`, shifting the rest up.
    pub fn remove(&mut self, index: usize) -> Option<DocumentDescriptor> {
        if index < self.documents.len() {
            Some(self.documents.remove(index))
        } else {
            None
        }
    }

    /// Swap the document at `index` with its predecessor.
    ///
    /// Returns false when the move is impossible (first item or out of
    /// range), leaving the list untouched.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.documents.len() {
            return false;
        }
        self.documents.swap(index, index - 1);
        true
    }

    /// Swap the document at `index` with its successor.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.documents.len() {
            return false;
        }
        self.documents.swap(index, index + 1);
        true
    }

    /// Iterate over descriptors in merge order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentDescriptor> {
        self.documents.iter()
    }

    /// View the descriptors as a slice.
    pub fn as_slice(&self) -> &[DocumentDescriptor] {
        &self.documents
    }

    /// Combined size of all documents, in bytes.
    pub fn total_size(&self) -> u64 {
        self.documents.iter().map(|d| d.file_size).sum()
    }

    /// Combined page estimate across analyzed documents.
    pub fn total_page_estimate(&self) -> usize {
        self.documents.iter().map(|d| d.page_estimate).sum()
    }
}
