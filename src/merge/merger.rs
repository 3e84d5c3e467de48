//! The merge sequencer.
//!
//! Loads each input in order and appends its body to a fresh output
//! document, inserting the configured decoration (cover page, table of
//! contents, page breaks, separators, numbered headings) along the way.
//! Per-document failures are recorded in the summary and skipped unless
//! stop-on-error is set, in which case the partial result is returned with
//! the halted flag raised.

use crate::config::Config;
use crate::descriptor::DocumentDescriptor;
use crate::error::{DocxCatError, Result};
use crate::io::DocxReader;
use crate::merge::content::{
    blocks_for_copy, heading_paragraph, page_break_paragraph, separator_paragraph,
    trim_trailing_empty,
};
use crate::merge::cover::cover_blocks;
use crate::merge::styles::import_styles;
use crate::merge::toc::toc_blocks;
use docx_rs::{Docx, DocumentChild, Paragraph};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Stage at which a per-document error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MergeStage {
    /// Reading and parsing the source file.
    Load,
    /// Appending the document body to the output.
    Append,
    /// Writing the final output.
    Save,
}

impl fmt::Display for MergeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Append => write!(f, "append"),
            Self::Save => write!(f, "save"),
        }
    }
}

/// A failure affecting one document during the merge.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentError {
    /// Display name of the affected document.
    pub name: String,
    /// Stage at which the failure occurred.
    pub stage: MergeStage,
    /// Human-readable description.
    pub message: String,
}

/// Aggregate outcome of a merge run.
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    /// Documents appended to the output.
    pub documents_processed: usize,
    /// Documents skipped because of errors or lack of content.
    pub documents_skipped: usize,
    /// Paragraphs copied from source documents.
    pub paragraphs_copied: usize,
    /// Tables copied from source documents.
    pub tables_copied: usize,
    /// Inline images carried inside copied paragraphs.
    pub images_copied: usize,
    /// Styles imported from source documents.
    pub styles_imported: usize,
    /// Wall time of the merge.
    #[serde(serialize_with = "crate::utils::serialize_duration_secs")]
    pub elapsed: Duration,
    /// Per-document failures, in encounter order.
    pub errors: Vec<DocumentError>,
    /// Whether the merge stopped early because of stop-on-error.
    pub halted: bool,
}

impl MergeSummary {
    fn new() -> Self {
        Self {
            documents_processed: 0,
            documents_skipped: 0,
            paragraphs_copied: 0,
            tables_copied: 0,
            images_copied: 0,
            styles_imported: 0,
            elapsed: Duration::ZERO,
            errors: Vec::new(),
            halted: false,
        }
    }
}

/// Result of a merge: the assembled document plus its summary.
pub struct MergeResult {
    /// The merged document, ready to be written.
    pub document: Docx,
    /// What happened during the merge.
    pub summary: MergeSummary,
}

/// Merges Word documents according to a [`Config`].
pub struct Merger {
    config: Config,
    reader: DocxReader,
}

impl Merger {
    /// Create a merger for the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            reader: DocxReader::new(),
        }
    }

    /// Merge the given documents in order.
    pub async fn merge(&self, documents: &[DocumentDescriptor]) -> Result<MergeResult> {
        self.merge_with_progress(documents, |_, _, _| {}).await
    }

    /// Merge with a progress callback.
    ///
    /// The callback receives `(completed, total, name)` after each document
    /// is handled, whether it was appended or skipped.
    pub async fn merge_with_progress<F>(
        &self,
        documents: &[DocumentDescriptor],
        mut progress: F,
    ) -> Result<MergeResult>
    where
        F: FnMut(usize, usize, &str),
    {
        if documents.is_empty() {
            return Err(DocxCatError::NoDocumentsToMerge);
        }

        let start = Instant::now();
        let total = documents.len();
        let mut summary = MergeSummary::new();
        let mut target = Docx::new();

        push_front_matter(&mut target, &self.config, documents);

        let mut appended_any = false;

        for (index, descriptor) in documents.iter().enumerate() {
            let loaded = match self.reader.load(&descriptor.path).await {
                Ok(loaded) => loaded,
                Err(e) => {
                    summary.documents_skipped += 1;
                    summary.errors.push(DocumentError {
                        name: descriptor.display_name.clone(),
                        stage: MergeStage::Load,
                        message: e.to_string(),
                    });
                    progress(index + 1, total, &descriptor.display_name);
                    if self.config.stop_on_error {
                        summary.halted = true;
                        break;
                    }
                    continue;
                }
            };

            let (blocks, counts) = blocks_for_copy(&loaded.document);
            if blocks.is_empty() {
                // Nothing worth copying. This is never fatal, even under
                // stop-on-error, since no data is lost by skipping it.
                summary.documents_skipped += 1;
                summary.errors.push(DocumentError {
                    name: descriptor.display_name.clone(),
                    stage: MergeStage::Append,
                    message: "document has no content".to_string(),
                });
                progress(index + 1, total, &descriptor.display_name);
                continue;
            }

            if appended_any {
                trim_trailing_empty(&mut target.document.children);
                if self.config.page_breaks {
                    push_paragraph(&mut target, page_break_paragraph());
                }
                if self.config.separators {
                    push_paragraph(&mut target, separator_paragraph());
                }
            }

            if self.config.numerate {
                let number = summary.documents_processed + 1;
                push_paragraph(&mut target, heading_paragraph(number, &descriptor.display_name));
            }

            if self.config.preserve_styles {
                summary.styles_imported += import_styles(&mut target, &loaded.document);
            }

            summary.paragraphs_copied += counts.paragraphs;
            summary.tables_copied += counts.tables;
            summary.images_copied += counts.images;
            target.document.children.extend(blocks);

            appended_any = true;
            summary.documents_processed += 1;
            progress(index + 1, total, &descriptor.display_name);
        }

        if summary.documents_processed == 0 && !summary.halted {
            return Err(DocxCatError::NoDocumentsToMerge);
        }

        summary.elapsed = start.elapsed();
        Ok(MergeResult {
            document: target,
            summary,
        })
    }
}

/// Prepend cover page and table of contents, each on its own page.
fn push_front_matter(target: &mut Docx, config: &Config, documents: &[DocumentDescriptor]) {
    if let Some(cover) = &config.cover {
        for block in cover_blocks(cover) {
            push_paragraph(target, block);
        }
        push_paragraph(target, page_break_paragraph());
    }

    if config.table_of_contents {
        for block in toc_blocks(documents) {
            push_paragraph(target, block);
        }
        push_paragraph(target, page_break_paragraph());
    }
}

fn push_paragraph(target: &mut Docx, paragraph: Paragraph) {
    target
        .document
        .children
        .push(DocumentChild::Paragraph(Box::new(paragraph)));
}
