//! Body block preparation and generated decoration blocks.
//!
//! Converts a source document body into the block list that gets appended
//! to the output, and builds the synthetic paragraphs (page breaks,
//! separator lines, numbered headings) inserted around documents.

use crate::utils;
use docx_rs::{AlignmentType, BreakType, Docx, DocumentChild, Paragraph, Run};

/// Width of the separator line, in characters.
const SEPARATOR_WIDTH: usize = 80;

/// Counts of blocks copied from a single source document.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockCounts {
    /// Paragraphs copied.
    pub paragraphs: usize,
    /// Tables copied.
    pub tables: usize,
    /// Inline images carried inside copied paragraphs.
    pub images: usize,
}

/// A paragraph whose only content is a page break.
pub fn page_break_paragraph() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

/// A centered horizontal rule used between documents.
pub fn separator_paragraph() -> Paragraph {
    let line = "\u{2500}".repeat(SEPARATOR_WIDTH);
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_text(line).size(16).color("808080"))
}

/// A numbered heading introducing document `number` in the output.
pub fn heading_paragraph(number: usize, name: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_text(format!("{number}. {name}")).size(28).bold())
}

/// Select the body blocks of a document that should be copied.
///
/// Leading empty paragraphs are skipped entirely, and empty paragraphs in
/// the interior are dropped unless they carry an explicit page break. The
/// result may be empty when the document has no real content.
pub fn blocks_for_copy(source: &Docx) -> (Vec<DocumentChild>, BlockCounts) {
    let mut blocks = Vec::new();
    let mut counts = BlockCounts::default();
    let mut seen_content = false;

    for child in &source.document.children {
        match child {
            DocumentChild::Paragraph(p) => {
                if utils::paragraph_is_empty(p) {
                    // Before the first real block nothing is kept. After
                    // it, an empty paragraph only survives if it carries a
                    // page break the author put there deliberately.
                    if !seen_content || !utils::paragraph_has_page_break(p) {
                        continue;
                    }
                } else {
                    seen_content = true;
                    counts.paragraphs += 1;
                    counts.images += utils::paragraph_image_count(p);
                }
                blocks.push(child.clone());
            }
            DocumentChild::Table(_) => {
                seen_content = true;
                counts.tables += 1;
                blocks.push(child.clone());
            }
            _ => {}
        }
    }

    (blocks, counts)
}

/// Drop empty paragraphs from the end of an output body.
///
/// Keeps the tail of the merged document clean before the next page break
/// is appended.
pub fn trim_trailing_empty(children: &mut Vec<DocumentChild>) {
    while let Some(last) = children.last() {
        let is_empty = match last {
            DocumentChild::Paragraph(p) => {
                utils::paragraph_is_empty(p) && !utils::paragraph_has_page_break(p)
            }
            _ => false,
        };
        if !is_empty {
            break;
        }
        children.pop();
    }
}
