//! Table of contents generation.
//!
//! The table of contents is a static listing built from the document
//! descriptors at merge time. Entries carry the page estimate from
//! analysis when available.

use crate::descriptor::DocumentDescriptor;
use docx_rs::{AlignmentType, Paragraph, Run};

/// Build the table of contents paragraphs, one entry per document.
pub fn toc_blocks(documents: &[DocumentDescriptor]) -> Vec<Paragraph> {
    let mut blocks = Vec::new();

    blocks.push(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text("Table of Contents").size(32).bold()),
    );
    blocks.push(Paragraph::new());

    for (i, doc) in documents.iter().enumerate() {
        let mut entry = format!("{}. {}", i + 1, doc.display_name);
        if doc.analyzed {
            entry.push_str(&format!("  (~{} pages)", doc.page_estimate));
        }
        blocks.push(Paragraph::new().add_run(Run::new().add_text(entry).size(22)));
    }

    blocks
}
