//! Cover page generation.

use crate::config::CoverPage;
use docx_rs::{AlignmentType, Paragraph, Run};

/// Build the paragraphs of the cover page, without the trailing page break.
///
/// The title is rendered large and bold; subtitle, author, and date follow
/// in descending prominence. Absent fields produce no paragraph at all.
pub fn cover_blocks(cover: &CoverPage) -> Vec<Paragraph> {
    let mut blocks = Vec::new();

    // Push the title down from the top edge of the page.
    for _ in 0..4 {
        blocks.push(Paragraph::new());
    }

    blocks.push(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(cover.title.clone()).size(56).bold()),
    );

    if let Some(subtitle) = &cover.subtitle {
        blocks.push(Paragraph::new());
        blocks.push(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(subtitle.clone()).size(28).italic()),
        );
    }

    if let Some(author) = &cover.author {
        blocks.push(Paragraph::new());
        blocks.push(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(author.clone()).size(24)),
        );
    }

    if let Some(date) = &cover.date {
        blocks.push(Paragraph::new());
        blocks.push(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(date.clone()).size(24)),
        );
    }

    blocks
}
