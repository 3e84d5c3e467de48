//! Style table merging.
//!
//! Each source document carries its own style definitions. When style
//! preservation is on, styles are imported into the output document so
//! copied paragraphs keep their formatting. Collisions resolve in favor of
//! the first document that defined the style.

use docx_rs::Docx;

/// Import styles from `source` into `target`, first definition wins.
///
/// A style collides when either its identifier or its display name is
/// already present in the target. Returns the number of styles imported.
pub fn import_styles(target: &mut Docx, source: &Docx) -> usize {
    let mut imported = 0;

    for style in &source.styles.styles {
        let collides = target.styles.styles.iter().any(|existing| {
            existing.style_id == style.style_id || existing.name == style.name
        });
        if !collides {
            target.styles.styles.push(style.clone());
            imported += 1;
        }
    }

    imported
}
