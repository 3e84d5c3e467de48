//! Shared fixtures and helpers for integration tests.

use docx_rs::{
    Docx, DocumentChild, Paragraph, Pic, Run, Style, StyleType, Table, TableCell, TableRow,
    read_docx,
};
use docxcat::descriptor::DocumentDescriptor;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// A 1x1 transparent PNG, enough for image fixtures.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R', 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89, // IHDR
    0x00, 0x00, 0x00, 0x0D, b'I', b'D', b'A', b'T', 0x78, 0x9C, 0x63, 0x64, 0x60, 0xF8, 0x5F,
    0x0F, 0x00, 0x02, 0x87, 0x01, 0x80, 0xEB, 0x47, 0xBA, 0x92, // IDAT
    0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82, // IEND
];

/// Build a document with one paragraph per text entry.
pub fn docx_with_paragraphs(texts: &[&str]) -> Docx {
    let mut docx = Docx::new();
    for text in texts {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    docx
}

/// Build a document containing one paragraph and a 1x1 table.
pub fn docx_with_table(text: &str, cell_text: &str) -> Docx {
    let table = Table::new(vec![TableRow::new(vec![TableCell::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text(cell_text)),
    )])]);
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
        .add_table(table)
}

/// Build a document containing one paragraph with an inline image.
pub fn docx_with_image(text: &str) -> Docx {
    let pic = Pic::new(TINY_PNG);
    Docx::new().add_paragraph(
        Paragraph::new()
            .add_run(Run::new().add_text(text))
            .add_run(Run::new().add_image(pic)),
    )
}

/// Build a document that defines a custom paragraph style.
pub fn docx_with_style(text: &str, style_id: &str, style_name: &str) -> Docx {
    let mut docx = Docx::new()
        .add_paragraph(Paragraph::new().style(style_id).add_run(Run::new().add_text(text)));
    docx.styles
        .styles
        .push(Style::new(style_id, StyleType::Paragraph).name(style_name));
    docx
}

/// Write a document to `dir/name` and return its path.
pub fn write_docx(dir: &Path, name: &str, docx: Docx) -> PathBuf {
    let path = dir.join(name);
    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).unwrap();
    std::fs::write(&path, buf.into_inner()).unwrap();
    path
}

/// Write a document and build an unanalyzed descriptor for it.
pub fn write_fixture(dir: &Path, name: &str, docx: Docx) -> DocumentDescriptor {
    let path = write_docx(dir, name, docx);
    let size = std::fs::metadata(&path).unwrap().len();
    DocumentDescriptor::unanalyzed(&path, size)
}

/// Read a `.docx` file back from disk.
pub fn read_back(path: &Path) -> Docx {
    let bytes = std::fs::read(path).unwrap();
    read_docx(&bytes).unwrap()
}

/// Extract the non-empty body paragraph texts of a document, in order.
pub fn body_texts(docx: &Docx) -> Vec<String> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => {
                let text = docxcat::utils::paragraph_text(p);
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            _ => None,
        })
        .collect()
}

/// Count the tables in a document body.
pub fn table_count(docx: &Docx) -> usize {
    docx.document
        .children
        .iter()
        .filter(|c| matches!(c, DocumentChild::Table(_)))
        .count()
}
