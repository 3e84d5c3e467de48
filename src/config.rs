//! Configuration types for merge operations.
//!
//! [`Config`] collects every knob for a merge run: input order, output path,
//! front matter (cover page and table of contents), per-document decoration
//! (page breaks, separators, numbering), and failure policy.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum number of documents accepted in a single merge.
pub const MAX_DOCUMENTS: usize = 50;

/// Maximum size of a single input file, in bytes (100 MiB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum combined size of all inputs, in bytes (500 MiB).
pub const MAX_TOTAL_SIZE: u64 = 500 * 1024 * 1024;

/// How to handle an existing output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverwriteMode {
    /// Ask the user before overwriting (default in interactive mode).
    #[default]
    Prompt,
    /// Overwrite without asking.
    Force,
    /// Never overwrite, fail if the file exists.
    NoClobber,
}

/// Text placed on the generated cover page.
///
/// Empty or whitespace-only optional fields are normalized to `None` so the
/// cover never renders blank lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverPage {
    /// Document title, rendered large and bold.
    pub title: String,
    /// Optional subtitle under the title.
    pub subtitle: Option<String>,
    /// Optional author line.
    pub author: Option<String>,
    /// Optional date line.
    pub date: Option<String>,
}

impl CoverPage {
    /// Create a cover page, trimming whitespace and dropping empty fields.
    pub fn new(
        title: impl Into<String>,
        subtitle: Option<String>,
        author: Option<String>,
        date: Option<String>,
    ) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        }

        Self {
            title: title.into().trim().to_string(),
            subtitle: clean(subtitle),
            author: clean(author),
            date: clean(date),
        }
    }
}

/// Configuration for a merge operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input document paths, in merge order.
    pub inputs: Vec<PathBuf>,

    /// Output file path.
    pub output: PathBuf,

    /// Validate inputs and show the merge plan without writing anything.
    pub dry_run: bool,

    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-error output.
    pub quiet: bool,

    /// How to handle an existing output file.
    pub overwrite_mode: OverwriteMode,

    /// Insert a page break between consecutive documents.
    pub page_breaks: bool,

    /// Insert a horizontal separator line between consecutive documents.
    pub separators: bool,

    /// Prefix each document with a numbered heading ("1. Name").
    pub numerate: bool,

    /// Import named styles from source documents into the output.
    pub preserve_styles: bool,

    /// Optional cover page placed before all content.
    pub cover: Option<CoverPage>,

    /// Generate a table of contents after the cover page.
    pub table_of_contents: bool,

    /// Stop the whole merge at the first failing document instead of
    /// skipping it.
    pub stop_on_error: bool,

    /// Analyze documents during validation (counts, page estimates).
    pub auto_analyze: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: PathBuf::from("merged.docx"),
            dry_run: false,
            verbose: false,
            quiet: false,
            overwrite_mode: OverwriteMode::default(),
            page_breaks: true,
            separators: false,
            numerate: false,
            preserve_styles: true,
            cover: None,
            table_of_contents: false,
            stop_on_error: false,
            auto_analyze: true,
        }
    }
}

impl Config {
    /// Create a configuration with the given inputs and output path.
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self {
            inputs,
            output,
            ..Default::default()
        }
    }

    /// Validate the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input files specified");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both verbose and quiet modes");
        }

        if self.inputs.len() > MAX_DOCUMENTS {
            bail!(
                "Too many input documents: {} (limit is {})",
                self.inputs.len(),
                MAX_DOCUMENTS
            );
        }

        // Writing the output over one of its own inputs would corrupt it.
        for input in &self.inputs {
            if input == &self.output {
                bail!(
                    "Output file cannot be one of the input files: {}",
                    input.display()
                );
            }
        }

        Ok(())
    }
}
