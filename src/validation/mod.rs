//! Input and output validation.
//!
//! Before a merge, each input is checked on disk (exists, regular file,
//! non-empty, under the size limit) and parsed to confirm it is a real
//! `.docx` document. Validation never aborts on a bad file: every input
//! gets a verdict so the user sees all problems at once.

use crate::config::{Config, MAX_DOCUMENTS, MAX_FILE_SIZE, MAX_TOTAL_SIZE};
use crate::descriptor::DocumentDescriptor;
use crate::error::{DocxCatError, Result};
use crate::io::{DocxReader, DocxWriter};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file that failed validation, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationFailure {
    /// Path to the failing file.
    pub path: PathBuf,
    /// Why it failed.
    pub message: String,
}

/// Outcome of validating a batch of inputs.
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    /// Descriptors for the files that passed, in input order.
    pub documents: Vec<DocumentDescriptor>,
    /// Combined size of valid files, in bytes.
    pub total_size: u64,
    /// Combined paragraph count across analyzed files.
    pub total_paragraphs: usize,
    /// Combined table count across analyzed files.
    pub total_tables: usize,
    /// Number of files that passed.
    pub files_validated: usize,
    /// Number of files that failed.
    pub files_failed: usize,
    /// Details for each failing file.
    pub failures: Vec<ValidationFailure>,
}

/// Validates inputs, outputs, and configuration before a merge.
pub struct Validator {
    analyze: bool,
    reader: DocxReader,
}

impl Validator {
    /// Create a validator that analyzes document content.
    pub fn new() -> Self {
        Self {
            analyze: true,
            reader: DocxReader::new(),
        }
    }

    /// Create a validator that checks parseability without analysis.
    pub fn without_analysis() -> Self {
        Self {
            analyze: false,
            reader: DocxReader::new(),
        }
    }

    /// Validate a single input file and build its descriptor.
    pub async fn validate_file(&self, path: &Path) -> Result<DocumentDescriptor> {
        if !path.exists() {
            return Err(DocxCatError::file_not_found(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(DocxCatError::not_a_file(path.to_path_buf()));
        }

        let metadata =
            path.metadata()
                .map_err(|e| DocxCatError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        let file_size = metadata.len();

        if file_size == 0 {
            return Err(DocxCatError::invalid_document(
                path.to_path_buf(),
                "file is empty",
            ));
        }
        if file_size > MAX_FILE_SIZE {
            return Err(DocxCatError::FileTooLarge {
                path: path.to_path_buf(),
                size: file_size,
                limit_mib: MAX_FILE_SIZE / (1024 * 1024),
            });
        }

        let loaded = self.reader.load(path).await?;

        if self.analyze {
            Ok(DocumentDescriptor::from_docx(
                path,
                file_size,
                &loaded.document,
            ))
        } else {
            Ok(DocumentDescriptor::unanalyzed(path, file_size))
        }
    }

    /// Validate a batch of inputs, collecting all verdicts.
    ///
    /// Returns an error only when no file passes at all, or when the batch
    /// as a whole breaks a limit (document count, combined size).
    pub async fn validate_files(&self, paths: &[PathBuf]) -> Result<ValidationSummary> {
        if paths.len() > MAX_DOCUMENTS {
            return Err(DocxCatError::TooManyDocuments {
                count: paths.len(),
                limit: MAX_DOCUMENTS,
            });
        }

        let mut documents = Vec::new();
        let mut failures = Vec::new();

        for path in paths {
            match self.validate_file(path).await {
                Ok(descriptor) => documents.push(descriptor),
                Err(e) => failures.push(ValidationFailure {
                    path: path.clone(),
                    message: e.to_string(),
                }),
            }
        }

        if documents.is_empty() {
            return Err(DocxCatError::NoDocumentsToMerge);
        }

        let total_size: u64 = documents.iter().map(|d| d.file_size).sum();
        if total_size > MAX_TOTAL_SIZE {
            return Err(DocxCatError::TotalSizeExceeded {
                size: total_size,
                limit_mib: MAX_TOTAL_SIZE / (1024 * 1024),
            });
        }

        Ok(ValidationSummary {
            total_size,
            total_paragraphs: documents.iter().map(|d| d.paragraph_count).sum(),
            total_tables: documents.iter().map(|d| d.table_count).sum(),
            files_validated: documents.len(),
            files_failed: failures.len(),
            documents,
            failures,
        })
    }

    /// Validate the output path against the overwrite policy.
    pub fn validate_output(&self, config: &Config) -> Result<()> {
        use crate::config::OverwriteMode;

        if DocxWriter::exists(&config.output) {
            match config.overwrite_mode {
                OverwriteMode::Force => {}
                OverwriteMode::NoClobber => {
                    return Err(DocxCatError::output_exists(config.output.clone()));
                }
                // Prompting happens in the CLI layer; the library treats
                // Prompt like Force once validation is reached.
                OverwriteMode::Prompt => {}
            }
        }

        if !DocxWriter::can_write(&config.output) {
            return Err(DocxCatError::FailedToCreateOutput {
                path: config.output.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "output location is not writable",
                ),
            });
        }

        Ok(())
    }

    /// Validate the configuration itself.
    pub fn validate_config(&self, config: &Config) -> Result<()> {
        config
            .validate()
            .map_err(|e| DocxCatError::invalid_config(e.to_string()))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
