//! Loading Word documents from disk.
//!
//! The reader fetches file bytes asynchronously, then parses them with
//! `docx-rs`. Parsing is CPU-bound but fast relative to I/O for typical
//! document sizes, so it runs inline on the async task.

use crate::error::{DocxCatError, Result};
use docx_rs::{Docx, read_docx};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A document loaded into memory, with load metadata.
pub struct LoadedDocx {
    /// The parsed document.
    pub document: Docx,
    /// Path the document was read from.
    pub path: PathBuf,
    /// File size in bytes.
    pub file_size: u64,
    /// Time taken to read and parse.
    pub load_time: Duration,
}

/// Result of loading a single document in a batch.
pub type LoadResult = std::result::Result<LoadedDocx, (PathBuf, DocxCatError)>;

/// Aggregate statistics for a batch load.
#[derive(Debug, Default)]
pub struct LoadStatistics {
    /// Number of documents loaded successfully.
    pub success_count: usize,
    /// Number of documents that failed to load.
    pub failure_count: usize,
    /// Total wall time for the batch.
    pub total_time: Duration,
    /// Combined size of successfully loaded files.
    pub total_size: u64,
}

/// Reads and parses `.docx` files.
pub struct DocxReader {
    verify: bool,
}

impl DocxReader {
    /// Create a reader that verifies documents have a usable body.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that skips body verification.
    ///
    /// Useful when the caller only needs the parse to succeed, for example
    /// during a dry run.
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load and parse a single document.
    pub async fn load(&self, path: &Path) -> Result<LoadedDocx> {
        let start = Instant::now();

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocxCatError::file_not_found(path.to_path_buf())
            } else {
                DocxCatError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        if bytes.is_empty() {
            return Err(DocxCatError::invalid_document(
                path.to_path_buf(),
                "file is empty",
            ));
        }

        let document = read_docx(&bytes)
            .map_err(|e| DocxCatError::failed_to_load(path.to_path_buf(), e.to_string()))?;

        if self.verify && document.document.children.is_empty() {
            return Err(DocxCatError::invalid_document(
                path.to_path_buf(),
                "document body has no content",
            ));
        }

        Ok(LoadedDocx {
            document,
            path: path.to_path_buf(),
            file_size: bytes.len() as u64,
            load_time: start.elapsed(),
        })
    }

    /// Load a batch of documents in order, stopping at the first error.
    pub async fn load_sequential(&self, paths: &[PathBuf]) -> Result<Vec<LoadedDocx>> {
        let mut loaded = Vec::with_capacity(paths.len());
        for path in paths {
            loaded.push(self.load(path).await?);
        }
        Ok(loaded)
    }

    /// Load a batch of documents in order, collecting per-file outcomes.
    ///
    /// Unlike [`load_sequential`](Self::load_sequential), a failing file
    /// does not abort the batch; its error is recorded alongside successes.
    pub async fn load_all(&self, paths: &[PathBuf]) -> (Vec<LoadResult>, LoadStatistics) {
        let start = Instant::now();
        let mut results = Vec::with_capacity(paths.len());
        let mut stats = LoadStatistics::default();

        for path in paths {
            match self.load(path).await {
                Ok(loaded) => {
                    stats.success_count += 1;
                    stats.total_size += loaded.file_size;
                    results.push(Ok(loaded));
                }
                Err(e) => {
                    stats.failure_count += 1;
                    results.push(Err((path.clone(), e)));
                }
            }
        }

        stats.total_time = start.elapsed();
        (results, stats)
    }
}

impl Default for DocxReader {
    fn default() -> Self {
        Self::new()
    }
}
