//! Writing the merged document to disk.
//!
//! Packing a `Docx` into its zip container is synchronous in `docx-rs`, so
//! the writer serializes on a blocking task and hands only the byte buffer
//! to async file I/O. By default writes are atomic: the bytes land in a
//! temporary file next to the target, then a rename swaps it in.

use crate::error::{DocxCatError, Result};
use docx_rs::Docx;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Options controlling how output is written.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Write to a temporary file and rename into place.
    pub atomic: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { atomic: true }
    }
}

/// Statistics about a completed write.
#[derive(Debug)]
pub struct WriteStatistics {
    /// Time taken to serialize and write.
    pub write_time: Duration,
    /// Size of the written file in bytes.
    pub file_size: u64,
    /// Path the file was written to.
    pub output_path: PathBuf,
}

/// Writes merged documents to disk.
pub struct DocxWriter {
    options: WriteOptions,
}

impl DocxWriter {
    /// Create a writer with atomic writes enabled.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer that writes directly to the target path.
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions { atomic: false },
        }
    }

    /// Serialize a document into `.docx` bytes.
    pub fn to_bytes(document: Docx) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        document
            .build()
            .pack(&mut buf)
            .map_err(|e| DocxCatError::build_failed(e.to_string()))?;
        Ok(buf.into_inner())
    }

    /// Write a document to `path`.
    pub async fn save(&self, document: Docx, path: &Path) -> Result<()> {
        self.save_with_stats(document, path).await.map(|_| ())
    }

    /// Write a document to `path` and report write statistics.
    pub async fn save_with_stats(&self, document: Docx, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        let bytes = tokio::task::spawn_blocking(move || Self::to_bytes(document))
            .await
            .map_err(|e| DocxCatError::build_failed(format!("serialization task failed: {e}")))??;

        let file_size = bytes.len() as u64;

        if self.options.atomic {
            let tmp_path = path.with_extension("docx.tmp");
            tokio::fs::write(&tmp_path, &bytes).await.map_err(|e| {
                DocxCatError::FailedToCreateOutput {
                    path: tmp_path.clone(),
                    source: e,
                }
            })?;
            tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
                DocxCatError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;
        } else {
            tokio::fs::write(path, &bytes)
                .await
                .map_err(|e| DocxCatError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
        })
    }

    /// Check whether the output path looks writable.
    pub fn can_write(path: &Path) -> bool {
        if path.exists() {
            return !path
                .metadata()
                .map(|m| m.permissions().readonly())
                .unwrap_or(true);
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.exists(),
            _ => true, // Relative path in the current directory.
        }
    }

    /// Check whether the output path already exists.
    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    /// Remove the output file if it exists.
    pub async fn remove_if_exists(path: &Path) -> Result<()> {
        if path.exists() {
            tokio::fs::remove_file(path)
                .await
                .map_err(|e| DocxCatError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}
