//! Error types for docxcat.
//!
//! This module defines all error types that can occur while validating,
//! merging, and writing Word documents. Errors carry the affected file and
//! the processing stage so a failure among many inputs can be pinned down.
//!
//! # Error Categories
//!
//! - **I/O Errors**: file not found, permission denied, etc.
//! - **Document Errors**: invalid `.docx` containers, corrupted files
//! - **Validation Errors**: invalid arguments, configuration, or limits
//! - **Merge Errors**: problems during the merge or final save

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docxcat operations.
pub type Result<T> = std::result::Result<T, DocxCatError>;

/// Main error type for docxcat operations.
///
/// All errors in docxcat use this type, which provides detailed context
/// about what went wrong and where.
#[derive(Debug, Error)]
pub enum DocxCatError {
    /// Input file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input file is not accessible (permission denied, etc.).
    #[error("Cannot access file: {}\n  Reason: {source}", path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Input path is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Folder input path is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Path that is not a directory.
        path: PathBuf,
    },

    /// Failed to open a Word document.
    #[error("Failed to open document: {}\n  Reason: {reason}", path.display())]
    FailedToLoadDocument {
        /// Path to the document.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// File is not a valid `.docx` container or has no usable body.
    #[error("Corrupted or invalid document: {}\n  Details: {details}", path.display())]
    InvalidDocument {
        /// Path to the invalid document.
        path: PathBuf,
        /// Details about what is wrong.
        details: String,
    },

    /// A single input file exceeds the per-file size limit.
    #[error(
        "File exceeds the {limit_mib} MiB per-file limit: {} ({size} bytes)",
        path.display()
    )]
    FileTooLarge {
        /// Path to the oversized file.
        path: PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Limit in MiB.
        limit_mib: u64,
    },

    /// The combined inputs exceed the total size limit.
    #[error("Inputs exceed the {limit_mib} MiB total size limit ({size} bytes)")]
    TotalSizeExceeded {
        /// Combined size in bytes.
        size: u64,
        /// Limit in MiB.
        limit_mib: u64,
    },

    /// More input documents than the configured maximum.
    #[error("Too many input documents: {count} (limit is {limit})")]
    TooManyDocuments {
        /// Number of documents supplied.
        count: usize,
        /// Maximum number of documents allowed.
        limit: usize,
    },

    /// No valid documents were provided for merging.
    #[error("No input documents to merge")]
    NoDocumentsToMerge,

    /// Output file already exists and overwrite is not allowed.
    #[error(
        "Output file already exists: {}\n  \
         Use --force to overwrite or choose a different output path",
        path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create the output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to serialize the merged document into a `.docx` package.
    #[error("Failed to assemble output document: {reason}")]
    BuildFailed {
        /// Details from the document library.
        reason: String,
    },

    /// Failed to read the input list file.
    #[error("Failed to read input list file: {}\n  Reason: {source}", path.display())]
    FailedToReadInputList {
        /// Path to the input list file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Merge operation failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// User cancelled the operation.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl DocxCatError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadDocument error.
    pub fn failed_to_load(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadDocument {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InvalidDocument error.
    pub fn invalid_document(path: PathBuf, details: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path,
            details: details.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create a BuildFailed error.
    pub fn build_failed(reason: impl Into<String>) -> Self {
        Self::BuildFailed {
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (the batch can continue).
    ///
    /// Returns true for per-document errors that skip the affected file
    /// unless stop-on-error is configured.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FailedToLoadDocument { .. }
                | Self::InvalidDocument { .. }
                | Self::FileTooLarge { .. }
        )
    }

    /// Check if this error should stop all processing immediately.
    ///
    /// Returns true for fatal errors that always terminate.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NoDocumentsToMerge
                | Self::FailedToCreateOutput { .. }
                | Self::FailedToWrite { .. }
                | Self::BuildFailed { .. }
                | Self::Cancelled
        )
    }

    /// Get the exit code for this error.
    ///
    /// Returns the appropriate process exit code based on error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::NotADirectory { .. } => 2,
            Self::FailedToLoadDocument { .. } => 3,
            Self::InvalidDocument { .. } => 3,
            Self::FileTooLarge { .. } => 1,
            Self::TotalSizeExceeded { .. } => 1,
            Self::TooManyDocuments { .. } => 1,
            Self::NoDocumentsToMerge => 1,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::BuildFailed { .. } => 5,
            Self::FailedToReadInputList { .. } => 2,
            Self::MergeFailed { .. } => 6,
            Self::InvalidConfig { .. } => 1,
            Self::Cancelled => 130, // Standard exit code for SIGINT
            Self::Io { .. } => 5,
            Self::Other { .. } => 1,
        }
    }
}
