//! Document merging.
//!
//! The [`Merger`] drives the merge: it loads each input, prepares its body
//! blocks, and appends them to the output with the configured decoration.
//! Submodules cover the moving parts: block preparation, cover page and
//! table of contents generation, and style import.

pub mod content;
pub mod cover;
pub mod merger;
pub mod styles;
pub mod toc;

pub use merger::{DocumentError, MergeResult, MergeStage, MergeSummary, Merger};

use crate::config::Config;
use crate::descriptor::DocumentDescriptor;
use crate::error::Result;

/// Merge documents with the given configuration.
///
/// Convenience wrapper over [`Merger::merge`].
pub async fn merge_documents(
    documents: &[DocumentDescriptor],
    config: Config,
) -> Result<MergeResult> {
    Merger::new(config).merge(documents).await
}
