//! # docxcat
//!
//! A fast, reliable command-line tool and library for concatenating Word
//! (`.docx`) documents.
//!
//! docxcat merges multiple documents into one in a user-defined order,
//! optionally adding a cover page, a table of contents, page breaks,
//! separator lines, and numbered headings between documents. Named styles
//! from the sources are carried into the output, and per-document failures
//! are reported without losing the rest of the batch.
//!
//! ## Example
//!
//! ```no_run
//! use docxcat::config::Config;
//! use docxcat::merge::Merger;
//! use docxcat::validation::Validator;
//! use std::path::PathBuf;
//!
//! # async fn example() -> docxcat::Result<()> {
//! let config = Config::new(
//!     vec![PathBuf::from("intro.docx"), PathBuf::from("body.docx")],
//!     PathBuf::from("merged.docx"),
//! );
//!
//! let validator = Validator::new();
//! let summary = validator.validate_files(&config.inputs).await?;
//!
//! let merger = Merger::new(config.clone());
//! let result = merger.merge(&summary.documents).await?;
//!
//! let writer = docxcat::io::DocxWriter::new();
//! writer.save(result.document, &config.output).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod descriptor;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;
pub mod validation;

pub use config::Config;
pub use error::{DocxCatError, Result};

/// Name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
