//! Document I/O.
//!
//! Async loading of `.docx` files and atomic writing of the merged output.

pub mod reader;
pub mod writer;

pub use reader::{DocxReader, LoadResult, LoadStatistics, LoadedDocx};
pub use writer::{DocxWriter, WriteOptions, WriteStatistics};
