//! Output formatting and display for docxcat.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Progress indicators
//! - Error and warning display
//! - Summary reports
//! - Quiet and verbose modes
//!
//! # Examples
//!
//! ```no_run
//! use docxcat::output::OutputFormatter;
//! use docxcat::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Starting merge operation");
//! formatter.success("Merge completed successfully");
//! # }
//! ```

pub mod formatter;
pub mod progress;

pub use formatter::{MessageLevel, OutputFormatter};
pub use progress::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::merge::MergeSummary;
use crate::utils::format_file_size;
use crate::validation::ValidationSummary;

/// Create an output formatter from configuration.
pub fn create_formatter(config: &Config) -> OutputFormatter {
    OutputFormatter::from_config(config)
}

/// Display validation summary to the user.
pub fn display_validation_summary(formatter: &OutputFormatter, summary: &ValidationSummary) {
    if summary.files_failed > 0 {
        formatter.warning(&format!(
            "Warning: {} file(s) failed validation",
            summary.files_failed
        ));
        for failure in &summary.failures {
            formatter.detail("Failed", &failure.message);
        }
    }

    formatter.info(&format!(
        "Validated {} file(s): {} paragraphs, {} tables, {}",
        summary.files_validated,
        summary.total_paragraphs,
        summary.total_tables,
        format_file_size(summary.total_size)
    ));
}

/// Display merge summary to the user.
pub fn display_merge_summary(formatter: &OutputFormatter, summary: &MergeSummary) {
    if summary.halted {
        formatter.warning("Merge stopped early because of an error");
    }

    for error in &summary.errors {
        formatter.warning(&format!(
            "Skipped '{}' during {}: {}",
            error.name, error.stage, error.message
        ));
    }

    formatter.info(&format!(
        "Merged {} document(s) in {:.2}s ({} skipped)",
        summary.documents_processed,
        summary.elapsed.as_secs_f64(),
        summary.documents_skipped
    ));

    formatter.detail("Paragraphs copied", &summary.paragraphs_copied.to_string());
    formatter.detail("Tables copied", &summary.tables_copied.to_string());
    formatter.detail("Images copied", &summary.images_copied.to_string());
    formatter.detail("Styles imported", &summary.styles_imported.to_string());
}
