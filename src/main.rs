//! docxcat - Concatenate Word documents into a single file.
//!
//! A CLI tool for merging `.docx` documents with style preservation.

mod cli;

use clap::Parser;
use std::process;

use crate::cli::Cli;
use docxcat::config::Config;
use docxcat::error::DocxCatError;
use docxcat::io::DocxWriter;
use docxcat::merge::{MergeResult, Merger};
use docxcat::output::{
    OutputFormatter, ProgressBar, ProgressStyle, create_formatter, display_merge_summary,
    display_validation_summary,
};
use docxcat::utils::format_file_size;
use docxcat::validation::Validator;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    match run(cli).await {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code());
        }
    }
}

/// Main application logic.
///
/// Returns the process exit code: zero on success, nonzero when the merge
/// was halted early by stop-on-error.
async fn run(cli: Cli) -> Result<i32, DocxCatError> {
    // Validate CLI arguments
    cli.validate()?;

    // Resolve all inputs (globs, --folder, --input-list)
    let all_inputs = cli.get_all_inputs().await?;

    // Convert CLI to config
    let config = cli.to_config(all_inputs)?;

    // Create output formatter
    let formatter = create_formatter(&config);

    // Print header
    if formatter.should_print() {
        formatter.section(&format!("{} v{}", docxcat::NAME, docxcat::VERSION));
        formatter.blank_line();
    }

    // Validate inputs
    formatter.info("Validating input documents...");
    let validator = if config.auto_analyze {
        Validator::new()
    } else {
        Validator::without_analysis()
    };
    validator.validate_config(&config)?;
    let validation_summary = validator.validate_files(&config.inputs).await?;

    if formatter.should_print() {
        display_validation_summary(&formatter, &validation_summary);
        formatter.blank_line();
    }

    // Validate output
    validator.validate_output(&config)?;

    // Handle output file existence
    if !config.dry_run {
        handle_output_overwrite(&config, &formatter)?;
    }

    // Dry run mode - show the merge plan and stop
    if config.dry_run {
        formatter.section("Merge plan");
        for (i, doc) in validation_summary.documents.iter().enumerate() {
            let mut line = format!("{} ({})", doc.display_name, doc.formatted_size());
            if doc.analyzed {
                line.push_str(&format!(
                    ", {} paragraphs, ~{} pages",
                    doc.paragraph_count, doc.page_estimate
                ));
            }
            formatter.list_item(i + 1, &line);
        }
        formatter.blank_line();
        formatter.success("Dry run completed successfully");
        formatter.info(&format!("  Output would be: {}", config.output.display()));
        formatter.info("  Run without --dry-run to create the merged document");
        return Ok(0);
    }

    // Perform the merge
    formatter.info("Merging documents...");

    let result = merge_with_progress(&config, &validation_summary.documents, &formatter).await?;

    if formatter.should_print() {
        formatter.blank_line();
        display_merge_summary(&formatter, &result.summary);
    }

    // Write the output
    formatter.info(&format!("Writing to: {}", config.output.display()));

    let summary = result.summary;
    let writer = DocxWriter::new();
    let write_stats = writer.save_with_stats(result.document, &config.output).await?;

    if formatter.should_print() {
        formatter.blank_line();
        formatter.success(&format!(
            "Successfully created {} ({})",
            config.output.display(),
            format_file_size(write_stats.file_size)
        ));

        if formatter.is_verbose() {
            formatter.blank_line();
            formatter.section("Statistics");
            formatter.detail(
                "Documents merged",
                &summary.documents_processed.to_string(),
            );
            formatter.detail("Documents skipped", &summary.documents_skipped.to_string());
            formatter.detail(
                "Input size",
                &format_file_size(validation_summary.total_size),
            );
            formatter.detail("Output size", &format_file_size(write_stats.file_size));
            formatter.detail(
                "Merge time",
                &format!("{:.2}s", summary.elapsed.as_secs_f64()),
            );
            formatter.detail(
                "Write time",
                &format!("{:.2}s", write_stats.write_time.as_secs_f64()),
            );
        }
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| DocxCatError::other(format!("Failed to serialize summary: {e}")))?;
        println!("{json}");
    }

    // A halted merge still produced output, but scripts need to know.
    Ok(if summary.halted { 1 } else { 0 })
}

/// Run the merge with a progress bar attached.
async fn merge_with_progress(
    config: &Config,
    documents: &[docxcat::descriptor::DocumentDescriptor],
    formatter: &OutputFormatter,
) -> Result<MergeResult, DocxCatError> {
    let mut progress = if formatter.should_print() {
        ProgressBar::new(documents.len(), ProgressStyle::Bar)
    } else {
        ProgressBar::disabled()
    };

    let merger = Merger::new(config.clone());
    let result = merger
        .merge_with_progress(documents, |done, _total, name| {
            progress.set_message(name.to_string());
            progress.update(done);
        })
        .await;

    progress.clear();
    result
}

/// Handle output file overwrite scenarios.
fn handle_output_overwrite(
    config: &Config,
    formatter: &OutputFormatter,
) -> Result<(), DocxCatError> {
    use docxcat::config::OverwriteMode;

    // Check if output exists
    if !config.output.exists() {
        return Ok(());
    }

    match config.overwrite_mode {
        OverwriteMode::Force => {
            // Just overwrite, no questions asked
            Ok(())
        }
        OverwriteMode::NoClobber => {
            // Error if file exists
            Err(DocxCatError::output_exists(config.output.clone()))
        }
        OverwriteMode::Prompt => {
            // Ask user for confirmation
            if formatter.is_quiet() {
                // In quiet mode, treat as no-clobber
                return Err(DocxCatError::output_exists(config.output.clone()));
            }

            formatter.warning(&format!(
                "Output file already exists: {}",
                config.output.display()
            ));

            // Simple yes/no prompt
            use std::io::{self, Write};
            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut response = String::new();
            io::stdin()
                .read_line(&mut response)
                .map_err(|err| DocxCatError::other(format!("Failed to read input: {err}")))?;

            let response = response.trim().to_lowercase();
            if response == "y" || response == "yes" {
                Ok(())
            } else {
                Err(DocxCatError::Cancelled)
            }
        }
    }
}
