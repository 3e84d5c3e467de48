//! CLI argument parsing for docxcat.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.

use clap::Parser;
use std::path::PathBuf;

use docxcat::config::{Config, CoverPage, OverwriteMode};
use docxcat::error::{DocxCatError, Result};
use docxcat::utils;

/// Concatenate Word documents into a single file.
///
/// docxcat merges multiple `.docx` files in order, optionally adding a
/// cover page, a table of contents, page breaks, separators, and numbered
/// headings between documents. Styles from the source documents are
/// preserved in the output.
#[derive(Parser, Debug)]
#[command(name = "docxcat")]
#[command(version)]
#[command(about = "Concatenate Word documents into a single file", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input documents to merge (in order)
    ///
    /// Specify multiple files or use glob patterns.
    /// Files are merged in the order provided.
    ///
    /// Examples:
    ///   docxcat intro.docx body.docx -o report.docx
    ///   docxcat chapter*.docx -o book.docx
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output file path
    ///
    /// The merged document will be written to this location.
    /// Use --force to overwrite existing files without confirmation.
    #[arg(short, long, value_name = "FILE", default_value = "merged.docx")]
    pub output: PathBuf,

    /// Merge every .docx file found in a directory
    ///
    /// Files are picked up in alphabetical order, after any directly
    /// specified inputs. Word lock files (~$...) are ignored.
    #[arg(long, value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Read input file list from a file (one path per line)
    ///
    /// Lines starting with '#' are comments. Paths from the file are
    /// appended after direct inputs and folder matches.
    #[arg(long, value_name = "FILE")]
    pub input_list: Option<PathBuf>,

    /// Dry run - validate inputs and preview the merge without writing
    ///
    /// Validates that all input files exist and are readable documents,
    /// then displays what the merge operation would do without
    /// actually creating the output file.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show detailed information about each document
    #[arg(short, long)]
    pub verbose: bool,

    /// Force overwrite of existing output file without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite existing output file
    ///
    /// If the output file already exists, exit with an error
    /// instead of prompting or overwriting.
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    /// Useful for scripts and automation.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Do not insert a page break between documents
    #[arg(long)]
    pub no_page_breaks: bool,

    /// Insert a horizontal separator line between documents
    #[arg(long)]
    pub separators: bool,

    /// Prefix each document with a numbered heading ("1. Name")
    #[arg(long)]
    pub numerate: bool,

    /// Do not import styles from source documents
    ///
    /// By default, named styles (headings, quotes, etc.) are carried
    /// into the output so copied content keeps its formatting.
    #[arg(long)]
    pub no_styles: bool,

    /// Add a cover page with this title
    #[arg(long, value_name = "TEXT")]
    pub cover_title: Option<String>,

    /// Subtitle for the cover page
    #[arg(long, value_name = "TEXT", requires = "cover_title")]
    pub cover_subtitle: Option<String>,

    /// Author line for the cover page
    #[arg(long, value_name = "TEXT", requires = "cover_title")]
    pub cover_author: Option<String>,

    /// Date line for the cover page
    #[arg(long, value_name = "TEXT", requires = "cover_title")]
    pub cover_date: Option<String>,

    /// Generate a table of contents listing the merged documents
    #[arg(long)]
    pub toc: bool,

    /// Stop at the first failing document instead of skipping it
    ///
    /// By default, documents that fail to load are skipped with a
    /// warning and the merge continues with the remaining files.
    #[arg(long)]
    pub stop_on_error: bool,

    /// Skip content analysis during validation
    ///
    /// Analysis counts paragraphs, tables, and images per document and
    /// feeds the page estimates shown in the table of contents.
    #[arg(long)]
    pub no_analyze: bool,

    /// Print the merge summary as JSON on completion
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Convert CLI arguments and resolved inputs into a validated Config.
    pub fn to_config(&self, inputs: Vec<PathBuf>) -> Result<Config> {
        let overwrite_mode = if self.force {
            OverwriteMode::Force
        } else if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        let cover = self.cover_title.as_ref().map(|title| {
            CoverPage::new(
                title.clone(),
                self.cover_subtitle.clone(),
                self.cover_author.clone(),
                self.cover_date.clone(),
            )
        });

        // Keep the output recognizable as a Word document.
        let mut output = self.output.clone();
        let has_docx_ext = output
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("docx"));
        if !has_docx_ext {
            output.set_extension("docx");
        }

        let config = Config {
            inputs,
            output,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            overwrite_mode,
            page_breaks: !self.no_page_breaks,
            separators: self.separators,
            numerate: self.numerate,
            preserve_styles: !self.no_styles,
            cover,
            table_of_contents: self.toc,
            stop_on_error: self.stop_on_error,
            auto_analyze: !self.no_analyze,
        };

        config.validate().map_err(|e| {
            DocxCatError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }

    /// Validate CLI arguments before processing.
    ///
    /// Performs early validation that doesn't require file I/O.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() && self.folder.is_none() && self.input_list.is_none() {
            return Err(DocxCatError::invalid_config(
                "No input files specified (give files, --folder, or --input-list)",
            ));
        }

        if let Some(folder) = &self.folder
            && folder.as_os_str().is_empty()
        {
            return Err(DocxCatError::invalid_config("Folder path is empty"));
        }

        Ok(())
    }

    /// Get all input paths, in merge order.
    ///
    /// Combines, in this order:
    /// - Direct input arguments (glob patterns expanded)
    /// - `.docx` files from --folder, alphabetically
    /// - Paths from the --input-list file
    pub async fn get_all_inputs(&self) -> Result<Vec<PathBuf>> {
        let mut all_inputs = utils::collect_paths_for_patterns(&self.inputs)?;

        if let Some(folder) = &self.folder {
            all_inputs.extend(utils::find_docx_in_dir(folder)?);
        }

        if let Some(input_list_path) = &self.input_list {
            all_inputs.extend(self.read_input_list(input_list_path).await?);
        }

        if all_inputs.is_empty() {
            return Err(DocxCatError::NoDocumentsToMerge);
        }

        Ok(all_inputs)
    }

    /// Read input paths from a file, one per line.
    ///
    /// Lines starting with '#' are treated as comments and ignored.
    /// Empty lines are skipped.
    async fn read_input_list(&self, path: &PathBuf) -> Result<Vec<PathBuf>> {
        use tokio::fs::File;
        use tokio::io::{AsyncBufReadExt, BufReader};

        let file = File::open(path)
            .await
            .map_err(|e| DocxCatError::FailedToReadInputList {
                path: path.clone(),
                source: e,
            })?;

        let reader = BufReader::new(file);
        let mut lines = reader.lines();
        let mut paths = Vec::new();

        while let Some(line) =
            lines
                .next_line()
                .await
                .map_err(|e| DocxCatError::FailedToReadInputList {
                    path: path.clone(),
                    source: e,
                })?
        {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            paths.push(PathBuf::from(line));
        }

        Ok(paths)
    }
}
