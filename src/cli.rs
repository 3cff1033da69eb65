//! CLI interface definitions for the `drive-audit` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`OutputFormat`]: an enum selecting the report format (`excel` or `tsv`)
//!
//! The `Args` struct is used in `main.rs` and other modules to control
//! behavior such as filtering, cache handling, and output formatting.
//!
//! # Example
//!
//! ```bash
//! drive-audit --type tsv --only-includes alice@example.com -f audit.tsv
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `drive-audit` permission report tool.
///
/// This struct defines all available command-line options and flags
/// for controlling which records are reported and how the report is written.
#[derive(Parser, Debug)]
#[command(name = "drive-audit", version, about)]
pub struct Args {
    /// Report format to write (excel or tsv)
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub format: OutputFormat,

    /// Write the report to FILE instead of the per-format default
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Drive metadata export to read (files plus permissions, JSON)
    #[arg(long, value_name = "FILE", default_value = "drive-export.json")]
    pub input: PathBuf,

    /// Keep only files whose owners or permissions contain this substring
    #[arg(long = "only-includes", value_name = "NAME")]
    pub only_includes: Option<String>,

    /// Print each file to stderr as its metadata is read
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable the metadata cache and force a full reparse of the export
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,

    /// Cache TTL in seconds (default: 604800 = 7 days)
    #[arg(long, default_value_t = 604800)]
    pub cache_ttl: u64,
}

impl Args {
    /// Resolves the report path: `--file` if given, otherwise the
    /// format-specific default.
    pub fn output_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }
}

/// Enum for selecting the report serialization format.
///
/// # Variants
/// * `Excel` - Single-sheet spreadsheet workbook; multi-value cells keep
///   embedded line breaks
/// * `Tsv` - Tab-separated UTF-8 text; multi-value cells are flattened
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    Excel,
    Tsv,
}

impl OutputFormat {
    /// Default report file name for this format.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Excel => "result.xlsx",
            OutputFormat::Tsv => "result.tsv",
        }
    }
}
