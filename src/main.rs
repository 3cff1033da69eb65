//! Main entry point for the `drive-audit` CLI application.
//!
//! `drive-audit` reports who owns and who can access the files in a Google
//! Drive account. It reads an already-fetched Drive metadata export, formats
//! the owner and permission entries for each file, optionally filters them
//! by substring, and writes the result as a spreadsheet or TSV file.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Loads records from the metadata cache, or parses the export on a miss
//! - Delegates filtering and row population to [`report::write_report`]
//! - Saves the artifact through the selected [`output::CellWriter`]
//!
//! # Output Modes
//! - `--type excel`: single-sheet workbook, multi-value cells keep line breaks
//! - `--type tsv`: tab-separated text, multi-value cells flattened
//!
//! # Flags of Interest
//! - `--only-includes NAME`: keep files whose owners/permissions contain NAME
//! - `-f FILE`: report path (defaults to `result.xlsx` / `result.tsv`)
//! - `--no-cache`: force a full reparse of the export
//!
//! # Modules
//! - [`drive`] - export parsing and owner/permission formatting
//! - [`output`] - report writers and the shared row buffer

use anyhow::{Context, Result};
use clap::Parser;

mod cache;
pub mod cli;
use cli::Args;
mod data;
use data::FileRecord;
mod drive;
pub mod output;
mod report;

/// Loads the record set, consulting the metadata cache unless disabled.
///
/// Cache problems are never fatal: a miss or an unwritable cache directory
/// degrades to parsing the export directly.
fn load_records(args: &Args) -> Result<Vec<FileRecord>> {
    let cache_dir = cache::cache_root();

    if !args.no_cache {
        if let Some(records) = cache::load_cache(&cache_dir, &args.input, args.cache_ttl) {
            println!("📦 Using cached metadata for {}", args.input.display());
            return Ok(records);
        }
    }

    let records = drive::load_records(&args.input, args.verbose)?;

    if !args.no_cache {
        if let Err(err) = cache::save_cache(&cache_dir, &args.input, &records) {
            eprintln!("Warning: failed to save metadata cache: {err:#}");
        }
    }

    Ok(records)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let records = load_records(&args)?;

    let output_path = args.output_path();
    let mut writer = output::writer_for(args.format, output_path.clone());

    let rows = report::write_report(&records, args.only_includes.as_deref(), writer.as_mut())?;
    writer
        .save()
        .with_context(|| format!("Failed to save report: {}", output_path.display()))?;

    println!("Report saved to: {} ({rows} rows)", output_path.display());

    Ok(())
}
