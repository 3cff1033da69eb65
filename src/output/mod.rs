//! Modular output system for the `drive-audit` application.
//!
//! This module provides a pluggable output system with different writers
//! for persisting the permission report in various formats. Both writers
//! share the same logical model: cells are addressed by `(row, col)` and a
//! cell value is either plain text or a list of text values, with each
//! writer applying its own flattening rule at write time.
//!
//! # Available Writers
//!
//! - **Excel**: single-sheet spreadsheet workbook; list cells keep embedded
//!   line breaks so multiple owners/permissions stack within one cell
//! - **TSV**: tab-separated UTF-8 text; list cells are flattened to a single
//!   line because the format uses newline as its row terminator
//!
//! The writers transform values as they are stored rather than at save time,
//! so each format's flattening rule stays local to its writer and the save
//! step is a straight serialization of the buffer.

pub mod buffer;
pub mod excel;
pub mod tsv;

pub use buffer::RowBuffer;
pub use excel::ExcelWriter;
pub use tsv::TsvWriter;

use crate::cli::OutputFormat;
use crate::data::CellValue;
use anyhow::Result;
use std::path::PathBuf;

/// Column labels of the report, in output order.
///
/// Every record populates exactly these six columns; the writers emit them
/// as the header row/line of the artifact.
pub const COLUMNS: [&str; 6] = ["title", "kind", "mimeType", "id", "owner", "permissions"];

/// Common contract of the report writers.
///
/// A writer accumulates cells via [`CellWriter::set`] and persists the whole
/// report in a single terminal [`CellWriter::save`] call. There is no
/// intermediate state between the two phases.
pub trait CellWriter {
    /// Stores `value` at `(row, col)`, transforming it under the writer's
    /// flattening rule.
    ///
    /// Writing to a row index beyond the current length allocates empty
    /// intervening rows. A column index outside the fixed schema is an
    /// error.
    fn set(&mut self, row: usize, col: usize, value: CellValue) -> Result<()>;

    /// Writes the accumulated report to the writer's target path.
    ///
    /// The header is always emitted, even when no rows were stored. I/O
    /// failure is fatal to the run and is not retried.
    fn save(&self) -> Result<()>;
}

/// Constructs the writer for the selected report format.
pub fn writer_for(format: OutputFormat, path: PathBuf) -> Box<dyn CellWriter> {
    match format {
        OutputFormat::Excel => Box::new(ExcelWriter::new(path)),
        OutputFormat::Tsv => Box::new(TsvWriter::new(path)),
    }
}
