//! Spreadsheet writer for the permission report.
//!
//! Produces a single-sheet workbook via [`rust_xlsxwriter`]. The spreadsheet
//! format supports embedded line breaks within a cell, so list values
//! (multiple owners or permissions for one file) are joined with `\n` and
//! stack visually inside one cell.

use crate::data::CellValue;
use crate::output::{CellWriter, COLUMNS, RowBuffer};
use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::path::PathBuf;

/// Writes the report as a single-sheet `.xlsx` workbook.
pub struct ExcelWriter {
    path: PathBuf,
    buffer: RowBuffer,
}

impl ExcelWriter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            buffer: RowBuffer::new(COLUMNS.len()),
        }
    }
}

impl CellWriter for ExcelWriter {
    fn set(&mut self, row: usize, col: usize, value: CellValue) -> Result<()> {
        let text = match value {
            CellValue::Text(v) => v,
            CellValue::List(items) => items.join("\n"),
        };
        self.buffer.set(row, col, text)
    }

    fn save(&self) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold();
        // Wrapped cells render the \n-joined lists as stacked lines.
        let body_format = Format::new().set_text_wrap();

        for (col, label) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *label, &header_format)?;
        }

        for (row, cells) in self.buffer.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                worksheet.write_string_with_format((row + 1) as u32, col as u16, cell, &body_format)?;
            }
        }

        workbook
            .save(&self.path)
            .with_context(|| format!("Failed to write workbook: {}", self.path.display()))
    }
}
