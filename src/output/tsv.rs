//! Tab-delimited writer for the permission report.
//!
//! The TSV format uses newline as its row terminator, so list values cannot
//! keep embedded line breaks the way the spreadsheet writer does. Each list
//! element is stripped of carriage returns and line feeds and written with a
//! trailing comma, flattening the list into one line per row.

use crate::data::CellValue;
use crate::output::{CellWriter, COLUMNS, RowBuffer};
use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::path::PathBuf;

/// Writes the report as a tab-separated UTF-8 text file.
pub struct TsvWriter {
    path: PathBuf,
    buffer: RowBuffer,
}

impl TsvWriter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            buffer: RowBuffer::new(COLUMNS.len()),
        }
    }

    fn flatten(items: &[String]) -> String {
        let mut cell = String::new();
        for item in items {
            cell.push_str(&item.replace(['\r', '\n'], ""));
            cell.push(',');
        }
        cell
    }
}

impl CellWriter for TsvWriter {
    fn set(&mut self, row: usize, col: usize, value: CellValue) -> Result<()> {
        let text = match value {
            CellValue::Text(v) => v,
            CellValue::List(items) => Self::flatten(&items),
        };
        self.buffer.set(row, col, text)
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create report file: {}", self.path.display()))?;

        // Quoting stays off: cells were flattened at write time, so the
        // artifact is a plain tab join of the six columns per line.
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(file);

        writer.write_record(COLUMNS)?;
        for row in self.buffer.rows() {
            writer.write_record(row)?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush report file: {}", self.path.display()))
    }
}
