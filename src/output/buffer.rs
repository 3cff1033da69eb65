//! In-memory row buffer shared by the report writers.
//!
//! The buffer is an ordered table of already-transformed text cells. Rows
//! grow on demand: a write to row index `N` beyond the current length
//! allocates empty rows up to and including `N`, so sparse writes never
//! fail and iteration at save time stays in row order. Every row is
//! allocated at the fixed schema width, which keeps short rows from ever
//! reaching the serializers.

use anyhow::{Result, bail};

/// Ordered, growable table of text cells with a fixed column count.
#[derive(Debug, Clone)]
pub struct RowBuffer {
    width: usize,
    rows: Vec<Vec<String>>,
}

impl RowBuffer {
    /// Creates an empty buffer whose rows hold `width` cells each.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// Stores `text` at `(row, col)`, overwriting any prior value.
    ///
    /// Allocates empty intervening rows when `row` is beyond the current
    /// length. Rejects a column index outside the schema width.
    pub fn set(&mut self, row: usize, col: usize, text: String) -> Result<()> {
        if col >= self.width {
            bail!(
                "column index {} out of range (report has {} columns)",
                col,
                self.width
            );
        }
        if row >= self.rows.len() {
            let width = self.width;
            self.rows.resize_with(row + 1, || vec![String::new(); width]);
        }
        self.rows[row][col] = text;
        Ok(())
    }

    /// All rows in insertion order. Every row has exactly the schema width.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows currently allocated.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no row has been written yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
