//! Report assembly for `drive-audit`.
//!
//! This module owns the filter-and-populate pass: it walks the record set
//! once, drops records that fail the `--only-includes` filter, and writes
//! each surviving record into the selected [`CellWriter`] at monotonically
//! increasing row indices. Saving the artifact stays with the caller.

use crate::data::FileRecord;
use crate::output::CellWriter;
use anyhow::Result;

/// Populates `writer` with one row per record passing the filter.
///
/// # Arguments
/// * `records` - Parsed records in export order
/// * `filter` - Optional substring matched against owners and permissions
/// * `writer` - The format-specific report writer
///
/// # Returns
/// * `Result<usize>` - Number of rows written
pub fn write_report(
    records: &[FileRecord],
    filter: Option<&str>,
    writer: &mut dyn CellWriter,
) -> Result<usize> {
    let mut row = 0;
    for record in records {
        if let Some(needle) = filter {
            if !record.matches(needle) {
                continue;
            }
        }

        writer.set(row, 0, record.title.as_str().into())?;
        writer.set(row, 1, record.kind.as_str().into())?;
        writer.set(row, 2, record.mime_type.as_str().into())?;
        writer.set(row, 3, record.id.as_str().into())?;
        writer.set(row, 4, record.owners.as_slice().into())?;
        writer.set(row, 5, record.permissions.as_slice().into())?;
        row += 1;
    }
    Ok(row)
}
