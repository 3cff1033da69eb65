//! Data structures for representing Drive files and report cells.
//!
//! This module defines the core data structures used throughout the
//! `drive-audit` application: the logical record produced for each file in
//! the Drive account, and the cell value model consumed by the report
//! writers.

use serde::{Deserialize, Serialize};

/// One file from the Drive account, reduced to the fields the report emits.
///
/// # Fields
/// * `title` - Display name of the file
/// * `kind` - Resource kind reported by the API (e.g. `drive#file`)
/// * `mime_type` - MIME type of the file content
/// * `id` - Opaque file identifier
/// * `owners` - Formatted owner strings, `Display Name <email>`
/// * `permissions` - Formatted permission strings, `role:name <email>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub title: String,
    pub kind: String,
    pub mime_type: String,
    pub id: String,
    pub owners: Vec<String>,
    pub permissions: Vec<String>,
}

impl FileRecord {
    /// Returns true if any owner or permission string contains `needle`.
    ///
    /// This is the `--only-includes` predicate: the filter is matched against
    /// the access-control strings, not against the file title or id.
    pub fn matches(&self, needle: &str) -> bool {
        self.owners
            .iter()
            .chain(self.permissions.iter())
            .any(|s| s.contains(needle))
    }
}

/// A single report cell value before format-specific flattening.
///
/// # Variants
/// * `Text` - A plain text value, written as-is
/// * `List` - An ordered sequence of text values (multiple owners or
///   permissions for one file); each writer flattens it under its own rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(value: Vec<String>) -> Self {
        CellValue::List(value)
    }
}

impl From<&[String]> for CellValue {
    fn from(value: &[String]) -> Self {
        CellValue::List(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FileRecord {
        FileRecord {
            title: "quarterly-report".to_string(),
            kind: "drive#file".to_string(),
            mime_type: "application/vnd.google-apps.document".to_string(),
            id: "1aBcD".to_string(),
            owners: vec!["Alice Price <alice@example.com>".to_string()],
            permissions: vec![
                "owner:Alice Price <alice@example.com>".to_string(),
                "reader:Bob Tate <bob@example.com>".to_string(),
            ],
        }
    }

    #[test]
    fn test_matches_owner_substring() {
        let record = sample_record();
        assert!(record.matches("alice@example.com"));
        assert!(record.matches("Alice"));
    }

    #[test]
    fn test_matches_permission_substring() {
        let record = sample_record();
        assert!(record.matches("reader:"));
        assert!(record.matches("bob@"));
    }

    #[test]
    fn test_matches_ignores_title_and_id() {
        let record = sample_record();
        assert!(!record.matches("quarterly"));
        assert!(!record.matches("1aBcD"));
    }

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from("a"), CellValue::Text("a".to_string()));
        assert_eq!(
            CellValue::from(vec!["a".to_string(), "b".to_string()]),
            CellValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }
}
