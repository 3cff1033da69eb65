//! Drive metadata export parsing for `drive-audit`.
//!
//! This module handles:
//! - Deserializing a Drive v2 metadata export (a `files.list` payload whose
//!   items carry their `permissions.list` results) using `serde_json`
//! - Formatting owner and permission entries into the report's text form
//! - Progress spinner via `indicatif`
//!
//! The main entry point is [`load_records`], which returns one [`FileRecord`]
//! per file in the export, with owners formatted as `Display Name <email>`
//! and permissions as `role:name <email>`.
//!
//! Authentication and transport against the Drive API are outside this
//! tool: the export file is the already-fetched output of those calls.

use crate::data::FileRecord;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Top-level shape of the metadata export (`files.list` response).
#[derive(Debug, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub items: Vec<DriveFile>,
}

/// One file resource from the export.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub owners: Vec<User>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// An owner entry attached to a file resource.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
}

/// A permission entry attached to a file resource.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub role: String,
    pub name: Option<String>,
    pub email_address: Option<String>,
}

impl User {
    /// Report form of an owner: `Display Name <email>`.
    ///
    /// Either part may be absent in the API payload; missing parts degrade
    /// to the empty string rather than dropping the entry.
    pub fn to_owner_string(&self) -> String {
        format!(
            "{} <{}>",
            self.display_name.as_deref().unwrap_or(""),
            self.email_address.as_deref().unwrap_or("")
        )
    }
}

impl Permission {
    /// Report form of a permission: `role:name <email>`.
    pub fn to_permission_string(&self) -> String {
        format!(
            "{}:{} <{}>",
            self.role,
            self.name.as_deref().unwrap_or(""),
            self.email_address.as_deref().unwrap_or("")
        )
    }
}

impl DriveFile {
    fn into_record(self) -> FileRecord {
        let owners = self.owners.iter().map(User::to_owner_string).collect();
        let permissions = self
            .permissions
            .iter()
            .map(Permission::to_permission_string)
            .collect();
        FileRecord {
            title: self.title,
            kind: self.kind,
            mime_type: self.mime_type,
            id: self.id,
            owners,
            permissions,
        }
    }
}

/// Parses the metadata export at `path` into report records.
///
/// # Arguments
/// * `path` - The export file to read
/// * `verbose` - Print each file to stderr as it is processed
///
/// # Errors
/// Returns an error if the export cannot be read or is not a valid
/// `files.list` payload.
pub fn load_records(path: &Path, verbose: bool) -> Result<Vec<FileRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata export: {}", path.display()))?;
    let listing: FileList = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid metadata export: {}", path.display()))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} Reading file metadata... [{elapsed}]")
            .context("Failed to set progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let records: Vec<FileRecord> = listing
        .items
        .into_iter()
        .map(|file| {
            pb.tick();
            if verbose {
                pb.suspend(|| eprintln!("reading id: {}, title: {}...", file.id, file.title));
            }
            file.into_record()
        })
        .collect();

    pb.finish_with_message("Metadata read ✅");

    Ok(records)
}
