//! Cache data structures and serialization logic
//!
//! This module defines the structures used for caching the parsed metadata
//! export between runs, so repeated reports over the same export skip the
//! JSON parse and formatting pass.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::data::FileRecord;

/// Cache header containing metadata about the cache file
///
/// Stores which export the cache was built from, when it was created, and
/// the tool version that created it; all three feed invalidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheHeader {
    /// The export file this cache was built from
    pub export_path: PathBuf,
    /// Unix timestamp when the cache was created
    pub creation_time: u64,
    /// Version of drive-audit that created this cache
    pub tool_version: String,
    /// Export file's modification time when the cache was created
    pub export_mtime: Option<u64>,
}

/// Complete cache structure: header plus the parsed record set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCache {
    /// Cache metadata
    pub header: CacheHeader,
    /// Records parsed from the export, in export order
    pub records: Vec<FileRecord>,
}

impl CacheHeader {
    /// Create a new cache header for the given export file
    pub fn new(export_path: PathBuf) -> Self {
        let creation_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let export_mtime = get_export_mtime(&export_path);

        Self {
            export_path,
            creation_time,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            export_mtime,
        }
    }

    /// Check if the cache should be invalidated based on version, TTL, and
    /// the export file's mtime
    ///
    /// # Arguments
    /// * `export_path` - The export file being reported on
    /// * `ttl_seconds` - Time to live in seconds (default 7 days = 604800)
    ///
    /// # Returns
    /// * `bool` - true if cache should be invalidated, false if still valid
    pub fn should_invalidate(&self, export_path: &Path, ttl_seconds: u64) -> bool {
        let current_version = env!("CARGO_PKG_VERSION");
        let current_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        // Check version mismatch
        if self.tool_version != current_version {
            return true;
        }

        // Check TTL
        if current_time.saturating_sub(self.creation_time) >= ttl_seconds {
            return true;
        }

        // Check export path mismatch
        if self.export_path != export_path {
            return true;
        }

        // Check whether the export itself changed since the cache was built
        match (get_export_mtime(export_path), self.export_mtime) {
            (Some(current), Some(cached)) => current != cached,
            (Some(_), None) => true,
            // Export unreadable now; let the parse surface the real error
            (None, _) => false,
        }
    }
}

/// Get the modification time of the export file as Unix seconds
pub fn get_export_mtime(path: &Path) -> Option<u64> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|mtime| mtime.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
}

/// Calculate a hash of a path for use in cache file names
pub fn path_hash(path: &Path) -> u64 {
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    hasher.finish()
}
