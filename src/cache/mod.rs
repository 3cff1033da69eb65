//! Cache module for drive-audit
//!
//! This module provides the one-shot metadata cache: the record set parsed
//! from a Drive export is stored on disk so subsequent runs against the
//! same export skip the parse entirely.
//!
//! The cache uses bincode for serialization and lives in a per-user cache
//! directory, one file per export path. Cache failures are never fatal:
//! a missing, corrupt, or stale cache simply falls back to reparsing.

pub mod model;


pub use model::{CacheHeader, RecordCache};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::FileRecord;

/// Get the cache root directory
///
/// Resolution order:
/// 1. `DRIVE_AUDIT_CACHE_DIR` environment variable, if set
/// 2. `XDG_CACHE_HOME` (or `~/.cache`) under a `drive-audit` subdirectory
/// 3. The system temp directory as a last resort
pub fn cache_root() -> PathBuf {
    if let Ok(dir) = std::env::var("DRIVE_AUDIT_CACHE_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        return PathBuf::from(xdg).join("drive-audit");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".cache").join("drive-audit");
    }
    std::env::temp_dir().join("drive-audit-cache")
}

/// Cache file location for a given export path
pub fn cache_path(cache_dir: &Path, export: &Path) -> PathBuf {
    cache_dir.join(format!("{:016x}.bin", model::path_hash(export)))
}

/// Load cached records for `export`, if a valid cache exists
///
/// Returns `None` when there is no cache, the cache cannot be read, or the
/// header says it should be invalidated (version mismatch, TTL expiry,
/// export path change, or export mtime change). An invalidated cache file
/// is removed so the next save starts clean.
pub fn load_cache(cache_dir: &Path, export: &Path, ttl_seconds: u64) -> Option<Vec<FileRecord>> {
    let path = cache_path(cache_dir, export);
    if !path.exists() {
        return None;
    }

    let cache = match load_cache_from_file(&path) {
        Ok(cache) => cache,
        // If loading fails, fall back to reparsing (cache will be rebuilt)
        Err(_) => return None,
    };

    if cache.header.should_invalidate(export, ttl_seconds) {
        eprintln!("🗑️  Cache invalidated (version mismatch, TTL expired, or export changed)");
        let _ = fs::remove_file(&path);
        return None;
    }

    Some(cache.records)
}

/// Save parsed records to the cache
///
/// The payload is written to a temporary file and atomically renamed into
/// place, so an interrupted run never leaves a torn cache behind.
pub fn save_cache(cache_dir: &Path, export: &Path, records: &[FileRecord]) -> Result<()> {
    let path = cache_path(cache_dir, export);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache directory: {}", parent.display()))?;
    }

    let cache = RecordCache {
        header: CacheHeader::new(export.to_path_buf()),
        records: records.to_vec(),
    };
    let data = bincode::serialize(&cache).context("Failed to serialize cache data")?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, &data)
        .with_context(|| format!("Failed to write cache file: {}", temp_path.display()))?;
    fs::rename(&temp_path, &path).with_context(|| {
        format!(
            "Failed to move cache file from {} to {}",
            temp_path.display(),
            path.display()
        )
    })
}

/// Invalidate (remove) the cache file for a given export path
///
/// # Returns
/// * `Result<bool>` - True if a cache file was removed, false if none existed
pub fn invalidate_cache(cache_dir: &Path, export: &Path) -> Result<bool> {
    let path = cache_path(cache_dir, export);
    if path.exists() {
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove cache file: {}", path.display()))?;
        Ok(true)
    } else {
        Ok(false)
    }
}

fn load_cache_from_file(path: &Path) -> Result<RecordCache> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to open cache file: {}", path.display()))?;
    bincode::deserialize(&data)
        .with_context(|| format!("Failed to deserialize cache from: {}", path.display()))
}
