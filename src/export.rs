// src/export.rs
//! Filesystem layout and remote key construction for the rendered export.
//! Both derive the `YYYY/MM/DD` hierarchy from the report date string, so a
//! given date always lands in the same place locally and remotely.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Split a `YYYY-MM-DD` date string into its three components.
///
/// Only the shape is checked (exactly three non-empty dash-separated parts);
/// range validation happened when the date was parsed upstream.
pub fn split_date(date_str: &str) -> Result<(&str, &str, &str)> {
    let mut parts = date_str.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None) if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
            Ok((y, m, d))
        }
        _ => bail!("malformed date {date_str:?}: expected YYYY-MM-DD"),
    }
}

/// Write the rendered document to `{base}/YYYY/MM/DD/{filename}`, creating
/// the directory hierarchy as needed. An existing file for the same day is
/// overwritten, so re-running an export is safe.
pub fn write_hotspots_file<P: AsRef<Path>>(
    base: P,
    date_str: &str,
    filename: &str,
    content: &str,
) -> Result<PathBuf> {
    let (y, m, d) = split_date(date_str)?;
    let dir = base.as_ref().join(y).join(m).join(d);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(filename);
    fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Build the object-store key `{prefix}/YYYY/MM/DD/{filename}`. The prefix is
/// trimmed of surrounding slashes and whitespace; empty segments (including
/// an empty prefix) are simply skipped, so the key never starts with or
/// doubles a slash.
pub fn build_remote_key(prefix: &str, date_str: &str, filename: &str) -> Result<String> {
    let prefix = prefix.trim().trim_matches('/');
    let (y, m, d) = split_date(date_str)?;
    let key = [prefix, y, m, d, filename]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    Ok(key)
}
