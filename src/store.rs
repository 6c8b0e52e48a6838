// src/store.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::NewsData;

/// Where daily snapshots come from. The exporter only ever asks for whole
/// days; a missing day is `Ok(None)`, not an error, because the first run in
/// a deployment has no yesterday.
pub trait SnapshotStore: Send + Sync {
    fn load_day(&self, date_str: &str) -> Result<Option<NewsData>>;
}

/// Snapshot store backed by one JSON file per day, `{dir}/{YYYY-MM-DD}.json`,
/// as written by the upstream scraper.
pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn day_path(&self, date_str: &str) -> PathBuf {
        self.dir.join(format!("{date_str}.json"))
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load_day(&self, date_str: &str) -> Result<Option<NewsData>> {
        let path = self.day_path(date_str);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read snapshot {}", path.display()))?;
        let mut data: NewsData = serde_json::from_str(&raw)
            .with_context(|| format!("parse snapshot {}", path.display()))?;

        // Snapshot files omit the per-item source_id; the platform key of the
        // surrounding map is authoritative.
        for (platform_id, items) in &mut data.items {
            for item in items {
                if item.source_id.is_empty() {
                    item.source_id = platform_id.clone();
                }
            }
        }
        Ok(Some(data))
    }
}
