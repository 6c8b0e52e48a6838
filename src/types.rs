// src/types.rs
use std::collections::BTreeMap;

/// One reported occurrence of a story on one platform on one day, as collected
/// by the upstream scraper. Only `source_id` and `title` are guaranteed; the
/// remaining fields are filled in when the platform provides them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewsItem {
    /// Platform identifier, e.g. "weibo". Snapshot files may omit it per item
    /// because the platform key of the surrounding map is authoritative; the
    /// store backfills it on load.
    #[serde(default)]
    pub source_id: String,
    /// Platform display name. Not persisted upstream; resolved during flattening.
    #[serde(default)]
    pub source_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub mobile_url: Option<String>,
    /// Position on the platform's board. Absent and 0 both mean "unranked".
    #[serde(default)]
    pub rank: Option<u32>,
}

/// One day's complete snapshot: items keyed by platform, plus the platform
/// id-to-display-name mapping captured at scrape time.
///
/// `BTreeMap` keeps iteration order deterministic, which the exporter relies
/// on for stable line numbering across re-runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewsData {
    #[serde(default)]
    pub items: BTreeMap<String, Vec<NewsItem>>,
    #[serde(default)]
    pub id_to_name: BTreeMap<String, String>,
}

/// Flattened, name-resolved view of one `NewsItem`. Produced by the flattener
/// as a fresh record; the input snapshot is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatItem {
    pub source_id: String,
    /// Resolved display name; falls back to `source_id`, so never empty for
    /// items with a non-empty platform id.
    pub source_name: String,
    /// Raw title as scraped; cleaning happens at identity and export time.
    pub title: String,
    pub url: Option<String>,
    pub mobile_url: Option<String>,
    pub rank: Option<u32>,
}

/// One exported hotspot line, renumbered after dedup and truncation.
///
/// `idx` is the contract with the downstream model stage: it is the only
/// handle later steps may use to refer back to a story, so it is contiguous
/// from 1 with no gaps in every export.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AiHotspotLine {
    pub idx: u32,
    pub platform_id: String,
    pub platform_name: String,
    /// Cleaned title (markup and noise stripped).
    pub title: String,
    /// Empty string when the platform reported no URL.
    pub url: String,
    pub mobile_url: String,
    /// 0 when the platform reported no rank.
    pub rank: u32,
}
