// src/dedup.rs
//! Flattening and daily-unique selection: turn a day's snapshot into an
//! ordered candidate list, drop stories already seen yesterday or earlier in
//! the same pass, truncate, renumber.

use std::collections::{BTreeMap, HashSet};

use crate::identity::Identity;
use crate::normalize::clean_title;
use crate::types::{AiHotspotLine, FlatItem, NewsData};

/// Sort key for items without a usable rank. Larger than any rank a platform
/// board actually reports, so unranked items always come after ranked ones.
pub const UNRANKED_SORT_KEY: u32 = 1_000_000;

fn rank_sort_key(rank: Option<u32>) -> u32 {
    match rank {
        Some(r) if r > 0 => r,
        _ => UNRANKED_SORT_KEY,
    }
}

/// Flatten a snapshot into fresh, name-resolved records in deterministic
/// order: rank ascending (unranked last), then platform id, then cleaned
/// title.
///
/// Display names resolve through `overrides` first, then the snapshot's own
/// `id_to_name`, then the platform id itself. Empty-string entries at any
/// level fall through to the next.
pub fn flatten_news(data: &NewsData, overrides: &BTreeMap<String, String>) -> Vec<FlatItem> {
    let mut flat: Vec<FlatItem> = Vec::new();
    for (platform_id, items) in &data.items {
        let source_name = overrides
            .get(platform_id)
            .filter(|n| !n.is_empty())
            .or_else(|| data.id_to_name.get(platform_id).filter(|n| !n.is_empty()))
            .cloned()
            .unwrap_or_else(|| platform_id.clone());
        for item in items {
            flat.push(FlatItem {
                source_id: item.source_id.clone(),
                source_name: source_name.clone(),
                title: item.title.clone(),
                url: item.url.clone(),
                mobile_url: item.mobile_url.clone(),
                rank: item.rank,
            });
        }
    }
    flat.sort_by_cached_key(|x| {
        (
            rank_sort_key(x.rank),
            x.source_id.clone(),
            clean_title(&x.title),
        )
    });
    flat
}

/// Select today's new hotspots: everything in `today` whose identity did not
/// appear in `yesterday`, with within-day repeats collapsed to their
/// first (best-ranked) occurrence.
///
/// Returns the renumbered export lines and the candidate count before
/// truncation. `max_items <= 0` disables truncation.
pub fn build_daily_unique_hotspots(
    today: &NewsData,
    yesterday: Option<&NewsData>,
    max_items: i64,
) -> (Vec<AiHotspotLine>, usize) {
    let today_items = flatten_news(today, &today.id_to_name);

    let mut yesterday_seen: HashSet<Identity> = HashSet::new();
    if let Some(prev) = yesterday {
        for item in flatten_news(prev, &prev.id_to_name) {
            yesterday_seen.insert(Identity::of(&item));
        }
    }

    // Cross-day first, then within-day. Order matters for the counters only;
    // the surviving set is the same either way.
    let mut unique: Vec<FlatItem> = Vec::new();
    let mut today_seen: HashSet<Identity> = HashSet::new();
    let mut cross_day_dropped = 0usize;
    let mut within_day_dropped = 0usize;
    for item in today_items {
        let identity = Identity::of(&item);
        if yesterday_seen.contains(&identity) {
            cross_day_dropped += 1;
            continue;
        }
        if !today_seen.insert(identity) {
            within_day_dropped += 1;
            continue;
        }
        unique.push(item);
    }

    let total_candidates = unique.len();
    if max_items > 0 {
        unique.truncate(max_items as usize);
    }
    tracing::debug!(
        cross_day_dropped,
        within_day_dropped,
        candidates = total_candidates,
        exported = unique.len(),
        "dedup pass"
    );

    let lines = unique
        .into_iter()
        .enumerate()
        .map(|(i, item)| AiHotspotLine {
            idx: (i + 1) as u32,
            platform_name: if item.source_name.is_empty() {
                item.source_id.clone()
            } else {
                item.source_name
            },
            platform_id: item.source_id,
            title: clean_title(&item.title),
            url: item.url.map(|u| u.trim().to_string()).unwrap_or_default(),
            mobile_url: item
                .mobile_url
                .map(|u| u.trim().to_string())
                .unwrap_or_default(),
            rank: item.rank.unwrap_or(0),
        })
        .collect();

    (lines, total_candidates)
}
