// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod dedup;
pub mod export;
pub mod identity;
pub mod normalize;
pub mod render;
pub mod store;
pub mod types;

// ---- Re-exports for stable public API ----
pub use crate::config::ExportConfig;
pub use crate::dedup::{build_daily_unique_hotspots, flatten_news, UNRANKED_SORT_KEY};
pub use crate::export::{build_remote_key, split_date, write_hotspots_file};
pub use crate::identity::Identity;
pub use crate::normalize::{clean_title, normalize_url};
pub use crate::render::render_hotspots_text;
pub use crate::store::{JsonSnapshotStore, SnapshotStore};
pub use crate::types::{AiHotspotLine, FlatItem, NewsData, NewsItem};
