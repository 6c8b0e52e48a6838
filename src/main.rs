//! Daily hotspot export, binary entrypoint.
//! Loads config, pulls today's and yesterday's snapshots, drops repeats,
//! writes the AI-readable text file and logs the matching remote key.
//!
//! See `README.md` for the snapshot layout and config knobs.

use anyhow::{Context, Result};
use chrono::{Duration, FixedOffset, NaiveDate, Utc};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trendradar_hotspots::{
    build_daily_unique_hotspots, build_remote_key, render_hotspots_text, write_hotspots_file,
    ExportConfig, JsonSnapshotStore, SnapshotStore,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = ExportConfig::load().context("load hotspots config")?;

    let offset = cfg
        .timezone_offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .context("timezone_offset_hours out of range")?;
    let now = Utc::now().with_timezone(&offset);

    let report_date = cfg
        .report_date
        .clone()
        .unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
    let parsed = NaiveDate::parse_from_str(&report_date, "%Y-%m-%d")
        .with_context(|| format!("report date {report_date:?} is not YYYY-MM-DD"))?;
    let yesterday_date = (parsed - Duration::days(1)).format("%Y-%m-%d").to_string();

    let store = JsonSnapshotStore::new(&cfg.snapshot_dir);
    let today = store
        .load_day(&report_date)?
        .with_context(|| format!("no snapshot for {report_date} in {}", cfg.snapshot_dir))?;
    let yesterday = store.load_day(&yesterday_date)?;
    if yesterday.is_none() {
        tracing::info!("no snapshot for {yesterday_date}, skipping cross-day dedup");
    }

    let (lines, total_candidates) =
        build_daily_unique_hotspots(&today, yesterday.as_ref(), cfg.max_items);

    let dedupe_against = yesterday.as_ref().map(|_| yesterday_date.as_str());
    let text = render_hotspots_text(
        &lines,
        &report_date,
        now.naive_local(),
        dedupe_against,
        total_candidates,
    );

    let path = write_hotspots_file(&cfg.local_base_dir, &report_date, &cfg.filename, &text)?;
    let remote_key = build_remote_key(&cfg.remote_prefix, &report_date, &cfg.filename)?;

    tracing::info!(
        date = %report_date,
        exported = lines.len(),
        candidates = total_candidates,
        dropped_by_cap = total_candidates - lines.len(),
        path = %path.display(),
        remote_key = %remote_key,
        "hotspots export written"
    );
    Ok(())
}
