// src/config.rs
//! Export configuration: TOML file with per-field defaults, plus a couple of
//! env overrides for the knobs operators actually flip per run.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

// --- env defaults & names ---
pub const DEFAULT_CONFIG_PATH: &str = "config/hotspots.toml";

pub const ENV_CONFIG_PATH: &str = "HOTSPOTS_CONFIG_PATH";
pub const ENV_MAX_ITEMS: &str = "HOTSPOTS_MAX_ITEMS";
pub const ENV_REPORT_DATE: &str = "HOTSPOTS_DATE";

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Cap on exported lines. Zero or negative disables truncation.
    #[serde(default = "default_max_items")]
    pub max_items: i64,
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default = "default_local_base_dir")]
    pub local_base_dir: String,
    /// Object-store key prefix. Empty means keys start at `YYYY/`.
    #[serde(default)]
    pub remote_prefix: String,
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,
    /// Offset applied to UTC when deriving "today". Default is UTC+8, where
    /// the tracked platforms run their boards.
    #[serde(default = "default_timezone_offset_hours")]
    pub timezone_offset_hours: i32,
    /// Export this date instead of today. Mainly for backfills.
    #[serde(default)]
    pub report_date: Option<String>,
}

fn default_max_items() -> i64 {
    100
}
fn default_filename() -> String {
    "ai_hotspots.txt".to_string()
}
fn default_local_base_dir() -> String {
    "output/ai_hotspots".to_string()
}
fn default_snapshot_dir() -> String {
    "snapshots".to_string()
}
fn default_timezone_offset_hours() -> i32 {
    8
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            filename: default_filename(),
            local_base_dir: default_local_base_dir(),
            remote_prefix: String::new(),
            snapshot_dir: default_snapshot_dir(),
            timezone_offset_hours: default_timezone_offset_hours(),
            report_date: None,
        }
    }
}

impl ExportConfig {
    /// Parse from a TOML string. Missing fields take their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("parse hotspots config")
    }

    /// Load using env var + fallbacks:
    /// 1) $HOTSPOTS_CONFIG_PATH (must exist if set)
    /// 2) config/hotspots.toml, if present
    /// 3) built-in defaults
    ///
    /// Env overrides for max_items and report_date apply on top in every
    /// case.
    pub fn load() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            let content = fs::read_to_string(&pb)
                .with_context(|| format!("reading config from {}", pb.display()))?;
            Self::from_toml_str(&content)?
        } else {
            let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_p.exists() {
                let content = fs::read_to_string(&default_p)
                    .with_context(|| format!("reading config from {}", default_p.display()))?;
                Self::from_toml_str(&content)?
            } else {
                Self::default()
            }
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(n) = std::env::var(ENV_MAX_ITEMS)
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok())
        {
            self.max_items = n;
        }
        if let Ok(d) = std::env::var(ENV_REPORT_DATE) {
            let d = d.trim();
            if !d.is_empty() {
                self.report_date = Some(d.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg = ExportConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.max_items, 100);
        assert_eq!(cfg.filename, "ai_hotspots.txt");
        assert_eq!(cfg.local_base_dir, "output/ai_hotspots");
        assert_eq!(cfg.remote_prefix, "");
        assert_eq!(cfg.snapshot_dir, "snapshots");
        assert_eq!(cfg.timezone_offset_hours, 8);
        assert_eq!(cfg.report_date, None);
    }

    #[test]
    fn toml_values_override_defaults() {
        let cfg = ExportConfig::from_toml_str(
            r#"
            max_items = -1
            filename = "hot.txt"
            remote_prefix = "exports/ai"
            timezone_offset_hours = 0
            report_date = "2026-01-02"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.max_items, -1);
        assert_eq!(cfg.filename, "hot.txt");
        assert_eq!(cfg.remote_prefix, "exports/ai");
        assert_eq!(cfg.timezone_offset_hours, 0);
        assert_eq!(cfg.report_date.as_deref(), Some("2026-01-02"));
    }

    #[test]
    fn unknown_toml_keys_are_ignored() {
        // must not error on configs written for a newer version
        let cfg = ExportConfig::from_toml_str("future_knob = true").unwrap();
        assert_eq!(cfg.max_items, 100);
    }
}
