// src/normalize.rs
//! Title cleaning and URL canonicalization shared by identity derivation and
//! export. Both functions are deterministic and idempotent: applying them to
//! their own output is a no-op. The dedup engine relies on that when it
//! re-cleans titles while building export lines, and cross-day identity relies
//! on it when yesterday's snapshot is processed by a separate run.

use once_cell::sync::OnceCell;
use regex::Regex;
use url::Url;

/// Query parameters dropped from every URL regardless of platform.
const GLOBAL_TRACKING_PARAMS: &[&str] = &["utm", "fbclid", "gclid", "yclid", "igshid", "spm"];

/// Per-platform tracking parameters, keyed by the item's `source_id`. This is
/// the only role the platform id plays in normalization; it never becomes part
/// of the identity itself.
const PLATFORM_TRACKING_PARAMS: &[(&str, &[&str])] = &[
    ("weibo", &["luicode", "lfid", "pagetype"]),
    ("bilibili", &["spm_id_from", "vd_source", "from_spmid"]),
    ("douyin", &["enter_from", "previous_page"]),
    ("toutiao", &["tt_from"]),
];

/// Clean a raw scraped title: decode HTML entities, strip tags, drop
/// zero-width characters, collapse whitespace.
///
/// The pipeline is applied to a fixed point, so even pathological input
/// (double-encoded entities, entities that assemble into tags once their
/// neighbors are stripped) cannot make a second cleaning differ from the
/// first.
pub fn clean_title(raw: &str) -> String {
    let mut out = raw.to_string();
    loop {
        let next = clean_title_pass(&out);
        if next == out {
            return next;
        }
        out = next;
    }
}

fn clean_title_pass(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[^>]+>").expect("tag pattern"));
    out = re_tags.replace_all(&out, "").to_string();

    // 3) Drop zero-width characters and BOMs that ride along in scraped titles
    out = out.replace(['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'], "");

    // 4) Collapse whitespace and trim
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"));
    re_ws.replace_all(&out, " ").trim().to_string()
}

/// Canonicalize a URL so that cosmetically different links to the same
/// resource compare equal: tracking parameters dropped, fragment dropped,
/// query pairs sorted, trailing slash trimmed from non-root paths. The parser
/// already lowercases scheme and host and removes default ports.
///
/// Input that does not parse as an absolute URL is returned trimmed but
/// otherwise untouched, which keeps the function total and idempotent.
pub fn normalize_url(raw: &str, source_id_hint: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // Scheme-relative links are common in scraped mobile pages.
    let absolute = if trimmed.starts_with("//") {
        format!("https:{trimmed}")
    } else {
        trimmed.to_string()
    };

    let Ok(mut url) = Url::parse(&absolute) else {
        return trimmed.to_string();
    };

    url.set_fragment(None);

    let mut kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !is_tracking_param(k, source_id_hint))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    kept.sort();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        drop(pairs);
    }

    let path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(path.trim_end_matches('/'));
    }

    url.to_string()
}

fn is_tracking_param(key: &str, source_id_hint: &str) -> bool {
    let key = key.to_ascii_lowercase();
    if GLOBAL_TRACKING_PARAMS.contains(&key.as_str())
        || key.starts_with("utm_")
        || key.starts_with("share_")
    {
        return true;
    }
    PLATFORM_TRACKING_PARAMS
        .iter()
        .any(|(id, params)| *id == source_id_hint && params.contains(&key.as_str()))
}
