// src/render.rs
//! Text rendering of the daily export. The format is a contract with the
//! downstream model stages: a small metadata header, a fixed instruction
//! line, then one numbered line per story. Bracketed metadata rides on each
//! line so later steps can quote an index instead of regenerating URLs.

use chrono::NaiveDateTime;

use crate::types::AiHotspotLine;

/// First line of every export.
pub const EXPORT_TITLE: &str = "# TrendRadar 热点原料（AI可读）";

/// Fixed instruction telling the downstream model how to reference stories.
pub const EXPORT_INSTRUCTION: &str =
    "说明：下面每条前面的数字序号，就是【来源ID】（source_id）。后续 Step3/Step4 必须引用这个序号，程序才能回填平台与URL。";

/// Render the full export document. `dedupe_against` is the date the
/// candidate list was diffed against; `None` or empty means no previous day
/// was available and the header line is omitted entirely.
///
/// The output always ends with a single trailing newline.
pub fn render_hotspots_text(
    lines: &[AiHotspotLine],
    date_str: &str,
    generated_at: NaiveDateTime,
    dedupe_against: Option<&str>,
    total_candidates: usize,
) -> String {
    let mut out: Vec<String> = vec![
        EXPORT_TITLE.to_string(),
        format!("- date: {date_str}"),
        format!("- generated_at: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
    ];
    if let Some(prev) = dedupe_against.filter(|d| !d.is_empty()) {
        out.push(format!("- dedupe_against: {prev}"));
    }
    out.push(format!("- candidates_after_dedupe: {total_candidates}"));
    out.push(format!("- exported_count: {}", lines.len()));
    out.push(String::new());
    out.push(EXPORT_INSTRUCTION.to_string());
    out.push(String::new());

    for it in lines {
        let mut line = format!(
            "{}. [platform={}] [platform_id={}] {}",
            it.idx, it.platform_name, it.platform_id, it.title
        );
        if !it.url.is_empty() {
            line.push_str(&format!(" [URL:{}]", it.url));
        }
        if !it.mobile_url.is_empty() {
            line.push_str(&format!(" [MOBILE:{}]", it.mobile_url));
        }
        if it.rank > 0 {
            line.push_str(&format!(" [RANK:{}]", it.rank));
        }
        out.push(line);
    }

    out.join("\n") + "\n"
}
