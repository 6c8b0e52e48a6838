// tests/render_format.rs
// The rendered document is parsed downstream by line position and bracket
// order, so these assertions are deliberately literal.

use chrono::NaiveDate;
use trendradar_hotspots::{
    build_daily_unique_hotspots, render_hotspots_text, NewsData, NewsItem,
};

fn ts() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 24)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap()
}

fn snapshot() -> NewsData {
    let mut data = NewsData::default();
    data.id_to_name.insert("weibo".into(), "微博".into());
    data.id_to_name.insert("zhihu".into(), "知乎".into());
    data.items.insert(
        "weibo".into(),
        vec![NewsItem {
            source_id: "weibo".into(),
            source_name: None,
            title: "台风登陆沿海城市".into(),
            url: Some("https://weibo.com/t/1".into()),
            mobile_url: Some("https://m.weibo.cn/t/1".into()),
            rank: Some(1),
        }],
    );
    data.items.insert(
        "zhihu".into(),
        vec![NewsItem {
            source_id: "zhihu".into(),
            source_name: None,
            title: "如何看待新的考试政策".into(),
            url: None,
            mobile_url: None,
            rank: None,
        }],
    );
    data
}

#[test]
fn full_document_through_the_pipeline() {
    let (lines, total) = build_daily_unique_hotspots(&snapshot(), None, 0);
    let text = render_hotspots_text(&lines, "2026-08-24", ts(), None, total);

    let expected = "\
# TrendRadar 热点原料（AI可读）
- date: 2026-08-24
- generated_at: 2026-08-24 09:15:00
- candidates_after_dedupe: 2
- exported_count: 2

说明：下面每条前面的数字序号，就是【来源ID】（source_id）。后续 Step3/Step4 必须引用这个序号，程序才能回填平台与URL。

1. [platform=微博] [platform_id=weibo] 台风登陆沿海城市 [URL:https://weibo.com/t/1] [MOBILE:https://m.weibo.cn/t/1] [RANK:1]
2. [platform=知乎] [platform_id=zhihu] 如何看待新的考试政策
";
    assert_eq!(text, expected);
}

#[test]
fn dedupe_against_line_present_only_with_a_previous_day() {
    let today = snapshot();
    let (lines, total) = build_daily_unique_hotspots(&today, None, 0);

    let with_prev = render_hotspots_text(&lines, "2026-08-24", ts(), Some("2026-08-23"), total);
    assert!(with_prev.contains("- dedupe_against: 2026-08-23\n"));

    let without = render_hotspots_text(&lines, "2026-08-24", ts(), None, total);
    assert!(!without.contains("dedupe_against"));

    // header keys keep their relative order either way
    let date_pos = with_prev.find("- date:").unwrap();
    let gen_pos = with_prev.find("- generated_at:").unwrap();
    let dedupe_pos = with_prev.find("- dedupe_against:").unwrap();
    let cand_pos = with_prev.find("- candidates_after_dedupe:").unwrap();
    let count_pos = with_prev.find("- exported_count:").unwrap();
    assert!(date_pos < gen_pos && gen_pos < dedupe_pos);
    assert!(dedupe_pos < cand_pos && cand_pos < count_pos);
}

#[test]
fn truncation_is_visible_in_header_counts() {
    let mut data = snapshot();
    data.items.get_mut("weibo").unwrap().push(NewsItem {
        source_id: "weibo".into(),
        source_name: None,
        title: "第三条热点".into(),
        url: Some("https://weibo.com/t/3".into()),
        mobile_url: None,
        rank: Some(3),
    });

    let (lines, total) = build_daily_unique_hotspots(&data, None, 2);
    let text = render_hotspots_text(&lines, "2026-08-24", ts(), None, total);
    assert!(text.contains("- candidates_after_dedupe: 3\n"));
    assert!(text.contains("- exported_count: 2\n"));
    // exactly two numbered lines
    assert!(text.contains("\n1. [platform="));
    assert!(text.contains("\n2. [platform="));
    assert!(!text.contains("\n3. [platform="));
}

#[test]
fn url_only_lines_skip_mobile_and_rank_brackets() {
    let mut data = NewsData::default();
    data.items.insert(
        "toutiao".into(),
        vec![NewsItem {
            source_id: "toutiao".into(),
            source_name: None,
            title: "只有链接".into(),
            url: Some("https://toutiao.com/a/1".into()),
            mobile_url: None,
            rank: Some(0),
        }],
    );

    let (lines, total) = build_daily_unique_hotspots(&data, None, 0);
    let text = render_hotspots_text(&lines, "2026-08-24", ts(), None, total);
    let body = text.lines().last().unwrap();
    assert_eq!(
        body,
        "1. [platform=toutiao] [platform_id=toutiao] 只有链接 [URL:https://toutiao.com/a/1]"
    );
}
