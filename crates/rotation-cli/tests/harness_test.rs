//! 호스트 하네스 통합 테스트.
//!
//! 파일에서 페이로드와 설정을 읽어 decide/replay까지 이어지는 흐름을 검증합니다.

use rotation_cli::commands::decide::{run_decide, OutputFormat};
use rotation_cli::commands::input::{build_strategy, load_window, ConfigFile};
use rotation_cli::commands::replay::{replay, summarize};
use serde_json::{json, Value};
use std::path::PathBuf;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rotation-harness-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

fn date_of(day: usize) -> String {
    let base = chrono::NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    (base + chrono::Duration::days(day as i64)).format("%Y-%m-%d").to_string()
}

/// XLE가 가장 강하고 XLRE는 최근 10일만 상장 (그 이전은 IYR).
fn sector_payload(days: usize) -> Value {
    let list: Vec<Value> = (0..days)
        .map(|d| {
            let mut day = serde_json::Map::new();
            let date = date_of(d);
            day.insert("XLK".into(), json!({"close": 100 + d / 4, "date": date}));
            day.insert("XLE".into(), json!({"close": 100 + d / 2, "date": date}));
            day.insert("XLU".into(), json!({"close": 100, "date": date}));
            day.insert("IYR".into(), json!({"close": 50 + d / 3, "date": date}));
            if d + 10 >= days {
                day.insert("XLRE".into(), json!({"close": 40, "date": date}));
            }
            Value::Object(day)
        })
        .collect();
    json!({ "ohlcv": list })
}

#[test]
fn test_decide_from_files() {
    let input = write_temp("decide.json", &sector_payload(140).to_string());

    let window = load_window(&input).unwrap();
    assert_eq!(window.len(), 140);

    let strategy = build_strategy(Some("sector_top2"), None).unwrap();
    let out = run_decide(&strategy, &window, OutputFormat::Json).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["decision"]["selected"][0], "XLE");
    assert_eq!(value["decision"]["allocation"]["XLE"], "0.5");

    std::fs::remove_file(input).ok();
}

#[test]
fn test_replay_with_policy_file() {
    let input = write_temp("replay.json", &sector_payload(140).to_string());
    let policy = write_temp(
        "policy.toml",
        r#"
universe = ["XLK", "XLE", "XLU"]
lookback = 20
min_history = 21
selection_count = 1
require_positive = true
partial_fill = "renormalize"

[proxies]
"#,
    );

    let config = ConfigFile::load(&policy).unwrap();
    let strategy = build_strategy(None, Some(&config)).unwrap();
    let window = load_window(&input).unwrap();

    let rows = replay(&strategy, &window, 0).unwrap();
    assert_eq!(rows.len(), 140);
    assert_eq!(summarize(&rows).cash_days, 20);
    assert!(rows[139].allocation.contains("XLE"));

    std::fs::remove_file(input).ok();
    std::fs::remove_file(policy).ok();
}

#[test]
fn test_missing_input_file() {
    let missing = std::env::temp_dir().join("rotation-harness-does-not-exist.json");
    assert!(load_window(&missing).is_err());
}
