//! 단일 의사결정 명령어.
//!
//! 윈도우 전체로 최신 거래일의 목표 비중을 계산합니다.
//!
//! # 사용 예시
//!
//! ```bash
//! # 기본 프리셋 (sector_top1)
//! rotation decide -i data/sectors.json
//!
//! # 상위 2개 프리셋, 스코어 테이블 출력
//! rotation decide -i data/sectors.json -p sector_top2 -f table
//!
//! # 설정 파일 사용
//! rotation decide -i data/sectors.json -c config/rotation.toml
//! ```

use anyhow::Result;
use clap::ValueEnum;
use rotation_core::{DecimalExt, HistoryWindow};
use rotation_strategy::strategies::sector_name;
use rotation_strategy::{Decision, SectorRotationStrategy, SkipReason};
use rust_decimal::Decimal;
use serde_json::json;

/// 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON
    #[default]
    Json,
    /// 사람이 읽는 표
    Table,
}

/// 최신 거래일 의사결정을 실행하고 출력 문자열을 반환합니다.
pub fn run_decide(
    strategy: &SectorRotationStrategy,
    window: &HistoryWindow,
    format: OutputFormat,
) -> Result<String> {
    let decision = strategy.decide(window);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "strategy": strategy.id(),
            "decision": decision,
        }))?),
        OutputFormat::Table => Ok(render_table(strategy.id(), &decision)),
    }
}

/// 결정을 표로 렌더링합니다.
pub fn render_table(strategy_id: &str, decision: &Decision) -> String {
    let mut out = String::new();
    let as_of = decision
        .as_of
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    out.push_str(&format!("\n전략: {}   기준일: {}\n", strategy_id, as_of));
    out.push_str("═══════════════════════════════════════════════════════\n");

    if !decision.scores.is_empty() {
        out.push_str("  순위 | 종목  | 섹터       |    모멘텀 |   RSI | 프록시일\n");
        out.push_str("  ─────────────────────────────────────────────────────\n");
        for (rank, entry) in decision.scores.iter().enumerate() {
            let marker = if decision.selected.contains(&entry.ticker) {
                "*"
            } else {
                " "
            };
            let rsi = entry
                .oscillator
                .map(|v| v.round_half_up(1).to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "{} {:>4} | {:<5} | {:<10} | {:>9} | {:>5} | {:>6}\n",
                marker,
                rank + 1,
                entry.ticker,
                sector_name(&entry.ticker).unwrap_or("-"),
                entry.momentum.to_percentage_string(),
                rsi,
                entry.proxy_days,
            ));
        }
        out.push('\n');
    }

    out.push_str("목표 비중:\n");
    for (ticker, weight) in decision.allocation.iter() {
        out.push_str(&format!("  {:<6} {:>8}\n", ticker, weight.to_percentage_string()));
    }
    let cash = decision.allocation.cash_weight();
    if cash > Decimal::ZERO {
        out.push_str(&format!("  {:<6} {:>8}\n", "현금", cash.to_percentage_string()));
    }

    if !decision.unresolved.is_empty() {
        out.push_str(&format!("\n거래 불가 선택: {}\n", decision.unresolved.join(", ")));
    }
    if let Some(reason) = decision.skipped {
        out.push_str(&format!("\n현금 보유 사유: {}\n", describe_skip(reason)));
    }

    out
}

/// 현금 보유 사유 설명.
pub fn describe_skip(reason: SkipReason) -> String {
    match reason {
        SkipReason::EmptyWindow => "데이터 없음".to_string(),
        SkipReason::InsufficientWindow { len, required } => {
            format!("데이터 부족 ({}일 < {}일)", len, required)
        }
        SkipReason::NoCandidates => "조건을 만족하는 섹터 없음".to_string(),
        SkipReason::Unresolvable => "선택 종목 모두 거래 불가".to_string(),
    }
}
