//! 리플레이 명령어.
//!
//! 윈도우의 각 접두 구간(`window[..=d]`)으로 의사결정을 반복해 일자별
//! 목표 비중을 출력합니다. 포트폴리오 손익은 계산하지 않습니다.
//!
//! # 사용 예시
//!
//! ```bash
//! # 130번째 거래일부터 일자별 배분
//! rotation replay -i data/sectors.json -p sector_top2 --from 130
//! ```

use anyhow::{bail, Result};
use chrono::NaiveDate;
use rotation_core::{HistoryWindow, TargetAllocation};
use rotation_strategy::SectorRotationStrategy;
use serde::Serialize;
use tracing::info;

use crate::commands::decide::OutputFormat;

/// 리플레이 한 줄 (하루).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayRow {
    /// 윈도우 내 인덱스
    pub index: usize,
    /// 거래일
    pub as_of: Option<NaiveDate>,
    /// 목표 비중
    pub allocation: TargetAllocation,
    /// 전날 대비 배분 변경 여부
    pub changed: bool,
}

/// 리플레이 요약.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    /// 평가한 거래일 수
    pub days: usize,
    /// 현금 보유 일수
    pub cash_days: usize,
    /// 배분 변경 횟수
    pub changes: usize,
}

/// `from`번째 거래일부터 끝까지 의사결정을 반복합니다.
pub fn replay(
    strategy: &SectorRotationStrategy,
    window: &HistoryWindow,
    from: usize,
) -> Result<Vec<ReplayRow>> {
    let days = window.days();
    if from >= days.len() {
        bail!(
            "--from {}이(가) 윈도우 길이({})를 벗어납니다",
            from,
            days.len()
        );
    }

    let mut rows: Vec<ReplayRow> = Vec::with_capacity(days.len() - from);
    for index in from..days.len() {
        let decision = strategy.decide_days(&days[..=index]);
        let changed = rows
            .last()
            .map(|prev| prev.allocation != decision.allocation)
            .unwrap_or(false);

        rows.push(ReplayRow {
            index,
            as_of: decision.as_of,
            allocation: decision.allocation,
            changed,
        });
    }

    let summary = summarize(&rows);
    info!(
        days = summary.days,
        cash_days = summary.cash_days,
        changes = summary.changes,
        "리플레이 완료"
    );

    Ok(rows)
}

/// 리플레이 결과 요약.
pub fn summarize(rows: &[ReplayRow]) -> ReplaySummary {
    ReplaySummary {
        days: rows.len(),
        cash_days: rows.iter().filter(|r| r.allocation.is_cash()).count(),
        changes: rows.iter().filter(|r| r.changed).count(),
    }
}

/// 리플레이 결과를 렌더링합니다.
pub fn render_rows(rows: &[ReplayRow], format: OutputFormat) -> Result<String> {
    let summary = summarize(rows);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "rows": rows,
            "summary": summary,
        }))?),
        OutputFormat::Table => {
            let mut out = String::new();
            for row in rows {
                let date = row
                    .as_of
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| format!("#{}", row.index));
                let marker = if row.changed { "→" } else { " " };
                out.push_str(&format!("{:<10} {} {}\n", date, marker, row.allocation));
            }
            out.push_str(&format!(
                "\n{}일, 현금 {}일, 교체 {}회\n",
                summary.days, summary.cash_days, summary.changes
            ));
            Ok(out)
        }
    }
}
