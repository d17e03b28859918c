//! 의사결정 불변 조건 속성 테스트.
//!
//! proptest로 검증:
//! 1. 비중 범위: 각 비중은 [0, 1], 합계는 1 이하
//! 2. 실행 가능성: 배분된 종목은 모두 최신 스냅샷에 존재
//! 3. 멱등성: 같은 입력이면 같은 결과
//! 4. 호스트 경계: 두 입력 형태가 같은 결정을 냄

use proptest::prelude::*;
use rotation_core::{Bar, DailySnapshot, HistoryWindow, PartialFill};
use rotation_strategy::{
    AllocationStrategy, OscillatorConfig, RotationPolicy, SectorRotationStrategy,
};
use rust_decimal::Decimal;
use serde_json::json;

const TICKERS: [&str; 4] = ["A", "B", "C", "P"];

// ── Strategies (proptest) ────────────────────────────────────────────

/// 종목별로 15% 확률로 데이터가 빠진 일자별 종가 (센트 단위).
fn arb_window() -> impl Strategy<Value = HistoryWindow> {
    (0usize..60)
        .prop_flat_map(|len| {
            prop::collection::vec(
                prop::collection::vec(prop::option::weighted(0.85, 1i64..20_000), TICKERS.len()),
                len,
            )
        })
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(d, row)| {
                    TICKERS
                        .iter()
                        .zip(row)
                        .filter_map(|(ticker, cents)| {
                            cents.map(|c| {
                                let bar = Bar::from_close(Decimal::new(c, 2))
                                    .with_date(format!("2024-01-{:02}", d % 28 + 1));
                                (ticker.to_string(), bar)
                            })
                        })
                        .collect::<DailySnapshot>()
                })
                .collect::<HistoryWindow>()
        })
}

fn arb_policy() -> impl Strategy<Value = RotationPolicy> {
    (
        1usize..20,
        0usize..15,
        1usize..=3,
        any::<bool>(),
        prop::option::of(1usize..6),
        any::<bool>(),
    )
        .prop_map(
            |(lookback, min_history, selection_count, require_positive, period, hold_cash)| {
                RotationPolicy {
                    universe: vec!["A".into(), "B".into(), "C".into()],
                    proxies: [("A", "P")].into_iter().collect(),
                    lookback,
                    min_history,
                    selection_count,
                    require_positive,
                    oscillator: period.map(|period| OscillatorConfig { period }),
                    partial_fill: if hold_cash {
                        PartialFill::HoldCash
                    } else {
                        PartialFill::Renormalize
                    },
                }
            },
        )
}

// ── Invariants ───────────────────────────────────────────────────────

proptest! {
    /// 각 비중은 [0, 1], 합계는 1 이하.
    #[test]
    fn weights_are_bounded(window in arb_window(), policy in arb_policy()) {
        let strategy = SectorRotationStrategy::new("prop", policy).unwrap();
        let allocation = strategy.run(&window);

        for (_, weight) in allocation.iter() {
            prop_assert!(weight > Decimal::ZERO);
            prop_assert!(weight <= Decimal::ONE);
        }
        prop_assert!(allocation.total_weight() <= Decimal::ONE);
    }

    /// 배분된 종목은 모두 최신 스냅샷에 존재.
    #[test]
    fn allocation_is_executable(window in arb_window(), policy in arb_policy()) {
        let strategy = SectorRotationStrategy::new("prop", policy).unwrap();
        let allocation = strategy.run(&window);

        match window.latest() {
            Some(latest) => {
                for (ticker, _) in allocation.iter() {
                    prop_assert!(latest.contains(ticker));
                }
            }
            None => prop_assert!(allocation.is_cash()),
        }
    }

    /// 같은 입력이면 같은 결과 (호출 간 상태 없음).
    #[test]
    fn decision_is_idempotent(window in arb_window(), policy in arb_policy()) {
        let strategy = SectorRotationStrategy::new("prop", policy).unwrap();

        let first = strategy.decide(&window);
        let second = strategy.decide(&window);
        prop_assert_eq!(first, second);
    }

    /// 스코어 테이블에는 이력이 룩백보다 긴 종목만 포함.
    #[test]
    fn scores_require_history(window in arb_window(), policy in arb_policy()) {
        let lookback = policy.lookback;
        let strategy = SectorRotationStrategy::new("prop", policy).unwrap();

        for entry in strategy.score_table(window.days()) {
            prop_assert!(entry.history_len > lookback);
        }
    }

    /// 호스트 컨테이너로 호출해도 같은 결과.
    #[test]
    fn host_payload_matches_window(window in arb_window(), policy in arb_policy()) {
        let strategy = SectorRotationStrategy::new("prop", policy).unwrap();

        let direct = strategy.run(&window);
        let hosted = strategy.run_host(&json!({ "ohlcv": window }));
        prop_assert_eq!(direct, hosted);
    }
}
