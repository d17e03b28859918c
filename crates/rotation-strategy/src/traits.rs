//! AllocationStrategy trait 정의.

use rotation_core::{HistoryWindow, TargetAllocation};
use serde_json::Value;
use tracing::warn;

use crate::strategies::common::DEFAULT_INTERVAL;

/// 호스트 런타임이 매 거래일 한 번 호출하는 배분 전략.
///
/// 호스트는 `interval`/`assets`/`data`를 읽어 데이터 수집과 호출 주기를
/// 결정하고, `run`이 반환한 목표 비중에 맞춰 주문을 실행합니다.
/// 구현체는 호출 사이에 상태를 바꾸지 않아야 합니다.
pub trait AllocationStrategy: Send + Sync {
    /// 전략 이름 반환.
    fn name(&self) -> &str;

    /// 전략 버전 반환.
    fn version(&self) -> &str;

    /// 전략 설명 반환.
    fn description(&self) -> &str;

    /// 리밸런싱 주기.
    fn interval(&self) -> &str {
        DEFAULT_INTERVAL
    }

    /// 호스트가 가격 데이터를 수집할 종목 목록.
    fn assets(&self) -> Vec<String>;

    /// 가격 외 보조 데이터 요청 목록 (기본: 없음).
    fn data(&self) -> Vec<String> {
        Vec::new()
    }

    /// 과거 데이터 윈도우로 목표 비중을 계산합니다. 에러를 반환하지 않습니다.
    fn run(&self, window: &HistoryWindow) -> TargetAllocation;

    /// 호스트 원본 컨테이너(`{"ohlcv": ...}`)로 목표 비중을 계산합니다.
    ///
    /// 컨테이너를 해석할 수 없으면 현금 보유(빈 배분)를 반환합니다.
    fn run_host(&self, container: &Value) -> TargetAllocation {
        match HistoryWindow::from_host_value(container) {
            Ok(window) => self.run(&window),
            Err(e) => {
                warn!(
                    strategy = self.name(),
                    error = %e,
                    data_error = e.is_data_error(),
                    "호스트 데이터 해석 실패, 현금 보유"
                );
                TargetAllocation::cash()
            }
        }
    }

    /// 현재 전략 설정을 JSON으로 반환 (디버깅/모니터링용).
    fn get_state(&self) -> Value;
}
