//! 목표 비중 (호스트가 포트폴리오를 맞춰 갈 대상).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::Weight;

/// 선택 종목 중 일부만 거래 가능할 때의 비중 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialFill {
    /// 남은 종목에 전체 비중을 재분배 (미투자 잔여 없음)
    #[default]
    Renormalize,
    /// 슬롯 비중을 유지하고 나머지는 현금 보유
    HoldCash,
}

/// 종목별 목표 비중. 포함되지 않은 종목은 비중 0 (청산/미보유).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetAllocation {
    weights: BTreeMap<String, Weight>,
}

impl TargetAllocation {
    /// 전액 현금 배분.
    pub fn cash() -> Self {
        Self::default()
    }

    /// 종목 비중을 더합니다. 같은 종목이 여러 번 선택되면 비중이 합산됩니다.
    pub fn add(&mut self, ticker: impl Into<String>, weight: Weight) {
        *self.weights.entry(ticker.into()).or_insert(Decimal::ZERO) += weight;
    }

    /// 종목 비중 (없으면 0).
    pub fn weight_of(&self, ticker: &str) -> Weight {
        self.weights.get(ticker).copied().unwrap_or(Decimal::ZERO)
    }

    /// 종목이 포함되어 있는지 확인합니다.
    pub fn contains(&self, ticker: &str) -> bool {
        self.weights.contains_key(ticker)
    }

    /// 비중 합계.
    pub fn total_weight(&self) -> Weight {
        self.weights.values().copied().sum()
    }

    /// 현금 비중 (1 - 합계, 0 미만은 0).
    pub fn cash_weight(&self) -> Weight {
        (Decimal::ONE - self.total_weight()).max(Decimal::ZERO)
    }

    /// 전액 현금인지 확인합니다.
    pub fn is_cash(&self) -> bool {
        self.weights.is_empty()
    }

    /// 종목 수.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// 비어 있는지 확인합니다 (`is_cash`와 동일).
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// (종목, 비중) 반복자 (티커 순).
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl fmt::Display for TargetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cash() {
            return write!(f, "CASH");
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(ticker, weight)| format!("{}={}", ticker, weight.normalize()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
