//! 호스트 런타임 경계의 데이터 어댑터.
//!
//! 호스트는 `"ohlcv"` 키 아래에 과거 데이터를 넘깁니다. 두 가지 형태가 존재합니다:
//!
//! - **일자별 스냅샷 목록** (정규 형태):
//!   `{"ohlcv": [{"XLK": {"close": 1.0, ...}, "XLF": {...}}, ...]}`
//! - **종목별 시계열 맵**:
//!   `{"ohlcv": {"XLK": [{"close": 1.0, "date": "2024-01-02"}, ...], ...}}`
//!
//! 두 번째 형태는 날짜로 정렬·피벗하여 정규 형태로 변환합니다.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

use super::bar::Bar;
use super::history::{DailySnapshot, HistoryWindow};
use crate::error::{RotationError, RotationResult};
use crate::types::normalize_ticker;

/// 호스트 컨테이너에서 과거 OHLCV 데이터가 들어 있는 키.
pub const OHLCV_KEY: &str = "ohlcv";

/// 호스트 데이터 입력 형태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostDataShape {
    /// 일자별 스냅샷 목록
    DailySnapshots,
    /// 종목별 시계열 맵
    SeriesByTicker,
}

impl HistoryWindow {
    /// 호스트 컨테이너(`{"ohlcv": ...}`)에서 윈도우를 생성합니다.
    pub fn from_host_value(container: &Value) -> RotationResult<Self> {
        let ohlcv = container
            .get(OHLCV_KEY)
            .ok_or_else(|| RotationError::Data(format!("'{}' 키가 없습니다", OHLCV_KEY)))?;

        Self::from_ohlcv_value(ohlcv)
    }

    /// `"ohlcv"` 값 자체에서 윈도우를 생성합니다.
    pub fn from_ohlcv_value(ohlcv: &Value) -> RotationResult<Self> {
        match detect_shape(ohlcv)? {
            HostDataShape::DailySnapshots => {
                let days = ohlcv.as_array().map(Vec::as_slice).unwrap_or_default();
                days.iter()
                    .enumerate()
                    .map(|(idx, day)| parse_snapshot(idx, day))
                    .collect()
            }
            HostDataShape::SeriesByTicker => {
                let map = ohlcv.as_object().cloned().unwrap_or_default();
                Ok(Self::from_series(parse_series(map)?))
            }
        }
    }
}

/// `"ohlcv"` 값의 형태를 판별합니다.
pub fn detect_shape(ohlcv: &Value) -> RotationResult<HostDataShape> {
    match ohlcv {
        Value::Array(_) => Ok(HostDataShape::DailySnapshots),
        Value::Object(_) => Ok(HostDataShape::SeriesByTicker),
        other => Err(RotationError::Data(format!(
            "'{}'는 배열 또는 객체여야 합니다: {}",
            OHLCV_KEY,
            type_name(other)
        ))),
    }
}

fn parse_snapshot(idx: usize, day: &Value) -> RotationResult<DailySnapshot> {
    let entries = day.as_object().ok_or_else(|| {
        RotationError::Data(format!("{}번째 일자 데이터가 객체가 아닙니다: {}", idx, type_name(day)))
    })?;

    Ok(entries
        .iter()
        .filter_map(|(ticker, raw)| parse_bar(ticker, raw).map(|bar| (normalize_ticker(ticker), bar)))
        .collect())
}

fn parse_series(map: Map<String, Value>) -> RotationResult<BTreeMap<String, Vec<Bar>>> {
    map.into_iter()
        .map(|(ticker, raw)| -> RotationResult<(String, Vec<Bar>)> {
            let bars = raw.as_array().ok_or_else(|| {
                RotationError::Data(format!("{} 시계열이 배열이 아닙니다: {}", ticker, type_name(&raw)))
            })?;
            let parsed = bars.iter().filter_map(|b| parse_bar(&ticker, b)).collect();
            Ok((normalize_ticker(&ticker), parsed))
        })
        .collect()
}

/// 캔들 하나를 파싱합니다. 형식이 잘못된 캔들은 경고 후 건너뜁니다.
fn parse_bar(ticker: &str, raw: &Value) -> Option<Bar> {
    match serde_json::from_value::<Bar>(raw.clone()) {
        Ok(bar) => Some(bar),
        Err(e) => {
            warn!(ticker = ticker, error = %e, "잘못된 캔들 데이터 건너뜀");
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
