//! 일봉(OHLCV) 데이터.
//!
//! 의사결정에는 종가만 사용하지만, 호스트는 OHLCV 전체와 날짜를 함께 넘깁니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::Price;

/// 하루치 OHLCV 데이터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// 시가
    #[serde(default, deserialize_with = "zero_if_null")]
    pub open: Price,
    /// 고가
    #[serde(default, deserialize_with = "zero_if_null")]
    pub high: Price,
    /// 저가
    #[serde(default, deserialize_with = "zero_if_null")]
    pub low: Price,
    /// 종가
    pub close: Price,
    /// 거래량
    #[serde(default, deserialize_with = "zero_if_null")]
    pub volume: Decimal,
    /// 거래일 (호스트가 넘긴 원본 문자열)
    #[serde(
        default,
        deserialize_with = "date_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
}

impl Bar {
    /// 종가만으로 캔들을 생성합니다 (시가/고가/저가는 종가와 동일).
    pub fn from_close(close: Price) -> Self {
        Self {
            open: close,
            high: close,
            low: close,
            close,
            volume: Decimal::ZERO,
            date: None,
        }
    }

    /// 거래일을 설정합니다.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// 파싱된 거래일을 반환합니다.
    pub fn trading_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_trading_date)
    }
}

/// 호스트 날짜 문자열을 거래일로 파싱합니다.
///
/// 지원 형식: `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, RFC 3339.
pub fn parse_trading_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

fn zero_if_null<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

fn date_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
