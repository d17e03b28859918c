//! 일자별 스냅샷과 과거 데이터 윈도우.
//!
//! 정규 입력 형태는 "일자별 스냅샷의 시간순 목록"입니다. 종목별 시계열로
//! 들어오는 데이터는 [`HistoryWindow::from_series`]로 변환합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use super::bar::Bar;
use crate::types::Price;

/// 하루치 종목별 캔들 스냅샷.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailySnapshot {
    bars: BTreeMap<String, Bar>,
}

impl DailySnapshot {
    /// 빈 스냅샷을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 종목 캔들을 추가합니다.
    pub fn insert(&mut self, ticker: impl Into<String>, bar: Bar) {
        self.bars.insert(ticker.into(), bar);
    }

    /// 빌더 스타일로 종목 캔들을 추가합니다.
    pub fn with(mut self, ticker: impl Into<String>, bar: Bar) -> Self {
        self.insert(ticker, bar);
        self
    }

    /// 종목 캔들을 반환합니다.
    pub fn get(&self, ticker: &str) -> Option<&Bar> {
        self.bars.get(ticker)
    }

    /// 해당 종목이 이 날 거래 데이터가 있는지 확인합니다.
    pub fn contains(&self, ticker: &str) -> bool {
        self.bars.contains_key(ticker)
    }

    /// 종목의 종가를 반환합니다.
    pub fn close_of(&self, ticker: &str) -> Option<Price> {
        self.bars.get(ticker).map(|bar| bar.close)
    }

    /// 스냅샷에 포함된 종목 목록.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.bars.keys().map(String::as_str)
    }

    /// 종목 수.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// 이 스냅샷의 거래일 (날짜를 가진 첫 캔들 기준).
    pub fn date(&self) -> Option<NaiveDate> {
        self.bars.values().find_map(Bar::trading_date)
    }
}

impl<K: Into<String>> FromIterator<(K, Bar)> for DailySnapshot {
    fn from_iter<I: IntoIterator<Item = (K, Bar)>>(iter: I) -> Self {
        Self {
            bars: iter.into_iter().map(|(k, bar)| (k.into(), bar)).collect(),
        }
    }
}

/// 시간순 일자별 스냅샷 윈도우 (가장 최근이 마지막).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryWindow {
    days: Vec<DailySnapshot>,
}

impl HistoryWindow {
    /// 스냅샷 목록으로 윈도우를 생성합니다. 순서는 호출자가 보장합니다.
    pub fn new(days: Vec<DailySnapshot>) -> Self {
        Self { days }
    }

    /// 빈 윈도우.
    pub fn empty() -> Self {
        Self::default()
    }

    /// 종목별 시계열을 날짜 기준으로 피벗하여 윈도우를 생성합니다.
    ///
    /// 날짜를 파싱할 수 없는 캔들은 정렬 기준이 없으므로 버립니다.
    /// 같은 종목이 같은 날짜에 여러 번 나오면 마지막 캔들을 사용합니다.
    pub fn from_series(series: BTreeMap<String, Vec<Bar>>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, DailySnapshot> = BTreeMap::new();
        let mut dropped = 0usize;

        for (ticker, bars) in series {
            for bar in bars {
                match bar.trading_date() {
                    Some(date) => by_date.entry(date).or_default().insert(ticker.clone(), bar),
                    None => dropped += 1,
                }
            }
        }

        if dropped > 0 {
            warn!(dropped, "날짜를 파싱할 수 없는 캔들 제외");
        }

        Self {
            days: by_date.into_values().collect(),
        }
    }

    /// 일수.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// 가장 최근 스냅샷.
    pub fn latest(&self) -> Option<&DailySnapshot> {
        self.days.last()
    }

    /// 스냅샷 슬라이스.
    pub fn days(&self) -> &[DailySnapshot] {
        &self.days
    }

    /// 시간순 반복자.
    pub fn iter(&self) -> std::slice::Iter<'_, DailySnapshot> {
        self.days.iter()
    }

    /// 스냅샷을 뒤에 추가합니다.
    pub fn push(&mut self, day: DailySnapshot) {
        self.days.push(day);
    }
}

impl FromIterator<DailySnapshot> for HistoryWindow {
    fn from_iter<I: IntoIterator<Item = DailySnapshot>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HistoryWindow {
    type Item = &'a DailySnapshot;
    type IntoIter = std::slice::Iter<'a, DailySnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
