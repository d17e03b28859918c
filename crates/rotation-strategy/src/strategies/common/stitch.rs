//! 프록시 스티칭.
//!
//! 주 종목의 상장 이전 구간처럼 데이터가 없는 날에는 설정된 대체 종목의
//! 종가를 이어 붙여 하나의 연속된 시계열을 만듭니다. 둘 다 없는 날은
//! 건너뛰므로, 전체 이력이 없는 종목의 시계열은 윈도우보다 짧아집니다.

use rotation_core::{DailySnapshot, Price};

/// 스티칭된 종가 시계열.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchedSeries {
    /// 주 종목
    pub ticker: String,
    /// 시간순 종가 (최신이 마지막)
    pub closes: Vec<Price>,
    /// 대체 종목 종가를 사용한 일수
    pub proxy_days: usize,
}

impl StitchedSeries {
    /// 시계열 길이.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

/// 일자별 스냅샷을 순회하며 주 종목의 종가 시계열을 만듭니다.
///
/// 날마다 주 종목 종가가 있으면 그것을, 없고 `proxy`가 그날 있으면 대체
/// 종목 종가를, 둘 다 없으면 그날을 건너뜁니다.
pub fn stitch_closes(days: &[DailySnapshot], primary: &str, proxy: Option<&str>) -> StitchedSeries {
    let mut closes = Vec::with_capacity(days.len());
    let mut proxy_days = 0usize;

    for day in days {
        if let Some(close) = day.close_of(primary) {
            closes.push(close);
        } else if let Some(close) = proxy.and_then(|p| day.close_of(p)) {
            closes.push(close);
            proxy_days += 1;
        }
    }

    StitchedSeries {
        ticker: primary.to_string(),
        closes,
        proxy_days,
    }
}
