//! 전략 기본 상수.

use rotation_core::{ProxyMap, Universe};

/// 호스트 리밸런싱 주기.
pub const DEFAULT_INTERVAL: &str = "1day";

/// 모멘텀 룩백 (약 6개월, 거래일).
pub const DEFAULT_LOOKBACK: usize = 126;

/// RSI 오실레이터 기간 (거래일).
pub const DEFAULT_OSCILLATOR_PERIOD: usize = 10;

/// 의사결정에 필요한 최소 윈도우 길이 (거래일).
pub const DEFAULT_MIN_HISTORY: usize = 30;

/// 미국 섹터 SPDR ETF (11개).
pub const US_SECTOR_ETFS: [&str; 11] = [
    "XLK", "XLF", "XLV", "XLY", "XLP", "XLE", "XLI", "XLB", "XLU", "XLRE", "XLC",
];

/// 상장 이전 구간을 대신할 프록시.
///
/// XLRE(2015 상장) -> IYR, XLC(2018 상장) -> VOX.
pub const US_SECTOR_PROXIES: [(&str, &str); 2] = [("XLRE", "IYR"), ("XLC", "VOX")];

/// 미국 섹터 유니버스.
pub fn us_sector_universe() -> Universe {
    let proxies: ProxyMap = US_SECTOR_PROXIES.into_iter().collect();
    Universe::new(US_SECTOR_ETFS, proxies)
}

/// 섹터 이름 (표시용).
pub fn sector_name(ticker: &str) -> Option<&'static str> {
    let name = match ticker {
        "XLK" => "기술",
        "XLF" => "금융",
        "XLV" => "헬스케어",
        "XLY" => "경기소비재",
        "XLP" => "필수소비재",
        "XLE" => "에너지",
        "XLI" => "산업재",
        "XLB" => "소재",
        "XLU" => "유틸리티",
        "XLRE" | "IYR" => "부동산",
        "XLC" | "VOX" => "통신",
        _ => return None,
    };
    Some(name)
}
