//! 전략을 위한 공통 유틸리티 및 계산기.
//!
//! - **defaults**: 기본 상수와 미국 섹터 유니버스
//! - **indicators**: 오실레이터 계산
//! - **momentum**: 룩백 수익률 계산
//! - **stitch**: 프록시 스티칭

pub mod defaults;
pub mod indicators;
pub mod momentum;
pub mod stitch;

pub use defaults::{
    sector_name, us_sector_universe, DEFAULT_INTERVAL, DEFAULT_LOOKBACK, DEFAULT_MIN_HISTORY,
    DEFAULT_OSCILLATOR_PERIOD, US_SECTOR_ETFS, US_SECTOR_PROXIES,
};
pub use indicators::calculate_simple_rsi;
pub use momentum::simple_momentum;
pub use stitch::{stitch_closes, StitchedSeries};
