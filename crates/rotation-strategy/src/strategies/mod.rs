//! 내장 로테이션 전략.
//!
//! - **Sector Rotation**: 모멘텀 순위 기반 섹터 ETF 로테이션 (상위 1/2개 선택,
//!   양의 모멘텀 필터, RSI 눌림목 선택 등은 모두 `RotationPolicy` 설정으로 표현)
//!
//! ## 공통 유틸리티
//!
//! `common` 서브모듈은 재사용 가능한 컴포넌트를 제공합니다:
//! - **momentum**: 단일 룩백 수익률 모멘텀
//! - **indicators**: 단순 평균 RSI 오실레이터
//! - **stitch**: 프록시 종목으로 상장 이전 구간을 메운 종가 시계열

pub mod common;
pub mod presets;
pub mod sector_rotation;

pub use common::*;
pub use sector_rotation::*;
