//! # Rotation Core
//!
//! 섹터 로테이션 전략의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트가 제공하는 기능:
//! - 일봉(OHLCV) 및 일자별 스냅샷 타입
//! - 과거 데이터 윈도우와 호스트 페이로드 어댑터
//! - 투자 유니버스 및 프록시 매핑
//! - 목표 비중(TargetAllocation) 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
