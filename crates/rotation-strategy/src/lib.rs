//! 섹터 로테이션 의사결정 엔진.
//!
//! 이 크레이트가 제공하는 기능:
//! - 호스트 런타임 연동을 위한 `AllocationStrategy` trait
//! - 모멘텀/RSI 스코어링 및 프록시 스티칭 유틸리티
//! - 설정 가능한 단일 의사결정 함수 (`SectorRotationStrategy`)
//! - 이름 있는 정책 프리셋 레지스트리
//!
//! # 예제
//!
//! ```rust,ignore
//! use rotation_strategy::{AllocationStrategy, PresetRegistry};
//! use serde_json::json;
//!
//! let strategy = PresetRegistry::create_instance("sector_top2").unwrap();
//! let payload = json!({ "ohlcv": [] });
//!
//! // 데이터가 부족하면 현금 보유 (빈 배분)
//! let allocation = strategy.run_host(&payload);
//! assert!(allocation.is_cash());
//! ```

pub mod macros;
pub mod registry;
pub mod strategies;
pub mod traits;

// 주요 타입 재내보내기
pub use registry::{PresetMeta, PresetRegistry};
pub use strategies::{
    Decision, OscillatorConfig, RotationPolicy, ScoreEntry, SectorRotationStrategy, SkipReason,
};
pub use traits::AllocationStrategy;
