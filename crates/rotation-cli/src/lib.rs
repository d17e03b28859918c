//! 섹터 로테이션 호스트 하네스.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 호스트 페이로드(JSON) 로드
//! - 프리셋/설정 파일 기반 전략 구성
//! - 단일 의사결정 및 일자별 리플레이
//! - 프리셋 조회

pub mod commands;
