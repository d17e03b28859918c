//! 섹터 로테이션 시스템의 에러 타입.
//!
//! 의사결정 함수 자체는 에러를 반환하지 않습니다. 이 타입은 설정 검증과
//! 호스트 경계(페이로드 파싱) 단계에서만 사용됩니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum RotationError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터 에러 (누락되었거나 형식이 잘못된 호스트 데이터)
    #[error("데이터 에러: {0}")]
    Data(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 로테이션 작업을 위한 Result 타입.
pub type RotationResult<T> = Result<T, RotationError>;

impl RotationError {
    /// 호스트 데이터 문제로 인한 에러인지 확인합니다.
    ///
    /// 데이터 에러는 현금 보유(빈 배분)로 처리되어야 합니다.
    pub fn is_data_error(&self) -> bool {
        matches!(self, RotationError::Data(_) | RotationError::Serialization(_))
    }
}

impl From<serde_json::Error> for RotationError {
    fn from(err: serde_json::Error) -> Self {
        RotationError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for RotationError {
    fn from(err: toml::de::Error) -> Self {
        RotationError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for RotationError {
    fn from(err: toml::ser::Error) -> Self {
        RotationError::Serialization(err.to_string())
    }
}
