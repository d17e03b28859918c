//! 설정 관리.
//!
//! 호스트 하네스(CLI)가 읽는 애플리케이션 설정을 정의합니다. 전략 자체는
//! 생성 시점에 고정된 불변 설정만 사용하므로, 여기서 읽은 값은 프리셋 정책을
//! 덮어쓰는 용도로만 쓰입니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::PartialFill;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 전략 설정
    #[serde(default)]
    pub strategy: StrategySection,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 전략 설정 섹션.
///
/// `preset`으로 기본 정책을 고르고, 나머지 필드는 지정된 경우에만 덮어씁니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StrategySection {
    /// 프리셋 ID 또는 별칭
    #[serde(default = "default_preset")]
    pub preset: String,
    /// 모멘텀 룩백 (거래일)
    #[serde(default)]
    pub lookback: Option<usize>,
    /// 최소 윈도우 길이 (거래일)
    #[serde(default)]
    pub min_history: Option<usize>,
    /// 선택 종목 수
    #[serde(default)]
    pub selection_count: Option<usize>,
    /// 양의 모멘텀 필터
    #[serde(default)]
    pub require_positive: Option<bool>,
    /// RSI 오실레이터 기간 (지정 시 오실레이터 정렬 사용)
    #[serde(default)]
    pub oscillator_period: Option<usize>,
    /// 부분 체결 시 비중 처리
    #[serde(default)]
    pub partial_fill: Option<PartialFill>,
    /// 유니버스 (주 종목 목록)
    #[serde(default)]
    pub universe: Option<Vec<String>>,
    /// 프록시 매핑 (주 종목 -> 대체 종목)
    #[serde(default)]
    pub proxies: Option<BTreeMap<String, String>>,
}

fn default_preset() -> String {
    "sector_top1".to_string()
}

impl Default for StrategySection {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            lookback: None,
            min_history: None,
            selection_count: None,
            require_positive: None,
            oscillator_period: None,
            partial_fill: None,
            universe: None,
            proxies: None,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수(`ROTATION__*`)에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("ROTATION")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// TOML 문자열에서 설정을 로드합니다 (환경 변수 미적용).
    pub fn from_toml_str(content: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.strategy.preset, "sector_top1");
        assert_eq!(config.logging.level, "info");
        assert!(config.strategy.lookback.is_none());
    }

    #[test]
    fn test_from_toml_str_with_overrides() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            level = "debug"
            format = "compact"

            [strategy]
            preset = "sector_top2"
            lookback = 63
            partial_fill = "hold_cash"

            [strategy.proxies]
            XLRE = "IYR"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "compact");
        assert_eq!(config.strategy.preset, "sector_top2");
        assert_eq!(config.strategy.lookback, Some(63));
        assert_eq!(config.strategy.partial_fill, Some(PartialFill::HoldCash));
        // config 크레이트는 키 대소문자를 보존하지 않을 수 있음
        let proxies = config.strategy.proxies.unwrap();
        let proxy = proxies
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("XLRE"))
            .map(|(_, v)| v.as_str());
        assert_eq!(proxy, Some("IYR"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.strategy.preset, "sector_top1");
        assert_eq!(config.logging.format, "pretty");
    }
}
