//! 입력 로드: 호스트 페이로드와 정책 설정 파일.
//!
//! `--config` 파일은 두 가지 형식을 받습니다:
//! - 앱 설정 (`[logging]`, `[strategy]` 섹션) - `config` crate로 로드, `ROTATION__*` 환경 변수 적용
//! - 정책 TOML (`rotation presets --show <id>` 출력 그대로)

use anyhow::{anyhow, Context, Result};
use rotation_core::{AppConfig, HistoryWindow, LogConfig, OHLCV_KEY};
use rotation_strategy::{PresetRegistry, RotationPolicy, SectorRotationStrategy};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// 기본 프리셋.
pub const DEFAULT_PRESET: &str = "sector_top1";

/// `--config`로 지정된 설정 파일.
#[derive(Debug, Clone)]
pub enum ConfigFile {
    /// 앱 설정 (프리셋 + 덮어쓰기)
    App(AppConfig),
    /// 완전한 정책
    Policy(RotationPolicy),
}

impl ConfigFile {
    /// 파일을 읽어 형식을 판별합니다.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("설정 파일을 읽을 수 없습니다: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("TOML 파싱 실패: {}", path.display()))?;

        if table.contains_key("strategy") || table.contains_key("logging") {
            let config = AppConfig::load(path)
                .with_context(|| format!("앱 설정 로드 실패: {}", path.display()))?;
            debug!(preset = %config.strategy.preset, "앱 설정 로드");
            Ok(Self::App(config))
        } else {
            let policy = RotationPolicy::from_toml_str(&content)
                .with_context(|| format!("정책 설정 로드 실패: {}", path.display()))?;
            Ok(Self::Policy(policy))
        }
    }

    /// 로그 설정 (앱 설정이면 `[logging]` 섹션, 아니면 환경 변수).
    pub fn log_config(&self) -> LogConfig {
        match self {
            Self::App(config) => LogConfig::from_section(&config.logging),
            Self::Policy(_) => LogConfig::from_env(),
        }
    }
}

/// 명령행 인자로 전략을 구성합니다.
///
/// `--preset`이 있으면 앱 설정의 `preset`보다 우선합니다.
pub fn build_strategy(
    preset: Option<&str>,
    config: Option<&ConfigFile>,
) -> Result<SectorRotationStrategy> {
    match config {
        Some(ConfigFile::Policy(policy)) => {
            let id = preset.unwrap_or("custom");
            let strategy = SectorRotationStrategy::new(id, policy.clone())?;
            Ok(strategy)
        }
        Some(ConfigFile::App(app)) => {
            let id = preset.unwrap_or(&app.strategy.preset);
            let meta = PresetRegistry::find(id)
                .ok_or_else(|| anyhow!("알 수 없는 프리셋: {}", id))?;
            let policy = meta.policy().with_overrides(&app.strategy);
            let strategy = SectorRotationStrategy::new(meta.id, policy)
                .with_context(|| format!("프리셋 '{}' 덮어쓰기 검증 실패", meta.id))?;
            Ok(strategy.with_name(meta.name))
        }
        None => {
            let id = preset.unwrap_or(DEFAULT_PRESET);
            PresetRegistry::create_instance(id)
                .with_context(|| "rotation presets 로 사용 가능한 프리셋을 확인하세요")
        }
    }
}

/// 호스트 페이로드 JSON 파일을 읽습니다.
pub fn load_payload(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("입력 파일을 읽을 수 없습니다: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("JSON 파싱 실패: {}", path.display()))
}

/// 호스트 페이로드 파일을 윈도우로 변환합니다.
///
/// `{"ohlcv": ...}` 컨테이너와 `"ohlcv"` 값 자체를 모두 받습니다.
pub fn load_window(path: &Path) -> Result<HistoryWindow> {
    let payload = load_payload(path)?;

    let window = if is_bare_ohlcv(&payload) {
        HistoryWindow::from_ohlcv_value(&payload)
    } else {
        HistoryWindow::from_host_value(&payload)
    }
    .with_context(|| format!("호스트 데이터 해석 실패: {}", path.display()))?;

    info!(days = window.len(), path = %path.display(), "윈도우 로드");
    Ok(window)
}

/// 컨테이너 없이 `"ohlcv"` 값만 담긴 페이로드인지 판별합니다.
///
/// 일자별 배열이거나, 모든 값이 배열인 종목별 맵이어야 합니다. 그 외 객체는
/// 컨테이너로 보고 `"ohlcv"` 키 누락을 보고합니다.
fn is_bare_ohlcv(payload: &Value) -> bool {
    match payload {
        Value::Array(_) => true,
        Value::Object(map) => {
            !map.contains_key(OHLCV_KEY) && !map.is_empty() && map.values().all(Value::is_array)
        }
        _ => false,
    }
}
