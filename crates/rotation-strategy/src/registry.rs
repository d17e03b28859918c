//! 프리셋 레지스트리 시스템
//!
//! 컴파일 타임에 모든 로테이션 프리셋을 자동으로 수집하고 관리합니다.
//! `inventory` crate를 사용하여 프리셋 메타데이터를 자동 등록합니다.

use rotation_core::{RotationError, RotationResult};
use serde_json::json;

use crate::strategies::{RotationPolicy, SectorRotationStrategy};

/// 프리셋 메타데이터 (컴파일 타임 상수)
///
/// 각 프리셋은 `register_preset!` 매크로를 통해 자동으로 등록됩니다.
#[derive(Clone)]
pub struct PresetMeta {
    /// 프리셋 ID (영문, snake_case)
    pub id: &'static str,

    /// 별칭 (여러 이름으로 접근 가능)
    pub aliases: &'static [&'static str],

    /// 프리셋 이름 (한글)
    pub name: &'static str,

    /// 프리셋 설명
    pub description: &'static str,

    /// 정책 팩토리 함수
    pub factory: fn() -> RotationPolicy,
}

impl std::fmt::Debug for PresetMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresetMeta")
            .field("id", &self.id)
            .field("aliases", &self.aliases)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("factory", &"<fn>")
            .finish()
    }
}

impl PresetMeta {
    /// 프리셋 ID 또는 별칭으로 매칭
    pub fn matches(&self, query: &str) -> bool {
        self.id == query || self.aliases.contains(&query)
    }

    /// 프리셋 정책 생성
    pub fn policy(&self) -> RotationPolicy {
        (self.factory)()
    }
}

// 전역 레지스트리에 등록 (inventory 사용)
inventory::collect!(PresetMeta);

/// 프리셋 레지스트리 조회 API
pub struct PresetRegistry;

impl PresetRegistry {
    /// 모든 등록된 프리셋 메타데이터 (ID 순)
    pub fn all() -> Vec<&'static PresetMeta> {
        let mut metas: Vec<_> = inventory::iter::<PresetMeta>.into_iter().collect();
        metas.sort_by_key(|meta| meta.id);
        metas
    }

    /// ID/별칭으로 프리셋 검색
    pub fn find(query: &str) -> Option<&'static PresetMeta> {
        inventory::iter::<PresetMeta>
            .into_iter()
            .find(|meta| meta.matches(query))
    }

    /// ID/별칭으로 정책 조회
    pub fn policy(query: &str) -> RotationResult<RotationPolicy> {
        Self::find(query)
            .map(PresetMeta::policy)
            .ok_or_else(|| RotationError::NotFound(format!("프리셋 '{}'", query)))
    }

    /// 전략 인스턴스 생성
    pub fn create_instance(query: &str) -> RotationResult<SectorRotationStrategy> {
        let meta = Self::find(query)
            .ok_or_else(|| RotationError::NotFound(format!("프리셋 '{}'", query)))?;
        Ok(SectorRotationStrategy::new(meta.id, meta.policy())?.with_name(meta.name))
    }

    /// 프리셋 목록 (JSON)
    pub fn to_json() -> serde_json::Value {
        let presets: Vec<_> = Self::all()
            .into_iter()
            .map(|meta| {
                let policy = meta.policy();
                json!({
                    "id": meta.id,
                    "aliases": meta.aliases,
                    "name": meta.name,
                    "description": meta.description,
                    "selectionCount": policy.selection_count,
                    "requirePositive": policy.require_positive,
                    "oscillatorPeriod": policy.oscillator.map(|o| o.period),
                    "partialFill": policy.partial_fill,
                    "minHistory": policy.min_history,
                    "lookback": policy.lookback,
                })
            })
            .collect();
        json!({ "presets": presets })
    }

    /// 프리셋 ID 목록
    pub fn list_ids() -> Vec<&'static str> {
        Self::all().into_iter().map(|meta| meta.id).collect()
    }

    /// 등록된 프리셋 수
    pub fn count() -> usize {
        inventory::iter::<PresetMeta>.into_iter().count()
    }
}
