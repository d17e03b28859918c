//! 프리셋 조회 명령어.
//!
//! # 사용 예시
//!
//! ```bash
//! # 등록된 프리셋 목록
//! rotation presets
//!
//! # 프리셋 정책을 TOML로 출력 (수정 후 --config로 재사용)
//! rotation presets --show sector_top2 > my_policy.toml
//! ```

use anyhow::{Context, Result};
use rotation_strategy::PresetRegistry;

/// 프리셋 목록을 렌더링합니다.
pub fn list_presets() -> String {
    let mut out = String::new();
    out.push_str("\n📋 사용 가능한 프리셋 목록:\n");
    out.push_str("═══════════════════════════════════════════════════════════════\n\n");
    out.push_str("  프리셋                  | 설명\n");
    out.push_str("  ─────────────────────────────────────────────────────────────\n");

    for meta in PresetRegistry::all() {
        out.push_str(&format!("  {:<23} | {}\n", meta.id, meta.name));
        out.push_str(&format!("  {:<23} | {}\n", "", meta.description));
        if !meta.aliases.is_empty() {
            out.push_str(&format!("  {:<23} | 별칭: {}\n", "", meta.aliases.join(", ")));
        }
    }

    out.push_str("\n═══════════════════════════════════════════════════════════════\n");
    out.push_str("\n정책 상세: rotation presets --show <프리셋>\n");
    out
}

/// 프리셋 정책을 TOML로 렌더링합니다.
pub fn show_preset(query: &str) -> Result<String> {
    let meta = PresetRegistry::find(query)
        .with_context(|| format!("알 수 없는 프리셋: {}", query))?;
    let body = meta.policy().to_toml_string()?;

    Ok(format!("# {} ({})\n# {}\n\n{}", meta.name, meta.id, meta.description, body))
}
