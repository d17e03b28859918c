//! 프리셋 등록 매크로
//!
//! `register_preset!` 매크로를 사용하여 로테이션 정책을 레지스트리에 자동 등록합니다.

/// 프리셋 등록 매크로
///
/// 프리셋 메타데이터를 선언적으로 정의하고 inventory에 자동 등록합니다.
///
/// # 필수 필드
/// - `id`: 프리셋 고유 ID (snake_case, 예: "sector_top2")
/// - `name`: 한글 이름
/// - `description`: 프리셋 설명
/// - `factory`: `fn() -> RotationPolicy` 정책 팩토리
///
/// # 선택 필드
/// - `aliases`: 별칭 배열 (기본값: 빈 배열)
///
/// # 예시
/// ```ignore
/// register_preset! {
///     id: "sector_top1",
///     aliases: ["winner_takes_all"],
///     name: "섹터 1위 몰빵",
///     description: "모멘텀 1위 섹터에 전액 투자",
///     factory: presets::sector_top1
/// }
/// ```
#[macro_export]
macro_rules! register_preset {
    (
        id: $id:expr,
        aliases: [$($alias:expr),* $(,)?],
        name: $name:expr,
        description: $desc:expr,
        factory: $factory:expr $(,)?
    ) => {
        inventory::submit! {
            $crate::registry::PresetMeta {
                id: $id,
                aliases: &[$($alias),*],
                name: $name,
                description: $desc,
                factory: $factory,
            }
        }
    };

    // 별칭 없음
    (
        id: $id:expr,
        name: $name:expr,
        description: $desc:expr,
        factory: $factory:expr $(,)?
    ) => {
        $crate::register_preset! {
            id: $id,
            aliases: [],
            name: $name,
            description: $desc,
            factory: $factory
        }
    };
}
