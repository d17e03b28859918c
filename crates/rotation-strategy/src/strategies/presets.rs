//! 섹터 로테이션 프리셋.
//!
//! 미국 섹터 SPDR 유니버스를 공유하고 선택 개수, 추세 필터, 오실레이터,
//! 부분 체결 처리만 다른 정책들입니다.

use rotation_core::PartialFill;

use super::sector_rotation::{OscillatorConfig, RotationPolicy};
use crate::register_preset;

/// 모멘텀 1위 섹터에 전액 투자 (추세 필터 없음).
pub fn sector_top1() -> RotationPolicy {
    RotationPolicy::default()
}

/// 모멘텀 1위 섹터가 상승 추세일 때만 투자.
pub fn sector_top1_trend() -> RotationPolicy {
    RotationPolicy {
        require_positive: true,
        ..RotationPolicy::default()
    }
}

/// 상승 추세 상위 2개 섹터 동일 비중. 한쪽만 거래 가능하면 전액 재분배.
pub fn sector_top2() -> RotationPolicy {
    RotationPolicy {
        selection_count: 2,
        require_positive: true,
        partial_fill: PartialFill::Renormalize,
        ..RotationPolicy::default()
    }
}

/// 상승 추세 상위 2개 섹터 동일 비중. 빈 슬롯은 현금 보유.
pub fn sector_top2_hold_cash() -> RotationPolicy {
    RotationPolicy {
        partial_fill: PartialFill::HoldCash,
        ..sector_top2()
    }
}

/// 상승 추세 섹터 중 RSI가 가장 낮은 섹터 (눌림목).
pub fn sector_rsi_dip() -> RotationPolicy {
    RotationPolicy {
        require_positive: true,
        oscillator: Some(OscillatorConfig::default()),
        min_history: 11,
        ..RotationPolicy::default()
    }
}

register_preset! {
    id: "sector_top1",
    aliases: ["winner_takes_all"],
    name: "섹터 1위 몰빵",
    description: "6개월 모멘텀 1위 섹터 ETF에 전액 투자합니다.",
    factory: sector_top1
}

register_preset! {
    id: "sector_top1_trend",
    name: "섹터 1위 추세 필터",
    description: "6개월 모멘텀 1위 섹터가 양의 수익률일 때만 투자하고, 아니면 현금 보유합니다.",
    factory: sector_top1_trend
}

register_preset! {
    id: "sector_top2",
    name: "섹터 상위 2개",
    description: "양의 모멘텀 상위 2개 섹터에 50%씩 투자합니다. 한쪽만 거래 가능하면 100% 배분합니다.",
    factory: sector_top2
}

register_preset! {
    id: "sector_top2_hold_cash",
    name: "섹터 상위 2개 (현금 보유)",
    description: "양의 모멘텀 상위 2개 섹터에 50%씩 투자합니다. 거래 불가 슬롯은 현금으로 남깁니다.",
    factory: sector_top2_hold_cash
}

register_preset! {
    id: "sector_rsi_dip",
    name: "섹터 RSI 눌림목",
    description: "양의 모멘텀 섹터 중 10일 RSI가 가장 낮은 섹터에 전액 투자합니다.",
    factory: sector_rsi_dip
}
