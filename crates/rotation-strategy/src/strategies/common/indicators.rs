//! 오실레이터 계산.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 단순 평균 RSI (Relative Strength Index) 계산.
///
/// 최근 `period + 1`개 종가의 일간 변화를 상승분/하락분으로 나누고, 각각을
/// 기간 단순 평균으로 구합니다 (Wilder 지수 평활 없음).
///
/// # Arguments
/// * `closes` - 종가 데이터 (최신 데이터가 마지막)
/// * `period` - RSI 기간 (로테이션 전략은 10)
///
/// # Returns
/// RSI 값 (0~100), 데이터 부족이나 Decimal 범위 초과 시 None. 평균 하락분이 0이면 100.
pub fn calculate_simple_rsi(closes: &[Decimal], period: usize) -> Option<Decimal> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let recent = &closes[closes.len() - period - 1..];
    let mut gains = Decimal::ZERO;
    let mut losses = Decimal::ZERO;

    for pair in recent.windows(2) {
        let change = pair[1].checked_sub(pair[0])?;
        if change > Decimal::ZERO {
            gains = gains.checked_add(change)?;
        } else {
            losses = losses.checked_add(change.abs())?;
        }
    }

    let avg_gain = gains.checked_div(Decimal::from(period))?;
    let avg_loss = losses.checked_div(Decimal::from(period))?;

    if avg_loss.is_zero() {
        return Some(dec!(100));
    }

    let rs = avg_gain.checked_div(avg_loss)?;
    let ratio = dec!(100).checked_div(Decimal::ONE.checked_add(rs)?)?;
    dec!(100).checked_sub(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_all_gains_is_100() {
        let closes: Vec<Decimal> = (0..11).map(|i| Decimal::from(100 + i)).collect();
        assert_eq!(calculate_simple_rsi(&closes, 10), Some(dec!(100)));
    }

    #[test]
    fn test_rsi_flat_is_100() {
        // 변화가 없으면 평균 하락분이 0
        let closes = vec![dec!(50); 11];
        assert_eq!(calculate_simple_rsi(&closes, 10), Some(dec!(100)));
    }

    #[test]
    fn test_rsi_all_losses_is_0() {
        let closes: Vec<Decimal> = (0..11).map(|i| Decimal::from(100 - i)).collect();
        assert_eq!(calculate_simple_rsi(&closes, 10), Some(Decimal::ZERO));
    }

    #[test]
    fn test_rsi_balanced_is_50() {
        // +2, -2 반복: 평균 상승분 = 평균 하락분
        let closes: Vec<Decimal> = (0..11)
            .map(|i| if i % 2 == 0 { dec!(100) } else { dec!(102) })
            .collect();
        assert_eq!(calculate_simple_rsi(&closes, 10), Some(dec!(50)));
    }

    #[test]
    fn test_rsi_uses_only_recent_window() {
        // 앞부분의 큰 하락은 창 밖이므로 무시
        let mut closes = vec![dec!(200), dec!(100)];
        closes.extend((0..11).map(|i| Decimal::from(100 + i)));
        assert_eq!(calculate_simple_rsi(&closes, 10), Some(dec!(100)));
    }

    #[test]
    fn test_rsi_known_value() {
        // 상승 합 3, 하락 합 1 (period 4) -> RS = 3, RSI = 75
        let closes = vec![dec!(10), dec!(11), dec!(12), dec!(11), dec!(12)];
        assert_eq!(calculate_simple_rsi(&closes, 4), Some(dec!(75)));
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let closes = vec![dec!(1); 10];
        assert_eq!(calculate_simple_rsi(&closes, 10), None);
        assert_eq!(calculate_simple_rsi(&closes, 0), None);
    }

    #[test]
    fn test_rsi_overflowing_changes() {
        // 변화 합이 Decimal::MAX를 넘음
        let closes = vec![Decimal::ZERO, Decimal::MAX, Decimal::ZERO, Decimal::MAX];
        assert_eq!(calculate_simple_rsi(&closes, 3), None);
    }
}
