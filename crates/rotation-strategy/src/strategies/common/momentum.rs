//! 룩백 수익률 모멘텀.
//!
//! 섹터 순위는 단일 기간 수익률로 매깁니다. 가격 시리즈는 시간순
//! (가장 최근 가격이 마지막)입니다.

use rust_decimal::Decimal;

/// 단순 모멘텀 계산 (단일 기간).
///
/// 기준가는 시리즈 끝에서 `lookback`번째 종가(`closes[len - lookback]`)입니다.
/// 시리즈 길이가 `lookback`보다 길어야 계산합니다.
///
/// # 인수
/// * `closes` - 시간순 종가 시리즈 (최신이 마지막).
/// * `lookback` - 거래일 기준 룩백 기간.
///
/// # 반환값
/// 소수점 형태의 모멘텀 (예: 0.10 = 10% 수익률). 데이터 부족이거나
/// 기준가가 0 이하이거나 계산이 Decimal 범위를 넘으면 `None`.
pub fn simple_momentum(closes: &[Decimal], lookback: usize) -> Option<Decimal> {
    if lookback == 0 || closes.len() <= lookback {
        return None;
    }

    let latest = *closes.last()?;
    let reference = closes[closes.len() - lookback];

    if reference <= Decimal::ZERO {
        return None;
    }

    latest.checked_sub(reference)?.checked_div(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// 길이 `len`, 기준 위치 종가 100, 최신 종가 110인 시리즈.
    fn series_with_reference(len: usize, lookback: usize) -> Vec<Decimal> {
        let mut closes = vec![dec!(105); len];
        closes[len - lookback] = dec!(100);
        closes[len - 1] = dec!(110);
        closes
    }

    #[test]
    fn test_simple_momentum_positive() {
        let closes = series_with_reference(130, 126);
        assert_eq!(simple_momentum(&closes, 126), Some(dec!(0.1)));
    }

    #[test]
    fn test_simple_momentum_negative() {
        let mut closes = vec![dec!(100); 10];
        closes[9] = dec!(95);
        assert_eq!(simple_momentum(&closes, 5), Some(dec!(-0.05)));
    }

    #[test]
    fn test_insufficient_history() {
        let closes = vec![dec!(100); 126];
        assert_eq!(simple_momentum(&closes, 126), None);
        assert!(simple_momentum(&[dec!(100); 127], 126).is_some());
    }

    #[test]
    fn test_non_positive_reference_excluded() {
        let mut closes = vec![dec!(100); 20];
        closes[20 - 10] = Decimal::ZERO;
        assert_eq!(simple_momentum(&closes, 10), None);

        closes[20 - 10] = dec!(-1);
        assert_eq!(simple_momentum(&closes, 10), None);
    }

    #[test]
    fn test_overflowing_return_excluded() {
        // 기준가가 극히 작으면 수익률이 Decimal 범위를 넘음
        let mut closes = vec![dec!(0.0000000000000000000000000001); 4];
        closes.push(dec!(1000));
        assert_eq!(simple_momentum(&closes, 3), None);
    }

    #[test]
    fn test_zero_lookback() {
        assert_eq!(simple_momentum(&[dec!(1), dec!(2)], 0), None);
    }
}
