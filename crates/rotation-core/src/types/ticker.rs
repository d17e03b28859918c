//! 종목 코드(티커) 헬퍼.

/// 티커를 정규화합니다 (앞뒤 공백 제거, 대문자 변환).
///
/// 호스트 페이로드와 설정 파일에서 들어오는 티커는 모두 이 형태로 비교합니다.
pub fn normalize_ticker(raw: &str) -> String {
    raw.trim().to_uppercase()
}
