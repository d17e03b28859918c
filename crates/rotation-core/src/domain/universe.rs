//! 투자 유니버스와 프록시 매핑.
//!
//! 상장일 이전 구간처럼 주 종목 데이터가 없는 날에는 더 오래된 유사 종목
//! (예: XLRE 대신 IYR)의 데이터를 사용합니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::history::DailySnapshot;
use crate::types::normalize_ticker;

/// 주 종목 -> 대체 종목 매핑.
///
/// 역직렬화된 티커도 `insert`와 같이 정규화됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ProxyMap(BTreeMap<String, String>);

impl ProxyMap {
    /// 빈 매핑을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 매핑을 추가합니다.
    pub fn insert(&mut self, primary: impl AsRef<str>, proxy: impl AsRef<str>) {
        self.0
            .insert(normalize_ticker(primary.as_ref()), normalize_ticker(proxy.as_ref()));
    }

    /// 주 종목의 대체 종목을 반환합니다.
    pub fn proxy_for(&self, primary: &str) -> Option<&str> {
        self.0.get(primary).map(String::as_str)
    }

    /// (주 종목, 대체 종목) 반복자.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 매핑 수.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: AsRef<str>, Q: AsRef<str>> FromIterator<(P, Q)> for ProxyMap {
    fn from_iter<I: IntoIterator<Item = (P, Q)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (primary, proxy) in iter {
            map.insert(primary, proxy);
        }
        map
    }
}

impl From<BTreeMap<String, String>> for ProxyMap {
    fn from(raw: BTreeMap<String, String>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<ProxyMap> for BTreeMap<String, String> {
    fn from(map: ProxyMap) -> Self {
        map.0
    }
}

/// 주 종목 목록과 프록시 매핑.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    /// 주 종목 (설정 순서 유지)
    pub primaries: Vec<String>,
    /// 프록시 매핑
    #[serde(default)]
    pub proxies: ProxyMap,
}

impl Universe {
    /// 유니버스를 생성합니다. 티커는 정규화되고 중복은 제거됩니다.
    pub fn new<I, S>(primaries: I, proxies: ProxyMap) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for ticker in primaries {
            let ticker = normalize_ticker(ticker.as_ref());
            if !unique.contains(&ticker) {
                unique.push(ticker);
            }
        }

        Self {
            primaries: unique,
            proxies,
        }
    }

    /// 주 종목 수.
    pub fn len(&self) -> usize {
        self.primaries.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.primaries.is_empty()
    }

    /// 호스트에 요청할 전체 종목 목록 (주 종목 다음에 대체 종목, 중복 제거).
    pub fn tracked_tickers(&self) -> Vec<String> {
        let mut tickers = self.primaries.clone();
        for (_, proxy) in self.proxies.iter() {
            if !tickers.iter().any(|t| t == proxy) {
                tickers.push(proxy.to_string());
            }
        }
        tickers
    }

    /// 주어진 스냅샷에서 실제로 거래 가능한 종목을 결정합니다.
    ///
    /// 주 종목이 있으면 주 종목, 없고 대체 종목이 있으면 대체 종목,
    /// 둘 다 없으면 `None`.
    pub fn resolve_in<'a>(&'a self, primary: &'a str, snapshot: &DailySnapshot) -> Option<&'a str> {
        if snapshot.contains(primary) {
            return Some(primary);
        }
        self.proxies
            .proxy_for(primary)
            .filter(|proxy| snapshot.contains(proxy))
    }
}
