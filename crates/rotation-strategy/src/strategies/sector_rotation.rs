//! 섹터 로테이션 전략 (Sector Rotation)
//!
//! 섹터 ETF 유니버스를 후행 모멘텀으로 순위를 매기고 상위 종목에 비중을
//! 배분하는 일간 전략. 과거에 복제되어 흩어져 있던 변형들(상위 1개 몰빵,
//! 상위 2개 동일 비중, 양의 모멘텀 필터, RSI 눌림목 선택)은 모두
//! [`RotationPolicy`] 값 하나로 표현됩니다.
//!
//! # 의사결정 순서
//!
//! 1. 윈도우가 비어 있거나 `min_history`보다 짧으면 현금 보유
//! 2. 주 종목마다 프록시 스티칭으로 종가 시계열 구성
//! 3. `lookback` 수익률 모멘텀 계산 (이력 부족/기준가 0 이하 종목은 제외)
//! 4. (선택) 양의 모멘텀 종목 중 단순 평균 RSI가 낮은 순으로 정렬
//! 5. 상위 `selection_count`개 선택
//! 6. 최신 스냅샷 기준으로 주 종목 또는 프록시로 실행 종목 결정
//! 7. 슬롯 비중 배분 (`PartialFill`에 따라 재분배 또는 현금 보유)
//!
//! 의사결정은 에러를 반환하지 않으며, 모든 이상 상황은 빈 배분이나
//! 부분 배분으로 처리됩니다.

use chrono::NaiveDate;
use rotation_core::{
    decision_span, normalize_ticker, DailySnapshot, HistoryWindow, PartialFill, ProxyMap,
    RotationError, RotationResult, StrategySection, TargetAllocation, Universe,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::strategies::common::{
    calculate_simple_rsi, simple_momentum, stitch_closes, us_sector_universe, DEFAULT_LOOKBACK,
    DEFAULT_MIN_HISTORY, DEFAULT_OSCILLATOR_PERIOD,
};
use crate::traits::AllocationStrategy;

/// RSI 오실레이터 설정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscillatorConfig {
    /// RSI 기간 (거래일)
    #[serde(default = "default_oscillator_period")]
    pub period: usize,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_OSCILLATOR_PERIOD,
        }
    }
}

/// 로테이션 정책 설정.
///
/// 생성 시점에 고정되는 불변 설정입니다. 테이블 값(`oscillator`, `proxies`)은
/// TOML 직렬화를 위해 마지막에 둡니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationPolicy {
    /// 주 종목 목록
    #[serde(default = "default_universe")]
    pub universe: Vec<String>,

    /// 모멘텀 룩백 (거래일)
    #[serde(default = "default_lookback")]
    pub lookback: usize,

    /// 최소 윈도우 길이 (거래일). 이보다 짧으면 현금 보유
    #[serde(default = "default_min_history")]
    pub min_history: usize,

    /// 선택 종목 수 (1 = 몰빵, 2 = 동일 비중)
    #[serde(default = "default_selection_count")]
    pub selection_count: usize,

    /// 선택 종목의 모멘텀이 0보다 커야 하는지
    #[serde(default)]
    pub require_positive: bool,

    /// 일부 선택만 실행 가능할 때의 비중 처리
    #[serde(default)]
    pub partial_fill: PartialFill,

    /// RSI 오실레이터 정렬 (지정 시 양의 모멘텀 종목만 대상)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oscillator: Option<OscillatorConfig>,

    /// 프록시 매핑
    #[serde(default = "default_proxies")]
    pub proxies: ProxyMap,
}

fn default_universe() -> Vec<String> {
    us_sector_universe().primaries
}
fn default_proxies() -> ProxyMap {
    us_sector_universe().proxies
}
fn default_lookback() -> usize {
    DEFAULT_LOOKBACK
}
fn default_min_history() -> usize {
    DEFAULT_MIN_HISTORY
}
fn default_selection_count() -> usize {
    1
}
fn default_oscillator_period() -> usize {
    DEFAULT_OSCILLATOR_PERIOD
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            universe: default_universe(),
            lookback: default_lookback(),
            min_history: default_min_history(),
            selection_count: default_selection_count(),
            require_positive: false,
            partial_fill: PartialFill::default(),
            oscillator: None,
            proxies: default_proxies(),
        }
    }
}

impl RotationPolicy {
    /// 설정 값을 검증합니다.
    pub fn validate(&self) -> RotationResult<()> {
        let universe = self.universe();

        if universe.is_empty() {
            return Err(RotationError::Config("유니버스가 비어 있습니다".to_string()));
        }
        if self.lookback == 0 {
            return Err(RotationError::Config("lookback은 1 이상이어야 합니다".to_string()));
        }
        if self.selection_count == 0 || self.selection_count > universe.len() {
            return Err(RotationError::Config(format!(
                "selection_count는 1 이상 {} 이하여야 합니다: {}",
                universe.len(),
                self.selection_count
            )));
        }
        if let Some(osc) = self.oscillator {
            if osc.period == 0 {
                return Err(RotationError::Config(
                    "oscillator.period는 1 이상이어야 합니다".to_string(),
                ));
            }
        }
        if let Some((primary, _)) = self.proxies.iter().find(|(p, q)| p == q) {
            return Err(RotationError::Config(format!(
                "{}의 프록시가 자기 자신입니다",
                primary
            )));
        }

        Ok(())
    }

    /// 정규화된 유니버스.
    pub fn universe(&self) -> Universe {
        Universe::new(&self.universe, self.proxies.clone())
    }

    /// 슬롯당 비중 (1 / selection_count).
    pub fn slot_weight(&self) -> Decimal {
        Decimal::ONE / Decimal::from(self.selection_count.max(1))
    }

    /// 설정 파일의 전략 섹션으로 지정된 값만 덮어씁니다.
    pub fn with_overrides(mut self, section: &StrategySection) -> Self {
        if let Some(lookback) = section.lookback {
            self.lookback = lookback;
        }
        if let Some(min_history) = section.min_history {
            self.min_history = min_history;
        }
        if let Some(count) = section.selection_count {
            self.selection_count = count;
        }
        if let Some(require_positive) = section.require_positive {
            self.require_positive = require_positive;
        }
        if let Some(period) = section.oscillator_period {
            self.oscillator = Some(OscillatorConfig { period });
        }
        if let Some(partial_fill) = section.partial_fill {
            self.partial_fill = partial_fill;
        }
        if let Some(universe) = &section.universe {
            self.universe = universe.iter().map(|t| normalize_ticker(t)).collect();
        }
        if let Some(proxies) = &section.proxies {
            self.proxies = proxies.iter().collect();
        }
        self
    }

    /// TOML 문자열에서 정책을 읽고 검증합니다.
    pub fn from_toml_str(content: &str) -> RotationResult<Self> {
        let policy: Self = toml::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    /// TOML 문자열로 직렬화합니다.
    pub fn to_toml_string(&self) -> RotationResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// 종목별 스코어 (매 호출마다 새로 계산).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    /// 주 종목
    pub ticker: String,
    /// 룩백 수익률
    pub momentum: Decimal,
    /// RSI (오실레이터 정책일 때만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oscillator: Option<Decimal>,
    /// 스티칭된 시계열 길이
    pub history_len: usize,
    /// 프록시 종가를 사용한 일수
    pub proxy_days: usize,
}

/// 현금 보유 사유.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum SkipReason {
    /// 윈도우 없음
    EmptyWindow,
    /// 윈도우가 최소 길이보다 짧음
    InsufficientWindow { len: usize, required: usize },
    /// 조건을 만족하는 종목 없음
    NoCandidates,
    /// 선택 종목이 모두 오늘 거래 불가
    Unresolvable,
}

/// 한 번의 의사결정 결과 (목표 비중 + 진단 정보).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    /// 최신 스냅샷의 거래일
    pub as_of: Option<NaiveDate>,
    /// 스코어 테이블 (모멘텀 내림차순)
    pub scores: Vec<ScoreEntry>,
    /// 선택된 주 종목 (순위 순)
    pub selected: Vec<String>,
    /// 주 종목/프록시 모두 없어 제외된 선택
    pub unresolved: Vec<String>,
    /// 목표 비중
    pub allocation: TargetAllocation,
    /// 현금 보유 사유 (배분이 비어 있을 때)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

impl Decision {
    fn cash(as_of: Option<NaiveDate>, reason: SkipReason) -> Self {
        Self {
            as_of,
            scores: Vec::new(),
            selected: Vec::new(),
            unresolved: Vec::new(),
            allocation: TargetAllocation::cash(),
            skipped: Some(reason),
        }
    }

    /// 전액 현금인지 확인합니다.
    pub fn is_cash(&self) -> bool {
        self.allocation.is_cash()
    }
}

/// 섹터 로테이션 전략.
#[derive(Debug, Clone)]
pub struct SectorRotationStrategy {
    id: String,
    name: String,
    policy: RotationPolicy,
    universe: Universe,
}

impl SectorRotationStrategy {
    /// 정책을 검증하고 전략을 생성합니다.
    pub fn new(id: impl Into<String>, policy: RotationPolicy) -> RotationResult<Self> {
        policy.validate()?;
        let id = id.into();
        let universe = policy.universe();

        info!(
            id = %id,
            universe = universe.len(),
            lookback = policy.lookback,
            selection_count = policy.selection_count,
            require_positive = policy.require_positive,
            oscillator = ?policy.oscillator,
            "섹터 로테이션 전략 초기화"
        );

        Ok(Self {
            name: id.clone(),
            id,
            policy,
            universe,
        })
    }

    /// 표시 이름을 설정합니다.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 전략 ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 정책.
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    /// 유니버스.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// 윈도우 전체로 의사결정합니다.
    pub fn decide(&self, window: &HistoryWindow) -> Decision {
        self.decide_days(window.days())
    }

    /// 스냅샷 슬라이스로 의사결정합니다 (리플레이에서 접두 구간 평가용).
    pub fn decide_days(&self, days: &[DailySnapshot]) -> Decision {
        let as_of = days.last().and_then(DailySnapshot::date);
        let _span = decision_span!(self.id, as_of).entered();

        let Some(latest) = days.last() else {
            debug!("빈 윈도우, 현금 보유");
            return Decision::cash(None, SkipReason::EmptyWindow);
        };

        if days.len() < self.policy.min_history {
            debug!(
                len = days.len(),
                required = self.policy.min_history,
                "윈도우 길이 부족, 현금 보유"
            );
            return Decision::cash(
                as_of,
                SkipReason::InsufficientWindow {
                    len: days.len(),
                    required: self.policy.min_history,
                },
            );
        }

        let scores = self.score_table(days);
        let selected: Vec<String> = self
            .rank_candidates(&scores)
            .into_iter()
            .take(self.policy.selection_count)
            .map(|entry| entry.ticker.clone())
            .collect();

        if selected.is_empty() {
            info!(scored = scores.len(), "조건을 만족하는 섹터 없음, 현금 보유");
            return Decision {
                as_of,
                scores,
                selected,
                unresolved: Vec::new(),
                allocation: TargetAllocation::cash(),
                skipped: Some(SkipReason::NoCandidates),
            };
        }

        let mut resolved = Vec::with_capacity(selected.len());
        let mut unresolved = Vec::new();

        for ticker in &selected {
            match self.universe.resolve_in(ticker, latest) {
                Some(target) => {
                    if target != ticker {
                        info!(primary = %ticker, proxy = %target, "주 종목 데이터 없음, 프록시로 실행");
                    }
                    resolved.push(target.to_string());
                }
                None => {
                    warn!(ticker = %ticker, "오늘 거래 불가 (주 종목/프록시 모두 없음), 선택 제외");
                    unresolved.push(ticker.clone());
                }
            }
        }

        let allocation = self.weigh(&resolved);
        let skipped = allocation.is_cash().then_some(SkipReason::Unresolvable);

        info!(
            selected = ?selected,
            allocation = %allocation,
            "섹터 로테이션 결정"
        );

        Decision {
            as_of,
            scores,
            selected,
            unresolved,
            allocation,
            skipped,
        }
    }

    /// 스코어 테이블을 계산합니다 (모멘텀 내림차순, 동률은 티커 순).
    ///
    /// 이력이 부족하거나 기준가가 0 이하인 종목은 테이블에 넣지 않습니다.
    pub fn score_table(&self, days: &[DailySnapshot]) -> Vec<ScoreEntry> {
        let mut scores: Vec<ScoreEntry> = self
            .universe
            .primaries
            .iter()
            .filter_map(|primary| {
                let series = stitch_closes(days, primary, self.universe.proxies.proxy_for(primary));

                let Some(momentum) = simple_momentum(&series.closes, self.policy.lookback) else {
                    debug!(
                        ticker = %primary,
                        history = series.len(),
                        lookback = self.policy.lookback,
                        "모멘텀 계산 불가, 스코어 제외"
                    );
                    return None;
                };

                let oscillator = self
                    .policy
                    .oscillator
                    .and_then(|osc| calculate_simple_rsi(&series.closes, osc.period));

                debug!(
                    ticker = %primary,
                    momentum = %momentum,
                    oscillator = ?oscillator,
                    proxy_days = series.proxy_days,
                    "섹터 스코어"
                );

                Some(ScoreEntry {
                    ticker: primary.clone(),
                    momentum,
                    oscillator,
                    history_len: series.len(),
                    proxy_days: series.proxy_days,
                })
            })
            .collect();

        scores.sort_by(|a, b| {
            b.momentum
                .cmp(&a.momentum)
                .then_with(|| a.ticker.cmp(&b.ticker))
        });
        scores
    }

    /// 정책에 따라 후보를 순위 순으로 반환합니다.
    fn rank_candidates<'a>(&self, scores: &'a [ScoreEntry]) -> Vec<&'a ScoreEntry> {
        if self.policy.oscillator.is_some() {
            // 상승 추세 안에서 가장 덜 과열된 종목 (눌림목)
            let mut candidates: Vec<&ScoreEntry> = scores
                .iter()
                .filter(|e| e.momentum > Decimal::ZERO && e.oscillator.is_some())
                .collect();
            candidates.sort_by(|a, b| {
                a.oscillator
                    .cmp(&b.oscillator)
                    .then_with(|| b.momentum.cmp(&a.momentum))
                    .then_with(|| a.ticker.cmp(&b.ticker))
            });
            return candidates;
        }

        scores
            .iter()
            .filter(|e| !self.policy.require_positive || e.momentum > Decimal::ZERO)
            .collect()
    }

    /// 실행 종목에 비중을 배분합니다.
    fn weigh(&self, resolved: &[String]) -> TargetAllocation {
        let mut allocation = TargetAllocation::cash();
        if resolved.is_empty() {
            return allocation;
        }

        let weight = match self.policy.partial_fill {
            PartialFill::Renormalize => Decimal::ONE / Decimal::from(resolved.len()),
            PartialFill::HoldCash => self.policy.slot_weight(),
        };

        for ticker in resolved {
            allocation.add(ticker.clone(), weight);
        }
        allocation
    }
}

impl Default for SectorRotationStrategy {
    fn default() -> Self {
        let policy = RotationPolicy::default();
        Self {
            id: "sector_top1".to_string(),
            name: "sector_top1".to_string(),
            universe: policy.universe(),
            policy,
        }
    }
}

impl AllocationStrategy for SectorRotationStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn description(&self) -> &str {
        "섹터 로테이션 전략. 섹터 ETF를 모멘텀으로 순위를 매겨 상위 종목에 투자합니다."
    }

    fn assets(&self) -> Vec<String> {
        self.universe.tracked_tickers()
    }

    fn run(&self, window: &HistoryWindow) -> TargetAllocation {
        self.decide(window).allocation
    }

    fn get_state(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "interval": self.interval(),
            "assets": self.assets(),
            "policy": serde_json::to_value(&self.policy).unwrap_or(Value::Null),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotation_core::Bar;
    use rust_decimal_macros::dec;

    /// 종목별 종가 시계열로 윈도우를 만듭니다 (모든 시계열 길이 동일).
    fn window(series: &[(&str, Vec<Decimal>)]) -> HistoryWindow {
        let len = series.iter().map(|(_, c)| c.len()).max().unwrap_or(0);
        (0..len)
            .map(|i| {
                series
                    .iter()
                    .filter_map(|(t, closes)| closes.get(i).map(|c| (t.to_string(), Bar::from_close(*c))))
                    .collect::<DailySnapshot>()
            })
            .collect()
    }

    /// 기준가 100, 최신 종가 `latest`인 길이 `len` 시계열.
    fn trend(len: usize, lookback: usize, latest: Decimal) -> Vec<Decimal> {
        let mut closes = vec![dec!(100); len];
        closes[len - lookback] = dec!(100);
        closes[len - 1] = latest;
        closes
    }

    fn policy(universe: &[&str]) -> RotationPolicy {
        RotationPolicy {
            universe: universe.iter().map(|t| t.to_string()).collect(),
            proxies: ProxyMap::new(),
            lookback: 5,
            min_history: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_policy_is_valid() {
        let policy = RotationPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.lookback, 126);
        assert_eq!(policy.universe().len(), 11);
    }

    #[test]
    fn test_validate_rejects_bad_policies() {
        let base = policy(&["A", "B"]);

        let empty = RotationPolicy {
            universe: vec![],
            ..base.clone()
        };
        assert!(empty.validate().is_err());

        let zero_lookback = RotationPolicy {
            lookback: 0,
            ..base.clone()
        };
        assert!(zero_lookback.validate().is_err());

        let too_many = RotationPolicy {
            selection_count: 3,
            ..base.clone()
        };
        assert!(too_many.validate().is_err());

        let zero_period = RotationPolicy {
            oscillator: Some(OscillatorConfig { period: 0 }),
            ..base.clone()
        };
        assert!(zero_period.validate().is_err());

        let self_proxy = RotationPolicy {
            proxies: [("A", "A")].into_iter().collect(),
            ..base
        };
        assert!(self_proxy.validate().is_err());
    }

    #[test]
    fn test_top1_picks_highest_momentum() {
        let strategy = SectorRotationStrategy::new("t", policy(&["A", "B"])).unwrap();
        let w = window(&[("A", trend(8, 5, dec!(110))), ("B", trend(8, 5, dec!(95)))]);

        let decision = strategy.decide(&w);
        assert_eq!(decision.selected, vec!["A"]);
        assert_eq!(decision.allocation.weight_of("A"), dec!(1));
        assert_eq!(decision.scores[0].momentum, dec!(0.1));
        assert_eq!(decision.scores[1].momentum, dec!(-0.05));
    }

    #[test]
    fn test_unfiltered_top1_buys_negative_leader() {
        let strategy = SectorRotationStrategy::new("t", policy(&["A", "B"])).unwrap();
        let w = window(&[("A", trend(8, 5, dec!(98))), ("B", trend(8, 5, dec!(95)))]);

        let allocation = strategy.run(&w);
        assert_eq!(allocation.weight_of("A"), dec!(1));
    }

    #[test]
    fn test_positive_filter_holds_cash() {
        let p = RotationPolicy {
            require_positive: true,
            ..policy(&["A", "B"])
        };
        let strategy = SectorRotationStrategy::new("t", p).unwrap();
        let w = window(&[("A", trend(8, 5, dec!(100))), ("B", trend(8, 5, dec!(95)))]);

        let decision = strategy.decide(&w);
        assert!(decision.is_cash());
        assert_eq!(decision.skipped, Some(SkipReason::NoCandidates));
    }

    #[test]
    fn test_short_window_holds_cash() {
        let p = RotationPolicy {
            min_history: 10,
            ..policy(&["A"])
        };
        let strategy = SectorRotationStrategy::new("t", p).unwrap();
        let w = window(&[("A", trend(8, 5, dec!(110)))]);

        let decision = strategy.decide(&w);
        assert!(decision.is_cash());
        assert_eq!(
            decision.skipped,
            Some(SkipReason::InsufficientWindow { len: 8, required: 10 })
        );
    }

    #[test]
    fn test_oscillator_prefers_least_overbought() {
        let p = RotationPolicy {
            oscillator: Some(OscillatorConfig { period: 4 }),
            ..policy(&["A", "B", "C"])
        };
        let strategy = SectorRotationStrategy::new("t", p).unwrap();
        // A: 강한 상승, 쉼 없음 (RSI 100)
        // B: 상승 추세 안에서 최근 하락 (RSI 낮음)
        // C: 하락 추세 (후보 제외)
        let w = window(&[
            ("A", vec![dec!(100), dec!(100), dec!(101), dec!(102), dec!(103), dec!(104), dec!(120)]),
            ("B", vec![dec!(100), dec!(100), dec!(100), dec!(110), dec!(108), dec!(109), dec!(106)]),
            ("C", vec![dec!(100), dec!(100), dec!(99), dec!(98), dec!(97), dec!(96), dec!(90)]),
        ]);

        let decision = strategy.decide(&w);
        assert_eq!(decision.selected, vec!["B"]);
        assert_eq!(decision.allocation.weight_of("B"), dec!(1));
    }

    #[test]
    fn test_get_state_contains_policy() {
        let strategy = SectorRotationStrategy::default();
        let state = strategy.get_state();
        assert_eq!(state["id"], "sector_top1");
        assert_eq!(state["interval"], "1day");
        assert_eq!(state["policy"]["lookback"], 126);
        assert_eq!(strategy.data().len(), 0);
    }

    #[test]
    fn test_policy_toml_round_trip() {
        let p = RotationPolicy {
            selection_count: 2,
            require_positive: true,
            partial_fill: PartialFill::HoldCash,
            oscillator: Some(OscillatorConfig::default()),
            ..Default::default()
        };

        let text = p.to_toml_string().unwrap();
        let parsed = RotationPolicy::from_toml_str(&text).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn test_lowercase_policy_file_keeps_proxies() {
        let p = RotationPolicy::from_toml_str(
            r#"
universe = ["xlre", "xlk"]
lookback = 5
min_history = 3

[proxies]
xlre = "iyr"
"#,
        )
        .unwrap();
        assert_eq!(p.proxies.proxy_for("XLRE"), Some("IYR"));

        // XLRE 상장 전: IYR로 스코어링하고 IYR로 실행
        let s = SectorRotationStrategy::new("lower", p).unwrap();
        let w = window(&[("IYR", trend(8, 5, dec!(120))), ("XLK", trend(8, 5, dec!(105)))]);
        let allocation = s.run(&w);
        assert_eq!(allocation.weight_of("IYR"), dec!(1));

        let self_proxy = RotationPolicy::from_toml_str(
            r#"
universe = ["xlk"]

[proxies]
xlk = "XLK"
"#,
        );
        assert!(self_proxy.is_err());
    }

    #[test]
    fn test_with_overrides() {
        let section = StrategySection {
            lookback: Some(63),
            selection_count: Some(2),
            oscillator_period: Some(14),
            universe: Some(vec!["xlk".to_string(), "XLE".to_string()]),
            ..Default::default()
        };

        let p = RotationPolicy::default().with_overrides(&section);
        assert_eq!(p.lookback, 63);
        assert_eq!(p.selection_count, 2);
        assert_eq!(p.oscillator, Some(OscillatorConfig { period: 14 }));
        assert_eq!(p.universe, vec!["XLK", "XLE"]);
        assert!(p.validate().is_ok());
    }
}
