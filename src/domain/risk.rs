//! Heuristic risk classification.
//!
//! The tier is a pure function of a snapshot's USD liquidity and the age of
//! its trading pair at an explicitly supplied evaluation instant. The
//! thresholds and their strict comparisons are the behavioral contract of
//! this module; the heuristic is best-effort by design ("new or illiquid is
//! risky") and makes no claim of historical accuracy.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::snapshot::AssetSnapshot;

/// Liquidity below this is high risk outright.
const HIGH_RISK_LIQUIDITY_USD: Decimal = dec!(10_000);
/// Liquidity below this (but above the high-risk floor) is medium risk.
const MEDIUM_RISK_LIQUIDITY_USD: Decimal = dec!(50_000);

/// Coarse risk tier for a token's liquidity/age profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Lower Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
            RiskTier::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A derived classification. Never mutated independently of its snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub label: &'static str,
    pub rationale: String,
}

impl RiskAssessment {
    fn new(tier: RiskTier, rationale: String) -> Self {
        Self {
            tier,
            label: tier.label(),
            rationale,
        }
    }
}

/// Classify a snapshot at evaluation instant `now`.
///
/// Total function: absent liquidity or creation time degrade the tier, they
/// never fail. The decision table is evaluated top to bottom, first match
/// wins:
///
/// - liquidity absent or `< $10,000`, or pair age `< 24h` → [`RiskTier::High`]
/// - liquidity `< $50,000`, or pair age `< 7 days` → [`RiskTier::Medium`]
/// - otherwise → [`RiskTier::Low`]
///
/// An absent `pair_created_at` counts as zero age, so it can never reach
/// `Low` even with deep liquidity.
pub fn classify(snapshot: &AssetSnapshot, now: DateTime<Utc>) -> RiskAssessment {
    let age = snapshot.pair_age(now).unwrap_or_else(Duration::zero);

    let illiquid = match snapshot.liquidity_usd {
        Some(liquidity) => liquidity < HIGH_RISK_LIQUIDITY_USD,
        None => true,
    };
    if illiquid || age < Duration::hours(24) {
        return RiskAssessment::new(
            RiskTier::High,
            rationale(snapshot, age, "very low liquidity or a pair under a day old"),
        );
    }

    let thin = snapshot
        .liquidity_usd
        .is_some_and(|liquidity| liquidity < MEDIUM_RISK_LIQUIDITY_USD);
    if thin || age < Duration::days(7) {
        return RiskAssessment::new(
            RiskTier::Medium,
            rationale(snapshot, age, "limited liquidity or a pair under a week old"),
        );
    }

    RiskAssessment::new(
        RiskTier::Low,
        rationale(snapshot, age, "established liquidity and pair age"),
    )
}

/// Classify an optional snapshot; `None` yields [`RiskTier::Unknown`].
pub fn classify_opt(snapshot: Option<&AssetSnapshot>, now: DateTime<Utc>) -> RiskAssessment {
    match snapshot {
        Some(snapshot) => classify(snapshot, now),
        None => RiskAssessment::new(
            RiskTier::Unknown,
            "no market data available for this token".into(),
        ),
    }
}

fn rationale(snapshot: &AssetSnapshot, age: Duration, summary: &str) -> String {
    let liquidity = snapshot
        .liquidity_usd
        .map_or_else(|| "unknown".to_string(), |l| format!("${l}"));
    format!(
        "{summary} (liquidity {liquidity}, pair age {}h)",
        age.num_hours()
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use super::*;

    fn snapshot(liquidity: Option<Decimal>, age: Option<Duration>, now: DateTime<Utc>) -> AssetSnapshot {
        AssetSnapshot {
            identifier: "addr".into(),
            symbol: "TKN".into(),
            display_name: "Token".into(),
            price_usd: Some(dec!(0.5)),
            price_change_24h: None,
            liquidity_usd: liquidity,
            volume_24h_usd: None,
            fdv_usd: None,
            pair_created_at: age.map(|a| now - a),
            buys_24h: None,
            sells_24h: None,
            external_view_url: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap()
    }

    #[test]
    fn young_illiquid_pair_is_high() {
        let s = snapshot(Some(dec!(5_000)), Some(Duration::hours(2)), now());
        let assessment = classify(&s, now());
        assert_eq!(assessment.tier, RiskTier::High);
        assert_eq!(assessment.label, "High Risk");
    }

    #[test]
    fn deep_liquidity_and_old_pair_is_low() {
        let s = snapshot(Some(dec!(60_000)), Some(Duration::days(10)), now());
        assert_eq!(classify(&s, now()).tier, RiskTier::Low);
    }

    #[test]
    fn thin_liquidity_dominates_age() {
        // Liquidity clause alone pushes an old pair to medium.
        let s = snapshot(Some(dec!(30_000)), Some(Duration::days(10)), now());
        assert_eq!(classify(&s, now()).tier, RiskTier::Medium);
    }

    #[test]
    fn young_pair_dominates_liquidity() {
        let s = snapshot(Some(dec!(500_000)), Some(Duration::hours(3)), now());
        assert_eq!(classify(&s, now()).tier, RiskTier::High);
    }

    #[test]
    fn absent_liquidity_is_high() {
        let s = snapshot(None, Some(Duration::days(30)), now());
        assert_eq!(classify(&s, now()).tier, RiskTier::High);
    }

    #[test]
    fn absent_creation_time_never_reaches_low() {
        let s = snapshot(Some(dec!(1_000_000)), None, now());
        assert_eq!(classify(&s, now()).tier, RiskTier::High);
    }

    #[test]
    fn boundary_liquidity_exactly_ten_thousand_old_pair_is_medium() {
        // Strict `<` comparisons: exactly 10k escapes the high clause.
        let s = snapshot(Some(dec!(10_000)), Some(Duration::days(10)), now());
        assert_eq!(classify(&s, now()).tier, RiskTier::Medium);
    }

    #[test]
    fn boundary_liquidity_exactly_fifty_thousand_old_pair_is_low() {
        let s = snapshot(Some(dec!(50_000)), Some(Duration::days(10)), now());
        assert_eq!(classify(&s, now()).tier, RiskTier::Low);
    }

    #[test]
    fn boundary_age_exactly_one_day_is_medium() {
        let s = snapshot(Some(dec!(100_000)), Some(Duration::hours(24)), now());
        assert_eq!(classify(&s, now()).tier, RiskTier::Medium);
    }

    #[test]
    fn boundary_age_exactly_seven_days_is_low() {
        let s = snapshot(Some(dec!(100_000)), Some(Duration::days(7)), now());
        assert_eq!(classify(&s, now()).tier, RiskTier::Low);
    }

    #[test]
    fn missing_snapshot_is_unknown() {
        let assessment = classify_opt(None, now());
        assert_eq!(assessment.tier, RiskTier::Unknown);
        assert_eq!(assessment.label, "Unknown");
    }

    #[test]
    fn classification_is_deterministic() {
        let s = snapshot(Some(dec!(42_000)), Some(Duration::days(9)), now());
        assert_eq!(classify(&s, now()), classify(&s, now()));
    }
}
