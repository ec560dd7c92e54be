//! Normalized point-in-time market observations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::risk::RiskAssessment;

/// One normalized market observation for one token, taken at fetch time.
///
/// Every numeric field is independently optional: the aggregator is
/// untrusted, and a malformed field degrades to `None` rather than
/// invalidating the snapshot. Consumers must tolerate absence.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSnapshot {
    /// On-chain address of the base token, as submitted by the caller.
    pub identifier: String,
    pub symbol: String,
    pub display_name: String,
    /// Parsed from the upstream decimal string, never through f64.
    pub price_usd: Option<Decimal>,
    /// Signed 24h percentage move.
    pub price_change_24h: Option<Decimal>,
    pub liquidity_usd: Option<Decimal>,
    pub volume_24h_usd: Option<Decimal>,
    pub fdv_usd: Option<Decimal>,
    /// Creation time of the canonical trading pair, when the aggregator
    /// reports one.
    pub pair_created_at: Option<DateTime<Utc>>,
    pub buys_24h: Option<u64>,
    pub sells_24h: Option<u64>,
    /// Aggregator's own page for this pair.
    pub external_view_url: Option<String>,
}

impl AssetSnapshot {
    /// Age of the trading pair at `now`, if the creation time is known.
    pub fn pair_age(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        self.pair_created_at.map(|created| now - created)
    }
}

/// A snapshot together with the risk assessment derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessedSnapshot {
    pub snapshot: AssetSnapshot,
    pub assessment: RiskAssessment,
}
