//! Builders for domain values used across tests.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::AssetSnapshot;

/// Builder for an [`AssetSnapshot`] with healthy-token defaults.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: AssetSnapshot,
}

impl SnapshotBuilder {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            snapshot: AssetSnapshot {
                symbol: "TKN".into(),
                display_name: "Test Token".into(),
                price_usd: Some(Decimal::ONE),
                price_change_24h: Some(Decimal::ZERO),
                liquidity_usd: Some(Decimal::from(100_000)),
                volume_24h_usd: Some(Decimal::from(250_000)),
                fdv_usd: None,
                pair_created_at: Some(Utc::now() - Duration::days(30)),
                buys_24h: Some(100),
                sells_24h: Some(80),
                external_view_url: None,
                identifier,
            },
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.snapshot.symbol = symbol.into();
        self
    }

    pub fn liquidity_usd(mut self, liquidity: Option<Decimal>) -> Self {
        self.snapshot.liquidity_usd = liquidity;
        self
    }

    pub fn pair_created_at(mut self, created: Option<DateTime<Utc>>) -> Self {
        self.snapshot.pair_created_at = created;
        self
    }

    pub fn build(self) -> AssetSnapshot {
        self.snapshot
    }
}

/// Shortcut for a snapshot that classifies as low risk at `Utc::now()`.
pub fn healthy_snapshot(identifier: impl Into<String>) -> AssetSnapshot {
    SnapshotBuilder::new(identifier).build()
}
