//! Raw DexScreener wire types, pre-normalization.
//!
//! The payload is untrusted: only the top-level shape is required to hold.
//! Every numeric field goes through the lenient deserializers in
//! [`crate::serde_utils`] so one malformed field degrades to absent instead
//! of failing the response.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::serde_utils::{lenient_decimal, lenient_millis, lenient_u64};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairsResponse {
    #[serde(default)]
    pub schema_version: Option<String>,
    /// Upstream sends `null` instead of an empty list for unknown tokens.
    #[serde(default)]
    pub pairs: Option<Vec<TokenPair>>,
}

/// One trading-pair record as the aggregator reports it, ranked by the
/// aggregator itself. The first entry in a response is treated as canonical.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub dex_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub base_token: Option<TokenInfo>,
    #[serde(default)]
    pub quote_token: Option<TokenInfo>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_native: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_usd: Option<Decimal>,
    #[serde(default)]
    pub txns: Option<TxnBuckets>,
    #[serde(default)]
    pub volume: Option<WindowedDecimal>,
    #[serde(default)]
    pub price_change: Option<WindowedDecimal>,
    #[serde(default)]
    pub liquidity: Option<Liquidity>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub fdv: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_millis")]
    pub pair_created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TokenInfo {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Buy/sell transaction counts per time window.
#[derive(Debug, Deserialize, Default)]
pub struct TxnBuckets {
    #[serde(default)]
    pub m5: Option<TxnCounts>,
    #[serde(default)]
    pub h1: Option<TxnCounts>,
    #[serde(default)]
    pub h6: Option<TxnCounts>,
    #[serde(default)]
    pub h24: Option<TxnCounts>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TxnCounts {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub buys: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub sells: Option<u64>,
}

/// A metric reported over the standard m5/h1/h6/h24 windows.
#[derive(Debug, Deserialize, Default)]
pub struct WindowedDecimal {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub m5: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub h1: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub h6: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub h24: Option<Decimal>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Liquidity {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub usd: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub base: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub quote: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn null_pairs_deserializes() {
        let response: PairsResponse =
            serde_json::from_str(r#"{"schemaVersion":"1.0.0","pairs":null}"#).unwrap();
        assert!(response.pairs.is_none());
    }

    #[test]
    fn malformed_liquidity_does_not_sink_the_pair() {
        let raw = r#"{
            "schemaVersion": "1.0.0",
            "pairs": [{
                "chainId": "solana",
                "baseToken": {"address": "abc", "name": "Token", "symbol": "TKN"},
                "priceUsd": "0.0421",
                "liquidity": {"usd": "not-a-number"},
                "fdv": 1234567.0
            }]
        }"#;
        let response: PairsResponse = serde_json::from_str(raw).unwrap();
        let pair = &response.pairs.unwrap()[0];

        assert_eq!(pair.price_usd, Some(dec!(0.0421)));
        assert_eq!(pair.liquidity.as_ref().unwrap().usd, None);
        assert_eq!(pair.fdv, Some(dec!(1234567.0)));
    }
}
