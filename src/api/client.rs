use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::domain::AssetSnapshot;
use crate::error::ScanError;

use super::types::{PairsResponse, TokenPair};
use super::SnapshotSource;

/// HTTP client for the DexScreener token-lookup endpoint.
///
/// One request per call, no retries; retry policy belongs to callers. The
/// transport's default timeout applies.
pub struct SnapshotClient {
    client: Client,
    base_url: String,
}

impl SnapshotClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the canonical trading pair for a token and normalize it.
    ///
    /// The aggregator ranks pairs itself; the first listed pair is trusted
    /// as canonical. An empty or `null` pair list is [`ScanError::NotFound`].
    pub async fn fetch_snapshot(&self, identifier: &str) -> Result<AssetSnapshot, ScanError> {
        if identifier.trim().is_empty() {
            return Err(ScanError::EmptyIdentifier);
        }

        let url = format!("{}/latest/dex/tokens/{}", self.base_url, identifier);
        info!(url = %url, "Fetching token snapshot");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ScanError::NetworkFailure(e.to_string()))?
            .error_for_status()
            .map_err(|e| ScanError::NetworkFailure(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ScanError::NetworkFailure(e.to_string()))?;
        let parsed = decode_response(&body)?;

        let pair = parsed
            .pairs
            .and_then(|pairs| pairs.into_iter().next())
            .ok_or(ScanError::NotFound)?;

        let snapshot = normalize(identifier, pair);
        debug!(
            symbol = %snapshot.symbol,
            liquidity = ?snapshot.liquidity_usd,
            "Normalized snapshot"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl SnapshotSource for SnapshotClient {
    async fn fetch_snapshot(&self, identifier: &str) -> Result<AssetSnapshot, ScanError> {
        SnapshotClient::fetch_snapshot(self, identifier).await
    }
}

/// Decode the lookup payload, mapping any top-level shape violation to
/// [`ScanError::MalformedResponse`]. Field-level garbage is handled further
/// down by the lenient wire types and never reaches this error.
fn decode_response(body: &[u8]) -> Result<PairsResponse, ScanError> {
    serde_json::from_slice(body).map_err(|e| ScanError::MalformedResponse(e.to_string()))
}

/// Flatten a raw pair record into the domain snapshot, keeping the h24
/// figures the classifier and trending panel use.
fn normalize(identifier: &str, pair: TokenPair) -> AssetSnapshot {
    let base = pair.base_token.unwrap_or_default();
    let h24_txns = pair.txns.and_then(|t| t.h24);

    AssetSnapshot {
        identifier: identifier.to_string(),
        symbol: base.symbol.unwrap_or_default(),
        display_name: base.name.unwrap_or_default(),
        price_usd: pair.price_usd,
        price_change_24h: pair.price_change.and_then(|c| c.h24),
        liquidity_usd: pair.liquidity.and_then(|l| l.usd),
        volume_24h_usd: pair.volume.and_then(|v| v.h24),
        fdv_usd: pair.fdv,
        pair_created_at: pair.pair_created_at,
        buys_24h: h24_txns.as_ref().and_then(|t| t.buys),
        sells_24h: h24_txns.as_ref().and_then(|t| t.sells),
        external_view_url: pair.url,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_pair() -> TokenPair {
        serde_json::from_str(
            r#"{
                "chainId": "solana",
                "dexId": "raydium",
                "url": "https://dexscreener.com/solana/pair",
                "baseToken": {"address": "abc", "name": "Bonk", "symbol": "BONK"},
                "priceUsd": "0.00002145",
                "txns": {"h24": {"buys": 4210, "sells": 3992}},
                "volume": {"h24": 1250000.5},
                "priceChange": {"h24": -4.2},
                "liquidity": {"usd": 7300000},
                "fdv": 1450000000,
                "pairCreatedAt": 1672531200000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn normalize_keeps_h24_figures() {
        let snapshot = normalize("abc", sample_pair());

        assert_eq!(snapshot.identifier, "abc");
        assert_eq!(snapshot.symbol, "BONK");
        assert_eq!(snapshot.display_name, "Bonk");
        assert_eq!(snapshot.price_usd, Some(dec!(0.00002145)));
        assert_eq!(snapshot.price_change_24h, Some(dec!(-4.2)));
        assert_eq!(snapshot.liquidity_usd, Some(dec!(7300000)));
        assert_eq!(snapshot.volume_24h_usd, Some(dec!(1250000.5)));
        assert_eq!(snapshot.buys_24h, Some(4210));
        assert_eq!(snapshot.sells_24h, Some(3992));
        assert!(snapshot.pair_created_at.is_some());
        assert_eq!(
            snapshot.external_view_url.as_deref(),
            Some("https://dexscreener.com/solana/pair")
        );
    }

    #[test]
    fn normalize_tolerates_sparse_pair() {
        let pair: TokenPair = serde_json::from_str("{}").unwrap();
        let snapshot = normalize("abc", pair);

        assert_eq!(snapshot.symbol, "");
        assert_eq!(snapshot.price_usd, None);
        assert_eq!(snapshot.liquidity_usd, None);
        assert_eq!(snapshot.pair_created_at, None);
    }

    #[test]
    fn top_level_array_is_a_malformed_response() {
        let err = decode_response(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ScanError::MalformedResponse(_)));
    }

    #[test]
    fn wrongly_typed_pairs_list_is_a_malformed_response() {
        let err = decode_response(br#"{"schemaVersion": "1.0.0", "pairs": "x"}"#).unwrap_err();
        assert!(matches!(err, ScanError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_body_is_a_malformed_response() {
        let err = decode_response(b"<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, ScanError::MalformedResponse(_)));
    }

    #[test]
    fn conforming_payload_decodes() {
        let parsed = decode_response(br#"{"schemaVersion": "1.0.0", "pairs": []}"#).unwrap();
        assert_eq!(parsed.pairs.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn empty_identifier_is_rejected_before_any_request() {
        let client = SnapshotClient::new("http://unreachable.invalid");
        let err = client.fetch_snapshot("   ").await.unwrap_err();
        assert!(matches!(err, ScanError::EmptyIdentifier));
    }
}
