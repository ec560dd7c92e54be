//! Lenient deserializers for untrusted aggregator payloads.
//!
//! DexScreener fields drift between numbers, decimal strings, and outright
//! garbage depending on the pair. Each helper here deserializes into a raw
//! [`serde_json::Value`] first and degrades to `None` on anything it cannot
//! interpret, so a single malformed field never fails the whole payload.

use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional decimal from a JSON number or decimal string.
///
/// `priceUsd` arrives as a string with more precision than f64 holds, so the
/// string path parses directly into [`Decimal`] without an f64 round trip.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

/// Deserialize an optional non-negative count from a JSON number.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_u64))
}

/// Deserialize an optional UTC timestamp from epoch milliseconds.
pub fn lenient_millis<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_i64)
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single()))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_decimal")]
        price: Option<Decimal>,
        #[serde(default, deserialize_with = "lenient_u64")]
        buys: Option<u64>,
        #[serde(default, deserialize_with = "lenient_millis")]
        created: Option<DateTime<Utc>>,
    }

    #[test]
    fn decimal_string_keeps_precision() {
        let probe: Probe =
            serde_json::from_str(r#"{"price": "0.000000001234567891"}"#).unwrap();
        assert_eq!(probe.price, Some(dec!(0.000000001234567891)));
    }

    #[test]
    fn decimal_accepts_json_number() {
        let probe: Probe = serde_json::from_str(r#"{"price": 182.44}"#).unwrap();
        assert_eq!(probe.price, Some(dec!(182.44)));
    }

    #[test]
    fn garbage_degrades_to_none_without_failing_siblings() {
        let probe: Probe =
            serde_json::from_str(r#"{"price": {"nested": true}, "buys": 12}"#).unwrap();
        assert_eq!(probe.price, None);
        assert_eq!(probe.buys, Some(12));
    }

    #[test]
    fn negative_count_is_absent() {
        let probe: Probe = serde_json::from_str(r#"{"buys": -3}"#).unwrap();
        assert_eq!(probe.buys, None);
    }

    #[test]
    fn millis_round_trip() {
        let probe: Probe = serde_json::from_str(r#"{"created": 1700000000000}"#).unwrap();
        assert_eq!(
            probe.created,
            Some(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
        );
    }

    #[test]
    fn missing_fields_are_none() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.price.is_none());
        assert!(probe.buys.is_none());
        assert!(probe.created.is_none());
    }
}
