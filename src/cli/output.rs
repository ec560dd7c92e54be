//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::RiskTier;

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<14} {value}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

/// Risk tier label with terminal color.
pub fn tier_label(tier: RiskTier) -> String {
    match tier {
        RiskTier::Low => tier.label().green().to_string(),
        RiskTier::Medium => tier.label().yellow().to_string(),
        RiskTier::High => tier.label().red().to_string(),
        RiskTier::Unknown => tier.label().dimmed().to_string(),
    }
}

/// Compact USD amount: `$1.2B`, `$45.3M`, `$12.7K`, `$0.0421`.
pub fn fmt_usd(value: Option<Decimal>) -> String {
    let Some(value) = value else {
        return "—".into();
    };
    let abs = value.abs();
    if abs >= dec!(1_000_000_000) {
        format!("${}B", (value / dec!(1_000_000_000)).round_dp(1))
    } else if abs >= dec!(1_000_000) {
        format!("${}M", (value / dec!(1_000_000)).round_dp(1))
    } else if abs >= dec!(1_000) {
        format!("${}K", (value / dec!(1_000)).round_dp(1))
    } else {
        format!("${}", value.normalize())
    }
}

/// Signed percentage with a `%` suffix.
pub fn fmt_percent(value: Option<Decimal>) -> String {
    value.map_or_else(|| "—".into(), |v| format!("{}%", v.round_dp(2).normalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_amounts_are_compacted() {
        assert_eq!(fmt_usd(Some(dec!(1_460_000_000))), "$1.5B");
        assert_eq!(fmt_usd(Some(dec!(7_300_000))), "$7.3M");
        assert_eq!(fmt_usd(Some(dec!(12_680))), "$12.7K");
        assert_eq!(fmt_usd(Some(dec!(0.04210))), "$0.0421");
        assert_eq!(fmt_usd(None), "—");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(fmt_percent(Some(dec!(-4.237))), "-4.24%");
        assert_eq!(fmt_percent(None), "—");
    }
}
