//! `tokenscan trending` - render the trending panel as a table.

use std::sync::Arc;

use chrono::Utc;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::SnapshotClient;
use crate::config::Config;
use crate::domain::classify;
use crate::error::Result;
use crate::service::TrendingService;

use super::output;

#[derive(Tabled)]
struct TrendingRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "24h")]
    change: String,
    #[tabled(rename = "Liquidity")]
    liquidity: String,
    #[tabled(rename = "Risk")]
    risk: String,
}

pub async fn run(config: &Config) -> Result<()> {
    let client = Arc::new(SnapshotClient::new(config.upstream.base_url.clone()));
    let service = TrendingService::new(client, config.trending.candidates.clone());

    let snapshots = service.fetch_trending().await;
    if snapshots.is_empty() {
        // All-fail is a displayable empty panel, not an error.
        println!("Nothing trending right now.");
        return Ok(());
    }

    let now = Utc::now();
    let rows: Vec<TrendingRow> = snapshots
        .iter()
        .map(|snapshot| TrendingRow {
            symbol: snapshot.symbol.clone(),
            name: snapshot.display_name.clone(),
            price: output::fmt_usd(snapshot.price_usd),
            change: output::fmt_percent(snapshot.price_change_24h),
            liquidity: output::fmt_usd(snapshot.liquidity_usd),
            risk: output::tier_label(classify(snapshot, now).tier),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::rounded()));
    Ok(())
}
