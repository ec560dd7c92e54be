//! `tokenscan scan` - one verification-gated scan, printed to the terminal.

use std::sync::Arc;

use crate::api::SnapshotClient;
use crate::config::Config;
use crate::error::Result;
use crate::provider::{AutoApproveProvider, WalletRegistry};
use crate::service::{ScanPhase, ScanSession};

use super::output;
use super::ScanArgs;

/// Run a single scan end to end.
///
/// The registry starts with the known wallet lineup; a terminal usually has
/// none of them, in which case the auto-approving headless provider steps
/// in and the gate resolves immediately. The session still goes through its
/// verification phase like any other caller.
pub async fn run(args: &ScanArgs, config: &Config) -> Result<()> {
    let client = Arc::new(SnapshotClient::new(config.upstream.base_url.clone()));
    let session = ScanSession::new(client);

    let mut registry = WalletRegistry::known_wallets();
    let wallet = match registry.entries().into_iter().find(|e| e.available) {
        Some(entry) => entry.name,
        None => {
            registry.register(Arc::new(AutoApproveProvider::new("Headless")));
            "Headless".to_string()
        }
    };

    let mut ticket = session.request_scan(args.address.clone());
    if ticket.is_none() {
        let outcome = registry.connect(&wallet).await;
        ticket = session.report_verification_outcome(outcome);
    }
    if let Some(ticket) = ticket {
        session.execute(ticket).await;
    }

    render(&session.state().phase);
    Ok(())
}

fn render(phase: &ScanPhase) {
    match phase {
        ScanPhase::Success(assessed) => {
            let snapshot = &assessed.snapshot;
            let assessment = &assessed.assessment;

            output::section(&format!(
                "{} ({})",
                snapshot.display_name, snapshot.symbol
            ));
            output::key_value("Risk", output::tier_label(assessment.tier));
            output::key_value("Rationale", &assessment.rationale);
            output::key_value("Price", output::fmt_usd(snapshot.price_usd));
            output::key_value("24h Change", output::fmt_percent(snapshot.price_change_24h));
            output::key_value("Liquidity", output::fmt_usd(snapshot.liquidity_usd));
            output::key_value("24h Volume", output::fmt_usd(snapshot.volume_24h_usd));
            output::key_value("FDV", output::fmt_usd(snapshot.fdv_usd));
            if let (Some(buys), Some(sells)) = (snapshot.buys_24h, snapshot.sells_24h) {
                output::key_value("24h Txns", format!("{buys} buys / {sells} sells"));
            }
            if let Some(url) = &snapshot.external_view_url {
                output::key_value("Chart", url);
            }
        }
        ScanPhase::NotFound { message } | ScanPhase::Error { message } => {
            output::error(message);
        }
        // The headless provider cannot leave the session mid-flow.
        other => output::error(&format!("scan did not complete (phase {other:?})")),
    }
}
