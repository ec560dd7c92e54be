//! Best-effort concurrent batch fetch for the trending panel.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::debug;

use crate::api::SnapshotSource;
use crate::domain::AssetSnapshot;

/// Upper bound on panel entries, regardless of how many candidates are
/// configured.
pub const MAX_TRENDING: usize = 4;

/// Fetches a fixed candidate set concurrently and keeps the successes.
///
/// The batch never fails as a whole: each candidate's outcome is
/// independent, failures are dropped, and an all-fail batch is an empty
/// panel rather than an error. Output order is candidate declaration order,
/// not completion order.
pub struct TrendingService {
    source: Arc<dyn SnapshotSource>,
    candidates: Vec<String>,
}

impl TrendingService {
    pub fn new(source: Arc<dyn SnapshotSource>, candidates: Vec<String>) -> Self {
        Self { source, candidates }
    }

    /// Fetch all candidates, join on every outcome, and return the
    /// successes in candidate order. At most [`MAX_TRENDING`] entries.
    pub async fn fetch_trending(&self) -> Vec<AssetSnapshot> {
        let candidates = &self.candidates[..self.candidates.len().min(MAX_TRENDING)];

        let fetches = candidates
            .iter()
            .map(|identifier| self.source.fetch_snapshot(identifier));
        let settled = join_all(fetches).await;

        // join_all preserves input order, so filtering keeps the candidate
        // ordering deterministic regardless of completion interleaving.
        settled
            .into_iter()
            .zip(candidates)
            .filter_map(|(outcome, identifier)| match outcome {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    debug!(identifier = %identifier, error = %err, "Dropping trending candidate");
                    None
                }
            })
            .collect()
    }
}
