//! DexScreener integration: wire types, the HTTP client, and the source
//! trait the services consume.

pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::domain::AssetSnapshot;
use crate::error::ScanError;

pub use client::SnapshotClient;

/// Port for anything that can produce a market snapshot for an identifier.
///
/// [`SnapshotClient`] is the production implementation; the testkit provides
/// scripted ones.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self, identifier: &str) -> Result<AssetSnapshot, ScanError>;
}
