//! Tokenscan - Solana token safety scanning from live market metrics.
//!
//! This crate fetches market snapshots for tradable tokens from the
//! DexScreener aggregator and derives a heuristic risk classification from
//! liquidity and trading-pair age. Scans are gated behind a one-time wallet
//! verification step per session.
//!
//! # Architecture
//!
//! - **`api`** - Snapshot client for the aggregator's lookup endpoint, plus
//!   the [`api::SnapshotSource`] port the services consume.
//! - **`domain`** - Normalized snapshots and the pure risk classifier.
//! - **`service`** - The two workflows:
//!   - [`service::ScanSession`] - verification-gated single-token scan with
//!     last-request-wins re-entrancy.
//!   - [`service::TrendingService`] - concurrent best-effort batch fetch
//!     for the trending panel.
//! - **`provider`** - Wallet verification port and registry.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Aggregator-agnostic types: snapshots, risk assessments
//! - [`error`] - Error types for the crate
//! - [`api`] - DexScreener wire types and HTTP client
//! - [`service`] - Scan session and trending services
//! - [`provider`] - Wallet verification providers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tokenscan::api::SnapshotClient;
//! use tokenscan::config::Config;
//! use tokenscan::service::ScanSession;
//!
//! # async fn run() {
//! let config = Config::default();
//! let client = Arc::new(SnapshotClient::new(config.upstream.base_url.clone()));
//! let session = ScanSession::new(client);
//!
//! // The first scan parks at the verification gate.
//! let state = session.scan("So11111111111111111111111111111111111111112").await;
//! println!("{:?}", state.phase);
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
pub mod serde_utils;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
