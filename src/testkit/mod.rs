//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — Mock [`SnapshotSource`](crate::api::SnapshotSource)
//!   implementations: `ScriptedSource`, `GatedSource`.
//! - [`domain`] — Builders for snapshots with sensible defaults.

pub mod domain;
pub mod source;
