//! Mock [`SnapshotSource`] implementations for testing.
//!
//! - [`ScriptedSource`] — per-identifier queues of pre-loaded outcomes.
//!   Best for: failure handling, partial-batch behavior, session phases.
//!
//! - [`GatedSource`] — wraps a `ScriptedSource` and holds selected fetches
//!   at a gate until released. Best for: completion-order and
//!   stale-result tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::SnapshotSource;
use crate::domain::AssetSnapshot;
use crate::error::ScanError;

type Outcome = Result<AssetSnapshot, ScanError>;

/// A mock source with scripted per-identifier outcomes.
///
/// Each fetch pops the next outcome queued for that identifier; an
/// unscripted identifier (or an exhausted queue) yields
/// [`ScanError::NotFound`].
#[derive(Default)]
pub struct ScriptedSource {
    outcomes: Mutex<HashMap<String, VecDeque<Outcome>>>,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, identifier: impl Into<String>, outcome: Outcome) -> Self {
        self.push(identifier, outcome);
        self
    }

    pub fn with_snapshot(self, identifier: impl Into<String>, snapshot: AssetSnapshot) -> Self {
        self.with_outcome(identifier, Ok(snapshot))
    }

    pub fn push(&self, identifier: impl Into<String>, outcome: Outcome) {
        self.outcomes
            .lock()
            .expect("scripted outcomes poisoned")
            .entry(identifier.into())
            .or_default()
            .push_back(outcome);
    }

    /// Shared counter for asserting how many fetches were issued.
    pub fn fetch_count(&self) -> Arc<AtomicU32> {
        self.fetch_count.clone()
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSource {
    async fn fetch_snapshot(&self, identifier: &str) -> Outcome {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .expect("scripted outcomes poisoned")
            .get_mut(identifier)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(ScanError::NotFound))
    }
}

/// A source whose fetches for gated identifiers block until released.
///
/// Gates are per-identifier [`Notify`] handles; releasing before the fetch
/// arrives is safe (the permit is stored).
pub struct GatedSource {
    inner: ScriptedSource,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl GatedSource {
    pub fn new(inner: ScriptedSource) -> Self {
        Self {
            inner,
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Hold future fetches for `identifier` until the returned handle is
    /// notified.
    pub fn gate(&self, identifier: impl Into<String>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .expect("gates poisoned")
            .insert(identifier.into(), gate.clone());
        gate
    }
}

#[async_trait]
impl SnapshotSource for GatedSource {
    async fn fetch_snapshot(&self, identifier: &str) -> Outcome {
        let gate = self
            .gates
            .lock()
            .expect("gates poisoned")
            .get(identifier)
            .cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.inner.fetch_snapshot(identifier).await
    }
}
