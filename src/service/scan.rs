//! Scan session state machine.
//!
//! One session coordinates the verification gate, the single-asset fetch,
//! and the surfaced outcome. The session holds at most one logical scan: a
//! new request replaces the previous one wholesale, and results from an
//! outdated fetch are detected by epoch comparison and discarded rather
//! than cancelled in flight. Only the `verified` flag survives across scans
//! within a session; it flips once and never reverts.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::api::SnapshotSource;
use crate::domain::{classify, AssessedSnapshot, AssetSnapshot};
use crate::error::{ScanError, VerificationError};

/// Where a session currently stands. Terminal phases (`Success`, `Error`,
/// `NotFound`) change only via a new scan request or an explicit dismissal.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanPhase {
    Idle,
    /// A scan was requested before the session was verified; the identifier
    /// is parked until the verification provider reports an outcome.
    AwaitingVerification {
        identifier: String,
        /// Inline verification failure, shown while the gate stays open for
        /// retry.
        last_error: Option<VerificationError>,
    },
    Fetching {
        identifier: String,
    },
    Success(AssessedSnapshot),
    NotFound {
        message: String,
    },
    Error {
        message: String,
    },
}

impl ScanPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScanPhase::Success(_) | ScanPhase::NotFound { .. } | ScanPhase::Error { .. }
        )
    }
}

/// Read-only view of a session, cloned out for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanState {
    pub verified: bool,
    pub phase: ScanPhase,
}

/// Handle for one outstanding fetch, tagged with the epoch it was issued
/// under. A completed fetch whose epoch no longer matches the session's is
/// stale and gets dropped (last-request-wins).
#[derive(Debug)]
pub struct FetchTicket {
    epoch: u64,
    identifier: String,
}

impl FetchTicket {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

struct Inner {
    verified: bool,
    epoch: u64,
    phase: ScanPhase,
}

/// One user-facing scan lifecycle over an injected snapshot source.
pub struct ScanSession {
    source: Arc<dyn SnapshotSource>,
    inner: RwLock<Inner>,
}

impl ScanSession {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            source,
            inner: RwLock::new(Inner {
                verified: false,
                epoch: 0,
                phase: ScanPhase::Idle,
            }),
        }
    }

    /// Current state, cloned for observation.
    pub fn state(&self) -> ScanState {
        let inner = self.inner.read();
        ScanState {
            verified: inner.verified,
            phase: inner.phase.clone(),
        }
    }

    /// Request a scan for `identifier`, replacing any previous scan.
    ///
    /// Returns a ticket when the session may fetch immediately (already
    /// verified); `None` means the session is parked at the verification
    /// gate and [`report_verification_outcome`](Self::report_verification_outcome)
    /// will produce the ticket.
    pub fn request_scan(&self, identifier: impl Into<String>) -> Option<FetchTicket> {
        let identifier = identifier.into();
        let mut inner = self.inner.write();

        // Any outcome still in flight for the previous request is now stale.
        inner.epoch += 1;

        if !inner.verified {
            info!(identifier = %identifier, "Scan parked pending wallet verification");
            inner.phase = ScanPhase::AwaitingVerification {
                identifier,
                last_error: None,
            };
            return None;
        }

        info!(identifier = %identifier, "Scan started");
        inner.phase = ScanPhase::Fetching {
            identifier: identifier.clone(),
        };
        Some(FetchTicket {
            epoch: inner.epoch,
            identifier,
        })
    }

    /// Feed the verification provider's outcome into the gate.
    ///
    /// Success marks the session verified for good and releases the parked
    /// identifier for fetching. Failure keeps the gate open with the error
    /// recorded inline so the user can retry without resubmitting the scan.
    pub fn report_verification_outcome(
        &self,
        outcome: Result<(), VerificationError>,
    ) -> Option<FetchTicket> {
        let mut inner = self.inner.write();

        let identifier = match &inner.phase {
            ScanPhase::AwaitingVerification { identifier, .. } => identifier.clone(),
            other => {
                warn!(phase = ?other, "Verification outcome outside the gate, ignoring");
                return None;
            }
        };

        match outcome {
            Ok(()) => {
                info!(identifier = %identifier, "Wallet verified, resuming scan");
                inner.verified = true;
                inner.phase = ScanPhase::Fetching {
                    identifier: identifier.clone(),
                };
                Some(FetchTicket {
                    epoch: inner.epoch,
                    identifier,
                })
            }
            Err(err) => {
                warn!(error = %err, "Wallet verification failed");
                inner.phase = ScanPhase::AwaitingVerification {
                    identifier,
                    last_error: Some(err),
                };
                None
            }
        }
    }

    /// Dismiss the current scan and return to idle. The parked or displayed
    /// outcome is discarded; the verified flag is untouched.
    pub fn dismiss(&self) {
        let mut inner = self.inner.write();
        inner.epoch += 1;
        inner.phase = ScanPhase::Idle;
    }

    /// Apply a settled fetch to the session, unless it is stale.
    pub fn complete_fetch(&self, ticket: FetchTicket, outcome: Result<AssetSnapshot, ScanError>) {
        let mut inner = self.inner.write();

        if ticket.epoch != inner.epoch {
            debug!(
                identifier = %ticket.identifier,
                ticket_epoch = ticket.epoch,
                session_epoch = inner.epoch,
                "Dropping stale fetch result"
            );
            return;
        }

        inner.phase = match outcome {
            Ok(snapshot) => {
                let assessment = classify(&snapshot, Utc::now());
                info!(
                    identifier = %ticket.identifier,
                    tier = %assessment.tier,
                    "Scan complete"
                );
                ScanPhase::Success(AssessedSnapshot {
                    snapshot,
                    assessment,
                })
            }
            Err(ScanError::NotFound) => ScanPhase::NotFound {
                message: "Token not found or no trading pairs available".into(),
            },
            Err(err) => ScanPhase::Error {
                message: format!("Failed to fetch token data: {err}"),
            },
        };
    }

    /// Run one ticket to completion against the session's source.
    pub async fn execute(&self, ticket: FetchTicket) {
        let outcome = self.source.fetch_snapshot(&ticket.identifier).await;
        self.complete_fetch(ticket, outcome);
    }

    /// Convenience driver: request a scan and, if the session is already
    /// verified, run the fetch to completion. Returns the resulting state.
    pub async fn scan(&self, identifier: impl Into<String>) -> ScanState {
        if let Some(ticket) = self.request_scan(identifier) {
            self.execute(ticket).await;
        }
        self.state()
    }
}
