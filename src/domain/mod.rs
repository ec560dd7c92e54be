//! Aggregator-agnostic domain types: market snapshots and risk assessments.

pub mod risk;
pub mod snapshot;

pub use risk::{classify, classify_opt, RiskAssessment, RiskTier};
pub use snapshot::{AssessedSnapshot, AssetSnapshot};
