//! Session and batch services built on top of the snapshot source.

pub mod scan;
pub mod trending;

pub use scan::{FetchTicket, ScanPhase, ScanSession, ScanState};
pub use trending::TrendingService;
