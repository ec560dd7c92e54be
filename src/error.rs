use thiserror::Error;

/// Failures that can come out of a single snapshot lookup.
///
/// The three upstream-facing variants are deliberately distinct: the
/// trending service drops all of them, while the scan session maps
/// `NotFound` and the other two to different terminal phases.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("network failure talking to aggregator: {0}")]
    NetworkFailure(String),

    #[error("aggregator returned an unexpected payload: {0}")]
    MalformedResponse(String),

    #[error("no trading pairs listed for this token")]
    NotFound,

    #[error("token identifier must not be empty")]
    EmptyIdentifier,
}

/// Outcomes of the wallet verification flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("{wallet} wallet not installed")]
    NotInstalled { wallet: String },

    #[error("connection request rejected by user")]
    UserRejected,

    #[error("failed to connect wallet: {0}")]
    Other(String),
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub type Result<T> = std::result::Result<T, Error>;
