//! Wallet verification provider port.
//!
//! The session only consumes an availability boolean and a connect outcome;
//! provider-specific protocol details stay behind this trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::VerificationError;

#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Wallet name shown to the user (e.g. "Phantom").
    fn name(&self) -> &str;

    /// Whether the wallet is present in the current environment.
    fn is_available(&self) -> bool;

    /// Ask the wallet to prove ownership.
    async fn connect(&self) -> Result<(), VerificationError>;
}

/// A wallet choice as the presentation layer renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletEntry {
    pub name: String,
    pub available: bool,
}

/// Known wallet providers for the current environment.
#[derive(Default)]
pub struct WalletRegistry {
    providers: Vec<Arc<dyn VerificationProvider>>,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The known wallet lineup: Phantom, Solflare, and Backpack, each with
    /// its availability probed from the current environment.
    pub fn known_wallets() -> Self {
        let mut registry = Self::new();
        for name in ["Phantom", "Solflare", "Backpack"] {
            registry.register(Arc::new(ExtensionWallet::detect(name)));
        }
        registry
    }

    pub fn register(&mut self, provider: Arc<dyn VerificationProvider>) {
        self.providers.push(provider);
    }

    /// Whether any registered wallet is present in this environment.
    pub fn any_available(&self) -> bool {
        self.providers.iter().any(|p| p.is_available())
    }

    /// Render-ready list of wallet choices with availability flags.
    pub fn entries(&self) -> Vec<WalletEntry> {
        self.providers
            .iter()
            .map(|p| WalletEntry {
                name: p.name().to_string(),
                available: p.is_available(),
            })
            .collect()
    }

    /// Connect through the named provider.
    ///
    /// An unavailable or unknown wallet is a [`VerificationError::NotInstalled`]
    /// outcome, matching what the user sees when picking a wallet that is
    /// not present.
    pub async fn connect(&self, wallet: &str) -> Result<(), VerificationError> {
        let provider = self
            .providers
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(wallet));

        match provider {
            Some(provider) if provider.is_available() => provider.connect().await,
            _ => Err(VerificationError::NotInstalled {
                wallet: wallet.to_string(),
            }),
        }
    }
}

/// A browser-extension wallet as seen from this process.
///
/// Extensions live in a browser, so detection here is by environment
/// variable: `TOKENSCAN_WALLET_<NAME>` marks the wallet present. In a bare
/// terminal nothing is set and every extension wallet reports unavailable.
pub struct ExtensionWallet {
    name: String,
    available: bool,
}

impl ExtensionWallet {
    pub fn detect(name: impl Into<String>) -> Self {
        let name = name.into();
        let var = format!("TOKENSCAN_WALLET_{}", name.to_ascii_uppercase());
        let available = std::env::var_os(var).is_some();
        Self { name, available }
    }
}

#[async_trait]
impl VerificationProvider for ExtensionWallet {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn connect(&self) -> Result<(), VerificationError> {
        if self.available {
            Ok(())
        } else {
            Err(VerificationError::NotInstalled {
                wallet: self.name.clone(),
            })
        }
    }
}

/// Provider for environments without a wallet extension (e.g. a terminal).
///
/// Always available and always connects, standing in where the original
/// flow would fall back to a demo connection.
pub struct AutoApproveProvider {
    name: String,
}

impl AutoApproveProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl VerificationProvider for AutoApproveProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn connect(&self) -> Result<(), VerificationError> {
        Ok(())
    }
}
