//! Command-line interface definitions.

pub mod output;
pub mod scan;
pub mod trending;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tokenscan - Solana token safety scanning from live market metrics.
#[derive(Parser, Debug)]
#[command(name = "tokenscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a token address and print its risk assessment
    Scan(ScanArgs),

    /// Show the trending token panel
    Trending,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Token address to scan
    pub address: String,
}
