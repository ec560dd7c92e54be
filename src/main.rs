use anyhow::Context;
use clap::Parser;

use tokenscan::cli::{Cli, Commands};
use tokenscan::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // A missing config file falls back to defaults; a broken one is fatal.
    let config = if cli.config.exists() {
        Config::load(&cli.config)
            .with_context(|| format!("loading config from {}", cli.config.display()))?
    } else {
        Config::default()
    };

    config.init_logging();

    match &cli.command {
        Commands::Scan(args) => tokenscan::cli::scan::run(args, &config).await?,
        Commands::Trending => tokenscan::cli::trending::run(&config).await?,
    }

    Ok(())
}
