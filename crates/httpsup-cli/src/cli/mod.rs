//! CLI for the httpsup enforcement layer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use httpsup_core::config;
use httpsup_core::policy::UpgradePolicy;

use commands::{run_check, run_fetch};

/// Top-level CLI for httpsup.
#[derive(Debug, Parser)]
#[command(name = "httpsup")]
#[command(about = "httpsup: upgrade outbound http:// URLs to https:// before dispatch", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the upgrade decision for each URL without touching the network.
    Check {
        /// URLs to evaluate.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Perform an enforced GET and print the response status and size.
    Fetch {
        /// URL to fetch; upgraded to HTTPS unless loopback or exempt.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let policy = UpgradePolicy::from_config(&cfg);

        match cli.command {
            CliCommand::Check { urls } => run_check(&policy, &urls),
            CliCommand::Fetch { url } => run_fetch(&cfg, policy, &url).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
