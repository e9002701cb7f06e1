//! # Bank-ledger
//! Interactive in-memory bank: register customers, open current accounts, deposit, withdraw and
//! print statements. Nothing is persisted between runs.
//!
//! Logs are written to stderr and filtered with `RUST_LOG` (default `warn`).

#![deny(missing_docs)]

use anyhow::Context;
use bank_ledger::{address::ViaCep, bank::Bank, config::Config, menu::Menu};
use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let policy = config
        .withdrawal_policy()
        .context("invalid withdrawal configuration")?;
    let lookup = ViaCep::new(&config.postal_api_url, config.http_timeout())
        .context("create address service client")?;

    tracing::debug!(?config, "starting");

    let mut menu = Menu::new(Bank::new(policy), BufReader::new(stdin()), stdout(), lookup);
    menu.run().await.context("menu session")?;

    Ok(())
}
