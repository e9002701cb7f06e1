//! Command line and environment configuration

use std::time::Duration;

use clap::Parser;
use rust_decimal::Decimal;

use crate::account::WithdrawalPolicy;
use crate::address::DEFAULT_POSTAL_API_URL;
use crate::errors::ConfigErr;

/// Interactive in-memory bank ledger.
///
/// Every option can also be given through environment variable.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// base url of postal code service
    #[arg(long, env = "LEDGER_POSTAL_API_URL", default_value = DEFAULT_POSTAL_API_URL)]
    pub postal_api_url: String,

    /// maximum amount of a single withdrawal from current account
    #[arg(long, env = "LEDGER_WITHDRAWAL_LIMIT", default_value = "500")]
    pub withdrawal_limit: Decimal,

    /// maximum number of withdrawals from current account
    #[arg(long, env = "LEDGER_MAX_WITHDRAWALS", default_value_t = 3)]
    pub max_withdrawals: usize,

    /// timeout of postal code requests in seconds
    #[arg(long, env = "LEDGER_HTTP_TIMEOUT_SECS", default_value_t = 10)]
    pub http_timeout_secs: u64,
}

impl Config {
    /// Withdrawal rules for every opened current account
    pub fn withdrawal_policy(&self) -> Result<WithdrawalPolicy, ConfigErr> {
        if self.withdrawal_limit <= Decimal::ZERO {
            return Err(ConfigErr::WithdrawalLimit(self.withdrawal_limit));
        }

        Ok(WithdrawalPolicy {
            limit: self.withdrawal_limit,
            max_withdrawals: self.max_withdrawals,
        })
    }

    /// timeout of postal code requests
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
