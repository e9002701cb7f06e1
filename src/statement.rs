//! Text output of account statement and account listing

use std::fmt;

use crate::account::Account;

const RULE_WIDTH: usize = 100;

/// Placeholder printed for account without transactions
pub const NO_TRANSACTIONS: &str = "No transactions were made.";

/// Chronological list of accepted transactions followed by current balance
pub struct Statement<'a> {
    account: &'a dyn Account,
}

impl<'a> Statement<'a> {
    /// statement of `account`
    pub fn new(account: &'a dyn Account) -> Self {
        Self { account }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================== STATEMENT ===================")?;

        let history = self.account.history();
        if history.is_empty() {
            writeln!(f, "{NO_TRANSACTIONS}")?;
        }
        for entry in history.entries() {
            writeln!(f, "{}:\n\tR$ {:.2}", entry.kind(), *entry.amount())?;
        }

        writeln!(f, "Balance:\tR$ {:.2}", self.account.balance())?;
        write!(f, "================================================")
    }
}

/// Agency, number and holder of an account
pub struct AccountSummary<'a> {
    account: &'a dyn Account,
    holder_name: &'a str,
}

impl<'a> AccountSummary<'a> {
    /// summary line of `account` owned by `holder_name`
    pub fn new(account: &'a dyn Account, holder_name: &'a str) -> Self {
        Self {
            account,
            holder_name,
        }
    }
}

impl fmt::Display for AccountSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Agency:\t\t{}", self.account.agency())?;
        writeln!(f, "Account:\t{}", self.account.number())?;
        write!(f, "Holder:\t\t{}", self.holder_name)
    }
}
