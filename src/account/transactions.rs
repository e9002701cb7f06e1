//! Represents transactions
use super::{Account, HistoryEntry, TransKind};
use crate::{amount::Amount, errors::AccountErr};
use chrono::Local;
use rust_decimal::Decimal;

/// Requested money movement. Does not know which account it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// increase balance
    Deposit(Decimal),
    /// decrease balance
    Withdrawal(Decimal),
}

impl Transaction {
    /// requested amount, not validated yet
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// kind recorded in history
    pub fn kind(&self) -> TransKind {
        match self {
            Transaction::Deposit(_) => TransKind::Deposit,
            Transaction::Withdrawal(_) => TransKind::Withdrawal,
        }
    }

    /// Apply transaction to `account`.
    ///
    /// History entry is appended only if the account accepted the operation. On error neither
    /// balance nor history changed.
    pub fn register<A: Account + ?Sized>(&self, account: &mut A) -> Result<(), AccountErr> {
        let amount = Amount::try_from(self.amount())?;
        match self {
            Transaction::Deposit(_) => account.deposit(*amount)?,
            Transaction::Withdrawal(_) => account.withdraw(*amount)?,
        }

        let entry = HistoryEntry::new(self.kind(), amount, Local::now());
        account.base_mut().history_mut().append(entry);
        Ok(())
    }
}
