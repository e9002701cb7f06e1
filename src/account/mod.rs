//! Account traits and structs
use crate::errors::AccountErr;
use crate::national_id::NationalId;
use crate::AccountNumber;
use rust_decimal::Decimal;
use std::fmt::Debug;

pub(crate) mod balance;
pub(crate) mod basic_account;
pub(crate) mod current_account;
pub mod history;
pub mod transactions;

pub use basic_account::BasicAcc;
pub use current_account::{CurrentAcc, WithdrawalPolicy};
pub use history::{History, HistoryEntry, TransKind};
pub use transactions::Transaction;

/// Represent basic account information and money operations.
///
/// Every account is built around a [`BasicAcc`]. Implementors only provide access to it and
/// override the operations whose rules differ.
pub trait Account: Debug {
    /// underlying basic account
    fn base(&self) -> &BasicAcc;
    /// mutable underlying basic account
    fn base_mut(&mut self) -> &mut BasicAcc;

    /// account number
    fn number(&self) -> AccountNumber {
        self.base().number()
    }
    /// branch code
    fn agency(&self) -> &str {
        self.base().agency()
    }
    /// national ID of the account owner
    fn holder(&self) -> &NationalId {
        self.base().holder()
    }
    /// amount of money on account
    fn balance(&self) -> Decimal {
        self.base().balance()
    }
    /// accepted transactions
    fn history(&self) -> &History {
        self.base().history()
    }

    /// increase balance. Does not record history.
    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        self.base_mut().deposit(amount)
    }
    /// decrease balance. Does not record history.
    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        self.base_mut().withdraw(amount)
    }
}
