//! Bank customer
use crate::account::{Account, Transaction};
use crate::errors::AccountErr;
use crate::national_id::NationalId;
use crate::AccountNumber;
use chrono::NaiveDate;

/// Individual person owning accounts.
///
/// Accounts themselves live in the [`crate::bank::Bank`] registry, customer only keeps their
/// numbers in opening order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    birth_date: NaiveDate,
    national_id: NationalId,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    /// Create customer without accounts
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        national_id: NationalId,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date,
            national_id,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    /// full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// date of birth
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// unique identifier within the bank
    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    /// full address line
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Numbers of owned accounts, oldest first
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    /// Record ownership of account `number`
    pub fn open_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Apply `transaction` to `account`. Customer holds no ledger rules of its own.
    pub fn apply<A: Account + ?Sized>(
        &self,
        account: &mut A,
        transaction: &Transaction,
    ) -> Result<(), AccountErr> {
        transaction.register(account)
    }
}
