//! Possible errors

use crate::amount::InvalidAmountErr;
use rust_decimal::Decimal;
use thiserror::Error;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("insufficient balance")]
    InsufficientFunds,
    #[error("the amount would exceed the maximum balance")]
    Overflow,
}

/// Group all errors that can occurs when money is moved on an account.
///
/// Every variant is a recoverable rejection: balance and history stay untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    /// amount was zero, negative or finer than a cent
    #[error("{0}")]
    InvalidAmount(#[from] InvalidAmountErr),
    /// not enough money on account
    #[error("{0}")]
    Balance(#[from] BalanceErr),
    /// single withdrawal above account limit
    #[error("the amount exceeds the limit of {limit:.2} for a single withdrawal")]
    LimitExceeded {
        /// configured per-withdrawal limit
        limit: Decimal,
    },
    /// account already reached its number of withdrawals
    #[error("the maximum of {max} withdrawals has been reached")]
    WithdrawalsExhausted {
        /// configured number of withdrawals
        max: usize,
    },
}

/// Errors returned by the customer and account registry
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankErr {
    #[error("customer not found")]
    CustomerNotFound,
    #[error("a customer with this national ID already exists")]
    DuplicateCustomer,
    #[error("this customer does not have an account yet")]
    NoAccount,
    #[error(transparent)]
    Account(#[from] AccountErr),
}

/// Invalid national identifier
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the national ID provided is not valid")]
pub struct NationalIdErr;

/// Errors of the postal address lookup
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum AddressErr {
    #[error("postal code must have exactly 8 digits")]
    InvalidPostalCode,
    #[error("failed to get address data, status code: {0}")]
    Status(u16),
    #[error("postal code not found")]
    NotFound,
    #[error("address service request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Invalid configuration value
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigErr {
    #[error("withdrawal limit must be positive, got {0}")]
    WithdrawalLimit(Decimal),
}
