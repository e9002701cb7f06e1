//! Simple in-memory bank ledger

#![deny(missing_docs)]

pub mod account;
pub mod address;
pub mod amount;
pub mod bank;
pub mod config;
pub mod customer;
pub mod errors;
pub mod menu;
pub mod national_id;
pub mod statement;

/// Account identifier. Assigned sequentially starting at 1
pub type AccountNumber = u32;

/// Branch code attached to every account
pub const AGENCY: &str = "0001";
