//! Append-only record of accepted money movements
use crate::amount::Amount;
use chrono::{DateTime, Local};
use std::fmt;

/// Kind of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransKind {
    /// increase balance
    Deposit,
    /// decrease balance
    Withdrawal,
}

impl fmt::Display for TransKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransKind::Deposit => f.write_str("Deposit"),
            TransKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// One accepted transaction. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: TransKind,
    amount: Amount,
    at: DateTime<Local>,
}

impl HistoryEntry {
    pub(crate) fn new(kind: TransKind, amount: Amount, at: DateTime<Local>) -> Self {
        Self { kind, amount, at }
    }

    /// deposit or withdrawal
    pub fn kind(&self) -> TransKind {
        self.kind
    }

    /// accepted amount
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// moment the transaction was accepted
    pub fn at(&self) -> DateTime<Local> {
        self.at
    }
}

/// Chronological history of one account
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Only transactions append to history, and only after the balance changed.
    pub(crate) fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries of given `kind`
    pub fn count(&self, kind: TransKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// no transaction was accepted yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
