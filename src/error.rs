use rust_decimal::Decimal;
use thiserror::Error;

use crate::entry::EntryError;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("Amount must be positive: {0}")]
    InvalidAmount(Decimal),
    #[error("Account number cannot be empty")]
    EmptyAccountNumber,
    #[error("Customer id cannot be empty")]
    EmptyCustomerId,
    #[error("Customer name cannot be empty")]
    EmptyCustomerName,
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),
    #[error("Invalid entry for operation: {0}")]
    InvalidEntry(EntryError),
}

impl From<EntryError> for LedgerError {
    fn from(error: EntryError) -> Self {
        Self::InvalidEntry(error)
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
    #[error("Invalid snapshot contents: {0}")]
    Contents(#[from] LedgerError),
}
