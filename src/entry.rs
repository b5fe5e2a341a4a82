use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// One record of the ledger operations CSV. Columns other than `op` are
/// optional at the parsing level; each operation checks for the fields it
/// needs when the record is processed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LedgerEntry {
    pub op: OpType,
    #[serde(rename = "account")]
    pub account_number: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpType {
    Open,
    Deposit,
    Withdraw,
    Remove,
    MonthlyUpdate,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error("Missing account number")]
    MissingAccountNumber,
    #[error("Missing account type")]
    MissingAccountType,
    #[error("Missing customer id")]
    MissingCustomerId,
    #[error("Missing customer name")]
    MissingCustomerName,
    #[error("Missing amount for operation")]
    MissingAmount,
}

impl LedgerEntry {
    pub fn require_account_number(&self) -> Result<&str, EntryError> {
        self.account_number
            .as_deref()
            .ok_or(EntryError::MissingAccountNumber)
    }

    pub fn require_amount(&self) -> Result<Decimal, EntryError> {
        self.amount.ok_or(EntryError::MissingAmount)
    }
}
