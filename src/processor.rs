use crate::account::AccountKind;
use crate::customer::Customer;
use crate::entry::{EntryError, LedgerEntry, OpType};
use crate::error::LedgerError;
use crate::ledger::Ledger;

use std::io::Read;
use std::iter::Iterator;

use csv::{ReaderBuilder, Trim};
use tracing::warn;

#[inline]
pub fn process_csv_stream(ledger: &mut Ledger, reader: impl Read) {
    let mut binding = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let stream = binding
        .deserialize()
        .inspect(|result: &Result<LedgerEntry, csv::Error>| {
            if let Err(e) = result {
                warn!(error = %e, "Error parsing entry");
            }
        })
        .filter_map(Result::ok);

    process_stream(ledger, stream);
}

#[inline]
pub fn process_stream(ledger: &mut Ledger, stream: impl Iterator<Item = LedgerEntry>) {
    for entry in stream {
        let result = process_entry(ledger, entry);

        result.unwrap_or_else(|e| {
            warn!(error = %e, "Error processing entry");
        });
    }
}

#[inline]
fn process_entry(ledger: &mut Ledger, entry: LedgerEntry) -> Result<(), LedgerError> {
    match entry.op {
        OpType::Open => {
            let kind: AccountKind = entry
                .account_type
                .as_deref()
                .ok_or(EntryError::MissingAccountType)?
                .parse()?;
            let customer = Customer::new(
                entry
                    .customer_id
                    .as_deref()
                    .ok_or(EntryError::MissingCustomerId)?,
                entry
                    .customer_name
                    .as_deref()
                    .ok_or(EntryError::MissingCustomerName)?,
            )?;
            ledger.open_account(kind, entry.require_account_number()?, customer)
        }
        OpType::Deposit => ledger.deposit(entry.require_account_number()?, entry.require_amount()?),
        OpType::Withdraw => {
            ledger.withdraw(entry.require_account_number()?, entry.require_amount()?)?;
            Ok(())
        }
        OpType::Remove => {
            ledger.remove_account(entry.require_account_number()?)?;
            Ok(())
        }
        OpType::MonthlyUpdate => {
            ledger.apply_monthly_updates();
            Ok(())
        }
    }
}
