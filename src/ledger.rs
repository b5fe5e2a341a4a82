use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;

use rust_decimal::Decimal;

use crate::account::{Account, AccountKind};
use crate::customer::Customer;
use crate::error::LedgerError;

pub type Accounts = HashMap<String, Account>;

/// The collection of all accounts, keyed by account number. Account numbers
/// are unique within a ledger; opening a taken number is rejected.
#[derive(Debug)]
pub struct Ledger {
    accounts: Accounts,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            accounts: Accounts::new(),
        }
    }

    /// Rebuilds a ledger from a list of accounts, e.g. a loaded snapshot.
    pub fn from_accounts(accounts: Vec<Account>) -> Result<Self, LedgerError> {
        let mut ledger = Ledger::new();
        for account in accounts {
            if ledger.accounts.contains_key(account.number()) {
                return Err(LedgerError::DuplicateAccount(account.number().to_owned()));
            }
            ledger
                .accounts
                .insert(account.number().to_owned(), account);
        }
        Ok(ledger)
    }

    pub fn open_account(
        &mut self,
        kind: AccountKind,
        number: &str,
        customer: Customer,
    ) -> Result<(), LedgerError> {
        let account = Account::new(kind, number, customer)?;
        if self.accounts.contains_key(account.number()) {
            return Err(LedgerError::DuplicateAccount(number.to_owned()));
        }
        self.accounts.insert(account.number().to_owned(), account);
        Ok(())
    }

    /// Removes and returns the account.
    pub fn remove_account(&mut self, number: &str) -> Result<Account, LedgerError> {
        self.accounts
            .remove(number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_owned()))
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn deposit(&mut self, number: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_owned()))?
            .deposit(amount)
    }

    /// Returns the amount actually withdrawn, which the account variant may
    /// cap at the current balance.
    pub fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_owned()))?
            .withdraw(amount)
    }

    /// Applies the end-of-month update to every account, in no particular
    /// order.
    pub fn apply_monthly_updates(&mut self) {
        for account in self.accounts.values_mut() {
            account.apply_monthly_update();
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// All account numbers, sorted.
    pub fn account_numbers(&self) -> Vec<&str> {
        let mut numbers: Vec<&str> = self.accounts.keys().map(String::as_str).collect();
        numbers.sort_unstable();
        numbers
    }

    pub fn total_balance(&self) -> Decimal {
        self.accounts.values().map(Account::balance).sum()
    }

    pub fn average_balance(&self) -> Decimal {
        if self.accounts.is_empty() {
            return Decimal::ZERO;
        }
        self.total_balance() / Decimal::from(self.accounts.len())
    }

    pub fn zero_balance_count(&self) -> usize {
        self.accounts
            .values()
            .filter(|account| account.balance() == Decimal::ZERO)
            .count()
    }

    pub fn largest_account(&self) -> Option<&Account> {
        self.accounts
            .values()
            .max_by(|a, b| a.balance().cmp(&b.balance()))
    }
}

impl Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "account, type, balance, customer_id, customer_name")?;

        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_unstable_by(|a, b| a.number().cmp(b.number()));
        for account in accounts {
            writeln!(f, "{}", account)?;
        }
        Ok(())
    }
}
