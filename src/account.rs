use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::dec;
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::error::LedgerError;

/// Free transactions per month on a checking account.
pub const FREE_TRANSACTIONS: u32 = 2;
/// Fee per transaction beyond the free limit.
pub const TRANSACTION_FEE: Decimal = dec!(3);
/// Monthly interest multiplier for gold accounts (5%).
pub const GOLD_INTEREST: Decimal = dec!(1.05);
/// Monthly interest multiplier for regular accounts (6%).
pub const REGULAR_INTEREST: Decimal = dec!(1.06);
/// Monthly maintenance fee for regular accounts.
pub const MAINTENANCE_FEE: Decimal = dec!(10);

/// Account variant. The variants share deposit semantics and differ in
/// withdrawal policy and monthly update formula:
///
/// - Checking: no overdraft, per-transaction fees past the free limit.
/// - Gold: unlimited overdraft, 5% monthly interest, no fees.
/// - Regular: no overdraft, 6% monthly interest, flat maintenance fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum AccountKind {
    Checking { transactions: u32 },
    Gold,
    Regular,
}

impl AccountKind {
    pub fn checking() -> Self {
        AccountKind::Checking { transactions: 0 }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Checking { .. } => "checking",
            AccountKind::Gold => "gold",
            AccountKind::Regular => "regular",
        }
    }
}

impl FromStr for AccountKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "checking" => Ok(AccountKind::checking()),
            "gold" => Ok(AccountKind::Gold),
            "regular" => Ok(AccountKind::Regular),
            _ => Err(LedgerError::UnknownAccountType(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    number: String,
    balance: Decimal,
    customer: Customer,
    kind: AccountKind,
}

impl Account {
    /// Opens an account with a zero balance.
    pub fn new(kind: AccountKind, number: &str, customer: Customer) -> Result<Self, LedgerError> {
        if number.trim().is_empty() {
            return Err(LedgerError::EmptyAccountNumber);
        }
        Ok(Account {
            number: number.to_owned(),
            balance: Decimal::ZERO,
            customer,
            kind,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance += amount;
        self.count_transaction();
        Ok(())
    }

    /// Returns the amount actually withdrawn. Checking and regular accounts
    /// cap the withdrawal at the current balance; gold accounts withdraw the
    /// full amount and may overdraw.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let withdrawn = match self.kind {
            AccountKind::Gold => amount,
            // nothing available once the balance is at or below zero
            _ => amount.min(self.balance.max(Decimal::ZERO)),
        };
        self.balance -= withdrawn;
        self.count_transaction();
        Ok(withdrawn)
    }

    /// Applies the variant-specific end-of-month interest or fees. Not safe
    /// to call twice for the same period.
    pub fn apply_monthly_update(&mut self) {
        match &mut self.kind {
            AccountKind::Checking { transactions } => {
                if *transactions > FREE_TRANSACTIONS {
                    let fee = TRANSACTION_FEE * Decimal::from(*transactions - FREE_TRANSACTIONS);
                    // fees never drive a checking balance negative
                    self.balance = (self.balance - fee).max(Decimal::ZERO);
                }
                *transactions = 0;
            }
            AccountKind::Gold => {
                if self.balance > Decimal::ZERO {
                    self.balance *= GOLD_INTEREST;
                }
            }
            AccountKind::Regular => {
                if self.balance > Decimal::ZERO {
                    self.balance *= REGULAR_INTEREST;
                }
                self.balance -= MAINTENANCE_FEE;
            }
        }
    }

    fn count_transaction(&mut self) {
        if let AccountKind::Checking { transactions } = &mut self.kind {
            *transactions += 1;
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, {}, {:.2}, {}",
            self.number,
            self.kind.label(),
            self.balance,
            self.customer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(kind: AccountKind) -> Account {
        let customer = Customer::new("C-1", "Alice").unwrap();
        Account::new(kind, "ACC-1", customer).unwrap()
    }

    #[test]
    fn test_new_account_rejects_empty_number() {
        let customer = Customer::new("C-1", "Alice").unwrap();
        let result = Account::new(AccountKind::Gold, "  ", customer);
        assert_eq!(result.unwrap_err(), LedgerError::EmptyAccountNumber);
    }

    #[test]
    fn test_account_kind_from_str() {
        assert_eq!(
            "Checking".parse::<AccountKind>().unwrap(),
            AccountKind::checking()
        );
        assert_eq!("GOLD".parse::<AccountKind>().unwrap(), AccountKind::Gold);
        assert_eq!(
            "regular".parse::<AccountKind>().unwrap(),
            AccountKind::Regular
        );

        let result = "savings".parse::<AccountKind>();
        assert_eq!(
            result.unwrap_err(),
            LedgerError::UnknownAccountType("savings".to_owned())
        );
    }

    #[test]
    fn test_deposit() {
        let mut acc = account(AccountKind::Regular);
        acc.deposit(dec!(100.0)).unwrap();
        assert_eq!(acc.balance(), dec!(100.0));
    }

    #[test]
    fn test_deposit_non_positive_amount() {
        let mut acc = account(AccountKind::Gold);
        acc.deposit(dec!(100.0)).unwrap();

        let result = acc.deposit(dec!(0.0));
        assert_eq!(result.unwrap_err(), LedgerError::InvalidAmount(dec!(0.0)));

        let result = acc.deposit(dec!(-5.0));
        assert_eq!(result.unwrap_err(), LedgerError::InvalidAmount(dec!(-5.0)));

        assert_eq!(acc.balance(), dec!(100.0), "Balance should be unchanged");
    }

    #[test]
    fn test_withdraw_non_positive_amount() {
        let mut acc = account(AccountKind::Regular);
        acc.deposit(dec!(50.0)).unwrap();

        let result = acc.withdraw(dec!(-1.0));
        assert_eq!(result.unwrap_err(), LedgerError::InvalidAmount(dec!(-1.0)));
        assert_eq!(acc.balance(), dec!(50.0), "Balance should be unchanged");
    }

    #[test]
    fn test_withdraw_caps_at_balance() {
        let mut acc = account(AccountKind::Regular);
        acc.deposit(dec!(50.0)).unwrap();

        let withdrawn = acc.withdraw(dec!(80.0)).unwrap();
        assert_eq!(withdrawn, dec!(50.0));
        assert_eq!(acc.balance(), dec!(0.0), "No overdraft on regular accounts");

        let mut acc = account(AccountKind::checking());
        acc.deposit(dec!(50.0)).unwrap();

        let withdrawn = acc.withdraw(dec!(80.0)).unwrap();
        assert_eq!(withdrawn, dec!(50.0));
        assert_eq!(acc.balance(), dec!(0.0), "No overdraft on checking accounts");
    }

    #[test]
    fn test_withdraw_from_overdrawn_regular_account() {
        let mut acc = account(AccountKind::Regular);
        acc.apply_monthly_update();
        assert_eq!(acc.balance(), dec!(-10.0));

        let withdrawn = acc.withdraw(dec!(5.0)).unwrap();
        assert_eq!(withdrawn, dec!(0.0));
        assert_eq!(acc.balance(), dec!(-10.0), "Balance should be unchanged");
    }

    #[test]
    fn test_gold_withdraw_allows_overdraft() {
        let mut acc = account(AccountKind::Gold);
        acc.deposit(dec!(50.0)).unwrap();

        let withdrawn = acc.withdraw(dec!(80.0)).unwrap();
        assert_eq!(withdrawn, dec!(80.0));
        assert_eq!(acc.balance(), dec!(-30.0));
    }

    #[test]
    fn test_checking_monthly_update_within_free_limit() {
        let mut acc = account(AccountKind::checking());
        acc.deposit(dec!(50.0)).unwrap();
        acc.withdraw(dec!(10.0)).unwrap();

        acc.apply_monthly_update();
        assert_eq!(acc.balance(), dec!(40.0), "Two transactions are free");
        assert_eq!(acc.kind(), &AccountKind::checking());
    }

    #[test]
    fn test_checking_monthly_update_charges_extra_transactions() {
        let mut acc = account(AccountKind::checking());
        for _ in 0..5 {
            acc.deposit(dec!(20.0)).unwrap();
        }
        assert_eq!(acc.kind(), &AccountKind::Checking { transactions: 5 });

        acc.apply_monthly_update();
        // 3 extra transactions at 3.00 each
        assert_eq!(acc.balance(), dec!(91.0));
        assert_eq!(
            acc.kind(),
            &AccountKind::checking(),
            "Counter should reset after the update"
        );
    }

    #[test]
    fn test_checking_monthly_update_clamps_fee_at_zero() {
        let mut acc = account(AccountKind::checking());
        acc.deposit(dec!(1.0)).unwrap();
        acc.withdraw(dec!(0.5)).unwrap();
        acc.deposit(dec!(0.5)).unwrap();
        acc.withdraw(dec!(0.5)).unwrap();
        assert_eq!(acc.balance(), dec!(0.5));
        assert_eq!(acc.kind(), &AccountKind::Checking { transactions: 4 });

        acc.apply_monthly_update();
        assert_eq!(acc.balance(), dec!(0.0), "Fees should not overdraw");
    }

    #[test]
    fn test_gold_monthly_update() {
        let mut acc = account(AccountKind::Gold);
        acc.deposit(dec!(100.0)).unwrap();
        acc.apply_monthly_update();
        assert_eq!(acc.balance(), dec!(105.0));
    }

    #[test]
    fn test_gold_monthly_update_skips_negative_balance() {
        let mut acc = account(AccountKind::Gold);
        acc.deposit(dec!(10.0)).unwrap();
        acc.withdraw(dec!(60.0)).unwrap();
        assert_eq!(acc.balance(), dec!(-50.0));

        acc.apply_monthly_update();
        assert_eq!(acc.balance(), dec!(-50.0), "No interest on overdrawn balance");
    }

    #[test]
    fn test_regular_monthly_update() {
        let mut acc = account(AccountKind::Regular);
        acc.deposit(dec!(100.0)).unwrap();
        acc.apply_monthly_update();
        // 100 * 1.06 - 10
        assert_eq!(acc.balance(), dec!(96.0));
    }

    #[test]
    fn test_regular_monthly_update_fee_may_overdraw() {
        let mut acc = account(AccountKind::Regular);
        acc.apply_monthly_update();
        assert_eq!(acc.balance(), dec!(-10.0), "Maintenance fee is unconditional");
    }

    #[test]
    fn test_account_display() {
        let mut acc = account(AccountKind::Gold);
        acc.deposit(dec!(100.5)).unwrap();
        assert_eq!(format!("{}", acc), "ACC-1, gold, 100.50, C-1, Alice");
    }
}
