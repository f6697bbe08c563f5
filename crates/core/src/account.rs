//! # Account Module
//!
//! An `Account` holds an owner name and an exact balance. Balances only move
//! through `debit` / `credit` (or an explicit `set_balance`), and `debit`
//! refuses to overdraw.

use crate::error::{CoreResult, InsufficientFundsError};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, warn};

/// A single bank account.
///
/// Two accounts are equal when they have the same owner and the same
/// balance, regardless of which bank (if any) they were added to.
///
/// # Examples
/// ```
/// use minibank_core::{Account, Money};
///
/// let mut account = Account::new("Anderson", "1000.12345".parse().unwrap());
/// account.debit(&Money::from(100)).unwrap();
/// assert_eq!(account.balance().to_string(), "900.12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    owner: String,
    balance: Money,
    /// Name of the bank holding this account. Lookup only, never ownership.
    #[serde(skip)]
    bank: Option<String>,
}

impl Account {
    /// Create an account. The initial balance is not validated.
    pub fn new(owner: impl Into<String>, balance: Money) -> Self {
        Self {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> &Money {
        &self.balance
    }

    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    /// Name of the bank this account was added to, if any.
    pub fn bank_name(&self) -> Option<&str> {
        self.bank.as_deref()
    }

    pub(crate) fn attach_to(&mut self, bank_name: &str) {
        self.bank = Some(bank_name.to_string());
    }

    /// Withdraw `amount` from the balance.
    ///
    /// # Errors
    /// `InsufficientFundsError` if `amount` exceeds the current balance; the
    /// balance is left untouched.
    pub fn debit(&mut self, amount: &Money) -> CoreResult<()> {
        if &self.balance < amount {
            warn!(
                owner = %self.owner,
                amount = %amount,
                balance = %self.balance,
                "Debit rejected"
            );
            return Err(InsufficientFundsError);
        }
        self.balance -= amount;
        debug!(owner = %self.owner, amount = %amount, balance = %self.balance, "Debited");
        Ok(())
    }

    /// Deposit `amount` into the balance. Never fails.
    pub fn credit(&mut self, amount: &Money) {
        self.balance += amount;
        debug!(owner = %self.owner, amount = %amount, balance = %self.balance, "Credited");
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.balance.hash(state);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.owner, self.balance)
    }
}
