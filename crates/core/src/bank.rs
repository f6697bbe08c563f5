//! # Bank Module
//!
//! A `Bank` owns its accounts in insertion order and moves money between
//! two accounts with a debit followed by a credit.

use crate::account::Account;
use crate::error::{BankError, CoreResult};
use crate::money::Money;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Bank {
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    /// Create a bank with no accounts
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    /// Create a bank that already holds `accounts`, in the given order
    pub fn with_accounts(name: impl Into<String>, accounts: Vec<Account>) -> Self {
        let mut bank = Self::new(name);
        for account in accounts {
            bank.add_account(account);
        }
        bank
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the bank. Accounts already held report the new name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        for account in &mut self.accounts {
            account.attach_to(&self.name);
        }
    }

    /// Append `account` and point its back-reference at this bank
    pub fn add_account(&mut self, mut account: Account) {
        account.attach_to(&self.name);
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// First account held for `owner`
    pub fn find_account(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.owner() == owner)
    }

    pub fn find_account_mut(&mut self, owner: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.owner() == owner)
    }

    /// Sum of all held balances
    pub fn total_balance(&self) -> Money {
        self.accounts
            .iter()
            .fold(Money::zero(), |total, a| &total + a.balance())
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// The debit runs first; if it fails the error is returned as is and
    /// `to` is never touched.
    pub fn transfer(
        &self,
        from: &mut Account,
        to: &mut Account,
        amount: &Money,
    ) -> CoreResult<()> {
        from.debit(amount)?;
        to.credit(amount);
        debug!(
            bank = %self.name,
            from = from.owner(),
            to = to.owner(),
            amount = %amount,
            "Transfer completed"
        );
        Ok(())
    }

    /// Transfer between two accounts held by this bank, addressed by owner.
    ///
    /// Both owners are resolved before any balance changes.
    pub fn transfer_between(
        &mut self,
        from_owner: &str,
        to_owner: &str,
        amount: &Money,
    ) -> Result<(), BankError> {
        let from = self.position(from_owner)?;
        let to = self.position(to_owner)?;

        self.accounts[from].debit(amount)?;
        self.accounts[to].credit(amount);
        debug!(
            bank = %self.name,
            from = from_owner,
            to = to_owner,
            amount = %amount,
            "Transfer completed"
        );
        Ok(())
    }

    fn position(&self, owner: &str) -> Result<usize, BankError> {
        self.accounts
            .iter()
            .position(|a| a.owner() == owner)
            .ok_or_else(|| BankError::AccountNotFound(owner.to_string()))
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bank {} (accounts: {})", self.name, self.accounts.len())
    }
}
