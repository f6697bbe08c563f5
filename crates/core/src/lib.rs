//! Minibank Core - Domain types
//!
//! This crate contains the banking model:
//! - `Money`: exact decimal amount
//! - `Account`: owner + balance with guarded debit
//! - `Bank`: ordered account collection with two-account transfer
//! - `InsufficientFundsError`: the single failure of debit and transfer

pub mod account;
pub mod bank;
pub mod error;
pub mod money;

pub use account::Account;
pub use bank::Bank;
pub use error::{BankError, CoreResult, InsufficientFundsError};
pub use money::{Money, MoneyError};
