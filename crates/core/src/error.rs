//! # Error Module
//!
//! Domain errors for Minibank, built with thiserror.

use thiserror::Error;

/// Raised when a debit asks for more than the account holds.
///
/// The message is fixed and user-facing; `Bank::transfer` propagates it
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Dinero insuficiente")]
pub struct InsufficientFundsError;

/// Result type alias for account and transfer operations
pub type CoreResult<T> = Result<T, InsufficientFundsError>;

/// Errors for operations that address accounts held by a `Bank` by owner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error(transparent)]
    InsufficientFunds(#[from] InsufficientFundsError),
}

impl BankError {
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, BankError::InsufficientFunds(_))
    }
}
