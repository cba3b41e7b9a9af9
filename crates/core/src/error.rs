//! Domain error model.

use thiserror::Error;

use crate::id::AccountId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Flat on purpose: callers only ever discriminate on the variant. Every
/// variant is surfaced unchanged to the outermost caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An amount supplied to a deposit, withdrawal or account opening was negative.
    #[error("{0}")]
    NegativeAmount(String),

    /// A withdrawal asked for more than the current balance.
    #[error("{0}")]
    InsufficientFunds(String),

    /// No account carries the requested number.
    #[error("account not found with account number: {0}")]
    AccountNotFound(AccountId),
}

impl DomainError {
    pub fn negative_amount(msg: impl Into<String>) -> Self {
        Self::NegativeAmount(msg.into())
    }

    pub fn insufficient_funds(msg: impl Into<String>) -> Self {
        Self::InsufficientFunds(msg.into())
    }

    pub fn account_not_found(id: AccountId) -> Self {
        Self::AccountNotFound(id)
    }
}
