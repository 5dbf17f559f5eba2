//! The three-way Design-by-Contract classification.
//!
//! The most literal DbC primitive: [`precondition`], [`postcondition`], and
//! [`invariant`], each with its own dedicated error kind and an optional
//! message. The `_caused` forms additionally wrap an underlying error,
//! retrievable through [`std::error::Error::source`]. Messages pass through
//! verbatim — no template substitution in this family.
//!
//! # Example
//!
//! ```
//! use covenant::{contract, ContractError, ContractKind};
//!
//! fn withdraw(balance: &mut i64, amount: i64) -> Result<(), ContractError> {
//!     contract::precondition(amount > 0, Some("amount must be positive"))?;
//!     let before = *balance;
//!     *balance -= amount;
//!     contract::postcondition(*balance == before - amount, None)?;
//!     contract::invariant(*balance >= 0, Some("balance overdrawn"))?;
//!     Ok(())
//! }
//!
//! let mut balance = 10;
//! let error = withdraw(&mut balance, 100).unwrap_err();
//! assert_eq!(error.kind(), ContractKind::InvariantViolated);
//! ```

use std::error::Error;

use crate::error::{ContractError, ContractKind};

#[inline]
fn classify(
    kind: ContractKind,
    assertion: bool,
    message: Option<&str>,
) -> Result<(), ContractError> {
    if assertion {
        Ok(())
    } else {
        Err(ContractError::with_optional_message(kind, message))
    }
}

#[inline]
fn classify_caused(
    kind: ContractKind,
    assertion: bool,
    message: &str,
    cause: impl Error + Send + Sync + 'static,
) -> Result<(), ContractError> {
    if assertion {
        Ok(())
    } else {
        Err(ContractError::with_message(kind, message).caused_by(cause))
    }
}

/// Fails with [`ContractKind::PreconditionViolated`] if the assertion is
/// false. A violated precondition is caller error.
#[inline]
pub fn precondition(assertion: bool, message: Option<&str>) -> Result<(), ContractError> {
    classify(ContractKind::PreconditionViolated, assertion, message)
}

/// [`precondition`] with a wrapped underlying cause.
#[inline]
pub fn precondition_caused(
    assertion: bool,
    message: &str,
    cause: impl Error + Send + Sync + 'static,
) -> Result<(), ContractError> {
    classify_caused(ContractKind::PreconditionViolated, assertion, message, cause)
}

/// Fails with [`ContractKind::PostconditionViolated`] if the assertion is
/// false. A violated postcondition is a defect in the operation itself.
#[inline]
pub fn postcondition(assertion: bool, message: Option<&str>) -> Result<(), ContractError> {
    classify(ContractKind::PostconditionViolated, assertion, message)
}

/// [`postcondition`] with a wrapped underlying cause.
#[inline]
pub fn postcondition_caused(
    assertion: bool,
    message: &str,
    cause: impl Error + Send + Sync + 'static,
) -> Result<(), ContractError> {
    classify_caused(
        ContractKind::PostconditionViolated,
        assertion,
        message,
        cause,
    )
}

/// Fails with [`ContractKind::InvariantViolated`] if the assertion is false.
/// A violated invariant means corrupted internal state.
#[inline]
pub fn invariant(assertion: bool, message: Option<&str>) -> Result<(), ContractError> {
    classify(ContractKind::InvariantViolated, assertion, message)
}

/// [`invariant`] with a wrapped underlying cause.
#[inline]
pub fn invariant_caused(
    assertion: bool,
    message: &str,
    cause: impl Error + Send + Sync + 'static,
) -> Result<(), ContractError> {
    classify_caused(ContractKind::InvariantViolated, assertion, message, cause)
}
