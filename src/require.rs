// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Argument-validation checks for public API boundaries.
//!
//! A `require` failure means the *caller* misused the API. Every error is
//! tagged with the name of the offending argument, retrievable through
//! [`ContractError::argument_name`], and checks fail fast: the first
//! violated condition produces the error and nothing else runs.
//!
//! # Example
//!
//! ```
//! use covenant::{require, ContractError};
//!
//! fn open_account(owner: Option<&str>, initial_deposit: i64) -> Result<(), ContractError> {
//!     require::not_empty_str(owner, "owner")?;
//!     require::nonnegative(initial_deposit, "initial_deposit")?;
//!     Ok(())
//! }
//!
//! let error = open_account(Some("ada"), -5).unwrap_err();
//! assert_eq!(error.argument_name(), Some("initial_deposit"));
//! ```

use std::fmt;

use uuid::Uuid;

use crate::error::{ContractError, ContractKind};

/// Fails with [`ContractKind::ArgumentNull`] if the argument is `None`.
#[inline]
pub fn not_none<T: ?Sized>(argument: Option<&T>, argument_name: &str) -> Result<(), ContractError> {
    if argument.is_some() {
        Ok(())
    } else {
        Err(ContractError::argument(
            ContractKind::ArgumentNull,
            argument_name,
        ))
    }
}

/// Fails with [`ContractKind::ArgumentNull`] if the string argument is
/// absent or zero-length.
#[inline]
pub fn not_empty_str(argument: Option<&str>, argument_name: &str) -> Result<(), ContractError> {
    match argument {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(ContractError::argument(
            ContractKind::ArgumentNull,
            argument_name,
        )),
    }
}

/// Fails with [`ContractKind::ArgumentNull`] if the sized container is
/// absent or has no elements.
#[inline]
pub fn not_empty_slice<T>(
    argument: Option<&[T]>,
    argument_name: &str,
) -> Result<(), ContractError> {
    match argument {
        Some(values) if !values.is_empty() => Ok(()),
        _ => Err(ContractError::argument(
            ContractKind::ArgumentNull,
            argument_name,
        )),
    }
}

/// Fails if the string argument is absent, empty, or shorter than
/// `minimum_length` characters.
///
/// The absent/empty case is [`ContractKind::ArgumentNull`]; the
/// present-but-short case is [`ContractKind::ArgumentTooShort`]. Length is
/// counted in `char`s, not bytes.
pub fn minimum_length(
    argument: Option<&str>,
    minimum_length: usize,
    argument_name: &str,
) -> Result<(), ContractError> {
    let value = match argument {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(ContractError::argument(
                ContractKind::ArgumentNull,
                argument_name,
            ))
        }
    };
    let length = value.chars().count();
    if length < minimum_length {
        return Err(ContractError::argument_with_message(
            ContractKind::ArgumentTooShort,
            argument_name,
            format!(
                "must be at least {} characters long, but was {}",
                minimum_length, length
            ),
        ));
    }
    Ok(())
}

/// Fails with [`ContractKind::ArgumentOutOfRange`] if the number is zero or
/// negative. The `Into<i64>` bound accepts every signed width up to 64 bits.
#[inline]
pub fn positive<N: Into<i64>>(number: N, argument_name: &str) -> Result<(), ContractError> {
    let number = number.into();
    if number > 0 {
        Ok(())
    } else {
        Err(ContractError::argument_with_message(
            ContractKind::ArgumentOutOfRange,
            argument_name,
            format!("must be positive, but was {}", number),
        ))
    }
}

/// Fails with [`ContractKind::ArgumentOutOfRange`] if the number is
/// negative.
#[inline]
pub fn nonnegative<N: Into<i64>>(number: N, argument_name: &str) -> Result<(), ContractError> {
    let number = number.into();
    if number >= 0 {
        Ok(())
    } else {
        Err(ContractError::argument_with_message(
            ContractKind::ArgumentOutOfRange,
            argument_name,
            format!("must be non-negative, but was {}", number),
        ))
    }
}

/// Fails with [`ContractKind::ArgumentInvalid`] if the identifier is the
/// all-zero nil UUID.
#[inline]
pub fn not_nil_uuid(id: Uuid, argument_name: &str) -> Result<(), ContractError> {
    if id.is_nil() {
        Err(ContractError::argument_with_message(
            ContractKind::ArgumentInvalid,
            argument_name,
            "must not be the nil UUID",
        ))
    } else {
        Ok(())
    }
}

/// Fails with [`ContractKind::ArgumentInvalid`] if the values differ; the
/// message reports both. Covers integers, booleans, and anything else that
/// is `PartialEq + Display`.
#[inline]
pub fn equal<T>(expected: T, actual: T, argument_name: &str) -> Result<(), ContractError>
where
    T: PartialEq + fmt::Display,
{
    if expected == actual {
        Ok(())
    } else {
        Err(ContractError::argument_with_message(
            ContractKind::ArgumentInvalid,
            argument_name,
            format!("expected value: {}, actual value: {}", expected, actual),
        ))
    }
}
