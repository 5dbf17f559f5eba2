// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Internal-integrity checks.
//!
//! An `assume` failure means *this* code is wrong, not its caller: a state
//! that should be impossible in a correct program was observed. Every check
//! fails with [`ContractKind::AssumptionViolated`].
//!
//! These are runtime checks, not `debug_assert!`s: an assumption that only
//! holds in debug builds is not an assumption worth writing down. The
//! success path is allocation-free.
//!
//! # Example
//!
//! ```
//! use covenant::{assume, ContractError};
//!
//! fn checkout(cart: &[u32], tax_rate: Option<&f64>) -> Result<u32, ContractError> {
//!     // A non-empty cart was validated at the boundary; an empty one here
//!     // means a bookkeeping bug on our side.
//!     assume::not_empty_slice(Some(cart), Some("cart emptied mid-checkout"))?;
//!     assume::not_none(tax_rate, Some("tax region never configured"))?;
//!     Ok(cart.iter().sum())
//! }
//! ```

use std::any::Any;
use std::fmt;

use crate::check;
use crate::error::{ContractError, ContractKind};

const KIND: ContractKind = ContractKind::AssumptionViolated;

/// Fails if the value is `None`.
#[inline]
pub fn not_none<T: ?Sized>(value: Option<&T>, message: Option<&str>) -> Result<(), ContractError> {
    check::not_none(KIND, value, message)
}

/// Fails if the value is not `None` (inverse of [`not_none`]).
#[inline]
pub fn none<T: ?Sized>(value: Option<&T>, message: Option<&str>) -> Result<(), ContractError> {
    check::none(KIND, value, message)
}

/// Fails if the string is absent, zero-length, or starts with `'\0'`.
///
/// The leading-NUL rule is deliberate: a string read out of a fixed-size
/// buffer can have a positive length and still be empty in every sense that
/// matters.
#[inline]
pub fn not_empty_str(value: Option<&str>, message: Option<&str>) -> Result<(), ContractError> {
    check::not_empty_str(KIND, value, message)
}

/// Fails if the sized container is absent or has no elements.
#[inline]
pub fn not_empty_slice<T>(values: Option<&[T]>, message: Option<&str>) -> Result<(), ContractError> {
    check::not_empty_slice(KIND, values, message)
}

/// Fails if the sequence is absent or yields no first element.
///
/// For sequences that cannot be counted cheaply; the check advances the
/// iterator a single step and never asks for a length.
#[inline]
pub fn not_empty_iter<I: IntoIterator>(
    values: Option<I>,
    message: Option<&str>,
) -> Result<(), ContractError> {
    check::not_empty_iter(KIND, values, message)
}

/// Fails if the value's runtime type is not `T`.
///
/// ```
/// use std::any::Any;
/// use covenant::assume;
///
/// let value: &dyn Any = &42_i32;
/// assert!(assume::is_type::<i32>(value, None).is_ok());
/// assert!(assume::is_type::<String>(value, None).is_err());
/// ```
#[inline]
pub fn is_type<T: Any>(value: &dyn Any, message: Option<&str>) -> Result<(), ContractError> {
    check::is_type::<T>(KIND, value, message)
}

/// Fails if the condition is false.
#[inline]
pub fn is_true(condition: bool, message: Option<&str>) -> Result<(), ContractError> {
    check::is_true(KIND, condition, message)
}

/// Fails if the condition is false, formatting the message from a positional
/// template: `{0}`, `{1}`, ... are substituted from `args`.
#[inline]
pub fn is_true_fmt(
    condition: bool,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), ContractError> {
    check::is_true_fmt(KIND, condition, template, args)
}

/// Fails if the condition is true (mirror of [`is_true`]).
#[inline]
pub fn is_false(condition: bool, message: Option<&str>) -> Result<(), ContractError> {
    check::is_false(KIND, condition, message)
}

/// Fails if the condition is true, with positional template formatting.
#[inline]
pub fn is_false_fmt(
    condition: bool,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), ContractError> {
    check::is_false_fmt(KIND, condition, template, args)
}

/// Produces an assumption-violation error unconditionally.
///
/// For code paths that must be impossible to reach. There is no success
/// path; callers propagate the returned error immediately:
///
/// ```
/// use covenant::{assume, ContractError};
///
/// fn pick(side: u8) -> Result<&'static str, ContractError> {
///     match side {
///         0 => Ok("left"),
///         1 => Ok("right"),
///         _ => Err(assume::not_reachable()),
///     }
/// }
///
/// assert!(pick(9).is_err());
/// ```
#[must_use]
pub fn not_reachable() -> ContractError {
    ContractError::with_message(KIND, "entered unreachable code")
}
