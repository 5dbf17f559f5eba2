// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result and post-state validation.
//!
//! Same check shapes as [`assume`](crate::assume), and the same bodies — both
//! delegate to one shared set of primitives — but a `verify` failure carries
//! [`ContractKind::OperationInvalid`], so "this operation produced a bad
//! result" stays distinguishable from "an internal assumption broke".
//! Conventionally called after an operation, on its outputs.

use std::any::Any;
use std::fmt;

use crate::check;
use crate::error::{ContractError, ContractKind};

const KIND: ContractKind = ContractKind::OperationInvalid;

/// Fails if the value is `None`.
#[inline]
pub fn not_none<T: ?Sized>(value: Option<&T>, message: Option<&str>) -> Result<(), ContractError> {
    check::not_none(KIND, value, message)
}

/// Fails if the value is not `None`.
#[inline]
pub fn none<T: ?Sized>(value: Option<&T>, message: Option<&str>) -> Result<(), ContractError> {
    check::none(KIND, value, message)
}

/// Fails if the string is absent, zero-length, or starts with `'\0'`.
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
#[inline]
pub fn not_empty_iter<I: IntoIterator>(
    values: Option<I>,
    message: Option<&str>,
) -> Result<(), ContractError> {
    check::not_empty_iter(KIND, values, message)
}

/// Fails if the value's runtime type is not `T`.
#[inline]
pub fn is_type<T: Any>(value: &dyn Any, message: Option<&str>) -> Result<(), ContractError> {
    check::is_type::<T>(KIND, value, message)
}

/// Fails if the condition is false.
#[inline]
pub fn is_true(condition: bool, message: Option<&str>) -> Result<(), ContractError> {
    check::is_true(KIND, condition, message)
}

/// Fails if the condition is false, with positional template formatting.
#[inline]
pub fn is_true_fmt(
    condition: bool,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), ContractError> {
    check::is_true_fmt(KIND, condition, template, args)
}

/// Fails if the condition is true.
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

/// Produces an operation-invalid error unconditionally, with the message
/// formatted from a positional template.
///
/// The explicit escape hatch for code paths that should be provably
/// unreachable after an operation. There is no success path:
///
/// ```
/// use covenant::{verify, ContractError};
///
/// fn settle(balance: i64) -> Result<i64, ContractError> {
///     if balance < 0 {
///         return Err(verify::fail_operation(
///             "settlement left balance at {0}",
///             &[&balance],
///         ));
///     }
///     Ok(balance)
/// }
///
/// assert!(settle(-20).is_err());
/// ```
#[must_use]
pub fn fail_operation(template: &str, args: &[&dyn fmt::Display]) -> ContractError {
    ContractError::with_message(KIND, crate::format::positional(template, args))
}
