//! Shared check primitives behind `assume` and `verify`.
//!
//! Both public modules expose the same check shapes; only the error kind a
//! failure carries differs. Keeping one set of bodies here keeps the two
//! surfaces from drifting apart.

use std::any::Any;
use std::fmt;

use crate::error::{ContractError, ContractKind};
use crate::format;

/// The single failure primitive every check funnels through.
pub(crate) fn fail(kind: ContractKind, message: Option<&str>) -> ContractError {
    ContractError::with_optional_message(kind, message)
}

#[inline]
pub(crate) fn is_true(
    kind: ContractKind,
    condition: bool,
    message: Option<&str>,
) -> Result<(), ContractError> {
    if condition {
        Ok(())
    } else {
        Err(fail(kind, message))
    }
}

#[inline]
pub(crate) fn is_true_fmt(
    kind: ContractKind,
    condition: bool,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), ContractError> {
    if condition {
        Ok(())
    } else {
        Err(ContractError::with_message(
            kind,
            format::positional(template, args),
        ))
    }
}

#[inline]
pub(crate) fn is_false(
    kind: ContractKind,
    condition: bool,
    message: Option<&str>,
) -> Result<(), ContractError> {
    is_true(kind, !condition, message)
}

#[inline]
pub(crate) fn is_false_fmt(
    kind: ContractKind,
    condition: bool,
    template: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), ContractError> {
    is_true_fmt(kind, !condition, template, args)
}

#[inline]
pub(crate) fn not_none<T: ?Sized>(
    kind: ContractKind,
    value: Option<&T>,
    message: Option<&str>,
) -> Result<(), ContractError> {
    is_true(kind, value.is_some(), message)
}

#[inline]
pub(crate) fn none<T: ?Sized>(
    kind: ContractKind,
    value: Option<&T>,
    message: Option<&str>,
) -> Result<(), ContractError> {
    is_true(kind, value.is_none(), message)
}

pub(crate) fn not_empty_str(
    kind: ContractKind,
    value: Option<&str>,
    message: Option<&str>,
) -> Result<(), ContractError> {
    let value = match value {
        Some(value) => value,
        None => return Err(fail(kind, message)),
    };
    is_true(kind, !value.is_empty(), message)?;
    // A leading NUL counts as empty even when the length says otherwise:
    // interop leftover from fixed-size buffers.
    is_true(kind, !value.starts_with('\0'), message)
}

#[inline]
pub(crate) fn not_empty_slice<T>(
    kind: ContractKind,
    values: Option<&[T]>,
    message: Option<&str>,
) -> Result<(), ContractError> {
    match values {
        Some(values) => is_true(kind, !values.is_empty(), message),
        None => Err(fail(kind, message)),
    }
}

pub(crate) fn not_empty_iter<I: IntoIterator>(
    kind: ContractKind,
    values: Option<I>,
    message: Option<&str>,
) -> Result<(), ContractError> {
    match values {
        // Advancing one step is enough; the sequence may not know its length.
        Some(values) => is_true(kind, values.into_iter().next().is_some(), message),
        None => Err(fail(kind, message)),
    }
}

#[inline]
pub(crate) fn is_type<T: Any>(
    kind: ContractKind,
    value: &dyn Any,
    message: Option<&str>,
) -> Result<(), ContractError> {
    is_true(kind, value.is::<T>(), message)
}
