// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The contract-violation error type and its closed kind taxonomy.
//!
//! Every failed check in this crate produces exactly one [`ContractError`].
//! The error is created at the moment of violation, never mutated afterwards,
//! and carries everything a caller needs to decide what to do:
//!
//! | Field      | Meaning                                               |
//! |------------|-------------------------------------------------------|
//! | `kind`     | which class of contract was violated ([`ContractKind`])|
//! | `message`  | optional human-readable diagnostic                    |
//! | `argument` | which parameter failed (set by `require` checks)      |
//! | `cause`    | optional wrapped underlying error (set by `contract`) |
//!
//! Nothing in this crate catches or recovers from a `ContractError`. The
//! caller decides whether to log it, translate it, or let it terminate the
//! enclosing operation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// The closed taxonomy of contract violations.
///
/// Matching on the kind tells a caller *who* is at fault: an `Assumption`
/// or `Operation` kind points at a defect in the checked code itself, the
/// `Argument*` kinds point at the caller, and the three DbC kinds classify
/// the violated clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    /// An internal invariant was broken; a defect in this code.
    AssumptionViolated,
    /// A required argument was absent or empty.
    ArgumentNull,
    /// A numeric argument fell outside its allowed range.
    ArgumentOutOfRange,
    /// A string argument was shorter than a required minimum.
    ArgumentTooShort,
    /// An argument failed a value-equality or identity check.
    ArgumentInvalid,
    /// A post-operation state or result check failed.
    OperationInvalid,
    /// An operation's entry requirement did not hold.
    PreconditionViolated,
    /// An operation's exit guarantee did not hold.
    PostconditionViolated,
    /// A checkpoint invariant did not hold.
    InvariantViolated,
}

impl ContractKind {
    /// Stable snake_case name, identical to the serde wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            ContractKind::AssumptionViolated => "assumption_violated",
            ContractKind::ArgumentNull => "argument_null",
            ContractKind::ArgumentOutOfRange => "argument_out_of_range",
            ContractKind::ArgumentTooShort => "argument_too_short",
            ContractKind::ArgumentInvalid => "argument_invalid",
            ContractKind::OperationInvalid => "operation_invalid",
            ContractKind::PreconditionViolated => "precondition_violated",
            ContractKind::PostconditionViolated => "postcondition_violated",
            ContractKind::InvariantViolated => "invariant_violated",
        }
    }

    /// Default diagnostic used when a check supplied no message.
    ///
    /// Never empty: some callers surface the rendered error directly and
    /// rely on a non-empty diagnostic.
    pub fn description(self) -> &'static str {
        match self {
            ContractKind::AssumptionViolated => "assumption violated",
            ContractKind::ArgumentNull => "required argument was absent or empty",
            ContractKind::ArgumentOutOfRange => "argument out of range",
            ContractKind::ArgumentTooShort => "argument shorter than required",
            ContractKind::ArgumentInvalid => "argument invalid",
            ContractKind::OperationInvalid => "operation left an invalid result",
            ContractKind::PreconditionViolated => "precondition violated",
            ContractKind::PostconditionViolated => "postcondition violated",
            ContractKind::InvariantViolated => "invariant violated",
        }
    }

    /// True for the kinds that blame the caller rather than the checked code.
    pub fn is_argument_kind(self) -> bool {
        matches!(
            self,
            ContractKind::ArgumentNull
                | ContractKind::ArgumentOutOfRange
                | ContractKind::ArgumentTooShort
                | ContractKind::ArgumentInvalid
        )
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// A single contract violation.
///
/// Constructed only by the check functions in this crate; immutable once
/// built. `Send + Sync`, so a violation can cross thread boundaries.
#[derive(Debug)]
pub struct ContractError {
    kind: ContractKind,
    message: Option<String>,
    argument: Option<String>,
    cause: Option<Cause>,
}

impl ContractError {
    pub(crate) fn new(kind: ContractKind) -> Self {
        ContractError {
            kind,
            message: None,
            argument: None,
            cause: None,
        }
    }

    pub(crate) fn with_message(kind: ContractKind, message: impl Into<String>) -> Self {
        ContractError {
            kind,
            message: Some(message.into()),
            argument: None,
            cause: None,
        }
    }

    pub(crate) fn with_optional_message(kind: ContractKind, message: Option<&str>) -> Self {
        match message {
            Some(message) => ContractError::with_message(kind, message),
            None => ContractError::new(kind),
        }
    }

    /// Violation tagged with the name of the offending argument.
    pub(crate) fn argument(kind: ContractKind, argument_name: &str) -> Self {
        ContractError {
            kind,
            message: None,
            argument: Some(argument_name.to_string()),
            cause: None,
        }
    }

    /// Violation tagged with the offending argument and an explanation.
    pub(crate) fn argument_with_message(
        kind: ContractKind,
        argument_name: &str,
        message: impl Into<String>,
    ) -> Self {
        ContractError {
            kind,
            message: Some(message.into()),
            argument: Some(argument_name.to_string()),
            cause: None,
        }
    }

    pub(crate) fn caused_by(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The violated contract's kind.
    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    /// The message supplied at the check site, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The name of the argument that failed validation, if this violation
    /// came from a `require` check.
    pub fn argument_name(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// The wrapped underlying error, if one was attached.
    ///
    /// Also reachable through [`Error::source`].
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
    }

    /// True when the violation blames the caller (any `Argument*` kind).
    pub fn is_argument_violation(&self) -> bool {
        self.kind.is_argument_kind()
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message)?,
            None => f.write_str(self.kind.description())?,
        }
        if let Some(argument) = &self.argument {
            write!(f, " (argument `{}`)", argument)?;
        }
        Ok(())
    }
}

impl Error for ContractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause()
    }
}
