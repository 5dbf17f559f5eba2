//! Design-by-Contract runtime checks with a closed violation taxonomy.
//!
//! Four sibling modules of free functions let calling code declare
//! preconditions, postconditions, and invariants as runtime-checked
//! assertions. A violated check fails with a [`ContractError`] carrying a
//! [`ContractKind`] that tells the caller exactly which class of contract
//! broke — and therefore who is at fault.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐  ┌────────────┐     ┌────────────┐  ┌────────────┐
//! │  assume.rs │  │ verify.rs  │     │ require.rs │  │contract.rs │
//! │ (internal  │  │ (result /  │     │ (argument  │  │ (pre/post/ │
//! │ integrity) │  │ post-state)│     │ validation)│  │ invariant) │
//! └─────┬──────┘  └─────┬──────┘     └─────┬──────┘  └─────┬──────┘
//!       └───────┬───────┘                  │               │
//!               ▼                          │               │
//!        ┌────────────┐                    │               │
//!        │  check.rs  │                    │               │
//!        │  (shared   │                    │               │
//!        │ primitives)│                    │               │
//!        └─────┬──────┘                    │               │
//!              └────────────┬──────────────┴───────────────┘
//!                           ▼
//!                    ┌────────────┐   ┌────────────┐
//!                    │  error.rs  │   │ format.rs  │
//!                    │(ContractErr│   │(positional │
//!                    │   + kinds) │   │ templates) │
//!                    └────────────┘   └────────────┘
//! ```
//!
//! # Which module, when
//!
//! | Module     | A failure means...                   | Error kind(s)            |
//! |------------|--------------------------------------|--------------------------|
//! | `require`  | the caller passed bad arguments      | `Argument*`              |
//! | `assume`   | this code has a bug                  | `AssumptionViolated`     |
//! | `verify`   | an operation produced a bad result   | `OperationInvalid`       |
//! | `contract` | a classified DbC clause was violated | `Precondition/Postcondition/InvariantViolated` |
//!
//! # Usage
//!
//! Validate inputs first, then internal state, then outputs, joining each
//! check with `?` so the first violation propagates:
//!
//! ```
//! use covenant::{assume, contract, require, verify, ContractError};
//!
//! fn place_order(customer: Option<&str>, quantity: i64) -> Result<u64, ContractError> {
//!     // Caller-facing preconditions.
//!     require::not_empty_str(customer, "customer")?;
//!     require::positive(quantity, "quantity")?;
//!
//!     // Internal state this operation depends on.
//!     let next_order_id: u64 = 42;
//!     assume::is_true(next_order_id > 0, Some("order id counter wrapped"))?;
//!
//!     // Guarantees on the way out.
//!     let order_id = next_order_id;
//!     contract::postcondition(order_id > 0, Some("order id must be assigned"))?;
//!     Ok(order_id)
//! }
//!
//! assert_eq!(place_order(Some("ada"), 3).unwrap(), 42);
//! assert!(place_order(None, 3).unwrap_err().is_argument_violation());
//! ```
//!
//! Every check is pure, synchronous, and stateless; the success path
//! allocates nothing. Nothing here catches or retries — a contract violation
//! is non-recoverable at this layer, and what to do next is the caller's
//! decision.

// Module declarations
pub mod assume;
mod check;
pub mod contract;
mod error;
mod format;
pub mod require;
pub mod verify;

// Re-exports for public API
pub use error::{ContractError, ContractKind};
