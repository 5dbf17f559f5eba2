//! Integration tests for the contract-checking crate.
//!
//! These tests exercise the public API end to end: the four check modules
//! together, the violation taxonomy as seen by a caller, and the rendered
//! diagnostics.

use covenant::{assume, contract, require, verify, ContractError, ContractKind};
use std::error::Error;

// ============================================================================
// THE INTEGRATION PATTERN: require -> assume -> verify, joined with `?`
// ============================================================================

/// A miniature order-placement operation wired the way a consumer would
/// wire it: caller-facing preconditions first, then internal-state checks,
/// then exit guarantees.
fn place_order(
    customer: Option<&str>,
    quantity: i64,
    next_order_id: u64,
) -> Result<u64, ContractError> {
    require::not_empty_str(customer, "customer")?;
    require::positive(quantity, "quantity")?;

    assume::is_true(next_order_id > 0, Some("order id counter wrapped"))?;
    contract::invariant(next_order_id < u64::MAX, Some("order id space exhausted"))?;

    let order_id = next_order_id;
    verify::is_true_fmt(order_id != 0, "order {0} was not assigned", &[&order_id])?;
    contract::postcondition(order_id == next_order_id, None)?;
    Ok(order_id)
}

#[test]
fn happy_path_returns_the_result_untouched() {
    assert_eq!(place_order(Some("ada"), 3, 42).unwrap(), 42);
}

#[test]
fn first_violated_check_wins() {
    // Both customer and quantity are bad; the customer check runs first.
    let error = place_order(None, 0, 42).unwrap_err();
    assert_eq!(error.kind(), ContractKind::ArgumentNull);
    assert_eq!(error.argument_name(), Some("customer"));
}

#[test]
fn caller_misuse_and_internal_defects_are_distinguishable() {
    let caller_fault = place_order(Some("ada"), -1, 42).unwrap_err();
    assert!(caller_fault.is_argument_violation());

    let our_fault = place_order(Some("ada"), 3, 0).unwrap_err();
    assert!(!our_fault.is_argument_violation());
    assert_eq!(our_fault.kind(), ContractKind::AssumptionViolated);
}

// ============================================================================
// TAXONOMY: every module fails with its own kind
// ============================================================================

#[test]
fn each_module_owns_its_kinds() {
    assert_eq!(
        assume::is_true(false, None).unwrap_err().kind(),
        ContractKind::AssumptionViolated
    );
    assert_eq!(
        verify::is_true(false, None).unwrap_err().kind(),
        ContractKind::OperationInvalid
    );
    assert_eq!(
        require::not_none::<str>(None, "s").unwrap_err().kind(),
        ContractKind::ArgumentNull
    );
    assert_eq!(
        require::positive(0, "n").unwrap_err().kind(),
        ContractKind::ArgumentOutOfRange
    );
    assert_eq!(
        require::equal(1, 2, "n").unwrap_err().kind(),
        ContractKind::ArgumentInvalid
    );
    assert_eq!(
        contract::precondition(false, None).unwrap_err().kind(),
        ContractKind::PreconditionViolated
    );
    assert_eq!(
        contract::postcondition(false, None).unwrap_err().kind(),
        ContractKind::PostconditionViolated
    );
    assert_eq!(
        contract::invariant(false, None).unwrap_err().kind(),
        ContractKind::InvariantViolated
    );
}

#[test]
fn assume_and_verify_share_shapes_but_not_kinds() {
    // Same message, same condition, same underlying check bodies.
    let assumption = assume::not_empty_str(Some(""), Some("blank id")).unwrap_err();
    let operation = verify::not_empty_str(Some(""), Some("blank id")).unwrap_err();
    assert_eq!(assumption.message(), operation.message());
    assert_ne!(assumption.kind(), operation.kind());
}

// ============================================================================
// DISPLAY RENDERING
// ============================================================================

#[test]
fn supplied_message_renders_verbatim() {
    let error = contract::precondition(false, Some("need X")).unwrap_err();
    assert_eq!(error.to_string(), "need X");
}

#[test]
fn absent_message_renders_a_nonempty_default() {
    for error in [
        assume::is_true(false, None).unwrap_err(),
        verify::is_false(true, None).unwrap_err(),
        contract::invariant(false, None).unwrap_err(),
        require::not_none::<str>(None, "n").unwrap_err(),
    ] {
        assert!(!error.to_string().is_empty());
    }
}

#[test]
fn require_failures_name_the_argument_in_the_rendering() {
    let error = require::nonnegative(-3, "initial_deposit").unwrap_err();
    let rendered = error.to_string();
    assert!(rendered.contains("initial_deposit"), "got: {rendered}");
    assert!(rendered.contains("-3"), "got: {rendered}");
}

#[test]
fn template_arguments_substitute_positionally() {
    let error = assume::is_true_fmt(false, "expected {0} got {1}", &[&5, &7]).unwrap_err();
    assert_eq!(error.to_string(), "expected 5 got 7");

    let error = verify::fail_operation("wrote {0}/{1} records", &[&3, &10]);
    assert_eq!(error.to_string(), "wrote 3/10 records");
}

// ============================================================================
// CAUSE CHAINS
// ============================================================================

#[test]
fn wrapped_cause_is_retrievable_and_downcastable() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "backend timed out");
    let error = contract::precondition_caused(false, "inventory lookup failed", io).unwrap_err();

    assert_eq!(error.kind(), ContractKind::PreconditionViolated);
    assert_eq!(error.message(), Some("inventory lookup failed"));

    // Through the crate accessor and through the std trait.
    assert_eq!(error.cause().unwrap().to_string(), "backend timed out");
    let source = error.source().unwrap();
    assert!(source.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn contract_errors_nest_as_causes_of_other_contract_errors() {
    let inner = require::positive(0, "quantity").unwrap_err();
    let outer = contract::invariant_caused(false, "order book corrupt", inner).unwrap_err();

    let cause = outer.cause().unwrap();
    let inner = cause.downcast_ref::<ContractError>().unwrap();
    assert_eq!(inner.kind(), ContractKind::ArgumentOutOfRange);
    assert_eq!(inner.argument_name(), Some("quantity"));
}

#[test]
fn violations_cross_thread_boundaries() {
    let handle = std::thread::spawn(|| require::positive(-1, "n").unwrap_err());
    let error = handle.join().unwrap();
    assert_eq!(error.kind(), ContractKind::ArgumentOutOfRange);
}

// ============================================================================
// STRUCTURED DIAGNOSTICS: the kind's wire form
// ============================================================================

#[test]
fn kind_serializes_to_stable_snake_case() {
    let pairs = [
        (ContractKind::AssumptionViolated, "\"assumption_violated\""),
        (ContractKind::ArgumentNull, "\"argument_null\""),
        (ContractKind::ArgumentOutOfRange, "\"argument_out_of_range\""),
        (ContractKind::ArgumentTooShort, "\"argument_too_short\""),
        (ContractKind::ArgumentInvalid, "\"argument_invalid\""),
        (ContractKind::OperationInvalid, "\"operation_invalid\""),
        (ContractKind::PreconditionViolated, "\"precondition_violated\""),
        (
            ContractKind::PostconditionViolated,
            "\"postcondition_violated\"",
        ),
        (ContractKind::InvariantViolated, "\"invariant_violated\""),
    ];
    for (kind, wire) in pairs {
        assert_eq!(serde_json::to_string(&kind).unwrap(), wire);
        let round: ContractKind = serde_json::from_str(wire).unwrap();
        assert_eq!(round, kind);
    }
}

#[test]
fn wire_form_matches_as_str() {
    for kind in [
        ContractKind::AssumptionViolated,
        ContractKind::ArgumentNull,
        ContractKind::ArgumentOutOfRange,
        ContractKind::ArgumentTooShort,
        ContractKind::ArgumentInvalid,
        ContractKind::OperationInvalid,
        ContractKind::PreconditionViolated,
        ContractKind::PostconditionViolated,
        ContractKind::InvariantViolated,
    ] {
        let wire = serde_json::to_string(&kind).unwrap();
        assert_eq!(wire, format!("\"{}\"", kind.as_str()));
    }
}

// ============================================================================
// SENTINEL AND IDENTITY EDGE CASES
// ============================================================================

#[test]
fn leading_nul_counts_as_empty_despite_positive_length() {
    let value = "\0abc";
    assert_eq!(value.len(), 4);
    assert!(assume::not_empty_str(Some(value), None).is_err());
    assert!(verify::not_empty_str(Some(value), None).is_err());
}

#[test]
fn uncountable_sequences_are_probed_one_step() {
    // An unbounded iterator: any attempt to count would never return.
    let endless = std::iter::successors(Some(0_u64), |n| Some(n + 1));
    assert!(assume::not_empty_iter(Some(endless), None).is_ok());
}

#[test]
fn nil_uuid_is_rejected_as_an_identity() {
    use uuid::Uuid;
    assert!(require::not_nil_uuid(Uuid::from_u128(7), "order_id").is_ok());
    let error = require::not_nil_uuid(Uuid::nil(), "order_id").unwrap_err();
    assert_eq!(error.kind(), ContractKind::ArgumentInvalid);
}
