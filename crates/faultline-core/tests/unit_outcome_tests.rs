//! Unit tests for the outcome containers
//!
//! Covers the fault-only and value-bearing containers through their public
//! accessors, assertions and marker conversions

use faultline_core::{
    fail, succeed, succeed_with, FaultContainer, Outcome, UnexpectedFailure, UnexpectedSuccess,
    ValueContainer, ValueOutcome,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Fault {
    code: u16,
    reason: String,
}

impl Fault {
    fn new(code: u16, reason: &str) -> Self {
        Self {
            code,
            reason: reason.to_string(),
        }
    }
}

fn faults() -> Vec<Fault> {
    vec![
        Fault::default(),
        Fault::new(400, "bad request"),
        Fault::new(503, ""),
    ]
}

// =============================================================================
// Fault-only Outcome Tests
// =============================================================================

#[test]
fn test_outcome_fail_exposes_fault() {
    for fault in faults() {
        let outcome: Outcome<Fault> = Outcome::fail(fault.clone());

        assert!(!outcome.is_success());
        assert!(outcome.is_failure());
        assert_eq!(outcome.try_get_fault(), Some(&fault));
        assert_eq!(outcome.get_fault_or_default(), fault);
        assert_eq!(outcome.get_fault_or_throw(), Ok(&fault));
    }
}

#[test]
fn test_outcome_ensure_succeeded() {
    for fault in faults() {
        let outcome: Outcome<Fault> = Outcome::fail(fault.clone());

        let error = outcome.ensure_succeeded().unwrap_err();
        assert_eq!(error.fault(), &fault);
        assert_eq!(error.to_string(), "result was a failure");
    }

    let outcome: Outcome<Fault> = Outcome::succeed();
    assert_eq!(outcome.ensure_succeeded(), Ok(()));
}

#[test]
fn test_outcome_success_has_no_fault() {
    let outcome: Outcome<Fault> = Outcome::succeed();

    assert!(outcome.is_success());
    assert_eq!(outcome.try_get_fault(), None);
    assert_eq!(outcome.get_fault_or_default(), Fault::default());
    assert_eq!(outcome.get_fault_or_throw(), Err(UnexpectedSuccess::new(())));
    assert_eq!(outcome.ensure_failure(), Err(UnexpectedSuccess::new(())));
}

#[test]
fn test_outcome_ensure_failure_on_failure() {
    let outcome: Outcome<Fault> = Outcome::fail(Fault::new(1, "x"));
    assert_eq!(outcome.ensure_failure(), Ok(()));
}

// =============================================================================
// ValueOutcome Tests
// =============================================================================

#[test]
fn test_value_outcome_succeed_exposes_value() {
    for value in [0i64, -7, 42, i64::MAX] {
        let outcome: ValueOutcome<Fault, i64> = ValueOutcome::succeed(value);

        assert!(outcome.is_success());
        assert_eq!(outcome.try_get_value_or_fault(), Ok(&value));
        assert_eq!(outcome.try_get_value(), Some(&value));
        assert_eq!(outcome.get_value_or_default(), value);
        assert_eq!(outcome.get_value_or_throw(), Ok(&value));
        assert_eq!(outcome.try_get_fault(), None);
    }
}

#[test]
fn test_value_outcome_unexpected_success_carries_value() {
    let outcome: ValueOutcome<Fault, String> = ValueOutcome::succeed("produced".to_string());

    let error = outcome.get_fault_or_throw().unwrap_err();
    assert_eq!(error.value(), "produced");

    let error = outcome.ensure_failure().unwrap_err();
    assert_eq!(error.into_value(), "produced");
}

#[test]
fn test_value_outcome_unexpected_failure_carries_fault() {
    for fault in faults() {
        let outcome: ValueOutcome<Fault, String> = ValueOutcome::fail(fault.clone());

        let error = outcome.get_value_or_throw().unwrap_err();
        assert_eq!(error, UnexpectedFailure::new(fault.clone()));
        assert_eq!(outcome.ensure_failure(), Ok(()));
        assert_eq!(outcome.get_value_or_default(), "");
    }
}

#[test]
fn test_value_outcome_fail_demultiplexes() {
    let outcome: ValueOutcome<String, i32> = ValueOutcome::fail("bad".to_string());

    let (value, fault) = match outcome.try_get_value_or_fault() {
        Ok(value) => (Some(*value), None),
        Err(fault) => (None, Some(fault.as_str())),
    };
    assert_eq!(value, None);
    assert_eq!(fault, Some("bad"));
    assert_eq!(outcome.get_value_or_default(), 0);
}

// =============================================================================
// Idempotence Tests
// =============================================================================

#[test]
fn test_repeated_access_is_stable() {
    let ok: ValueOutcome<Fault, u8> = ValueOutcome::succeed(9);
    let err: ValueOutcome<Fault, u8> = ValueOutcome::fail(Fault::new(2, "two"));

    for _ in 0..3 {
        assert_eq!(ok.get_value_or_throw(), Ok(&9));
        assert_eq!(ok.ensure_failure(), Err(UnexpectedSuccess::new(9)));
        assert_eq!(err.get_fault_or_throw(), Ok(&Fault::new(2, "two")));
        assert_eq!(
            err.ensure_succeeded(),
            Err(UnexpectedFailure::new(Fault::new(2, "two")))
        );
    }
    assert_eq!(ok, ValueOutcome::succeed(9));
}

// =============================================================================
// Marker Conversion Tests
// =============================================================================

fn load(id: u32) -> ValueOutcome<Fault, String> {
    if id == 0 {
        return fail(Fault::new(404, "missing")).into();
    }
    succeed_with(format!("record-{}", id)).into()
}

fn check(id: u32) -> Outcome<Fault> {
    if id == 0 {
        return fail(Fault::new(404, "missing")).into();
    }
    succeed().into()
}

#[test]
fn test_marker_round_trip_matches_factories() {
    assert_eq!(load(3), ValueOutcome::succeed("record-3".to_string()));
    assert_eq!(load(0), ValueOutcome::fail(Fault::new(404, "missing")));
    assert_eq!(check(3), Outcome::succeed());
    assert_eq!(check(0), Outcome::fail(Fault::new(404, "missing")));
}

#[test]
fn test_std_result_round_trip() {
    let outcome: ValueOutcome<Fault, u8> = Ok::<u8, Fault>(5).into();
    let back: Result<u8, Fault> = outcome.into();
    assert_eq!(back, Ok(5));

    let outcome: Outcome<Fault> = Err::<(), Fault>(Fault::new(1, "e")).into();
    let back: Result<(), Fault> = outcome.into();
    assert_eq!(back, Err(Fault::new(1, "e")));
}

// =============================================================================
// Error Propagation Tests
// =============================================================================

fn first_record(ids: &[u32]) -> anyhow::Result<String> {
    let id = ids.first().copied().unwrap_or_default();
    let record = load(id).into_value_or_throw()?;
    Ok(record)
}

#[test]
fn test_errors_propagate_with_question_mark() -> anyhow::Result<()> {
    assert_eq!(first_record(&[7])?, "record-7");

    let error = first_record(&[]).unwrap_err();
    let failure = error
        .downcast_ref::<UnexpectedFailure<Fault>>()
        .expect("Expected UnexpectedFailure");
    assert_eq!(failure.fault().code, 404);
    Ok(())
}

#[test]
fn test_custom_error_type() {
    #[derive(Debug, PartialEq)]
    enum LookupError {
        NotFound(u16),
    }

    let outcome = load(0);
    assert_eq!(
        outcome.get_value_or_throw_else(|fault| LookupError::NotFound(fault.code)),
        Err(LookupError::NotFound(404))
    );
}
