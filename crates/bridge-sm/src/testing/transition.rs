//! Value-based transition testing helpers.
//!
//! These helpers make it easy to write declarative tests for individual transitions: a
//! successful one must emit exactly the expected records, a failing one must produce the
//! expected error and leave the state bit-for-bit unchanged.

use std::fmt::Debug;

use crate::state_machine::StateMachine;

/// Describes a valid transition for value-based testing.
#[derive(Debug)]
pub(crate) struct Transition<C, E, L> {
    /// The context the event is processed in
    pub(crate) ctx: C,
    /// The event that triggers the transition
    pub(crate) event: E,
    /// The expected records emitted during the transition
    pub(crate) expected_logs: Vec<L>,
}

/// Test a single transition with concrete values.
///
/// This helper function:
/// 1. Processes the event
/// 2. Asserts the transition succeeded
/// 3. Verifies the emitted records match expectations
pub(crate) fn test_transition<SM>(
    sm: &mut SM,
    transition: Transition<SM::Context, SM::Event, SM::Log>,
) where
    SM: StateMachine,
    SM::Log: PartialEq + Debug,
    SM::Error: Debug,
{
    let result = sm.process_event(&transition.ctx, transition.event);

    let output = match result {
        Ok(output) => output,
        Err(err) => panic!("Expected successful transition, got error: {err:?}"),
    };

    assert_eq!(output.logs, transition.expected_logs, "Logs mismatch");
}

/// Describes an invalid event that should produce an error.
#[derive(Debug)]
pub(crate) struct InvalidTransition<C, E, Err> {
    /// The context the event is processed in
    pub(crate) ctx: C,
    /// The event that should be rejected
    pub(crate) event: E,
    /// A function to verify the error type
    pub(crate) expected_error: fn(&Err) -> bool,
}

/// Test that an invalid transition produces the expected error and no state change.
pub(crate) fn test_invalid_transition<SM, S, GetStateFn>(
    sm: &mut SM,
    get_state: GetStateFn,
    invalid: InvalidTransition<SM::Context, SM::Event, SM::Error>,
) where
    SM: StateMachine,
    SM::Log: Debug,
    SM::Error: Debug,
    S: PartialEq + Debug + Clone,
    GetStateFn: Fn(&SM) -> &S,
{
    let before = get_state(sm).clone();

    let result = sm.process_event(&invalid.ctx, invalid.event);

    let err = match result {
        Ok(output) => panic!("Expected error, but transition succeeded with {output:?}"),
        Err(err) => err,
    };

    assert!(
        (invalid.expected_error)(&err),
        "Error type mismatch. Got: {err:?}"
    );

    assert_eq!(
        get_state(sm),
        &before,
        "State must not change on a failed transition"
    );
}
