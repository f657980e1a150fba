//! Property-based testing macros for state machines.

/// Property: A failed event leaves the state untouched.
///
/// # Arguments
/// * `$name` - The name of the generated test
/// * `$create_fn` - Function to create a state machine: `Fn() -> SM`
/// * `$get_state_fn` - Function to get the state from the SM: `Fn(&SM) -> &State`
/// * `$ctx_strategy` - Proptest strategy for generating call contexts
/// * `$event_strategy` - Proptest strategy for generating events
#[macro_export]
macro_rules! prop_no_partial_application {
    ($name:ident, $create_fn:expr, $get_state_fn:expr, $ctx_strategy:expr, $event_strategy:expr) => {
        proptest::proptest! {
            #[test]
            fn $name(
                ctx in $ctx_strategy,
                event in $event_strategy,
            ) {
                use $crate::state_machine::StateMachine;

                let mut sm = $create_fn();
                let before = $get_state_fn(&sm).clone();

                if sm.process_event(&ctx, event).is_err() {
                    proptest::prop_assert_eq!($get_state_fn(&sm), &before);
                }
            }
        }
    };
}

/// Property: State machines should be deterministic.
///
/// Given the same initial state, context and event, two state machines must produce the same
/// result and end up in the same state.
#[macro_export]
macro_rules! prop_deterministic {
    ($name:ident, $create_fn:expr, $get_state_fn:expr, $ctx_strategy:expr, $event_strategy:expr) => {
        proptest::proptest! {
            #[test]
            fn $name(
                ctx in $ctx_strategy,
                event in $event_strategy,
            ) {
                use $crate::state_machine::StateMachine;

                let mut sm1 = $create_fn();
                let mut sm2 = $create_fn();

                let result1 = sm1.process_event(&ctx, event.clone());
                let result2 = sm2.process_event(&ctx, event);

                match (result1, result2) {
                    (Ok(out1), Ok(out2)) => {
                        proptest::prop_assert_eq!(out1.logs, out2.logs);
                    }
                    (Err(err1), Err(err2)) => {
                        proptest::prop_assert_eq!(err1, err2);
                    }
                    _ => {
                        proptest::prop_assert!(false, "Inconsistent results: one succeeded, one failed");
                    }
                }
                proptest::prop_assert_eq!($get_state_fn(&sm1), $get_state_fn(&sm2));
            }
        }
    };
}
