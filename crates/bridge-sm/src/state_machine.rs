//! Generic state machine infrastructure for the bridge.
//!
//! This module provides the core abstractions for the state machines in the bridge, the generic
//! output type and the trait that every state machine implements.

/// Generic output from a state machine after processing an event.
///
/// `logs` are the records emitted by the transition, in emission order. They are observable by
/// external collaborators such as indexers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SMOutput<L> {
    /// The records emitted by the transition.
    pub logs: Vec<L>,
}

impl<L> Default for SMOutput<L> {
    fn default() -> Self {
        Self { logs: Vec::new() }
    }
}

impl<L> SMOutput<L> {
    /// Creates a new empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an output with the given logs.
    pub const fn with_logs(logs: Vec<L>) -> Self {
        Self { logs }
    }
}

/// Trait for all state machines in the bridge.
///
/// Processing an event happens in two phases. [`plan`](StateMachine::plan) inspects the current
/// state, runs every check and external sub-call and either fails or yields a transition.
/// [`apply`](StateMachine::apply) then commits that transition and cannot fail. Callers that
/// need to hold a lock only for the commit can drive the phases themselves; everyone else uses
/// [`process_event`](StateMachine::process_event).
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SettlementSM {
///     type Context = TxContext;
///     type Event = SettlementEvent;
///     type Transition = SettlementTransition;
///     type Log = BridgeLog;
///     type Error = SettlementError;
///
///     fn plan(&self, ctx: &TxContext, event: SettlementEvent)
///         -> Result<SettlementTransition, SettlementError>
///     {
///         // Checks and sub-calls
///     }
///
///     fn apply(&mut self, transition: SettlementTransition) -> SMOutput<BridgeLog> {
///         // Infallible update
///     }
/// }
/// ```
pub trait StateMachine {
    /// The per-call execution context.
    type Context;

    /// The type of events this state machine can process.
    type Event;

    /// A fully checked, not yet applied change to the state.
    type Transition;

    /// The type of records this state machine can emit.
    type Log;

    /// The error type returned when planning fails.
    type Error;

    /// Checks `event` against the current state and computes the transition it causes.
    ///
    /// This must not mutate the state.
    fn plan(
        &self,
        ctx: &Self::Context,
        event: Self::Event,
    ) -> Result<Self::Transition, Self::Error>;

    /// Commits a transition previously returned by [`plan`](StateMachine::plan) on the same,
    /// unchanged state.
    fn apply(&mut self, transition: Self::Transition) -> SMOutput<Self::Log>;

    /// Processes an event and returns the emitted records or an error.
    ///
    /// This is the main entry point for advancing the state machine. On error the state is
    /// exactly as it was before the call.
    fn process_event(
        &mut self,
        ctx: &Self::Context,
        event: Self::Event,
    ) -> Result<SMOutput<Self::Log>, Self::Error> {
        let transition = self.plan(ctx, event)?;

        Ok(self.apply(transition))
    }
}
