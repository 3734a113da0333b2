use crate::ports::WorkflowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Idle,
    Building,
    Submitting,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationAction {
    Start,
    Dispatch,
    Settle,
    Fail,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: InvocationState,
    pub to: InvocationState,
    pub reason: &'static str,
}

pub fn invocation_transition(
    state: InvocationState,
    action: InvocationAction,
) -> Result<(InvocationState, StateTransition), WorkflowError> {
    use InvocationAction as A;
    use InvocationState as S;

    let (to, reason) = match (state, action) {
        (S::Idle, A::Start) => (S::Building, "invocation started"),
        (S::Building, A::Dispatch) => (S::Submitting, "request dispatched"),
        // Building can fail without ever reaching the transport.
        (S::Building, A::Fail) => (S::Failed, "request building failed"),
        (S::Submitting, A::Settle) => (S::Completed, "response received"),
        (S::Submitting, A::Fail) => (S::Failed, "transport failed"),
        (S::Completed, A::Reset) | (S::Failed, A::Reset) => (S::Idle, "outcome presented"),
        _ => {
            return Err(WorkflowError::Transition(format!(
                "illegal invocation transition: {state:?} + {action:?}"
            )))
        }
    };

    Ok((
        to,
        StateTransition {
            from: state,
            to,
            reason,
        },
    ))
}
