use crate::domain::{OperationKind, ServiceResponse};
use crate::ports::{FileSelectorPort, Outcome, PresenterPort, TransportPort, WorkflowError};
use crate::request::build_request;
use crate::state_machine::{invocation_transition, InvocationAction, InvocationState};

/// Drives one invocation end to end: resolve selections, build the upload,
/// send it, hand the settled outcome to the presenter. Each `submit` call
/// owns its whole flow; nothing serializes overlapping invocations.
pub struct Workflow<S, T, P>
where
    S: FileSelectorPort,
    T: TransportPort,
    P: PresenterPort,
{
    pub selector: S,
    pub transport: T,
    pub presenter: P,
}

impl<S, T, P> Workflow<S, T, P>
where
    S: FileSelectorPort,
    T: TransportPort,
    P: PresenterPort,
{
    pub fn new(selector: S, transport: T, presenter: P) -> Self {
        Self {
            selector,
            transport,
            presenter,
        }
    }

    pub fn submit(&self, kind: OperationKind) -> Outcome {
        let mut state = InvocationState::Idle;
        let outcome = match self.drive(kind, &mut state) {
            Ok(response) => Outcome::Completed(response),
            Err(err) => Outcome::Failed(err),
        };
        self.presenter.present(&outcome);
        // Terminal -> Idle is always legal; the next submit starts fresh.
        let _ = self.step(&mut state, InvocationAction::Reset);
        outcome
    }

    fn drive(
        &self,
        kind: OperationKind,
        state: &mut InvocationState,
    ) -> Result<ServiceResponse, WorkflowError> {
        self.step(state, InvocationAction::Start)?;

        let request = match build_request(kind, &self.selector) {
            Ok(request) => request,
            Err(err) => {
                self.step(state, InvocationAction::Fail)?;
                return Err(err);
            }
        };

        self.step(state, InvocationAction::Dispatch)?;

        match self.transport.send(&request) {
            Ok(response) => {
                self.step(state, InvocationAction::Settle)?;
                Ok(response)
            }
            Err(err) => {
                self.step(state, InvocationAction::Fail)?;
                Err(err)
            }
        }
    }

    fn step(
        &self,
        state: &mut InvocationState,
        action: InvocationAction,
    ) -> Result<(), WorkflowError> {
        let (next, _) = invocation_transition(*state, action)?;
        *state = next;
        Ok(())
    }
}
