pub mod domain;
pub mod orchestrator;
pub mod ports;
pub mod request;
pub mod state_machine;

pub use domain::{FileHandle, OperationKind, ServiceResponse, UploadRequest};
pub use orchestrator::Workflow;
pub use ports::{FileSelectorPort, Outcome, PresenterPort, TransportPort, WorkflowError};
pub use request::build_request;
pub use state_machine::{
    invocation_transition, InvocationAction, InvocationState, StateTransition,
};
