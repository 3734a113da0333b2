use thiserror::Error;

use crate::domain::{FileHandle, ServiceResponse, UploadRequest};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("missing required file: {0}")]
    MissingField(&'static str),
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Transition(String),
}

/// Terminal value of one invocation, handed to the presenter exactly once.
#[derive(Debug, Clone)]
pub enum Outcome {
    Completed(ServiceResponse),
    Failed(WorkflowError),
}

pub trait FileSelectorPort {
    fn selected(&self, input: &str) -> Option<FileHandle>;
}

pub trait TransportPort {
    fn send(&self, request: &UploadRequest) -> Result<ServiceResponse, WorkflowError>;
}

pub trait PresenterPort {
    fn present(&self, outcome: &Outcome);
}
