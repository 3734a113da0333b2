use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    Sign,
    Verify,
}

impl OperationKind {
    pub fn endpoint_path(self) -> &'static str {
        match self {
            OperationKind::Sign => "/sign",
            OperationKind::Verify => "/verify",
        }
    }

    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            OperationKind::Sign => &["file"],
            OperationKind::Verify => &["file", "signature"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Sign => "sign",
            OperationKind::Verify => "verify",
        }
    }
}

/// Opaque reference to locally selected binary content. Cloning shares the
/// content; the bytes themselves are immutable once selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    bytes: Arc<[u8]>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A fully validated upload: exactly the fields the operation requires, in
/// declaration order. Only `request::build_request` constructs one.
#[derive(Debug)]
pub struct UploadRequest {
    pub kind: OperationKind,
    parts: Vec<(&'static str, FileHandle)>,
}

impl UploadRequest {
    pub(crate) fn new(kind: OperationKind, parts: Vec<(&'static str, FileHandle)>) -> Self {
        Self { kind, parts }
    }

    pub fn parts(&self) -> &[(&'static str, FileHandle)] {
        &self.parts
    }
}

/// A reply actually delivered by the service. The body is opaque text shown
/// verbatim; `succeeded` records the HTTP status class and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub succeeded: bool,
    pub body: String,
}
