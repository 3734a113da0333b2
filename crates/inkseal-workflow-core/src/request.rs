use crate::domain::{OperationKind, UploadRequest};
use crate::ports::{FileSelectorPort, WorkflowError};

/// Resolve every field the operation requires and assemble the upload.
/// Fails on the first absent field, before any network interaction.
pub fn build_request<S>(kind: OperationKind, selector: &S) -> Result<UploadRequest, WorkflowError>
where
    S: FileSelectorPort + ?Sized,
{
    let fields = kind.required_fields();
    let mut parts = Vec::with_capacity(fields.len());
    for &field in fields {
        let handle = selector
            .selected(field)
            .ok_or(WorkflowError::MissingField(field))?;
        parts.push((field, handle));
    }
    Ok(UploadRequest::new(kind, parts))
}
