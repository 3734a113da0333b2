use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;

use inkseal_workflow_core::{ServiceResponse, TransportPort, UploadRequest, WorkflowError};

use crate::WorkflowAdapterConfig;

/// Blocking HTTP runtime for the upload workflow. One POST per request, no
/// retries; any delivered response settles the invocation.
#[derive(Debug, Clone)]
pub struct HttpTransportAdapter {
    base_url: String,
    client: Client,
}

impl HttpTransportAdapter {
    pub fn with_config(config: &WorkflowAdapterConfig) -> Result<Self, WorkflowError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WorkflowError::Network(format!("http client init failed: {e}")))?;
        Ok(Self {
            base_url: config.service_base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }
}

impl TransportPort for HttpTransportAdapter {
    fn send(&self, request: &UploadRequest) -> Result<ServiceResponse, WorkflowError> {
        let url = format!("{}{}", self.base_url, request.kind.endpoint_path());

        let mut form = Form::new();
        for (field, handle) in request.parts() {
            let part = Part::bytes(handle.bytes().to_vec())
                .file_name(handle.name().to_owned())
                .mime_str("application/octet-stream")
                .map_err(|e| WorkflowError::Network(format!("part encoding failed: {e}")))?;
            form = form.part(*field, part);
        }

        let payload_bytes: usize = request.parts().iter().map(|(_, h)| h.len()).sum();
        tracing::debug!(
            operation = request.kind.label(),
            %url,
            payload_bytes,
            "dispatching upload"
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| WorkflowError::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| WorkflowError::Network(format!("reading response body failed: {e}")))?;

        tracing::debug!(
            operation = request.kind.label(),
            status = status.as_u16(),
            body_bytes = body.len(),
            "response settled"
        );

        // The service encodes its verdict in the text; the status class is
        // recorded but never interpreted beyond that.
        Ok(ServiceResponse {
            succeeded: status.is_success(),
            body,
        })
    }
}
