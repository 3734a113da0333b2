#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Response, Server, StatusCode};

use inkseal_workflow_adapters::{
    ChannelPresenter, HttpTransportAdapter, SelectionStore, WorkflowAdapterConfig,
};
use inkseal_workflow_core::{FileHandle, Workflow};

/// One request observed by the mock service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

pub fn spawn_mock_service<F>(
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    reply: F,
) -> (String, thread::JoinHandle<()>)
where
    F: Fn(&RecordedRequest) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").expect("start mock service");
    let base_url = format!("http://{}", server.server_addr());

    let join = thread::spawn(move || {
        for _ in 0..8 {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };

            let content_type = req
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.as_str().to_owned())
                .unwrap_or_default();
            let mut body = Vec::new();
            let _ = req.as_reader().read_to_end(&mut body);

            let recorded = RecordedRequest {
                method: req.method().to_string(),
                path: req.url().to_owned(),
                content_type,
                body,
            };
            let (code, text) = reply(&recorded);
            if let Ok(mut guard) = requests.lock() {
                guard.push(recorded);
            }

            let _ = req.respond(Response::from_string(text).with_status_code(StatusCode(code)));
        }
    });

    (base_url, join)
}

/// Pull one part's payload out of a recorded multipart body by field name.
pub fn multipart_part(recorded: &RecordedRequest, field: &str) -> Option<Vec<u8>> {
    let boundary = recorded.content_type.split("boundary=").nth(1)?.trim();
    let delimiter = format!("--{boundary}");
    let needle = format!("name=\"{field}\"");

    let mut cursor = 0;
    while let Some(start) = find(&recorded.body, delimiter.as_bytes(), cursor) {
        let section_start = start + delimiter.len();
        let section_end =
            find(&recorded.body, delimiter.as_bytes(), section_start).unwrap_or(recorded.body.len());
        let section = &recorded.body[section_start..section_end];
        if let Some(split) = find(section, b"\r\n\r\n", 0) {
            if find(&section[..split], needle.as_bytes(), 0).is_some() {
                let payload = &section[split + 4..];
                // Drop the CRLF that precedes the next delimiter.
                let payload = payload.strip_suffix(b"\r\n").unwrap_or(payload);
                return Some(payload.to_vec());
            }
        }
        cursor = section_end;
    }
    None
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

pub fn workflow_against(
    base_url: &str,
) -> Workflow<SelectionStore, HttpTransportAdapter, ChannelPresenter> {
    let config = WorkflowAdapterConfig {
        service_base_url: base_url.to_owned(),
        request_timeout_ms: 5_000,
    };
    let transport = HttpTransportAdapter::with_config(&config).expect("http client");
    Workflow::new(SelectionStore::new(), transport, ChannelPresenter::new())
}

pub fn handle(name: &str, bytes: &[u8]) -> FileHandle {
    FileHandle::new(name, bytes.to_vec())
}
