mod common;

use std::sync::{Arc, Mutex};

use inkseal_workflow_adapters::{
    HttpTransportAdapter, LogPresenter, SelectionStore, WorkflowAdapterConfig,
};
use inkseal_workflow_core::{OperationKind, Outcome, Workflow, WorkflowError};

use common::{handle, spawn_mock_service, workflow_against};

#[test]
fn unreachable_endpoint_fails_with_a_network_error() {
    // Nothing listens on the discard port; the connection attempt itself fails.
    let config = WorkflowAdapterConfig {
        service_base_url: "http://127.0.0.1:9".to_owned(),
        request_timeout_ms: 2_000,
    };
    let transport = HttpTransportAdapter::with_config(&config).expect("http client");
    let workflow = Workflow::new(SelectionStore::new(), transport, LogPresenter);
    workflow.selector.choose("file", handle("A.txt", b"hello"));

    let outcome = workflow.submit(OperationKind::Sign);
    match outcome {
        Outcome::Failed(WorkflowError::Network(cause)) => {
            assert!(cause.contains("/sign"), "cause should name the url: {cause}");
        }
        other => panic!("expected network failure, got {other:?}"),
    }
}

#[test]
fn missing_selection_issues_no_request() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let (base_url, _join) =
        spawn_mock_service(Arc::clone(&requests), |_| (200, "unreached".to_owned()));

    let workflow = workflow_against(&base_url);
    workflow.selector.choose("file", handle("B.txt", b"document"));

    let outcome = workflow.submit(OperationKind::Verify);
    match outcome {
        Outcome::Failed(err) => assert_eq!(err, WorkflowError::MissingField("signature")),
        other => panic!("expected failed outcome, got {other:?}"),
    }

    let presented = workflow.presenter.take().expect("presented outcome");
    assert!(matches!(
        presented,
        Outcome::Failed(WorkflowError::MissingField("signature"))
    ));
    assert!(requests.lock().expect("requests lock").is_empty());
}

#[test]
fn cleared_selection_behaves_like_none_was_made() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let (base_url, _join) =
        spawn_mock_service(Arc::clone(&requests), |_| (200, "unreached".to_owned()));

    let workflow = workflow_against(&base_url);
    workflow.selector.choose("file", handle("A.txt", b"hello"));
    workflow.selector.clear("file");

    let outcome = workflow.submit(OperationKind::Sign);
    match outcome {
        Outcome::Failed(err) => assert_eq!(err, WorkflowError::MissingField("file")),
        other => panic!("expected failed outcome, got {other:?}"),
    }
    assert!(requests.lock().expect("requests lock").is_empty());
}
