use axum::http::StatusCode;
use client::{LoadOutcome, StudentApi};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_html_error_body_becomes_http_error() {
    let backend = common::spawn_backend(common::seed_roster(1)).await;
    backend.state.lock().await.fail_list = Some(StatusCode::BAD_GATEWAY);
    let api = client::HttpStudentApi::new(backend.base_url.clone());

    let err = api.list_students().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Http);
    assert_eq!(err.message, "HTTP error! status: 502");
    assert_eq!(err.user_message("Failed to load"), "Failed to load");
}

#[tokio::test]
async fn test_validation_error_maps_to_bad_request() {
    let backend = common::spawn_backend(vec![]).await;
    let api = client::HttpStudentApi::new(backend.base_url.clone());
    let req = shared_types::StudentRequest {
        name: "   ".into(),
        email: "x@university.edu".into(),
        department: "Physics".into(),
        year: Some(1),
        phone_number: "0123456789".into(),
    };

    let err = api.create_student(&req).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Name is required");
}

#[tokio::test]
async fn test_backend_down_during_load() {
    let (ctrl, notifier) = {
        let backend = common::MockBackend {
            base_url: "http://127.0.0.1:9/api".to_string(),
            state: Default::default(),
        };
        common::controller(&backend)
    };

    let outcome = ctrl.load().await;
    match outcome {
        LoadOutcome::Failed(e) => assert_eq!(e.kind, AppErrorKind::Network),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(notifier.notices().len(), 1);
    assert!(!ctrl.view().loading);
}
