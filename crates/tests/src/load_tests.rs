use axum::http::StatusCode;
use client::{LoadOutcome, NoticeLevel, RosterStore};
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_start_populates_roster_and_departments() {
    let backend = common::spawn_backend(common::seed_roster(12)).await;
    let (ctrl, notifier) = common::controller(&backend);

    ctrl.start().await;

    ctrl.store().read(|s| {
        assert_eq!(s.all().len(), 12);
        assert_eq!(s.filtered().len(), 12);
        assert_eq!(s.departments().len(), 3);
        assert!(!s.is_loading());
    });
    let calls = backend.calls().await;
    assert_eq!(calls.list, 1);
    assert_eq!(calls.departments, 1);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_view_after_load() {
    let backend = common::spawn_backend(common::seed_roster(25)).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;

    let view = ctrl.view();
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.rows[0].year_label, "Year 2");
    assert_eq!(view.rows[0].created_label, "Sep 2, 2025");
    assert_eq!(view.stats.total, 25);
    assert_eq!(view.stats.departments, 3);
    assert_eq!(view.stats.active, 25);
    assert_eq!(view.pagination.map(|p| p.total_pages), Some(3));
}

#[tokio::test]
async fn test_failed_load_keeps_prior_roster() {
    let backend = common::spawn_backend(common::seed_roster(5)).await;
    let (ctrl, notifier) = common::controller(&backend);
    ctrl.load().await;

    backend.state.lock().await.fail_list = Some(StatusCode::SERVICE_UNAVAILABLE);
    let outcome = ctrl.load().await;

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert_eq!(ctrl.store().read(|s| s.all().len()), 5);
    assert!(!ctrl.view().loading);
    let notice = notifier.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(
        notice.message,
        "Failed to load students. Please check if the backend is running."
    );
}

#[tokio::test]
async fn test_department_failure_is_not_fatal() {
    let backend = common::spawn_backend(common::seed_roster(4)).await;
    backend.state.lock().await.fail_departments = true;
    let (ctrl, notifier) = common::controller(&backend);

    ctrl.start().await;

    assert_eq!(ctrl.view().rows.len(), 4);
    assert!(ctrl.store().read(|s| s.departments().is_empty()));
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_refresh_resets_filters_and_confirms() {
    let backend = common::spawn_backend(common::seed_roster(15)).await;
    let (ctrl, notifier) = common::controller(&backend);
    ctrl.load().await;
    ctrl.filter("Physics", "");
    ctrl.go_to_page(2);

    ctrl.refresh().await;

    ctrl.store().read(|s| {
        assert!(s.query().is_default());
        assert_eq!(s.filtered().len(), 15);
        assert_eq!(s.page(), 1);
    });
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Data refreshed successfully!".to_string())
    );
    assert_eq!(backend.calls().await.list, 2);
}
