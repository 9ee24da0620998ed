use client::{RosterStore, RowAction};
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_cancelled_delete_sends_no_request() {
    let backend = common::spawn_backend(common::seed_roster(4)).await;
    let (ctrl, notifier) = common::controller(&backend);
    ctrl.load().await;

    ctrl.dispatch(RowAction::Delete(2)).await;
    assert_eq!(ctrl.store().read(|s| s.pending_delete()), Some(2));
    ctrl.cancel_delete();
    assert!(!ctrl.confirm_delete().await);

    assert_eq!(backend.calls().await.delete, 0);
    assert_eq!(backend.student_count().await, 4);
    assert_eq!(ctrl.store().read(|s| s.all().len()), 4);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_confirmed_delete_removes_and_reloads() {
    let backend = common::spawn_backend(common::seed_roster(11)).await;
    let (ctrl, notifier) = common::controller(&backend);
    ctrl.load().await;
    ctrl.go_to_page(2);

    ctrl.dispatch(RowAction::Delete(11)).await;
    assert!(ctrl.confirm_delete().await);

    let calls = backend.calls().await;
    assert_eq!(calls.delete, 1);
    assert_eq!(calls.list, 2);
    ctrl.store().read(|s| {
        assert_eq!(s.all().len(), 10);
        assert_eq!(s.page(), 1);
        assert_eq!(s.pending_delete(), None);
    });
    assert!(ctrl.view().pagination.is_none());
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Student deleted successfully!".to_string())
    );
}

#[tokio::test]
async fn test_delete_of_missing_student_reports_error() {
    let backend = common::spawn_backend(common::seed_roster(2)).await;
    let (ctrl, notifier) = common::controller(&backend);
    ctrl.load().await;

    ctrl.request_delete(42);
    assert!(!ctrl.confirm_delete().await);

    assert_eq!(backend.calls().await.list, 1);
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Student not found with id: 42".to_string())
    );
}

#[tokio::test]
async fn test_dialog_close_after_confirm_does_not_cancel_delete() {
    let backend = common::spawn_backend(common::seed_roster(3)).await;
    let (ctrl, notifier) = common::controller(&backend);
    ctrl.load().await;
    ctrl.dispatch(RowAction::Delete(2)).await;

    let local = tokio::task::LocalSet::new();
    let deleted = local
        .run_until(async {
            // Same order as the confirm button: take the id, spawn the request,
            // then the dialog reports its close before the task first runs.
            let id = ctrl.take_pending_delete().expect("pending delete");
            let task = tokio::task::spawn_local({
                let ctrl = ctrl.clone();
                async move { ctrl.delete(id).await }
            });
            ctrl.cancel_delete();
            task.await.expect("delete task panicked")
        })
        .await;

    assert!(deleted);
    assert_eq!(backend.calls().await.delete, 1);
    assert_eq!(backend.student_count().await, 2);
    assert_eq!(ctrl.store().read(|s| s.all().len()), 2);
    assert!(!ctrl.view().loading);
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Student deleted successfully!".to_string())
    );
}
