use client::{FormField, ModalMode, RosterStore, RowAction};
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_edit_prefills_form_from_backend() {
    let backend = common::spawn_backend(common::seed_roster(3)).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;

    ctrl.dispatch(RowAction::Edit(2)).await;

    assert_eq!(backend.calls().await.get, 1);
    ctrl.store().read(|s| {
        let modal = s.modal().unwrap();
        assert_eq!(modal.mode, ModalMode::Edit(2));
        assert_eq!(modal.form.name, "Student 002");
        assert_eq!(modal.form.year, "3");
        assert_eq!(modal.form.phone_number, "5550000002");
    });
}

#[tokio::test]
async fn test_update_sends_one_put_and_reloads() {
    let backend = common::spawn_backend(common::seed_roster(3)).await;
    let (ctrl, notifier) = common::controller(&backend);
    ctrl.load().await;

    assert!(ctrl.open_edit(3).await);
    ctrl.update_form(FormField::Name, "Dorothy Vaughan".into());
    ctrl.update_form(FormField::PhoneNumber, "0123456789".into());
    assert!(ctrl.submit().await);

    let calls = backend.calls().await;
    assert_eq!(calls.update, 1);
    assert_eq!(calls.create, 0);
    assert_eq!(calls.list, 2);

    ctrl.store().read(|s| {
        assert_eq!(s.edit_target(), None);
        let updated = s.all().iter().find(|st| st.student_id == 3).unwrap();
        assert_eq!(updated.name, "Dorothy Vaughan");
        assert_eq!(updated.phone_number, "0123456789");
        assert!(updated.updated_at.is_some());
    });
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Student updated successfully!".to_string())
    );
}

#[tokio::test]
async fn test_edit_of_deleted_student_does_not_open_modal() {
    let backend = common::spawn_backend(common::seed_roster(3)).await;
    let (ctrl, notifier) = common::controller(&backend);
    ctrl.load().await;
    backend.state.lock().await.students.retain(|s| s.student_id != 1);

    assert!(!ctrl.open_edit(1).await);

    assert!(ctrl.store().read(|s| s.modal().is_none()));
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Failed to fetch student details".to_string())
    );
}

#[tokio::test]
async fn test_close_modal_discards_edits() {
    let backend = common::spawn_backend(common::seed_roster(2)).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;

    ctrl.open_edit(1).await;
    ctrl.update_form(FormField::Name, "Unsaved".into());
    ctrl.close_modal();
    ctrl.open_create();

    ctrl.store().read(|s| {
        let modal = s.modal().unwrap();
        assert_eq!(modal.mode, ModalMode::Create);
        assert!(modal.form.name.is_empty());
    });
    assert_eq!(backend.calls().await.update, 0);
}
