use crate::api::StudentApi;
use crate::form::{validation_message, FormField, ModalMode};
use crate::notify::Notifier;
use crate::query::SortKey;
use crate::state::LoadOutcome;
use crate::store::RosterStore;
use crate::view::{RosterView, RowAction};
use shared_types::{Student, StudentRequest};

const LOAD_FAILED: &str = "Failed to load students. Please check if the backend is running.";
const FETCH_FAILED: &str = "Failed to fetch student details";
const CREATE_FAILED: &str = "Failed to create student";
const UPDATE_FAILED: &str = "Failed to update student";
const DELETE_FAILED: &str = "Failed to delete student";

/// Drives the roster: owns the backend handle, the session state and the
/// notification sink.
///
/// Every mutation goes to the backend first and is followed by a full reload,
/// so the roster never diverges from backend-assigned fields.
#[derive(Clone)]
pub struct Controller<A, S, N> {
    api: A,
    store: S,
    notifier: N,
}

impl<A, S, N> Controller<A, S, N>
where
    A: StudentApi,
    S: RosterStore,
    N: Notifier,
{
    pub fn new(api: A, store: S, notifier: N) -> Self {
        Self {
            api,
            store,
            notifier,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> RosterView {
        self.store.read(|s| s.view())
    }

    // --- Loading ---

    /// Initial fetch of the roster and the department list.
    pub async fn start(&self) {
        self.load().await;
        self.load_departments().await;
    }

    /// Fetch the full roster. Failures keep the prior data and notify.
    pub async fn load(&self) -> LoadOutcome {
        let ticket = self.store.update(|s| s.begin_load());
        let result = self.api.list_students().await;
        let outcome = self.store.update(|s| s.finish_load(ticket, result));
        match &outcome {
            LoadOutcome::Applied(count) => tracing::info!(count, "Loaded students"),
            LoadOutcome::Stale => tracing::warn!("Discarded response of a superseded load"),
            LoadOutcome::Failed(e) => {
                tracing::error!(error = %e, "Failed to load students");
                self.notifier.error(LOAD_FAILED);
            }
        }
        outcome
    }

    /// Populate the department selector. Errors are logged and ignored.
    pub async fn load_departments(&self) {
        match self.api.list_departments().await {
            Ok(departments) => self.store.update(|s| s.set_departments(departments)),
            Err(e) => tracing::warn!(error = %e, "Failed to load departments"),
        }
    }

    /// Fetch one student, notifying on failure. `None` covers both a missing
    /// student and a failed request.
    pub async fn fetch_by_id(&self, id: i64) -> Option<Student> {
        match self.api.get_student(id).await {
            Ok(student) => Some(student),
            Err(e) => {
                tracing::error!(id, error = %e, "Failed to fetch student");
                self.notifier.error(FETCH_FAILED);
                None
            }
        }
    }

    /// Manual refresh: clear every query control, reload, and confirm once
    /// the reload has landed.
    pub async fn refresh(&self) -> LoadOutcome {
        self.store.update(|s| s.reset_filters());
        let outcome = self.load().await;
        if matches!(outcome, LoadOutcome::Applied(_)) {
            self.notifier.success("Data refreshed successfully!");
        }
        outcome
    }

    // --- Query ---

    pub fn search(&self, term: &str) {
        self.store.update(|s| s.apply_search(term));
    }

    pub fn filter(&self, department: &str, year: &str) {
        self.store.update(|s| s.apply_filter(department, year));
    }

    pub fn sort(&self, key: SortKey) {
        self.store.update(|s| s.apply_sort(key));
    }

    pub fn reset_filters(&self) {
        self.store.update(|s| s.reset_filters());
    }

    /// Returns the page actually shown after clamping.
    pub fn go_to_page(&self, page: usize) -> usize {
        self.store.update(|s| s.go_to_page(page))
    }

    // --- Modal ---

    pub fn open_create(&self) {
        self.store.update(|s| s.open_create());
    }

    /// Open the modal in edit mode. The modal stays closed when the fetch
    /// fails.
    pub async fn open_edit(&self, id: i64) -> bool {
        let Some(student) = self.fetch_by_id(id).await else {
            return false;
        };
        self.store.update(|s| s.open_edit(&student));
        true
    }

    pub fn close_modal(&self) {
        self.store.update(|s| s.close_modal());
    }

    pub fn update_form(&self, field: FormField, value: String) {
        self.store.update(|s| s.update_form(field, value));
    }

    /// Validate the open form and send it as a create or update.
    ///
    /// An invalid phone number is reported and nothing is sent.
    pub async fn submit(&self) -> bool {
        let Some(session) = self.store.read(|s| s.modal().cloned()) else {
            return false;
        };
        let request = match session.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.notifier.error(validation_message(&e));
                return false;
            }
        };
        match session.mode {
            ModalMode::Create => self.create(&request).await,
            ModalMode::Edit(id) => self.update(id, &request).await,
        }
    }

    // --- Mutations ---

    pub async fn create(&self, request: &StudentRequest) -> bool {
        match self.api.create_student(request).await {
            Ok(created) => {
                tracing::info!(id = created.student_id, "Created student");
                self.after_mutation("Student added successfully!").await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create student");
                self.notifier.error(e.user_message(CREATE_FAILED));
                false
            }
        }
    }

    pub async fn update(&self, id: i64, request: &StudentRequest) -> bool {
        match self.api.update_student(id, request).await {
            Ok(_) => {
                tracing::info!(id, "Updated student");
                self.after_mutation("Student updated successfully!").await;
                true
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Failed to update student");
                self.notifier.error(e.user_message(UPDATE_FAILED));
                false
            }
        }
    }

    /// First step of a delete: remember the id and wait for confirmation.
    pub fn request_delete(&self, id: i64) {
        self.store.update(|s| s.request_delete(id));
    }

    pub fn cancel_delete(&self) {
        self.store.update(|s| s.cancel_delete());
    }

    /// Clear the confirmation and hand back the id it held. UI handlers call
    /// this before spawning `delete`, so a dialog close that runs afterwards
    /// cannot lose the id.
    pub fn take_pending_delete(&self) -> Option<i64> {
        self.store.update(|s| s.take_pending_delete())
    }

    /// Send the pending delete, if any.
    pub async fn confirm_delete(&self) -> bool {
        match self.take_pending_delete() {
            Some(id) => self.delete(id).await,
            None => false,
        }
    }

    pub async fn delete(&self, id: i64) -> bool {
        self.store.update(|s| s.begin_delete());
        let result = self.api.delete_student(id).await;
        self.store.update(|s| s.finish_delete());
        match result {
            Ok(()) => {
                tracing::info!(id, "Deleted student");
                self.after_mutation("Student deleted successfully!").await;
                true
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Failed to delete student");
                self.notifier.error(e.user_message(DELETE_FAILED));
                false
            }
        }
    }

    async fn after_mutation(&self, message: &str) {
        self.close_modal();
        self.notifier.success(message);
        self.load().await;
    }

    /// Route a row action to its handler.
    pub async fn dispatch(&self, action: RowAction) {
        match action {
            RowAction::Edit(id) => {
                self.open_edit(id).await;
            }
            RowAction::Delete(id) => self.request_delete(id),
        }
    }
}
