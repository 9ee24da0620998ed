use crate::form::{FormField, ModalSession};
use crate::query::{sort_students, QueryInputs, SortKey};
use crate::stats::RosterStats;
use crate::view::{RosterView, StudentRow};
use shared_types::{AppError, PaginationMeta, Student, PAGE_SIZE};

/// Identifies one started load; only the newest ticket may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Result of handing a load response back to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The roster was replaced with this many students.
    Applied(usize),
    /// A newer load was started in the meantime; the response was dropped.
    Stale,
    /// The load failed; prior data is untouched.
    Failed(AppError),
}

/// Client-side session state.
///
/// `filtered` is always a by-value subset of `all`, in `all` order or the
/// order of the last sort. `page` is kept inside the filtered page range.
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    all: Vec<Student>,
    filtered: Vec<Student>,
    departments: Vec<String>,
    query: QueryInputs,
    page: usize,
    modal: Option<ModalSession>,
    pending_delete: Option<i64>,
    loading: bool,
    deleting: bool,
    load_seq: u64,
}

impl RosterState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    pub fn all(&self) -> &[Student] {
        &self.all
    }

    pub fn filtered(&self) -> &[Student] {
        &self.filtered
    }

    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn query(&self) -> &QueryInputs {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn modal(&self) -> Option<&ModalSession> {
        self.modal.as_ref()
    }

    pub fn edit_target(&self) -> Option<i64> {
        self.modal.as_ref().and_then(|m| m.mode.edit_target())
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// True while a load or a delete request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading || self.deleting
    }

    // --- Loading ---

    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.loading = true;
        LoadTicket(self.load_seq)
    }

    /// Apply a load response. A success replaces the roster and drops every
    /// query control back to its default.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Student>, AppError>,
    ) -> LoadOutcome {
        if ticket.0 != self.load_seq {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(students) => {
                let count = students.len();
                self.filtered = students.clone();
                self.all = students;
                self.query = QueryInputs::default();
                self.page = 1;
                LoadOutcome::Applied(count)
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    pub fn set_departments(&mut self, departments: Vec<String>) {
        self.departments = departments;
    }

    // --- Query ---

    /// Recompute `filtered` with a new search term. Resets to page 1 and
    /// discards any sort order.
    pub fn apply_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
        self.recompute();
    }

    /// Recompute `filtered` with new facet values. Resets to page 1 and
    /// discards any sort order.
    pub fn apply_filter(&mut self, department: impl Into<String>, year: impl Into<String>) {
        self.query.department = department.into();
        self.query.year = year.into();
        self.recompute();
    }

    /// Reorder the current `filtered` set. The page is left alone.
    pub fn apply_sort(&mut self, key: SortKey) {
        self.query.sort = key;
        sort_students(&mut self.filtered, key);
    }

    pub fn reset_filters(&mut self) {
        self.query = QueryInputs::default();
        self.filtered = self.all.clone();
        self.page = 1;
    }

    fn recompute(&mut self) {
        self.filtered = self.query.compose(&self.all);
        self.page = 1;
    }

    // --- Pagination ---

    pub fn pagination(&self) -> PaginationMeta {
        PaginationMeta::new(self.page, PAGE_SIZE, self.filtered.len())
    }

    /// Move to `page`, clamped into the valid range. Returns the new page.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page = PaginationMeta::new(page, PAGE_SIZE, self.filtered.len()).page;
        self.page
    }

    pub fn current_page_students(&self) -> &[Student] {
        &self.filtered[self.pagination().range()]
    }

    // --- Modal ---

    pub fn open_create(&mut self) {
        self.modal = Some(ModalSession::create());
    }

    pub fn open_edit(&mut self, student: &Student) {
        self.modal = Some(ModalSession::edit(student));
    }

    /// Close the modal, discarding the form and the edit target.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn update_form(&mut self, field: FormField, value: impl Into<String>) {
        if let Some(modal) = self.modal.as_mut() {
            modal.form.set(field, value);
        }
    }

    // --- Delete confirmation ---

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn take_pending_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }

    pub fn begin_delete(&mut self) {
        self.deleting = true;
    }

    pub fn finish_delete(&mut self) {
        self.deleting = false;
    }

    // --- Rendering ---

    pub fn stats(&self) -> RosterStats {
        RosterStats::compute(&self.all, &self.filtered)
    }

    /// Pure projection of the state into what the table displays.
    pub fn view(&self) -> RosterView {
        let meta = self.pagination();
        RosterView {
            rows: self.current_page_students().iter().map(StudentRow::from).collect(),
            pagination: meta.is_visible().then_some(meta),
            stats: self.stats(),
            loading: self.is_loading(),
            is_empty: self.filtered.is_empty(),
        }
    }
}
