use crate::stats::RosterStats;
use shared_types::{parse_timestamp, PaginationMeta, Student};

/// Everything the student table needs to render, derived from state.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterView {
    /// Rows of the current page only.
    pub rows: Vec<StudentRow>,
    /// `None` when the filtered set fits on one page (controls hidden).
    pub pagination: Option<PaginationMeta>,
    pub stats: RosterStats,
    pub loading: bool,
    /// No students match the current query.
    pub is_empty: bool,
}

/// Actions attached to a row, keyed by student id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(i64),
    Delete(i64),
}

impl RowAction {
    pub fn student_id(&self) -> i64 {
        match self {
            RowAction::Edit(id) | RowAction::Delete(id) => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit(_) => "Edit",
            RowAction::Delete(_) => "Delete",
        }
    }
}

/// Display-ready student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub year_label: String,
    pub phone_number: String,
    pub created_label: String,
    pub actions: [RowAction; 2],
}

impl From<&Student> for StudentRow {
    fn from(s: &Student) -> Self {
        Self {
            id: s.student_id,
            name: s.name.clone(),
            email: s.email.clone(),
            department: s.department.clone(),
            year_label: format!("Year {}", s.year),
            phone_number: s.phone_number.clone(),
            created_label: format_date_human(&s.created_at),
            actions: [RowAction::Edit(s.student_id), RowAction::Delete(s.student_id)],
        }
    }
}

/// Format a backend timestamp as "Jan 20, 2026".
///
/// Falls back to the raw string when it cannot be parsed.
pub fn format_date_human(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
