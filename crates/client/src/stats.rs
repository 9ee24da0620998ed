use shared_types::Student;
use std::collections::HashSet;

/// Figures shown in the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RosterStats {
    /// Students loaded from the backend.
    pub total: usize,
    /// Distinct departments among all loaded students.
    pub departments: usize,
    /// Mean year across all students, rounded to one decimal.
    pub average_year: f64,
    /// Students in the current filtered view.
    pub active: usize,
}

impl RosterStats {
    pub fn compute(all: &[Student], filtered: &[Student]) -> Self {
        let departments = all
            .iter()
            .map(|s| s.department.as_str())
            .collect::<HashSet<_>>()
            .len();
        let average_year = if all.is_empty() {
            0.0
        } else {
            let sum: i64 = all.iter().map(|s| i64::from(s.year)).sum();
            (sum as f64 / all.len() as f64 * 10.0).round() / 10.0
        };
        Self {
            total: all.len(),
            departments,
            average_year,
            active: filtered.len(),
        }
    }

    /// `"0"` for an empty roster, otherwise one decimal place.
    pub fn average_year_label(&self) -> String {
        if self.total == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average_year)
        }
    }
}
