//! Search, facet filtering and sorting over the in-memory roster.

use icu::collator::{options::CollatorOptions, Collator, CollatorBorrowed};
use shared_types::Student;
use std::cmp::Ordering;

thread_local! {
    static COLLATOR: Option<CollatorBorrowed<'static>> =
        Collator::try_new(Default::default(), CollatorOptions::default()).ok();
}

/// Locale-aware string comparison (root collation), falling back to code
/// point order if collation data is unavailable.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(c) => c.compare(a, b),
        None => a.cmp(b),
    })
}

/// Sort keys offered by the sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    StudentId,
    Name,
    Department,
    Year,
    CreatedAt,
}

pub const ALL_SORT_KEYS: &[SortKey] = &[
    SortKey::StudentId,
    SortKey::Name,
    SortKey::Department,
    SortKey::Year,
    SortKey::CreatedAt,
];

impl SortKey {
    /// Selector value for this key.
    pub fn as_key(&self) -> &'static str {
        match self {
            SortKey::StudentId => "studentId",
            SortKey::Name => "name",
            SortKey::Department => "department",
            SortKey::Year => "year",
            SortKey::CreatedAt => "createdAt",
        }
    }

    /// Parse a selector value; anything unknown sorts by id.
    pub fn from_key(key: &str) -> Self {
        match key {
            "name" => SortKey::Name,
            "department" => SortKey::Department,
            "year" => SortKey::Year,
            "createdAt" => SortKey::CreatedAt,
            _ => SortKey::StudentId,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::StudentId => "Sort by ID",
            SortKey::Name => "Sort by Name",
            SortKey::Department => "Sort by Department",
            SortKey::Year => "Sort by Year",
            SortKey::CreatedAt => "Newest First",
        }
    }

    fn compare(&self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortKey::StudentId => a.student_id.cmp(&b.student_id),
            SortKey::Name => locale_compare(&a.name, &b.name),
            SortKey::Department => locale_compare(&a.department, &b.department),
            SortKey::Year => a.year.cmp(&b.year),
            // Newest first; unparseable timestamps sink to the end.
            SortKey::CreatedAt => match (a.created_at_parsed(), b.created_at_parsed()) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Stable in-place sort of `students` by `key`.
pub fn sort_students(students: &mut [Student], key: SortKey) {
    students.sort_by(|a, b| key.compare(a, b));
}

/// Year facet parsed from the year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFacet {
    #[default]
    Any,
    Exactly(i32),
    /// A non-empty value that is not a number; matches no student.
    Unmatchable,
}

impl YearFacet {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return YearFacet::Any;
        }
        raw.parse()
            .map(YearFacet::Exactly)
            .unwrap_or(YearFacet::Unmatchable)
    }

    fn matches(&self, year: i32) -> bool {
        match self {
            YearFacet::Any => true,
            YearFacet::Exactly(y) => *y == year,
            YearFacet::Unmatchable => false,
        }
    }
}

/// Department and year facets; both are wildcards when unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Facets {
    pub department: Option<String>,
    pub year: YearFacet,
}

impl Facets {
    pub fn from_inputs(department: &str, year: &str) -> Self {
        Self {
            department: (!department.is_empty()).then(|| department.to_string()),
            year: YearFacet::parse(year),
        }
    }

    pub fn matches(&self, student: &Student) -> bool {
        let department_ok = self
            .department
            .as_deref()
            .map_or(true, |d| student.department == d);
        department_ok && self.year.matches(student.year)
    }
}

/// Case-insensitive substring match on name, email or department.
pub fn matches_search(student: &Student, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [&student.name, &student.email, &student.department]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Raw values of the query controls as the user last set them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryInputs {
    pub search: String,
    pub department: String,
    pub year: String,
    pub sort: SortKey,
}

impl QueryInputs {
    pub fn facets(&self) -> Facets {
        Facets::from_inputs(&self.department, &self.year)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Students of `all` matching both the facets and the search term, in
    /// `all` order. Sorting is applied separately and is not part of this.
    pub fn compose(&self, all: &[Student]) -> Vec<Student> {
        let facets = self.facets();
        let term = self.search.to_lowercase();
        all.iter()
            .filter(|s| facets.matches(s) && matches_search(s, &term))
            .cloned()
            .collect()
    }
}
