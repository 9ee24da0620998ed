use shared_types::{AppError, Student, StudentRequest, PHONE_NUMBER_MESSAGE};
use validator::Validate;

/// Create or edit, selected by whether an edit target is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit(i64),
}

impl ModalMode {
    pub fn edit_target(&self) -> Option<i64> {
        match self {
            ModalMode::Create => None,
            ModalMode::Edit(id) => Some(*id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalMode::Create => "Add New Student",
            ModalMode::Edit(_) => "Edit Student",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            ModalMode::Create => "Add Student",
            ModalMode::Edit(_) => "Update Student",
        }
    }
}

/// Form inputs, kept as the raw strings the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: String,
    pub phone_number: String,
}

/// Addressable form inputs, used by input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Department,
    Year,
    PhoneNumber,
}

impl StudentForm {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            department: student.department.clone(),
            year: student.year.to_string(),
            phone_number: student.phone_number.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Department => &self.department,
            FormField::Year => &self.year,
            FormField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Department => self.department = value,
            FormField::Year => self.year = value,
            FormField::PhoneNumber => self.phone_number = value,
        }
    }

    /// Build the request payload. Name, email and phone are trimmed; the
    /// phone number must be exactly ten digits. Nothing else is checked
    /// client-side.
    pub fn to_request(&self) -> Result<StudentRequest, AppError> {
        let request = StudentRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.clone(),
            year: self.year.trim().parse().ok(),
            phone_number: self.phone_number.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}

/// An open modal: its mode plus the form being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSession {
    pub mode: ModalMode,
    pub form: StudentForm,
}

impl ModalSession {
    pub fn create() -> Self {
        Self {
            mode: ModalMode::Create,
            form: StudentForm::default(),
        }
    }

    pub fn edit(student: &Student) -> Self {
        Self {
            mode: ModalMode::Edit(student.student_id),
            form: StudentForm::from_student(student),
        }
    }
}

/// Shown when [`StudentForm::to_request`] rejects the phone number.
pub fn validation_message(err: &AppError) -> String {
    err.field_errors
        .get("phone_number")
        .cloned()
        .unwrap_or_else(|| err.user_message(PHONE_NUMBER_MESSAGE))
}
