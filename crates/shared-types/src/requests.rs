use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for creating or updating a student.
///
/// `year` is `None` when the form was submitted without a year; the backend
/// rejects that with a structured message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct StudentRequest {
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: Option<i32>,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_phone_number"))
    )]
    pub phone_number: String,
}

#[cfg(feature = "validation")]
fn validate_phone_number(value: &str) -> Result<(), validator::ValidationError> {
    if crate::is_valid_phone_number(value) {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("phone_format");
        err.message = Some(PHONE_NUMBER_MESSAGE.into());
        Err(err)
    }
}

/// Message shown when a phone number fails the ten-digit check.
pub const PHONE_NUMBER_MESSAGE: &str = "Please enter a valid 10-digit phone number";
