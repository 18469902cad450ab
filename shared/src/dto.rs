use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::inquiry::Field;
use crate::validation::ValidationErrors;

pub const SUCCESS_MESSAGE: &str = "Thank you for your inquiry! We will contact you soon.";

/// What a submitter hands back once an inquiry has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryAck {
    pub message: String,
}

impl Default for InquiryAck {
    fn default() -> Self {
        InquiryAck {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Body of a 422 from `POST /api/inquiries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorsResponse {
    pub error: String,
    pub fields: BTreeMap<Field, String>,
}

impl From<&ValidationErrors> for FieldErrorsResponse {
    fn from(errors: &ValidationErrors) -> Self {
        FieldErrorsResponse {
            error: "Validation failed".to_string(),
            fields: errors.messages(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{}", .0.values().cloned().collect::<Vec<_>>().join(" "))]
    Invalid(BTreeMap<Field, String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn field_errors_serialize_with_wire_names() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::FirstName, FieldError::FirstNameTooShort);
        errors.insert(Field::InterestedIn, FieldError::NoInterests);
        let body = serde_json::to_value(FieldErrorsResponse::from(&errors)).unwrap();
        assert_eq!(body["fields"]["firstName"], "First name must be at least 2 characters");
        assert_eq!(
            body["fields"]["interestedIn"],
            "Please select at least one area of interest"
        );
    }

    #[test]
    fn invalid_submit_error_joins_field_messages() {
        let mut fields = BTreeMap::new();
        fields.insert(Field::Phone, "Please enter a valid phone number".to_string());
        assert_eq!(
            SubmitError::Invalid(fields).to_string(),
            "Please enter a valid phone number"
        );
    }
}
