use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::inquiry::{EducationLevel, Field, Inquiry, InquiryDraft, Interest};

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("First name must be at least 2 characters")]
    FirstNameTooShort,
    #[error("Last name must be at least 2 characters")]
    LastNameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    PhoneTooShort,
    #[error("Please select your education level")]
    MissingEducationLevel,
    #[error("Please select at least one area of interest")]
    NoInterests,
}

/// Every failing field of one validation attempt, one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// Field name to message, the shape sent back by the API.
    pub fn messages(&self) -> BTreeMap<Field, String> {
        self.iter().map(|(field, error)| (field, error.to_string())).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field.name(), error))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Address syntax check. No leading dot and no consecutive dots anywhere.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

fn long_enough(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

impl InquiryDraft {
    pub fn validate(&self) -> Result<Inquiry, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !long_enough(&self.first_name, MIN_NAME_CHARS) {
            errors.insert(Field::FirstName, FieldError::FirstNameTooShort);
        }
        if !long_enough(&self.last_name, MIN_NAME_CHARS) {
            errors.insert(Field::LastName, FieldError::LastNameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }
        if !long_enough(&self.phone, MIN_PHONE_CHARS) {
            errors.insert(Field::Phone, FieldError::PhoneTooShort);
        }

        let education_level = EducationLevel::from_code(&self.education_level);
        if education_level.is_none() {
            errors.insert(Field::EducationLevel, FieldError::MissingEducationLevel);
        }

        let mut interests: Vec<Interest> = Vec::with_capacity(self.interested_in.len());
        let mut unknown_interest = false;
        for code in &self.interested_in {
            match Interest::from_code(code) {
                Some(interest) if !interests.contains(&interest) => interests.push(interest),
                Some(_) => {}
                None => unknown_interest = true,
            }
        }
        if interests.is_empty() || unknown_interest {
            errors.insert(Field::InterestedIn, FieldError::NoInterests);
        }

        match education_level {
            Some(education_level) if errors.is_empty() => Ok(Inquiry {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                education_level,
                interested_in: interests,
                message: (!self.message.is_empty()).then(|| self.message.clone()),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> InquiryDraft {
        InquiryDraft {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "9999999999".into(),
            education_level: "gnm-graduate".into(),
            interested_in: vec!["placement".into()],
            message: String::new(),
        }
    }

    #[test]
    fn complete_draft_becomes_an_inquiry() {
        let inquiry = jane().validate().expect("valid draft");
        assert_eq!(inquiry.full_name(), "Jane Doe");
        assert_eq!(inquiry.education_level, EducationLevel::GnmGraduate);
        assert_eq!(inquiry.interested_in, vec![Interest::Placement]);
        assert_eq!(inquiry.message, None);
    }

    #[test]
    fn short_names_are_flagged_per_field() {
        let mut draft = jane();
        draft.first_name = "J".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::FirstName), Some(FieldError::FirstNameTooShort));
        assert!(!errors.contains(Field::LastName));

        let mut draft = jane();
        draft.last_name = String::new();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::LastName).map(|e| e.to_string()),
            Some("Last name must be at least 2 characters".to_string())
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut draft = jane();
        draft.first_name = "Ö".into();
        assert!(draft.validate().is_err());
        draft.first_name = "Öz".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn malformed_email_blocks_submission() {
        let mut draft = jane();
        draft.email = "not-an-email".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn email_syntax_edges() {
        for good in ["jane@example.com", "j.o'neil+tag@mail.example.de", "a_b@x-y.co"] {
            assert!(is_valid_email(good), "{good} should pass");
        }
        for bad in [
            "",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@example.c",
            ".jane@example.com",
            "ja..ne@example.com",
            "jane.@example.com",
            "jane doe@example.com",
            "jane@-example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn short_phone_blocks_submission() {
        let mut draft = jane();
        draft.phone = "12345".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::Phone), Some(FieldError::PhoneTooShort));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn interests_are_required_and_closed() {
        let mut draft = jane();
        draft.interested_in.clear();
        assert_eq!(
            draft.validate().unwrap_err().get(Field::InterestedIn),
            Some(FieldError::NoInterests)
        );

        draft.interested_in = vec!["visa".into()];
        assert_eq!(draft.validate().unwrap().interested_in, vec![Interest::Visa]);

        draft.interested_in = vec!["visa".into(), "astrology".into()];
        assert!(draft.validate().unwrap_err().contains(Field::InterestedIn));

        draft.interested_in = vec!["visa".into(), "visa".into(), "language".into()];
        assert_eq!(
            draft.validate().unwrap().interested_in,
            vec![Interest::Visa, Interest::Language]
        );
    }

    #[test]
    fn education_level_must_be_selected_from_the_list() {
        let mut draft = jane();
        draft.education_level = String::new();
        assert!(draft.validate().unwrap_err().contains(Field::EducationLevel));
        draft.education_level = "phd".into();
        assert!(draft.validate().unwrap_err().contains(Field::EducationLevel));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = InquiryDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(!errors.contains(Field::Message));
    }

    #[test]
    fn message_is_kept_when_present() {
        let mut draft = jane();
        draft.message = "Starting A1 next month".into();
        assert_eq!(
            draft.validate().unwrap().message.as_deref(),
            Some("Starting A1 next month")
        );
    }
}
