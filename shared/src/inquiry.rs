use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the applicant currently is on the nursing-education pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "12th-completed")]
    TwelfthCompleted,
    #[serde(rename = "gnm-current")]
    GnmCurrent,
    #[serde(rename = "gnm-graduate")]
    GnmGraduate,
    #[serde(rename = "anm-current")]
    AnmCurrent,
    #[serde(rename = "anm-graduate")]
    AnmGraduate,
    #[serde(rename = "other")]
    Other,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::TwelfthCompleted,
        EducationLevel::GnmCurrent,
        EducationLevel::GnmGraduate,
        EducationLevel::AnmCurrent,
        EducationLevel::AnmGraduate,
        EducationLevel::Other,
    ];

    pub fn code(self) -> &'static str {
        match self {
            EducationLevel::TwelfthCompleted => "12th-completed",
            EducationLevel::GnmCurrent => "gnm-current",
            EducationLevel::GnmGraduate => "gnm-graduate",
            EducationLevel::AnmCurrent => "anm-current",
            EducationLevel::AnmGraduate => "anm-graduate",
            EducationLevel::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::TwelfthCompleted => "12th Grade Completed",
            EducationLevel::GnmCurrent => "Currently in GNM Program",
            EducationLevel::GnmGraduate => "GNM Graduate",
            EducationLevel::AnmCurrent => "Currently in ANM Program",
            EducationLevel::AnmGraduate => "ANM Graduate",
            EducationLevel::Other => "Other Healthcare Qualification",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Service category an applicant wants to hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Language,
    Placement,
    Visa,
    Counseling,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Language,
        Interest::Placement,
        Interest::Visa,
        Interest::Counseling,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Interest::Language => "language",
            Interest::Placement => "placement",
            Interest::Visa => "visa",
            Interest::Counseling => "counseling",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::Language => "German Language Training",
            Interest::Placement => "University Placement in Germany",
            Interest::Visa => "Visa Assistance",
            Interest::Counseling => "Career Counseling",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.code() == code)
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Form fields, named the way they travel over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    EducationLevel,
    InterestedIn,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::EducationLevel => "educationLevel",
            Field::InterestedIn => "interestedIn",
            Field::Message => "message",
        }
    }
}

/// Raw form contents, exactly as typed and selected.
///
/// An empty `education_level` means nothing has been picked yet. Codes in
/// `interested_in` are kept as strings so that anything posted to the API
/// reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub education_level: String,
    pub interested_in: Vec<String>,
    pub message: String,
}

impl InquiryDraft {
    /// Write a free-text field. Interests go through `toggle_interest`.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::EducationLevel => self.education_level = value,
            Field::Message => self.message = value,
            Field::InterestedIn => {}
        }
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interested_in.iter().any(|code| code == interest.code())
    }

    /// Add the tag if absent, remove every copy of it otherwise.
    pub fn toggle_interest(&mut self, interest: Interest) {
        if self.has_interest(interest) {
            self.interested_in.retain(|code| code != interest.code());
        } else {
            self.interested_in.push(interest.code().to_string());
        }
    }
}

/// A validated inquiry, ready to hand to a submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub education_level: EducationLevel,
    pub interested_in: Vec<Interest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Inquiry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<Inquiry> for InquiryDraft {
    fn from(inquiry: Inquiry) -> Self {
        InquiryDraft {
            first_name: inquiry.first_name,
            last_name: inquiry.last_name,
            email: inquiry.email,
            phone: inquiry.phone,
            education_level: inquiry.education_level.code().to_string(),
            interested_in: inquiry
                .interested_in
                .iter()
                .map(|interest| interest.code().to_string())
                .collect(),
            message: inquiry.message.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_codes_match_the_select_options() {
        let codes: Vec<&str> = EducationLevel::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(
            codes,
            [
                "12th-completed",
                "gnm-current",
                "gnm-graduate",
                "anm-current",
                "anm-graduate",
                "other"
            ]
        );
        assert_eq!(EducationLevel::from_code("gnm-graduate"), Some(EducationLevel::GnmGraduate));
        assert_eq!(EducationLevel::from_code("bsc-nursing"), None);
        assert_eq!(
            serde_json::to_string(&EducationLevel::TwelfthCompleted).unwrap(),
            "\"12th-completed\""
        );
    }

    #[test]
    fn toggling_an_interest_twice_removes_it() {
        let mut draft = InquiryDraft::default();
        draft.toggle_interest(Interest::Visa);
        assert!(draft.has_interest(Interest::Visa));
        draft.toggle_interest(Interest::Language);
        draft.toggle_interest(Interest::Visa);
        assert_eq!(draft.interested_in, vec!["language".to_string()]);
    }

    #[test]
    fn draft_reads_camel_case_and_fills_missing_fields() {
        let draft: InquiryDraft = serde_json::from_str(
            r#"{"firstName":"Jane","interestedIn":["placement"],"educationLevel":"gnm-graduate"}"#,
        )
        .unwrap();
        assert_eq!(draft.first_name, "Jane");
        assert_eq!(draft.education_level, "gnm-graduate");
        assert!(draft.email.is_empty());
        assert!(draft.message.is_empty());
    }
}
