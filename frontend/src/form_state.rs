use pathway_shared::{
    Field, Inquiry, InquiryAck, InquiryDraft, Interest, SubmitError, ValidationErrors,
};

pub const SUBMIT_LABEL: &str = "Schedule Free Consultation";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const FALLBACK_ERROR: &str = "Failed to submit inquiry. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            title: "Success!".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

/// Everything the inquiry form knows between renders.
///
/// Fields are only checked on submit. After the first attempt each edit
/// re-checks the edited field so inline messages follow the user's fixes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryFormState {
    pub draft: InquiryDraft,
    pub errors: ValidationErrors,
    phase: FormPhase,
    attempted: bool,
}

impl InquiryFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => SUBMIT_LABEL,
            FormPhase::Submitting => SUBMITTING_LABEL,
        }
    }

    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(|error| error.to_string())
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.recheck(field);
    }

    pub fn toggle_interest(&mut self, interest: Interest) {
        self.draft.toggle_interest(interest);
        self.recheck(Field::InterestedIn);
    }

    fn recheck(&mut self, field: Field) {
        if !self.attempted {
            self.errors.remove(field);
            return;
        }
        match self.draft.validate() {
            Ok(_) => self.errors = ValidationErrors::new(),
            Err(fresh) => match fresh.get(field) {
                Some(error) => self.errors.insert(field, error),
                None => self.errors.remove(field),
            },
        }
    }

    /// Validate and, if everything passes, enter `Submitting`.
    ///
    /// Returns the inquiry to dispatch, or `None` when a submission is
    /// already in flight or some field is invalid.
    pub fn begin_submit(&mut self) -> Option<Inquiry> {
        if self.is_submitting() {
            return None;
        }
        self.attempted = true;
        match self.draft.validate() {
            Ok(inquiry) => {
                self.errors = ValidationErrors::new();
                self.phase = FormPhase::Submitting;
                Some(inquiry)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Back to `Idle`. A success resets the form, a failure keeps it for correction.
    pub fn finish(&mut self, outcome: Result<InquiryAck, SubmitError>) -> Notification {
        self.phase = FormPhase::Idle;
        match outcome {
            Ok(ack) => {
                self.draft = InquiryDraft::default();
                self.errors = ValidationErrors::new();
                self.attempted = false;
                Notification::success(ack.message)
            }
            Err(err) => {
                let description = err.to_string();
                if description.trim().is_empty() {
                    Notification::error(FALLBACK_ERROR)
                } else {
                    Notification::error(description)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        MobileMenu { open: !self.open }
    }

    pub fn close(self) -> Self {
        MobileMenu { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_shared::{EducationLevel, SUCCESS_MESSAGE};

    fn fill_jane(state: &mut InquiryFormState) {
        state.set_field(Field::FirstName, "Jane".into());
        state.set_field(Field::LastName, "Doe".into());
        state.set_field(Field::Email, "jane@example.com".into());
        state.set_field(Field::Phone, "9999999999".into());
        state.set_field(Field::EducationLevel, "gnm-graduate".into());
        state.toggle_interest(Interest::Placement);
        state.set_field(Field::Message, String::new());
    }

    #[test]
    fn valid_submission_runs_idle_submitting_idle_and_resets() {
        let mut state = InquiryFormState::new();
        fill_jane(&mut state);
        assert_eq!(state.submit_label(), SUBMIT_LABEL);

        let inquiry = state.begin_submit().expect("form is valid");
        assert_eq!(inquiry.education_level, EducationLevel::GnmGraduate);
        assert_eq!(inquiry.interested_in, vec![Interest::Placement]);
        assert_eq!(state.phase(), FormPhase::Submitting);
        assert_eq!(state.submit_label(), SUBMITTING_LABEL);

        let note = state.finish(Ok(InquiryAck::default()));
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.title, "Success!");
        assert_eq!(note.description, SUCCESS_MESSAGE);
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(state.draft, InquiryDraft::default());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut state = InquiryFormState::new();
        fill_jane(&mut state);
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert!(state.is_submitting());
    }

    #[test]
    fn invalid_form_stays_idle_with_inline_errors() {
        let mut state = InquiryFormState::new();
        fill_jane(&mut state);
        state.set_field(Field::Phone, "12345".into());
        state.set_field(Field::LastName, "D".into());

        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(
            state.error_for(Field::Phone).as_deref(),
            Some("Please enter a valid phone number")
        );
        assert!(state.errors.contains(Field::LastName));
        assert!(!state.errors.contains(Field::FirstName));
    }

    #[test]
    fn editing_after_a_failed_attempt_rechecks_that_field() {
        let mut state = InquiryFormState::new();
        assert!(state.begin_submit().is_none());
        assert!(state.errors.contains(Field::InterestedIn));

        state.toggle_interest(Interest::Visa);
        assert!(!state.errors.contains(Field::InterestedIn));

        state.set_field(Field::Email, "still-wrong".into());
        assert!(state.errors.contains(Field::Email));
        state.set_field(Field::Email, "jane@example.com".into());
        assert!(!state.errors.contains(Field::Email));
        assert!(state.errors.contains(Field::FirstName));
    }

    #[test]
    fn editing_before_any_attempt_shows_no_errors() {
        let mut state = InquiryFormState::new();
        state.set_field(Field::Email, "x".into());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn failure_keeps_contents_and_reports_an_error() {
        let mut state = InquiryFormState::new();
        fill_jane(&mut state);
        let before = state.draft.clone();
        state.begin_submit().expect("valid");

        let note = state.finish(Err(SubmitError::Network("offline".into())));
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.title, "Error");
        assert_eq!(note.description, "Request failed: offline");
        assert_eq!(state.draft, before);
        assert_eq!(state.phase(), FormPhase::Idle);

        state.begin_submit().expect("valid");
        let note = state.finish(Err(SubmitError::Rejected(String::new())));
        assert_eq!(note.description, FALLBACK_ERROR);
    }

    #[test]
    fn double_toggle_leaves_menu_closed() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle().is_open());
        assert_eq!(menu.toggle().toggle(), menu);
        assert!(!menu.toggle().close().is_open());
    }
}
