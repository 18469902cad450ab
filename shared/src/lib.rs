//! Inquiry model and validation rules used by both the site and the API.

pub mod dto;
pub mod inquiry;
pub mod validation;

pub use dto::{FieldErrorsResponse, InquiryAck, SubmitError, SUCCESS_MESSAGE};
pub use inquiry::{EducationLevel, Field, Inquiry, InquiryDraft, Interest};
pub use validation::{is_valid_email, FieldError, ValidationErrors};
