//! Root module for the validation system.
//! Exposes the public API for field validation and text processing.

mod batch;
mod constants;
mod feedback;
mod fields;
mod patterns;
mod text;
mod types;
mod url;

// Re-export commonly used types and functions
pub use batch::{extract_all, validate_all_fields, ExtractionReport, FieldBatchResult, FieldOutcome};
pub use constants::*;
pub use feedback::{
    field_feedback, registration_report, summarize_registration, FeedbackStatus, FieldFeedback,
    RegistrationForm, RegistrationReport, ValidationSummary,
};
pub use fields::{
    validate_date, validate_dni, validate_email, validate_phone, validate_postal_code, FieldKind,
};
pub use text::{clean_text, extract_numbers, find_patterns, PatternMatchResult};
pub use types::{Date, Dni, Email, InvalidInput, Phone, PostalCode, Url};
pub use url::{match_url, validate_url, UrlMatch};
