//! Per-field feedback and the registration form summary.
//!
//! These are the decisions a form front-end makes on every keystroke, kept
//! free of any notion of which fields the user has touched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::fields::FieldKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Success,
    Error,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFeedback {
    pub status: FeedbackStatus,
    pub message: String,
}

impl FieldFeedback {
    fn new(status: FeedbackStatus, message: String) -> Self {
        Self { status, message }
    }
}

/// Feedback for a single field value.
///
/// An empty value is a warning when the field is required and neutral
/// otherwise. A non-empty value is a success or an error according to `kind`;
/// without a grammar (`None`) any non-empty value is a success.
pub fn field_feedback(
    label: &str,
    value: &str,
    kind: Option<FieldKind>,
    required: bool,
) -> FieldFeedback {
    if value.is_empty() {
        return if required {
            FieldFeedback::new(FeedbackStatus::Warning, format!("{label} is required"))
        } else {
            FieldFeedback::new(FeedbackStatus::Neutral, String::new())
        };
    }

    if kind.map_or(true, |kind| kind.validate(value)) {
        FieldFeedback::new(FeedbackStatus::Success, format!("{label} is valid"))
    } else {
        FieldFeedback::new(FeedbackStatus::Error, format!("{label} is invalid"))
    }
}

/// A professional registration form as submitted by the front-end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub profession: String,
    pub experience: String,
    pub birth_date: String,
    pub dni: String,
    pub postal_code: String,
    pub portfolio_urls: Vec<String>,
}

struct FormField<'a> {
    name: &'static str,
    label: &'static str,
    value: &'a str,
    kind: Option<FieldKind>,
}

impl<'a> FormField<'a> {
    fn new(name: &'static str, label: &'static str, value: &'a str, kind: Option<FieldKind>) -> Self {
        Self {
            name,
            label,
            value,
            kind,
        }
    }
}

impl RegistrationForm {
    fn required_fields(&self) -> [FormField<'_>; 5] {
        [
            FormField::new("full_name", "Full name", &self.full_name, None),
            FormField::new("email", "Email", &self.email, Some(FieldKind::Email)),
            FormField::new("phone", "Phone", &self.phone, Some(FieldKind::Phone)),
            FormField::new("profession", "Profession", &self.profession, None),
            FormField::new("experience", "Experience", &self.experience, None),
        ]
    }

    fn optional_fields(&self) -> [FormField<'_>; 3] {
        let postal_code = Some(FieldKind::PostalCode);
        [
            FormField::new("birth_date", "Birth date", &self.birth_date, Some(FieldKind::Date)),
            FormField::new("dni", "DNI", &self.dni, Some(FieldKind::Dni)),
            FormField::new("postal_code", "Postal code", &self.postal_code, postal_code),
        ]
    }
}

/// Counts over a registration form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub valid: usize,
    pub invalid: usize,
    pub required_missing: usize,
    pub total: usize,
}

impl ValidationSummary {
    /// Nothing invalid and nothing required left empty.
    pub fn is_complete(&self) -> bool {
        self.invalid == 0 && self.required_missing == 0
    }

    fn record(&mut self, feedback: &FieldFeedback) {
        match feedback.status {
            FeedbackStatus::Success => self.valid += 1,
            FeedbackStatus::Error => self.invalid += 1,
            FeedbackStatus::Warning => self.required_missing += 1,
            FeedbackStatus::Neutral => return,
        }
        self.total += 1;
    }
}

/// Summary plus the feedback it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    pub summary: ValidationSummary,
    pub complete: bool,
    pub fields: BTreeMap<&'static str, FieldFeedback>,
    pub portfolio_urls: Vec<FieldFeedback>,
}

/// Required fields always count; optional fields and portfolio URLs count
/// only when filled in.
pub fn summarize_registration(form: &RegistrationForm) -> ValidationSummary {
    registration_report(form).summary
}

pub fn registration_report(form: &RegistrationForm) -> RegistrationReport {
    let mut summary = ValidationSummary::default();
    let mut fields = BTreeMap::new();

    for field in form.required_fields() {
        let feedback = field_feedback(field.label, field.value, field.kind, true);
        summary.record(&feedback);
        fields.insert(field.name, feedback);
    }

    for field in form.optional_fields() {
        let feedback = field_feedback(field.label, field.value, field.kind, false);
        summary.record(&feedback);
        fields.insert(field.name, feedback);
    }

    let portfolio_urls: Vec<FieldFeedback> = form
        .portfolio_urls
        .iter()
        .map(|url| field_feedback(FieldKind::Url.label(), url, Some(FieldKind::Url), false))
        .collect();
    portfolio_urls.iter().for_each(|feedback| summary.record(feedback));

    RegistrationReport {
        complete: summary.is_complete(),
        summary,
        fields,
        portfolio_urls,
    }
}
