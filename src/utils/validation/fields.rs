//! The six field validators and the table that dispatches to them.
//!
//! Every validator is total: empty input is simply invalid.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::constants::MAX_EMAIL_LENGTH;
use super::patterns::{DATE_REGEX, DNI_REGEX, EMAIL_REGEX, PHONE_REGEX, POSTAL_CODE_REGEX};
use super::url::validate_url;

/// A field that has a grammar. Parsed from and displayed as the field's
/// snake_case name (`postal_code`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    Email,
    Phone,
    Date,
    Dni,
    PostalCode,
    Url,
}

impl FieldKind {
    /// Looks up the grammar registered under a field name, if any.
    pub fn from_field_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Applies this field's grammar to `value`.
    pub fn validate(self, value: &str) -> bool {
        match self {
            FieldKind::Email => validate_email(value),
            FieldKind::Phone => validate_phone(value),
            FieldKind::Date => validate_date(value),
            FieldKind::Dni => validate_dni(value),
            FieldKind::PostalCode => validate_postal_code(value),
            FieldKind::Url => validate_url(value),
        }
    }

    /// Same as [`FieldKind::validate`], with an absent value being invalid.
    pub fn validate_opt(self, value: Option<&str>) -> bool {
        value.is_some_and(|value| self.validate(value))
    }

    /// Human readable name, used in feedback messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone",
            FieldKind::Date => "Date",
            FieldKind::Dni => "DNI",
            FieldKind::PostalCode => "Postal code",
            FieldKind::Url => "URL",
        }
    }
}

/// Checks an email address. The domain must be lowercase.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.chars().count() > MAX_EMAIL_LENGTH {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}

/// Checks a phone number in `+` and 8 to 15 digits form.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Checks a `DD/MM/YYYY` date. Negative years are allowed, the calendar is not
/// checked.
pub fn validate_date(date: &str) -> bool {
    DATE_REGEX.is_match(date)
}

/// Checks a generic identity document code: 4 to 18 upper-case letters or
/// digits. There is no checksum.
pub fn validate_dni(dni: &str) -> bool {
    DNI_REGEX.is_match(dni)
}

pub fn validate_postal_code(postal_code: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(postal_code)
}
