//! Wrapper types for values that passed their field grammar.
//!
//! A wrapper can only be built through `TryFrom`, so holding one is proof the
//! value was validated. Deserialization goes through the same check.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::validation::FieldKind;

/// Returned when a value does not match the grammar of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {kind} value")]
pub struct InvalidInput {
    pub kind: FieldKind,
}

macro_rules! field_input {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const KIND: FieldKind = $kind;

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidInput;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if Self::KIND.validate(&value) {
                    Ok(Self(value))
                } else {
                    Err(InvalidInput { kind: Self::KIND })
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = InvalidInput;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::try_from(value.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

field_input!(
    /// An email address with a lowercase domain.
    Email => FieldKind::Email
);
field_input!(
    /// A `+` prefixed phone number.
    Phone => FieldKind::Phone
);
field_input!(
    /// A `DD/MM/YYYY` date, not checked against the calendar.
    Date => FieldKind::Date
);
field_input!(
    /// A generic identity document code.
    Dni => FieldKind::Dni
);
field_input!(PostalCode => FieldKind::PostalCode);
field_input!(
    /// A URL. Only its prefix is validated, the whole input is kept.
    Url => FieldKind::Url
);
