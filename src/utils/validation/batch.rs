//! Batch validation of named fields, and the free-text report served by the
//! extraction endpoint.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;

use super::constants::UNKNOWN_VALIDATOR;
use super::fields::FieldKind;
use super::text::{clean_text, extract_numbers};

/// Outcome of validating one named field.
///
/// `valid` is `None` exactly when no grammar is registered for the field, in
/// which case `validator` is `None` and serializes as `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub value: String,
    pub valid: Option<bool>,
    #[serde(serialize_with = "serialize_validator")]
    pub validator: Option<FieldKind>,
}

impl FieldOutcome {
    /// Validates `value` with the grammar registered under `field_name`.
    pub fn evaluate(field_name: &str, value: &str) -> Self {
        match FieldKind::from_field_name(field_name) {
            Some(kind) => Self::with_kind(kind, value),
            None => Self {
                value: value.to_owned(),
                valid: None,
                validator: None,
            },
        }
    }

    pub fn with_kind(kind: FieldKind, value: &str) -> Self {
        Self {
            value: value.to_owned(),
            valid: Some(kind.validate(value)),
            validator: Some(kind),
        }
    }

    pub fn validator_name(&self) -> &str {
        self.validator
            .as_ref()
            .map_or(UNKNOWN_VALIDATOR, |kind| kind.as_ref())
    }
}

fn serialize_validator<S>(validator: &Option<FieldKind>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(
        validator
            .as_ref()
            .map_or(UNKNOWN_VALIDATOR, |kind| kind.as_ref()),
    )
}

/// Field name to outcome. Holds exactly the keys that were validated.
pub type FieldBatchResult = HashMap<String, FieldOutcome>;

/// Validates every `(field name, value)` pair.
///
/// Names with a registered grammar (`email`, `phone`, `date`, `dni`,
/// `postal_code`, `url`) are validated; any other name is reported with an
/// unknown validator. A repeated name keeps its last value.
pub fn validate_all_fields<I, K, V>(fields: I) -> FieldBatchResult
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    fields
        .into_iter()
        .map(|(name, value)| {
            let name = name.into();
            let outcome = FieldOutcome::evaluate(&name, value.as_ref());
            (name, outcome)
        })
        .collect()
}

/// Everything the core can say about a piece of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// The text checked against each of the six grammars.
    pub fields: FieldBatchResult,
    pub numbers: Vec<String>,
    pub clean_text: String,
    /// Length of the text, in characters.
    pub text_length: usize,
}

pub fn extract_all(text: &str) -> ExtractionReport {
    let fields = FieldKind::iter()
        .map(|kind| (kind.to_string(), FieldOutcome::with_kind(kind, text)))
        .collect();

    ExtractionReport {
        fields,
        numbers: extract_numbers(text),
        clean_text: clean_text(text),
        text_length: text.chars().count(),
    }
}
