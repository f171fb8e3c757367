//! Free-text helpers: number extraction, character cleaning and ad-hoc
//! pattern search.

use regex::Regex;
use serde::Serialize;

use super::patterns::{NUMBER_REGEX, SPECIAL_CHAR_REGEX};
use crate::utils::error_messages::AppError;

/// Report of a search with a caller-supplied pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatternMatchResult {
    /// Every match, in order of appearance.
    pub matches: Vec<String>,
    pub count: usize,
    /// Length of the searched text, in characters.
    pub text_length: usize,
}

/// Returns every maximal run of digits in `text`, left to right.
pub fn extract_numbers(text: &str) -> Vec<String> {
    NUMBER_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Removes every character that is not an ASCII letter, an ASCII digit or
/// whitespace. Whitespace runs are kept as they are.
pub fn clean_text(text: &str) -> String {
    SPECIAL_CHAR_REGEX.replace_all(text, "").into_owned()
}

/// Searches `text` for `pattern`.
///
/// An empty text or pattern yields the empty result without compiling
/// anything. A pattern that does not compile is an error, never "no match".
pub fn find_patterns(text: &str, pattern: &str) -> Result<PatternMatchResult, AppError> {
    if text.is_empty() || pattern.is_empty() {
        return Ok(PatternMatchResult::default());
    }

    let regex = Regex::new(pattern).map_err(|source| AppError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })?;

    let matches: Vec<String> = regex
        .find_iter(text)
        .map(|m| m.as_str().to_owned())
        .collect();

    Ok(PatternMatchResult {
        count: matches.len(),
        matches,
        text_length: text.chars().count(),
    })
}
