//! Compiled grammars for every supported field.
//!
//! Each grammar is written out as one literal pattern and compiled on first
//! use, then shared read-only for the lifetime of the process.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local "@" domain`.
///
/// The local part is one or more dot-separated atoms, each either an unquoted
/// run of `[A-Za-z0-9_+-]` or a double-quoted string drawn from letters,
/// digits and ``!#$%&'*+-/=?^_`{|}~.,:;<>()[ ]@\"``.
///
/// The domain is a sequence of lowercase DNS labels of 1 to 63 characters
/// (interior `_` and `-` allowed) ending in a top-level label of at least two
/// letters. Upper-case domains do not match.
pub(crate) static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r##"^(?:[A-Za-z0-9_+-]+|"[A-Za-z0-9!#$%&'*+\-/=?^_`{|}~.,:;<>()\[ \]@\\"]*")(?:\.(?:[A-Za-z0-9_+-]+|"[A-Za-z0-9!#$%&'*+\-/=?^_`{|}~.,:;<>()\[ \]@\\"]*"))*@(?:[a-z0-9](?:[a-z0-9_-]{0,61}[a-z0-9])?)(?:\.[a-z0-9](?:[a-z0-9_-]{0,61}[a-z0-9])?)*\.[a-z]{2,}$"##,
    )
    .expect("Failed to compile email regex")
});

/// `+` followed by 8 to 15 digits.
pub(crate) static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{8,15}$").expect("Failed to compile phone regex"));

/// `DD/MM/YEAR`, the year optionally negative. Digit counts only, no calendar.
pub(crate) static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/-?[0-9]+$").expect("Failed to compile date regex")
});

pub(crate) static DNI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{4,18}$").expect("Failed to compile DNI regex"));

pub(crate) static POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3,9}$").expect("Failed to compile postal code regex")
});

/// Scheme and `://`. The scheme is captured without the separator.
pub(crate) static URL_SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.-]+)://").expect("Failed to compile URL scheme regex")
});

/// One `@`-terminated userinfo segment: letters or `%XX` octets, each
/// optionally followed by `!$&(,)*+;`.
pub(crate) static URL_USERINFO_SEGMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:[A-Za-z]|%[0-9A-F]{2})[!$&(,)*+;]*)+@")
        .expect("Failed to compile URL userinfo regex")
});

/// The run of host characters starting at the authority.
pub(crate) static URL_HOST_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+").expect("Failed to compile URL host run regex"));

/// Dot-separated DNS labels, matched against a whole host run.
pub(crate) static URL_HOST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Failed to compile URL host regex")
});

/// Optional port, path and query following the host. Always matches, possibly
/// the empty string.
pub(crate) static URL_TAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?::([0-9]{1,5}))?(/[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]*)?(\?[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]*)?",
    )
    .expect("Failed to compile URL tail regex")
});

pub(crate) static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("Failed to compile number regex"));

/// Anything that is not an ASCII letter, an ASCII digit or whitespace.
pub(crate) static SPECIAL_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9\s]").expect("Failed to compile special character regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let patterns: Vec<&Lazy<Regex>> = vec![
            &EMAIL_REGEX,
            &PHONE_REGEX,
            &DATE_REGEX,
            &DNI_REGEX,
            &POSTAL_CODE_REGEX,
            &URL_SCHEME_REGEX,
            &URL_USERINFO_SEGMENT_REGEX,
            &URL_HOST_RUN_REGEX,
            &URL_HOST_REGEX,
            &URL_TAIL_REGEX,
            &NUMBER_REGEX,
            &SPECIAL_CHAR_REGEX,
        ];

        for pattern in patterns {
            assert!(!Lazy::force(pattern).as_str().is_empty());
        }
    }

    #[test]
    fn test_tail_always_matches() {
        for tail in ["", ":8080", "/a/b?c=d", "?q", " trailing"] {
            assert!(URL_TAIL_REGEX.is_match(tail), "Tail {:?} should match", tail);
        }
    }
}
