//! Represents all possible errors in the application

use thiserror::Error;

pub const PATTERN_ERROR: &str = "Invalid search pattern";

/// Errors surfaced to callers. Invalid field values are never errors; only a
/// caller-supplied pattern that does not compile is.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("pattern `{pattern}` does not compile: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
