//! Bounds shared by the field grammars

/// Maximum length of an email address, in characters
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum length of a URL host, in characters
pub const MAX_HOST_LENGTH: usize = 255;
/// Number of `@`-terminated segments a URL userinfo may carry
pub const MAX_USERINFO_SEGMENTS: usize = 2;

/// Name reported for fields that have no grammar
pub const UNKNOWN_VALIDATOR: &str = "unknown";
