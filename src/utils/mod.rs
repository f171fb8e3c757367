//! Validation core and shared error definitions.

pub mod error_messages;
pub mod validation;
