//! Type definitions for the validation system

mod field_input;

// Re-export commonly used types
pub use field_input::{Date, Dni, Email, InvalidInput, Phone, PostalCode, Url};
