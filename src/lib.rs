//! Structured field validation: hand-built grammars for email, phone, date,
//! DNI, postal code and URL values, text helpers, and the HTTP API serving
//! them.

pub mod backend;
pub mod config;
pub mod consts;
pub mod utils;

pub use utils::validation;
