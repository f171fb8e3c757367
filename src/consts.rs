//! Global constants for the application.

use std::time::Duration;

pub const HTTP_HOST: &str = "0.0.0.0"; // Default bind address.
pub const HTTP_PORT: u16 = 8080; // Default HTTP port.
pub const CORS_ORIGIN: &str = "http://localhost:4200"; // Front-end allowed in release builds.

pub const BODY_LIMIT: usize = 64 * 1024; // Maximum accepted request body, in bytes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_HOST: &str = "FIELDCHECK_HOST";
pub const ENV_PORT: &str = "FIELDCHECK_PORT";
pub const ENV_CORS_ORIGIN: &str = "FIELDCHECK_CORS_ORIGIN";

pub const WELCOME_MESSAGE: &str = "Welcome to the field pattern validation API";
