//! Request and response bodies of the API.

use serde::{Deserialize, Serialize};

/// Body of `/extract`. A missing or null text is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of `/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub detail: String,
}
