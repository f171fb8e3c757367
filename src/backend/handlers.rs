//! Request handlers. Every handler is a thin adapter over the validation core.

use std::collections::HashMap;

use axum::{http::StatusCode, Json};
use log::{debug, warn};

use crate::backend::models::{
    ErrorResponse, HealthResponse, MessageResponse, SearchRequest, TextRequest,
};
use crate::consts::WELCOME_MESSAGE;
use crate::utils::error_messages::PATTERN_ERROR;
use crate::utils::validation::{
    extract_all, find_patterns, registration_report, validate_all_fields, ExtractionReport,
    FieldBatchResult, PatternMatchResult, RegistrationForm, RegistrationReport,
};

/// Welcome banner
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE,
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Runs every field grammar and the text helpers over a piece of free text
pub async fn extract(Json(request): Json<TextRequest>) -> Json<ExtractionReport> {
    let text = request.text.unwrap_or_default();
    debug!("Extracting from {} characters", text.chars().count());
    Json(extract_all(&text))
}

/// Validates named fields. A null value is validated as the empty string.
pub async fn validate(
    Json(fields): Json<HashMap<String, Option<String>>>,
) -> Json<FieldBatchResult> {
    debug!("Validating {} fields", fields.len());
    Json(validate_all_fields(
        fields
            .into_iter()
            .map(|(name, value)| (name, value.unwrap_or_default())),
    ))
}

/// Searches text with a caller-supplied pattern
pub async fn search(
    Json(request): Json<SearchRequest>,
) -> Result<Json<PatternMatchResult>, (StatusCode, Json<ErrorResponse>)> {
    let text = request.text.unwrap_or_default();
    let pattern = request.pattern.unwrap_or_default();

    find_patterns(&text, &pattern).map(Json).map_err(|e| {
        warn!("Rejected search pattern: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: PATTERN_ERROR,
                detail: e.to_string(),
            }),
        )
    })
}

/// Summarises a registration form
pub async fn registration_summary(Json(form): Json<RegistrationForm>) -> Json<RegistrationReport> {
    let report = registration_report(&form);
    debug!("Registration summary: {:?}", report.summary);
    Json(report)
}
