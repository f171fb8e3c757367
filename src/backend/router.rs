//! Route configuration for the application.
//! Declares the public routes, the versioned API and the shared middleware.

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{BoxError, Router};
use http::header::CONTENT_TYPE;
use http::{Method, StatusCode};
use tower::timeout::error::Elapsed;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers::{extract, health, index, registration_summary, search, validate};
use crate::config::Config;
use crate::consts::{BODY_LIMIT, REQUEST_TIMEOUT};

/// Builds the main router and its middleware
pub fn get_router(config: &Config) -> Router {
    // Any origin is allowed in debug builds only
    let cors = if cfg!(debug_assertions) {
        CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
            .allow_origin(config.cors_origin.clone())
    };

    let service = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e: BoxError| async move {
            if e.is::<Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::BAD_REQUEST
            }
        }))
        .timeout(REQUEST_TIMEOUT);

    Router::new()
        .merge(public_routes())
        .nest("/api/v1", api_routes())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(service)
        .layer(cors)
}

fn public_routes() -> Router {
    Router::new()
        .route("/", get(index)) // Welcome banner
        .route("/health", get(health)) // Liveness probe
}

fn api_routes() -> Router {
    Router::new()
        .route("/extract", post(extract)) // Every grammar over free text
        .route("/validate", post(validate)) // Named field batch
        .route("/search", post(search)) // Caller-supplied pattern
        .route("/registration/summary", post(registration_summary)) // Form summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = get_router(&Config::default())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], crate::consts::WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_extract() {
        let (status, body) = send(post_json(
            "/api/v1/extract",
            json!({"text": "El año es 2024 y el mes es 11"}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["numbers"], json!(["2024", "11"]));
        assert_eq!(body["clean_text"], "El ao es 2024 y el mes es 11");
        for field in ["email", "phone", "date", "dni", "postal_code", "url"] {
            assert_eq!(body["fields"][field]["valid"], false, "Field {}", field);
            assert_eq!(body["fields"][field]["validator"], field);
        }
    }

    #[tokio::test]
    async fn test_extract_without_text() {
        let (status, body) = send(post_json("/api/v1/extract", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["numbers"], json!([]));
        assert_eq!(body["text_length"], 0);
    }

    #[tokio::test]
    async fn test_validate() {
        let (status, body) = send(post_json(
            "/api/v1/validate",
            json!({"email": "test@x.com", "unknown_field": "v", "phone": null}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "email": {"value": "test@x.com", "valid": true, "validator": "email"},
                "unknown_field": {"value": "v", "valid": null, "validator": "unknown"},
                "phone": {"value": "", "valid": false, "validator": "phone"},
            })
        );
    }

    #[tokio::test]
    async fn test_search() {
        let (status, body) = send(post_json(
            "/api/v1/search",
            json!({"text": "abc123def456", "pattern": "\\d+"}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"matches": ["123", "456"], "count": 2, "text_length": 12}));
    }

    #[tokio::test]
    async fn test_search_with_invalid_pattern() {
        let (status, body) = send(post_json(
            "/api/v1/search",
            json!({"text": "abc", "pattern": "(unclosed"}),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], crate::utils::error_messages::PATTERN_ERROR);
    }

    #[tokio::test]
    async fn test_registration_summary() {
        let (status, body) = send(post_json(
            "/api/v1/registration/summary",
            json!({
                "full_name": "Juan Pérez",
                "email": "juan@example.com",
                "phone": "+34600111222",
                "profession": "Engineer",
                "experience": "5",
                "postal_code": "28001",
                "portfolio_urls": ["https://github.com/juan", "not a url"],
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["summary"],
            json!({"valid": 7, "invalid": 1, "required_missing": 0, "total": 8})
        );
        assert_eq!(body["complete"], false);
        assert_eq!(body["fields"]["postal_code"]["status"], "success");
        assert_eq!(body["portfolio_urls"][1]["status"], "error");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/validate")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(request).await;

        assert!(status.is_client_error());
    }
}
