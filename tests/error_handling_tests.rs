//! Tests for the rendered error responses
//!
//! These tests verify that:
//! - Every error renders its HTTP status
//! - The body is always `{ "error": <message> }`
//! - Internal failures never leak their detail

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use grubdash::prelude::*;
use serde_json::{Value, json};

async fn render(err: ApiError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, body)
}

// =============================================================================
// Rendered responses
// =============================================================================

mod into_response_tests {
    use super::*;

    #[tokio::test]
    async fn test_validation_error_renders_400() {
        let (status, body) = render(ApiError::validation("Dish must include a name")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Dish must include a name" }));
    }

    #[tokio::test]
    async fn test_not_found_renders_404() {
        let (status, body) = render(ApiError::not_found("Order", "o1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Order does not exist: o1." }));
    }

    #[tokio::test]
    async fn test_conflict_and_state_render_400() {
        let (status, _) = render(ApiError::conflict("Order id does not match route id.")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = render(ApiError::state("A delivered order cannot be changed")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "A delivered order cannot be changed");
    }

    #[tokio::test]
    async fn test_routing_errors() {
        let (status, body) = render(ApiError::RouteNotFound {
            path: "/menu".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Path not found: /menu");

        let (status, body) = render(ApiError::MethodNotAllowed {
            method: "PATCH".to_string(),
            path: "/orders".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "PATCH not allowed for /orders");
    }

    #[tokio::test]
    async fn test_internal_error_is_masked() {
        let (status, body) = render(ApiError::Internal("store offline at 10.0.0.3".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}

// =============================================================================
// Error codes
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_error_codes_distinguish_client_errors() {
        let codes = [
            ApiError::validation("x").error_code(),
            ApiError::conflict("x").error_code(),
            ApiError::state("x").error_code(),
        ];
        assert_eq!(codes, ["VALIDATION_ERROR", "ID_CONFLICT", "ILLEGAL_STATE"]);
    }

    #[test]
    fn test_anyhow_conversion_keeps_context_internally() {
        let source = anyhow::anyhow!("disk full").context("saving order");
        let err: ApiError = source.into();

        assert!(matches!(err, ApiError::Internal(_)));
        assert!(err.to_string().contains("disk full"));
        assert_eq!(err.to_response().error, "Internal server error");
    }
}
