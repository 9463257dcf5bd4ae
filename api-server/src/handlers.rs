// API handlers

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use claidcut_core::{ErrorCode, ErrorResponse, RemovalRequest, RemoveBackgroundRequest};
use edenai_client::{EdenAiClient, GatewayError};
use serde_json::json;
use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<EdenAiClient>,
}

/// GET /api/v1/health - Health check endpoint
pub async fn health(State(state): State<AppState>) -> Response {
    let health_status = json!({
        "status": "healthy",
        "service": "claidcut-api",
        "version": env!("CARGO_PKG_VERSION"),
        "providerConfigured": state.gateway.is_configured(),
    });

    (StatusCode::OK, Json(health_status)).into_response()
}

/// POST /api/v1/remove-background - Remove the background of an uploaded image
pub async fn remove_background(
    State(state): State<AppState>,
    payload: Result<Json<RemoveBackgroundRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Invalid request body: {}", rejection.body_text());
            let response = ErrorResponse::new(ErrorCode::DecodeError, Some(rejection.body_text()));
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    let request = RemovalRequest::from(payload);
    match state.gateway.remove_background(&request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => gateway_error_response(&e),
    }
}

/// Map a gateway failure onto an HTTP status and a scrubbed error body
pub fn gateway_error_response(error: &GatewayError) -> Response {
    let status = match error {
        GatewayError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GatewayError::Decode(_) => StatusCode::BAD_REQUEST,
        GatewayError::ProviderHttp { .. }
        | GatewayError::ProviderContract(_)
        | GatewayError::Network(_) => StatusCode::BAD_GATEWAY,
        GatewayError::ProviderTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
    };

    let response = ErrorResponse::new(error.to_error_code(), error.public_details());
    (status, Json(response)).into_response()
}
