//! Waitlist API endpoints
//!
//! - POST /api/waitlist - Join the waitlist
//! - any other method   - 405 Method Not Allowed

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use std::sync::Arc;

use crate::core::waitlist::{SignupRequest, WaitlistError, WaitlistService};

/// Message returned for a successful signup
pub const JOIN_SUCCESS_MESSAGE: &str = "Successfully joined the waitlist!";

/// Message returned for unsupported methods
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed. Use POST to join the waitlist.";

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Convert WaitlistError to API response
impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        let status = match &self {
            WaitlistError::Validation(_)
            | WaitlistError::InvalidBody
            | WaitlistError::DuplicateEmail => StatusCode::BAD_REQUEST,
            WaitlistError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ApiError::new(self.to_string()))).into_response()
    }
}

/// Response for a successful signup
#[derive(Debug, Serialize)]
pub struct JoinResponse {
    pub success: bool,
    pub message: String,
}

/// Create the waitlist API router
pub fn waitlist_router(service: WaitlistService) -> Router {
    let state = Arc::new(service);

    Router::new()
        .route(
            "/api/waitlist",
            post(join_handler).fallback(method_not_allowed_handler),
        )
        .with_state(state)
}

/// POST /api/waitlist
async fn join_handler(
    State(service): State<Arc<WaitlistService>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<JoinResponse>, WaitlistError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected waitlist body: {}", rejection);
        WaitlistError::InvalidBody
    })?;

    let placement = service.submit(request).await?;

    tracing::info!(
        "Waitlist signup accepted: position={}, early_bird={}",
        placement.position,
        placement.early_bird
    );

    Ok(Json(JoinResponse {
        success: true,
        message: JOIN_SUCCESS_MESSAGE.to_string(),
    }))
}

async fn method_not_allowed_handler() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiError::new(METHOD_NOT_ALLOWED_MESSAGE)),
    )
        .into_response()
}
