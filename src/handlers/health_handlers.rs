//! Health handler.
//!
//! - GET /_health -> simple liveness check

use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::models::responses::HealthResponse;

/// `GET /_health`
///
/// Very small liveness probe — always returns 200 OK with a static JSON
/// body. Never performs I/O and does not reflect Object Store
/// reachability.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            message: "OK".into(),
        }),
    )
}
