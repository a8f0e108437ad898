//! Defines routes for the gateway's endpoints.
//!
//! ## Structure
//! - `GET    /_health`          — liveness check
//! - `POST   /upload`           — multipart upload (field `file`)
//! - `GET    /files`            — list locator URLs
//! - `GET    /search?query=<q>` — case-insensitive substring search
//! - `DELETE /delete/{*key}`    — delete object
//! - `GET    /download/{*key}`  — presigned download link
//!
//! The wildcard `*key` allows percent-encoded keys containing slashes or
//! spaces. CORS is open to any origin, matching the reference deployment.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health_handlers::health,
        object_handlers::{delete_file, download_file, list_files, search_files, upload_file},
    },
    services::gateway_service::GatewayService,
};

/// Build and return the router for all gateway routes.
///
/// The router carries shared state (`GatewayService`) to all handlers.
pub fn routes() -> Router<GatewayService> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/_health", get(health))
        .route("/upload", post(upload_file))
        .route("/files", get(list_files))
        .route("/search", get(search_files))
        .route("/delete/{*key}", delete(delete_file))
        .route("/download/{*key}", get(download_file))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
