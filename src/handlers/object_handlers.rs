//! HTTP handlers for the five gateway operations.
//!
//! Each handler validates its input, delegates to `GatewayService` for the
//! single Object Store call, and maps the result 1:1 onto the JSON
//! response shapes in `models::responses`.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State, multipart::MultipartRejection},
};
use serde::Deserialize;

use crate::{
    errors::AppError,
    models::responses::{DeleteResponse, DownloadResponse, FilesResponse, UploadResponse},
    services::gateway_service::GatewayService,
};

/// Query params accepted by `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

/// `POST /upload` — multipart form with one part named `file`.
pub async fn upload_file(
    State(service): State<GatewayService>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    // A body that is not multipart at all carries no file part; keep the
    // failure a JSON body like every other error.
    let mut multipart = multipart.map_err(|_| AppError::bad_request("No file provided"))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::bad_request("No selected file"));
        }

        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::bad_request(err.to_string()))?;

        let file_url = service.upload_file(&filename, data).await?;
        return Ok(Json(UploadResponse {
            message: "File uploaded successfully".into(),
            file_url,
        }));
    }

    Err(AppError::bad_request("No file provided"))
}

/// `GET /files` — locator URLs for every object on the first listing page.
pub async fn list_files(
    State(service): State<GatewayService>,
) -> Result<Json<FilesResponse>, AppError> {
    let files = service.list_files().await?;
    Ok(Json(FilesResponse { files }))
}

/// `GET /search?query=<q>` — case-insensitive substring match over keys.
/// An empty or absent query returns an empty list without a store call.
pub async fn search_files(
    State(service): State<GatewayService>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<FilesResponse>, AppError> {
    let query = params.query.unwrap_or_default();
    let files = service.search_files(&query).await?;
    Ok(Json(FilesResponse { files }))
}

/// `DELETE /delete/{*key}` — the wildcard keeps percent-encoded slashes
/// addressable; axum hands the segment over already decoded.
pub async fn delete_file(
    State(service): State<GatewayService>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    service.delete_file(&key).await?;
    Ok(Json(DeleteResponse {
        message: "File deleted successfully".into(),
    }))
}

/// `GET /download/{*key}` — presigned read link, valid for one hour.
pub async fn download_file(
    State(service): State<GatewayService>,
    Path(key): Path<String>,
) -> Result<Json<DownloadResponse>, AppError> {
    let download_url = service.presign_download(&key).await?;
    Ok(Json(DownloadResponse { download_url }))
}
