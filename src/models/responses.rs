//! Response payloads for every gateway endpoint.

use serde::{Deserialize, Serialize};

/// `GET /_health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// `POST /upload` success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub file_url: String,
}

/// `GET /files` and `GET /search` body: locator URLs in store order.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilesResponse {
    pub files: Vec<String>,
}

/// `DELETE /delete/{key}` success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// `GET /download/{key}` success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadResponse {
    pub download_url: String,
}
