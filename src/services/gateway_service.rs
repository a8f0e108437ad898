//! src/services/gateway_service.rs
//!
//! GatewayService — the five gateway operations (upload, list, search,
//! delete, presign) over an abstract `ObjectStore`. The service owns no
//! long-lived state beyond the store handle and the fixed bucket/region
//! configuration established at startup; every request builds and discards
//! its own working state.

use std::{sync::Arc, time::Duration};

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::services::{
    filename::sanitize_key,
    object_store::{ObjectStore, StoreError},
};

/// Validity window for presigned download links.
const PRESIGN_EXPIRY: Duration = Duration::from_secs(3600);

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The supplied filename was empty, or empty after sanitization.
    #[error("No selected file")]
    EmptyFilename,
    /// The storage provider reported a failure; the message passes through
    /// to the client verbatim.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Shared handler state: one store handle plus read-only configuration.
/// Cheap to clone; handed to every handler by the router.
#[derive(Clone)]
pub struct GatewayService {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    region: String,
    public_read_uploads: bool,
}

impl GatewayService {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        bucket: impl Into<String>,
        region: impl Into<String>,
        public_read_uploads: bool,
    ) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            region: region.into(),
            public_read_uploads,
        }
    }

    /// Public locator for an object, shared by upload/list/search responses.
    fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }

    /// Upload one object under the sanitized filename and return its
    /// public locator URL. Rejects filenames that sanitize to empty before
    /// touching the store.
    pub async fn upload_file(&self, filename: &str, data: Bytes) -> GatewayResult<String> {
        let key = sanitize_key(filename);
        if key.is_empty() {
            return Err(GatewayError::EmptyFilename);
        }

        debug!(key, size = data.len(), "uploading file");
        self.store
            .put_object(&key, data, self.public_read_uploads)
            .await?;

        Ok(self.object_url(&key))
    }

    /// Locator URLs for every key on the first listing page, in store
    /// return order.
    pub async fn list_files(&self) -> GatewayResult<Vec<String>> {
        let keys = self.store.list_keys().await?;
        Ok(keys.iter().map(|key| self.object_url(key)).collect())
    }

    /// Case-insensitive substring search over stored keys. An empty query
    /// short-circuits to an empty result without contacting the store.
    pub async fn search_files(&self, query: &str) -> GatewayResult<Vec<String>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        let keys = self.store.list_keys().await?;
        Ok(keys
            .iter()
            .filter(|key| key.to_lowercase().contains(&needle))
            .map(|key| self.object_url(key))
            .collect())
    }

    /// Delete the object under the sanitized key. Idempotent from the
    /// caller's perspective unless the provider itself errors.
    pub async fn delete_file(&self, raw_key: &str) -> GatewayResult<()> {
        let key = sanitize_key(raw_key);
        debug!(key, "deleting file");
        self.store.delete_object(&key).await?;
        Ok(())
    }

    /// Presign a download link for the sanitized key, valid for one hour.
    /// No existence check; presigning an absent key is the provider's
    /// concern.
    pub async fn presign_download(&self, raw_key: &str) -> GatewayResult<String> {
        let key = sanitize_key(raw_key);
        debug!(key, "presigning download link");
        Ok(self.store.presign_get(&key, PRESIGN_EXPIRY).await?)
    }
}
