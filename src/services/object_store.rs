//! The object-store capability the gateway depends on.
//!
//! Four operations: put, list, delete, presign. The production backend is
//! S3 (`S3ObjectStore`); tests substitute `MemoryObjectStore`.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Failure reported by the storage provider. The message is surfaced to
/// the client verbatim; no transient/permanent classification is done.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Abstract blob store addressed by key within a fixed bucket.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store the full payload under `key`, overwriting any existing object.
    /// `public_read` requests public-read visibility on the stored object.
    async fn put_object(&self, key: &str, data: Bytes, public_read: bool) -> StoreResult<()>;

    /// Return the keys of the first listing page, in provider order.
    async fn list_keys(&self) -> StoreResult<Vec<String>>;

    /// Delete the object under `key`. Deleting an absent key is not an error
    /// unless the provider itself reports one.
    async fn delete_object(&self, key: &str) -> StoreResult<()>;

    /// Generate a signed read URL for `key`, valid for `expires_in`.
    /// No existence check is performed.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> StoreResult<String>;
}
