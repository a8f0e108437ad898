//! S3 backend for the `ObjectStore` capability.
//!
//! Supports AWS S3 and S3-compatible providers (MinIO, DigitalOcean Spaces,
//! etc.) through an optional custom endpoint with path-style addressing.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    Client, config::Builder as S3ConfigBuilder, presigning::PresigningConfig,
    primitives::ByteStream, types::ObjectCannedAcl,
};
use bytes::Bytes;
use tracing::{debug, error, info};

use crate::{
    config::AppConfig,
    services::object_store::{ObjectStore, StoreError, StoreResult},
};

/// S3-backed object store scoped to one bucket.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Arc<Client>,
    bucket: String,
}

impl S3ObjectStore {
    /// Build the SDK client from gateway configuration.
    ///
    /// Uses explicit static credentials when both keys are configured,
    /// otherwise the SDK's default provider chain.
    pub async fn new(cfg: &AppConfig) -> Self {
        info!(
            bucket = %cfg.bucket,
            region = %cfg.region,
            "initializing S3 object store"
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(cfg.region.clone()));

        if let (Some(access_key), Some(secret_key)) = (&cfg.access_key, &cfg.secret_key) {
            let credentials =
                Credentials::new(access_key, secret_key, None, None, "s3-file-gateway");
            loader = loader.credentials_provider(credentials);
        }

        let aws_config = loader.load().await;
        let mut builder = S3ConfigBuilder::from(&aws_config);

        if let Some(endpoint) = &cfg.endpoint {
            debug!("using custom S3 endpoint: {}", endpoint);
            // Path-style addressing is required for MinIO and most
            // S3-compatible services.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Arc::new(Client::from_conf(builder.build())),
            bucket: cfg.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, data: Bytes, public_read: bool) -> StoreResult<()> {
        debug!(key, size = data.len(), public_read, "uploading object to S3");

        let mut req = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data));

        if public_read {
            req = req.acl(ObjectCannedAcl::PublicRead);
        }

        req.send().await.map_err(|e| {
            error!("S3 put_object failed: {}", e);
            StoreError::new(e.to_string())
        })?;

        Ok(())
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        debug!(bucket = %self.bucket, "listing objects in S3");

        let resp = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| {
                error!("S3 list_objects_v2 failed: {}", e);
                StoreError::new(e.to_string())
            })?;

        // An empty bucket comes back with no contents at all; that is an
        // empty listing, not an error.
        Ok(resp
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(str::to_string))
            .collect())
    }

    async fn delete_object(&self, key: &str) -> StoreResult<()> {
        debug!(key, "deleting object from S3");

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                error!("S3 delete_object failed: {}", e);
                StoreError::new(e.to_string())
            })?;

        Ok(())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> StoreResult<String> {
        debug!(key, expires_in_secs = expires_in.as_secs(), "presigning GET");

        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StoreError::new(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                error!("S3 presign failed: {}", e);
                StoreError::new(e.to_string())
            })?;

        Ok(presigned.uri().to_string())
    }
}
