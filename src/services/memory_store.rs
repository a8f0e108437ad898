//! In-memory `ObjectStore` used by the test suite.
//!
//! Keeps objects in insertion order, counts every call per operation,
//! records the visibility flag of the most recent put, and can be switched
//! into a failing mode that returns a fixed provider message from all four
//! operations.

use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::services::object_store::{ObjectStore, StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<Vec<(String, Bytes)>>,
    last_put_public_read: Mutex<Option<bool>>,
    put_calls: AtomicUsize,
    list_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    presign_calls: AtomicUsize,
    failure: Option<String>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// A store pre-populated with the given keys (empty payloads).
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::default();
        {
            let mut objects = store.objects.lock().unwrap();
            for key in keys {
                objects.push((key.into(), Bytes::new()));
            }
        }
        store
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Visibility flag seen by the most recent put, if any.
    pub fn last_put_public_read(&self) -> Option<bool> {
        *self.last_put_public_read.lock().unwrap()
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn presign_calls(&self) -> usize {
        self.presign_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> StoreResult<()> {
        match &self.failure {
            Some(message) => Err(StoreError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, key: &str, data: Bytes, public_read: bool) -> StoreResult<()> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_put_public_read.lock().unwrap() = Some(public_read);
        self.check_failure()?;

        let mut objects = self.objects.lock().unwrap();
        if let Some(entry) = objects.iter_mut().find(|(k, _)| k == key) {
            entry.1 = data;
        } else {
            objects.push((key.to_string(), data));
        }
        Ok(())
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.keys())
    }

    async fn delete_object(&self, key: &str) -> StoreResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        // Deleting an absent key is fine, matching S3 semantics.
        self.objects.lock().unwrap().retain(|(k, _)| k != key);
        Ok(())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> StoreResult<String> {
        self.presign_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(format!(
            "memory://{}?X-Amz-Expires={}",
            key,
            expires_in.as_secs()
        ))
    }
}
