use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// In-memory staging store for tests and the mock wiring. Behaves like
/// the real store: fetch after delete fails, store is idempotent per key.
#[derive(Default)]
pub struct MemoryStagingStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects currently staged. Lets tests assert that every
    /// pipeline exit path released its temp storage.
    pub fn staged_count(&self) -> usize {
        self.objects
            .lock()
            .map(|objects| objects.len())
            .unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl StagingStore for MemoryStagingStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError> {
        let mut buffer = Vec::new();
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
        }
        let total = buffer.len() as u64;
        self.objects
            .lock()
            .map_err(|_| StagingStoreError::UploadFailed("store poisoned".to_string()))?
            .insert(path.as_str().to_string(), buffer);
        Ok(total)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        self.objects
            .lock()
            .map_err(|_| StagingStoreError::DownloadFailed("store poisoned".to_string()))?
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| StagingStoreError::NotFound(path.as_str().to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        self.objects
            .lock()
            .map_err(|_| StagingStoreError::DeleteFailed("store poisoned".to_string()))?
            .remove(path.as_str())
            .map(|_| ())
            .ok_or_else(|| StagingStoreError::NotFound(path.as_str().to_string()))
    }
}
