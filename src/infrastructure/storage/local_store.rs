use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::StoragePath;

/// Upload store over any `object_store` backend. Files are written under a
/// fresh `<uuid-hex><ext>` name, so callers never control the stored path.
pub struct ObjectUploadStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectUploadStore {
    /// Stores uploads on the local disk beneath `base_path`, creating it if needed.
    pub fn local(base_path: impl Into<PathBuf>) -> Result<Self, UploadStoreError> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;
        tracing::debug!(path = %base_path.display(), "Local upload store ready");
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
        }
    }
}

#[async_trait::async_trait]
impl UploadStore for ObjectUploadStore {
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn save(&self, data: Bytes, filename: &str) -> Result<StoragePath, UploadStoreError> {
        let path = StoragePath::for_upload(filename);
        let store_path = StorePath::from(path.as_str());

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        Ok(path)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, UploadStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => UploadStoreError::NotFound(path.to_string()),
            other => UploadStoreError::DownloadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| UploadStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), UploadStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| UploadStoreError::DeleteFailed(e.to_string()))
    }
}
