use bytes::Bytes;

use crate::domain::StoragePath;

/// Keeps the original upload. The audit pipeline only writes to it.
#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    async fn save(&self, data: Bytes, filename: &str) -> Result<StoragePath, UploadStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, UploadStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
