use async_trait::async_trait;
use axum::body::Bytes;

use super::BoxError;

/// A file received through the upload route.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub content: Bytes,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Destination of uploaded files.
#[async_trait]
pub trait UploadStore: Send + Sync {
    async fn persist(&self, file: UploadedFile) -> Result<(), BoxError>;
}

/// Logs the metadata of every upload and drops its content.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardUploadStore;

#[async_trait]
impl UploadStore for DiscardUploadStore {
    async fn persist(&self, file: UploadedFile) -> Result<(), BoxError> {
        tracing::info!(
            file_name = %file.file_name,
            content_type = ?file.content_type,
            size = file.size(),
            "File uploaded"
        );

        Ok(())
    }
}
