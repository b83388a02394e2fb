use crate::core::CatalogSource;
use crate::utils::error::{AdvisorError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// 從本地 CSV 檔案讀取課程目錄
#[derive(Debug, Clone)]
pub struct LocalCatalogSource {
    path: PathBuf,
    location: String,
}

impl LocalCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl CatalogSource for LocalCatalogSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        match tokio::fs::read(&self.path).await {
            Ok(data) => Ok(data),
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
                ) =>
            {
                Err(AdvisorError::CatalogUnavailable {
                    location: self.location.clone(),
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(AdvisorError::IoError(e)),
        }
    }
}
