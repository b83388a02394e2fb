use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the course catalog bytes come from (local file, HTTP endpoint, ...).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human readable location used in logs and error messages.
    fn location(&self) -> &str;

    /// Reads the raw catalog. An unreachable source maps to `CatalogUnavailable`.
    async fn fetch(&self) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_source(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn alternative_gap(&self) -> u8;
    fn skills_preview(&self) -> usize;
}
