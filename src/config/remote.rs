use crate::core::CatalogSource;
use crate::utils::error::{AdvisorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 透過 HTTP(S) 下載課程目錄 CSV
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    client: Client,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Requesting course catalog from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AdvisorError::CatalogUnavailable {
                location: self.url.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            return Err(AdvisorError::CatalogUnavailable {
                location: self.url.clone(),
                reason: format!("HTTP status {}", response.status()),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
