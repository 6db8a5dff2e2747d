//! HTTP-based description loader

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::parser::{DocumentFormat, parse_document};
use super::types::ApiDescription;
use crate::generation::{DescriptionLoader, GenerationError};

/// Loads API descriptions from HTTP/HTTPS URLs
pub struct HttpDescriptionLoader {
    client: Client,
}

impl HttpDescriptionLoader {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to a default HTTP client: {e}");
                Client::new()
            });

        Self { client }
    }
}

impl Default for HttpDescriptionLoader {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn is_http_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[async_trait]
impl DescriptionLoader for HttpDescriptionLoader {
    async fn load(&self, source: &str) -> Result<ApiDescription, GenerationError> {
        if !is_http_source(source) {
            return Err(GenerationError::LoadError(format!(
                "HttpDescriptionLoader only handles HTTP(S) URLs, got: {source}"
            )));
        }

        let response = self.client.get(source).send().await.map_err(|e| {
            GenerationError::LoadError(format!(
                "Failed to fetch API description from {source}: {e}"
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::LoadError(format!(
                "HTTP {status} when fetching {source}"
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let content = response.text().await.map_err(|e| {
            GenerationError::LoadError(format!("Failed to read response body: {e}"))
        })?;

        tracing::debug!(source = %source, bytes = content.len(), "Fetched API description");
        parse_document(
            &content,
            DocumentFormat::detect(source, content_type.as_deref()),
        )
    }
}
