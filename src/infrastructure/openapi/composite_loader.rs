//! Composite loader that picks a strategy from the shape of the source

use async_trait::async_trait;

use super::http_loader::is_http_source;
use super::types::ApiDescription;
use super::{FileDescriptionLoader, HttpDescriptionLoader};
use crate::generation::{DescriptionLoader, GenerationError};

/// Dispatches URLs to the HTTP loader and everything else to the file loader
pub struct CompositeDescriptionLoader {
    http: Box<dyn DescriptionLoader>,
    file: Box<dyn DescriptionLoader>,
}

impl CompositeDescriptionLoader {
    pub fn new() -> Self {
        Self {
            http: Box::new(HttpDescriptionLoader::new()),
            file: Box::new(FileDescriptionLoader::new()),
        }
    }
}

impl Default for CompositeDescriptionLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DescriptionLoader for CompositeDescriptionLoader {
    async fn load(&self, source: &str) -> Result<ApiDescription, GenerationError> {
        if is_http_source(source) {
            tracing::debug!("CompositeDescriptionLoader: using HTTP loader for {source}");
            self.http.load(source).await
        } else {
            tracing::debug!("CompositeDescriptionLoader: using file loader for {source}");
            self.file.load(source).await
        }
    }
}
