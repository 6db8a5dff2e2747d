//! File-based description loader
//!
//! This loader handles only file I/O. The actual parsing is done by the DescriptionParser.

use async_trait::async_trait;
use tokio::fs;

use super::parser::{DocumentFormat, parse_document};
use super::types::ApiDescription;
use crate::generation::{DescriptionLoader, GenerationError};

/// Loads API descriptions from local files
pub struct FileDescriptionLoader;

impl FileDescriptionLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileDescriptionLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DescriptionLoader for FileDescriptionLoader {
    async fn load(&self, source: &str) -> Result<ApiDescription, GenerationError> {
        let content = fs::read_to_string(source).await.map_err(|e| {
            GenerationError::LoadError(format!("Failed to read {source}: {e}"))
        })?;

        parse_document(&content, DocumentFormat::detect(source, None))
    }
}
