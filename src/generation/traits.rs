//! Port interfaces for the generation domain

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::generation::{GenerationError, TemplateId};
use crate::infrastructure::openapi::ApiDescription;

/// Renders one IR node through a template and returns the text verbatim
pub trait Emitter: Send + Sync {
    fn render(&self, template: TemplateId, context: &JsonValue) -> Result<String, GenerationError>;
}

/// Loads API descriptions
#[async_trait]
pub trait DescriptionLoader: Send + Sync {
    /// Load and parse a description from a file path or URL
    async fn load(&self, source: &str) -> Result<ApiDescription, GenerationError>;
}
