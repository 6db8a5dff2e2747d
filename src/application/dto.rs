//! Data Transfer Objects for application layer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::{DEFAULT_CLIENT_FILE, MODELS_EXPORT_FILE};
use crate::infrastructure::templates::DEFAULT_TEMPLATE_SET;

/// Request to generate a TypeScript client from an API description
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateClientRequest {
    /// File path or HTTP(S) URL of the description
    pub input: String,
    pub output_dir: PathBuf,
    /// Name of the dispatch class file, relative to `output_dir`
    pub client_file: String,
    /// Embedded template set, ignored when `template_dir` is set
    pub template: String,
    pub template_dir: Option<PathBuf>,
    pub is_node: bool,
}

impl GenerateClientRequest {
    /// Request with default client file name and template set
    pub fn new(input: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            client_file: DEFAULT_CLIENT_FILE.to_string(),
            template: DEFAULT_TEMPLATE_SET.to_string(),
            template_dir: None,
            is_node: false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input.trim().is_empty() {
            return Err(ValidationError::MissingField("input".to_string()));
        }

        if self.client_file.contains(['/', '\\']) {
            return Err(ValidationError::InvalidClientFile(format!(
                "'{}' must be a bare file name",
                self.client_file
            )));
        }

        if !self.client_file.ends_with(".ts") || self.client_file.len() <= ".ts".len() {
            return Err(ValidationError::InvalidClientFile(format!(
                "'{}' must end in .ts",
                self.client_file
            )));
        }

        if self.client_file == MODELS_EXPORT_FILE {
            return Err(ValidationError::InvalidClientFile(format!(
                "'{}' is reserved for the models barrel",
                self.client_file
            )));
        }

        if self.template_dir.is_none() && self.template.trim().is_empty() {
            return Err(ValidationError::MissingField("template".to_string()));
        }

        Ok(())
    }
}

/// Response from client generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateClientResponse {
    pub artifacts_count: usize,
    pub output_path: PathBuf,
    pub methods: usize,
    pub models: usize,
    pub enums: usize,
}
