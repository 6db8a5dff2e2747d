//! Filesystem-based template loader
//!
//! Loads a single template set from a directory on the filesystem, typically
//! specified via the --template-dir CLI flag. The directory must contain the
//! same four file names as the embedded sets.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

use crate::generation::TemplateId;
use crate::infrastructure::templates::{TemplateError, TemplateLoader, TemplateSet, TemplateSource};

/// Template loader that loads a single template set from filesystem
pub struct FileSystemTemplateLoader;

impl FileSystemTemplateLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemTemplateLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateLoader for FileSystemTemplateLoader {
    async fn load_template(&self, path: &Path) -> Result<TemplateSet, TemplateError> {
        if !path.is_dir() {
            return Err(TemplateError::not_found(path.to_string_lossy()));
        }

        let mut templates = HashMap::new();
        for id in TemplateId::all() {
            let file = path.join(id.file_name());
            if !file.is_file() {
                return Err(TemplateError::not_found(file.to_string_lossy()));
            }
            templates.insert(id, fs::read_to_string(&file).await?);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());

        tracing::debug!(template_dir = %path.display(), "Loaded template set from disk");
        Ok(TemplateSet::new(
            name,
            TemplateSource::FileSystem(path.to_path_buf()),
            templates,
        ))
    }
}
