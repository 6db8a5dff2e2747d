//! Template repository traits for the infrastructure layer

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::infrastructure::templates::{TemplateError, TemplateSet};

/// Finds a named template set among the built-in ones
#[async_trait]
pub trait TemplateDiscovery: Send + Sync {
    async fn discover(&self, name: &str) -> Result<TemplateSet, TemplateError>;
}

/// Loads a single template set from a directory, for `--template-dir`
#[async_trait]
pub trait TemplateLoader: Send + Sync {
    async fn load_template(&self, path: &Path) -> Result<TemplateSet, TemplateError>;
}

/// Lists and exports template sets so they can be customized on disk
pub trait TemplateExporter: Send + Sync {
    /// Names of every available set, sorted
    fn list_sets(&self) -> Vec<String>;

    /// Write the files of one set into `output_dir`, returning how many were written
    fn export_set(&self, name: &str, output_dir: &Path) -> io::Result<usize>;
}
