//! Template management use cases

use std::path::Path;

use crate::application::ApplicationError;
use crate::infrastructure::templates::TemplateExporter;

/// Use case for listing the embedded template sets
pub struct ListTemplatesUseCase<R: TemplateExporter> {
    repository: R,
}

impl<R: TemplateExporter> ListTemplatesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> String {
        let sets = self.repository.list_sets();
        if sets.is_empty() {
            return "No embedded template sets found\n".to_string();
        }

        let mut output = String::from("Available embedded template sets:\n");
        for set in sets {
            output.push_str(&format!("  {set}\n"));
        }
        output
    }
}

/// Use case for copying an embedded template set to disk for customization
pub struct ExportTemplatesUseCase<R: TemplateExporter> {
    repository: R,
}

impl<R: TemplateExporter> ExportTemplatesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, name: &str, output_dir: &Path) -> Result<usize, ApplicationError> {
        std::fs::create_dir_all(output_dir)?;
        let count = self.repository.export_set(name, output_dir)?;
        tracing::info!(
            "Exported {count} templates of '{name}' to {}",
            output_dir.display()
        );
        Ok(count)
    }
}
