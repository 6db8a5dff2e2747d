//! Embedded template repository implementation

use async_trait::async_trait;
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};
use std::io;
use std::path::Path;
use tracing::debug;

use super::{
    TemplateDiscovery, TemplateError, TemplateExporter, TemplateSet, TemplateSource,
};
use crate::generation::TemplateId;

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Template repository backed by embedded templates
pub struct EmbeddedTemplateRepository;

impl EmbeddedTemplateRepository {
    pub fn new() -> Self {
        Self
    }

    fn read(path: &str) -> Result<Option<String>, TemplateError> {
        match EmbeddedTemplates::get(path) {
            None => Ok(None),
            Some(file) => String::from_utf8(file.data.into_owned())
                .map(Some)
                .map_err(|e| TemplateError::invalid(path, e.to_string())),
        }
    }
}

impl Default for EmbeddedTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateDiscovery for EmbeddedTemplateRepository {
    async fn discover(&self, name: &str) -> Result<TemplateSet, TemplateError> {
        let mut templates = HashMap::new();
        for id in TemplateId::all() {
            let path = format!("{name}/{}", id.file_name());
            let body = Self::read(&path)?.ok_or_else(|| TemplateError::not_found(&path))?;
            templates.insert(id, body);
        }

        debug!(template_set = %name, "Loaded embedded template set");
        Ok(TemplateSet::new(name, TemplateSource::Embedded, templates))
    }
}

impl TemplateExporter for EmbeddedTemplateRepository {
    fn list_sets(&self) -> Vec<String> {
        EmbeddedTemplates::iter()
            .filter_map(|path| path.split_once('/').map(|(set, _)| set.to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn export_set(&self, name: &str, output_dir: &Path) -> io::Result<usize> {
        let prefix = format!("{name}/");
        let mut exported = 0;

        for path in EmbeddedTemplates::iter() {
            let Some(relative) = path.strip_prefix(prefix.as_str()) else {
                continue;
            };
            let Some(file) = EmbeddedTemplates::get(&path) else {
                continue;
            };

            let destination = output_dir.join(relative);
            if let Some(parent) = destination.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&destination, file.data.as_ref())?;
            debug!(path = %destination.display(), "Exported template");
            exported += 1;
        }

        if exported == 0 {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Template set not found: {name}"),
            ));
        }
        Ok(exported)
    }
}
