//! Template set types

use std::collections::HashMap;
use std::path::PathBuf;

use crate::generation::TemplateId;

/// Name of the template set used when none is requested
pub const DEFAULT_TEMPLATE_SET: &str = "angular2";

/// Where a template set was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    FileSystem(PathBuf),
}

/// The four templates needed to emit a client, keyed by id
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub name: String,
    pub source: TemplateSource,
    templates: HashMap<TemplateId, String>,
}

impl TemplateSet {
    /// Build a set from already-loaded template bodies
    pub fn new(
        name: impl Into<String>,
        source: TemplateSource,
        templates: HashMap<TemplateId, String>,
    ) -> Self {
        Self {
            name: name.into(),
            source,
            templates,
        }
    }

    pub fn get(&self, id: TemplateId) -> Option<&str> {
        self.templates.get(&id).map(String::as_str)
    }

    /// Iterate templates in [`TemplateId::all`] order
    pub fn iter(&self) -> impl Iterator<Item = (TemplateId, &str)> {
        TemplateId::all()
            .into_iter()
            .filter_map(|id| self.get(id).map(|body| (id, body)))
    }
}
