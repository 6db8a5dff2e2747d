//! Tera-based emitter implementation

use serde_json::Value as JsonValue;
use tera::{Context, Tera};

use crate::generation::{Emitter, GenerationError, TemplateId};
use crate::infrastructure::templates::TemplateSet;

/// Renders IR nodes with the templates of one [`TemplateSet`]
pub struct TeraEmitter {
    tera: Tera,
}

impl TeraEmitter {
    /// Compile every template of `set`. Output is TypeScript, so autoescaping is off.
    pub fn new(set: &TemplateSet) -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        for (id, body) in set.iter() {
            tera.add_raw_template(id.file_name(), body).map_err(|e| {
                GenerationError::RenderError(format!(
                    "Failed to add template {}: {}",
                    id.file_name(),
                    describe(&e)
                ))
            })?;
        }

        Ok(Self { tera })
    }
}

impl Emitter for TeraEmitter {
    fn render(&self, template: TemplateId, context: &JsonValue) -> Result<String, GenerationError> {
        let context = Context::from_value(context.clone()).map_err(|e| {
            GenerationError::RenderError(format!("Invalid context for {template}: {e}"))
        })?;

        self.tera
            .render(template.file_name(), &context)
            .map_err(|e| {
                GenerationError::RenderError(format!(
                    "Failed to render template {}: {}",
                    template.file_name(),
                    describe(&e)
                ))
            })
    }
}

/// Tera nests the useful message in the error source chain
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
