//! Generation orchestration - renders every IR node to an artifact

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use crate::generation::{Artifact, Emitter, GenerationError, TemplateId, ViewModel};

/// Directory holding one file per model
pub const MODELS_DIR: &str = "models";
/// Directory holding one file per enum
pub const ENUMS_DIR: &str = "enums";
/// Barrel module re-exporting every model and enum
pub const MODELS_EXPORT_FILE: &str = "models.ts";
/// Default name of the dispatch class file
pub const DEFAULT_CLIENT_FILE: &str = "client.ts";

/// One pending render: template, serialized node and target path
struct RenderJob {
    template: TemplateId,
    context: serde_json::Value,
    path: PathBuf,
}

/// Turns a [`ViewModel`] into the full artifact set
pub struct GenerationOrchestrator {
    emitter: Arc<dyn Emitter>,
}

impl GenerationOrchestrator {
    pub fn new(emitter: Arc<dyn Emitter>) -> Self {
        Self { emitter }
    }

    /// Render every artifact.
    ///
    /// Each artifact is attempted even after a failure; if any fail the
    /// whole call fails, so nothing is handed to the writer.
    pub fn render_all(
        &self,
        view_model: &ViewModel,
        client_file: &str,
    ) -> Result<Vec<Artifact>, GenerationError> {
        let jobs = plan(view_model, client_file)?;
        let total = jobs.len();

        let mut artifacts = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for job in jobs {
            match self.emitter.render(job.template, &job.context) {
                Ok(content) => {
                    debug!(path = %job.path.display(), template = %job.template, "Rendered artifact");
                    artifacts.push(Artifact {
                        path: job.path,
                        content,
                    });
                }
                Err(e) => {
                    error!(path = %job.path.display(), template = %job.template, "Failed to render artifact: {e}");
                    failures.push(format!("{}: {e}", job.path.display()));
                }
            }
        }

        if !failures.is_empty() {
            return Err(GenerationError::RenderError(format!(
                "{} of {total} artifact(s) failed to render; first failure: {}",
                failures.len(),
                failures[0]
            )));
        }

        Ok(artifacts)
    }
}

fn plan(view_model: &ViewModel, client_file: &str) -> Result<Vec<RenderJob>, GenerationError> {
    let mut jobs = Vec::with_capacity(view_model.definitions.len() + view_model.enums.len() + 2);

    jobs.push(job(TemplateId::Client, view_model, PathBuf::from(client_file))?);

    for model in &view_model.definitions {
        let path = PathBuf::from(MODELS_DIR).join(format!("{}.ts", model.name));
        jobs.push(job(TemplateId::Model, model, path)?);
    }

    for enum_def in &view_model.enums {
        let path = PathBuf::from(ENUMS_DIR).join(format!("{}.ts", enum_def.name));
        jobs.push(job(TemplateId::Enum, enum_def, path)?);
    }

    jobs.push(job(
        TemplateId::ModelsExport,
        view_model,
        PathBuf::from(MODELS_EXPORT_FILE),
    )?);

    Ok(jobs)
}

fn job<T: Serialize>(
    template: TemplateId,
    node: &T,
    path: PathBuf,
) -> Result<RenderJob, GenerationError> {
    Ok(RenderJob {
        template,
        context: serde_json::to_value(node)?,
        path,
    })
}
