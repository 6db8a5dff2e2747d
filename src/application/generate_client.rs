//! Use case for generating a TypeScript client

use std::sync::Arc;

use tracing::info;

use crate::application::{
    ApplicationError, GenerateClientRequest, GenerateClientResponse, OutputService,
};
use crate::generation::{
    BuildOptions, DescriptionLoader, GenerationOrchestrator, build_view_model,
};
use crate::infrastructure::generation::TeraEmitter;
use crate::infrastructure::templates::{TemplateDiscovery, TemplateLoader, TemplateSet};

/// Use case for generating client artifacts from an API description
pub struct GenerateClientUseCase {
    loader: Arc<dyn DescriptionLoader>,
    template_discovery: Arc<dyn TemplateDiscovery>,
    template_loader: Arc<dyn TemplateLoader>,
    output_service: Arc<dyn OutputService>,
}

impl GenerateClientUseCase {
    pub fn new(
        loader: Arc<dyn DescriptionLoader>,
        template_discovery: Arc<dyn TemplateDiscovery>,
        template_loader: Arc<dyn TemplateLoader>,
        output_service: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            loader,
            template_discovery,
            template_loader,
            output_service,
        }
    }

    pub async fn execute(
        &self,
        request: GenerateClientRequest,
    ) -> Result<GenerateClientResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Load and build the IR before touching the output directory
        info!("Loading API description from {}", request.input);
        let description = self.loader.load(&request.input).await?;
        let view_model = build_view_model(
            &description,
            BuildOptions {
                is_node: request.is_node,
            },
        )?;

        // 3. Render every artifact
        let templates = self.resolve_templates(&request).await?;
        info!("Rendering with template set '{}'", templates.name);
        let orchestrator = GenerationOrchestrator::new(Arc::new(TeraEmitter::new(&templates)?));
        let mut artifacts = orchestrator.render_all(&view_model, &request.client_file)?;

        // 4. Prepend output directory to artifact paths and write
        self.output_service
            .ensure_directory(&request.output_dir)
            .await?;
        for artifact in &mut artifacts {
            artifact.path = request.output_dir.join(&artifact.path);
        }
        self.output_service.write_artifacts(&artifacts).await?;

        info!(
            "Generated {} files in {}",
            artifacts.len(),
            request.output_dir.display()
        );

        Ok(GenerateClientResponse {
            artifacts_count: artifacts.len(),
            output_path: request.output_dir,
            methods: view_model.methods.len(),
            models: view_model.definitions.len(),
            enums: view_model.enums.len(),
        })
    }

    async fn resolve_templates(
        &self,
        request: &GenerateClientRequest,
    ) -> Result<TemplateSet, ApplicationError> {
        let set = match &request.template_dir {
            Some(dir) => self.template_loader.load_template(dir).await?,
            None => self.template_discovery.discover(&request.template).await?,
        };
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ValidationError;
    use crate::generation::{Artifact, GenerationError};
    use crate::infrastructure::openapi::{ApiDescription, DescriptionParser};
    use crate::infrastructure::templates::{
        EmbeddedTemplateRepository, FileSystemTemplateLoader,
    };
    use serde_json::{Value as JsonValue, json};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    struct StaticLoader(JsonValue);

    #[async_trait::async_trait]
    impl DescriptionLoader for StaticLoader {
        async fn load(&self, _source: &str) -> Result<ApiDescription, GenerationError> {
            DescriptionParser::new(self.0.clone()).parse()
        }
    }

    #[derive(Default)]
    struct RecordingOutputService {
        written: Mutex<Vec<Artifact>>,
    }

    #[async_trait::async_trait]
    impl OutputService for RecordingOutputService {
        async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError> {
            self.written.lock().unwrap().extend_from_slice(artifacts);
            Ok(())
        }

        async fn ensure_directory(&self, _path: &Path) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    fn use_case(
        description: JsonValue,
        output: Arc<RecordingOutputService>,
    ) -> GenerateClientUseCase {
        GenerateClientUseCase::new(
            Arc::new(StaticLoader(description)),
            Arc::new(EmbeddedTemplateRepository::new()),
            Arc::new(FileSystemTemplateLoader::new()),
            output,
        )
    }

    fn petstore() -> JsonValue {
        json!({
            "info": {"title": "Pets"},
            "paths": {
                "/pets": {"get": {"operationId": "listPets"}},
                "/pets/upload": {"post": {"parameters": [
                    {"name": "file", "in": "formData", "type": "file"}
                ]}}
            },
            "definitions": {
                "Pet": {"properties": {"status": {"enum": ["available"]}}}
            }
        })
    }

    #[tokio::test]
    async fn test_execute_success() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(petstore(), output.clone());

        let response = use_case
            .execute(GenerateClientRequest::new("petstore.json", "/output"))
            .await
            .unwrap();

        assert_eq!(response.artifacts_count, 4);
        assert_eq!(response.methods, 1);
        assert_eq!(response.models, 1);
        assert_eq!(response.enums, 1);

        let paths: Vec<PathBuf> = output
            .written
            .lock()
            .unwrap()
            .iter()
            .map(|a| a.path.clone())
            .collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/output/client.ts"),
                PathBuf::from("/output/models/Pet.ts"),
                PathBuf::from("/output/enums/PetStatus.ts"),
                PathBuf::from("/output/models.ts"),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(petstore(), output.clone());

        let mut request = GenerateClientRequest::new("petstore.json", "/output");
        request.client_file = "client.js".to_string();

        let err = use_case.execute(request).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::ValidationError(ValidationError::InvalidClientFile(_))
        ));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_reference_writes_nothing() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(
            json!({
                "info": {},
                "paths": {},
                "definitions": {"Pet": {"properties": {"owner": {"$ref": "#/definitions/Owner"}}}}
            }),
            output.clone(),
        );

        let err = use_case
            .execute(GenerateClientRequest::new("petstore.json", "/output"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::GenerationError(GenerationError::UnresolvableReference { .. })
        ));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_render_failure_writes_nothing() {
        let template_dir = tempfile::TempDir::new().unwrap();
        for (file, body) in [
            ("client.ts.tera", "// client"),
            ("model.ts.tera", "{{ missing_variable }}"),
            ("enum.ts.tera", "// enum"),
            ("models_export.ts.tera", "// barrel"),
        ] {
            std::fs::write(template_dir.path().join(file), body).unwrap();
        }

        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(petstore(), output.clone());

        let mut request = GenerateClientRequest::new("petstore.json", "/output");
        request.template_dir = Some(template_dir.path().to_path_buf());

        let err = use_case.execute(request).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::GenerationError(GenerationError::RenderError(_))
        ));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_template_set() {
        let output = Arc::new(RecordingOutputService::default());
        let use_case = use_case(petstore(), output);

        let mut request = GenerateClientRequest::new("petstore.json", "/output");
        request.template = "vue".to_string();

        let err = use_case.execute(request).await.unwrap_err();
        assert!(matches!(err, ApplicationError::TemplateError(_)));
    }
}
