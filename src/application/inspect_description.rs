//! Use case for inspecting the IR built from a description

use std::sync::Arc;

use crate::application::ApplicationError;
use crate::generation::{BuildOptions, DescriptionLoader, ViewModel, build_view_model};

/// Loads a description and returns its IR without rendering anything
pub struct InspectDescriptionUseCase {
    loader: Arc<dyn DescriptionLoader>,
}

impl InspectDescriptionUseCase {
    pub fn new(loader: Arc<dyn DescriptionLoader>) -> Self {
        Self { loader }
    }

    pub async fn execute(
        &self,
        input: &str,
        options: BuildOptions,
    ) -> Result<ViewModel, ApplicationError> {
        let description = self.loader.load(input).await?;
        Ok(build_view_model(&description, options)?)
    }
}
