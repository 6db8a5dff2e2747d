//! Assembly of the emission-ready IR root

use tracing::info;

use crate::generation::definitions::{DefinitionOutput, transform_definitions};
use crate::generation::operations::classify_operations;
use crate::generation::references::ReferenceResolver;
use crate::generation::{GenerationError, Method, ViewModel, mark_last};
use crate::infrastructure::openapi::ApiDescription;

/// Options that shape the IR without being part of the description
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Keep proxy-injected headers and flag the client as server-side
    pub is_node: bool,
}

/// `<scheme>://<host><basePath>` when all three are known, else the host,
/// else empty
pub fn base_url(description: &ApiDescription) -> String {
    match (
        description.schemes.first(),
        description.host.as_deref(),
        description.base_path.as_deref(),
    ) {
        (Some(scheme), Some(host), Some(base_path)) => format!("{scheme}://{host}{base_path}"),
        (_, Some(host), _) => host.to_string(),
        _ => String::new(),
    }
}

/// Run both transforms and combine them into one [`ViewModel`]
pub fn build_view_model(
    description: &ApiDescription,
    options: BuildOptions,
) -> Result<ViewModel, GenerationError> {
    let resolver = ReferenceResolver::for_description(description);
    let definitions = transform_definitions(description, &resolver)?;
    let methods = classify_operations(description, &resolver, options.is_node)?;

    let view_model = assemble(description, methods, definitions, options);
    info!(
        methods = view_model.methods.len(),
        models = view_model.definitions.len(),
        enums = view_model.enums.len(),
        "Built intermediate representation"
    );
    Ok(view_model)
}

/// Combine transformer outputs and set every terminal flag
pub fn assemble(
    description: &ApiDescription,
    mut methods: Vec<Method>,
    output: DefinitionOutput,
    options: BuildOptions,
) -> ViewModel {
    let DefinitionOutput {
        models: mut definitions,
        mut enums,
    } = output;

    for method in &mut methods {
        mark_last(&mut method.parameters);
    }
    mark_last(&mut methods);

    for model in &mut definitions {
        mark_last(&mut model.properties);
        mark_last(&mut model.refs);
        mark_last(&mut model.ref_imports);
        mark_last(&mut model.enums);
    }
    mark_last(&mut definitions);

    for enum_def in &mut enums {
        mark_last(&mut enum_def.members);
    }
    mark_last(&mut enums);

    ViewModel {
        description: description.info.description.clone(),
        title: description.info.title.clone(),
        is_secure: description.security_definitions.is_some(),
        is_node: options.is_node,
        base_url: base_url(description),
        has_definitions: !definitions.is_empty(),
        has_enums: !enums.is_empty(),
        methods,
        definitions,
        enums,
    }
}
