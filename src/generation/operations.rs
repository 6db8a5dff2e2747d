//! Path operations -> client method IR
//!
//! Every operation under `paths` becomes one [`Method`], unless it takes a
//! `formData` parameter, in which case the whole operation is dropped.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::generation::definitions::claim_name;
use crate::generation::references::ReferenceResolver;
use crate::generation::type_mapper::needs_string_conversion;
use crate::generation::utils::{capitalize, normalize};
use crate::generation::{GenerationError, Method, MethodParameter, ResolvedType, mark_last};
use crate::infrastructure::openapi::{
    ApiDescription, HttpVerb, Operation, Parameter, ParameterLocation, ParameterSchema,
};

static PATH_PARAMETER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\{.*?\})").expect("path parameter pattern is valid"));

/// Classify every operation of `description`, in path then verb order.
///
/// Proxy-injected headers (`x-proxy-header`) only survive when `is_node` is set.
pub fn classify_operations(
    description: &ApiDescription,
    resolver: &ReferenceResolver,
    is_node: bool,
) -> Result<Vec<Method>, GenerationError> {
    let mut methods = Vec::new();
    let mut method_sources: HashMap<String, String> = HashMap::new();

    for item in description.paths.values() {
        for operation in &item.operations {
            let Some(method) =
                classify_operation(operation, &item.parameters, description, resolver, is_node)?
            else {
                continue;
            };

            let source = format!("{} {}", operation.verb, operation.path);
            claim_name(&mut method_sources, "methods", &method.method_name, &source)?;
            methods.push(method);
        }
    }

    debug!(methods = methods.len(), "Classified operations");
    Ok(methods)
}

/// Build the method for one operation, or `None` when it is excluded
pub fn classify_operation(
    operation: &Operation,
    shared: &[Parameter],
    description: &ApiDescription,
    resolver: &ReferenceResolver,
    is_node: bool,
) -> Result<Option<Method>, GenerationError> {
    let verb = operation.verb;
    let merged: Vec<&Parameter> = operation.parameters.iter().chain(shared).collect();

    if merged
        .iter()
        .any(|p| p.location == ParameterLocation::FormData)
    {
        debug!(verb = %verb, path = %operation.path, "Dropping operation with formData parameters");
        return Ok(None);
    }

    let (has_payload, has_empty_payload) = if merged.is_empty() {
        (false, true)
    } else {
        (verb.carries_payload(), false)
    };

    let context = format!("{verb} {}", operation.path);
    let mut parameters = Vec::with_capacity(merged.len());
    for parameter in merged {
        if parameter.is_proxy_header() && !is_node {
            debug!(parameter = %parameter.name, operation = %context, "Skipping proxy header");
            continue;
        }
        parameters.push(classify_parameter(parameter, resolver, &context)?);
    }
    mark_last(&mut parameters);

    let has_json_response = description
        .produces
        .iter()
        .chain(operation.produces.iter().flatten())
        .any(|media_type| media_type.contains("/json"));

    Ok(Some(Method {
        method_name: method_name(operation),
        method: verb.as_upper().to_string(),
        http_method: verb.as_lower().to_string(),
        path: operation.path.clone(),
        backtick_path: backtick_path(&operation.path),
        is_get: verb == HttpVerb::Get,
        has_payload,
        has_empty_payload,
        summary_lines: summary_lines(operation.description.as_deref()),
        is_secure: description.security.is_some() || operation.security.is_some(),
        has_json_response,
        parameters,
        last: false,
    }))
}

fn classify_parameter(
    parameter: &Parameter,
    resolver: &ReferenceResolver,
    operation: &str,
) -> Result<MethodParameter, GenerationError> {
    let resolved = match &parameter.schema {
        Some(ParameterSchema {
            reference: Some(reference),
            ..
        }) => {
            let context = format!("parameter '{}' of {operation}", parameter.name);
            ResolvedType::Reference(resolver.resolve(reference, &context)?)
        }
        Some(schema) if parameter.param_type.is_none() => {
            ResolvedType::from_raw(schema.schema_type.as_deref())
        }
        _ => ResolvedType::from_raw(parameter.param_type.as_deref()),
    };

    let location = &parameter.location;
    let is_query_parameter = *location == ParameterLocation::Query;
    let singleton = match parameter.enum_values.as_deref() {
        Some([only]) => Some(only.clone()),
        _ => None,
    };

    Ok(MethodParameter {
        name: parameter.name.clone(),
        camel_case_name: normalize(&parameter.name),
        location: location.as_str().to_string(),
        is_body_parameter: *location == ParameterLocation::Body,
        is_path_parameter: *location == ParameterLocation::Path,
        is_query_parameter,
        is_header_parameter: *location == ParameterLocation::Header,
        is_pattern_type: is_query_parameter && parameter.has_name_pattern(),
        typescript_type: resolved.label(),
        convert_to_string: needs_string_conversion(resolved.raw_name()),
        resolved,
        required: parameter.required,
        description: parameter.description.clone(),
        is_singleton: singleton.is_some(),
        singleton,
        last: false,
    })
}

/// Method name: vendor override verbatim, else normalized operation id,
/// else derived from verb and path
pub fn method_name(operation: &Operation) -> String {
    if let Some(name) = &operation.vendor_method_name {
        return name.clone();
    }
    match &operation.operation_id {
        Some(id) => normalize(id),
        None => path_to_method_name(operation.verb, &operation.path),
    }
}

/// Derive a method name from a verb and a path template.
///
/// # Examples
/// ```
/// use swagger2ts::generation::operations::path_to_method_name;
/// use swagger2ts::infrastructure::openapi::HttpVerb;
///
/// assert_eq!(path_to_method_name(HttpVerb::Get, "/pets/{petId}"), "getPetsByPetId");
/// assert_eq!(path_to_method_name(HttpVerb::Post, "/"), "post");
/// ```
pub fn path_to_method_name(verb: HttpVerb, path: &str) -> String {
    if path.is_empty() || path == "/" {
        return verb.as_lower().to_string();
    }

    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let segments: Vec<String> = trimmed
        .split('/')
        .skip(1)
        .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => format!("by{}", capitalize(name)),
            None => segment.to_string(),
        })
        .collect();

    format!("{}{}", verb.as_lower(), capitalize(&normalize(&segments.join("-"))))
}

/// Rewrite `{name}` placeholders as template-literal interpolations
pub fn backtick_path(path: &str) -> String {
    PATH_PARAMETER.replace_all(path, "$$${1}").into_owned()
}

/// Description lines, minus the final one
pub fn summary_lines(description: Option<&str>) -> Vec<String> {
    let Some(text) = description else {
        return Vec::new();
    };
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    lines.pop();
    lines
}
