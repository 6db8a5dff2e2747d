//! Swagger 2.0 description parser
//!
//! Ingests the raw JSON document into the typed records of
//! [`types`](super::types). Parameter `$ref`s (`#/parameters/<Name>`) are
//! resolved here so downstream code only ever sees concrete parameters.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::types::{
    ApiDescription, ApiInfo, HttpVerb, Operation, Parameter, PathItem, RawOperation,
    SchemaDefinition,
};
use crate::generation::GenerationError;

/// Root fields as they appear in the document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescription {
    info: ApiInfo,
    host: Option<String>,
    base_path: Option<String>,
    #[serde(default)]
    schemes: Vec<String>,
    security_definitions: Option<JsonValue>,
    security: Option<JsonValue>,
    #[serde(default)]
    produces: Vec<String>,
    paths: IndexMap<String, JsonValue>,
    #[serde(default)]
    definitions: IndexMap<String, SchemaDefinition>,
}

/// Parser over one raw description document
pub struct DescriptionParser {
    json: JsonValue,
}

impl DescriptionParser {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse the whole document, failing on the first malformed node
    pub fn parse(&self) -> Result<ApiDescription, GenerationError> {
        if !self.json.is_object() {
            return Err(GenerationError::malformed("document root is not an object"));
        }

        let raw: RawDescription = decode(self.json.clone(), "document root")?;

        let mut paths = IndexMap::with_capacity(raw.paths.len());
        for (path, item) in &raw.paths {
            paths.insert(path.clone(), self.parse_path_item(path, item)?);
        }

        let operation_count: usize = paths.values().map(|p: &PathItem| p.operations.len()).sum();
        tracing::debug!(
            paths = paths.len(),
            operations = operation_count,
            definitions = raw.definitions.len(),
            "Parsed API description"
        );

        Ok(ApiDescription {
            info: raw.info,
            host: raw.host,
            base_path: raw.base_path,
            schemes: raw.schemes,
            security_definitions: raw.security_definitions,
            security: raw.security,
            produces: raw.produces,
            paths,
            definitions: raw.definitions,
        })
    }

    fn parse_path_item(&self, path: &str, item: &JsonValue) -> Result<PathItem, GenerationError> {
        let entries = item
            .as_object()
            .ok_or_else(|| GenerationError::malformed(format!("path '{path}' is not an object")))?;

        let mut path_item = PathItem::default();
        for (key, value) in entries {
            if key.eq_ignore_ascii_case("parameters") {
                let context = format!("shared parameters of '{path}'");
                path_item.parameters = self.parse_parameters(value, &context)?;
                continue;
            }

            let Some(verb) = HttpVerb::from_key(key) else {
                tracing::trace!(path = %path, key = %key, "Ignoring path item key");
                continue;
            };
            path_item
                .operations
                .push(self.parse_operation(verb, path, value)?);
        }

        Ok(path_item)
    }

    fn parse_operation(
        &self,
        verb: HttpVerb,
        path: &str,
        value: &JsonValue,
    ) -> Result<Operation, GenerationError> {
        let context = format!("{verb} {path}");
        if !value.is_object() {
            return Err(GenerationError::malformed(format!(
                "operation {context} is not an object"
            )));
        }

        let raw: RawOperation = decode(value.clone(), &format!("operation {context}"))?;
        let parameters = match value.get("parameters") {
            Some(list) if list.is_array() => {
                self.parse_parameters(list, &format!("parameters of {context}"))?
            }
            _ => Vec::new(),
        };

        Ok(Operation {
            verb,
            path: path.to_string(),
            operation_id: raw.operation_id,
            vendor_method_name: raw.vendor_method_name,
            summary: raw.summary,
            description: raw.description,
            parameters,
            security: raw.security,
            produces: raw.produces,
        })
    }

    fn parse_parameters(
        &self,
        value: &JsonValue,
        context: &str,
    ) -> Result<Vec<Parameter>, GenerationError> {
        let list = value
            .as_array()
            .ok_or_else(|| GenerationError::malformed(format!("{context} is not a list")))?;

        list.iter()
            .map(|param| {
                let param = match param.get("$ref").and_then(JsonValue::as_str) {
                    Some(reference) => self.resolve_ref(reference, context)?,
                    None => param.clone(),
                };
                decode(param, context)
            })
            .collect()
    }

    /// Follow a local JSON pointer reference
    fn resolve_ref(&self, reference: &str, context: &str) -> Result<JsonValue, GenerationError> {
        reference
            .strip_prefix('#')
            .and_then(|pointer| self.json.pointer(pointer))
            .cloned()
            .ok_or_else(|| GenerationError::unresolvable(reference, context))
    }
}

/// Serialization of a description document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    /// Try JSON first, then YAML
    Sniff,
}

impl DocumentFormat {
    /// Pick a format from a file name or URL, and an optional media type
    pub fn detect(source: &str, content_type: Option<&str>) -> Self {
        let content_type = content_type.unwrap_or_default();
        if content_type.contains("json") || source.ends_with(".json") {
            DocumentFormat::Json
        } else if content_type.contains("yaml")
            || source.ends_with(".yaml")
            || source.ends_with(".yml")
        {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Sniff
        }
    }
}

/// Decode raw text and parse it into an [`ApiDescription`]
pub fn parse_document(
    content: &str,
    format: DocumentFormat,
) -> Result<ApiDescription, GenerationError> {
    let json: JsonValue = match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| GenerationError::malformed(format!("invalid JSON: {e}")))?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| GenerationError::malformed(format!("invalid YAML: {e}")))?,
        DocumentFormat::Sniff => serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| GenerationError::malformed(format!("unrecognized document: {e}")))?,
    };
    DescriptionParser::new(json).parse()
}

fn decode<T: DeserializeOwned>(value: JsonValue, context: &str) -> Result<T, GenerationError> {
    serde_json::from_value(value)
        .map_err(|e| GenerationError::malformed(format!("{context}: {e}")))
}
