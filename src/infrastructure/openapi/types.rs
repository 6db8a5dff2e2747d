//! Typed records for a Swagger 2.0 API description
//!
//! The raw document is deserialized into these records exactly once, by
//! [`DescriptionParser`](super::parser::DescriptionParser). Every optional
//! field is explicit; nothing downstream probes untyped JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Root of an API description document
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiDescription {
    pub info: ApiInfo,
    pub host: Option<String>,
    pub base_path: Option<String>,
    pub schemes: Vec<String>,
    pub security_definitions: Option<JsonValue>,
    pub security: Option<JsonValue>,
    pub produces: Vec<String>,
    /// Path template -> path item, in document order
    pub paths: IndexMap<String, PathItem>,
    /// Raw schema name -> definition, in document order
    pub definitions: IndexMap<String, SchemaDefinition>,
}

/// API information block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiInfo {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Everything declared under a single path template
#[derive(Debug, Clone, Default, Serialize)]
pub struct PathItem {
    /// Parameters shared by every operation of this path
    pub parameters: Vec<Parameter>,
    /// Recognized operations, in document order
    pub operations: Vec<Operation>,
}

/// HTTP verbs that become client methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpVerb {
    /// Parse a path-item key; anything outside the recognized set is `None`
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpVerb::Get),
            "POST" => Some(HttpVerb::Post),
            "PUT" => Some(HttpVerb::Put),
            "DELETE" => Some(HttpVerb::Delete),
            "PATCH" => Some(HttpVerb::Patch),
            _ => None,
        }
    }

    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
        }
    }

    pub fn as_lower(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Delete => "delete",
            HttpVerb::Patch => "patch",
        }
    }

    /// Whether requests with this verb carry a body by default.
    /// GET, DELETE and HEAD never do; HEAD is not a recognized verb at all.
    pub fn carries_payload(&self) -> bool {
        !matches!(self, HttpVerb::Get | HttpVerb::Delete)
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

/// A single operation (path + verb)
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    pub verb: HttpVerb,
    pub path: String,
    pub operation_id: Option<String>,
    /// `x-swagger-js-method-name` override, used verbatim
    pub vendor_method_name: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// The operation's own parameters (shared ones are merged later)
    pub parameters: Vec<Parameter>,
    pub security: Option<JsonValue>,
    pub produces: Option<Vec<String>>,
}

/// Operation fields as they appear in the document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawOperation {
    pub operation_id: Option<String>,
    #[serde(rename = "x-swagger-js-method-name")]
    pub vendor_method_name: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub security: Option<JsonValue>,
    pub produces: Option<Vec<String>>,
}

/// Where a parameter travels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterLocation {
    Body,
    Path,
    Query,
    Header,
    FormData,
    /// Any `in` value outside the set above, kept verbatim
    Other(String),
}

impl ParameterLocation {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterLocation::Body => "body",
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Other(raw) => raw,
        }
    }
}

impl From<String> for ParameterLocation {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "body" => ParameterLocation::Body,
            "path" => ParameterLocation::Path,
            "query" => ParameterLocation::Query,
            "header" => ParameterLocation::Header,
            "formData" => ParameterLocation::FormData,
            _ => ParameterLocation::Other(raw),
        }
    }
}

impl From<ParameterLocation> for String {
    fn from(location: ParameterLocation) -> Self {
        location.as_str().to_string()
    }
}

/// Operation parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(rename = "type")]
    pub param_type: Option<String>,
    pub format: Option<String>,
    pub schema: Option<ParameterSchema>,
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<JsonValue>>,
    #[serde(rename = "x-name-pattern")]
    pub name_pattern: Option<JsonValue>,
    #[serde(rename = "x-proxy-header")]
    pub proxy_header: Option<JsonValue>,
}

impl Parameter {
    /// `x-name-pattern` is set to a truthy value
    pub fn has_name_pattern(&self) -> bool {
        is_truthy(self.name_pattern.as_ref())
    }

    /// `x-proxy-header` is set to a truthy value
    pub fn is_proxy_header(&self) -> bool {
        is_truthy(self.proxy_header.as_ref())
    }
}

/// Nested `schema` of a body parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
}

/// A named schema under `definitions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDefinition {
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    pub description: Option<String>,
    /// Property name -> property, in document order
    pub properties: Option<IndexMap<String, Property>>,
    pub required: Option<Vec<String>>,
}

impl SchemaDefinition {
    pub fn is_required(&self, property: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == property))
    }
}

/// A schema property (also used for array `items`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    pub format: Option<String>,
    pub items: Option<Box<Property>>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<JsonValue>>,
    pub description: Option<String>,
}

impl Property {
    pub fn is_array(&self) -> bool {
        self.schema_type.as_deref() == Some("array")
    }

    /// `$ref` of the array items, when this is an array of references
    pub fn item_reference(&self) -> Option<&str> {
        if !self.is_array() {
            return None;
        }
        self.items.as_ref()?.reference.as_deref()
    }
}

fn is_truthy(value: Option<&JsonValue>) -> bool {
    match value {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(_) => true,
    }
}
