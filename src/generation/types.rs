//! Core types for the generation domain
//!
//! The intermediate representation (IR) built from an API description. Every
//! node serializes to the JSON value handed to the template engine, so field
//! names here are the names templates see.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The single type tag assigned to every property and parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ResolvedType {
    /// A scalar such as `string`, `boolean` or `integer`, kept as written
    Primitive(String),
    /// `object` without further structure
    Object,
    /// `array` whose items are not a reference
    Array,
    /// No type declared
    Any,
    /// Canonical name of a referenced model
    Reference(String),
    /// Canonical name of a synthesized enum
    Enum(String),
}

impl ResolvedType {
    /// Classify a raw `type` value
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => ResolvedType::Any,
            Some("object") => ResolvedType::Object,
            Some("array") => ResolvedType::Array,
            Some(other) => ResolvedType::Primitive(other.to_string()),
        }
    }

    /// The type name this tag was resolved from, if any
    pub fn raw_name(&self) -> Option<&str> {
        match self {
            ResolvedType::Primitive(name)
            | ResolvedType::Reference(name)
            | ResolvedType::Enum(name) => Some(name),
            ResolvedType::Object => Some("object"),
            ResolvedType::Array => Some("array"),
            ResolvedType::Any => None,
        }
    }

    /// Target-language label, see [`map_type`](crate::generation::type_mapper::map_type)
    pub fn label(&self) -> String {
        crate::generation::type_mapper::map_type(self.raw_name())
    }
}

/// Elements of lists rendered by separator-sensitive templates
pub trait Terminal {
    fn set_last(&mut self, last: bool);
}

/// Flag exactly the final element of `items` as terminal
pub fn mark_last<T: Terminal>(items: &mut [T]) {
    let len = items.len();
    for (index, item) in items.iter_mut().enumerate() {
        item.set_last(index + 1 == len);
    }
}

macro_rules! impl_terminal {
    ($($ty:ty),* $(,)?) => {
        $(impl Terminal for $ty {
            fn set_last(&mut self, last: bool) {
                self.last = last;
            }
        })*
    };
}

impl_terminal!(
    ModelProperty,
    ModelDefinition,
    EnumMember,
    EnumDefinition,
    MethodParameter,
    Method
);

/// A property of a generated model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProperty {
    pub name: String,
    /// `name` as an interface key, quoted when it is not an identifier
    pub key: String,
    pub resolved: ResolvedType,
    /// Target-language type label
    pub typescript_type: String,
    pub is_array: bool,
    /// Label of the item type for plain arrays
    pub items_type: Option<String>,
    pub required: bool,
    pub description: Option<String>,
    pub last: bool,
}

/// A generated model class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDefinition {
    pub name: String,
    /// Name as written in the description
    pub raw_name: String,
    pub description: Option<String>,
    pub properties: Vec<ModelProperty>,
    pub refs: Vec<ModelProperty>,
    /// `refs` de-duplicated on resolved type, first occurrence wins
    pub ref_imports: Vec<ModelProperty>,
    pub enums: Vec<ModelProperty>,
    pub last: bool,
}

/// A single enumeration member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub value: JsonValue,
    pub last: bool,
}

/// An enumeration synthesized from an inline `enum` property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDefinition {
    pub name: String,
    /// Model that declared the property
    pub model: String,
    /// Property the enum was synthesized from
    pub property: String,
    pub required: bool,
    pub members: Vec<EnumMember>,
    pub last: bool,
}

/// A parameter of a generated client method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodParameter {
    pub name: String,
    pub camel_case_name: String,
    /// Raw `in` value
    #[serde(rename = "in")]
    pub location: String,
    pub is_body_parameter: bool,
    pub is_path_parameter: bool,
    pub is_query_parameter: bool,
    pub is_header_parameter: bool,
    pub is_pattern_type: bool,
    pub resolved: ResolvedType,
    pub typescript_type: String,
    pub convert_to_string: bool,
    pub required: bool,
    pub description: Option<String>,
    pub is_singleton: bool,
    pub singleton: Option<JsonValue>,
    pub last: bool,
}

/// A generated client method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub method_name: String,
    /// Upper-case HTTP verb
    pub method: String,
    /// Lower-case verb, as used by the HTTP client API
    pub http_method: String,
    pub path: String,
    /// Path rewritten as a template literal (`{id}` -> `${id}`)
    pub backtick_path: String,
    pub is_get: bool,
    pub has_payload: bool,
    pub has_empty_payload: bool,
    pub summary_lines: Vec<String>,
    pub is_secure: bool,
    pub has_json_response: bool,
    pub parameters: Vec<MethodParameter>,
    pub last: bool,
}

/// Root of the IR, consumed by the client and barrel templates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub description: Option<String>,
    pub title: Option<String>,
    pub is_secure: bool,
    pub is_node: bool,
    pub base_url: String,
    pub methods: Vec<Method>,
    pub definitions: Vec<ModelDefinition>,
    pub enums: Vec<EnumDefinition>,
    pub has_definitions: bool,
    pub has_enums: bool,
}

/// Templates the emitter knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Client,
    Model,
    Enum,
    ModelsExport,
}

impl TemplateId {
    pub fn all() -> [TemplateId; 4] {
        [
            TemplateId::Client,
            TemplateId::Model,
            TemplateId::Enum,
            TemplateId::ModelsExport,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Client => "client",
            TemplateId::Model => "model",
            TemplateId::Enum => "enum",
            TemplateId::ModelsExport => "models_export",
        }
    }

    /// File name of the template inside a template set
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateId::Client => "client.ts.tera",
            TemplateId::Model => "model.ts.tera",
            TemplateId::Enum => "enum.ts.tera",
            TemplateId::ModelsExport => "models_export.ts.tera",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = crate::generation::GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::all()
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                crate::generation::GenerationError::RenderError(format!(
                    "Unknown template id: {s}"
                ))
            })
    }
}

/// Generated artifact, path relative to the output directory
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}
