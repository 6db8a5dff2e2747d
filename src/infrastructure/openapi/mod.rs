//! API description loading and parsing

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;
pub mod parser;
pub mod types;

pub use composite_loader::CompositeDescriptionLoader;
pub use file_loader::FileDescriptionLoader;
pub use http_loader::HttpDescriptionLoader;
pub use parser::{DescriptionParser, DocumentFormat, parse_document};
pub use types::{
    ApiDescription, ApiInfo, HttpVerb, Operation, Parameter, ParameterLocation, ParameterSchema,
    PathItem, Property, SchemaDefinition,
};
