//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while building the IR or rendering it
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Malformed API description: {0}")]
    MalformedDescription(String),

    #[error("Unresolvable reference '{reference}' in {context}")]
    UnresolvableReference { reference: String, context: String },

    #[error("Name collision among {namespace}: '{name}' is produced by both '{first}' and '{second}'")]
    NameCollision {
        namespace: &'static str,
        name: String,
        first: String,
        second: String,
    },

    #[error("Invalid name '{name}' produced by '{source_name}': not a TypeScript identifier")]
    InvalidName { name: String, source_name: String },

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Description loading error: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GenerationError {
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedDescription(msg.into())
    }

    pub fn unresolvable<R: Into<String>, C: Into<String>>(reference: R, context: C) -> Self {
        Self::UnresolvableReference {
            reference: reference.into(),
            context: context.into(),
        }
    }
}
