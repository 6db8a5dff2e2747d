//! Generation domain module - turns an API description into client artifacts
//!
//! The pipeline is synchronous over an already-loaded [`ApiDescription`]:
//! definitions and operations are transformed independently, assembled into a
//! [`ViewModel`], then every node is rendered through an [`Emitter`].
//!
//! [`ApiDescription`]: crate::infrastructure::openapi::ApiDescription

pub mod definitions;
pub mod errors;
pub mod operations;
pub mod orchestrator;
pub mod references;
pub mod traits;
pub mod type_mapper;
pub mod types;
pub mod utils;
pub mod view_model;

pub use errors::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
pub use view_model::{BuildOptions, build_view_model};
