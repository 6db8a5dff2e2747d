//! swagger2ts - typed TypeScript API clients from Swagger 2.0 descriptions
//!
//! The crate is layered the same way the binary uses it:
//! - [`infrastructure::openapi`] loads and parses a description into typed records
//! - [`generation`] builds the intermediate representation and renders it
//! - [`infrastructure`] provides templates, the Tera emitter and file output
//! - [`application`] wires them into the `generate` and `inspect` use cases
#![deny(unsafe_code)]

pub mod application;
pub mod generation;
pub mod infrastructure;
