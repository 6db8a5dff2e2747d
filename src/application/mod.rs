//! Application layer - orchestrates use cases and coordinates between domains

pub mod dto;
pub mod errors;
pub mod generate_client;
pub mod inspect_description;
pub mod template_management;
pub mod traits;

pub use dto::*;
pub use errors::*;
pub use generate_client::GenerateClientUseCase;
pub use inspect_description::InspectDescriptionUseCase;
pub use template_management::*;
pub use traits::*;
