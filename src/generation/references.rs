//! `$ref` resolution
//!
//! A reference resolves to the canonical name of the definition it points
//! at. Model properties, array items and body parameters all go through
//! [`ReferenceResolver::resolve`], so one target always yields one name.

use std::collections::HashSet;

use crate::generation::GenerationError;
use crate::generation::utils::canonical_name;
use crate::infrastructure::openapi::ApiDescription;

/// Extracts the canonical identifier from a `$ref` string.
///
/// `#/definitions/<Name>` yields `<Name>`; a bare token yields itself. Any
/// other pointer shape takes its first segment.
///
/// # Examples
/// ```
/// use swagger2ts::generation::references::resolve_ref;
///
/// assert_eq!(resolve_ref("#/definitions/pet-store"), "PetStore");
/// assert_eq!(resolve_ref("Pet"), "Pet");
/// ```
pub fn resolve_ref(reference: &str) -> String {
    let segments: Vec<&str> = reference.split('/').collect();
    let target = if segments.len() == 3 {
        segments[2]
    } else {
        segments[0]
    };
    canonical_name(target)
}

/// Resolves references against the definitions of one description
#[derive(Debug, Clone, Default)]
pub struct ReferenceResolver {
    known: HashSet<String>,
}

impl ReferenceResolver {
    /// Build a resolver over a set of canonical model names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a resolver over every definition of `description`
    pub fn for_description(description: &ApiDescription) -> Self {
        Self::new(description.definitions.keys().map(|raw| canonical_name(raw)))
    }

    /// Resolve `reference`, failing when it does not name a known definition.
    /// `context` describes where the reference appeared, for the error message.
    pub fn resolve(&self, reference: &str, context: &str) -> Result<String, GenerationError> {
        let name = resolve_ref(reference);
        if self.known.contains(&name) {
            Ok(name)
        } else {
            Err(GenerationError::unresolvable(reference, context))
        }
    }
}
