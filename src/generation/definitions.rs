//! Schema definitions -> model and enum IR

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::generation::references::ReferenceResolver;
use crate::generation::type_mapper::map_type;
use crate::generation::utils::{
    canonical_name, capitalize, is_identifier, member_identifier, normalize, property_key,
};
use crate::generation::{
    EnumDefinition, EnumMember, GenerationError, ModelDefinition, ModelProperty, ResolvedType,
    mark_last,
};
use crate::infrastructure::openapi::{ApiDescription, Property, SchemaDefinition};

/// Models and enums produced from the `definitions` section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionOutput {
    pub models: Vec<ModelDefinition>,
    pub enums: Vec<EnumDefinition>,
}

/// The bucket a property lands in
#[derive(Debug, Clone, PartialEq)]
enum PropertyKind<'a> {
    Reference(&'a str),
    Enum(&'a [JsonValue]),
    Plain,
}

fn classify(property: &Property) -> PropertyKind<'_> {
    if let Some(reference) = property
        .reference
        .as_deref()
        .or_else(|| property.item_reference())
    {
        return PropertyKind::Reference(reference);
    }
    match &property.enum_values {
        Some(literals) => PropertyKind::Enum(literals),
        None => PropertyKind::Plain,
    }
}

/// Transform every definition of `description`, in document order.
///
/// Fails on the first unresolvable reference, on any model or enum name that
/// is not a TypeScript identifier, and on any two names that collide. Models
/// and enums share the barrel module, so an enum may not take a model's name.
pub fn transform_definitions(
    description: &ApiDescription,
    resolver: &ReferenceResolver,
) -> Result<DefinitionOutput, GenerationError> {
    let mut output = DefinitionOutput::default();
    let mut model_sources: HashMap<String, String> = HashMap::new();
    let mut enum_sources: HashMap<String, String> = HashMap::new();

    for (raw_name, definition) in &description.definitions {
        let (model, enums) = transform_definition(raw_name, definition, resolver)?;

        ensure_identifier(&model.name, raw_name)?;
        claim_name(&mut model_sources, "models", &model.name, raw_name)?;
        for enum_def in &enums {
            let source = format!("{raw_name}.{}", enum_def.property);
            ensure_identifier(&enum_def.name, &source)?;
            claim_name(&mut enum_sources, "enums", &enum_def.name, &source)?;
        }

        output.models.push(model);
        output.enums.extend(enums);
    }

    // Checked once every model name is known
    for enum_def in &output.enums {
        if let Some(model_source) = model_sources.get(&enum_def.name) {
            return Err(GenerationError::NameCollision {
                namespace: "types",
                name: enum_def.name.clone(),
                first: model_source.clone(),
                second: enum_sources
                    .get(&enum_def.name)
                    .cloned()
                    .unwrap_or_default(),
            });
        }
    }

    debug!(
        models = output.models.len(),
        enums = output.enums.len(),
        "Transformed definitions"
    );
    Ok(output)
}

/// Names become file stems and TypeScript type names
fn ensure_identifier(name: &str, source: &str) -> Result<(), GenerationError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(GenerationError::InvalidName {
            name: name.to_string(),
            source_name: source.to_string(),
        })
    }
}

/// Record `name` as produced by `source`, failing if it is already taken
pub(crate) fn claim_name(
    taken: &mut HashMap<String, String>,
    namespace: &'static str,
    name: &str,
    source: &str,
) -> Result<(), GenerationError> {
    match taken.entry(name.to_string()) {
        Entry::Occupied(existing) => Err(GenerationError::NameCollision {
            namespace,
            name: name.to_string(),
            first: existing.get().clone(),
            second: source.to_string(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(source.to_string());
            Ok(())
        }
    }
}

/// Transform one definition into its model and the enums it declares
pub fn transform_definition(
    raw_name: &str,
    definition: &SchemaDefinition,
    resolver: &ReferenceResolver,
) -> Result<(ModelDefinition, Vec<EnumDefinition>), GenerationError> {
    let name = canonical_name(raw_name);
    let mut properties = Vec::new();
    let mut refs = Vec::new();
    let mut enum_properties = Vec::new();
    let mut enums = Vec::new();

    for (property_name, property) in definition.properties.iter().flatten() {
        let required = definition.is_required(property_name);

        match classify(property) {
            PropertyKind::Reference(reference) => {
                let context = format!("property '{raw_name}.{property_name}'");
                let target = resolver.resolve(reference, &context)?;
                refs.push(model_property(
                    property_name,
                    property,
                    ResolvedType::Reference(target),
                    required,
                ));
            }
            PropertyKind::Enum(literals) => {
                let enum_name = format!("{name}{}", capitalize(&normalize(property_name)));
                debug!(model = %name, property = %property_name, enum_name = %enum_name, "Synthesized enum");
                enums.push(build_enum(&enum_name, &name, property_name, required, literals));
                enum_properties.push(model_property(
                    property_name,
                    property,
                    ResolvedType::Enum(enum_name),
                    required,
                ));
            }
            PropertyKind::Plain => {
                let resolved = ResolvedType::from_raw(property.schema_type.as_deref());
                properties.push(model_property(property_name, property, resolved, required));
            }
        }
    }

    let ref_imports = unique_by_type(&refs);

    let model = ModelDefinition {
        name,
        raw_name: raw_name.to_string(),
        description: definition.description.clone(),
        properties,
        refs,
        ref_imports,
        enums: enum_properties,
        last: false,
    };
    Ok((model, enums))
}

fn model_property(
    name: &str,
    property: &Property,
    resolved: ResolvedType,
    required: bool,
) -> ModelProperty {
    let is_array = property.is_array();
    let items_type = match (&resolved, &property.items) {
        (ResolvedType::Array, Some(items)) => Some(map_type(items.schema_type.as_deref())),
        _ => None,
    };

    ModelProperty {
        name: name.to_string(),
        key: property_key(name),
        typescript_type: resolved.label(),
        resolved,
        is_array,
        items_type,
        required,
        description: property.description.clone(),
        last: false,
    }
}

/// First occurrence of each resolved type, in order
fn unique_by_type(refs: &[ModelProperty]) -> Vec<ModelProperty> {
    let mut seen = Vec::new();
    let mut unique = Vec::new();
    for property in refs {
        if !seen.contains(&&property.resolved) {
            seen.push(&property.resolved);
            unique.push(property.clone());
        }
    }
    unique
}

fn build_enum(
    name: &str,
    model: &str,
    property: &str,
    required: bool,
    literals: &[JsonValue],
) -> EnumDefinition {
    let mut members: Vec<EnumMember> = literals
        .iter()
        .map(|literal| EnumMember {
            name: member_identifier(&normalize(&capitalize(&literal_text(literal)))),
            value: literal.clone(),
            last: false,
        })
        .collect();
    mark_last(&mut members);

    EnumDefinition {
        name: name.to_string(),
        model: model.to_string(),
        property: property.to_string(),
        required,
        members,
        last: false,
    }
}

fn literal_text(literal: &JsonValue) -> String {
    match literal {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
