//! Build-time code generation for entigen: entity source units, scalar
//! wrapper units, and the type synthesizer that keeps the registry and the
//! generated-types directory in step.

pub mod entity;
pub mod error;
pub mod scalar;
pub mod source;
pub mod synthesize;

pub use entity::EntityBuilder;
pub use error::{GenerateError, SynthesizeError};
pub use scalar::TypeUnitBuilder;
pub use synthesize::{SynthesisReport, TypeSynthesizer};

use entigen_schema::{
    mapping::{EntityMetadata, MetadataSet},
    registry::{TypeMap, TypeRegistry},
    resolve::resolve_fields,
    validate::validate_metadata_set,
};

/// Generate the source unit for one entity.
pub fn generate_entity(
    meta: &EntityMetadata,
    set: &MetadataSet,
    types: &TypeMap,
    registry: &TypeRegistry,
) -> Result<String, GenerateError> {
    let fields = resolve_fields(meta, set, types, registry)?;
    let builder = EntityBuilder::new(&meta.entity, &meta.table, &meta.identifier, &fields);

    Ok(builder.generate())
}

/// Validate a metadata set, then generate one source unit per entity, in
/// provider order. Returns `(entity name, source)` pairs.
pub fn generate_all(
    set: &MetadataSet,
    types: &TypeMap,
    registry: &TypeRegistry,
) -> Result<Vec<(String, String)>, GenerateError> {
    validate_metadata_set(set)?;

    set.entities
        .iter()
        .map(|meta| Ok((meta.entity.clone(), generate_entity(meta, set, types, registry)?)))
        .collect()
}
