use crate::{
    descriptor::{FieldDescriptor, FieldTarget},
    error::ResolveError,
    mapping::{AssociationMapping, EntityMetadata, FieldMapping, MetadataSet},
    registry::{TypeMap, TypeRegistry},
    types::primitive_of,
};
use std::collections::BTreeSet;

///
/// Field-descriptor resolution
///
/// Plain fields are resolved first (provider order), then associations
/// (provider order). A column declared twice fails fast; disjointness is not
/// assumed from upstream.
///

pub fn resolve_fields(
    meta: &EntityMetadata,
    set: &MetadataSet,
    types: &TypeMap,
    registry: &TypeRegistry,
) -> Result<Vec<FieldDescriptor>, ResolveError> {
    let mut fields = Vec::with_capacity(meta.fields.len() + meta.associations.len());
    let mut seen = BTreeSet::new();

    for mapping in &meta.fields {
        push_unique(
            &mut fields,
            &mut seen,
            resolve_field(meta, mapping, types, registry)?,
        )?;
    }

    for association in &meta.associations {
        push_unique(
            &mut fields,
            &mut seen,
            resolve_association(association, set, types, registry)?,
        )?;
    }

    Ok(fields)
}

fn push_unique(
    fields: &mut Vec<FieldDescriptor>,
    seen: &mut BTreeSet<String>,
    descriptor: FieldDescriptor,
) -> Result<(), ResolveError> {
    if !seen.insert(descriptor.column_name.clone()) {
        return Err(ResolveError::ColumnCollision {
            column: descriptor.column_name,
        });
    }
    fields.push(descriptor);

    Ok(())
}

fn resolve_field(
    meta: &EntityMetadata,
    mapping: &FieldMapping,
    types: &TypeMap,
    registry: &TypeRegistry,
) -> Result<FieldDescriptor, ResolveError> {
    Ok(FieldDescriptor {
        column_name: mapping.column_name.clone(),
        field_name: mapping.field_name().to_string(),
        source_type: mapping.source_type.clone(),
        target: classify(&mapping.source_type, types, registry)?,
        nullable: mapping.nullable,
        primary_key: meta.is_identifier(&mapping.column_name),
    })
}

// Join columns are resolved as required unless explicitly modeled otherwise
// upstream: nullability is forced false and the derived column is never a
// primary key, regardless of the association's own nullability.
fn resolve_association(
    association: &AssociationMapping,
    set: &MetadataSet,
    types: &TypeMap,
    registry: &TypeRegistry,
) -> Result<FieldDescriptor, ResolveError> {
    let target = set
        .get(&association.target_entity)
        .ok_or_else(|| ResolveError::UnknownTargetEntity {
            field: association.field_name.clone(),
            entity: association.target_entity.clone(),
        })?;

    let referenced = target.field(&association.referenced_column).ok_or_else(|| {
        ResolveError::UnknownReferencedColumn {
            entity: association.target_entity.clone(),
            column: association.referenced_column.clone(),
        }
    })?;

    Ok(FieldDescriptor {
        column_name: association.join_column.clone(),
        field_name: association.field_name.clone(),
        source_type: referenced.source_type.clone(),
        target: classify(&referenced.source_type, types, registry)?,
        nullable: false,
        primary_key: false,
    })
}

// Base iff the type map resolves the name outside the generated namespace
// and the classification table covers it; every other known name is a
// wrapper whose canonical identity lives in the registry.
fn classify(
    source_type: &str,
    types: &TypeMap,
    registry: &TypeRegistry,
) -> Result<FieldTarget, ResolveError> {
    if let Some(key) = types.get(source_type) {
        if !key.is_generated()
            && let Some(primitive) = primitive_of(source_type)
        {
            return Ok(FieldTarget::Base { primitive });
        }
    } else if !registry.has(source_type) {
        return Err(ResolveError::UnknownStorageType {
            name: source_type.to_string(),
        });
    }

    let path = registry
        .get(source_type)
        .ok_or_else(|| ResolveError::UnknownCustomType {
            name: source_type.to_string(),
        })?
        .clone();

    Ok(FieldTarget::Wrapper {
        class_name: path.short_name().to_string(),
        path,
    })
}
