use crate::{
    MAX_ENTITY_NAME_LEN, MAX_FIELD_NAME_LEN, MAX_TABLE_NAME_LEN, err,
    error::{ErrorList, ValidateError},
    mapping::{EntityMetadata, MetadataSet},
};
use std::collections::BTreeMap;

///
/// Metadata validation
///
/// Findings are collected across the whole set and reported together, so a
/// provider gets every problem in one pass.
///

pub fn validate_metadata_set(set: &MetadataSet) -> Result<(), ValidateError> {
    let mut errs = ErrorList::new();

    validate_entity_naming(set, &mut errs);
    for entity in &set.entities {
        validate_entity(entity, set, &mut errs);
    }

    errs.result().map_err(ValidateError::Invalid)
}

// Duplicate entity names would make association targets ambiguous.
fn validate_entity_naming(set: &MetadataSet, errs: &mut ErrorList) {
    let mut by_name: BTreeMap<&str, &str> = BTreeMap::new();

    for entity in &set.entities {
        if let Some(prev) = by_name.insert(&entity.entity, &entity.table) {
            err!(
                errs,
                "duplicate entity name '{}' for tables '{prev}' and '{}'",
                entity.entity,
                entity.table
            );
        }
    }
}

fn validate_entity(entity: &EntityMetadata, set: &MetadataSet, errs: &mut ErrorList) {
    validate_ident(errs, "entity name", &entity.entity, MAX_ENTITY_NAME_LEN);
    validate_ident(errs, "table name", &entity.table, MAX_TABLE_NAME_LEN);

    for field in &entity.fields {
        validate_ident(errs, "column name", &field.column_name, MAX_FIELD_NAME_LEN);
    }

    for id in &entity.identifier {
        if entity.field(id).is_none() {
            err!(
                errs,
                "entity '{}' identifier column '{id}' is not a declared field",
                entity.entity
            );
        }
    }

    for association in &entity.associations {
        validate_ident(
            errs,
            "join column",
            &association.join_column,
            MAX_FIELD_NAME_LEN,
        );

        if set.get(&association.target_entity).is_none() {
            err!(
                errs,
                "entity '{}' association '{}' targets unknown entity '{}'",
                entity.entity,
                association.field_name,
                association.target_entity
            );
        }
    }
}

fn validate_ident(errs: &mut ErrorList, what: &str, value: &str, max_len: usize) {
    if value.is_empty() {
        err!(errs, "{what} must not be empty");
    } else if value.len() > max_len {
        err!(errs, "{what} '{value}' exceeds {max_len} characters");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{AssociationMapping, FieldMapping};

    fn order() -> EntityMetadata {
        EntityMetadata {
            entity: "Order".to_string(),
            table: "orders".to_string(),
            identifier: vec!["id".to_string()],
            fields: vec![FieldMapping::new("id", "integer")],
            associations: Vec::new(),
        }
    }

    #[test]
    fn well_formed_set_passes() {
        let set = MetadataSet::new(vec![order()]);
        validate_metadata_set(&set).expect("valid set");
    }

    #[test]
    fn missing_identifier_field_is_reported() {
        let mut entity = order();
        entity.identifier = vec!["missing".to_string()];

        let err = validate_metadata_set(&MetadataSet::new(vec![entity]))
            .expect_err("identifier not declared");
        assert!(err.to_string().contains("identifier column 'missing'"));
    }

    #[test]
    fn findings_are_collected_not_short_circuited() {
        let mut entity = order();
        entity.table = String::new();
        entity.associations.push(AssociationMapping {
            field_name: "customer".to_string(),
            join_column: "customer_id".to_string(),
            target_entity: "Customer".to_string(),
            referenced_column: "id".to_string(),
        });

        let ValidateError::Invalid(errs) =
            validate_metadata_set(&MetadataSet::new(vec![entity])).expect_err("two findings");
        assert_eq!(errs.len(), 2);
    }

    #[test]
    fn duplicate_entity_names_are_reported() {
        let set = MetadataSet::new(vec![order(), order()]);
        let err = validate_metadata_set(&set).expect_err("duplicate names");
        assert!(err.to_string().contains("duplicate entity name 'Order'"));
    }
}
