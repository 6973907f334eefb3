use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

///
/// FieldMapping
/// One persisted column as supplied by the metadata provider.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FieldMapping {
    pub column_name: String,

    /// Accessor name; defaults to the column name when the provider omits it.
    #[serde(default)]
    pub field_name: Option<String>,

    #[serde(rename = "type")]
    pub source_type: String,

    #[serde(default)]
    pub nullable: bool,
}

impl FieldMapping {
    pub fn new(column_name: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            field_name: None,
            source_type: source_type.into(),
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        self.field_name.as_deref().unwrap_or(&self.column_name)
    }
}

///
/// AssociationMapping
/// One owned association as supplied by the metadata provider. The join
/// column's type is resolved transitively through the target entity's
/// referenced column.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AssociationMapping {
    pub field_name: String,
    pub join_column: String,
    pub target_entity: String,
    pub referenced_column: String,
}

///
/// EntityMetadata
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EntityMetadata {
    pub entity: String,
    pub table: String,

    #[serde(default)]
    pub identifier: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldMapping>,

    #[serde(default)]
    pub associations: Vec<AssociationMapping>,
}

impl EntityMetadata {
    #[must_use]
    pub fn field(&self, column_name: &str) -> Option<&FieldMapping> {
        self.fields.iter().find(|f| f.column_name == column_name)
    }

    #[must_use]
    pub fn is_identifier(&self, column_name: &str) -> bool {
        self.identifier.iter().any(|id| id == column_name)
    }
}

///
/// MetadataSet
/// Every entity the provider exposes, so association join columns can be
/// typed against their target entity.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MetadataSet {
    pub entities: Vec<EntityMetadata>,
}

impl MetadataSet {
    #[must_use]
    pub fn new(entities: Vec<EntityMetadata>) -> Self {
        Self { entities }
    }

    #[must_use]
    pub fn get(&self, entity: &str) -> Option<&EntityMetadata> {
        self.entities.iter().find(|e| e.entity == entity)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_defaults_to_column_name() {
        let mapping = FieldMapping::new("created_at", "integer");
        assert_eq!(mapping.field_name(), "created_at");

        let mut named = FieldMapping::new("customer_id", "integer");
        named.field_name = Some("customer".to_string());
        assert_eq!(named.field_name(), "customer");
    }

    #[test]
    fn metadata_set_deserializes_from_provider_json() {
        let set = MetadataSet::from_json(
            r#"[
                {
                    "entity": "Order",
                    "table": "orders",
                    "identifier": ["id"],
                    "fields": [
                        { "column_name": "id", "type": "integer" },
                        { "column_name": "total", "type": "float", "nullable": false }
                    ],
                    "associations": [
                        {
                            "field_name": "customer",
                            "join_column": "customer_id",
                            "target_entity": "Customer",
                            "referenced_column": "id"
                        }
                    ]
                }
            ]"#,
        )
        .expect("valid metadata json");

        let order = set.get("Order").expect("entity present");
        assert_eq!(order.table, "orders");
        assert!(order.is_identifier("id"));
        assert_eq!(order.associations.len(), 1);
        assert_eq!(order.field("total").expect("field").source_type, "float");
    }
}
