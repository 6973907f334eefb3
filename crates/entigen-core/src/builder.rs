use serde::Serialize;

///
/// FieldMetadata
/// One field as declared through the builder: column, type identity, and
/// either a primary-key mark or an explicit nullability.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldMetadata {
    pub column: String,
    pub type_name: String,
    pub primary_key: bool,
    pub nullable: Option<bool>,
}

///
/// ClassMetadataBuilder
///
/// Recorder the generated `load_metadata` drives. The mapping layer reads
/// the recorded table and field declarations to build its own schema.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ClassMetadataBuilder {
    table: Option<String>,
    fields: Vec<FieldMetadata>,
}

impl ClassMetadataBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: None,
            fields: Vec::new(),
        }
    }

    pub fn set_table(&mut self, name: &str) {
        self.table = Some(name.to_string());
    }

    /// Start a field declaration; finish it with [`FieldBuilder::build`].
    pub fn create_field(&mut self, column: &str, type_name: &str) -> FieldBuilder<'_> {
        FieldBuilder {
            builder: self,
            meta: FieldMetadata {
                column: column.to_string(),
                type_name: type_name.to_string(),
                primary_key: false,
                nullable: None,
            },
        }
    }

    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldMetadata] {
        &self.fields
    }
}

///
/// FieldBuilder
///

pub struct FieldBuilder<'a> {
    builder: &'a mut ClassMetadataBuilder,
    meta: FieldMetadata,
}

impl FieldBuilder<'_> {
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.meta.primary_key = true;
        self
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.meta.nullable = Some(nullable);
        self
    }

    pub fn build(self) {
        self.builder.fields.push(self.meta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_table_and_fields_in_declaration_order() {
        let mut builder = ClassMetadataBuilder::new();
        builder.set_table("orders");
        builder.create_field("id", "integer").primary_key().build();
        builder.create_field("total", "float").nullable(false).build();

        assert_eq!(builder.table(), Some("orders"));

        let fields = builder.fields();
        assert_eq!(fields.len(), 2);
        assert!(fields[0].primary_key);
        assert_eq!(fields[0].nullable, None);
        assert!(!fields[1].primary_key);
        assert_eq!(fields[1].nullable, Some(false));
    }

    #[test]
    fn unbuilt_field_is_not_recorded() {
        let mut builder = ClassMetadataBuilder::new();
        let _ = builder.create_field("id", "integer");

        assert!(builder.fields().is_empty());
    }
}
