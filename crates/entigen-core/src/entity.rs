use crate::{builder::ClassMetadataBuilder, definition::DefinitionCollection};

///
/// EntityKind
///
/// Shared capability set of every generated entity: a declarative field
/// definition list and the metadata loader the mapping layer calls while
/// building its schema.
///

pub trait EntityKind {
    /// Ordered, immutable field definitions, one per persisted column.
    fn definitions() -> DefinitionCollection;

    /// Declare table and fields on the mapping layer's builder.
    fn load_metadata(builder: &mut ClassMetadataBuilder);
}
