use crate::{kind::FieldKind, scalar::ScalarType};
use serde::Serialize;

///
/// DefinitionKind
/// Semantic tag for base fields, declared-type identity for wrapper fields.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DefinitionKind {
    Base(FieldKind),
    Custom(&'static str),
}

///
/// Definition
/// One declared field, as exposed to consumers of the entity.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Definition {
    column: &'static str,
    kind: DefinitionKind,
    nullable: bool,
    filterable: bool,
}

impl Definition {
    #[must_use]
    pub const fn base(
        column: &'static str,
        kind: FieldKind,
        nullable: bool,
        filterable: bool,
    ) -> Self {
        Self {
            column,
            kind: DefinitionKind::Base(kind),
            nullable,
            filterable,
        }
    }

    #[must_use]
    pub fn custom<S: ScalarType>(column: &'static str, nullable: bool, filterable: bool) -> Self {
        Self {
            column,
            kind: DefinitionKind::Custom(S::NAME),
            nullable,
            filterable,
        }
    }

    #[must_use]
    pub const fn column(&self) -> &'static str {
        self.column
    }

    #[must_use]
    pub const fn kind(&self) -> DefinitionKind {
        self.kind
    }

    #[must_use]
    pub const fn nullable(&self) -> bool {
        self.nullable
    }

    #[must_use]
    pub const fn filterable(&self) -> bool {
        self.filterable
    }
}

///
/// DefinitionCollection
/// Ordered, immutable set of definitions; order is declaration order.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct DefinitionCollection(Vec<Definition>);

impl DefinitionCollection {
    #[must_use]
    pub const fn new(definitions: Vec<Definition>) -> Self {
        Self(definitions)
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Definition> {
        self.0.iter().find(|d| d.column == column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a DefinitionCollection {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Email;

    impl ScalarType for Email {
        const NAME: &'static str = "email";
        const BASE_TYPE: &'static str = "string";
    }

    #[test]
    fn collection_preserves_order_and_indexes_by_column() {
        let collection = DefinitionCollection::new(vec![
            Definition::base("id", FieldKind::Int, false, true),
            Definition::custom::<Email>("contact", true, true),
        ]);

        let columns: Vec<&str> = collection.iter().map(Definition::column).collect();
        assert_eq!(columns, ["id", "contact"]);

        let contact = collection.get("contact").expect("by column");
        assert_eq!(contact.kind(), DefinitionKind::Custom("email"));
        assert!(contact.nullable());
        assert!(contact.filterable());
    }
}
