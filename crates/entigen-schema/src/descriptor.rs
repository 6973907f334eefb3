use crate::{registry::TypeKey, types::Primitive};
use serde::Serialize;

///
/// FieldTarget
/// Base/wrapper duality of a resolved field. Exactly one arm holds per
/// descriptor by construction.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum FieldTarget {
    /// Directly representable with a built-in primitive.
    Base { primitive: Primitive },

    /// Represented by a generated wrapper type referenced by identity.
    Wrapper { class_name: String, path: TypeKey },
}

///
/// FieldDescriptor
/// Normalized per-column metadata used uniformly for rendering. One per
/// persisted column or association-derived column; declaration order is
/// preserved through generation.
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldDescriptor {
    pub column_name: String,
    pub field_name: String,
    pub source_type: String,
    pub target: FieldTarget,
    pub nullable: bool,
    pub primary_key: bool,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn is_base_type(&self) -> bool {
        matches!(self.target, FieldTarget::Base { .. })
    }

    #[must_use]
    pub fn primitive(&self) -> Option<Primitive> {
        match &self.target {
            FieldTarget::Base { primitive } => Some(*primitive),
            FieldTarget::Wrapper { .. } => None,
        }
    }

    /// Wrapper identity, when the field is not a base type.
    #[must_use]
    pub fn wrapper(&self) -> Option<(&str, &TypeKey)> {
        match &self.target {
            FieldTarget::Base { .. } => None,
            FieldTarget::Wrapper { class_name, path } => Some((class_name, path)),
        }
    }
}
