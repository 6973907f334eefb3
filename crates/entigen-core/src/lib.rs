//! Runtime vocabulary for entigen: the traits, definitions, and builder
//! surface that generated entity units compile against and the mapping layer
//! consumes.

pub mod builder;
pub mod definition;
pub mod entity;
pub mod kind;
pub mod scalar;
pub mod value;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        builder::ClassMetadataBuilder,
        definition::{Definition, DefinitionCollection, DefinitionKind},
        entity::EntityKind,
        kind::FieldKind,
        scalar::ScalarType,
        value::Json,
    };
}
