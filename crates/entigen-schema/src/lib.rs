//! Schema model for entigen: storage-type vocabulary, entity metadata,
//! field-descriptor resolution, and the scalar type registry.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod mapping;
pub mod registry;
pub mod resolve;
pub mod types;
pub mod validate;

/// Maximum length for entity schema identifiers.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum length for table names.
pub const MAX_TABLE_NAME_LEN: usize = 64;

use crate::error::{ConfigError, RegistryError, ResolveError, ValidateError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        descriptor::{FieldDescriptor, FieldTarget},
        err,
        error::ErrorList,
        mapping::{AssociationMapping, EntityMetadata, FieldMapping, MetadataSet},
        registry::{TypeKey, TypeMap, TypeRegistry},
        types::Primitive,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    RegistryError(#[from] RegistryError),

    #[error(transparent)]
    ResolveError(#[from] ResolveError),

    #[error(transparent)]
    ValidateError(#[from] ValidateError),
}
