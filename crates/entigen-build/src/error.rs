use entigen_schema::error::{RegistryError, ResolveError, ValidateError};
use thiserror::Error as ThisError;

///
/// GenerateError
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("declared type '{name}' wraps unknown base type '{base_type}'")]
    UnknownBaseType { name: String, base_type: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}

///
/// SynthesizeError
/// Fatal to the whole synthesize call; the pass rollback has already run by
/// the time one of these surfaces.
///

#[derive(Debug, ThisError)]
pub enum SynthesizeError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("synthesized unit for '{name}' does not parse: {error}")]
    Parse {
        name: String,
        #[source]
        error: syn::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
