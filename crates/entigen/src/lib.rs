//! Entigen — schema-driven entity source generation and scalar type
//! registration for relational mappers.
//!
//! This is the public meta-crate. Downstream users depend on **entigen**
//! only; generated source units reference its paths.
//!
//! It re-exports the stable public API from:
//!   - `entigen-schema` (metadata model, resolver, type registry)
//!   - `entigen-core`   (runtime vocabulary for generated units)
//!   - `entigen-build`  (source generation and type synthesis)

pub use entigen_build as build;
pub use entigen_core as core;
pub use entigen_schema as schema;

pub use entigen_build::{generate_all, generate_entity};

use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] entigen_schema::Error),

    #[error(transparent)]
    Generate(#[from] entigen_build::GenerateError),

    #[error(transparent)]
    Synthesize(#[from] entigen_build::SynthesizeError),
}

///
/// Prelude
///

pub mod prelude {
    pub use entigen_build::{EntityBuilder, TypeSynthesizer};
    pub use entigen_core::prelude::*;
    pub use entigen_schema::prelude::*;
}
